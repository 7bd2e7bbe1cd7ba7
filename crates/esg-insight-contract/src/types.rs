// crates/esg-insight-contract/src/types.rs
// ============================================================================
// Module: Contract Artifact Types
// Description: Shared data models for generated contract artifacts.
// Purpose: Provide canonical shapes for the bundle, its manifest, and digests.
// Dependencies: serde, sha2
// ============================================================================

//! ## Overview
//! These structures describe the generated artifact bundle under
//! `docs/generated/esg-insight`: each artifact's payload, its manifest entry
//! with a SHA-256 digest, and the bundle that ties them together. They are
//! the canonical source for the published schemas, examples, and docs.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt::Write as _;

use serde::Deserialize;
use serde::Serialize;
use sha2::Digest;
use sha2::Sha256;

// ============================================================================
// SECTION: Manifest Types
// ============================================================================

/// Manifest describing the generated contract artifacts.
///
/// # Invariants
/// - When produced by [`crate::ContractBuilder`], `contract_version` matches
///   the crate version that generated the artifacts.
/// - When produced by [`crate::ContractBuilder`], `artifacts` are ordered by
///   their `path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractManifest {
    /// Contract version identifier (matches the crate version).
    pub contract_version: String,
    /// Artifacts included in the bundle, ordered by path.
    pub artifacts: Vec<ManifestArtifact>,
}

/// Manifest entry describing a single artifact.
///
/// # Invariants
/// - `path` is a safe, relative path under the output directory.
/// - `digest` is the lowercase hex SHA-256 of the artifact payload bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestArtifact {
    /// Relative artifact path under the output directory.
    pub path: String,
    /// Artifact content type.
    pub content_type: String,
    /// SHA-256 digest of the artifact payload, lowercase hex.
    pub digest: String,
}

// ============================================================================
// SECTION: Bundle Types
// ============================================================================

/// Generated contract bundle with artifacts and manifest metadata.
///
/// # Invariants
/// - When produced by [`crate::ContractBuilder`], `manifest` is derived from
///   `artifacts` and matches their digests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractBundle {
    /// Manifest describing the artifacts.
    pub manifest: ContractManifest,
    /// Artifact payloads included in the bundle.
    pub artifacts: Vec<ContractArtifact>,
}

/// Artifact payload with content bytes.
///
/// # Invariants
/// - When produced by [`crate::ContractBuilder`], `path` is a safe, relative
///   path under the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractArtifact {
    /// Relative artifact path under the output directory.
    pub path: String,
    /// MIME content type for the artifact.
    pub content_type: String,
    /// Serialized artifact payload bytes.
    pub bytes: Vec<u8>,
}

// ============================================================================
// SECTION: Digests
// ============================================================================

/// Computes the lowercase hex SHA-256 digest of artifact payload bytes.
#[must_use]
pub fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    let mut rendered = String::with_capacity(digest.len() * 2);
    for byte in digest {
        let _ = write!(rendered, "{byte:02x}");
    }
    rendered
}
