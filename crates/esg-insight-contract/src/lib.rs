// crates/esg-insight-contract/src/lib.rs
// ============================================================================
// Module: ESG Insight Contract
// Description: Artifact generator and checker for the published wire contract.
// Purpose: Keep schemas, examples, and docs in lockstep with the core model.
// Dependencies: cap-std, clap, esg-insight-core, jsonschema, serde, serde_jcs, serde_json,
// sha2, thiserror, time
// ============================================================================

//! ## Overview
//! This crate turns the shapes defined in `esg-insight-core` into a published
//! contract: JSON Schemas for every wire shape, canonical example payloads
//! serialized through the real encoding path, and markdown documentation of
//! the field and optionality conventions. The [`ContractBuilder`] assembles
//! those artifacts into a deterministic, digest-indexed bundle and verifies
//! an on-disk bundle fail-closed. [`validate_payload`] checks individual
//! payload documents against the schemas, which is how producer and consumer
//! test fixtures stay honest.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod bundle;
pub mod examples;
pub mod markdown;
pub mod schemas;
pub mod types;
pub mod validate;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;

use esg_insight_core::InvalidArgument;
use thiserror::Error;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use bundle::ContractBuilder;
pub use types::ContractArtifact;
pub use types::ContractBundle;
pub use types::ContractManifest;
pub use types::ManifestArtifact;
pub use validate::PayloadKind;
pub use validate::validate_payload;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Failures raised while generating, verifying, or checking contract
/// artifacts.
#[derive(Debug, Error)]
pub enum ContractError {
    /// A core model constructor rejected its inputs.
    #[error("model construction failed: {0}")]
    Model(#[from] InvalidArgument),
    /// Serializing a value into canonical JSON failed.
    #[error("serialization failed: {0}")]
    Serialization(String),
    /// A contract schema did not compile.
    #[error("schema compilation failed: {0}")]
    Schema(String),
    /// Artifact assembly or verification failed.
    #[error("artifact generation failed: {0}")]
    Generation(String),
    /// The output path is unsafe or cannot be used.
    #[error("unsafe or invalid output path: {}", .0.display())]
    OutputPath(PathBuf),
    /// An underlying filesystem operation failed.
    #[error("i/o failure: {0}")]
    Io(String),
}
