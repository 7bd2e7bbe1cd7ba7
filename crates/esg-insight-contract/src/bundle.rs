// crates/esg-insight-contract/src/bundle.rs
// ============================================================================
// Module: Contract Bundle Builder
// Description: Generator for the ESG Insight contract artifact bundle.
// Purpose: Assemble deterministic contract outputs and write them to disk.
// Dependencies: cap-std, serde, serde_jcs, serde_json
// ============================================================================

//! ## Overview
//! The bundle builder assembles the canonical contract artifacts (schemas,
//! examples, docs, and the digest manifest) and writes them into
//! `docs/generated/esg-insight`. Output ordering is deterministic and JSON is
//! emitted with canonical key ordering, so regenerating an unchanged
//! contract is byte-identical. All writes go through a capability handle on
//! the output directory; artifact paths are validated as safe relative paths
//! and verification fails closed on any mismatch, extra file, or symlink.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use cap_std::ambient_authority;
use cap_std::fs::Dir;
use serde::Serialize;

use crate::ContractError;
use crate::markdown;
use crate::types::ContractArtifact;
use crate::types::ContractBundle;
use crate::types::ContractManifest;
use crate::types::ManifestArtifact;
use crate::types::sha256_hex;
use crate::validate::PayloadKind;

// ============================================================================
// SECTION: Contract Builder
// ============================================================================

/// Builder for the ESG Insight contract artifact bundle.
///
/// # Invariants
/// - Artifacts are deterministic and ordered by their relative path.
/// - `output_dir` is only touched through a capability handle; artifact
///   paths are validated before any write occurs.
#[derive(Debug, Clone)]
pub struct ContractBuilder {
    /// Output directory for generated artifacts.
    output_dir: PathBuf,
    /// Contract version identifier.
    contract_version: String,
}

impl ContractBuilder {
    /// Creates a new contract builder targeting the provided output directory.
    #[must_use]
    pub fn new(output_dir: PathBuf) -> Self {
        Self {
            output_dir,
            contract_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Returns the default output directory for generated artifacts.
    #[must_use]
    pub fn default_output_dir() -> PathBuf {
        PathBuf::from("docs/generated/esg-insight")
    }

    /// Builds the contract bundle without writing to disk.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError`] when example construction or serialization
    /// fails.
    pub fn build(&self) -> Result<ContractBundle, ContractError> {
        let mut artifacts = vec![
            text_artifact("contract.md", markdown::contract_markdown(), "text/markdown"),
            text_artifact("glossary.md", markdown::glossary_markdown(), "text/markdown"),
        ];
        for kind in PayloadKind::all() {
            artifacts.push(json_artifact(
                &format!("schemas/{kind}.schema.json"),
                &kind.schema(),
            )?);
            artifacts.push(json_artifact(&format!("examples/{kind}.json"), &kind.example()?)?);
        }

        artifacts.sort_by(|lhs, rhs| lhs.path.cmp(&rhs.path));
        ensure_unique_paths(&artifacts)?;

        let manifest = ContractManifest {
            contract_version: self.contract_version.clone(),
            artifacts: artifacts
                .iter()
                .map(|artifact| ManifestArtifact {
                    path: artifact.path.clone(),
                    content_type: artifact.content_type.clone(),
                    digest: sha256_hex(&artifact.bytes),
                })
                .collect(),
        };

        Ok(ContractBundle {
            manifest,
            artifacts,
        })
    }

    /// Writes the contract bundle to the configured output directory.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError`] when generation or writing fails.
    pub fn write(&self) -> Result<ContractManifest, ContractError> {
        self.write_to(&self.output_dir)
    }

    /// Writes the contract bundle to the specified output directory.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError`] when generation or writing fails.
    pub fn write_to(&self, output_dir: &Path) -> Result<ContractManifest, ContractError> {
        let bundle = self.build()?;
        let output = open_output_dir(output_dir, true)?;
        for artifact in &bundle.artifacts {
            let relative = validate_relative_path(&artifact.path)?;
            write_artifact_bytes(&output, &relative, &artifact.bytes)?;
        }
        let manifest_bytes = serialize_json_pretty(&bundle.manifest)?;
        write_artifact_bytes(&output, Path::new("index.json"), &manifest_bytes)?;
        Ok(bundle.manifest)
    }

    /// Verifies the on-disk contract bundle matches the generated bundle.
    ///
    /// Fails closed: byte mismatches, missing or extra files, and symlinks
    /// anywhere under the output directory are all rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError`] when verification fails.
    pub fn verify_output(&self, output_dir: &Path) -> Result<(), ContractError> {
        let bundle = self.build()?;
        let output = open_output_dir(output_dir, false)?;

        for artifact in &bundle.artifacts {
            let relative = validate_relative_path(&artifact.path)?;
            let actual = read_artifact_bytes(&output, &relative)?;
            if actual != artifact.bytes {
                return Err(ContractError::Generation(format!(
                    "artifact mismatch: {}",
                    artifact.path
                )));
            }
        }

        let manifest_bytes = serialize_json_pretty(&bundle.manifest)?;
        let actual_manifest = read_artifact_bytes(&output, Path::new("index.json"))?;
        if actual_manifest != manifest_bytes {
            return Err(ContractError::Generation(String::from("manifest mismatch: index.json")));
        }

        let mut expected: BTreeSet<String> =
            bundle.artifacts.iter().map(|artifact| artifact.path.clone()).collect();
        expected.insert(String::from("index.json"));
        let actual = collect_output_files(&output)?;
        for path in actual {
            if !expected.contains(&path) {
                return Err(ContractError::Generation(format!("unexpected artifact: {path}")));
            }
        }
        Ok(())
    }
}

impl Default for ContractBuilder {
    fn default() -> Self {
        Self::new(Self::default_output_dir())
    }
}

// ============================================================================
// SECTION: Artifact Helpers
// ============================================================================

/// Builds a JSON artifact with canonical key ordering and pretty formatting.
fn json_artifact<T: Serialize>(path: &str, value: &T) -> Result<ContractArtifact, ContractError> {
    Ok(ContractArtifact {
        path: path.to_string(),
        content_type: String::from("application/json"),
        bytes: serialize_json_pretty(value)?,
    })
}

/// Builds a text artifact from rendered content.
fn text_artifact(path: &str, content: String, content_type: &str) -> ContractArtifact {
    ContractArtifact {
        path: path.to_string(),
        content_type: content_type.to_string(),
        bytes: content.into_bytes(),
    }
}

/// Serializes a value into pretty JSON bytes with canonical key ordering.
fn serialize_json_pretty<T: Serialize>(value: &T) -> Result<Vec<u8>, ContractError> {
    let canonical =
        serde_jcs::to_vec(value).map_err(|err| ContractError::Serialization(err.to_string()))?;
    let canonical_value: serde_json::Value = serde_json::from_slice(&canonical)
        .map_err(|err| ContractError::Serialization(err.to_string()))?;
    let mut bytes = serde_json::to_vec_pretty(&canonical_value)
        .map_err(|err| ContractError::Serialization(err.to_string()))?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Ensures artifact paths are unique.
fn ensure_unique_paths(artifacts: &[ContractArtifact]) -> Result<(), ContractError> {
    let mut seen = BTreeSet::new();
    for artifact in artifacts {
        if !seen.insert(&artifact.path) {
            return Err(ContractError::Generation(format!(
                "duplicate artifact path: {}",
                artifact.path
            )));
        }
    }
    Ok(())
}

/// Validates that an artifact path is relative and free of traversal
/// components.
fn validate_relative_path(path: &str) -> Result<PathBuf, ContractError> {
    if path.trim().is_empty() {
        return Err(ContractError::Generation(String::from("artifact path is empty")));
    }
    let candidate = PathBuf::from(path);
    if candidate.is_absolute()
        || candidate.components().any(|component| !matches!(component, Component::Normal(_)))
    {
        return Err(ContractError::OutputPath(candidate));
    }
    Ok(candidate)
}

// ============================================================================
// SECTION: Output Directory Access
// ============================================================================

/// Opens the output directory as a capability handle, optionally creating it.
fn open_output_dir(output_dir: &Path, create_missing: bool) -> Result<Dir, ContractError> {
    if output_dir.as_os_str().is_empty() {
        return Err(ContractError::OutputPath(output_dir.to_path_buf()));
    }
    if create_missing {
        std::fs::create_dir_all(output_dir).map_err(|err| ContractError::Io(err.to_string()))?;
    }
    Dir::open_ambient_dir(output_dir, ambient_authority())
        .map_err(|_| ContractError::OutputPath(output_dir.to_path_buf()))
}

/// Writes artifact bytes through a temporary sibling and an atomic rename.
fn write_artifact_bytes(
    output: &Dir,
    relative: &Path,
    bytes: &[u8],
) -> Result<(), ContractError> {
    if let Some(parent) = relative.parent()
        && !parent.as_os_str().is_empty()
    {
        output.create_dir_all(parent).map_err(|err| ContractError::Io(err.to_string()))?;
    }
    let temp = temp_sibling(relative)?;
    if let Err(err) = output.write(&temp, bytes) {
        let _ = output.remove_file(&temp);
        return Err(ContractError::Io(err.to_string()));
    }
    if let Err(err) = output.rename(&temp, output, relative) {
        let _ = output.remove_file(&temp);
        return Err(ContractError::Io(err.to_string()));
    }
    Ok(())
}

/// Builds the temporary sibling path used for atomic writes.
fn temp_sibling(relative: &Path) -> Result<PathBuf, ContractError> {
    let name = relative
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| ContractError::OutputPath(relative.to_path_buf()))?;
    let temp_name = format!(".tmp-{name}.{}", std::process::id());
    Ok(match relative.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(temp_name),
        _ => PathBuf::from(temp_name),
    })
}

/// Reads one expected artifact back from the output directory.
fn read_artifact_bytes(output: &Dir, relative: &Path) -> Result<Vec<u8>, ContractError> {
    let metadata = output
        .symlink_metadata(relative)
        .map_err(|_| ContractError::Generation(format!("missing artifact: {}", relative.display())))?;
    if !metadata.is_file() {
        return Err(ContractError::OutputPath(relative.to_path_buf()));
    }
    output.read(relative).map_err(|err| ContractError::Io(err.to_string()))
}

/// Recursively collects file paths under the output directory, rejecting
/// symlinks outright.
fn collect_output_files(output: &Dir) -> Result<BTreeSet<String>, ContractError> {
    let mut files = BTreeSet::new();
    collect_files_recursive(output, Path::new(""), &mut files)?;
    Ok(files)
}

/// Walks one directory level, descending into child directories.
fn collect_files_recursive(
    current: &Dir,
    prefix: &Path,
    files: &mut BTreeSet<String>,
) -> Result<(), ContractError> {
    let entries = current.entries().map_err(|err| ContractError::Io(err.to_string()))?;
    for entry in entries {
        let entry = entry.map_err(|err| ContractError::Io(err.to_string()))?;
        let file_name = entry.file_name();
        let relative = if prefix.as_os_str().is_empty() {
            PathBuf::from(&file_name)
        } else {
            prefix.join(&file_name)
        };
        let file_type = entry.file_type().map_err(|err| ContractError::Io(err.to_string()))?;
        if file_type.is_symlink() {
            return Err(ContractError::OutputPath(relative));
        }
        if file_type.is_dir() {
            let child = entry.open_dir().map_err(|err| ContractError::Io(err.to_string()))?;
            collect_files_recursive(&child, &relative, files)?;
        } else if file_type.is_file() {
            let text = relative
                .to_str()
                .ok_or_else(|| ContractError::OutputPath(relative.clone()))?;
            files.insert(text.replace('\\', "/"));
        }
    }
    Ok(())
}
