// crates/esg-insight-contract/tests/bundle_roundtrip.rs
// ============================================================================
// Module: Bundle Round-Trip Tests
// Description: Validate deterministic generation and fail-closed verification.
// Purpose: Ensure tampered or unsafe output layouts are always rejected.
// Dependencies: esg-insight-contract, tempfile, std
// ============================================================================

//! Bundle write/verify tests covering determinism, byte tampering, extra
//! files, and symlinked output entries.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use std::fs;
use std::io;
use std::path::Path;

use esg_insight_contract::ContractBuilder;
use esg_insight_contract::ContractError;

/// Creates a symlink to a file target.
#[cfg(unix)]
fn create_file_symlink(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(src, dst)
}

/// Returns true when symlink creation failures should be treated as skip.
#[cfg(unix)]
fn symlink_error_is_skip(err: &io::Error) -> bool {
    matches!(err.kind(), io::ErrorKind::PermissionDenied | io::ErrorKind::Unsupported)
}

#[test]
fn write_then_verify_round_trips() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempfile::tempdir()?;
    let output_dir = temp.path().join("out");
    let builder = ContractBuilder::new(output_dir.clone());
    let manifest = builder.write()?;
    assert!(!manifest.artifacts.is_empty());
    builder.verify_output(&output_dir)?;
    Ok(())
}

#[test]
fn regeneration_is_byte_identical() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempfile::tempdir()?;
    let first_dir = temp.path().join("first");
    let second_dir = temp.path().join("second");
    let first = ContractBuilder::new(first_dir).build()?;
    let second = ContractBuilder::new(second_dir).build()?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn verify_rejects_a_tampered_artifact() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempfile::tempdir()?;
    let output_dir = temp.path().join("out");
    let builder = ContractBuilder::new(output_dir.clone());
    builder.write()?;

    let bundle = builder.build()?;
    let artifact = bundle.artifacts.first().ok_or("expected at least one artifact")?;
    let artifact_path = output_dir.join(&artifact.path);
    let mut bytes = fs::read(&artifact_path)?;
    bytes.extend_from_slice(b"tampered");
    fs::write(&artifact_path, &bytes)?;

    let Err(err) = builder.verify_output(&output_dir) else {
        return Err("expected tampered artifact to be rejected".into());
    };
    assert!(matches!(err, ContractError::Generation(_)));
    Ok(())
}

#[test]
fn verify_rejects_an_unexpected_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempfile::tempdir()?;
    let output_dir = temp.path().join("out");
    let builder = ContractBuilder::new(output_dir.clone());
    builder.write()?;

    fs::write(output_dir.join("schemas").join("stray.json"), b"{}")?;

    let Err(err) = builder.verify_output(&output_dir) else {
        return Err("expected stray file to be rejected".into());
    };
    assert!(err.to_string().contains("unexpected artifact"));
    Ok(())
}

#[test]
fn verify_rejects_a_missing_artifact() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempfile::tempdir()?;
    let output_dir = temp.path().join("out");
    let builder = ContractBuilder::new(output_dir.clone());
    builder.write()?;

    fs::remove_file(output_dir.join("glossary.md"))?;

    let Err(err) = builder.verify_output(&output_dir) else {
        return Err("expected missing artifact to be rejected".into());
    };
    assert!(matches!(err, ContractError::Generation(_)));
    Ok(())
}

#[cfg(unix)]
#[test]
fn verify_rejects_a_symlinked_entry() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempfile::tempdir()?;
    let output_dir = temp.path().join("out");
    let builder = ContractBuilder::new(output_dir.clone());
    builder.write()?;

    let target = output_dir.join("contract.md");
    let link = output_dir.join("schemas").join("link.json");
    if let Err(err) = create_file_symlink(&target, &link) {
        if symlink_error_is_skip(&err) {
            return Ok(());
        }
        return Err(err.into());
    }

    let Err(err) = builder.verify_output(&output_dir) else {
        return Err("expected symlinked entry to be rejected".into());
    };
    assert!(matches!(err, ContractError::OutputPath(_) | ContractError::Generation(_)));
    Ok(())
}
