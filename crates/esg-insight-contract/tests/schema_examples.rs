// crates/esg-insight-contract/tests/schema_examples.rs
// ============================================================================
// Module: Schema Conformance Tests
// Description: Validate examples against schemas and manifest integrity.
// Purpose: Keep published fixtures and schemas from drifting apart.
// Dependencies: esg-insight-contract
// ============================================================================

//! Conformance tests: every canonical example validates against its schema,
//! and bundle manifests stay ordered, unique, and digest-accurate.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use esg_insight_contract::ContractBuilder;
use esg_insight_contract::PayloadKind;
use esg_insight_contract::types::sha256_hex;
use esg_insight_contract::validate_payload;

#[test]
fn every_example_validates_against_its_schema() -> Result<(), Box<dyn std::error::Error>> {
    for kind in PayloadKind::all() {
        let example = kind.example()?;
        let violations = validate_payload(kind, &example)?;
        if !violations.is_empty() {
            return Err(format!("{kind} example violates its schema: {violations:?}").into());
        }
    }
    Ok(())
}

#[test]
fn bundle_publishes_schema_and_example_per_shape() -> Result<(), Box<dyn std::error::Error>> {
    let bundle = ContractBuilder::default().build()?;
    for kind in PayloadKind::all() {
        let schema_path = format!("schemas/{kind}.schema.json");
        let example_path = format!("examples/{kind}.json");
        for expected in [schema_path, example_path] {
            if !bundle.artifacts.iter().any(|artifact| artifact.path == expected) {
                return Err(format!("bundle is missing {expected}").into());
            }
        }
    }
    Ok(())
}

#[test]
fn manifest_paths_are_sorted_and_unique() -> Result<(), Box<dyn std::error::Error>> {
    let bundle = ContractBuilder::default().build()?;
    let paths: Vec<&str> =
        bundle.manifest.artifacts.iter().map(|artifact| artifact.path.as_str()).collect();
    let mut sorted = paths.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(paths, sorted);
    Ok(())
}

#[test]
fn manifest_digests_match_artifact_bytes() -> Result<(), Box<dyn std::error::Error>> {
    let bundle = ContractBuilder::default().build()?;
    assert_eq!(bundle.manifest.artifacts.len(), bundle.artifacts.len());
    for (entry, artifact) in bundle.manifest.artifacts.iter().zip(&bundle.artifacts) {
        assert_eq!(entry.path, artifact.path);
        assert_eq!(entry.digest, sha256_hex(&artifact.bytes));
    }
    Ok(())
}

#[test]
fn contract_markdown_documents_every_shape() -> Result<(), Box<dyn std::error::Error>> {
    let bundle = ContractBuilder::default().build()?;
    let contract = bundle
        .artifacts
        .iter()
        .find(|artifact| artifact.path == "contract.md")
        .ok_or("contract.md missing from bundle")?;
    let text = String::from_utf8(contract.bytes.clone())?;
    for kind in PayloadKind::all() {
        if !text.contains(kind.as_str()) {
            return Err(format!("contract.md does not mention {kind}").into());
        }
    }
    assert!(text.contains("omitted"), "the absent-field convention must be documented");
    Ok(())
}
