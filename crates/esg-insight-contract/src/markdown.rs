// crates/esg-insight-contract/src/markdown.rs
// ============================================================================
// Module: Contract Documentation
// Description: Generated markdown for the wire contract and the glossary.
// Purpose: Publish the conventions both API sides must agree on.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! Renders the human-readable half of the contract bundle. The shape list is
//! driven by [`PayloadKind`] so the docs can never list a shape the schemas
//! do not publish.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt::Write as _;

use crate::validate::PayloadKind;

// ============================================================================
// SECTION: Contract Document
// ============================================================================

/// Renders `contract.md`: wire conventions plus one section per shape.
#[must_use]
pub fn contract_markdown() -> String {
    let mut doc = String::new();
    doc.push_str("# ESG Insight Wire Contract\n\n");
    doc.push_str(
        "Shared request/response shapes for the ESG Insight reporting API. The \
         backend producer and frontend consumer both build against these \
         definitions; the JSON Schemas under `schemas/` are the machine-checkable \
         form and the payloads under `examples/` are canonical fixtures.\n\n",
    );

    doc.push_str("## Encoding conventions\n\n");
    doc.push_str(
        "- Field names are exact camelCase keys; no case transformation is applied \
         on either side.\n\
         - Optional fields are **omitted** from the encoding when absent. `null` is \
         never written for an absent field, and schemas reject unknown keys.\n\
         - Timestamps are RFC 3339 UTC strings; reporting period bounds are \
         ISO-8601 calendar dates (`YYYY-MM-DD`).\n\
         - Numeric fields travel as JSON numbers. The one exception is \
         `disclosureValue`, which is always a string so qualitative and \
         quantitative disclosures share a field.\n\
         - Identifiers are positive integers and travel as plain numbers.\n\n",
    );

    doc.push_str("## Error taxonomies\n\n");
    doc.push_str(
        "`api-error` is terminal for a request and replaces the success payload. \
         `validation-errors` reports business-rule violations on otherwise \
         well-formed data, aggregated so every problem surfaces in one response. \
         The two must not be conflated: a producer returns `api-error` with the \
         validation map attached as `details` when rejecting a submission.\n\n",
    );

    doc.push_str("## Shapes\n\n");
    for kind in PayloadKind::all() {
        let _ = writeln!(doc, "### `{kind}`\n");
        let _ = writeln!(doc, "{}\n", kind.describe());
        let _ = writeln!(
            doc,
            "Schema: `schemas/{kind}.schema.json`. Example: `examples/{kind}.json`.\n"
        );
    }

    doc.push_str("## Deprecated shapes\n\n");
    doc.push_str(
        "`validation-error` (single-field record) and the former `ErrorResponse` \
         name for `api-error` are kept only for consumers that predate the current \
         contract. New integrations must use `validation-errors` and `api-error`.\n",
    );
    doc
}

// ============================================================================
// SECTION: Glossary Document
// ============================================================================

/// Renders `glossary.md`: domain terms used across the contract.
#[must_use]
pub fn glossary_markdown() -> String {
    let terms: [(&str, &str); 6] = [
        (
            "GRI",
            "Global Reporting Initiative, a standard taxonomy of sustainability \
             disclosure codes (e.g. GRI 302 covers energy).",
        ),
        (
            "Disclosure",
            "One reportable data point under a GRI standard, such as energy \
             consumption within the organization (302-1).",
        ),
        (
            "ESG category",
            "Single-letter classification of a disclosure: E (environmental), \
             S (social), or G (governance).",
        ),
        (
            "DTO",
            "A boundary-crossing data record with no behavior, used to exchange \
             state between producer and consumer.",
        ),
        (
            "Audit log",
            "Append-only record of who performed what action, when, and from \
             where; records are never updated or deleted.",
        ),
        (
            "Reporting period",
            "The calendar date range a disclosure's data covers, bounded by \
             reportingPeriodStart and reportingPeriodEnd.",
        ),
    ];

    let mut doc = String::new();
    doc.push_str("# ESG Insight Glossary\n\n");
    for (term, definition) in terms {
        let _ = writeln!(doc, "- **{term}**: {definition}");
    }
    doc
}
