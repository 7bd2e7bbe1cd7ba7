// crates/esg-insight-contract/src/schemas.rs
// ============================================================================
// Module: Wire Shape Schemas
// Description: JSON Schemas for every ESG Insight wire shape.
// Purpose: Give producer and consumer a machine-checkable contract surface.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! Hand-authored JSON Schema (Draft 2020-12) documents for the wire shapes
//! defined in `esg-insight-core`. Schemas are strict: unknown keys are
//! rejected (`additionalProperties: false`) so drift between the two sides
//! surfaces immediately. Optional fields are expressed by leaving them out of
//! `required`; the wire convention omits them entirely when absent.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use serde_json::json;

// ============================================================================
// SECTION: Field Fragments
// ============================================================================

/// Schema fragment for database-assigned numeric identifiers.
fn identifier() -> Value {
    json!({ "type": "integer", "minimum": 1 })
}

/// Schema fragment for RFC 3339 timestamps.
fn timestamp() -> Value {
    json!({ "type": "string", "format": "date-time" })
}

/// Schema fragment for ISO-8601 calendar dates.
fn calendar_date() -> Value {
    json!({ "type": "string", "format": "date" })
}

// ============================================================================
// SECTION: GRI Shapes
// ============================================================================

/// Returns the schema for one GRI disclosure data item.
#[must_use]
pub fn gri_data_item_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "GriDataItem",
        "type": "object",
        "properties": {
            "id": identifier(),
            "standardCode": { "type": "string", "minLength": 1 },
            "disclosureCode": { "type": "string", "minLength": 1 },
            "disclosureTitle": { "type": "string" },
            "disclosureValue": { "type": "string" },
            "numericValue": { "type": "number" },
            "unit": { "type": "string" },
            "reportingPeriodStart": calendar_date(),
            "reportingPeriodEnd": calendar_date(),
            "verificationStatus": { "type": "string" },
            "verificationProvider": { "type": "string" },
            "category": { "type": "string" },
            "companyId": identifier(),
            "companyName": { "type": "string" },
            "description": { "type": "string" },
            "createdAt": timestamp(),
            "updatedAt": timestamp(),
            "dataType": { "enum": ["TIMESERIES", "TEXT", "NUMERIC"] },
            "valid": { "type": "boolean" },
            "timeSeriesData": {
                "type": "array",
                "items": time_series_data_point_schema()
            }
        },
        "required": ["standardCode", "disclosureCode", "disclosureValue", "companyId"],
        "additionalProperties": false
    })
}

/// Returns the schema for one yearly time-series sample.
#[must_use]
pub fn time_series_data_point_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "TimeSeriesDataPoint",
        "type": "object",
        "properties": {
            "id": identifier(),
            "year": { "type": "integer" },
            "value": { "type": "number" },
            "unit": { "type": "string" },
            "quarter": { "type": "integer", "minimum": 1, "maximum": 4 },
            "month": { "type": "integer", "minimum": 1, "maximum": 12 },
            "notes": { "type": "string" }
        },
        "required": ["year", "value"],
        "additionalProperties": false
    })
}

/// Returns the schema for the GRI data search criteria.
#[must_use]
pub fn gri_data_search_criteria_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "GriDataSearchCriteria",
        "type": "object",
        "properties": {
            "category": { "type": "string" },
            "standardCode": { "type": "string", "pattern": "^GRI [0-9]{3}$" },
            "disclosureCode": { "type": "string", "pattern": "^[0-9]{3}-[0-9]{1,2}$" },
            "reportingPeriodStart": calendar_date(),
            "reportingPeriodEnd": calendar_date(),
            "verificationStatus": { "type": "string" },
            "companyId": identifier(),
            "keyword": { "type": "string" },
            "sort": { "type": "string", "pattern": "^.+,(asc|desc)$" }
        },
        "additionalProperties": false
    })
}

// ============================================================================
// SECTION: Audit Shapes
// ============================================================================

/// Returns the schema for one audit log record.
#[must_use]
pub fn audit_log_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "AuditLog",
        "type": "object",
        "properties": {
            "id": identifier(),
            "entityType": { "type": "string" },
            "entityId": { "type": "string" },
            "action": { "type": "string" },
            "details": { "type": "string" },
            "username": { "type": "string" },
            "ipAddress": { "type": "string" },
            "createdAt": timestamp()
        },
        "required": ["id", "entityType", "entityId", "action", "username", "createdAt"],
        "additionalProperties": false
    })
}

// ============================================================================
// SECTION: Error Shapes
// ============================================================================

/// Returns the schema for the structured error response.
///
/// `details` is intentionally unconstrained: its shape depends on the error
/// category and is documented per category by the producer.
#[must_use]
pub fn api_error_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "ApiError",
        "type": "object",
        "properties": {
            "timestamp": timestamp(),
            "status": { "type": "integer", "minimum": 100, "maximum": 999 },
            "error": { "type": "string" },
            "message": { "type": "string", "minLength": 1 },
            "details": true
        },
        "required": ["timestamp", "status", "error", "message"],
        "additionalProperties": false
    })
}

/// Returns the schema for the field-to-message validation map.
#[must_use]
pub fn validation_errors_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "ValidationErrors",
        "type": "object",
        "additionalProperties": { "type": "string" }
    })
}

/// Returns the schema for the legacy single-field validation record.
#[must_use]
pub fn legacy_validation_error_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "ValidationError",
        "deprecated": true,
        "type": "object",
        "properties": {
            "field": { "type": "string" },
            "rejectedValue": { "type": "string" },
            "message": { "type": "string" }
        },
        "required": ["field", "message"],
        "additionalProperties": false
    })
}

// ============================================================================
// SECTION: Pagination Shapes
// ============================================================================

/// Returns the page envelope schema instantiated for a content item schema.
#[must_use]
pub fn page_response_schema(title: &str, items: Value) -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": title,
        "type": "object",
        "properties": {
            "content": { "type": "array", "items": items },
            "page": { "type": "integer", "minimum": 0 },
            "size": { "type": "integer", "minimum": 0 },
            "totalElements": { "type": "integer", "minimum": 0 },
            "totalPages": { "type": "integer", "minimum": 0 },
            "first": { "type": "boolean" },
            "last": { "type": "boolean" },
            "empty": { "type": "boolean" }
        },
        "required": [
            "content", "page", "size", "totalElements", "totalPages",
            "first", "last", "empty"
        ],
        "additionalProperties": false
    })
}
