// crates/esg-insight-contract/src/validate.rs
// ============================================================================
// Module: Payload Conformance Checking
// Description: Schema registry and payload validation for every wire shape.
// Purpose: Let either side of the API check a payload against the contract.
// Dependencies: clap, esg-insight-core, jsonschema, serde_json
// ============================================================================

//! ## Overview
//! [`PayloadKind`] names each published wire shape and pairs it with its
//! schema and canonical example. [`validate_payload`] compiles the schema
//! and reports every violation with its JSON pointer, mirroring the
//! aggregate-then-report posture of the core validators.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use jsonschema::Draft;
use jsonschema::Validator;
use serde_json::Value;

use crate::ContractError;
use crate::examples;
use crate::schemas;

// ============================================================================
// SECTION: Payload Kinds
// ============================================================================

/// Published wire shapes a payload can be checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PayloadKind {
    /// One GRI disclosure data item.
    GriDataItem,
    /// One yearly time-series sample.
    TimeSeriesDataPoint,
    /// GRI data search criteria.
    GriDataSearchCriteria,
    /// One audit log record.
    AuditLog,
    /// Structured error response.
    ApiError,
    /// Field-to-message validation map.
    ValidationErrors,
    /// Legacy single-field validation record.
    #[value(name = "validation-error")]
    LegacyValidationError,
    /// Page envelope of GRI data items.
    GriDataItemPage,
    /// Page envelope of audit log records.
    AuditLogPage,
}

impl PayloadKind {
    /// All published shapes in artifact order.
    #[must_use]
    pub const fn all() -> [Self; 9] {
        [
            Self::GriDataItem,
            Self::TimeSeriesDataPoint,
            Self::GriDataSearchCriteria,
            Self::AuditLog,
            Self::ApiError,
            Self::ValidationErrors,
            Self::LegacyValidationError,
            Self::GriDataItemPage,
            Self::AuditLogPage,
        ]
    }

    /// Stable kebab-case shape name used in artifact paths and the CLI.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GriDataItem => "gri-data-item",
            Self::TimeSeriesDataPoint => "time-series-data-point",
            Self::GriDataSearchCriteria => "gri-data-search-criteria",
            Self::AuditLog => "audit-log",
            Self::ApiError => "api-error",
            Self::ValidationErrors => "validation-errors",
            Self::LegacyValidationError => "validation-error",
            Self::GriDataItemPage => "gri-data-item-page",
            Self::AuditLogPage => "audit-log-page",
        }
    }

    /// Short human-readable description used in generated docs.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::GriDataItem => "One ESG disclosure under a GRI standard, tied to a company.",
            Self::TimeSeriesDataPoint => {
                "One (year, value) sample within a GRI item's historical series."
            }
            Self::GriDataSearchCriteria => {
                "All-optional filter for querying GRI data; present fields AND together."
            }
            Self::AuditLog => "Append-only record of who performed what action, when, and from where.",
            Self::ApiError => "Structured error returned in place of a success payload.",
            Self::ValidationErrors => {
                "Aggregated field-to-message map for business validation failures."
            }
            Self::LegacyValidationError => {
                "Deprecated single-field validation record kept for older consumers."
            }
            Self::GriDataItemPage => "One page of a paginated GRI data listing.",
            Self::AuditLogPage => "One page of a paginated audit log listing.",
        }
    }

    /// Returns the JSON Schema for this shape.
    #[must_use]
    pub fn schema(self) -> Value {
        match self {
            Self::GriDataItem => schemas::gri_data_item_schema(),
            Self::TimeSeriesDataPoint => schemas::time_series_data_point_schema(),
            Self::GriDataSearchCriteria => schemas::gri_data_search_criteria_schema(),
            Self::AuditLog => schemas::audit_log_schema(),
            Self::ApiError => schemas::api_error_schema(),
            Self::ValidationErrors => schemas::validation_errors_schema(),
            Self::LegacyValidationError => schemas::legacy_validation_error_schema(),
            Self::GriDataItemPage => {
                schemas::page_response_schema("GriDataItemPage", schemas::gri_data_item_schema())
            }
            Self::AuditLogPage => {
                schemas::page_response_schema("AuditLogPage", schemas::audit_log_schema())
            }
        }
    }

    /// Returns the canonical example payload for this shape.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError`] when example construction or serialization
    /// fails.
    pub fn example(self) -> Result<Value, ContractError> {
        match self {
            Self::GriDataItem => to_wire_value(&examples::gri_data_item()?),
            Self::TimeSeriesDataPoint => {
                let item = examples::gri_data_item()?;
                let point = item.time_series_data.first().ok_or_else(|| {
                    ContractError::Generation("example item has no series".to_string())
                })?;
                to_wire_value(point)
            }
            Self::GriDataSearchCriteria => to_wire_value(&examples::gri_data_search_criteria()),
            Self::AuditLog => to_wire_value(&examples::audit_log()?),
            Self::ApiError => to_wire_value(&examples::api_error()?),
            Self::ValidationErrors => to_wire_value(&examples::validation_errors()?),
            Self::LegacyValidationError => {
                let errors = examples::validation_errors()?;
                #[allow(deprecated, reason = "legacy artifact stays published for compatibility")]
                let legacy = errors.to_legacy();
                let record = legacy.first().ok_or_else(|| {
                    ContractError::Generation("example validation map is empty".to_string())
                })?;
                to_wire_value(record)
            }
            Self::GriDataItemPage => to_wire_value(&examples::gri_data_item_page()?),
            Self::AuditLogPage => to_wire_value(&examples::audit_log_page()?),
        }
    }
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serializes an example through the production serde path.
fn to_wire_value<T: serde::Serialize>(value: &T) -> Result<Value, ContractError> {
    serde_json::to_value(value).map_err(|err| ContractError::Serialization(err.to_string()))
}

// ============================================================================
// SECTION: Payload Validation
// ============================================================================

/// Compiles a shape schema into a validator.
///
/// # Errors
///
/// Returns [`ContractError::Schema`] when the schema does not compile.
pub fn compile_schema(schema: &Value) -> Result<Validator, ContractError> {
    jsonschema::options()
        .with_draft(Draft::Draft202012)
        .build(schema)
        .map_err(|err| ContractError::Schema(err.to_string()))
}

/// Validates a payload document against a shape's schema.
///
/// Returns every violation as `pointer: message` strings; an empty list
/// means the payload conforms. Violations are data, not faults, matching the
/// split between [`ContractError`] and the core validation maps.
///
/// # Errors
///
/// Returns [`ContractError::Schema`] when the shape's schema does not
/// compile.
pub fn validate_payload(kind: PayloadKind, payload: &Value) -> Result<Vec<String>, ContractError> {
    let schema = kind.schema();
    let validator = compile_schema(&schema)?;
    let violations = validator
        .iter_errors(payload)
        .map(|error| {
            let pointer = error.instance_path().to_string();
            let location = if pointer.is_empty() { "$".to_string() } else { pointer };
            format!("{location}: {error}")
        })
        .collect();
    Ok(violations)
}
