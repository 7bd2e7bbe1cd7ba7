// crates/esg-insight-core/src/core/error.rs
// ============================================================================
// Module: ESG Insight Error Payloads
// Description: Transport error records, validation maps, and legacy adapters.
// Purpose: Keep programmer errors and business validation results separate.
// Dependencies: http, serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Two error taxonomies cross the API boundary and must never be conflated:
//!
//! - [`ApiError`] is terminal for a request: the producer returns it instead
//!   of a success payload, carrying an HTTP status, a short category label,
//!   and a message.
//! - [`ValidationErrors`] reports business-rule violations on otherwise
//!   well-formed data as a field-to-message map, aggregated so the consumer
//!   can show every problem at once.
//!
//! Structural misuse of the contract itself (impossible constructor inputs)
//! is a third, in-process concern signaled immediately via
//! [`InvalidArgument`]; it never crosses the wire.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use http::StatusCode;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde_json::Value;
use thiserror::Error;

use crate::core::time::Clock;
use crate::core::time::UtcTimestamp;

// ============================================================================
// SECTION: Construction Errors
// ============================================================================

/// Structural misuse of a contract constructor.
///
/// These are programmer errors: the inputs could never describe a valid wire
/// value, so construction fails immediately instead of producing a record
/// that violates its own invariants. Business-rule violations on well-formed
/// data are reported as [`ValidationErrors`] values instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    /// Page size was zero while elements exist.
    #[error("page size must be positive when elements exist")]
    ZeroPageSize,
    /// Page content held more items than the declared page size.
    #[error("page content exceeds page size: {count} > {size}")]
    ContentOverflow {
        /// Number of items supplied as page content.
        count: u64,
        /// Declared page size.
        size: u32,
    },
    /// Total page count did not fit the wire representation.
    #[error("page count exceeds representable range")]
    PageCountOverflow,
    /// Error message was empty or whitespace-only.
    #[error("error message must not be empty")]
    EmptyMessage,
    /// Status code is not a valid HTTP status.
    #[error("invalid HTTP status code: {status}")]
    InvalidStatus {
        /// The rejected status value.
        status: u16,
    },
    /// Validation entries named the same field twice.
    #[error("duplicate validation field: {field}")]
    DuplicateField {
        /// The duplicated field key.
        field: String,
    },
    /// Sort directive string did not follow `property,asc|desc`.
    #[error("malformed sort directive: {value}")]
    MalformedSort {
        /// The rejected directive string.
        value: String,
    },
    /// Timestamp string was not valid RFC 3339.
    #[error("malformed RFC 3339 timestamp: {value}")]
    MalformedTimestamp {
        /// The rejected timestamp string.
        value: String,
    },
    /// Date components did not name a real calendar date.
    #[error("malformed calendar date: {year:04}-{month:02}-{day:02}")]
    MalformedDate {
        /// Year component.
        year: i32,
        /// Month component (1-12).
        month: u8,
        /// Day component (1-31).
        day: u8,
    },
}

// ============================================================================
// SECTION: Status Code Wire Form
// ============================================================================

/// Serializes an HTTP status code as its numeric wire form.
#[allow(
    clippy::trivially_copy_pass_by_ref,
    reason = "serde serialize_with requires a reference signature"
)]
fn serialize_status<S>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u16(status.as_u16())
}

/// Deserializes an HTTP status code from its numeric wire form, rejecting
/// values outside the valid status range.
fn deserialize_status<'de, D>(deserializer: D) -> Result<StatusCode, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = u16::deserialize(deserializer)?;
    StatusCode::from_u16(raw).map_err(serde::de::Error::custom)
}

// ============================================================================
// SECTION: Api Error
// ============================================================================

/// Structured error response returned in place of a success payload.
///
/// # Invariants
/// - `status` is a valid HTTP status code (enforced by the type and by
///   deserialization).
/// - `message` is never empty.
/// - `timestamp` is stamped at construction from the caller-supplied clock.
/// - `details` is an opaque, category-dependent payload; it is omitted from
///   the wire encoding when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Instant the error was produced, RFC 3339 UTC.
    pub timestamp: UtcTimestamp,
    /// HTTP status code, transmitted as a number.
    #[serde(serialize_with = "serialize_status", deserialize_with = "deserialize_status")]
    pub status: StatusCode,
    /// Short category label (e.g. `"Bad Request"`, `"VALIDATION_ERROR"`).
    pub error: String,
    /// Human-readable description of the failure.
    pub message: String,
    /// Opaque structured payload whose shape depends on the error category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ApiError {
    /// Builds an error response with an explicit category label.
    ///
    /// A blank `error` label falls back to the canonical reason phrase for
    /// the status (`"Unknown"` when the status has none).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::InvalidStatus`] when `status` is outside
    /// the valid HTTP range and [`InvalidArgument::EmptyMessage`] when
    /// `message` is empty or whitespace-only.
    pub fn new(
        status: u16,
        error: impl Into<String>,
        message: impl Into<String>,
        clock: &dyn Clock,
    ) -> Result<Self, InvalidArgument> {
        let status = StatusCode::from_u16(status).map_err(|_| InvalidArgument::InvalidStatus {
            status,
        })?;
        Self::build(status, error.into(), message.into(), clock)
    }

    /// Builds an error response from a typed status, deriving the category
    /// label from the canonical reason phrase.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::EmptyMessage`] when `message` is empty or
    /// whitespace-only.
    pub fn from_status(
        status: StatusCode,
        message: impl Into<String>,
        clock: &dyn Clock,
    ) -> Result<Self, InvalidArgument> {
        Self::build(status, String::new(), message.into(), clock)
    }

    /// Attaches a category-dependent details payload.
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Shared constructor body enforcing the message and label invariants.
    fn build(
        status: StatusCode,
        error: String,
        message: String,
        clock: &dyn Clock,
    ) -> Result<Self, InvalidArgument> {
        if message.trim().is_empty() {
            return Err(InvalidArgument::EmptyMessage);
        }
        let error = if error.trim().is_empty() {
            status.canonical_reason().unwrap_or("Unknown").to_string()
        } else {
            error
        };
        Ok(Self {
            timestamp: clock.now(),
            status,
            error,
            message,
            details: None,
        })
    }
}

// ============================================================================
// SECTION: Validation Errors
// ============================================================================

/// Field-level validation failure map.
///
/// Producers aggregate every violation before responding instead of failing
/// on the first one, so consumers can surface all problems at once.
///
/// # Invariants
/// - Keys are unique field names (map semantics).
/// - Iteration order is deterministic (sorted by field name).
/// - The first message recorded for a field wins; later recordings for the
///   same field are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    /// Creates an empty validation map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a validation map from `(field, message)` entries.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::DuplicateField`] when two entries name the
    /// same field.
    pub fn from_entries<K, V>(
        entries: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Self, InvalidArgument>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut map = BTreeMap::new();
        for (field, message) in entries {
            let field = field.into();
            match map.entry(field) {
                Entry::Vacant(slot) => {
                    slot.insert(message.into());
                }
                Entry::Occupied(slot) => {
                    return Err(InvalidArgument::DuplicateField {
                        field: slot.key().clone(),
                    });
                }
            }
        }
        Ok(Self(map))
    }

    /// Records a violation for a field; returns `false` if the field already
    /// has one (the earlier message is kept).
    pub fn record(&mut self, field: impl Into<String>, message: impl Into<String>) -> bool {
        match self.0.entry(field.into()) {
            Entry::Vacant(slot) => {
                slot.insert(message.into());
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Returns `true` when no violations were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of violated fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the message recorded for a field, if any.
    #[must_use]
    pub fn message(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Iterates violations in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(field, message)| (field.as_str(), message.as_str()))
    }

    /// Converts this map into the legacy single-field record list.
    ///
    /// Legacy records carry no rejected value, so that slot is left absent.
    #[deprecated(note = "legacy encoding; new consumers read the map directly")]
    #[must_use]
    pub fn to_legacy(&self) -> Vec<ValidationError> {
        self.iter()
            .map(|(field, message)| ValidationError {
                field: field.to_string(),
                rejected_value: None,
                message: message.to_string(),
            })
            .collect()
    }

    /// Builds a validation map from legacy single-field records.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::DuplicateField`] when two records name the
    /// same field.
    #[deprecated(note = "legacy encoding; new producers build the map directly")]
    pub fn from_legacy(
        records: impl IntoIterator<Item = ValidationError>,
    ) -> Result<Self, InvalidArgument> {
        Self::from_entries(records.into_iter().map(|record| (record.field, record.message)))
    }
}

impl From<ValidationErrors> for BTreeMap<String, String> {
    fn from(errors: ValidationErrors) -> Self {
        errors.0
    }
}

// ============================================================================
// SECTION: Legacy Shapes
// ============================================================================

/// Former name of [`ApiError`], retained for consumers that predate the
/// rename. The two encodings are identical; new code must use [`ApiError`].
#[deprecated(note = "use ApiError; this alias exists for backward compatibility")]
pub type ErrorResponse = ApiError;

/// Legacy single-field validation record, superseded by [`ValidationErrors`].
///
/// # Invariants
/// - `rejected_value` is the string form of the offending input and is
///   omitted from the wire encoding when unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[deprecated(note = "use ValidationErrors; this shape exists for backward compatibility")]
pub struct ValidationError {
    /// Field that failed validation.
    pub field: String,
    /// String form of the rejected input, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejected_value: Option<String>,
    /// Human-readable description of the violation.
    pub message: String,
}
