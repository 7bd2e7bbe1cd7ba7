// crates/esg-insight-core/src/core/gri.rs
// ============================================================================
// Module: GRI Disclosure Records
// Description: GRI data items and their time-series data points.
// Purpose: Carry one ESG disclosure per company with a stable wire shape.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A [`GriDataItemDto`] is one disclosure under a GRI (Global Reporting
//! Initiative) standard, reported by one company. Qualitative disclosures
//! live in the string-typed `disclosureValue`; quantitative ones additionally
//! carry `numericValue`/`unit`, and time-series disclosures carry an ordered
//! list of [`TimeSeriesDataPointDto`] samples.
//!
//! `disclosureValue` stays a string on the wire even when it holds a number,
//! so qualitative and quantitative disclosures share one field. Use
//! [`GriDataItemDto::parsed_numeric_value`] for the numeric reading.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::CompanyId;
use crate::core::identifiers::GriDataItemId;
use crate::core::identifiers::TimeSeriesDataPointId;
use crate::core::time::ReportDate;
use crate::core::time::UtcTimestamp;

// ============================================================================
// SECTION: Data Type Classification
// ============================================================================

/// Shape classification of a disclosure's value.
///
/// # Invariants
/// - Variants serialize in UPPERCASE for wire stability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GriDataType {
    /// Value is a historical series of yearly samples.
    Timeseries,
    /// Value is narrative text.
    Text,
    /// Value is a single measured quantity.
    Numeric,
}

impl GriDataType {
    /// Returns the stable wire label for this classification.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Timeseries => "TIMESERIES",
            Self::Text => "TEXT",
            Self::Numeric => "NUMERIC",
        }
    }
}

// ============================================================================
// SECTION: Time-Series Data Points
// ============================================================================

/// One yearly sample within a GRI item's historical series.
///
/// # Invariants
/// - `year` is unique within the owning item's series.
/// - `unit`, when present, matches the owning item's unit.
/// - `quarter` is 1-4 and `month` is 1-12 when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesDataPointDto {
    /// Identifier of the persisted sample; absent before storage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TimeSeriesDataPointId>,
    /// Calendar year the sample covers.
    pub year: i32,
    /// Measured value.
    pub value: f64,
    /// Measurement unit; should match the owning item's unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Quarter within the year (1-4), for sub-annual samples.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quarter: Option<u8>,
    /// Month within the year (1-12), for sub-annual samples.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<u8>,
    /// Free-form remarks on the sample.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// ============================================================================
// SECTION: GRI Data Items
// ============================================================================

/// One GRI disclosure data point tied to a company.
///
/// # Invariants
/// - `company_id` is always present, even before the item is persisted.
/// - `reporting_period_end >= reporting_period_start` when both are present.
/// - When `numeric_value` is present, `disclosure_value` holds its string
///   representation.
///
/// The required string fields (`standard_code`, `disclosure_code`,
/// `disclosure_value`) default to empty when absent from a payload so that
/// [`crate::validate_gri_data_item`] can report every missing field in one
/// aggregated pass rather than failing at decode time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GriDataItemDto {
    /// Identifier of the persisted item; absent before storage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<GriDataItemId>,
    /// GRI standard code (e.g. `"GRI 302"`).
    #[serde(default)]
    pub standard_code: String,
    /// Disclosure code within the standard (e.g. `"302-1"`).
    #[serde(default)]
    pub disclosure_code: String,
    /// Disclosure title or summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disclosure_title: Option<String>,
    /// Raw disclosure value; always a string, even for numeric disclosures.
    #[serde(default)]
    pub disclosure_value: String,
    /// Parsed numeric value for quantitative disclosures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numeric_value: Option<f64>,
    /// Measurement unit of `numeric_value` (e.g. `"MWh"`, `"tCO2e"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// First day of the period the data covers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporting_period_start: Option<ReportDate>,
    /// Last day of the period the data covers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporting_period_end: Option<ReportDate>,
    /// External verification state of the data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_status: Option<String>,
    /// Organization that verified the data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_provider: Option<String>,
    /// ESG category code; see the `CATEGORY_*` constants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Company that reported this disclosure.
    pub company_id: CompanyId,
    /// Reporting company's display name, included for consumer convenience.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// Additional remarks on the disclosure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Instant the item was first stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<UtcTimestamp>,
    /// Instant the item was last modified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<UtcTimestamp>,
    /// Shape classification of the disclosure value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<GriDataType>,
    /// Producer-stamped validity flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
    /// Historical samples for time-series disclosures, in listing order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub time_series_data: Vec<TimeSeriesDataPointDto>,
}

impl GriDataItemDto {
    /// ESG Environmental category code (GRI 300-series disclosures).
    pub const CATEGORY_ENVIRONMENTAL: &'static str = "E";
    /// ESG Social category code (GRI 400-series disclosures).
    pub const CATEGORY_SOCIAL: &'static str = "S";
    /// ESG Governance category code (GRI 200-series disclosures).
    pub const CATEGORY_GOVERNANCE: &'static str = "G";

    /// Creates a minimal item with the required fields; everything else
    /// starts absent.
    #[must_use]
    pub fn new(
        standard_code: impl Into<String>,
        disclosure_code: impl Into<String>,
        disclosure_value: impl Into<String>,
        company_id: CompanyId,
    ) -> Self {
        Self {
            id: None,
            standard_code: standard_code.into(),
            disclosure_code: disclosure_code.into(),
            disclosure_title: None,
            disclosure_value: disclosure_value.into(),
            numeric_value: None,
            unit: None,
            reporting_period_start: None,
            reporting_period_end: None,
            verification_status: None,
            verification_provider: None,
            category: None,
            company_id,
            company_name: None,
            description: None,
            created_at: None,
            updated_at: None,
            data_type: None,
            valid: None,
            time_series_data: Vec::new(),
        }
    }

    /// Reads `disclosure_value` as a number, when it holds one.
    ///
    /// The wire shape keeps the field a string regardless; this accessor is
    /// the only numeric view of it.
    #[must_use]
    pub fn parsed_numeric_value(&self) -> Option<f64> {
        self.disclosure_value.trim().parse().ok()
    }

    /// Returns the sample with the highest year, the series' most recent
    /// reading.
    #[must_use]
    pub fn latest_point(&self) -> Option<&TimeSeriesDataPointDto> {
        self.time_series_data.iter().max_by_key(|point| point.year)
    }
}
