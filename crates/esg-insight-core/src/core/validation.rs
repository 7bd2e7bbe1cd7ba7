// crates/esg-insight-core/src/core/validation.rs
// ============================================================================
// Module: Contract Validation
// Description: Batch validators for GRI data items and search criteria.
// Purpose: Report every violation in one pass as a field-to-message map.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Validators here never fail fast: each one walks the whole record, records
//! every violation into a [`ValidationErrors`] map keyed by wire field name,
//! and returns the aggregate. Callers surface the map to the end user in one
//! response instead of a violation-at-a-time loop.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use crate::core::criteria::GriDataSearchCriteria;
use crate::core::criteria::SortDirective;
use crate::core::error::ValidationErrors;
use crate::core::gri::GriDataItemDto;

// ============================================================================
// SECTION: GRI Item Validation
// ============================================================================

/// Validates a GRI data item against the contract's business rules.
///
/// Checks required fields, reporting period ordering, numeric consistency,
/// and time-series integrity (duplicate years, unit mismatches, sub-annual
/// component ranges). Violations are keyed by wire field name; series
/// violations all key to `timeSeriesData`, where the first one found wins.
///
/// # Errors
///
/// Returns the aggregated [`ValidationErrors`] when at least one rule is
/// violated.
pub fn validate_gri_data_item(item: &GriDataItemDto) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if item.standard_code.trim().is_empty() {
        errors.record("standardCode", "standard code is required");
    }
    if item.disclosure_code.trim().is_empty() {
        errors.record("disclosureCode", "disclosure code is required");
    }
    if item.disclosure_value.trim().is_empty() {
        errors.record("disclosureValue", "disclosure value is required");
    }

    if let (Some(start), Some(end)) = (item.reporting_period_start, item.reporting_period_end)
        && end < start
    {
        errors.record("reportingPeriodEnd", "reporting period end precedes its start");
    }

    if let Some(expected) = item.numeric_value
        && item.parsed_numeric_value() != Some(expected)
    {
        errors.record(
            "disclosureValue",
            "disclosure value is not the string form of numericValue",
        );
    }

    let mut seen_years = BTreeSet::new();
    for point in &item.time_series_data {
        if !seen_years.insert(point.year) {
            errors.record("timeSeriesData", format!("duplicate year {} in series", point.year));
        }
        if let (Some(point_unit), Some(item_unit)) = (point.unit.as_deref(), item.unit.as_deref())
            && point_unit != item_unit
        {
            errors.record(
                "timeSeriesData",
                format!("unit '{point_unit}' for year {} differs from item unit", point.year),
            );
        }
        if let Some(quarter) = point.quarter
            && !(1..=4).contains(&quarter)
        {
            errors.record("timeSeriesData", format!("quarter {quarter} is outside 1-4"));
        }
        if let Some(month) = point.month
            && !(1..=12).contains(&month)
        {
            errors.record("timeSeriesData", format!("month {month} is outside 1-12"));
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

// ============================================================================
// SECTION: Criteria Validation
// ============================================================================

/// Validates a search criteria's code formats, period ordering, and sort
/// directive syntax.
///
/// Blank fields are treated as absent and skip their checks, mirroring how
/// the criteria's own match predicate treats them.
///
/// # Errors
///
/// Returns the aggregated [`ValidationErrors`] when at least one rule is
/// violated.
pub fn validate_search_criteria(criteria: &GriDataSearchCriteria) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if let Some(code) = present(criteria.standard_code.as_deref())
        && !is_standard_code(code)
    {
        errors.record("standardCode", "standard code must match 'GRI NNN' (e.g. GRI 302)");
    }
    if let Some(code) = present(criteria.disclosure_code.as_deref())
        && !is_disclosure_code(code)
    {
        errors.record("disclosureCode", "disclosure code must match 'NNN-N' (e.g. 302-1)");
    }
    if let (Some(start), Some(end)) =
        (criteria.reporting_period_start, criteria.reporting_period_end)
        && end < start
    {
        errors.record("reportingPeriodEnd", "reporting period end precedes its start");
    }
    if let Some(sort) = present(criteria.sort.as_deref())
        && SortDirective::parse(sort).is_err()
    {
        errors.record("sort", "sort directive must follow 'property,asc|desc'");
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

// ============================================================================
// SECTION: Format Helpers
// ============================================================================

/// Filters out blank optional strings.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}

/// Tests the `GRI NNN` standard code format (three-digit series number).
fn is_standard_code(code: &str) -> bool {
    code.strip_prefix("GRI ").is_some_and(|digits| {
        digits.len() == 3 && digits.chars().all(|c| c.is_ascii_digit())
    })
}

/// Tests the `NNN-N` / `NNN-NN` disclosure code format.
fn is_disclosure_code(code: &str) -> bool {
    let Some((series, index)) = code.split_once('-') else {
        return false;
    };
    series.len() == 3
        && series.chars().all(|c| c.is_ascii_digit())
        && (1..=2).contains(&index.len())
        && index.chars().all(|c| c.is_ascii_digit())
}
