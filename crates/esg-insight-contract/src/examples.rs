// crates/esg-insight-contract/src/examples.rs
// ============================================================================
// Module: Canonical Contract Examples
// Description: Example payloads for docs, fixtures, and conformance tests.
// Purpose: Serialize real core values so examples can never drift from the wire.
// Dependencies: esg-insight-core, serde_json, time
// ============================================================================

//! ## Overview
//! Every example is constructed as a typed `esg-insight-core` value and
//! serialized through the production serde path. The bundle publishes the
//! results under `examples/`, and the conformance tests check each one
//! against its schema, so a schema or model change that breaks the contract
//! fails the build instead of shipping.

// ============================================================================
// SECTION: Imports
// ============================================================================

use esg_insight_core::ApiError;
use esg_insight_core::AuditLogDto;
use esg_insight_core::AuditLogId;
use esg_insight_core::CompanyId;
use esg_insight_core::FixedClock;
use esg_insight_core::GriDataItemDto;
use esg_insight_core::GriDataItemId;
use esg_insight_core::GriDataSearchCriteria;
use esg_insight_core::GriDataType;
use esg_insight_core::PageResponse;
use esg_insight_core::ReportDate;
use esg_insight_core::TimeSeriesDataPointDto;
use esg_insight_core::TimeSeriesDataPointId;
use esg_insight_core::UtcTimestamp;
use esg_insight_core::ValidationErrors;
use serde_json::json;
use time::macros::date;
use time::macros::datetime;

use crate::ContractError;

// ============================================================================
// SECTION: Fixed Instants
// ============================================================================

/// Example company identifier used across all payloads.
fn example_company_id() -> Option<CompanyId> {
    CompanyId::from_raw(1)
}

/// Instant stamped on example error payloads and audit records.
fn example_instant() -> UtcTimestamp {
    UtcTimestamp::from_datetime(datetime!(2025-04-07 10:15:30 UTC))
}

// ============================================================================
// SECTION: GRI Examples
// ============================================================================

/// Canonical GRI data item: an energy-consumption disclosure with a
/// three-year series.
///
/// # Errors
///
/// Returns [`ContractError::Model`] when the fixed example inputs are
/// rejected by a core constructor.
pub fn gri_data_item() -> Result<GriDataItemDto, ContractError> {
    let company_id = example_company_id().ok_or_else(|| {
        ContractError::Generation("example company id must be non-zero".to_string())
    })?;
    let mut item = GriDataItemDto::new("GRI 302", "302-1", "15000", company_id);
    item.id = GriDataItemId::from_raw(42);
    item.disclosure_title = Some("Energy consumption within the organization".to_string());
    item.numeric_value = Some(15000.0);
    item.unit = Some("MWh".to_string());
    item.reporting_period_start = Some(ReportDate::from_date(date!(2023 - 01 - 01)));
    item.reporting_period_end = Some(ReportDate::from_date(date!(2023 - 12 - 31)));
    item.verification_status = Some("verified".to_string());
    item.verification_provider = Some("DNV".to_string());
    item.category = Some(GriDataItemDto::CATEGORY_ENVIRONMENTAL.to_string());
    item.company_name = Some("Acme Manufacturing".to_string());
    item.description = Some("Fuel and electricity usage across all sites".to_string());
    item.created_at = Some(example_instant());
    item.data_type = Some(GriDataType::Timeseries);
    item.valid = Some(true);
    item.time_series_data = vec![
        series_point(1, 2021, 17200.0),
        series_point(2, 2022, 16100.0),
        series_point(3, 2023, 15000.0),
    ];
    Ok(item)
}

/// Builds one example series point with the item's unit.
fn series_point(id: u64, year: i32, value: f64) -> TimeSeriesDataPointDto {
    TimeSeriesDataPointDto {
        id: TimeSeriesDataPointId::from_raw(id),
        year,
        value,
        unit: Some("MWh".to_string()),
        quarter: None,
        month: None,
        notes: None,
    }
}

/// Canonical search criteria: environmental energy disclosures for one
/// company, sorted by disclosure code.
#[must_use]
pub fn gri_data_search_criteria() -> GriDataSearchCriteria {
    let mut criteria = GriDataSearchCriteria::new();
    criteria.category = Some("E".to_string());
    criteria.standard_code = Some("GRI 302".to_string());
    criteria.company_id = example_company_id();
    criteria.keyword = Some("energy".to_string());
    criteria.sort = Some("disclosureCode,asc".to_string());
    criteria
}

/// Canonical one-page GRI listing wrapping [`gri_data_item`].
///
/// # Errors
///
/// Returns [`ContractError::Model`] when the fixed example inputs are
/// rejected by a core constructor.
pub fn gri_data_item_page() -> Result<PageResponse<GriDataItemDto>, ContractError> {
    Ok(PageResponse::new(vec![gri_data_item()?], 0, 10, 1)?)
}

// ============================================================================
// SECTION: Audit Examples
// ============================================================================

/// Canonical audit record: the creation of the example GRI item.
///
/// # Errors
///
/// Returns [`ContractError::Generation`] when the fixed identifiers are
/// rejected.
pub fn audit_log() -> Result<AuditLogDto, ContractError> {
    let id = AuditLogId::from_raw(7)
        .ok_or_else(|| ContractError::Generation("example audit id must be non-zero".to_string()))?;
    Ok(AuditLogDto {
        id,
        entity_type: "GriDataItem".to_string(),
        entity_id: "42".to_string(),
        action: "CREATE".to_string(),
        details: Some("standardCode=GRI 302, disclosureCode=302-1".to_string()),
        username: "esg.admin@example.com".to_string(),
        ip_address: Some("192.168.1.100".to_string()),
        created_at: example_instant(),
    })
}

/// Canonical one-page audit listing wrapping [`audit_log`].
///
/// # Errors
///
/// Returns [`ContractError::Model`] when the fixed example inputs are
/// rejected by a core constructor.
pub fn audit_log_page() -> Result<PageResponse<AuditLogDto>, ContractError> {
    Ok(PageResponse::new(vec![audit_log()?], 0, 10, 1)?)
}

// ============================================================================
// SECTION: Error Examples
// ============================================================================

/// Canonical error response: a validation failure with its field map
/// attached as category-dependent details.
///
/// # Errors
///
/// Returns [`ContractError::Model`] when the fixed example inputs are
/// rejected by a core constructor.
pub fn api_error() -> Result<ApiError, ContractError> {
    let clock = FixedClock::new(example_instant());
    let error = ApiError::new(400, "VALIDATION_ERROR", "input failed validation", &clock)?;
    Ok(error.with_details(json!({
        "standardCode": "standard code is required",
        "reportingPeriodEnd": "reporting period end precedes its start"
    })))
}

/// Canonical validation map mirroring the details of [`api_error`].
///
/// # Errors
///
/// Returns [`ContractError::Model`] when the fixed entries collide.
pub fn validation_errors() -> Result<ValidationErrors, ContractError> {
    Ok(ValidationErrors::from_entries([
        ("standardCode", "standard code is required"),
        ("reportingPeriodEnd", "reporting period end precedes its start"),
    ])?)
}
