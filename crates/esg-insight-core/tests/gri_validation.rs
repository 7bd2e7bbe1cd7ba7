// crates/esg-insight-core/tests/gri_validation.rs
// ============================================================================
// Module: GRI Item Validation Tests
// Description: Validate batch reporting of GRI data item violations.
// Purpose: Ensure every violation surfaces in one aggregated pass.
// Dependencies: esg-insight-core
// ============================================================================

//! GRI item validation tests covering required fields, period ordering,
//! numeric consistency, and time-series integrity.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use esg_insight_core::CompanyId;
use esg_insight_core::GriDataItemDto;
use esg_insight_core::ReportDate;
use esg_insight_core::TimeSeriesDataPointDto;
use esg_insight_core::validate_gri_data_item;

fn company() -> CompanyId {
    CompanyId::from_raw(1).expect("nonzero company id")
}

fn sample_point(year: i32, value: f64) -> TimeSeriesDataPointDto {
    TimeSeriesDataPointDto {
        id: None,
        year,
        value,
        unit: None,
        quarter: None,
        month: None,
        notes: None,
    }
}

fn energy_item() -> GriDataItemDto {
    let mut item = GriDataItemDto::new("GRI 302", "302-1", "15000", company());
    item.disclosure_title = Some("Energy consumption within the organization".to_string());
    item.numeric_value = Some(15000.0);
    item.unit = Some("MWh".to_string());
    item.category = Some(GriDataItemDto::CATEGORY_ENVIRONMENTAL.to_string());
    item.reporting_period_start = ReportDate::from_ymd(2023, 1, 1).ok();
    item.reporting_period_end = ReportDate::from_ymd(2023, 12, 31).ok();
    item
}

#[test]
fn well_formed_item_passes() {
    assert_eq!(validate_gri_data_item(&energy_item()), Ok(()));
}

#[test]
fn all_violations_surface_in_one_call() {
    let mut item = energy_item();
    item.standard_code = String::new();
    item.reporting_period_start = ReportDate::from_ymd(2023, 12, 31).ok();
    item.reporting_period_end = ReportDate::from_ymd(2023, 1, 1).ok();

    let errors = validate_gri_data_item(&item).expect_err("two violations expected");
    assert_eq!(errors.len(), 2);
    assert!(errors.message("standardCode").is_some());
    assert!(errors.message("reportingPeriodEnd").is_some());
}

#[test]
fn duplicate_years_key_to_the_series_field() {
    let mut item = energy_item();
    item.time_series_data = vec![sample_point(2022, 14000.0), sample_point(2022, 15000.0)];

    let errors = validate_gri_data_item(&item).expect_err("duplicate year expected");
    let message = errors.message("timeSeriesData").expect("series violation");
    assert!(message.contains("duplicate year 2022"));
}

#[test]
fn point_units_must_match_the_item_unit() {
    let mut item = energy_item();
    let mut point = sample_point(2022, 14.0);
    point.unit = Some("GWh".to_string());
    item.time_series_data = vec![point];

    let errors = validate_gri_data_item(&item).expect_err("unit mismatch expected");
    let message = errors.message("timeSeriesData").expect("series violation");
    assert!(message.contains("GWh"));
}

#[test]
fn sub_annual_components_are_range_checked() {
    let mut item = energy_item();
    let mut point = sample_point(2022, 14.0);
    point.quarter = Some(5);
    item.time_series_data = vec![point];

    let errors = validate_gri_data_item(&item).expect_err("quarter range expected");
    assert!(errors.message("timeSeriesData").is_some());
}

#[test]
fn disclosure_value_must_mirror_the_numeric_value() {
    let mut item = energy_item();
    item.disclosure_value = "approximately 15000".to_string();

    let errors = validate_gri_data_item(&item).expect_err("numeric mismatch expected");
    assert!(errors.message("disclosureValue").is_some());
}

#[test]
fn qualitative_items_skip_the_numeric_check() {
    let mut item = energy_item();
    item.numeric_value = None;
    item.disclosure_value = "Energy policy adopted in 2021".to_string();

    assert_eq!(validate_gri_data_item(&item), Ok(()));
}

#[test]
fn latest_point_is_the_highest_year() {
    let mut item = energy_item();
    item.time_series_data =
        vec![sample_point(2021, 13.0), sample_point(2023, 15.0), sample_point(2022, 14.0)];
    let latest = item.latest_point().expect("non-empty series");
    assert_eq!(latest.year, 2023);
}

#[test]
fn parsed_numeric_value_reads_the_string_form() {
    let item = energy_item();
    assert_eq!(item.parsed_numeric_value(), Some(15000.0));

    let mut narrative = energy_item();
    narrative.numeric_value = None;
    narrative.disclosure_value = "policy adopted".to_string();
    assert_eq!(narrative.parsed_numeric_value(), None);
}
