// crates/esg-insight-core/tests/wire_format.rs
// ============================================================================
// Module: Wire Format Tests
// Description: Validate exact key names, optionality, and value encodings.
// Purpose: Keep the encoded JSON bit-for-field stable for both sides.
// Dependencies: esg-insight-core, serde_json
// ============================================================================

//! Wire encoding tests: camelCase keys, omitted absent optionals, RFC 3339
//! timestamps, ISO dates, numeric identifiers, and the string-typed
//! disclosure value.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use esg_insight_core::ApiError;
use esg_insight_core::AuditLogDto;
use esg_insight_core::AuditLogId;
use esg_insight_core::CompanyId;
use esg_insight_core::FixedClock;
use esg_insight_core::GriDataItemDto;
use esg_insight_core::GriDataItemId;
use esg_insight_core::GriDataType;
use esg_insight_core::PageResponse;
use esg_insight_core::ReportDate;
use esg_insight_core::TimeSeriesDataPointDto;
use esg_insight_core::UtcTimestamp;
use esg_insight_core::ValidationErrors;
use serde_json::Value;
use serde_json::json;

fn object_keys(value: &Value) -> Vec<&str> {
    value
        .as_object()
        .map(|object| object.keys().map(String::as_str).collect())
        .unwrap_or_default()
}

fn full_item() -> GriDataItemDto {
    let company = CompanyId::from_raw(7).expect("nonzero company id");
    let mut item = GriDataItemDto::new("GRI 302", "302-1", "15000", company);
    item.id = GriDataItemId::from_raw(11);
    item.disclosure_title = Some("Energy consumption within the organization".to_string());
    item.numeric_value = Some(15000.0);
    item.unit = Some("MWh".to_string());
    item.reporting_period_start = ReportDate::from_ymd(2023, 1, 1).ok();
    item.reporting_period_end = ReportDate::from_ymd(2023, 12, 31).ok();
    item.verification_status = Some("verified".to_string());
    item.verification_provider = Some("DNV".to_string());
    item.category = Some(GriDataItemDto::CATEGORY_ENVIRONMENTAL.to_string());
    item.company_name = Some("Acme Manufacturing".to_string());
    item.description = Some("Fuel and electricity usage across all sites".to_string());
    item.created_at = UtcTimestamp::parse("2025-04-07T10:15:30Z").ok();
    item.updated_at = UtcTimestamp::parse("2025-04-08T08:00:00Z").ok();
    item.data_type = Some(GriDataType::Timeseries);
    item.valid = Some(true);
    item.time_series_data = vec![TimeSeriesDataPointDto {
        id: None,
        year: 2023,
        value: 15000.0,
        unit: Some("MWh".to_string()),
        quarter: None,
        month: None,
        notes: None,
    }];
    item
}

#[test]
fn minimal_item_omits_every_absent_optional() {
    let company = CompanyId::from_raw(7).expect("nonzero company id");
    let item = GriDataItemDto::new("GRI 302", "302-1", "15000", company);
    let encoded = serde_json::to_value(&item).expect("serializable item");

    let mut keys = object_keys(&encoded);
    keys.sort_unstable();
    assert_eq!(keys, vec!["companyId", "disclosureCode", "disclosureValue", "standardCode"]);
}

#[test]
fn full_item_round_trips_unchanged() {
    let item = full_item();
    let encoded = serde_json::to_string(&item).expect("serializable item");
    let decoded: GriDataItemDto = serde_json::from_str(&encoded).expect("decodable item");
    assert_eq!(decoded, item);
}

#[test]
fn item_fields_use_exact_camel_case_keys_and_value_kinds() {
    let encoded = serde_json::to_value(full_item()).expect("serializable item");

    assert_eq!(encoded["standardCode"], json!("GRI 302"));
    assert_eq!(encoded["disclosureCode"], json!("302-1"));
    assert_eq!(encoded["disclosureValue"], json!("15000"), "always a string on the wire");
    assert_eq!(encoded["numericValue"], json!(15000.0), "numbers travel as numbers");
    assert_eq!(encoded["companyId"], json!(7), "identifiers travel as plain numbers");
    assert_eq!(encoded["id"], json!(11));
    assert_eq!(encoded["reportingPeriodStart"], json!("2023-01-01"));
    assert_eq!(encoded["reportingPeriodEnd"], json!("2023-12-31"));
    assert_eq!(encoded["createdAt"], json!("2025-04-07T10:15:30Z"));
    assert_eq!(encoded["dataType"], json!("TIMESERIES"));
    assert_eq!(encoded["timeSeriesData"][0]["year"], json!(2023));
    assert_eq!(encoded["timeSeriesData"][0]["value"], json!(15000.0));
}

#[test]
fn payload_missing_required_strings_still_decodes_for_validation() {
    let decoded: GriDataItemDto =
        serde_json::from_value(json!({"companyId": 3})).expect("decodable item");
    assert!(decoded.standard_code.is_empty());
    assert!(decoded.disclosure_value.is_empty());
    assert!(decoded.time_series_data.is_empty());
}

#[test]
fn zero_company_id_is_rejected_at_decode_time() {
    let result: Result<GriDataItemDto, _> = serde_json::from_value(json!({
        "standardCode": "GRI 302",
        "disclosureCode": "302-1",
        "disclosureValue": "15000",
        "companyId": 0
    }));
    assert!(result.is_err());
}

#[test]
fn page_envelope_uses_camel_case_metadata_keys() {
    let page = PageResponse::new(vec![1, 2, 3], 0, 10, 3).expect("valid page");
    let encoded = serde_json::to_value(&page).expect("serializable page");

    let mut keys = object_keys(&encoded);
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec!["content", "empty", "first", "last", "page", "size", "totalElements", "totalPages"]
    );
    assert_eq!(encoded["totalElements"], json!(3));
    assert_eq!(encoded["totalPages"], json!(1));
}

#[test]
fn api_error_serializes_status_as_a_number_and_omits_absent_details() {
    let at = UtcTimestamp::parse("2025-04-07T10:15:30Z").expect("valid timestamp");
    let clock = FixedClock::new(at);
    let error =
        ApiError::new(400, "Bad Request", "input failed validation", &clock).expect("valid error");
    let encoded = serde_json::to_value(&error).expect("serializable error");

    let mut keys = object_keys(&encoded);
    keys.sort_unstable();
    assert_eq!(keys, vec!["error", "message", "status", "timestamp"]);
    assert_eq!(encoded["status"], json!(400));
    assert_eq!(encoded["timestamp"], json!("2025-04-07T10:15:30Z"));
}

#[test]
fn api_error_with_impossible_status_is_rejected_at_decode_time() {
    let result: Result<ApiError, _> = serde_json::from_value(json!({
        "timestamp": "2025-04-07T10:15:30Z",
        "status": 99,
        "error": "Unknown",
        "message": "status out of range"
    }));
    assert!(result.is_err());
}

#[test]
fn validation_map_encodes_as_a_plain_object() {
    let errors = ValidationErrors::from_entries([
        ("standardCode", "required"),
        ("reportingPeriodEnd", "precedes start"),
    ])
    .expect("unique fields");
    let encoded = serde_json::to_value(&errors).expect("serializable map");
    assert_eq!(
        encoded,
        json!({
            "reportingPeriodEnd": "precedes start",
            "standardCode": "required"
        })
    );
}

#[test]
#[allow(deprecated, reason = "legacy shape is exercised for backward compatibility")]
fn legacy_validation_record_omits_an_unknown_rejected_value() {
    let record = esg_insight_core::ValidationError {
        field: "email".to_string(),
        rejected_value: None,
        message: "must be a valid address".to_string(),
    };
    let encoded = serde_json::to_value(&record).expect("serializable record");

    let mut keys = object_keys(&encoded);
    keys.sort_unstable();
    assert_eq!(keys, vec!["field", "message"]);
}

#[test]
fn audit_record_round_trips_with_camel_case_keys() {
    let record = AuditLogDto {
        id: AuditLogId::from_raw(1).expect("nonzero audit id"),
        entity_type: "GriDataItem".to_string(),
        entity_id: "42".to_string(),
        action: "UPDATE".to_string(),
        details: None,
        username: "esg.admin@example.com".to_string(),
        ip_address: None,
        created_at: UtcTimestamp::parse("2025-04-07T10:15:30Z").expect("valid timestamp"),
    };
    let encoded = serde_json::to_value(&record).expect("serializable record");

    let mut keys = object_keys(&encoded);
    keys.sort_unstable();
    assert_eq!(keys, vec!["action", "createdAt", "entityId", "entityType", "id", "username"]);

    let decoded: AuditLogDto = serde_json::from_value(encoded).expect("decodable record");
    assert_eq!(decoded, record);
}
