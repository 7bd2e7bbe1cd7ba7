// crates/esg-insight-core/src/lib.rs
// ============================================================================
// Module: ESG Insight Core
// Description: Canonical data-contract model for the ESG Insight reporting API.
// Purpose: Give producer and consumer one shared definition of every wire shape.
// Dependencies: http, serde, serde_json, thiserror, time
// ============================================================================

//! ## Overview
//! This crate defines the request/response shapes exchanged at the ESG Insight
//! API boundary: paginated listings, error payloads, field-level validation
//! maps, audit log records, GRI disclosure data items, time-series data
//! points, and search criteria. All types are immutable value records with
//! stable camelCase wire keys; optional fields are omitted from the encoding
//! when absent.
//!
//! The crate carries no transport, storage, or business-rule machinery. The
//! only operations are pure constructors, validators, and predicates; the one
//! wall-clock concern (`ApiError` timestamps) is routed through an injectable
//! [`Clock`] so every operation stays deterministic under test.

pub mod core;

pub use crate::core::audit::AuditLogDto;
pub use crate::core::audit::AuditLogSearchCriteria;
pub use crate::core::criteria::GriDataSearchCriteria;
pub use crate::core::criteria::SortDir;
pub use crate::core::criteria::SortDirective;
pub use crate::core::error::ApiError;
#[allow(deprecated, reason = "legacy shapes stay reachable for backward compatibility")]
pub use crate::core::error::ErrorResponse;
pub use crate::core::error::InvalidArgument;
#[allow(deprecated, reason = "legacy shapes stay reachable for backward compatibility")]
pub use crate::core::error::ValidationError;
pub use crate::core::error::ValidationErrors;
pub use crate::core::gri::GriDataItemDto;
pub use crate::core::gri::GriDataType;
pub use crate::core::gri::TimeSeriesDataPointDto;
pub use crate::core::identifiers::AuditLogId;
pub use crate::core::identifiers::CompanyId;
pub use crate::core::identifiers::GriDataItemId;
pub use crate::core::identifiers::TimeSeriesDataPointId;
pub use crate::core::page::PageResponse;
pub use crate::core::time::Clock;
pub use crate::core::time::FixedClock;
pub use crate::core::time::ReportDate;
pub use crate::core::time::SystemClock;
pub use crate::core::time::UtcTimestamp;
pub use crate::core::validation::validate_gri_data_item;
pub use crate::core::validation::validate_search_criteria;
