// crates/esg-insight-core/src/core/audit.rs
// ============================================================================
// Module: Audit Log Records
// Description: Append-only records of state-changing actions.
// Purpose: Expose who performed what action, when, and from where.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Audit records are produced once per state-changing action and never
//! updated or deleted afterwards. `entityId` is a string because audited
//! entities may have non-numeric identifiers.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::AuditLogId;
use crate::core::time::UtcTimestamp;

// ============================================================================
// SECTION: Audit Records
// ============================================================================

/// Immutable record of one state-changing action.
///
/// # Invariants
/// - Append-only: never updated or deleted once created.
/// - `id` is unique across the log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogDto {
    /// Unique record identifier.
    pub id: AuditLogId,
    /// Kind of entity the action touched (e.g. `"GriDataItem"`).
    pub entity_type: String,
    /// Identifier of the touched entity, stringly typed.
    pub entity_id: String,
    /// Action verb or category (e.g. `"CREATE"`).
    pub action: String,
    /// Free-form description of what changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Actor that performed the action.
    pub username: String,
    /// Source address of the request, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    /// Instant the record was created.
    pub created_at: UtcTimestamp,
}

// ============================================================================
// SECTION: Audit Filtering
// ============================================================================

/// Filter specification for querying the audit log.
///
/// Absent fields impose no constraint; present fields combine with logical
/// AND. Blank strings count as absent, matching how query parameters arrive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogSearchCriteria {
    /// Restrict to records touching this entity kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    /// Restrict to records touching this entity identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
    /// Restrict to records with this action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// Restrict to records produced by this actor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl AuditLogSearchCriteria {
    /// Creates a criteria with no constraints (matches every record).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tests whether a record satisfies every present constraint.
    #[must_use]
    pub fn matches(&self, record: &AuditLogDto) -> bool {
        let by_type = filter_value(self.entity_type.as_deref())
            .is_none_or(|wanted| record.entity_type == wanted);
        let by_entity = filter_value(self.entity_id.as_deref())
            .is_none_or(|wanted| record.entity_id == wanted);
        let by_action =
            filter_value(self.action.as_deref()).is_none_or(|wanted| record.action == wanted);
        let by_user =
            filter_value(self.username.as_deref()).is_none_or(|wanted| record.username == wanted);
        by_type && by_entity && by_action && by_user
    }
}

/// Normalizes an optional filter string: blank values impose no constraint.
fn filter_value(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}
