// crates/esg-insight-core/src/core/criteria.rs
// ============================================================================
// Module: GRI Search Criteria
// Description: Filter specification and match predicate for GRI data items.
// Purpose: Let consumers express queries the producer can evaluate uniformly.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Every criteria field is optional; an absent (or blank) field imposes no
//! constraint and present fields combine with logical AND. Codes, ids, and
//! status match exactly; the keyword matches case-insensitively against title
//! and description; period bounds demand containment of the item's reporting
//! period. The predicate is therefore monotonic: adding a constraint can only
//! shrink the matched set.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::core::error::InvalidArgument;
use crate::core::gri::GriDataItemDto;
use crate::core::identifiers::CompanyId;
use crate::core::time::ReportDate;

// ============================================================================
// SECTION: Sort Directives
// ============================================================================

/// Sort direction half of a [`SortDirective`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}

impl SortDir {
    /// Returns the stable wire label for this direction.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Parsed form of the `"property,direction"` sort string carried by
/// [`GriDataSearchCriteria::sort`] (e.g. `"disclosureCode,asc"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortDirective {
    /// Wire name of the property to order by.
    pub property: String,
    /// Direction to order in.
    pub direction: SortDir,
}

impl SortDirective {
    /// Parses a `"property,asc|desc"` directive string.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::MalformedSort`] when the string has no
    /// comma, a blank property, or an unknown direction.
    pub fn parse(value: &str) -> Result<Self, InvalidArgument> {
        let malformed = || InvalidArgument::MalformedSort {
            value: value.to_string(),
        };
        let (property, direction) = value.split_once(',').ok_or_else(malformed)?;
        let property = property.trim();
        if property.is_empty() {
            return Err(malformed());
        }
        let direction = match direction.trim() {
            "asc" => SortDir::Asc,
            "desc" => SortDir::Desc,
            _ => return Err(malformed()),
        };
        Ok(Self {
            property: property.to_string(),
            direction,
        })
    }
}

impl fmt::Display for SortDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.property, self.direction.as_str())
    }
}

// ============================================================================
// SECTION: Search Criteria
// ============================================================================

/// Filter specification for querying GRI data items.
///
/// # Invariants
/// - Absence of a field means no filter on that dimension; blank strings
///   count as absent.
/// - Present fields combine with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GriDataSearchCriteria {
    /// Restrict to one ESG category code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Restrict to one GRI standard code (exact match).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard_code: Option<String>,
    /// Restrict to one disclosure code (exact match).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disclosure_code: Option<String>,
    /// Lower bound the item's reporting period must start at or after.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporting_period_start: Option<ReportDate>,
    /// Upper bound the item's reporting period must end at or before.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporting_period_end: Option<ReportDate>,
    /// Restrict to one verification status (exact match).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_status: Option<String>,
    /// Restrict to one reporting company.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<CompanyId>,
    /// Case-insensitive substring searched in title and description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    /// Sort directive string, `"property,asc|desc"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

impl GriDataSearchCriteria {
    /// Creates a criteria with no constraints (matches every item).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tests whether an item satisfies every present constraint.
    #[must_use]
    pub fn matches(&self, item: &GriDataItemDto) -> bool {
        if let Some(category) = filter_value(self.category.as_deref())
            && item.category.as_deref() != Some(category)
        {
            return false;
        }
        if let Some(code) = filter_value(self.standard_code.as_deref())
            && item.standard_code != code
        {
            return false;
        }
        if let Some(code) = filter_value(self.disclosure_code.as_deref())
            && item.disclosure_code != code
        {
            return false;
        }
        if let Some(status) = filter_value(self.verification_status.as_deref())
            && item.verification_status.as_deref() != Some(status)
        {
            return false;
        }
        if let Some(company_id) = self.company_id
            && item.company_id != company_id
        {
            return false;
        }
        if let Some(bound) = self.reporting_period_start
            && !item.reporting_period_start.is_some_and(|start| start >= bound)
        {
            return false;
        }
        if let Some(bound) = self.reporting_period_end
            && !item.reporting_period_end.is_some_and(|end| end <= bound)
        {
            return false;
        }
        if let Some(keyword) = filter_value(self.keyword.as_deref()) {
            let in_title = contains_ignore_case(item.disclosure_title.as_deref(), keyword);
            let in_description = contains_ignore_case(item.description.as_deref(), keyword);
            if !in_title && !in_description {
                return false;
            }
        }
        true
    }

    /// Parses the sort field into a [`SortDirective`].
    ///
    /// Absent or blank sort strings yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::MalformedSort`] when a non-blank sort
    /// string does not follow `property,asc|desc`.
    pub fn parsed_sort(&self) -> Result<Option<SortDirective>, InvalidArgument> {
        filter_value(self.sort.as_deref()).map(SortDirective::parse).transpose()
    }
}

// ============================================================================
// SECTION: Match Helpers
// ============================================================================

/// Normalizes an optional filter string: blank values impose no constraint.
fn filter_value(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}

/// Case-insensitive substring test against an optional field.
fn contains_ignore_case(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|text| text.to_lowercase().contains(&needle.to_lowercase()))
}
