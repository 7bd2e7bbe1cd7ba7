// crates/esg-insight-core/src/core/time.rs
// ============================================================================
// Module: ESG Insight Time Model
// Description: Wire-stable timestamps, reporting dates, and the clock seam.
// Purpose: Keep every contract operation deterministic under an injected clock.
// Dependencies: serde, time
// ============================================================================

//! ## Overview
//! Timestamps cross the wire as ISO-8601 / RFC 3339 UTC strings and reporting
//! period bounds as ISO-8601 calendar dates. No contract operation reads
//! wall-clock time directly; the single stamping site ([`crate::ApiError`])
//! takes a [`Clock`] so callers control time in production and in tests.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use time::Date;
use time::Month;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::core::error::InvalidArgument;

// ============================================================================
// SECTION: Timestamps
// ============================================================================

/// UTC timestamp with an RFC 3339 wire form.
///
/// # Invariants
/// - Always UTC; offsets are normalized away at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UtcTimestamp(#[serde(with = "time::serde::rfc3339")] OffsetDateTime);

impl UtcTimestamp {
    /// Creates a timestamp from an existing datetime, normalizing to UTC.
    #[must_use]
    pub fn from_datetime(datetime: OffsetDateTime) -> Self {
        Self(datetime.to_offset(time::UtcOffset::UTC))
    }

    /// Parses an RFC 3339 timestamp string.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::MalformedTimestamp`] when the string is not
    /// a valid RFC 3339 timestamp.
    pub fn parse(value: &str) -> Result<Self, InvalidArgument> {
        OffsetDateTime::parse(value, &Rfc3339)
            .map(Self::from_datetime)
            .map_err(|_| InvalidArgument::MalformedTimestamp {
                value: value.to_string(),
            })
    }

    /// Returns the underlying UTC datetime.
    #[must_use]
    pub const fn as_datetime(self) -> OffsetDateTime {
        self.0
    }
}

impl fmt::Display for UtcTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.0.format(&Rfc3339).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

// ============================================================================
// SECTION: Reporting Dates
// ============================================================================

/// Calendar date bounding a reporting period, serialized as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReportDate(Date);

impl ReportDate {
    /// Creates a reporting date from an existing calendar date.
    #[must_use]
    pub const fn from_date(date: Date) -> Self {
        Self(date)
    }

    /// Creates a reporting date from year, month (1-12), and day components.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::MalformedDate`] when the components do not
    /// name a real calendar date.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self, InvalidArgument> {
        let month = Month::try_from(month).map_err(|_| InvalidArgument::MalformedDate {
            year,
            month,
            day,
        })?;
        Date::from_calendar_date(year, month, day).map(Self).map_err(|_| {
            InvalidArgument::MalformedDate {
                year,
                month: month.into(),
                day,
            }
        })
    }

    /// Returns the underlying calendar date.
    #[must_use]
    pub const fn as_date(self) -> Date {
        self.0
    }
}

impl fmt::Display for ReportDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// SECTION: Clock Seam
// ============================================================================

/// Source of the current time for timestamp-stamping operations.
///
/// Production code injects [`SystemClock`]; tests inject [`FixedClock`] so
/// stamped values are reproducible.
pub trait Clock {
    /// Returns the current UTC time.
    fn now(&self) -> UtcTimestamp;
}

/// Wall-clock [`Clock`] backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> UtcTimestamp {
        UtcTimestamp::from_datetime(OffsetDateTime::now_utc())
    }
}

/// Deterministic [`Clock`] that always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(UtcTimestamp);

impl FixedClock {
    /// Creates a clock pinned to the supplied instant.
    #[must_use]
    pub const fn new(at: UtcTimestamp) -> Self {
        Self(at)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> UtcTimestamp {
        self.0
    }
}
