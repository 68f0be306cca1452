//! Date range representation
//!
//! A period is either an explicit (possibly open) date range or a calendar
//! month. All dates cross the boundary as `YYYY-MM-DD` with no offset.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Textual date format used at every boundary
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// A date window with optionally open ends
///
/// When both ends are present `from <= to` holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// A range open on both ends
    pub const fn open() -> Self {
        Self {
            from: None,
            to: None,
        }
    }

    /// Create a range, rejecting reversed bounds
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Option<Self> {
        match (from, to) {
            (Some(f), Some(t)) if f > t => None,
            _ => Some(Self { from, to }),
        }
    }

    /// Create a closed range
    pub fn between(from: NaiveDate, to: NaiveDate) -> Option<Self> {
        Self::new(Some(from), Some(to))
    }

    /// Check if a date falls within this range (open ends are unbounded)
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.map_or(true, |f| date >= f) && self.to.map_or(true, |t| date <= t)
    }

    /// Both ends formatted as `YYYY-MM-DD`, empty for an open end
    pub fn to_iso_strings(&self) -> (String, String) {
        (format_iso_opt(self.from), format_iso_opt(self.to))
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (from, to) = self.to_iso_strings();
        write!(f, "{}..{}", from, to)
    }
}

/// A calendar month with a 1-based month number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthYear {
    pub month: u32,
    pub year: i32,
}

impl MonthYear {
    /// The month containing a date
    pub fn of(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            year: date.year(),
        }
    }
}

impl fmt::Display for MonthYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Format a date as `YYYY-MM-DD`
pub fn format_iso(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

fn format_iso_opt(date: Option<NaiveDate>) -> String {
    date.map(format_iso).unwrap_or_default()
}

/// Anchor a calendar date at 12:00 UTC
///
/// Midday keeps the day stable under any timezone offset or DST shift.
pub fn to_midday_utc(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN + chrono::Duration::hours(12)))
}
