//! Wall-clock punch time parsing and comparison.
//!
//! Attendance exports carry every time value as an `hh:mm:ss A` string
//! (12-hour clock with meridiem suffix). This module turns those strings
//! into [`TimeOfDay`] values anchored to a single placeholder calendar
//! date, so any two of them can be subtracted as plain instants and
//! compared directly. No row spans midnight and no time zone applies.
//!
//! ## Missing punches
//!
//! Backends mark an unrecorded punch with an out-of-range sentinel such as
//! `"132:00:00 AM"`. Such strings, along with anything else that fails to
//! parse, become [`Punch::Missing`]. A missing punch is checked once here
//! and never reaches the clamp arithmetic; downstream it yields a
//! zero-credit result for the affected category.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

/// Error produced when a punch string cannot be interpreted as a time of day.
#[derive(Debug, Error)]
pub enum TimeParseError {
    #[error("empty time string")]
    Empty,
    #[error("unparseable time of day '{raw}': {source}")]
    Format {
        raw: String,
        source: chrono::format::ParseError,
    },
}

/// A wall-clock instant on the shared anchor date.
///
/// All values live on the same synthetic day, so ordering and subtraction
/// behave like plain instants without any calendar handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay(NaiveDateTime);

impl TimeOfDay {
    /// Parses an `hh:mm:ss A` string into a time of day.
    ///
    /// Out-of-range hour components (the backend's "not recorded" sentinel)
    /// fail to parse just like malformed text.
    pub fn parse(raw: &str) -> Result<Self, TimeParseError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(TimeParseError::Empty);
        }
        let time = NaiveTime::parse_from_str(raw, "%I:%M:%S %p").map_err(|source| TimeParseError::Format {
            raw: raw.to_string(),
            source,
        })?;
        Ok(Self(NaiveDateTime::new(anchor_date(), time)))
    }

    /// Builds a time of day from 24-hour clock components.
    pub fn from_hms(hour: u32, min: u32, sec: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, min, sec).map(|t| Self(NaiveDateTime::new(anchor_date(), t)))
    }

    /// Midnight on the anchor date, the collapse point for zero-length windows.
    pub fn midnight() -> Self {
        Self(NaiveDateTime::new(anchor_date(), NaiveTime::MIN))
    }

    /// Duration elapsed since an earlier time of day.
    pub fn since(&self, earlier: &TimeOfDay) -> Duration {
        self.0 - earlier.0
    }
}

/// A recorded-or-missing punch value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Punch {
    Recorded(TimeOfDay),
    Missing,
}

impl Punch {
    /// Parses an optional raw punch string.
    ///
    /// Absent fields, sentinel markers and malformed text all collapse to
    /// [`Punch::Missing`]; malformed input is logged at debug level.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(value) => match TimeOfDay::parse(value) {
                Ok(time) => Punch::Recorded(time),
                Err(e) => {
                    tracing::debug!("treating punch as missing: {}", e);
                    Punch::Missing
                }
            },
            None => Punch::Missing,
        }
    }

    /// The recorded time, if any.
    pub fn recorded(&self) -> Option<TimeOfDay> {
        match self {
            Punch::Recorded(time) => Some(*time),
            Punch::Missing => None,
        }
    }
}

// The placeholder date every punch is anchored to. The value is arbitrary;
// it only has to be the same for all punches.
fn anchor_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
}
