//! Duration formatting and parsing for report display.
//!
//! Every duration the application shows — per-category rendered time,
//! tardiness, period totals — uses the same zero-padded `HH:MM:SS` format.
//! The hours field grows past two digits for long periods; totals are never
//! normalized into days.
//!
//! The parser is the exact inverse for whole-second durations and is
//! deliberately forgiving: a string that does not parse contributes zero
//! to whatever sum it participates in, so a single bad row can never poison
//! a period total.

use chrono::Duration;

/// Formats a duration as zero-padded `HH:MM:SS`.
///
/// Negative components clamp to zero; the hours field widens beyond two
/// digits rather than truncating.
///
/// # Examples
///
/// ```
/// use dtr::libs::formatter::format_duration;
/// use chrono::Duration;
///
/// assert_eq!(format_duration(&Duration::hours(4)), "04:00:00");
/// assert_eq!(format_duration(&(Duration::hours(3) + Duration::minutes(30))), "03:30:00");
/// assert_eq!(format_duration(&Duration::hours(120)), "120:00:00");
/// assert_eq!(format_duration(&Duration::seconds(-5)), "00:00:00");
/// ```
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;
    let secs = duration.num_seconds() % 60;

    format!("{:02}:{:02}:{:02}", hours.max(0), mins.max(0), secs.max(0))
}

/// Parses an `HH:MM:SS` string back into a duration.
///
/// The inverse of [`format_duration`] for whole-second values. Any string
/// that is not three `:`-separated integers parses as a zero duration.
pub fn parse_duration(raw: &str) -> Duration {
    let mut parts = raw.split(':');
    let hours = parts.next().and_then(|p| p.trim().parse::<i64>().ok());
    let mins = parts.next().and_then(|p| p.trim().parse::<i64>().ok());
    let secs = parts.next().and_then(|p| p.trim().parse::<i64>().ok());

    match (hours, mins, secs, parts.next()) {
        (Some(h), Some(m), Some(s), None) => Duration::hours(h) + Duration::minutes(m) + Duration::seconds(s),
        _ => Duration::zero(),
    }
}
