//! Formatting helpers shared by the engine and the display collaborators.
//!
//! These are pure functions: durations in, compact strings out.

use chrono::NaiveDate;

/// Rounds a percentage to one decimal place.
///
/// Every derived percent in the engine goes through this so that the
/// partition and the boundary test agree on the same grid.
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Formats milliseconds as a compact countdown string.
///
/// The hour field is dropped when zero and is never padded. Minutes are
/// zero-padded and shown whenever hours are present or minutes are non-zero.
/// Seconds are always two digits.
///
/// ```
/// use timebar_core::format_duration;
///
/// assert_eq!(format_duration(0), "00");
/// assert_eq!(format_duration(65_000), "01:05");
/// assert_eq!(format_duration(3_665_000), "1:01:05");
/// ```
#[must_use]
pub fn format_duration(millis: u64) -> String {
    let total_seconds = millis / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else if minutes > 0 {
        format!("{minutes:02}:{seconds:02}")
    } else {
        format!("{seconds:02}")
    }
}

/// Converts a millisecond projection to a displayable count, clamping
/// negative and non-finite values to zero.
#[must_use]
pub fn millis_for_display(millis: f64) -> u64 {
    if millis.is_finite() && millis > 0.0 {
        millis.floor() as u64
    } else {
        0
    }
}

/// Formats a progression percentage (e.g. 12.34 -> "12.3%").
#[must_use]
pub fn format_percent(percent: f64) -> String {
    format!("{:.1}%", percent.clamp(0.0, 100.0))
}

/// Formats the date header of an agenda using a chrono format string.
#[must_use]
pub fn format_date(date: NaiveDate, format: &str) -> String {
    date.format(format).to_string()
}
