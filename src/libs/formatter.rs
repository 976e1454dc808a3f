//! Timestamp and duration formatting for season statistics.
//!
//! All functions here are stateless. Observation timestamps are parsed and
//! rendered with a fixed pattern, and accumulated active time is rendered as
//! an hours/minutes/seconds string for reports, tables, and exports.
//!
//! ## Format Specifications
//!
//! ### Timestamp Format
//! Observation timestamps follow `yyyy-MM-dd HH:mm:ss.SSS±HH:MM`:
//! - Four-digit year, two-digit month and day
//! - 24-hour time with a mandatory three-digit millisecond fraction
//! - Explicit UTC offset with a colon
//!
//! ### Duration Format
//! Durations follow the "HH:MM:SS" pattern:
//! - Each component is zero-padded to 2 digits
//! - Hours are never wrapped, so 30 hours renders as "30:00:00"
//! - Components use truncating integer arithmetic, so negative totals render
//!   with a sign on the affected components
//!
//! ### Examples
//! - 600 seconds → "00:10:00"
//! - 3661 seconds → "01:01:01"
//! - 90000 seconds → "25:00:00"
//!
//! ## Examples
//!
//! ```rust
//! use fieldstat::libs::formatter::{format_duration, format_timestamp, parse_timestamp};
//!
//! let instant = parse_timestamp("2023-06-01 08:15:30.250-05:00").unwrap();
//! assert_eq!(format_timestamp(&instant), "2023-06-01 08:15:30.250-05:00");
//! assert_eq!(format_duration(3661), "01:01:01");
//! ```

use chrono::{DateTime, FixedOffset, ParseError};

/// chrono pattern equivalent to `yyyy-MM-dd HH:mm:ss.SSS±HH:MM`.
pub const TIME_FORMAT_PATTERN: &str = "%Y-%m-%d %H:%M:%S.%3f%:z";

/// Calendar day label (month-day-year) used for the busiest-day statistic.
pub const DAY_FORMAT_PATTERN: &str = "%m-%d-%Y";

/// Parses an observation timestamp into an absolute instant.
///
/// The offset carried by the string is preserved so that formatting the
/// result yields the same text back.
///
/// # Errors
///
/// Returns the underlying [`ParseError`] when the text does not match
/// [`TIME_FORMAT_PATTERN`] exactly.
pub fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>, ParseError> {
    DateTime::parse_from_str(value, TIME_FORMAT_PATTERN)
}

/// Renders an instant with [`TIME_FORMAT_PATTERN`].
pub fn format_timestamp(instant: &DateTime<FixedOffset>) -> String {
    instant.format(TIME_FORMAT_PATTERN).to_string()
}

/// Formats a number of seconds as "HH:MM:SS".
///
/// Hours may exceed two digits and are not clamped to a day.
///
/// ```rust
/// use fieldstat::libs::formatter::format_duration;
///
/// assert_eq!(format_duration(0), "00:00:00");
/// assert_eq!(format_duration(300), "00:05:00");
/// assert_eq!(format_duration(360_000), "100:00:00");
/// ```
pub fn format_duration(total_seconds: i64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
