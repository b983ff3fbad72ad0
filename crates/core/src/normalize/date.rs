use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

use super::NormalizeError;

/// Storage format for event dates.
const ISO_DATE: &str = "%Y-%m-%d";

/// Years representable as four unsigned digits.
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 0..=9999;

/// Date-only input formats, tried in order.
const DATE_FORMATS: &[&str] = &[ISO_DATE, "%Y/%m/%d", "%B %d, %Y", "%d %B %Y"];

/// Naive date-time input formats, tried in order.
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Normalizes a calendar date or date-time into `YYYY-MM-DD`.
///
/// Inputs carrying an offset (RFC 3339, RFC 2822) are converted to UTC before
/// the time of day is dropped. Naive date-times keep the date as written.
///
/// # Examples
///
/// ```
/// use devevent_core::normalize::normalize_date;
///
/// assert_eq!(normalize_date("2025-01-31").unwrap(), "2025-01-31");
/// assert_eq!(normalize_date("January 31, 2025").unwrap(), "2025-01-31");
/// assert!(normalize_date("not-a-date").is_err());
/// ```
pub fn normalize_date(input: &str) -> Result<String, NormalizeError> {
    parse_date(input.trim())
        .filter(|date| YEAR_RANGE.contains(&date.year()))
        .map(|date| date.format(ISO_DATE).to_string())
        .ok_or_else(|| NormalizeError::InvalidDate(input.to_string()))
}

fn parse_date(input: &str) -> Option<NaiveDate> {
    if input.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(input, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(input)
                .or_else(|_| DateTime::parse_from_rfc2822(input))
                .ok()
                .map(|dt| dt.with_timezone(&Utc).date_naive())
        })
        .or_else(|| {
            DATE_TIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
                .map(|dt| dt.date())
        })
}
