use std::sync::LazyLock;

use regex::Regex;

use super::NormalizeError;

static TIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{1,2}):([0-9]{2})$").expect("valid time pattern"));

/// Normalizes a 24-hour clock time into zero-padded `HH:MM`.
///
/// Only `H:MM` and `HH:MM` are accepted. AM/PM suffixes, seconds and offsets
/// are format errors; hours above 23 or minutes above 59 are range errors.
///
/// # Examples
///
/// ```
/// use devevent_core::normalize::normalize_time;
///
/// assert_eq!(normalize_time("9:00").unwrap(), "09:00");
/// assert!(normalize_time("24:00").is_err());
/// ```
pub fn normalize_time(input: &str) -> Result<String, NormalizeError> {
    let trimmed = input.trim();
    let captures = TIME_PATTERN
        .captures(trimmed)
        .ok_or_else(|| NormalizeError::InvalidTimeFormat(input.to_string()))?;

    // Both groups are one or two ASCII digits, so parsing cannot fail.
    let hour: u32 = captures[1].parse().unwrap_or(u32::MAX);
    let minute: u32 = captures[2].parse().unwrap_or(u32::MAX);

    if hour > 23 || minute > 59 {
        return Err(NormalizeError::TimeOutOfRange(input.to_string()));
    }

    Ok(format!("{hour:02}:{minute:02}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_single_digit_hour_is_padded() {
        assert_eq!(normalize_time("9:00").unwrap(), "09:00");
    }

    #[test]
    fn test_last_minute_of_day() {
        assert_eq!(normalize_time("23:59").unwrap(), "23:59");
    }

    #[test]
    fn test_midnight() {
        assert_eq!(normalize_time("0:00").unwrap(), "00:00");
        assert_eq!(normalize_time("00:00").unwrap(), "00:00");
    }

    #[test]
    fn test_hour_out_of_range() {
        assert_eq!(
            normalize_time("24:00"),
            Err(NormalizeError::TimeOutOfRange("24:00".to_string()))
        );
    }

    #[test]
    fn test_minute_out_of_range() {
        assert_eq!(
            normalize_time("12:60"),
            Err(NormalizeError::TimeOutOfRange("12:60".to_string()))
        );
    }

    #[test]
    fn test_single_digit_minute_is_format_error() {
        assert_eq!(
            normalize_time("9:0"),
            Err(NormalizeError::InvalidTimeFormat("9:0".to_string()))
        );
    }

    #[test]
    fn test_rejects_suffixes_and_seconds() {
        for input in ["9:00 AM", "9:00pm", "09:00:00", "09:00Z", "09:00+02:00", "", "0900"] {
            assert!(
                matches!(
                    normalize_time(input),
                    Err(NormalizeError::InvalidTimeFormat(_))
                ),
                "{input:?} should be a format error"
            );
        }
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(normalize_time(" 7:30 ").unwrap(), "07:30");
    }

    #[test]
    fn test_normalized_time_is_idempotent() {
        let once = normalize_time("7:05").unwrap();
        assert_eq!(normalize_time(&once).unwrap(), once);
    }

    proptest! {
        #[test]
        fn prop_normalized_time_is_idempotent(
            hour in 0u32..24,
            minute in 0u32..60,
            pad in any::<bool>(),
        ) {
            let input = if pad {
                format!("{hour:02}:{minute:02}")
            } else {
                format!("{hour}:{minute:02}")
            };

            let once = normalize_time(&input).unwrap();
            prop_assert_eq!(&once, &format!("{hour:02}:{minute:02}"));
            prop_assert_eq!(normalize_time(&once).unwrap(), once.clone());
        }

        #[test]
        fn prop_out_of_range_time_fails(hour in 24u32..100, minute in 0u32..60) {
            let input = format!("{hour}:{minute:02}");
            prop_assert_eq!(
                normalize_time(&input),
                Err(NormalizeError::TimeOutOfRange(input.clone()))
            );
        }
    }
}
