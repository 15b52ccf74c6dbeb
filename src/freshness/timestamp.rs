//! ISO-8601 timestamp parsing.

use crate::error::{Error, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Naive date-time layouts accepted after RFC 3339 fails.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO-8601 timestamp into a UTC instant.
///
/// Accepts RFC 3339 (with offset), naive date-times (taken as UTC) and
/// plain dates (taken as midnight UTC).
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_timestamp(value, "empty timestamp"));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|e| Error::invalid_timestamp(value, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_date_only() {
        let dt = parse_timestamp("2024-01-01").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2024, 1, 1));
        assert_eq!(dt.hour(), 0);
    }

    #[test]
    fn test_parse_rfc3339_offset() {
        let dt = parse_timestamp("2024-03-10T23:30:00-05:00").unwrap();
        assert_eq!((dt.month(), dt.day(), dt.hour()), (3, 11, 4));
    }

    #[test]
    fn test_parse_naive_datetime() {
        let dt = parse_timestamp("2024-06-01T08:15:30.250").unwrap();
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (8, 15, 30));

        assert!(parse_timestamp("2024-06-01 08:15").is_ok());
        assert!(parse_timestamp("  2024-06-01  ").is_ok());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "   ", "yesterday", "2024-13-01", "2024-02-30", "01/02/2024"] {
            let err = parse_timestamp(bad).unwrap_err();
            assert!(matches!(err, Error::InvalidTimestamp { .. }), "{}", bad);
        }
    }
}
