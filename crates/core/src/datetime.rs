//! ISO-8601 local date-time codec.
//!
//! Events are written as `YYYY-MM-DDTHH:MM:SS` (whole seconds, no zone).
//! Parsing is more lenient and accepts an optional fractional second or a
//! value without seconds, matching what ISO local date-time readers accept.

use chrono::NaiveDateTime;

use crate::error::CoreError;
use crate::types::Timestamp;

/// Output format for every serialized date-time.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const ACCEPTED_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse an ISO local date-time string.
pub fn parse(value: &str) -> Result<Timestamp, CoreError> {
    ACCEPTED_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .ok_or_else(|| {
            CoreError::Validation(format!(
                "'{value}' is not an ISO local date-time (expected YYYY-MM-DDTHH:MM:SS)"
            ))
        })
}

/// Format a timestamp as `YYYY-MM-DDTHH:MM:SS`, dropping sub-second precision.
pub fn format(value: &Timestamp) -> String {
    value.format(DATE_TIME_FORMAT).to_string()
}

/// Serde adapter for `#[serde(with = "...")]` on [`Timestamp`] fields.
pub mod iso_local {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::types::Timestamp;

    pub fn serialize<S: Serializer>(value: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Timestamp, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::{NaiveDate, Timelike};

    use super::*;

    #[test]
    fn parses_whole_seconds() {
        let ts = parse("2025-09-20T10:00:00").unwrap();
        assert_eq!(
            ts,
            NaiveDate::from_ymd_opt(2025, 9, 20)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn parses_fractional_seconds() {
        let ts = parse("2025-09-20T10:00:00.123456").unwrap();
        assert_eq!(ts.nanosecond(), 123_456_000);
    }

    #[test]
    fn parses_without_seconds() {
        let ts = parse("2025-09-20T10:30").unwrap();
        assert_eq!(format(&ts), "2025-09-20T10:30:00");
    }

    #[test]
    fn rejects_date_only_and_garbage() {
        assert_matches!(parse("2025-09-20"), Err(CoreError::Validation(_)));
        assert_matches!(parse("next tuesday"), Err(CoreError::Validation(_)));
        assert_matches!(parse("2025-09-20 10:00:00"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn format_truncates_sub_seconds() {
        let ts = parse("2025-09-20T10:00:05.999").unwrap();
        assert_eq!(format(&ts), "2025-09-20T10:00:05");
    }
}
