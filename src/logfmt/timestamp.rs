//! Fixed timestamp pattern used for record timestamps and time values
//!
//! Timestamps carry microsecond precision and a numeric UTC offset, never a
//! zone name: `2009-02-13T23:31:30.987654+0000`.

use chrono::{DateTime, TimeZone};
use std::fmt;

/// strftime pattern for `YYYY-MM-DDTHH:MM:SS.ffffff±HHMM`
pub const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f%z";

/// Format a timestamp with [`TIME_FORMAT`]
#[must_use]
pub fn format_timestamp<Tz>(timestamp: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    timestamp.format(TIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_format_utc() {
        let ts = Utc.timestamp_opt(1234567890, 987654321).unwrap();
        assert_eq!(format_timestamp(&ts), "2009-02-13T23:31:30.987654+0000");
    }

    #[test]
    fn test_format_with_offset() {
        let offset = FixedOffset::east_opt(10 * 3600).unwrap();
        let ts = Utc
            .timestamp_opt(1234567890, 5_000)
            .unwrap()
            .with_timezone(&offset);
        assert_eq!(format_timestamp(&ts), "2009-02-14T09:31:30.000005+1000");
    }

    #[test]
    fn test_format_negative_offset() {
        let offset = FixedOffset::west_opt(5 * 3600 + 30 * 60).unwrap();
        let ts = Utc.timestamp_opt(0, 0).unwrap().with_timezone(&offset);
        assert_eq!(format_timestamp(&ts), "1969-12-31T18:30:00.000000-0530");
    }
}
