//! Shared utility functions for output formatting

use std::fmt::Display;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Local, TimeZone};

/// Timestamp layout, e.g. `2017-03-01 14:05:09 -0800`.
pub const MTIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Format a modification time in the local time zone.
///
/// A missing timestamp (platforms without mtime support) renders as the Unix epoch.
pub fn format_mtime(modified: Option<SystemTime>) -> String {
    let local: DateTime<Local> = modified.unwrap_or(UNIX_EPOCH).into();
    format_timestamp(&local)
}

/// Format a timestamp in any time zone using `MTIME_FORMAT`.
pub fn format_timestamp<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    time.format(MTIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_format_timestamp_with_offset() {
        let pacific = FixedOffset::west_opt(8 * 3600).unwrap();
        let time = pacific.with_ymd_and_hms(2017, 3, 1, 14, 5, 9).unwrap();
        assert_eq!(format_timestamp(&time), "2017-03-01 14:05:09 -0800");
    }

    #[test]
    fn test_format_timestamp_utc() {
        let utc = FixedOffset::east_opt(0).unwrap();
        let time = utc.with_ymd_and_hms(2020, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(format_timestamp(&time), "2020-12-31 23:59:59 +0000");
    }

    #[test]
    fn test_format_mtime_shape() {
        let formatted = format_mtime(Some(SystemTime::now()));
        // YYYY-MM-DD HH:MM:SS +ZZZZ
        assert_eq!(formatted.len(), 25, "unexpected layout: {}", formatted);
        let offset = formatted.rsplit(' ').next().unwrap();
        assert!(offset.starts_with('+') || offset.starts_with('-'));
    }
}
