//! Utilities for date and time formatting
//!
//! Values arrive in storage format (ISO dates, ISO or space separated date
//! times) and are displayed in en-US locale format.

use chrono::{DateTime, Local, Months, NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a storage date-time; offsets are converted to local time
pub fn parse_datetime(datetime_str: &str) -> Option<NaiveDateTime> {
    let s = datetime_str.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// Parse a storage date ("2024-03-15"); a full date-time gives its date part
pub fn parse_date(date_str: &str) -> Option<NaiveDate> {
    let s = date_str.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_datetime(s).map(|dt| dt.date()))
}

/// Format a storage date to M/D/YYYY
/// Example: "2024-03-15" -> "3/15/2024"
pub fn format_date(date_str: &str) -> String {
    match parse_date(date_str) {
        Some(date) => date.format("%-m/%-d/%Y").to_string(),
        None => date_str.to_string(),
    }
}

/// Format a storage date-time to M/D/YYYY, h:mm:ss AM|PM
/// Example: "2024-03-15T14:02:26.123" -> "3/15/2024, 2:02:26 PM"
pub fn format_datetime(datetime_str: &str) -> String {
    let parsed = parse_datetime(datetime_str).or_else(|| {
        NaiveDate::parse_from_str(datetime_str.trim(), "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
    });
    match parsed {
        Some(dt) => dt.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
        None => datetime_str.to_string(),
    }
}

/// Today's date in the browser's local time zone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Default value for a new drug's expiry field: one month from `today`
///
/// Short months clamp to their last day (Jan 31 -> Feb 28/29).
pub fn default_expiry_date(today: NaiveDate) -> NaiveDate {
    today.checked_add_months(Months::new(1)).unwrap_or(today)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "3/15/2024");
        assert_eq!(format_date("2024-12-01"), "12/1/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123"), "3/15/2024");
        assert_eq!(format_date("2024-03-15 09:30:00"), "3/15/2024");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123"),
            "3/15/2024, 2:02:26 PM"
        );
        assert_eq!(
            format_datetime("2024-12-31 00:05:09.654321"),
            "12/31/2024, 12:05:09 AM"
        );
        assert_eq!(format_datetime("2024-01-02T08:15"), "1/2/2024, 8:15:00 AM");
        assert_eq!(format_datetime("2024-01-02"), "1/2/2024, 12:00:00 AM");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_date("2024-02-30"), "2024-02-30");
    }

    #[test]
    fn test_default_expiry_date() {
        let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
        assert_eq!(default_expiry_date(d(2024, 3, 15)), d(2024, 4, 15));
        assert_eq!(default_expiry_date(d(2024, 1, 31)), d(2024, 2, 29));
        assert_eq!(default_expiry_date(d(2024, 12, 10)), d(2025, 1, 10));
    }
}
