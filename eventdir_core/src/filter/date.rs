//! Calendar date matching for filters
//!
//! Dates are timezone-naive calendar days, so parsing works on the year,
//! month and day integers directly.

use chrono::NaiveDate;

use super::types::DateFilter;

/// Parse a strict `YYYY-MM-DD` date.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let mut parts = value.split('-');
    let year = parse_digits(parts.next()?, 4)?;
    let month = parse_digits(parts.next()?, 2)?;
    let day = parse_digits(parts.next()?, 2)?;

    if parts.next().is_some() {
        return None;
    }

    NaiveDate::from_ymd_opt(year as i32, month, day)
}

fn parse_digits(part: &str, width: usize) -> Option<u32> {
    if part.len() != width || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Check if an event date passes the date filter
pub fn matches_date(filter: &DateFilter, date: &NaiveDate) -> bool {
    match filter {
        DateFilter::Any => true,
        DateFilter::On(selected) => date == selected,
        DateFilter::Weekend(weekend) => weekend.contains(date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekend::compute_weekend_dates;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_parse_valid_date() {
        assert_eq!(parse_iso_date("2025-07-15"), Some(date(2025, 7, 15)));
    }

    #[test]
    fn test_parse_leap_day() {
        assert_eq!(parse_iso_date("2024-02-29"), Some(date(2024, 2, 29)));
        assert_eq!(parse_iso_date("2025-02-29"), None);
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        assert_eq!(parse_iso_date("2025-7-15"), None);
        assert_eq!(parse_iso_date("2025-07-15T10:00:00"), None);
        assert_eq!(parse_iso_date("2025-07-15-01"), None);
        assert_eq!(parse_iso_date("+025-07-15"), None);
        assert_eq!(parse_iso_date("15/07/2025"), None);
        assert_eq!(parse_iso_date(""), None);
    }

    #[test]
    fn test_matches_any() {
        assert!(matches_date(&DateFilter::Any, &date(1999, 12, 31)));
    }

    #[test]
    fn test_matches_exact_date() {
        let filter = DateFilter::On(date(2025, 7, 12));
        assert!(matches_date(&filter, &date(2025, 7, 12)));
        assert!(!matches_date(&filter, &date(2025, 7, 13)));
    }

    #[test]
    fn test_matches_weekend_window() {
        // Wednesday 2025-07-09, so the weekend is July 11 to 13
        let weekend = compute_weekend_dates(date(2025, 7, 9), 0).unwrap();
        let filter = DateFilter::Weekend(weekend);

        assert!(!matches_date(&filter, &date(2025, 7, 10)));
        assert!(matches_date(&filter, &date(2025, 7, 11)));
        assert!(matches_date(&filter, &date(2025, 7, 12)));
        assert!(matches_date(&filter, &date(2025, 7, 13)));
        assert!(!matches_date(&filter, &date(2025, 7, 14)));
    }
}
