//! Data parsing helpers.
//!
//! Split ISO-style date strings into their numeric components.  Range
//! checking (month 1–12, day within the month) is left to the date types.

use crate::Year;

/// Split off the two trailing `-`-separated numeric fields, leaving the
/// (possibly signed) year in front.
fn split_fields(s: &str, n: usize) -> Option<Vec<&str>> {
    let mut parts: Vec<&str> = s.trim().rsplitn(n, '-').collect();
    if parts.len() != n {
        return None;
    }
    parts.reverse();
    // Month and day are plain digits; only the year may carry a sign.
    if parts[1..]
        .iter()
        .any(|p| p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }
    Some(parts)
}

/// Parse a date string in ISO 8601 format (`YYYY-MM-DD`).
///
/// A leading `-` marks a year before year 0 (`-0044-03-15`).
/// Returns `(year, month, day)` on success.
pub fn parse_iso_date(s: &str) -> Option<(Year, u8, u8)> {
    let parts = split_fields(s, 3)?;
    let year: Year = parts[0].parse().ok()?;
    let month: u8 = parts[1].parse().ok()?;
    let day: u8 = parts[2].parse().ok()?;
    Some((year, month, day))
}

/// Parse a month string in `YYYY-MM` format.
///
/// Returns `(year, month)` on success.
pub fn parse_year_month(s: &str) -> Option<(Year, u8)> {
    let parts = split_fields(s, 2)?;
    let year: Year = parts[0].parse().ok()?;
    let month: u8 = parts[1].parse().ok()?;
    Some((year, month))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("2023-06-15"), Some((2023, 6, 15)));
        assert_eq!(parse_iso_date(" 2025-12-25\n"), Some((2025, 12, 25)));
        assert_eq!(parse_iso_date("-0044-03-15"), Some((-44, 3, 15)));
        assert_eq!(parse_iso_date("bad"), None);
        assert_eq!(parse_iso_date("2023-06"), None);
        assert_eq!(parse_iso_date("2023--6-15"), None);
        assert_eq!(parse_iso_date("2023-+6-15"), None);
    }

    #[test]
    fn test_parse_year_month() {
        assert_eq!(parse_year_month("2025-04"), Some((2025, 4)));
        assert_eq!(parse_year_month("1999-1"), Some((1999, 1)));
        assert_eq!(parse_year_month("2025"), None);
        assert_eq!(parse_year_month("2025-04-01"), None);
    }
}
