//! `Date` type.
//!
//! A date is stored as its proleptic Gregorian `(year, month, day)` triple,
//! so every `i32` year is representable and the derived ordering is
//! chronological.  Day arithmetic goes through a day count computed in
//! `i64`, which cannot overflow for any representable date.
//!
//! # Serial number convention
//! * Serial 1 = January 1, 1900.
//! * Earlier dates have zero or negative serials.

use std::str::FromStr;

use fer_core::errors::{Error, Result};
use fer_core::utilities::data_parsers::parse_iso_date;
use fer_core::{DayOffset, Settings, Year};

use crate::month::Month;
use crate::weekday::Weekday;

/// A calendar date in the proleptic Gregorian calendar.
///
/// The normalized textual form (`Display`, [`Date::iso_string`]) is the
/// fixed-width `YYYY-MM-DD`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: Year,
    month: u8,
    day: u8,
}

/// Day count of 1970-01-01 relative to 0000-03-01.
const UNIX_EPOCH_SHIFT: i64 = 719_468;

/// Day count (from 1970-01-01) of 1899-12-31, the day before serial 1.
const SERIAL_EPOCH: i64 = -25_568;

impl Date {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month.
    pub fn from_ymd(year: Year, month: u8, day: u8) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year:04}-{month:02}"
            )));
        }
        Ok(Date { year, month, day })
    }

    /// Create a date from components already known to be valid.
    pub(crate) fn from_ymd_unchecked(year: Year, month: u8, day: u8) -> Self {
        debug_assert!(
            (1..=12).contains(&month) && day >= 1 && day <= days_in_month(year, month),
            "invalid date {year}-{month}-{day}"
        );
        Date { year, month, day }
    }

    /// Create a date from a serial number (1900-01-01 = 1).
    pub fn from_serial(serial: i64) -> Result<Self> {
        Self::from_day_count(serial + SERIAL_EPOCH)
    }

    /// Today's date.
    ///
    /// Uses the [`Settings`] evaluation date when one is set, otherwise the
    /// local date of the system clock.
    pub fn today() -> Result<Self> {
        if let Some((y, m, d)) = Settings::instance().evaluation_date() {
            return Self::from_ymd(y, m, d);
        }
        use chrono::Datelike;
        let now = chrono::Local::now().date_naive();
        Self::from_ymd(now.year(), now.month() as u8, now.day() as u8)
    }

    fn from_day_count(days: i64) -> Result<Self> {
        let (y, m, d) = civil_from_days(days);
        let year = Year::try_from(y)
            .map_err(|_| Error::Date(format!("year {y} out of range")))?;
        Ok(Self::from_ymd_unchecked(year, m, d))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the year.
    pub fn year(&self) -> Year {
        self.year
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Return the month as a [`Month`].
    pub fn month_of_year(&self) -> Month {
        Month::from_number(self.month).expect("Date always holds a valid month")
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        self.day
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let mut doy = self.day as u16;
        for mon in 1..self.month {
            doy += days_in_month(self.year, mon) as u16;
        }
        doy
    }

    /// Return the serial number (1900-01-01 = 1).
    pub fn serial(&self) -> i64 {
        self.day_count() - SERIAL_EPOCH
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // 1970-01-01 was a Thursday (ordinal 4).
        let w = ((self.day_count() + 3).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always in 1..=7")
    }

    /// Return the normalized `YYYY-MM-DD` form.
    pub fn iso_string(&self) -> String {
        self.to_string()
    }

    fn day_count(&self) -> i64 {
        days_from_civil(i64::from(self.year), self.month, self.day)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result leaves the
    /// representable year range.
    pub fn add_days(self, n: DayOffset) -> Result<Self> {
        Self::from_day_count(self.day_count() + i64::from(n))
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i64 {
        other.day_count() - self.day_count()
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        Date {
            day: days_in_month(self.year, self.month),
            ..self
        }
    }

    /// Return `true` if this is the last calendar day of its month.
    pub fn is_end_of_month(self) -> bool {
        self == self.end_of_month()
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<DayOffset> for Date {
    type Output = Self;
    fn add(self, rhs: DayOffset) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<DayOffset> for Date {
    type Output = Self;
    fn sub(self, rhs: DayOffset) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i64;
    fn sub(self, rhs: Date) -> i64 {
        self.day_count() - rhs.day_count()
    }
}

impl std::ops::AddAssign<DayOffset> for Date {
    fn add_assign(&mut self, rhs: DayOffset) {
        *self = self.add_days(rhs).expect("date addition overflow");
    }
}

impl std::ops::SubAssign<DayOffset> for Date {
    fn sub_assign(&mut self, rhs: DayOffset) {
        *self = self.add_days(-rhs).expect("date subtraction underflow");
    }
}

// ── Display / parsing ─────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Date { year, month, day } = *self;
        if year < 0 {
            // Pad the magnitude, not the sign: -0044 rather than -044.
            write!(f, "-{:04}-{month:02}-{day:02}", i64::from(year).abs())
        } else {
            write!(f, "{year:04}-{month:02}-{day:02}")
        }
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

impl FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (y, m, d) = parse_iso_date(s).ok_or_else(|| Error::Parse {
            input: s.to_string(),
            expected: "YYYY-MM-DD",
        })?;
        Self::from_ymd(y, m, d)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: Year) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: Year, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Days from 1970-01-01 to the given civil date.
///
/// Years are split into 400-year eras starting on March 1, so that the leap
/// day falls at the end of each computational year.
fn days_from_civil(year: i64, month: u8, day: u8) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (i64::from(month) + 9) % 12;
    let doy = (153 * mp + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - UNIX_EPOCH_SHIFT
}

/// Inverse of [`days_from_civil`].
fn civil_from_days(days: i64) -> (i64, u8, u8) {
    let z = days + UNIX_EPOCH_SHIFT;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let m = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    let y = yoe + era * 400 + i64::from(m <= 2);
    (y, m, d)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch() {
        let d = Date::from_ymd(1900, 1, 1).unwrap();
        assert_eq!(d.serial(), 1);
        assert_eq!(Date::from_serial(1).unwrap(), d);
        assert_eq!(days_from_civil(1970, 1, 1), 0);
    }

    #[test]
    fn test_roundtrip_through_serial() {
        let dates = [
            (1583, 3, 1),
            (1900, 2, 28),
            (2000, 2, 29), // leap
            (2100, 2, 28), // non-leap century
            (2024, 12, 31),
            (-44, 3, 15),
            (9999, 12, 31),
        ];
        for (y, m, d) in dates {
            let date = Date::from_ymd(y, m, d).unwrap();
            let back = Date::from_serial(date.serial()).unwrap();
            assert_eq!(back, date, "serial roundtrip failed for {date}");
        }
    }

    #[test]
    fn test_invalid_components() {
        assert!(Date::from_ymd(2023, 2, 29).is_err());
        assert!(Date::from_ymd(2024, 13, 1).is_err());
        assert!(Date::from_ymd(2024, 4, 31).is_err());
        assert!(Date::from_ymd(2024, 4, 0).is_err());
        assert!(Date::from_ymd(2024, 2, 29).is_ok());
    }

    #[test]
    fn test_weekday() {
        // 2024-01-01 is a Monday
        let d = Date::from_ymd(2024, 1, 1).unwrap();
        assert_eq!(d.weekday(), Weekday::Monday);
        // 2025-04-20 is a Sunday (Easter)
        let d2 = Date::from_ymd(2025, 4, 20).unwrap();
        assert_eq!(d2.weekday(), Weekday::Sunday);
        // 1900-01-01 was a Monday
        assert_eq!(Date::from_ymd(1900, 1, 1).unwrap().weekday(), Weekday::Monday);
    }

    #[test]
    fn test_arithmetic() {
        let d = Date::from_ymd(2023, 1, 1).unwrap();
        let d2 = d + 31;
        assert_eq!(d2.month(), 2);
        assert_eq!(d2.day_of_month(), 1);
        assert_eq!(Date::from_ymd(2023, 2, 1).unwrap() - d, 31);
        assert_eq!(d - 1, Date::from_ymd(2022, 12, 31).unwrap());
    }

    #[test]
    fn test_add_days_out_of_range() {
        let last = Date::from_ymd(Year::MAX, 12, 31).unwrap();
        assert!(last.add_days(1).is_err());
        let first = Date::from_ymd(Year::MIN, 1, 1).unwrap();
        assert!(first.add_days(-1).is_err());
    }

    #[test]
    fn test_end_of_month() {
        let d = Date::from_ymd(2024, 2, 15).unwrap();
        assert_eq!(d.end_of_month().day_of_month(), 29); // 2024 is a leap year
        assert!(!d.is_end_of_month());
        assert!(d.end_of_month().is_end_of_month());
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(Date::from_ymd(2024, 12, 31).unwrap().day_of_year(), 366);
        assert_eq!(Date::from_ymd(2025, 3, 1).unwrap().day_of_year(), 60);
    }

    #[test]
    fn test_display_and_parse() {
        let d = Date::from_ymd(987, 6, 5).unwrap();
        assert_eq!(d.to_string(), "0987-06-05");
        assert_eq!(format!("{d:?}"), "Date(0987-06-05)");
        assert_eq!("0987-06-05".parse::<Date>().unwrap(), d);

        let bc = Date::from_ymd(-44, 3, 15).unwrap();
        assert_eq!(bc.iso_string(), "-0044-03-15");
        assert_eq!(bc.iso_string().parse::<Date>().unwrap(), bc);

        assert!("2025-02-30".parse::<Date>().is_err());
        assert!(matches!(
            "25/12/2025".parse::<Date>(),
            Err(Error::Parse { .. })
        ));
    }

    #[test]
    fn test_ordering_is_chronological() {
        let a = Date::from_ymd(2024, 12, 31).unwrap();
        let b = Date::from_ymd(2025, 1, 1).unwrap();
        assert!(a < b);
        assert_eq!(a.days_between(b), 1);
    }
}
