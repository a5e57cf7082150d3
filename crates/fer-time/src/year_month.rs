//! `YearMonth` — a month of a specific year.
//!
//! The carousel's cursor and the unit a month card is built for.

use std::str::FromStr;

use fer_core::errors::{Error, Result};
use fer_core::utilities::data_parsers::parse_year_month;
use fer_core::Year;

use crate::date::Date;
use crate::month::Month;

/// A calendar month of a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: Year,
    month: Month,
}

impl YearMonth {
    /// Create from a year and a [`Month`].
    pub fn new(year: Year, month: Month) -> Self {
        Self { year, month }
    }

    /// Create from a year and a month number (1–12).
    pub fn from_numbers(year: Year, month: u8) -> Result<Self> {
        let month = Month::from_number(month)
            .ok_or_else(|| Error::Date(format!("month {month} out of range [1, 12]")))?;
        Ok(Self { year, month })
    }

    /// The month containing `date`.
    pub fn of(date: Date) -> Self {
        Self::new(date.year(), date.month_of_year())
    }

    /// Return the year.
    pub fn year(&self) -> Year {
        self.year
    }

    /// Return the month.
    pub fn month(&self) -> Month {
        self.month
    }

    /// Number of days in this month.
    pub fn days_in_month(&self) -> u8 {
        self.month.days_in(self.year)
    }

    /// The first day of the month.
    pub fn first_day(&self) -> Date {
        Date::from_ymd_unchecked(self.year, self.month.number(), 1)
    }

    /// The last day of the month.
    pub fn last_day(&self) -> Date {
        Date::from_ymd_unchecked(self.year, self.month.number(), self.days_in_month())
    }

    /// The date of day `day` in this month, if it exists.
    pub fn day(&self, day: u8) -> Result<Date> {
        Date::from_ymd(self.year, self.month.number(), day)
    }

    /// Number of blank cells before day 1 in a Monday-first week grid.
    pub fn leading_blanks(&self) -> usize {
        self.first_day().weekday().column()
    }

    /// Return `true` if `date` falls within this month.
    pub fn contains(&self, date: Date) -> bool {
        date.year() == self.year && date.month() == self.month.number()
    }

    /// Move by `n` months (negative moves backwards), rolling the year over
    /// as needed.
    pub fn shift(self, n: i32) -> Result<Self> {
        let total = i64::from(self.year) * 12 + i64::from(self.month.number() - 1) + i64::from(n);
        let year = Year::try_from(total.div_euclid(12))
            .map_err(|_| Error::Date(format!("month shift by {n} leaves the year range")))?;
        let month = (total.rem_euclid(12) + 1) as u8;
        Self::from_numbers(year, month)
    }

    /// Portuguese title, e.g. `"abril de 2025"`.
    pub fn pt_title(&self) -> String {
        format!("{} de {}", self.month.pt_name(), self.year)
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let m = self.month.number();
        if self.year < 0 {
            write!(f, "-{:04}-{m:02}", i64::from(self.year).abs())
        } else {
            write!(f, "{:04}-{m:02}", self.year)
        }
    }
}

impl FromStr for YearMonth {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (y, m) = parse_year_month(s).ok_or_else(|| Error::Parse {
            input: s.to_string(),
            expected: "YYYY-MM",
        })?;
        Self::from_numbers(y, m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(y: Year, m: u8) -> YearMonth {
        YearMonth::from_numbers(y, m).unwrap()
    }

    #[test]
    fn shift_rolls_over_years() {
        assert_eq!(ym(2024, 12).shift(1).unwrap(), ym(2025, 1));
        assert_eq!(ym(2025, 1).shift(-1).unwrap(), ym(2024, 12));
        assert_eq!(ym(2025, 6).shift(-18).unwrap(), ym(2023, 12));
        assert_eq!(ym(2025, 6).shift(0).unwrap(), ym(2025, 6));
        assert!(ym(Year::MAX, 12).shift(1).is_err());
        assert!(ym(Year::MIN, 1).shift(-1).is_err());
    }

    #[test]
    fn leading_blanks_monday_first() {
        // 2025-06-01 is a Sunday: six blanks before it.
        assert_eq!(ym(2025, 6).leading_blanks(), 6);
        // 2024-01-01 is a Monday: no blanks.
        assert_eq!(ym(2024, 1).leading_blanks(), 0);
        // 2025-04-01 is a Tuesday.
        assert_eq!(ym(2025, 4).leading_blanks(), 1);
    }

    #[test]
    fn bounds_and_contains() {
        let feb = ym(2024, 2);
        assert_eq!(feb.days_in_month(), 29);
        assert_eq!(feb.last_day(), Date::from_ymd(2024, 2, 29).unwrap());
        assert!(feb.contains(Date::from_ymd(2024, 2, 10).unwrap()));
        assert!(!feb.contains(Date::from_ymd(2025, 2, 10).unwrap()));
        assert!(feb.day(30).is_err());
    }

    #[test]
    fn title_display_and_parse() {
        let apr = ym(2025, 4);
        assert_eq!(apr.pt_title(), "abril de 2025");
        assert_eq!(apr.to_string(), "2025-04");
        assert_eq!("2025-04".parse::<YearMonth>().unwrap(), apr);
        assert!("2025-13".parse::<YearMonth>().is_err());
        assert!("april".parse::<YearMonth>().is_err());
    }
}
