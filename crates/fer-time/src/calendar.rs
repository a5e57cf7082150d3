//! `Calendar` trait.
//!
//! A calendar knows the public holidays of each year and answers per-date
//! queries from them.

use fer_core::Year;

use crate::date::Date;
use crate::holiday::{find_holiday, Holiday};
use crate::weekday::Weekday;

/// A public-holiday calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Portugal"`).
    fn name(&self) -> &str;

    /// The holidays of `year`, in the calendar's reference order.
    ///
    /// Computed fresh on every call.
    fn holidays(&self, year: Year) -> Vec<Holiday>;

    /// The holiday falling on `date`, if any (first match in list order).
    fn holiday_on(&self, date: Date) -> Option<Holiday> {
        find_holiday(&self.holidays(date.year()), date).cloned()
    }

    /// Return `true` if `date` is a public holiday.
    fn is_holiday(&self, date: Date) -> bool {
        self.holiday_on(date).is_some()
    }

    /// Return `true` if `date` falls on a weekend.
    fn is_weekend(&self, date: Date) -> bool {
        matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday)
    }

    /// Return `true` if `date` is neither a weekend nor a holiday.
    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }

    /// All holidays with `from <= date <= to`, sorted by date.
    ///
    /// Entries sharing a date keep their list order.
    fn holidays_between(&self, from: Date, to: Date) -> Vec<Holiday> {
        if from > to {
            return Vec::new();
        }
        let mut out: Vec<Holiday> = (from.year()..=to.year())
            .flat_map(|y| self.holidays(y))
            .filter(|h| (from..=to).contains(&h.date()))
            .collect();
        out.sort_by_key(Holiday::date);
        out
    }
}
