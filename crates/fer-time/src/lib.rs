//! # fer-time
//!
//! Date, month, Easter, and Portuguese public-holiday types.
//!
//! Everything in this crate is pure: holiday lists are computed on demand
//! and never cached, so every function may be called from any thread.
//!
//! ```
//! use fer_time::{easter_sunday, find_holiday, list_holidays, Date};
//!
//! let holidays = list_holidays(2025);
//! assert_eq!(holidays.len(), 13);
//! assert_eq!(easter_sunday(2025).to_string(), "2025-04-20");
//!
//! let christmas = Date::from_ymd(2025, 12, 25).unwrap();
//! assert_eq!(find_holiday(&holidays, christmas).unwrap().name(), "Natal");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Calendar trait.
pub mod calendar;

/// Concrete calendar implementations (country specific).
pub mod calendars;

/// `Date` type.
pub mod date;

/// Easter Sunday and the movable feasts derived from it.
pub mod easter;

/// `Holiday` type and lookup.
pub mod holiday;

/// `Month` — month of the year.
pub mod month;

/// `Weekday` — day of the week.
pub mod weekday;

/// `YearMonth` — a month of a given year.
pub mod year_month;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::Calendar;
pub use calendars::portugal::{list_holidays, Portugal, HOLIDAYS_PER_YEAR};
pub use date::Date;
pub use easter::{corpus_christi, easter_sunday, good_friday};
pub use holiday::{find_holiday, Holiday, HolidayKind};
pub use month::Month;
pub use weekday::Weekday;
pub use year_month::YearMonth;
