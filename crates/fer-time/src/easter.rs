//! Easter Sunday (Computus) and the feasts that move with it.

use fer_core::{DayOffset, Year};

use crate::date::Date;

/// Days from Easter Sunday to Good Friday.
pub const GOOD_FRIDAY_OFFSET: DayOffset = -2;

/// Days from Easter Sunday to Corpus Christi.
pub const CORPUS_CHRISTI_OFFSET: DayOffset = 60;

/// Compute the date of Easter Sunday in the Gregorian calendar.
///
/// Integer Computus in the Meeus/Jones/Butcher family.  Every step uses
/// floor division and a non-negative remainder on `i64`, so the result is
/// defined (March or April, valid day) for every `i32` year; it is only
/// meaningful from 1583 on.
///
/// ```
/// use fer_time::{easter_sunday, Date};
/// assert_eq!(easter_sunday(2025), Date::from_ymd(2025, 4, 20).unwrap());
/// ```
pub fn easter_sunday(year: Year) -> Date {
    let y = i64::from(year);
    // Golden number: position in the 19-year Metonic cycle.
    let g = y.rem_euclid(19);
    let c = y.div_euclid(100);
    // Days from March 21 to the paschal full moon, before corrections.
    let h = (c - c.div_euclid(4) - (8 * c + 13).div_euclid(25) + 19 * g + 15).rem_euclid(30);
    let i = h - h.div_euclid(28) * (1 - 29_i64.div_euclid(h + 1) * (21 - g).div_euclid(11));
    // Weekday of the paschal full moon.
    let j = (y + y.div_euclid(4) + i + 2 - c + c.div_euclid(4)).rem_euclid(7);
    let l = i - j;
    let month = 3 + (l + 40).div_euclid(44);
    let day = l + 28 - 31 * month.div_euclid(4);
    tracing::trace!(year, month, day, "computed Easter Sunday");
    // 0 <= i <= 28 and 0 <= j <= 6, so this is always March 22..=April 25.
    Date::from_ymd_unchecked(year, month as u8, day as u8)
}

/// Good Friday: two days before Easter Sunday.
pub fn good_friday(year: Year) -> Date {
    easter_sunday(year) + GOOD_FRIDAY_OFFSET
}

/// Corpus Christi: sixty days after Easter Sunday.
pub fn corpus_christi(year: Year) -> Date {
    easter_sunday(year) + CORPUS_CHRISTI_OFFSET
}
