//! Portugal calendar.

use fer_core::Year;

use crate::calendar::Calendar;
use crate::date::Date;
use crate::easter::{easter_sunday, CORPUS_CHRISTI_OFFSET, GOOD_FRIDAY_OFFSET};
use crate::holiday::{Holiday, HolidayKind};

/// Number of public holidays Portugal observes each year.
pub const HOLIDAYS_PER_YEAR: usize = 13;

/// Portugal calendar.
///
/// Weekends and the following holidays are observed, listed in this order:
/// * Ano Novo (Jan 1)
/// * Sexta-feira Santa (Easter − 2)
/// * Domingo de Páscoa (Easter Sunday)
/// * 25 de Abril (Apr 25)
/// * Dia do Trabalhador (May 1)
/// * Corpo de Deus (Easter + 60)
/// * Dia de Portugal (Jun 10)
/// * Assunção de Nossa Senhora (Aug 15)
/// * Implantação da República (Oct 5)
/// * Dia de Todos os Santos (Nov 1)
/// * Restauração da Independência (Dec 1)
/// * Imaculada Conceição (Dec 8)
/// * Natal (Dec 25)
#[derive(Debug, Clone, Copy, Default)]
pub struct Portugal;

impl Calendar for Portugal {
    fn name(&self) -> &str {
        "Portugal"
    }

    fn holidays(&self, year: Year) -> Vec<Holiday> {
        let easter = easter_sunday(year);
        let fixed = |m: u8, d: u8, name: &'static str| {
            Holiday::new(Date::from_ymd_unchecked(year, m, d), name, HolidayKind::Fixed)
        };
        let movable = |offset_days: i32, name: &'static str| {
            Holiday::new(
                easter + offset_days,
                name,
                HolidayKind::EasterRelative { offset_days },
            )
        };

        let holidays = vec![
            fixed(1, 1, "Ano Novo"),
            movable(GOOD_FRIDAY_OFFSET, "Sexta-feira Santa"),
            movable(0, "Domingo de Páscoa"),
            fixed(4, 25, "25 de Abril"),
            fixed(5, 1, "Dia do Trabalhador"),
            movable(CORPUS_CHRISTI_OFFSET, "Corpo de Deus"),
            fixed(6, 10, "Dia de Portugal"),
            fixed(8, 15, "Assunção de Nossa Senhora"),
            fixed(10, 5, "Implantação da República"),
            fixed(11, 1, "Dia de Todos os Santos"),
            fixed(12, 1, "Restauração da Independência"),
            fixed(12, 8, "Imaculada Conceição"),
            fixed(12, 25, "Natal"),
        ];
        debug_assert_eq!(holidays.len(), HOLIDAYS_PER_YEAR);
        holidays
    }
}

/// The 13 Portuguese public holidays of `year`.
pub fn list_holidays(year: Year) -> Vec<Holiday> {
    Portugal.holidays(year)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: Year, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn thirteen_holidays() {
        assert_eq!(list_holidays(2025).len(), HOLIDAYS_PER_YEAR);
    }

    #[test]
    fn easter_2025() {
        let cal = Portugal;
        assert_eq!(cal.holiday_on(date(2025, 4, 18)).unwrap().name(), "Sexta-feira Santa");
        assert_eq!(cal.holiday_on(date(2025, 4, 20)).unwrap().name(), "Domingo de Páscoa");
        assert!(!cal.is_holiday(date(2025, 4, 21)));
    }

    #[test]
    fn corpo_de_deus_2025() {
        let cal = Portugal;
        assert_eq!(cal.holiday_on(date(2025, 6, 19)).unwrap().name(), "Corpo de Deus");
    }

    #[test]
    fn revolution_day() {
        let cal = Portugal;
        assert!(cal.is_holiday(date(2024, 4, 25)));
        assert!(!cal.is_business_day(date(2024, 4, 25)));
    }

    #[test]
    fn normal_business_day() {
        let cal = Portugal;
        // 2025-07-04 is a Friday
        assert!(cal.is_business_day(date(2025, 7, 4)));
        assert!(cal.holiday_on(date(2025, 7, 4)).is_none());
    }

    #[test]
    fn weekend_is_not_business_day() {
        let cal = Portugal;
        // 2025-07-05 is a Saturday
        assert!(!cal.is_business_day(date(2025, 7, 5)));
        assert!(!cal.is_holiday(date(2025, 7, 5)));
    }
}
