//! `Holiday` — a named public holiday on a specific date.

use fer_core::DayOffset;

use crate::date::Date;

/// How a holiday's date is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum HolidayKind {
    /// Same month and day every year.
    Fixed,
    /// A movable feast, `offset_days` away from Easter Sunday.
    EasterRelative {
        /// Signed distance from Easter Sunday.
        offset_days: DayOffset,
    },
}

/// A public holiday.  Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Holiday {
    date: Date,
    name: &'static str,
    kind: HolidayKind,
}

impl Holiday {
    /// Create a holiday.
    pub fn new(date: Date, name: &'static str, kind: HolidayKind) -> Self {
        Self { date, name, kind }
    }

    /// The date the holiday falls on.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the date is fixed or derived from Easter.
    pub fn kind(&self) -> HolidayKind {
        self.kind
    }

    /// The normalized `YYYY-MM-DD` date string.
    pub fn iso_date(&self) -> String {
        self.date.iso_string()
    }

    /// Return `true` for holidays that move with Easter.
    pub fn is_movable(&self) -> bool {
        matches!(self.kind, HolidayKind::EasterRelative { .. })
    }
}

impl std::fmt::Display for Holiday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.date, self.name)
    }
}

/// Find the holiday falling on `date` in `holidays`.
///
/// Matching is exact date equality.  When several entries share the date
/// the first one in list order is returned.
pub fn find_holiday(holidays: &[Holiday], date: Date) -> Option<&Holiday> {
    holidays.iter().find(|h| h.date == date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn first_match_wins_on_shared_dates() {
        let day = date(2030, 6, 10);
        let list = vec![
            Holiday::new(date(2030, 1, 1), "Ano Novo", HolidayKind::Fixed),
            Holiday::new(day, "Dia de Portugal", HolidayKind::Fixed),
            Holiday::new(
                day,
                "Corpo de Deus",
                HolidayKind::EasterRelative { offset_days: 60 },
            ),
        ];
        assert_eq!(find_holiday(&list, day).map(Holiday::name), Some("Dia de Portugal"));
        assert!(find_holiday(&list, date(2030, 6, 11)).is_none());
    }

    #[test]
    fn accessors() {
        let h = Holiday::new(
            date(2025, 4, 18),
            "Sexta-feira Santa",
            HolidayKind::EasterRelative { offset_days: -2 },
        );
        assert_eq!(h.iso_date(), "2025-04-18");
        assert!(h.is_movable());
        assert_eq!(h.to_string(), "2025-04-18 Sexta-feira Santa");
    }
}
