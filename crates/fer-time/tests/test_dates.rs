//! Integration tests for `Date`, `YearMonth`, and the evaluation date.

use fer_core::ScopedEvaluationDate;
use fer_time::date::{days_in_month, is_leap_year};
use fer_time::{Date, Month, Weekday, YearMonth};

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn consecutive_days() {
    // Walk four centuries day by day and check the invariants of each step.
    let end = date(2400, 1, 1);
    let mut d = date(2000, 1, 1);
    let mut serial = d.serial();
    let mut weekday = d.weekday().ordinal();
    while d < end {
        let next = d + 1;
        assert_eq!(next.serial(), serial + 1, "serial gap after {d}");
        let expected_wd = weekday % 7 + 1;
        assert_eq!(next.weekday().ordinal(), expected_wd, "weekday gap after {d}");
        if d.is_end_of_month() {
            assert_eq!(next.day_of_month(), 1, "{next} should start a month");
        } else {
            assert_eq!(next.day_of_month(), d.day_of_month() + 1);
        }
        assert_eq!(Date::from_serial(next.serial()).unwrap(), next);
        d = next;
        serial += 1;
        weekday = expected_wd;
    }
}

#[test]
fn leap_years() {
    assert!(is_leap_year(2000));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(1900));
    assert!(!is_leap_year(2100));
    assert_eq!(days_in_month(2023, 2), 28);
}

#[test]
fn today_uses_evaluation_date() {
    let _guard = ScopedEvaluationDate::new(2025, 4, 20);
    let today = Date::today().unwrap();
    assert_eq!(today, date(2025, 4, 20));
    assert_eq!(today.weekday(), Weekday::Sunday);
    assert_eq!(YearMonth::of(today), YearMonth::new(2025, Month::April));
}

#[test]
fn invalid_evaluation_date_is_reported() {
    let _guard = ScopedEvaluationDate::new(2025, 2, 30);
    assert!(Date::today().is_err());
}

#[test]
fn year_month_walk_covers_every_day() {
    let mut ym = YearMonth::new(2024, Month::January);
    let mut d = date(2024, 1, 1);
    for _ in 0..24 {
        assert_eq!(ym.first_day(), d);
        d = ym.last_day() + 1;
        ym = ym.shift(1).unwrap();
    }
    assert_eq!(d, date(2026, 1, 1));
}

#[cfg(feature = "serde")]
#[test]
fn holiday_serializes_with_iso_date() {
    let list = fer_time::list_holidays(2025);
    let json = serde_json::to_value(&list[1]).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "date": "2025-04-18",
            "name": "Sexta-feira Santa",
            "kind": { "type": "easter_relative", "offset_days": -2 }
        })
    );
    let parsed: Date = serde_json::from_str("\"2025-04-18\"").unwrap();
    assert_eq!(parsed, date(2025, 4, 18));
}
