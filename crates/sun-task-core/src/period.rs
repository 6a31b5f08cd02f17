//! ISO week/year resolution.
//!
//! Submissions are bucketed by ISO-8601 week, where a week belongs to
//! whichever year contains its Thursday. Resolution is anchored to the fixed
//! civil timezone: the same UTC instant can fall on different civil dates on
//! either side of the zone offset, and the wall-clock date is the one that
//! counts.

use chrono::{DateTime, Datelike, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::TAIPEI;

/// The week bucket a submission is stamped with. `week` is always in 1..=53.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekPeriod {
    pub week: i32,
    pub year: i32,
}

/// Resolve the ISO week/year bucket containing `instant`.
///
/// The civil date in the fixed zone is shifted onto the Thursday of its ISO
/// week (Monday=1 … Sunday=7, shift by `4 - weekday` days); that Thursday's
/// calendar year is the week-numbering year, and the week number is the
/// ceiling of its day-of-year over 7.
pub fn resolve_period(instant: DateTime<Utc>) -> WeekPeriod {
    let civil = instant.with_timezone(&TAIPEI).date_naive();
    let weekday = i64::from(civil.weekday().number_from_monday());
    let thursday = civil + Duration::days(4 - weekday);
    WeekPeriod {
        week: ((thursday.ordinal() + 6) / 7) as i32,
        year: thursday.year(),
    }
}

/// The bucket for the current instant.
pub fn current_period() -> WeekPeriod {
    resolve_period(Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    /// A UTC instant from Taipei wall-clock components.
    fn taipei(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        TAIPEI
            .with_ymd_and_hms(y, mo, d, h, mi, s)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_stable_across_one_iso_week() {
        // 2024-01-01 is a Monday; the whole week through Sunday the 7th
        // resolves identically.
        for day in 1..=7 {
            for hour in [0, 12, 23] {
                let period = resolve_period(taipei(2024, 1, day, hour, 0, 0));
                assert_eq!(period, WeekPeriod { week: 1, year: 2024 }, "day {day} hour {hour}");
            }
        }
    }

    #[test]
    fn test_early_january_belongs_to_previous_year() {
        // 2023-01-01 is a Sunday; its Thursday is 2022-12-29.
        let period = resolve_period(taipei(2023, 1, 1, 10, 0, 0));
        assert_eq!(period, WeekPeriod { week: 52, year: 2022 });
    }

    #[test]
    fn test_late_december_belongs_to_next_year() {
        // 2024-12-31 is a Tuesday; its Thursday is 2025-01-02.
        let period = resolve_period(taipei(2024, 12, 31, 10, 0, 0));
        assert_eq!(period, WeekPeriod { week: 1, year: 2025 });
    }

    #[test]
    fn test_week_53_exists() {
        // 2020-12-31 is a Thursday, day 366 of a leap year.
        let period = resolve_period(taipei(2020, 12, 31, 10, 0, 0));
        assert_eq!(period, WeekPeriod { week: 53, year: 2020 });
    }

    #[test]
    fn test_resolution_follows_taipei_wall_clock() {
        // One second before Taipei midnight the civil date is still Sunday
        // 2023-12-31 (ISO week 52 of 2023); at midnight it becomes Monday
        // 2024-01-01 (week 1 of 2024). In UTC both instants are Dec 31.
        let before = Utc.with_ymd_and_hms(2023, 12, 31, 15, 59, 59).unwrap();
        let after = Utc.with_ymd_and_hms(2023, 12, 31, 16, 0, 0).unwrap();
        assert_eq!(resolve_period(before), WeekPeriod { week: 52, year: 2023 });
        assert_eq!(resolve_period(after), WeekPeriod { week: 1, year: 2024 });
    }

    #[test]
    fn test_week_number_stays_in_range() {
        for year in 2019..=2030 {
            for (month, day) in [(1, 1), (1, 4), (6, 15), (12, 28), (12, 31)] {
                let period = resolve_period(taipei(year, month, day, 12, 0, 0));
                assert!(
                    (1..=53).contains(&period.week),
                    "{year}-{month:02}-{day:02} resolved to week {}",
                    period.week
                );
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let instant = taipei(2024, 3, 7, 8, 30, 0);
        assert_eq!(resolve_period(instant), resolve_period(instant));
    }
}
