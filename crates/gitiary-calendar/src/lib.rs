//! # gitiary-calendar
//!
//! **Tier 1 (Calendar Utilities)**
//!
//! Inclusive day windows and whole-calendar-day arithmetic. The reference
//! day is always passed in; only [`today_utc`] reads the clock.

#![forbid(unsafe_code)]

use gitiary_types::{DateRange, Dated, Day};
use time::{Date, Duration, OffsetDateTime};

/// Current calendar day in UTC.
#[must_use]
pub fn today_utc() -> Day {
    Day::from_date(OffsetDateTime::now_utc().date())
}

/// Move `day` by `delta` whole days, saturating at the supported date bounds.
#[must_use]
pub fn shift_days(day: Day, delta: i64) -> Day {
    let shifted = day
        .date()
        .checked_add(Duration::days(delta))
        .unwrap_or(if delta < 0 { Date::MIN } else { Date::MAX });
    Day::from_date(shifted)
}

/// Signed number of days from `from` to `to` (`to - from`).
#[must_use]
pub fn days_between(from: Day, to: Day) -> i64 {
    (to.date() - from.date()).whole_days()
}

/// First day of the `period_days` window ending at `reference` (inclusive).
///
/// A zero period is treated as one day.
#[must_use]
pub fn window_start(period_days: u32, reference: Day) -> Day {
    shift_days(reference, 1 - i64::from(period_days.max(1)))
}

/// First day of the window ending at `reference` (inclusive).
///
/// A 7-day range covers the reference day and the 6 days before it.
/// [`DateRange::All`] has no lower bound.
#[must_use]
pub fn resolve_range_start(range: DateRange, reference: Day) -> Option<Day> {
    range.days().map(|days| window_start(days, reference))
}

/// Keep rows on or after `start`; every row when `start` is `None`.
#[must_use]
pub fn filter_by_day_inclusive<T: Dated>(rows: &[T], start: Option<Day>) -> Vec<&T> {
    match start {
        Some(start) => rows.iter().filter(|row| row.day() >= start).collect(),
        None => rows.iter().collect(),
    }
}

/// Number of calendar days from `first` to `last`, counting both ends.
///
/// 0 when either end is missing or the ends are reversed.
#[must_use]
pub fn day_span_inclusive(first: Option<Day>, last: Option<Day>) -> u32 {
    match (first, last) {
        (Some(first), Some(last)) => u32::try_from(days_between(first, last) + 1).unwrap_or(0),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gitiary_types::DailyEntry;

    fn day(s: &str) -> Day {
        s.parse().unwrap()
    }

    #[test]
    fn seven_day_range_starts_six_days_back() {
        let start = resolve_range_start(DateRange::Days7, day("2026-01-10"));
        assert_eq!(start, Some(day("2026-01-04")));
    }

    #[test]
    fn range_start_crosses_month_and_year_boundaries() {
        let start = resolve_range_start(DateRange::Days30, day("2026-01-10"));
        assert_eq!(start, Some(day("2025-12-12")));
        let start = resolve_range_start(DateRange::Days90, day("2024-03-01"));
        assert_eq!(start, Some(day("2023-12-03")));
    }

    #[test]
    fn window_start_counts_the_reference_day() {
        assert_eq!(window_start(7, day("2026-01-10")), day("2026-01-04"));
        assert_eq!(window_start(1, day("2026-01-10")), day("2026-01-10"));
        assert_eq!(window_start(0, day("2026-01-10")), day("2026-01-10"));
    }

    #[test]
    fn all_range_has_no_start() {
        assert_eq!(resolve_range_start(DateRange::All, day("2026-01-10")), None);
    }

    #[test]
    fn filter_passes_everything_through_without_start() {
        let rows = [
            DailyEntry {
                day: day("2026-01-01"),
                commits: 1,
            },
            DailyEntry {
                day: day("2026-01-05"),
                commits: 0,
            },
        ];
        assert_eq!(filter_by_day_inclusive(&rows, None).len(), 2);
        let kept = filter_by_day_inclusive(&rows, Some(day("2026-01-05")));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].day, day("2026-01-05"));
    }

    #[test]
    fn day_span_counts_both_endpoints() {
        assert_eq!(
            day_span_inclusive(Some(day("2026-01-01")), Some(day("2026-01-10"))),
            10
        );
        assert_eq!(
            day_span_inclusive(Some(day("2026-01-01")), Some(day("2026-01-01"))),
            1
        );
        assert_eq!(day_span_inclusive(None, Some(day("2026-01-01"))), 0);
        assert_eq!(
            day_span_inclusive(Some(day("2026-01-10")), Some(day("2026-01-01"))),
            0
        );
    }

    #[test]
    fn shift_days_handles_leap_years() {
        assert_eq!(shift_days(day("2024-02-28"), 1), day("2024-02-29"));
        assert_eq!(shift_days(day("2025-02-28"), 1), day("2025-03-01"));
        assert_eq!(days_between(day("2024-01-01"), day("2025-01-01")), 366);
    }
}
