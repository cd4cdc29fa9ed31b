//! # gitiary-streaks
//!
//! **Tier 1 (Streak & Gap Metrics)**
//!
//! Consistency metrics over one repository's daily series. The series may be
//! sparse and unordered; a missing day counts as zero commits.
//!
//! ## What belongs here
//! * Current and longest streak
//! * Maximum inactivity gap
//! * Regularity ratio
//!
//! ## What does NOT belong here
//! * Range filtering (see `gitiary-calendar`)
//! * Cross-repository rollups

#![forbid(unsafe_code)]

use std::collections::HashMap;

use gitiary_calendar::{days_between, shift_days};
use gitiary_math::safe_ratio;
use gitiary_types::{Day, DayActivity};

/// Distinct active days, ascending.
fn active_days_sorted<T: DayActivity>(daily: &[T]) -> Vec<Day> {
    let mut days: Vec<Day> = daily
        .iter()
        .filter(|row| row.is_active())
        .map(|row| row.day())
        .collect();
    days.sort_unstable();
    days.dedup();
    days
}

/// Number of rows with at least one commit.
#[must_use]
pub fn active_day_count<T: DayActivity>(daily: &[T]) -> u32 {
    let count = daily.iter().filter(|row| row.is_active()).count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Consecutive active days ending at `reference`, walking backward.
///
/// 0 when `reference` itself has no commits.
#[must_use]
pub fn current_streak<T: DayActivity>(daily: &[T], reference: Day) -> u32 {
    let by_day: HashMap<Day, u64> = daily.iter().map(|row| (row.day(), row.commits())).collect();

    let mut streak = 0u32;
    let mut cursor = reference;
    while by_day.get(&cursor).is_some_and(|commits| *commits > 0) {
        streak += 1;
        cursor = shift_days(cursor, -1);
    }
    streak
}

/// Longest run of calendar-consecutive active days.
#[must_use]
pub fn longest_streak<T: DayActivity>(daily: &[T]) -> u32 {
    let days = active_days_sorted(daily);
    if days.is_empty() {
        return 0;
    }

    let mut longest = 1u32;
    let mut run = 1u32;
    for pair in days.windows(2) {
        if days_between(pair[0], pair[1]) == 1 {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 1;
        }
    }
    longest
}

/// Largest number of fully inactive days between two consecutive active days.
#[must_use]
pub fn max_gap<T: DayActivity>(daily: &[T]) -> u32 {
    active_days_sorted(daily)
        .windows(2)
        .map(|pair| u32::try_from(days_between(pair[0], pair[1]) - 1).unwrap_or(0))
        .max()
        .unwrap_or(0)
}

/// Active days divided by `period_days`; 0 for an empty period.
///
/// Not clamped: a period shorter than the active-day count yields a ratio
/// above 1.
#[must_use]
pub fn regularity<T: DayActivity>(daily: &[T], period_days: u32) -> f64 {
    safe_ratio(u64::from(active_day_count(daily)), u64::from(period_days))
}
