//! BDD-style scenario tests for `gitiary-streaks`.
//!
//! Each test follows Given / When / Then structure exercising the public API:
//! - `current_streak`
//! - `longest_streak`
//! - `max_gap`
//! - `regularity`

use gitiary_calendar::shift_days;
use gitiary_streaks::{current_streak, longest_streak, max_gap, regularity};
use gitiary_types::{DailyEntry, Day};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn day(s: &str) -> Day {
    s.parse().unwrap()
}

fn entry(s: &str, commits: u64) -> DailyEntry {
    DailyEntry {
        day: day(s),
        commits,
    }
}

// ===========================================================================
// Scenario: a week of daily work ending today
// ===========================================================================
#[test]
fn scenario_every_day_for_a_week_gives_streak_of_seven() {
    // Given: commits on each of the 7 days ending at the reference
    let reference = day("2026-03-01");
    let daily: Vec<DailyEntry> = (0..7)
        .map(|back| DailyEntry {
            day: shift_days(reference, -back),
            commits: 1,
        })
        .collect();

    // When: we compute streaks
    let current = current_streak(&daily, reference);
    let longest = longest_streak(&daily);

    // Then: both equal the run length
    assert_eq!(current, 7);
    assert_eq!(longest, 7);
    assert_eq!(max_gap(&daily), 0);
}

// ===========================================================================
// Scenario: nothing committed on the reference day
// ===========================================================================
#[test]
fn scenario_idle_reference_day_resets_current_streak() {
    // Given: a long run that ended yesterday
    let daily = [
        entry("2026-01-07", 1),
        entry("2026-01-08", 1),
        entry("2026-01-09", 1),
    ];

    // When: the reference is the day after the run
    let current = current_streak(&daily, day("2026-01-10"));

    // Then: the streak is broken but the longest run remains
    assert_eq!(current, 0);
    assert_eq!(longest_streak(&daily), 3);
}

// ===========================================================================
// Scenario: two bursts separated by a quiet stretch
// ===========================================================================
#[test]
fn scenario_two_bursts_report_gap_between_them() {
    // Given: active on Jan 1 and Jan 6 only
    let daily = [entry("2026-01-01", 2), entry("2026-01-06", 5)];

    // When: we measure the gap
    let gap = max_gap(&daily);

    // Then: the four idle days in between are counted
    assert_eq!(gap, 4);
}

// ===========================================================================
// Scenario: regularity over a ten-day period
// ===========================================================================
#[test]
fn scenario_three_active_days_in_ten_is_thirty_percent() {
    // Given: three active days and one zero row
    let daily = [
        entry("2026-01-01", 1),
        entry("2026-01-04", 1),
        entry("2026-01-09", 3),
        entry("2026-01-10", 0),
    ];

    // When / Then
    assert_eq!(regularity(&daily, 10), 0.3);
    assert_eq!(regularity(&daily, 0), 0.0);
}
