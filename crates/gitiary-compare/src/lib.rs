//! # gitiary-compare
//!
//! **Tier 2 (Comparison)**
//!
//! Per-repository views built from the streak metrics: the comparison
//! table, commit totals per catalog window, and the single-repository
//! detail view.
//!
//! ## What belongs here
//! * Applying a lookback window before computing repository metrics
//! * Resolving first/last commit dates for a dataset
//!
//! ## What does NOT belong here
//! * Ordering of comparison rows (see `gitiary-rank`)

#![forbid(unsafe_code)]

use gitiary_calendar::{
    day_span_inclusive, filter_by_day_inclusive, resolve_range_start, window_start,
};
use gitiary_streaks::{active_day_count, current_streak, longest_streak, max_gap, regularity};
use gitiary_types::{
    ComparisonRepo, ComparisonStats, DailyEntry, DailyImpactEntry, DateRange, Day, DayActivity,
    RepoDataset, RepoDetail, RepoSummary,
};
use tracing::debug;

/// Lookback used by the comparison page when none is configured.
pub const DEFAULT_PERIOD_DAYS: u32 = 360;

/// First day with commits: the recorded value, else the earliest active row.
#[must_use]
pub fn first_commit_date(dataset: &RepoDataset) -> Option<Day> {
    dataset.first_commit_date.or_else(|| {
        dataset
            .daily
            .iter()
            .filter(|row| row.is_active())
            .map(|row| row.day)
            .min()
    })
}

/// Last day with commits: the recorded value, else the latest active row.
#[must_use]
pub fn last_commit_date(dataset: &RepoDataset) -> Option<Day> {
    dataset.last_commit_date.or_else(|| {
        dataset
            .daily
            .iter()
            .filter(|row| row.is_active())
            .map(|row| row.day)
            .max()
    })
}

fn commits_of(rows: &[&DailyImpactEntry]) -> u64 {
    rows.iter().map(|row| row.commits).sum()
}

/// One comparison row per dataset, over the `period_days` ending at `reference`.
///
/// Rows keep input order. First and last commit dates cover all history.
#[must_use]
pub fn build_comparison_stats(
    datasets: &[RepoDataset],
    period_days: u32,
    reference: Day,
) -> ComparisonStats {
    debug!(repos = datasets.len(), period_days, %reference, "building comparison stats");
    let start = window_start(period_days, reference);

    let repos = datasets
        .iter()
        .map(|dataset| {
            let window = filter_by_day_inclusive(&dataset.daily, Some(start));
            ComparisonRepo {
                id: dataset.repo.id,
                owner: dataset.repo.owner.clone(),
                name: dataset.repo.name.clone(),
                display_name: dataset.repo.display_name.clone(),
                total_commits: commits_of(&window),
                active_days: active_day_count(&window),
                regularity: regularity(&window, period_days),
                max_gap: max_gap(&window),
                current_streak: current_streak(&window, reference),
                longest_streak: longest_streak(&window),
                first_commit_date: first_commit_date(dataset),
                last_commit_date: last_commit_date(dataset),
            }
        })
        .collect();

    ComparisonStats {
        period: format!("{period_days}d"),
        repos,
    }
}

/// Commit totals for each catalog window ending at `reference`.
#[must_use]
pub fn build_repo_summaries(datasets: &[RepoDataset], reference: Day) -> Vec<RepoSummary> {
    debug!(repos = datasets.len(), %reference, "building repo summaries");
    datasets
        .iter()
        .map(|dataset| {
            let since = |range: DateRange| {
                commits_of(&filter_by_day_inclusive(
                    &dataset.daily,
                    resolve_range_start(range, reference),
                ))
            };
            RepoSummary {
                id: dataset.repo.id,
                owner: dataset.repo.owner.clone(),
                name: dataset.repo.name.clone(),
                display_name: dataset.repo.display_name.clone(),
                commits_7d: since(DateRange::Days7),
                commits_30d: since(DateRange::Days30),
                commits_90d: since(DateRange::Days90),
                commits_180d: since(DateRange::Days180),
                commits_360d: since(DateRange::Days360),
                commits_all: since(DateRange::All),
                last_sync_at: dataset.last_sync_at.clone(),
            }
        })
        .collect()
}

/// Range-filtered series and streak metrics for one repository.
///
/// For [`DateRange::All`] regularity is measured over the span from the
/// first to the last commit.
#[must_use]
pub fn build_repo_detail(dataset: &RepoDataset, range: DateRange, reference: Day) -> RepoDetail {
    debug!(repo = dataset.repo.id, %range, %reference, "building repo detail");
    let start = resolve_range_start(range, reference);
    let mut window = filter_by_day_inclusive(&dataset.daily, start);
    window.sort_by_key(|row| row.day);

    let period_days = range.days().unwrap_or_else(|| {
        day_span_inclusive(first_commit_date(dataset), last_commit_date(dataset))
    });

    RepoDetail {
        repo: dataset.repo.clone(),
        range,
        daily: window.iter().map(|row| DailyEntry::from(**row)).collect(),
        total_commits: commits_of(&window),
        active_days: active_day_count(&window),
        regularity: regularity(&window, period_days),
        max_gap: max_gap(&window),
        current_streak: current_streak(&window, reference),
        longest_streak: longest_streak(&window),
    }
}
