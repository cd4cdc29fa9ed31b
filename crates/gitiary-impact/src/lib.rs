//! # gitiary-impact
//!
//! **Tier 2 (Impact View)**
//!
//! Builds the churn dashboard: a range-filtered summary, top-day rankings,
//! the largest commits, and one rollup row per repository.
//!
//! ## What belongs here
//! * Window filtering of the combined and per-repo impact series
//! * Top-N rankings and their tie-break rules
//!
//! ## What does NOT belong here
//! * Streak metrics (see `gitiary-streaks`)
//! * Reading rows from storage

#![forbid(unsafe_code)]

use gitiary_calendar::{day_span_inclusive, filter_by_day_inclusive, resolve_range_start};
use gitiary_math::safe_ratio;
use gitiary_types::{
    DailyImpactEntry, DateRange, Day, ImpactData, ImpactDailyRow, ImpactLargestCommitRow,
    ImpactRepoRow, ImpactSummary, ImpactTopDayRow, ImpactView, RepoDataset,
};
use tracing::debug;

/// Rows kept in each top-day ranking.
pub const TOP_DAYS: usize = 5;
/// Rows kept in the largest-commit ranking.
pub const LARGEST_COMMITS: usize = 10;

#[derive(Debug, Default, Clone, Copy)]
struct Totals {
    commits: u64,
    additions: u64,
    deletions: u64,
    files_changed: u64,
}

impl Totals {
    fn sum<'a>(rows: impl IntoIterator<Item = &'a DailyImpactEntry>) -> Self {
        rows.into_iter().fold(Self::default(), |acc, row| Self {
            commits: acc.commits + row.commits,
            additions: acc.additions + row.additions,
            deletions: acc.deletions + row.deletions,
            files_changed: acc.files_changed + row.files_changed,
        })
    }

    fn net(&self) -> i64 {
        self.additions as i64 - self.deletions as i64
    }

    fn avg_lines_per_commit(&self) -> f64 {
        safe_ratio(self.additions + self.deletions, self.commits)
    }

    fn avg_files_per_commit(&self) -> f64 {
        safe_ratio(self.files_changed, self.commits)
    }
}

/// Build the impact view for `range`, anchored at `reference`.
///
/// Every repository in `data.repos` yields a row, even with no activity in
/// the window.
#[must_use]
pub fn build_impact_view(data: &ImpactData, range: DateRange, reference: Day) -> ImpactView {
    let start = resolve_range_start(range, reference);
    debug!(
        %range,
        %reference,
        daily = data.daily.len(),
        repos = data.repos.len(),
        "building impact view"
    );

    let mut filtered = filter_by_day_inclusive(&data.daily, start);
    filtered.sort_by_key(|row| row.day);

    let daily_rows: Vec<ImpactDailyRow> = filtered.iter().map(|row| daily_row(row)).collect();
    let summary = summarize(&filtered);

    let view = ImpactView {
        range,
        summary,
        top_by_commits: top_days(&daily_rows, |row| row.commits),
        top_by_changes: top_days(&daily_rows, |row| row.total_changes),
        top_by_files: top_days(&daily_rows, |row| row.files_changed),
        largest_commits: largest_commits(&data.repos, start),
        repo_rows: repo_rows(&data.repos, start),
        daily_rows,
    };

    debug!(
        daily_rows = view.daily_rows.len(),
        largest_commits = view.largest_commits.len(),
        repo_rows = view.repo_rows.len(),
        total_commits = view.summary.total_commits,
        "impact view built"
    );
    view
}

fn daily_row(row: &DailyImpactEntry) -> ImpactDailyRow {
    ImpactDailyRow {
        day: row.day,
        commits: row.commits,
        additions: row.additions,
        deletions: row.deletions,
        files_changed: row.files_changed,
        net: row.net(),
        total_changes: row.total_changes(),
    }
}

/// `rows` must be sorted ascending by day.
fn summarize(rows: &[&DailyImpactEntry]) -> ImpactSummary {
    let totals = Totals::sum(rows.iter().copied());
    let first_commit_date = rows.first().map(|row| row.day);
    let last_commit_date = rows.last().map(|row| row.day);
    let active_days = rows.iter().filter(|row| row.commits > 0).count();

    ImpactSummary {
        total_commits: totals.commits,
        first_commit_date,
        last_commit_date,
        active_days: u32::try_from(active_days).unwrap_or(u32::MAX),
        total_days: day_span_inclusive(first_commit_date, last_commit_date),
        lines_added: totals.additions,
        lines_deleted: totals.deletions,
        net_change: totals.net(),
        files_changed: totals.files_changed,
        avg_lines_per_commit: totals.avg_lines_per_commit(),
        avg_files_per_commit: totals.avg_files_per_commit(),
    }
}

/// Highest `metric` first, earlier day on ties.
fn top_days(
    rows: &[ImpactDailyRow],
    metric: impl Fn(&ImpactDailyRow) -> u64,
) -> Vec<ImpactTopDayRow> {
    let mut ranked: Vec<&ImpactDailyRow> = rows.iter().collect();
    ranked.sort_by(|a, b| metric(b).cmp(&metric(a)).then_with(|| a.day.cmp(&b.day)));
    ranked
        .into_iter()
        .take(TOP_DAYS)
        .map(|row| ImpactTopDayRow {
            day: row.day,
            commits: row.commits,
            total_changes: row.total_changes,
            files_changed: row.files_changed,
        })
        .collect()
}

/// Largest `total_changes` first, later commit on ties.
fn largest_commits(repos: &[RepoDataset], start: Option<Day>) -> Vec<ImpactLargestCommitRow> {
    let mut candidates: Vec<ImpactLargestCommitRow> = repos
        .iter()
        .flat_map(|dataset| {
            filter_by_day_inclusive(&dataset.commits, start)
                .into_iter()
                .map(move |commit| ImpactLargestCommitRow {
                    repo_id: dataset.repo.id,
                    owner: dataset.repo.owner.clone(),
                    name: dataset.repo.name.clone(),
                    display_name: dataset.repo.display_name.clone(),
                    sha: commit.sha.clone(),
                    day: commit.day,
                    committed_at: commit.committed_at,
                    message: commit.message.clone(),
                    additions: commit.additions,
                    deletions: commit.deletions,
                    files_changed: commit.files_changed,
                    total_changes: commit.total_changes(),
                })
        })
        .collect();

    candidates.sort_by(|a, b| {
        b.total_changes
            .cmp(&a.total_changes)
            .then_with(|| b.committed_at.cmp(&a.committed_at))
    });
    candidates.truncate(LARGEST_COMMITS);
    candidates
}

/// Highest net change first, name ascending (case-insensitive) on ties.
/// Idle repositories stay.
fn repo_rows(repos: &[RepoDataset], start: Option<Day>) -> Vec<ImpactRepoRow> {
    let mut rows: Vec<ImpactRepoRow> = repos
        .iter()
        .map(|dataset| {
            let totals = Totals::sum(filter_by_day_inclusive(&dataset.daily, start));
            ImpactRepoRow {
                id: dataset.repo.id,
                owner: dataset.repo.owner.clone(),
                name: dataset.repo.name.clone(),
                display_name: dataset.repo.display_name.clone(),
                commits: totals.commits,
                additions: totals.additions,
                deletions: totals.deletions,
                net: totals.net(),
                files_changed: totals.files_changed,
                avg_lines_per_commit: totals.avg_lines_per_commit(),
                avg_files_per_commit: totals.avg_files_per_commit(),
            }
        })
        .collect();

    rows.sort_by_cached_key(|row| (std::cmp::Reverse(row.net), row.name.to_lowercase()));
    rows
}
