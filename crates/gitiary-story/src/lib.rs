//! # gitiary-story
//!
//! **Tier 2 (Story)**
//!
//! Narrative summary over a set of repositories: totals, the most active and
//! most consistent repository, the longest streak, and highlight days whose
//! combined commits are statistical outliers.
//!
//! Inputs are expected to be pre-filtered to the period; nothing here
//! re-applies a date window.

#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use gitiary_math::outlier_threshold;
use gitiary_streaks::{longest_streak, regularity};
use gitiary_types::{Day, DayActivity, Highlight, RepoDataset, StoryRepo, StorySummary};
use tracing::debug;

/// Standard deviations above the mean a day must exceed to be highlighted.
pub const HIGHLIGHT_SIGMA: f64 = 1.5;
/// Highlights kept after ranking.
pub const MAX_HIGHLIGHTS: usize = 5;

/// Summarize `datasets` over a period of `period_days`.
#[must_use]
pub fn generate_story_summary(datasets: &[RepoDataset], period_days: u32) -> StorySummary {
    debug!(repos = datasets.len(), period_days, "generating story summary");

    let repos: Vec<StoryRepo> = datasets
        .iter()
        .map(|dataset| StoryRepo {
            id: dataset.repo.id,
            owner: dataset.repo.owner.clone(),
            name: dataset.repo.name.clone(),
            display_name: dataset.repo.display_name.clone(),
            commits: dataset.daily.iter().map(DayActivity::commits).sum(),
            regularity: regularity(&dataset.daily, period_days),
        })
        .collect();

    let by_day = combine_days(datasets);
    let total_commits = repos.iter().map(|repo| repo.commits).sum();

    let most_active_repo =
        first_max(repos.iter().map(|repo| repo.commits as f64)).map(|idx| repos[idx].clone());
    let most_consistent_repo =
        first_max(repos.iter().map(|repo| repo.regularity)).map(|idx| repos[idx].clone());

    let summary = StorySummary {
        total_commits,
        active_days: u32::try_from(by_day.len()).unwrap_or(u32::MAX),
        total_days: period_days,
        most_active_repo,
        most_consistent_repo,
        longest_streak: datasets
            .iter()
            .map(|dataset| longest_streak(&dataset.daily))
            .max()
            .unwrap_or(0),
        highlights: highlights(by_day),
    };

    debug!(
        total_commits = summary.total_commits,
        active_days = summary.active_days,
        highlights = summary.highlights.len(),
        "story summary generated"
    );
    summary
}

#[derive(Default)]
struct DayTotal {
    commits: u64,
    repo_ids: Vec<i64>,
    labels: Vec<String>,
}

/// Combined commits and contributing repositories per active day.
///
/// Repositories are distinguished by id, so two repos sharing a label both
/// contribute their label.
fn combine_days(datasets: &[RepoDataset]) -> BTreeMap<Day, DayTotal> {
    let mut by_day: BTreeMap<Day, DayTotal> = BTreeMap::new();
    for dataset in datasets {
        for row in dataset.daily.iter().filter(|row| row.is_active()) {
            let total = by_day.entry(row.day).or_default();
            total.commits += row.commits;
            if !total.repo_ids.contains(&dataset.repo.id) {
                total.repo_ids.push(dataset.repo.id);
                total.labels.push(dataset.repo.display_label().to_string());
            }
        }
    }
    by_day
}

/// Days strictly above the outlier threshold, busiest first, earlier day on ties.
fn highlights(by_day: BTreeMap<Day, DayTotal>) -> Vec<Highlight> {
    let totals: Vec<f64> = by_day.values().map(|total| total.commits as f64).collect();
    let threshold = outlier_threshold(&totals, HIGHLIGHT_SIGMA);

    let mut picked: Vec<Highlight> = by_day
        .into_iter()
        .filter(|(_, total)| total.commits as f64 > threshold)
        .map(|(day, total)| Highlight {
            day,
            commits: total.commits,
            repos: total.labels,
        })
        .collect();
    // Ascending by day already; a stable sort keeps earlier days first on ties.
    picked.sort_by(|a, b| b.commits.cmp(&a.commits));
    picked.truncate(MAX_HIGHLIGHTS);
    picked
}

/// Index of the first maximum, `None` when the maximum is not positive.
fn first_max(values: impl Iterator<Item = f64>) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, value) in values.enumerate() {
        if best.is_none_or(|(_, top)| value > top) {
            best = Some((idx, value));
        }
    }
    best.filter(|(_, value)| *value > 0.0).map(|(idx, _)| idx)
}
