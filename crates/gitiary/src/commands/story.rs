use anyhow::Result;
use gitiary_calendar::{filter_by_day_inclusive, window_start};
use gitiary_config as cli;
use gitiary_story::generate_story_summary;
use gitiary_types::{Day, RepoDataset};

use crate::config::ResolvedConfig;
use crate::snapshot::Snapshot;

pub(crate) fn handle(args: cli::StoryArgs, resolved: &ResolvedConfig) -> Result<()> {
    let period_days = resolved.period_days(args.period_days);
    let snapshot = Snapshot::load(&args.input.input)?;
    let datasets = within_period(snapshot.repos, period_days, resolved.reference_day);
    let summary = generate_story_summary(&datasets, period_days);
    super::emit(&summary, resolved)
}

/// Narrow each dataset's daily rows to the period ending at `reference`.
fn within_period(repos: Vec<RepoDataset>, period_days: u32, reference: Day) -> Vec<RepoDataset> {
    let start = window_start(period_days, reference);
    repos
        .into_iter()
        .map(|mut dataset| {
            dataset.daily = filter_by_day_inclusive(&dataset.daily, Some(start))
                .into_iter()
                .copied()
                .collect();
            dataset
        })
        .collect()
}
