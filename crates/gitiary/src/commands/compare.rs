use anyhow::Result;
use gitiary_compare::build_comparison_stats;
use gitiary_config as cli;
use gitiary_rank::sort_repos;

use crate::config::ResolvedConfig;
use crate::snapshot::Snapshot;

pub(crate) fn handle(args: cli::CompareArgs, resolved: &ResolvedConfig) -> Result<()> {
    let period_days = resolved.period_days(args.period_days);
    let snapshot = Snapshot::load(&args.input.input)?;
    let mut stats = build_comparison_stats(&snapshot.repos, period_days, resolved.reference_day);
    if let Some(field) = args.sort {
        tracing::debug!(?field, direction = ?args.direction, "sorting comparison rows");
        stats.repos = sort_repos(stats.repos, field, args.direction);
    }
    super::emit(&stats, resolved)
}
