use anyhow::Result;
use gitiary_compare::build_repo_summaries;
use gitiary_config as cli;

use crate::config::ResolvedConfig;
use crate::snapshot::Snapshot;

pub(crate) fn handle(args: cli::SummaryArgs, resolved: &ResolvedConfig) -> Result<()> {
    let snapshot = Snapshot::load(&args.input.input)?;
    let summaries = build_repo_summaries(&snapshot.repos, resolved.reference_day);
    super::emit(&summaries, resolved)
}
