use anyhow::{Result, anyhow};
use gitiary_compare::build_repo_detail;
use gitiary_config as cli;

use crate::config::ResolvedConfig;
use crate::snapshot::Snapshot;

pub(crate) fn handle(args: cli::DetailArgs, resolved: &ResolvedConfig) -> Result<()> {
    let range = resolved.range(args.range);
    let snapshot = Snapshot::load(&args.input.input)?;
    let dataset = snapshot
        .find_repo(args.repo)
        .ok_or_else(|| anyhow!("unknown repository id {}", args.repo))?;
    let detail = build_repo_detail(dataset, range, resolved.reference_day);
    super::emit(&detail, resolved)
}
