use anyhow::Result;
use gitiary_config as cli;
use gitiary_impact::build_impact_view;

use crate::config::ResolvedConfig;
use crate::snapshot::Snapshot;

pub(crate) fn handle(args: cli::ImpactArgs, resolved: &ResolvedConfig) -> Result<()> {
    let range = resolved.range(args.range);
    let data = Snapshot::load(&args.input.input)?.into_impact_data();
    let view = build_impact_view(&data, range, resolved.reference_day);
    super::emit(&view, resolved)
}
