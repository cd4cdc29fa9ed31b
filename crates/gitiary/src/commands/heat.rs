use anyhow::Result;
use gitiary_config as cli;
use gitiary_heat::build_heat_years;

use crate::config::ResolvedConfig;
use crate::snapshot::Snapshot;

pub(crate) fn handle(args: cli::HeatArgs, resolved: &ResolvedConfig) -> Result<()> {
    let min_year = resolved.min_heat_year(args.min_year);
    let snapshot = Snapshot::load(&args.input.input)?;
    let years = build_heat_years(&snapshot.heat_daily, &snapshot.heat_monthly, min_year);
    super::emit(&years, resolved)
}
