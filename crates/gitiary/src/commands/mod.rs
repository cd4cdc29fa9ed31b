pub(crate) mod compare;
pub(crate) mod detail;
pub(crate) mod heat;
pub(crate) mod impact;
pub(crate) mod story;
pub(crate) mod summary;

use std::io::Write;

use anyhow::{Context, Result};
use gitiary_config as cli;
use serde::Serialize;

use crate::config::ResolvedConfig;

pub(crate) fn dispatch(command: cli::Commands, resolved: &ResolvedConfig) -> Result<()> {
    match command {
        cli::Commands::Impact(args) => impact::handle(args, resolved),
        cli::Commands::Heat(args) => heat::handle(args, resolved),
        cli::Commands::Story(args) => story::handle(args, resolved),
        cli::Commands::Compare(args) => compare::handle(args, resolved),
        cli::Commands::Summary(args) => summary::handle(args, resolved),
        cli::Commands::Detail(args) => detail::handle(args, resolved),
    }
}

/// Write `value` to stdout as one JSON document.
pub(crate) fn emit<T: Serialize>(value: &T, resolved: &ResolvedConfig) -> Result<()> {
    let json = if resolved.pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("failed to serialize output")?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}").context("failed to write output")?;
    Ok(())
}
