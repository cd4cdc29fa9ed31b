//! # gitiary
//!
//! **CLI Binary**
//!
//! This is the entry point for the `gitiary` command-line application.
//! It orchestrates the analytics crates over a JSON snapshot.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Load configuration and install logging
//! * Dispatch to exactly one view builder
//! * Handle errors and exit codes
//!
//! This crate should contain minimal business logic.

mod commands;
mod config;
mod error_hints;
mod logging;
mod snapshot;

use anyhow::Result;
use clap::Parser;
use gitiary_config::Cli;

pub use snapshot::Snapshot;

/// Entry point used by the `gitiary` binary.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.global.verbose);

    let resolved = config::resolve(&cli.global)?;
    tracing::debug!(?resolved, "configuration resolved");
    commands::dispatch(cli.command, &resolved)
}

/// Render an error with its context chain and any matching hints.
pub fn format_error(err: &anyhow::Error) -> String {
    error_hints::format(err)
}
