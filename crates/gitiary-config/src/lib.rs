//! # gitiary-config
//!
//! **Tier 4 (Configuration)**
//!
//! This crate defines the CLI arguments and the user configuration file.
//!
//! ## What belongs here
//! * Clap `Parser`, `Args`, `Subcommand` structs
//! * The TOML user configuration schema
//!
//! ## What does NOT belong here
//! * Analytics
//! * Snapshot loading or other I/O beyond reading the config file
//! * Resolving flag/config/default precedence (see the `gitiary` binary)

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
pub use gitiary_types::{DateRange, Day, SortDirection, SortField};

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "gitiary.toml";
/// Directory under the platform config dir holding `config.toml`.
pub const CONFIG_DIR_NAME: &str = "gitiary";
/// Environment variable that pins the reference day.
pub const REFERENCE_DAY_ENV: &str = "GITIARY_REFERENCE_DAY";

/// `gitiary` - commit activity analytics over a repository snapshot.
///
/// Each subcommand reads a JSON snapshot and prints one view as JSON.
#[derive(Parser, Debug)]
#[command(name = "gitiary", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Path to a TOML config file (default: ./gitiary.toml, then the user config dir).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbose output (repeat for more detail). `RUST_LOG` takes precedence.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Day the windows end on (default: $GITIARY_REFERENCE_DAY, then today in UTC).
    #[arg(long, global = true, value_name = "YYYY-MM-DD")]
    pub reference_day: Option<Day>,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Line and file churn for a range, with top days and largest commits.
    Impact(ImpactArgs),

    /// Year, month, and repository heatmap data.
    Heat(HeatArgs),

    /// Narrative summary with highlight days.
    Story(StoryArgs),

    /// Per-repository streaks, gaps, and regularity.
    Compare(CompareArgs),

    /// Commit totals per repository for each window.
    Summary(SummaryArgs),

    /// Daily series and streak metrics for one repository.
    Detail(DetailArgs),
}

#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Snapshot JSON file.
    #[arg(long, short = 'i', value_name = "SNAPSHOT")]
    pub input: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct ImpactArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Window in days (7, 30, 90, 180, 360) or `all`.
    #[arg(long, value_name = "RANGE")]
    pub range: Option<DateRange>,
}

#[derive(Args, Debug, Clone)]
pub struct HeatArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Earliest year to include (default: 2025).
    #[arg(long, value_name = "YEAR")]
    pub min_year: Option<i32>,
}

#[derive(Args, Debug, Clone)]
pub struct StoryArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Length of the story period in days (default: 360).
    #[arg(long, value_name = "DAYS")]
    pub period_days: Option<u32>,
}

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Lookback in days for the metrics (default: 360).
    #[arg(long, value_name = "DAYS")]
    pub period_days: Option<u32>,

    /// Field to sort rows by (default: input order).
    #[arg(long, value_enum)]
    pub sort: Option<SortField>,

    /// Sort direction.
    #[arg(long, value_enum, default_value_t = SortDirection::Asc)]
    pub direction: SortDirection,
}

#[derive(Args, Debug, Clone)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Args, Debug, Clone)]
pub struct DetailArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Repository id.
    #[arg(long, value_name = "ID")]
    pub repo: i64,

    /// Window in days (7, 30, 90, 180, 360) or `all`.
    #[arg(long, value_name = "RANGE")]
    pub range: Option<DateRange>,
}

// =============================================================================
// TOML Configuration File
// =============================================================================

/// User defaults. Every key is optional; CLI flags override them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UserConfig {
    /// Range for `impact` and `detail`.
    pub default_range: Option<DateRange>,
    /// Earliest heatmap year.
    pub min_heat_year: Option<i32>,
    /// Period for `story` and `compare`.
    pub period_days: Option<u32>,
    /// Pretty-print JSON output.
    pub pretty: Option<bool>,
}

impl UserConfig {
    /// Load configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Load configuration from a file path.
    pub fn from_file(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}
