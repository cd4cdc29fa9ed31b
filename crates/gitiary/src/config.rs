use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use gitiary_calendar::today_utc;
use gitiary_compare::DEFAULT_PERIOD_DAYS;
use gitiary_config::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DateRange, Day, GlobalArgs, REFERENCE_DAY_ENV, UserConfig,
};
use gitiary_heat::DEFAULT_MIN_YEAR;

/// Settings after applying flag > config file > built-in default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolvedConfig {
    pub reference_day: Day,
    pub pretty: bool,
    pub default_range: DateRange,
    pub min_heat_year: i32,
    pub period_days: u32,
}

impl ResolvedConfig {
    pub(crate) fn range(&self, flag: Option<DateRange>) -> DateRange {
        flag.unwrap_or(self.default_range)
    }

    pub(crate) fn min_heat_year(&self, flag: Option<i32>) -> i32 {
        flag.unwrap_or(self.min_heat_year)
    }

    pub(crate) fn period_days(&self, flag: Option<u32>) -> u32 {
        flag.unwrap_or(self.period_days)
    }
}

fn discovered_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join(CONFIG_DIR_NAME).join("config.toml"));
    }
    paths
}

fn read_config(path: &Path) -> Result<UserConfig> {
    UserConfig::from_file(path)
        .with_context(|| format!("failed to load config file {}", path.display()))
}

/// An explicit path must exist; discovered paths are optional.
pub(crate) fn load_config(explicit: Option<&Path>) -> Result<Option<UserConfig>> {
    if let Some(path) = explicit {
        return read_config(path).map(Some);
    }
    for path in discovered_paths() {
        if path.is_file() {
            tracing::debug!(path = %path.display(), "using discovered config file");
            return read_config(&path).map(Some);
        }
    }
    Ok(None)
}

/// Flag, then a non-empty `env_value`, then `today`.
pub(crate) fn resolve_reference_day(
    flag: Option<Day>,
    env_value: Option<&str>,
    today: Day,
) -> Result<Day> {
    if let Some(day) = flag {
        return Ok(day);
    }
    match env_value.map(str::trim).filter(|raw| !raw.is_empty()) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("invalid {REFERENCE_DAY_ENV} value")),
        None => Ok(today),
    }
}

pub(crate) fn resolve_with(
    global: &GlobalArgs,
    user: Option<&UserConfig>,
    reference_day: Day,
) -> ResolvedConfig {
    ResolvedConfig {
        reference_day,
        pretty: global.pretty || user.and_then(|u| u.pretty).unwrap_or(false),
        default_range: user
            .and_then(|u| u.default_range)
            .unwrap_or_default(),
        min_heat_year: user
            .and_then(|u| u.min_heat_year)
            .unwrap_or(DEFAULT_MIN_YEAR),
        period_days: user
            .and_then(|u| u.period_days)
            .unwrap_or(DEFAULT_PERIOD_DAYS),
    }
}

pub(crate) fn resolve(global: &GlobalArgs) -> Result<ResolvedConfig> {
    let user = load_config(global.config.as_deref())?;
    let env_value = std::env::var(REFERENCE_DAY_ENV).ok();
    let reference_day =
        resolve_reference_day(global.reference_day, env_value.as_deref(), today_utc())?;
    Ok(resolve_with(global, user.as_ref(), reference_day))
}
