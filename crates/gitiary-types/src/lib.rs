//! # gitiary-types
//!
//! **Tier 0 (Core Types)**
//!
//! Pure data structures for per-repository commit activity and the views
//! derived from it. No I/O or business logic.
//!
//! ## What belongs here
//! * Input rows delivered by the persistence layer
//! * View shapes returned by the analytics builders
//! * Day/month/range keys and their parsing
//!
//! ## What does NOT belong here
//! * Streak, ranking, or aggregation logic
//! * File I/O or CLI parsing

mod day;
mod range;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

pub use day::{Day, DayParseError, MonthKey, MonthKeyParseError};
pub use range::{DateRange, RangeParseError};

// -----------------------------------------------------------------------------
// Row traits
// -----------------------------------------------------------------------------

/// A row keyed by calendar day.
pub trait Dated {
    fn day(&self) -> Day;
}

/// A per-day row carrying a commit count.
pub trait DayActivity: Dated {
    fn commits(&self) -> u64;

    fn is_active(&self) -> bool {
        self.commits() > 0
    }
}

impl<T: Dated + ?Sized> Dated for &T {
    fn day(&self) -> Day {
        (**self).day()
    }
}

impl<T: DayActivity + ?Sized> DayActivity for &T {
    fn commits(&self) -> u64 {
        (**self).commits()
    }
}

// -----------------------------------------------------------------------------
// Inputs
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoRef {
    pub id: i64,
    pub owner: String,
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl RepoRef {
    /// Presentation label: the display name when set, otherwise the repo name.
    #[must_use]
    pub fn display_label(&self) -> &str {
        match self.display_name.as_deref() {
            Some(label) if !label.is_empty() => label,
            _ => &self.name,
        }
    }

    /// `owner/name`, the identity used for name sorting.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyEntry {
    pub day: Day,
    pub commits: u64,
}

/// Daily commit count plus line and file churn for the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyImpactEntry {
    pub day: Day,
    pub commits: u64,
    #[serde(default)]
    pub additions: u64,
    #[serde(default)]
    pub deletions: u64,
    #[serde(default)]
    pub files_changed: u64,
}

impl DailyImpactEntry {
    #[must_use]
    pub fn total_changes(&self) -> u64 {
        self.additions + self.deletions
    }

    #[must_use]
    pub fn net(&self) -> i64 {
        self.additions as i64 - self.deletions as i64
    }
}

impl From<DailyEntry> for DailyImpactEntry {
    fn from(row: DailyEntry) -> Self {
        DailyImpactEntry {
            day: row.day,
            commits: row.commits,
            additions: 0,
            deletions: 0,
            files_changed: 0,
        }
    }
}

impl From<DailyImpactEntry> for DailyEntry {
    fn from(row: DailyImpactEntry) -> Self {
        DailyEntry {
            day: row.day,
            commits: row.commits,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitRecord {
    pub sha: String,
    pub day: Day,
    #[serde(with = "time::serde::rfc3339")]
    pub committed_at: OffsetDateTime,
    pub message: String,
    #[serde(default)]
    pub additions: u64,
    #[serde(default)]
    pub deletions: u64,
    #[serde(default)]
    pub files_changed: u64,
}

impl CommitRecord {
    #[must_use]
    pub fn total_changes(&self) -> u64 {
        self.additions + self.deletions
    }
}

/// Everything the engine knows about one repository for one request.
///
/// `first_commit_date` / `last_commit_date` cover the repository's whole
/// history and are never narrowed by a range filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoDataset {
    pub repo: RepoRef,
    #[serde(default)]
    pub daily: Vec<DailyImpactEntry>,
    #[serde(default)]
    pub commits: Vec<CommitRecord>,
    #[serde(default)]
    pub first_commit_date: Option<Day>,
    #[serde(default)]
    pub last_commit_date: Option<Day>,
    #[serde(default)]
    pub last_sync_at: Option<String>,
}

impl RepoDataset {
    #[must_use]
    pub fn new(repo: RepoRef) -> Self {
        RepoDataset {
            repo,
            daily: Vec::new(),
            commits: Vec::new(),
            first_commit_date: None,
            last_commit_date: None,
            last_sync_at: None,
        }
    }
}

/// Input bundle for the impact view: the combined series plus each repo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactData {
    #[serde(default)]
    pub daily: Vec<DailyImpactEntry>,
    #[serde(default)]
    pub repos: Vec<RepoDataset>,
}

/// Combined commits across repositories for one day (heatmap input and output).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatDay {
    pub day: Day,
    pub total_commits: u64,
}

/// Commits for one repository in one month, pre-aggregated by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatMonthRepoRow {
    pub month: MonthKey,
    pub repo_id: i64,
    pub owner: String,
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    pub commits: u64,
}

macro_rules! impl_day_activity {
    ($ty:ty, $commits:ident) => {
        impl Dated for $ty {
            fn day(&self) -> Day {
                self.day
            }
        }

        impl DayActivity for $ty {
            fn commits(&self) -> u64 {
                self.$commits
            }
        }
    };
}

impl_day_activity!(DailyEntry, commits);
impl_day_activity!(DailyImpactEntry, commits);
impl_day_activity!(HeatDay, total_commits);

impl Dated for CommitRecord {
    fn day(&self) -> Day {
        self.day
    }
}

// -----------------------------------------------------------------------------
// Impact view
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactSummary {
    pub total_commits: u64,
    pub first_commit_date: Option<Day>,
    pub last_commit_date: Option<Day>,
    pub active_days: u32,
    pub total_days: u32,
    pub lines_added: u64,
    pub lines_deleted: u64,
    pub net_change: i64,
    pub files_changed: u64,
    pub avg_lines_per_commit: f64,
    pub avg_files_per_commit: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactDailyRow {
    pub day: Day,
    pub commits: u64,
    pub additions: u64,
    pub deletions: u64,
    pub files_changed: u64,
    pub net: i64,
    pub total_changes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactTopDayRow {
    pub day: Day,
    pub commits: u64,
    pub total_changes: u64,
    pub files_changed: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactLargestCommitRow {
    pub repo_id: i64,
    pub owner: String,
    pub name: String,
    pub display_name: Option<String>,
    pub sha: String,
    pub day: Day,
    #[serde(with = "time::serde::rfc3339")]
    pub committed_at: OffsetDateTime,
    pub message: String,
    pub additions: u64,
    pub deletions: u64,
    pub files_changed: u64,
    pub total_changes: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactRepoRow {
    pub id: i64,
    pub owner: String,
    pub name: String,
    pub display_name: Option<String>,
    pub commits: u64,
    pub additions: u64,
    pub deletions: u64,
    pub net: i64,
    pub files_changed: u64,
    pub avg_lines_per_commit: f64,
    pub avg_files_per_commit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactView {
    pub range: DateRange,
    pub summary: ImpactSummary,
    pub daily_rows: Vec<ImpactDailyRow>,
    pub top_by_commits: Vec<ImpactTopDayRow>,
    pub top_by_changes: Vec<ImpactTopDayRow>,
    pub top_by_files: Vec<ImpactTopDayRow>,
    pub largest_commits: Vec<ImpactLargestCommitRow>,
    pub repo_rows: Vec<ImpactRepoRow>,
}

// -----------------------------------------------------------------------------
// Heatmap
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatMonthRepo {
    pub repo_id: i64,
    pub owner: String,
    pub name: String,
    pub display_name: Option<String>,
    pub commits: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatMonth {
    pub month: MonthKey,
    pub total_commits: u64,
    pub repos: Vec<HeatMonthRepo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatYear {
    pub year: i32,
    pub daily: Vec<HeatDay>,
    pub months: Vec<HeatMonth>,
}

// -----------------------------------------------------------------------------
// Story
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryRepo {
    pub id: i64,
    pub owner: String,
    pub name: String,
    pub display_name: Option<String>,
    pub commits: u64,
    pub regularity: f64,
}

/// A day whose combined commit count is an outlier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    pub day: Day,
    pub commits: u64,
    /// Display labels of the repositories with commits that day, in input order.
    pub repos: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorySummary {
    pub total_commits: u64,
    pub active_days: u32,
    pub total_days: u32,
    pub most_active_repo: Option<StoryRepo>,
    pub most_consistent_repo: Option<StoryRepo>,
    pub longest_streak: u32,
    pub highlights: Vec<Highlight>,
}

// -----------------------------------------------------------------------------
// Comparison and summaries
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRepo {
    pub id: i64,
    pub owner: String,
    pub name: String,
    pub display_name: Option<String>,
    pub total_commits: u64,
    pub active_days: u32,
    pub regularity: f64,
    pub max_gap: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub first_commit_date: Option<Day>,
    pub last_commit_date: Option<Day>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonStats {
    /// Window label such as `"360d"`.
    pub period: String,
    pub repos: Vec<ComparisonRepo>,
}

/// Commit totals per catalog window for one repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoSummary {
    pub id: i64,
    pub owner: String,
    pub name: String,
    pub display_name: Option<String>,
    pub commits_7d: u64,
    pub commits_30d: u64,
    pub commits_90d: u64,
    pub commits_180d: u64,
    pub commits_360d: u64,
    pub commits_all: u64,
    pub last_sync_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoDetail {
    pub repo: RepoRef,
    pub range: DateRange,
    pub daily: Vec<DailyEntry>,
    pub total_commits: u64,
    pub active_days: u32,
    pub regularity: f64,
    pub max_gap: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
}

// -----------------------------------------------------------------------------
// Sorting enums (shared with CLI)
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    /// `owner/name`, case-insensitive.
    Name,
    FirstCommitDate,
    LastCommitDate,
    TotalCommits,
    ActiveDays,
    Regularity,
    MaxGap,
    CurrentStreak,
    LongestStreak,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}
