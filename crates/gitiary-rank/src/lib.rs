//! # gitiary-rank
//!
//! **Tier 1 (Ranking)**
//!
//! Stable multi-field sorting for repository comparison tables.
//!
//! Nullable date fields always sort after present dates; the requested
//! direction only orders the present values.

#![forbid(unsafe_code)]

use std::cmp::Ordering;

use gitiary_types::{ComparisonRepo, Day, SortDirection, SortField};

/// A comparable value extracted from a row for one [`SortField`].
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    /// Already lowercased.
    Text(String),
    Date(Option<Day>),
    Number(f64),
}

/// Rows that can be ordered by the comparison-table field catalog.
pub trait Rankable {
    fn sort_key(&self, field: SortField) -> SortKey;
}

impl Rankable for ComparisonRepo {
    fn sort_key(&self, field: SortField) -> SortKey {
        match field {
            SortField::Name => {
                SortKey::Text(format!("{}/{}", self.owner, self.name).to_lowercase())
            }
            SortField::FirstCommitDate => SortKey::Date(self.first_commit_date),
            SortField::LastCommitDate => SortKey::Date(self.last_commit_date),
            SortField::TotalCommits => SortKey::Number(self.total_commits as f64),
            SortField::ActiveDays => SortKey::Number(f64::from(self.active_days)),
            SortField::Regularity => SortKey::Number(self.regularity),
            SortField::MaxGap => SortKey::Number(f64::from(self.max_gap)),
            SortField::CurrentStreak => SortKey::Number(f64::from(self.current_streak)),
            SortField::LongestStreak => SortKey::Number(f64::from(self.longest_streak)),
        }
    }
}

fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

/// Compare two keys under `direction`.
///
/// Missing dates are placed last for both directions. Keys of different
/// variants compare equal.
#[must_use]
pub fn compare_keys(a: &SortKey, b: &SortKey, direction: SortDirection) -> Ordering {
    match (a, b) {
        (SortKey::Date(a), SortKey::Date(b)) => match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => directed(a.cmp(b), direction),
        },
        (SortKey::Text(a), SortKey::Text(b)) => directed(a.cmp(b), direction),
        (SortKey::Number(a), SortKey::Number(b)) => directed(a.total_cmp(b), direction),
        _ => Ordering::Equal,
    }
}

/// Sort `rows` in place by `field`. Ties keep their relative order.
pub fn sort_by_field<T: Rankable>(rows: &mut [T], field: SortField, direction: SortDirection) {
    rows.sort_by_cached_key(|row| Keyed(row.sort_key(field), direction));
}

/// Return `repos` ordered by `field` and `direction`.
#[must_use]
pub fn sort_repos<T: Rankable>(
    mut repos: Vec<T>,
    field: SortField,
    direction: SortDirection,
) -> Vec<T> {
    sort_by_field(&mut repos, field, direction);
    repos
}

/// Key wrapper so the cached-key sort can use [`compare_keys`].
struct Keyed(SortKey, SortDirection);

impl PartialEq for Keyed {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Keyed {}

impl PartialOrd for Keyed {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Keyed {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_keys(&self.0, &other.0, self.1)
    }
}
