//! # gitiary-heat
//!
//! **Tier 2 (Heatmap)**
//!
//! Reshapes pre-aggregated daily and monthly-per-repository rows into a
//! year → month → repository tree for calendar heatmaps.

#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use gitiary_types::{HeatDay, HeatMonth, HeatMonthRepo, HeatMonthRepoRow, HeatYear, MonthKey};
use tracing::debug;

/// Earliest year shown when a caller has no preference.
pub const DEFAULT_MIN_YEAR: i32 = 2025;

#[derive(Default)]
struct YearAcc {
    daily: Vec<HeatDay>,
    months: BTreeMap<MonthKey, Vec<HeatMonthRepo>>,
}

/// Group heat rows by year, newest year first.
///
/// Zero-commit rows and rows before `min_year` are dropped. When nothing
/// remains the result is a single empty `min_year` entry.
#[must_use]
pub fn build_heat_years(
    daily: &[HeatDay],
    monthly: &[HeatMonthRepoRow],
    min_year: i32,
) -> Vec<HeatYear> {
    debug!(
        daily = daily.len(),
        monthly = monthly.len(),
        min_year,
        "building heat years"
    );

    let mut years: BTreeMap<i32, YearAcc> = BTreeMap::new();

    for row in daily {
        if row.total_commits == 0 || row.day.year() < min_year {
            continue;
        }
        years.entry(row.day.year()).or_default().daily.push(*row);
    }

    for row in monthly {
        if row.commits == 0 || row.month.year() < min_year {
            continue;
        }
        let repos = years
            .entry(row.month.year())
            .or_default()
            .months
            .entry(row.month)
            .or_default();
        match repos.iter_mut().find(|repo| repo.repo_id == row.repo_id) {
            Some(repo) => repo.commits += row.commits,
            None => repos.push(HeatMonthRepo {
                repo_id: row.repo_id,
                owner: row.owner.clone(),
                name: row.name.clone(),
                display_name: row.display_name.clone(),
                commits: row.commits,
            }),
        }
    }

    if years.is_empty() {
        debug!(min_year, "no heat data, using empty placeholder year");
        return vec![HeatYear {
            year: min_year,
            daily: Vec::new(),
            months: Vec::new(),
        }];
    }

    let result: Vec<HeatYear> = years
        .into_iter()
        .rev()
        .map(|(year, acc)| finish_year(year, acc))
        .collect();
    debug!(years = result.len(), "heat years built");
    result
}

fn finish_year(year: i32, acc: YearAcc) -> HeatYear {
    let mut daily = acc.daily;
    daily.sort_by_key(|row| row.day);

    let months = acc
        .months
        .into_iter()
        .rev()
        .map(|(month, mut repos)| {
            repos.sort_by(|a, b| {
                b.commits
                    .cmp(&a.commits)
                    .then_with(|| a.owner.cmp(&b.owner))
                    .then_with(|| a.name.cmp(&b.name))
            });
            HeatMonth {
                month,
                total_commits: repos.iter().map(|repo| repo.commits).sum(),
                repos,
            }
        })
        .collect();

    HeatYear {
        year,
        daily,
        months,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gitiary_types::Day;

    fn heat_day(s: &str, total: u64) -> HeatDay {
        HeatDay {
            day: s.parse::<Day>().unwrap(),
            total_commits: total,
        }
    }

    fn month_row(
        month: &str,
        id: i64,
        owner: &str,
        name: &str,
        commits: u64,
    ) -> HeatMonthRepoRow {
        HeatMonthRepoRow {
            month: month.parse().unwrap(),
            repo_id: id,
            owner: owner.into(),
            name: name.into(),
            display_name: None,
            commits,
        }
    }

    #[test]
    fn empty_input_yields_single_min_year() {
        let years = build_heat_years(&[], &[], 2025);
        assert_eq!(years.len(), 1);
        assert_eq!(years[0].year, 2025);
        assert!(years[0].daily.is_empty());
        assert!(years[0].months.is_empty());
    }

    #[test]
    fn zero_rows_alone_count_as_no_data() {
        let years = build_heat_years(
            &[heat_day("2026-01-01", 0)],
            &[month_row("2026-01", 1, "o", "a", 0)],
            2025,
        );
        assert_eq!(years.len(), 1);
        assert_eq!(years[0].year, 2025);
        assert!(years[0].daily.is_empty());
    }

    #[test]
    fn rows_before_min_year_are_dropped() {
        let years = build_heat_years(&[heat_day("2024-12-31", 3)], &[], 2025);
        assert_eq!(years.len(), 1);
        assert!(years[0].daily.is_empty());
    }

    #[test]
    fn repos_in_month_sort_by_commits_then_owner_then_name() {
        let years = build_heat_years(
            &[],
            &[
                month_row("2026-02", 1, "bob", "a", 5),
                month_row("2026-02", 2, "alice", "z", 5),
                month_row("2026-02", 3, "alice", "b", 5),
                month_row("2026-02", 4, "zed", "top", 9),
            ],
            2025,
        );
        let names: Vec<&str> = years[0].months[0]
            .repos
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, ["top", "b", "z", "a"]);
        assert_eq!(years[0].months[0].total_commits, 24);
    }

    #[test]
    fn duplicate_month_rows_for_one_repo_are_merged() {
        let years = build_heat_years(
            &[],
            &[
                month_row("2026-02", 1, "o", "a", 2),
                month_row("2026-02", 1, "o", "a", 3),
            ],
            2025,
        );
        assert_eq!(years[0].months[0].repos.len(), 1);
        assert_eq!(years[0].months[0].repos[0].commits, 5);
    }
}
