use std::path::Path;

use anyhow::{Context, Result};
use gitiary_types::{DailyImpactEntry, HeatDay, HeatMonthRepoRow, ImpactData, RepoDataset};
use serde::{Deserialize, Serialize};

/// Everything a persistence layer would hand the engine for one request.
///
/// Every field defaults to empty when absent from the JSON document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Snapshot {
    pub combined_daily: Vec<DailyImpactEntry>,
    pub repos: Vec<RepoDataset>,
    pub heat_daily: Vec<HeatDay>,
    pub heat_monthly: Vec<HeatMonthRepoRow>,
}

impl Snapshot {
    pub fn parse(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("failed to parse snapshot JSON")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read snapshot {}", path.display()))?;
        let snapshot = Self::parse(&content)
            .with_context(|| format!("invalid snapshot {}", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            repos = snapshot.repos.len(),
            combined_daily = snapshot.combined_daily.len(),
            "snapshot loaded"
        );
        Ok(snapshot)
    }

    pub fn find_repo(&self, id: i64) -> Option<&RepoDataset> {
        self.repos.iter().find(|dataset| dataset.repo.id == id)
    }

    pub fn into_impact_data(self) -> ImpactData {
        ImpactData {
            daily: self.combined_daily,
            repos: self.repos,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_an_empty_snapshot() {
        assert_eq!(Snapshot::parse("{}").unwrap(), Snapshot::default());
    }

    #[test]
    fn parses_camel_case_fields() {
        let snapshot = Snapshot::parse(
            r#"{
                "combinedDaily": [{"day": "2026-01-01", "commits": 2, "additions": 10}],
                "repos": [{
                    "repo": {"id": 3, "owner": "o", "name": "r"},
                    "daily": [{"day": "2026-01-01", "commits": 2}],
                    "firstCommitDate": "2025-06-01"
                }],
                "heatDaily": [{"day": "2026-01-01", "totalCommits": 2}],
                "heatMonthly": [{"month": "2026-01", "repoId": 3, "owner": "o", "name": "r", "commits": 2}]
            }"#,
        )
        .unwrap();
        assert_eq!(snapshot.combined_daily[0].additions, 10);
        assert_eq!(snapshot.combined_daily[0].deletions, 0);
        assert_eq!(snapshot.find_repo(3).unwrap().repo.name, "r");
        assert!(snapshot.find_repo(4).is_none());
        assert_eq!(snapshot.heat_daily[0].total_commits, 2);
        assert_eq!(snapshot.heat_monthly[0].repo_id, 3);

        let data = snapshot.into_impact_data();
        assert_eq!(data.daily.len(), 1);
        assert_eq!(data.repos.len(), 1);
    }

    #[test]
    fn bad_day_is_reported() {
        let err = Snapshot::parse(r#"{"combinedDaily": [{"day": "2026-02-30", "commits": 1}]}"#)
            .unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse snapshot JSON"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = Snapshot::load(Path::new("/no/such/snapshot.json")).unwrap_err();
        assert!(format!("{err:#}").contains("/no/such/snapshot.json"));
    }
}
