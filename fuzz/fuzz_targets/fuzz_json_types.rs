//! Fuzz target for JSON deserialization of the input rows.

#![no_main]
use gitiary_types::{DailyImpactEntry, HeatDay, HeatMonthRepoRow, ImpactData, RepoDataset};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    let _ = serde_json::from_str::<ImpactData>(s);
    let _ = serde_json::from_str::<RepoDataset>(s);
    let _ = serde_json::from_str::<DailyImpactEntry>(s);
    let _ = serde_json::from_str::<HeatDay>(s);
    let _ = serde_json::from_str::<HeatMonthRepoRow>(s);
});
