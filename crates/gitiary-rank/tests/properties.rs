//! Property-based tests for `gitiary-rank`.

use gitiary_rank::sort_repos;
use gitiary_types::{ComparisonRepo, Day, SortDirection, SortField};
use proptest::prelude::*;

fn arb_repo(id: i64) -> impl Strategy<Value = ComparisonRepo> {
    (
        "[a-zA-Z]{1,6}",
        "[a-zA-Z]{1,6}",
        0u64..50,
        prop::option::of(1u8..=28),
        0u32..10,
    )
        .prop_map(move |(owner, name, commits, first_day, gap)| ComparisonRepo {
            id,
            owner,
            name,
            display_name: None,
            total_commits: commits,
            active_days: 0,
            regularity: 0.0,
            max_gap: gap,
            current_streak: 0,
            longest_streak: 0,
            first_commit_date: first_day.and_then(|d| Day::from_ymd(2026, 1, d)),
            last_commit_date: None,
        })
}

fn arb_repos() -> impl Strategy<Value = Vec<ComparisonRepo>> {
    (0usize..20).prop_flat_map(|len| {
        (0..len)
            .map(|i| arb_repo(i as i64))
            .collect::<Vec<_>>()
    })
}

fn arb_direction() -> impl Strategy<Value = SortDirection> {
    prop_oneof![Just(SortDirection::Asc), Just(SortDirection::Desc)]
}

proptest! {
    #[test]
    fn null_dates_always_trail(repos in arb_repos(), direction in arb_direction()) {
        let sorted = sort_repos(repos, SortField::FirstCommitDate, direction);
        let first_null = sorted.iter().position(|r| r.first_commit_date.is_none());
        if let Some(idx) = first_null {
            prop_assert!(sorted[idx..].iter().all(|r| r.first_commit_date.is_none()));
        }
    }

    #[test]
    fn present_dates_follow_direction(repos in arb_repos(), direction in arb_direction()) {
        let sorted = sort_repos(repos, SortField::FirstCommitDate, direction);
        let dates: Vec<Day> = sorted.iter().filter_map(|r| r.first_commit_date).collect();
        for pair in dates.windows(2) {
            match direction {
                SortDirection::Asc => prop_assert!(pair[0] <= pair[1]),
                SortDirection::Desc => prop_assert!(pair[0] >= pair[1]),
            }
        }
    }

    #[test]
    fn sort_is_a_permutation(repos in arb_repos(), direction in arb_direction()) {
        let mut before: Vec<i64> = repos.iter().map(|r| r.id).collect();
        let mut after: Vec<i64> = sort_repos(repos, SortField::Name, direction)
            .iter()
            .map(|r| r.id)
            .collect();
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn equal_keys_keep_input_order(repos in arb_repos(), direction in arb_direction()) {
        let sorted = sort_repos(repos, SortField::MaxGap, direction);
        for pair in sorted.windows(2) {
            if pair[0].max_gap == pair[1].max_gap {
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
    }
}
