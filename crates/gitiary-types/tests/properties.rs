//! Property-based tests for `gitiary-types`.

use gitiary_types::{DateRange, Day, MonthKey};
use proptest::prelude::*;

fn arb_day() -> impl Strategy<Value = Day> {
    (1970i32..2100, 1u8..=12, 1u8..=28).prop_map(|(y, m, d)| Day::from_ymd(y, m, d).unwrap())
}

proptest! {
    #[test]
    fn day_order_agrees_with_string_order(a in arb_day(), b in arb_day()) {
        prop_assert_eq!(a.cmp(&b), a.to_string().cmp(&b.to_string()));
    }

    #[test]
    fn month_key_order_agrees_with_day_order(a in arb_day(), b in arb_day()) {
        if a <= b {
            prop_assert!(a.month_key() <= b.month_key());
        }
    }

    #[test]
    fn month_key_string_is_day_prefix(day in arb_day()) {
        let rendered = day.to_string();
        let key: MonthKey = rendered[..7].parse().unwrap();
        prop_assert_eq!(key, day.month_key());
    }

    #[test]
    fn non_catalog_numbers_are_rejected(days in 0u32..10_000) {
        let parsed = days.to_string().parse::<DateRange>();
        let in_catalog = matches!(days, 7 | 30 | 90 | 180 | 360);
        prop_assert_eq!(parsed.is_ok(), in_catalog);
    }

    #[test]
    fn arbitrary_strings_never_panic_the_day_parser(raw in "\\PC{0,16}") {
        let _ = raw.parse::<Day>();
        let _ = raw.parse::<MonthKey>();
    }
}

#[test]
fn range_serializes_numbers_and_sentinel() {
    assert_eq!(serde_json::to_string(&DateRange::Days30).unwrap(), "30");
    assert_eq!(serde_json::to_string(&DateRange::All).unwrap(), "\"all\"");
    let parsed: DateRange = serde_json::from_str("180").unwrap();
    assert_eq!(parsed, DateRange::Days180);
    let parsed: DateRange = serde_json::from_str("\"7\"").unwrap();
    assert_eq!(parsed, DateRange::Days7);
    assert!(serde_json::from_str::<DateRange>("45").is_err());
}

#[test]
fn malformed_days_fail_deserialization() {
    assert!(serde_json::from_str::<Day>("\"2026/01/01\"").is_err());
    assert!(serde_json::from_str::<Day>("20260101").is_err());
}
