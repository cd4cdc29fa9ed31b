//! Fuzz target for day, month, and range parsing.
//!
//! Anything that parses must re-parse from its displayed form.

#![no_main]
use gitiary_types::{DateRange, Day, MonthKey};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(day) = s.parse::<Day>() {
        assert_eq!(day.to_string().parse::<Day>(), Ok(day));
        assert_eq!(day.month_key().year(), day.year());
    }

    if let Ok(month) = s.parse::<MonthKey>() {
        assert_eq!(month.to_string().parse::<MonthKey>(), Ok(month));
        assert!((1..=12).contains(&month.month()));
    }

    if let Ok(range) = s.parse::<DateRange>() {
        assert_eq!(range.to_string().parse::<DateRange>(), Ok(range));
    }
    let _ = DateRange::parse_lenient(Some(s));
});
