//! Fuzz target for TOML user configuration parsing.
//!
//! Tests `UserConfig::parse()` with arbitrary input to find panics or hangs
//! in the TOML deserializer and the range conversion.

#![no_main]
use gitiary_config::UserConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = UserConfig::parse(s);
    }
});
