#![no_main]

use gitiary_math::{mean, outlier_threshold, population_std_dev, round_f64, safe_ratio};
use libfuzzer_sys::fuzz_target;

const MAX_INPUT_SIZE: usize = 16 * 1024;

fn read_u64(bytes: &[u8]) -> u64 {
    let mut arr = [0u8; 8];
    let len = bytes.len().min(8);
    arr[..len].copy_from_slice(&bytes[..len]);
    u64::from_le_bytes(arr)
}

fuzz_target!(|data: &[u8]| {
    if data.is_empty() || data.len() > MAX_INPUT_SIZE {
        return;
    }

    let decimals = u32::from(data[0] % 10);
    let numer = read_u64(data.get(1..9).unwrap_or(&[]));
    let denom = read_u64(data.get(9..17).unwrap_or(&[]));

    let value = f64::from_bits(read_u64(data.get(17..25).unwrap_or(&[])));
    if value.is_finite() {
        let rounded_once = round_f64(value, decimals);
        assert_eq!(rounded_once, round_f64(rounded_once, decimals));
    }

    if denom == 0 {
        assert_eq!(safe_ratio(numer, denom), 0.0);
    }
    if numer > 0 {
        assert_eq!(safe_ratio(numer, numer), 1.0);
    }

    let values: Vec<f64> = data
        .get(25..)
        .unwrap_or(&[])
        .iter()
        .map(|b| f64::from(*b))
        .collect();
    let avg = mean(&values);
    let sd = population_std_dev(&values);
    assert!(sd >= 0.0);
    if let (Some(lo), Some(hi)) = (
        values.iter().copied().reduce(f64::min),
        values.iter().copied().reduce(f64::max),
    ) {
        assert!(avg >= lo - 1e-9 && avg <= hi + 1e-9);
    }
    assert!(outlier_threshold(&values, 1.5) >= avg - 1e-9);
});
