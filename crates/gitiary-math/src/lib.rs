//! Deterministic numeric and statistical helpers.

#![forbid(unsafe_code)]

/// Round a floating point value to `decimals` decimal places.
#[must_use]
pub fn round_f64(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Return `numer / denom`, or 0 when the denominator is zero.
#[must_use]
pub fn safe_ratio(numer: u64, denom: u64) -> f64 {
    if denom == 0 {
        0.0
    } else {
        numer as f64 / denom as f64
    }
}

/// Arithmetic mean; 0 for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divides by `n`); 0 for an empty slice.
#[must_use]
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let avg = mean(values);
    let variance = values
        .iter()
        .map(|v| {
            let d = v - avg;
            d * d
        })
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}

/// `mean + sigmas * stddev` over `values`; 0 for an empty slice.
#[must_use]
pub fn outlier_threshold(values: &[f64], sigmas: f64) -> f64 {
    mean(values) + sigmas * population_std_dev(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_f64_rounds_expected_precision() {
        let value = 12.34567;
        assert_eq!(round_f64(value, 2), 12.35);
        assert_eq!(round_f64(value, 4), 12.3457);
    }

    #[test]
    fn safe_ratio_guards_divide_by_zero() {
        assert_eq!(safe_ratio(5, 0), 0.0);
        assert_eq!(safe_ratio(1, 4), 0.25);
        assert_eq!(safe_ratio(3, 10), 0.3);
    }

    #[test]
    fn safe_ratio_is_not_clamped() {
        assert_eq!(safe_ratio(12, 10), 1.2);
    }

    #[test]
    fn mean_and_std_dev_of_empty_are_zero() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(population_std_dev(&[]), 0.0);
        assert_eq!(outlier_threshold(&[], 1.5), 0.0);
    }

    #[test]
    fn std_dev_uses_population_formula() {
        let values = [5.0, 5.0, 5.0, 5.0, 100.0];
        assert_eq!(mean(&values), 24.0);
        assert!((population_std_dev(&values) - 38.0).abs() < 1e-9);
        assert!((outlier_threshold(&values, 1.5) - 81.0).abs() < 1e-9);
    }
}
