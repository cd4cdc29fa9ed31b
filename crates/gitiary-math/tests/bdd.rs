use gitiary_math::{mean, outlier_threshold, population_std_dev, round_f64, safe_ratio};

#[test]
fn given_zero_period_when_ratio_is_taken_then_result_is_zero() {
    let got = safe_ratio(3, 0);
    assert_eq!(got, 0.0);
}

#[test]
fn given_three_active_days_in_ten_when_ratio_is_taken_then_result_is_point_three() {
    let got = safe_ratio(3, 10);
    assert_eq!(got, 0.3);
}

#[test]
fn given_one_spike_among_flat_days_when_threshold_is_computed_then_spike_exceeds_it() {
    let totals = [5.0, 5.0, 5.0, 5.0, 100.0];
    let avg = mean(&totals);
    let sd = population_std_dev(&totals);
    let threshold = outlier_threshold(&totals, 1.5);

    assert_eq!(round_f64(avg, 0), 24.0);
    assert_eq!(round_f64(sd, 0), 38.0);
    assert!(100.0 > threshold);
    assert!(5.0 < threshold);
}

#[test]
fn given_no_values_when_threshold_is_computed_then_result_is_zero_not_nan() {
    let threshold = outlier_threshold(&[], 1.5);
    assert_eq!(threshold, 0.0);
    assert!(!threshold.is_nan());
}
