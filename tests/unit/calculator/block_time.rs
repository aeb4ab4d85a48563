use mining_profit_calculator::calculator::block_time::{
    estimate_block_times, PROBABILITY_THRESHOLDS,
};
use mining_profit_calculator::calculator::CalculatorEngine;
use mining_profit_calculator::types::BlockTimeProbability;

use crate::common::{btc_form, test_network, test_rates};

/// Tests for the block discovery time estimator
///
/// Waiting times follow an exponential distribution around the mean
/// `difficulty × 2^32 / hash_rate`.

#[test]
fn test_engine_report_carries_the_estimate_rows() {
    let engine = CalculatorEngine::new(test_network());
    let report = engine
        .calculate(&btc_form(), &test_rates())
        .unwrap()
        .expect("form has both selectors");

    assert_eq!(report.block_times.len(), PROBABILITY_THRESHOLDS.len() + 1);
    for (estimate, &threshold) in report.block_times.iter().zip(PROBABILITY_THRESHOLDS.iter()) {
        assert_eq!(
            estimate.probability,
            BlockTimeProbability::Percentile(threshold)
        );
    }
    assert_eq!(
        report.block_times.last().unwrap().probability,
        BlockTimeProbability::Mean
    );
}

#[test]
fn test_percentiles_scale_the_mean_by_the_exponential_quantile() {
    let estimates = estimate_block_times(100.0, 112_149_504_190_349.0);
    let mean = estimates.last().unwrap().days;

    // -ln(1 - p) for each confidence level
    let expected_factors = [
        std::f64::consts::LN_2, // p50
        -(0.35f64).ln(),        // p65
        (10.0f64).ln(),         // p90
        (20.0f64).ln(),         // p95
    ];
    for (estimate, factor) in estimates[..4].iter().zip(expected_factors.iter()) {
        assert!((estimate.days / mean - factor).abs() < 1e-12);
    }
}

#[test]
fn test_doge_blocks_arrive_in_minutes_not_decades() {
    let estimates = estimate_block_times(100.0, 15_234_567.0);
    let mean_days = estimates.last().unwrap().days;

    // ~654 seconds of expected hashing per block
    assert!(mean_days > 0.005);
    assert!(mean_days < 0.01);
}

#[test]
fn test_estimate_rows_serialise_for_export() {
    let estimates = estimate_block_times(100.0, 112_149_504_190_349.0);
    let json = serde_json::to_value(&estimates).unwrap();
    let rows = json.as_array().unwrap();

    assert_eq!(rows[0]["probability"], serde_json::json!(50));
    assert_eq!(rows[3]["probability"], serde_json::json!(95));
    assert_eq!(rows[4]["probability"], serde_json::json!("mean"));
    assert!(rows[4]["days"].as_f64().unwrap() > 0.0);
}
