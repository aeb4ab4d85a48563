use mining_profit_calculator::calculator::forecast::generate_forecast;
use mining_profit_calculator::calculator::profitability::build_snapshot;
use mining_profit_calculator::calculator::CalculatorEngine;

use crate::common::{btc_form, btc_parameters, doge_parameters, test_network, test_rates};

/// Tests for the monthly forecast component
///
/// The forecast compounds difficulty and price drift month over month and
/// tracks payback against the farm cost.

#[test]
fn test_month_zero_agrees_with_the_snapshot() {
    // With the block reward left at the network value, the undrifted first
    // month and the snapshot's monthly row describe the same month
    let params = btc_parameters();
    let snapshot = build_snapshot(&params, 6_999_940.0);
    let forecast = generate_forecast(&params, 6_999_940.0);

    assert_eq!(forecast[0].reward_crypto, snapshot.monthly.reward_crypto);
    assert!((forecast[0].net_profit / snapshot.monthly.profit - 1.0).abs() < 1e-12);
}

#[test]
fn test_editing_the_block_reward_moves_only_the_snapshot() {
    let engine = CalculatorEngine::new(test_network());

    let baseline = engine
        .calculate(&btc_form(), &test_rates())
        .unwrap()
        .expect("form has both selectors");

    let mut form = btc_form();
    form.block_reward = Some(6.25);
    let doubled = engine
        .calculate(&form, &test_rates())
        .unwrap()
        .expect("form has both selectors");

    // The snapshot follows the edited reward, the forecast does not
    let ratio = doubled.snapshot.monthly.reward_crypto / baseline.snapshot.monthly.reward_crypto;
    assert!((ratio - 2.0).abs() < 1e-9);
    for (a, b) in doubled.forecast.iter().zip(baseline.forecast.iter()) {
        assert_eq!(a.reward_crypto, b.reward_crypto);
        assert_eq!(a.net_profit, b.net_profit);
    }
}

#[test]
fn test_difficulty_drift_alone_decays_the_reward() {
    let params = doge_parameters();
    let forecast = generate_forecast(&params, 0.170867);

    for pair in forecast.windows(2) {
        assert!(pair[1].reward_crypto < pair[0].reward_crypto);
        assert!(pair[1].net_profit < pair[0].net_profit);
    }
    // 2% monthly drift shrinks the reward by the same factor
    let ratio = forecast[1].reward_crypto / forecast[0].reward_crypto;
    assert!((ratio - 1.0 / 1.02).abs() < 1e-12);
}

#[test]
fn test_negative_difficulty_drift_grows_the_reward() {
    let mut params = btc_parameters();
    params.difficulty_drift_percent = -5.0;
    params.price_drift_percent = 0.0;
    let forecast = generate_forecast(&params, 6_999_940.0);

    for pair in forecast.windows(2) {
        assert!(pair[1].difficulty < pair[0].difficulty);
        assert!(pair[1].reward_crypto > pair[0].reward_crypto);
    }
}

#[test]
fn test_horizon_bounds() {
    let engine = CalculatorEngine::new(test_network());

    let mut form = btc_form();
    form.mining_period_months = Some(60);
    let report = engine
        .calculate(&form, &test_rates())
        .unwrap()
        .expect("form has both selectors");
    assert_eq!(report.forecast.len(), 60);

    let mut form = btc_form();
    form.mining_period_months = Some(0);
    let err = engine.calculate(&form, &test_rates()).unwrap_err();
    assert!(err.to_string().contains("mining_period_months"));

    let mut form = btc_form();
    form.mining_period_months = Some(61);
    assert!(engine.calculate(&form, &test_rates()).is_err());
}

#[test]
fn test_single_month_horizon() {
    let engine = CalculatorEngine::new(test_network());
    let mut form = btc_form();
    form.mining_period_months = Some(1);

    let report = engine
        .calculate(&form, &test_rates())
        .unwrap()
        .expect("form has both selectors");
    assert_eq!(report.forecast.len(), 1);
    assert_eq!(report.forecast[0].month, "2025 January");
}

#[test]
fn test_labels_roll_over_a_november_start() {
    let mut params = btc_parameters();
    params.start_month = chrono::NaiveDate::from_ymd_opt(2025, 11, 1).unwrap();
    params.mining_period_months = 4;
    let forecast = generate_forecast(&params, 6_999_940.0);

    let labels: Vec<&str> = forecast.iter().map(|e| e.month.as_str()).collect();
    assert_eq!(
        labels,
        vec!["2025 November", "2025 December", "2026 January", "2026 February"]
    );
}

#[test]
fn test_payback_walk_for_the_dollar_scenario() {
    let params = doge_parameters();
    let forecast = generate_forecast(&params, 0.170867);

    let mut cumulative = params.farm_cost;
    for entry in &forecast {
        cumulative -= entry.net_profit;
        let expected = if entry.net_profit > 0.0 {
            ((cumulative.abs() / params.farm_cost) * 100.0 - 100.0).abs()
        } else {
            0.0
        };
        assert_eq!(entry.roi_percent, expected);
    }
}
