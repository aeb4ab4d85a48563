use mining_profit_calculator::calculator::profitability::build_snapshot;
use mining_profit_calculator::calculator::CalculatorEngine;
use mining_profit_calculator::types::FiatCurrency;

use crate::common::{btc_form, btc_parameters, doge_parameters, test_network, test_rates};

/// Tests for the profitability snapshot component
///
/// These tests drive the snapshot through the public engine API and check
/// its figures against hand-computed values for the reference scenario.

#[test]
fn test_engine_report_matches_direct_snapshot() {
    let engine = CalculatorEngine::new(test_network());
    let report = engine
        .calculate(&btc_form(), &test_rates())
        .unwrap()
        .expect("form has both selectors");

    // Completing the form seeds difficulty and block reward from network
    // info, landing on the same parameter set as the fixture
    assert_eq!(report.parameters, btc_parameters());
    assert_eq!(report.snapshot, build_snapshot(&btc_parameters(), 6_999_940.0));
}

#[test]
fn test_reference_reward_flows_through_the_snapshot() {
    let snapshot = build_snapshot(&btc_parameters(), 6_999_940.0);

    assert!((snapshot.hourly.reward_crypto - 2.31222715821701e-6).abs() < 1e-18);
    assert_eq!(
        snapshot.hourly.reward_fiat,
        snapshot.hourly.reward_crypto * 6_999_940.0
    );
}

#[test]
fn test_dollar_scenario_cost_chain() {
    // 3,500 W at $0.05/kWh
    let snapshot = build_snapshot(&doge_parameters(), 0.170867);

    assert!((snapshot.hourly.cost - 0.175).abs() < 1e-12);
    assert!((snapshot.daily.cost - 4.2).abs() < 1e-12);
    assert!((snapshot.monthly.cost - 126.0).abs() < 1e-12);
    assert!((snapshot.yearly.cost - 1512.0).abs() < 1e-12);
}

#[test]
fn test_doge_reward_magnitude() {
    // Low difficulty and a large block reward: tens of thousands of coins
    // per hour, dwarfing the electricity cost
    let snapshot = build_snapshot(&doge_parameters(), 0.170867);

    assert!(snapshot.hourly.reward_crypto > 50_000.0);
    assert!(snapshot.hourly.reward_crypto < 60_000.0);
    assert!(snapshot.hourly.profit > 0.0);
}

#[test]
fn test_roi_and_break_even_are_consistent_with_the_periods() {
    let params = btc_parameters();
    let snapshot = build_snapshot(&params, 6_999_940.0);

    // Break-even days times daily profit recovers the farm cost
    let recovered = snapshot.break_even_days * snapshot.daily.profit;
    assert!((recovered / params.farm_cost - 1.0).abs() < 1e-9);

    assert_eq!(
        snapshot.roi_percent,
        ((snapshot.monthly.profit * 12.0) / params.farm_cost) * 100.0
    );
}

#[test]
fn test_yearly_figures_follow_the_twelve_month_convention() {
    let snapshot = build_snapshot(&btc_parameters(), 6_999_940.0);

    assert!((snapshot.yearly.profit / (snapshot.monthly.profit * 12.0) - 1.0).abs() < 1e-12);
    assert!((snapshot.yearly.cost / (snapshot.monthly.cost * 12.0) - 1.0).abs() < 1e-12);
}

#[test]
fn test_loss_making_rig_end_to_end() {
    let engine = CalculatorEngine::new(test_network());
    let mut form = btc_form();
    form.fiat_currency = Some(FiatCurrency::Usd);
    form.electricity_rate = Some(100.0);

    let report = engine
        .calculate(&form, &test_rates())
        .unwrap()
        .expect("form has both selectors");
    let snapshot = &report.snapshot;

    assert!(snapshot.hourly.profit < 0.0);
    assert!(snapshot.yearly.profit < 0.0);
    assert!(snapshot.roi_percent < 0.0);
    assert!(snapshot.break_even_days.is_infinite());
    // Gross revenue ignores the ruinous tariff entirely
    assert!(snapshot.gross.monthly_profit > 0.0);
    assert!(snapshot.gross.break_even_days.is_finite());
}
