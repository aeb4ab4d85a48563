//! Profitability aggregation across period granularities
//!
//! The snapshot is built from the hourly figures outward: daily is hourly
//! times 24, monthly is daily times 30, yearly is monthly times 12. The
//! 30-day month and 12-month year are the reporting convention for every
//! figure, crypto and fiat alike. Profit is recomputed per period as that
//! period's fiat reward minus its cost.

use crate::calculator::{cost, reward};
use crate::types::metrics::{GrossFigures, PeriodMetrics, ProfitabilitySnapshot};
use crate::types::params::MiningParameters;

pub const HOURS_PER_DAY: f64 = 24.0;
pub const DAYS_PER_MONTH: f64 = 30.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Build the full profitability snapshot for one parameter set
///
/// `exchange_rate` is the asset price in the selected fiat currency.
/// `break_even_days` is `f64::INFINITY` when daily profit is not positive;
/// ROI is 0 when monthly profit is exactly 0.
pub fn build_snapshot(params: &MiningParameters, exchange_rate: f64) -> ProfitabilitySnapshot {
    let hourly_reward_crypto = reward::hourly_reward(
        params.hash_rate_ths,
        params.difficulty,
        params.block_reward,
        params.pool_fee_percent,
    );
    let hourly_reward_fiat = hourly_reward_crypto * exchange_rate;
    let hourly_cost = cost::hourly_cost(params.power_consumption_watts, params.electricity_rate);

    let hourly = PeriodMetrics {
        reward_crypto: hourly_reward_crypto,
        reward_fiat: hourly_reward_fiat,
        cost: hourly_cost,
        profit: hourly_reward_fiat - hourly_cost,
    };
    let daily = scale(&hourly, HOURS_PER_DAY);
    let monthly = scale(&daily, DAYS_PER_MONTH);
    let yearly = scale(&monthly, MONTHS_PER_YEAR);

    let roi_percent = if monthly.profit != 0.0 {
        ((monthly.profit * MONTHS_PER_YEAR) / params.farm_cost) * 100.0
    } else {
        0.0
    };
    let break_even_days = if daily.profit > 0.0 {
        params.farm_cost / daily.profit
    } else {
        f64::INFINITY
    };

    let gross = build_gross_figures(params, &hourly, &daily, &monthly, &yearly);

    ProfitabilitySnapshot {
        hourly,
        daily,
        monthly,
        yearly,
        roi_percent,
        break_even_days,
        gross,
    }
}

/// Multiply a period's figures out to the next granularity
fn scale(period: &PeriodMetrics, factor: f64) -> PeriodMetrics {
    let reward_fiat = period.reward_fiat * factor;
    let cost = period.cost * factor;
    PeriodMetrics {
        reward_crypto: period.reward_crypto * factor,
        reward_fiat,
        cost,
        profit: reward_fiat - cost,
    }
}

/// Gross figures treat the raw fiat reward as profit, deducting nothing
fn build_gross_figures(
    params: &MiningParameters,
    hourly: &PeriodMetrics,
    daily: &PeriodMetrics,
    monthly: &PeriodMetrics,
    yearly: &PeriodMetrics,
) -> GrossFigures {
    let break_even_days = if daily.reward_fiat > 0.0 {
        params.farm_cost / daily.reward_fiat
    } else {
        f64::INFINITY
    };

    GrossFigures {
        hourly_profit: hourly.reward_fiat,
        daily_profit: daily.reward_fiat,
        monthly_profit: monthly.reward_fiat,
        yearly_profit: yearly.reward_fiat,
        break_even_days,
    }
}
