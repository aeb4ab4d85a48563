//! Month-by-month profitability forecast
//!
//! Difficulty and exchange rate drift compound monthly: month 0 uses the
//! starting values untouched, every later month multiplies the running
//! values by `1 + drift/100` before computing. The monthly electricity cost
//! is fixed up front and never drifts. The projected reward always uses the
//! per-asset block reward constant, not the user-editable snapshot field.

use crate::calculator::profitability::{DAYS_PER_MONTH, HOURS_PER_DAY};
use crate::calculator::{cost, reward};
use crate::types::metrics::MonthlyForecastEntry;
use crate::types::params::MiningParameters;
use crate::utils::time::{add_months, month_label};

/// Generate one forecast entry per month of the mining period
///
/// A zero-month period yields an empty forecast. The ROI column tracks
/// payback progress: the farm cost is treated as the opening investment,
/// each month's profit is subtracted from it, and progress is reported as a
/// percentage for profitable months (0 for loss-making ones).
pub fn generate_forecast(
    params: &MiningParameters,
    exchange_rate: f64,
) -> Vec<MonthlyForecastEntry> {
    let monthly_cost = cost::hourly_cost(params.power_consumption_watts, params.electricity_rate)
        * HOURS_PER_DAY
        * DAYS_PER_MONTH;
    let block_reward = params.asset.forecast_block_reward();

    let mut entries = Vec::with_capacity(params.mining_period_months as usize);
    let mut difficulty = params.difficulty;
    let mut rate = exchange_rate;
    let mut cumulative_investment = params.farm_cost;

    for i in 0..params.mining_period_months {
        if i > 0 {
            difficulty *= 1.0 + params.difficulty_drift_percent / 100.0;
            rate *= 1.0 + params.price_drift_percent / 100.0;
        }

        let reward_crypto = reward::hourly_reward(
            params.hash_rate_ths,
            difficulty,
            block_reward,
            params.pool_fee_percent,
        ) * HOURS_PER_DAY
            * DAYS_PER_MONTH;
        let reward_fiat = reward_crypto * rate;
        let net_profit = reward_fiat - monthly_cost;

        cumulative_investment -= net_profit;
        let roi_percent = if net_profit > 0.0 {
            ((cumulative_investment.abs() / params.farm_cost) * 100.0 - 100.0).abs()
        } else {
            0.0
        };

        entries.push(MonthlyForecastEntry {
            month: month_label(add_months(params.start_month, i)),
            difficulty,
            reward_crypto,
            net_profit,
            roi_percent,
        });
    }

    entries
}
