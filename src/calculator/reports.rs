//! Report formatting and output generation
//!
//! Renders a `CalculationReport` (and the standalone rates view) for console
//! display, JSON export, or CSV export. Console layout is fixed-width tables
//! with section headers; JSON is the serialised report verbatim; CSV covers
//! the forecast table, the one naturally tabular section.

use crate::errors::AppResult;
use crate::types::market::{CryptoRates, NetworkTable};
use crate::types::metrics::{CalculationReport, PeriodMetrics};
use crate::types::params::{CryptoAsset, FiatCurrency};
use crate::utils::currency::{format_crypto, format_fiat};

use self::utils::{export_forecast_csv, export_json, format_float};

pub mod utils;

/// Output format options for calculation reports
#[derive(Debug, Clone, Default)]
pub enum OutputFormat {
    /// Human-readable console output
    #[default]
    Console,
    /// JSON format for programmatic use
    Json,
    /// CSV export of the monthly forecast table
    Csv,
}

/// Report formatter for calculation results
pub struct ReportFormatter;

impl ReportFormatter {
    /// Format a full calculation report
    pub fn format_calculation(
        report: &CalculationReport,
        format: &OutputFormat,
    ) -> AppResult<String> {
        match format {
            OutputFormat::Console => {
                let mut output = String::new();
                output.push_str(&format_setup_section(report));
                output.push('\n');
                output.push_str(&format_snapshot_section(report));
                output.push('\n');
                output.push_str(&format_forecast_section(report));
                output.push('\n');
                output.push_str(&format_block_time_section(report));
                Ok(output)
            }
            OutputFormat::Json => export_json(report),
            OutputFormat::Csv => export_forecast_csv(&report.forecast),
        }
    }

    /// Format current exchange rates and the network info table
    pub fn format_rates(
        rates: &CryptoRates,
        network: &NetworkTable,
        format: &OutputFormat,
    ) -> AppResult<String> {
        match format {
            OutputFormat::Console => {
                let mut output = String::new();

                output.push_str("=== EXCHANGE RATES ===\n");
                output.push_str(&format!("{:<6} | {:>18} | {:>18}\n", "Asset", "USD", "RUB"));
                for asset in CryptoAsset::ALL {
                    let asset_rates = rates.asset(asset);
                    output.push_str(&format!(
                        "{:<6} | {:>18} | {:>18}\n",
                        asset.ticker(),
                        format_rate(asset_rates.usd, FiatCurrency::Usd),
                        format_rate(asset_rates.rub, FiatCurrency::Rub),
                    ));
                }

                output.push_str("\n=== NETWORK INFO ===\n");
                output.push_str(&format!(
                    "{:<6} | {:>22} | {:>12}\n",
                    "Asset", "Difficulty", "Block reward"
                ));
                for asset in CryptoAsset::ALL {
                    let info = network.info(asset);
                    output.push_str(&format!(
                        "{:<6} | {:>22} | {:>12}\n",
                        asset.ticker(),
                        format_float(info.difficulty, 0),
                        info.block_reward,
                    ));
                }

                Ok(output)
            }
            OutputFormat::Json | OutputFormat::Csv => {
                export_json(&serde_json::json!({ "rates": rates, "network": network }))
            }
        }
    }
}

fn format_setup_section(report: &CalculationReport) -> String {
    let params = &report.parameters;
    let fiat = params.fiat_currency;

    let mut output = String::new();
    output.push_str("=== MINING SETUP ===\n");
    output.push_str(&format!(
        "Asset: {} | Fiat: {} | Exchange rate: {}\n",
        params.asset,
        fiat,
        format_fiat(report.exchange_rate, fiat)
    ));
    output.push_str(&format!(
        "Hash rate: {} TH/s | Pool fee: {:.2}% | Block reward: {}\n",
        params.hash_rate_ths, params.pool_fee_percent, params.block_reward
    ));
    output.push_str(&format!(
        "Difficulty: {}\n",
        format_float(params.difficulty, 0)
    ));
    output.push_str(&format!(
        "Farm cost: {} | Power: {:.0} W | Tariff: {}/kWh\n",
        format_fiat(params.farm_cost, fiat),
        params.power_consumption_watts,
        format_fiat(params.electricity_rate, fiat)
    ));
    output
}

fn format_snapshot_section(report: &CalculationReport) -> String {
    let snapshot = &report.snapshot;
    let params = &report.parameters;
    let fiat = params.fiat_currency;

    let mut output = String::new();
    output.push_str("=== REWARDS & PROFIT ===\n");
    output.push_str(&format!(
        "{:<8} | {:>20} | {:>16} | {:>16} | {:>16}\n",
        "Period", "Reward", "Reward (fiat)", "Cost", "Profit"
    ));
    for (label, period) in [
        ("Hourly", &snapshot.hourly),
        ("Daily", &snapshot.daily),
        ("Monthly", &snapshot.monthly),
        ("Yearly", &snapshot.yearly),
    ] {
        output.push_str(&format_period_row(label, period, params.asset, fiat));
    }

    output.push('\n');
    output.push_str(&format!("ROI (annualised): {:.2}%\n", snapshot.roi_percent));
    output.push_str(&format!(
        "Break-even: {}\n",
        format_days(snapshot.break_even_days)
    ));
    output.push_str(&format!(
        "Gross monthly income (no deductions): {}\n",
        format_fiat(snapshot.gross.monthly_profit, fiat)
    ));
    output.push_str(&format!(
        "Gross break-even: {}\n",
        format_days(snapshot.gross.break_even_days)
    ));
    output
}

fn format_period_row(
    label: &str,
    period: &PeriodMetrics,
    asset: CryptoAsset,
    fiat: FiatCurrency,
) -> String {
    format!(
        "{:<8} | {:>20} | {:>16} | {:>16} | {:>16}\n",
        label,
        format_crypto(period.reward_crypto, asset),
        format_fiat(period.reward_fiat, fiat),
        format_fiat(period.cost, fiat),
        format_fiat(period.profit, fiat),
    )
}

fn format_forecast_section(report: &CalculationReport) -> String {
    let fiat = report.parameters.fiat_currency;
    let asset = report.parameters.asset;

    let mut output = String::new();
    output.push_str("=== MONTHLY FORECAST ===\n");
    if report.forecast.is_empty() {
        output.push_str("No forecast months requested.\n");
        return output;
    }

    output.push_str(&format!(
        "{:<16} | {:>22} | {:>20} | {:>16} | {:>8}\n",
        "Month", "Difficulty", "Reward", "Net profit", "Payback"
    ));
    for entry in &report.forecast {
        output.push_str(&format!(
            "{:<16} | {:>22} | {:>20} | {:>16} | {:>7.2}%\n",
            entry.month,
            format_float(entry.difficulty, 0),
            format_crypto(entry.reward_crypto, asset),
            format_fiat(entry.net_profit, fiat),
            entry.roi_percent,
        ));
    }
    output
}

fn format_block_time_section(report: &CalculationReport) -> String {
    let mut output = String::new();
    output.push_str("=== BLOCK DISCOVERY TIME ===\n");
    output.push_str(&format!("{:<11} | {:>16}\n", "Probability", "Days"));
    for estimate in &report.block_times {
        output.push_str(&format!(
            "{:<11} | {:>16}\n",
            estimate.probability.to_string(),
            format_float(estimate.days, 2),
        ));
    }
    output
}

/// Days column with the no-payback sentinel spelled out
fn format_days(days: f64) -> String {
    if days.is_finite() {
        format!("{} days", format_float(days, 2))
    } else {
        "never".to_string()
    }
}

/// Exchange rates keep more precision below one fiat unit
fn format_rate(value: f64, currency: FiatCurrency) -> String {
    if value.abs() < 1.0 {
        match currency {
            FiatCurrency::Usd => format!("${:.6}", value),
            FiatCurrency::Rub => format!("{:.6} ₽", value),
        }
    } else {
        format_fiat(value, currency)
    }
}
