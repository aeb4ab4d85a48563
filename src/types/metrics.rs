//! Result types produced by the profitability calculator
//!
//! Non-finite values are part of the contract: `break_even_days` is
//! `f64::INFINITY` whenever the relevant profit figure is not positive, and
//! JSON output renders it as null.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::types::params::MiningParameters;

/// Reward, cost and profit figures for one period granularity
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeriodMetrics {
    /// Expected reward in asset units
    pub reward_crypto: f64,
    /// Expected reward converted to the selected fiat currency
    pub reward_fiat: f64,
    /// Electricity cost in the selected fiat currency
    pub cost: f64,
    /// `reward_fiat - cost`
    pub profit: f64,
}

/// Revenue-only figures with no deductions applied
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrossFigures {
    pub hourly_profit: f64,
    pub daily_profit: f64,
    pub monthly_profit: f64,
    pub yearly_profit: f64,
    /// Days to recover the farm cost from raw reward revenue
    pub break_even_days: f64,
}

/// Full profitability snapshot for one parameter set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfitabilitySnapshot {
    pub hourly: PeriodMetrics,
    pub daily: PeriodMetrics,
    pub monthly: PeriodMetrics,
    pub yearly: PeriodMetrics,
    /// Annualised return on the farm cost, percent; 0 when monthly profit is 0
    pub roi_percent: f64,
    /// Days to recover the farm cost from net profit
    pub break_even_days: f64,
    pub gross: GrossFigures,
}

/// One month of the compounding-drift forecast
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyForecastEntry {
    /// Month label, "YYYY MonthName"
    pub month: String,
    /// Difficulty after drift has been applied for this month
    pub difficulty: f64,
    /// Expected monthly reward in asset units
    pub reward_crypto: f64,
    /// Monthly fiat reward minus the fixed monthly electricity cost
    pub net_profit: f64,
    /// Payback progress, percent; 0 for loss-making months
    pub roi_percent: f64,
}

/// Probability column of a block-time estimate row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockTimeProbability {
    /// Time by which a block is found with this probability, percent
    Percentile(u8),
    /// Expected (mean) time between blocks
    Mean,
}

impl fmt::Display for BlockTimeProbability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockTimeProbability::Percentile(p) => write!(f, "{}%", p),
            BlockTimeProbability::Mean => write!(f, "mean"),
        }
    }
}

impl Serialize for BlockTimeProbability {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            BlockTimeProbability::Percentile(p) => serializer.serialize_u8(*p),
            BlockTimeProbability::Mean => serializer.serialize_str("mean"),
        }
    }
}

/// Estimated time to find one block at the given confidence level
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BlockTimeEstimate {
    pub probability: BlockTimeProbability,
    pub days: f64,
}

/// Everything one calculation produces, handed to the report formatter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationReport {
    /// The resolved parameter set the figures were computed from
    pub parameters: MiningParameters,
    /// Asset price in the selected fiat currency used for conversions
    pub exchange_rate: f64,
    pub snapshot: ProfitabilitySnapshot,
    pub forecast: Vec<MonthlyForecastEntry>,
    pub block_times: Vec<BlockTimeEstimate>,
}
