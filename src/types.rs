//! Mining profitability calculator - type system
//!
//! - `params`: input parameter types (assets, currencies, the parameter form)
//! - `metrics`: calculation result types (snapshot, forecast, block times)
//! - `market`: exchange-rate and network-info payloads

pub mod market;
pub mod metrics;
pub mod params;

// Re-export the working set so callers can use `crate::types::*` directly
pub use market::{AssetRates, CryptoRates, NetworkInfo, NetworkTable};
pub use metrics::{
    BlockTimeEstimate, BlockTimeProbability, CalculationReport, GrossFigures,
    MonthlyForecastEntry, PeriodMetrics, ProfitabilitySnapshot,
};
pub use params::{CryptoAsset, FiatCurrency, MiningParameters, ParameterForm};
