//! Profitability calculation engine
//!
//! This module contains the whole calculation pipeline behind the CLI:
//!
//! - **Reward model** - expected crypto reward from hash rate and difficulty
//! - **Cost model** - electricity cost from power draw and tariff
//! - **Profitability aggregation** - per-period net and gross figures, ROI,
//!   break-even
//! - **Monthly forecast** - compounding difficulty and price drift
//! - **Block-time estimation** - solo block discovery probabilities
//! - **Report generation** - formatted output for console, JSON and CSV
//!
//! ## Usage
//!
//! ```rust
//! use mining_profit_calculator::calculator::CalculatorEngine;
//! use mining_profit_calculator::errors::AppResult;
//! use mining_profit_calculator::rates::fallback;
//! use mining_profit_calculator::types::ParameterForm;
//!
//! fn example(form: &ParameterForm) -> AppResult<()> {
//!     let engine = CalculatorEngine::new(fallback::network_table());
//!
//!     // A form without an asset or fiat selector calculates nothing
//!     if let Some(report) = engine.calculate(form, &fallback::crypto_rates())? {
//!         println!("monthly profit: {}", report.snapshot.monthly.profit);
//!     }
//!     Ok(())
//! }
//! ```

pub mod block_time;
pub mod cost;
pub mod forecast;
pub mod profitability;
pub mod reports;
pub mod reward;

// Re-export main types and interfaces
pub use reports::{OutputFormat, ReportFormatter};

use tracing::debug;

use crate::errors::AppResult;
use crate::types::market::{CryptoRates, NetworkTable};
use crate::types::metrics::CalculationReport;
use crate::types::params::{MiningParameters, ParameterForm};

/// Main calculation engine tying the models together
///
/// Holds the per-asset network info used to seed incomplete parameter forms.
/// Calculation itself is pure: the same parameter set and exchange rate
/// always produce an identical report.
pub struct CalculatorEngine {
    network: NetworkTable,
}

impl CalculatorEngine {
    /// Create an engine with the given network info snapshot
    pub fn new(network: NetworkTable) -> Self {
        Self { network }
    }

    /// Resolve a parameter form and run the full calculation
    ///
    /// Returns `Ok(None)` when the form is missing its asset or fiat
    /// selector; validation failures on a complete form are errors.
    pub fn calculate(
        &self,
        form: &ParameterForm,
        rates: &CryptoRates,
    ) -> AppResult<Option<CalculationReport>> {
        let Some(params) = form.complete(&self.network)? else {
            debug!("parameter form has no asset or fiat selector, skipping calculation");
            return Ok(None);
        };
        params.validate()?;

        let exchange_rate = rates.asset(params.asset).for_currency(params.fiat_currency);
        debug!(
            asset = %params.asset,
            fiat = %params.fiat_currency,
            exchange_rate,
            "running profitability calculation"
        );
        Ok(Some(self.report(params, exchange_rate)))
    }

    /// Run the full calculation for an already-resolved parameter set
    pub fn report(&self, params: MiningParameters, exchange_rate: f64) -> CalculationReport {
        let snapshot = profitability::build_snapshot(&params, exchange_rate);
        let forecast = forecast::generate_forecast(&params, exchange_rate);
        let block_times = block_time::estimate_block_times(params.hash_rate_ths, params.difficulty);

        CalculationReport {
            parameters: params,
            exchange_rate,
            snapshot,
            forecast,
            block_times,
        }
    }

    /// Network info the engine seeds incomplete forms from
    pub fn network(&self) -> &NetworkTable {
        &self.network
    }
}
