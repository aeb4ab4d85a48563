use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::AppResult;
use crate::types::params::ParameterForm;

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Application configuration loaded from config.toml or environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub rates_api: RatesApiConfig,
    pub defaults: DefaultsConfig,
}

/// Exchange-rate source endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatesApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub cache_ttl_seconds: u64,
}

impl Default for RatesApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.coingecko.com/api/v3".to_string(),
            timeout_seconds: 5,
            cache_ttl_seconds: 300,
        }
    }
}

/// Calculation parameters applied when neither flags nor a parameter file
/// supply a value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    pub asset: String,
    pub fiat_currency: String,
    pub hash_rate_ths: f64,
    pub pool_fee_percent: f64,
    pub farm_cost: f64,
    pub power_consumption_watts: f64,
    pub electricity_rate: f64,
    pub mining_period_months: u32,
    pub difficulty_drift_percent: f64,
    pub price_drift_percent: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            asset: "BTC".to_string(),
            fiat_currency: "RUB".to_string(),
            hash_rate_ths: 100.0,
            pool_fee_percent: 1.0,
            farm_cost: 35000.0,
            power_consumption_watts: 3500.0,
            electricity_rate: 3.5,
            mining_period_months: 12,
            difficulty_drift_percent: 5.0,
            price_drift_percent: 5.0,
        }
    }
}

impl AppConfig {
    /// Load configuration from config.toml file and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_file(DEFAULT_CONFIG_FILE)
    }

    /// Load configuration with an explicit config file path
    ///
    /// The file may be absent; defaults and environment variables still apply.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let rates = RatesApiConfig::default();
        let defaults = DefaultsConfig::default();
        let config = Config::builder()
            // Start with default values
            .set_default("rates_api.base_url", rates.base_url)?
            .set_default("rates_api.timeout_seconds", rates.timeout_seconds)?
            .set_default("rates_api.cache_ttl_seconds", rates.cache_ttl_seconds)?
            .set_default("defaults.asset", defaults.asset)?
            .set_default("defaults.fiat_currency", defaults.fiat_currency)?
            .set_default("defaults.hash_rate_ths", defaults.hash_rate_ths)?
            .set_default("defaults.pool_fee_percent", defaults.pool_fee_percent)?
            .set_default("defaults.farm_cost", defaults.farm_cost)?
            .set_default(
                "defaults.power_consumption_watts",
                defaults.power_consumption_watts,
            )?
            .set_default("defaults.electricity_rate", defaults.electricity_rate)?
            .set_default(
                "defaults.mining_period_months",
                defaults.mining_period_months as i64,
            )?
            .set_default(
                "defaults.difficulty_drift_percent",
                defaults.difficulty_drift_percent,
            )?
            .set_default(
                "defaults.price_drift_percent",
                defaults.price_drift_percent,
            )?
            // Load from the config file if it exists
            .add_source(File::new(path, FileFormat::Toml).required(false))
            // Override with environment variables
            // MINING_RATES_API__BASE_URL, MINING_DEFAULTS__HASH_RATE_THS, ...
            .add_source(
                Environment::with_prefix("MINING")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl RatesApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }
}

impl DefaultsConfig {
    /// Convert configured defaults into a parameter form
    ///
    /// Difficulty, block reward and start month stay unset here; they are
    /// seeded from network info and the current date when the form is
    /// resolved.
    pub fn parameter_form(&self) -> AppResult<ParameterForm> {
        Ok(ParameterForm {
            asset: Some(self.asset.parse()?),
            fiat_currency: Some(self.fiat_currency.parse()?),
            hash_rate_ths: Some(self.hash_rate_ths),
            pool_fee_percent: Some(self.pool_fee_percent),
            farm_cost: Some(self.farm_cost),
            power_consumption_watts: Some(self.power_consumption_watts),
            electricity_rate: Some(self.electricity_rate),
            mining_period_months: Some(self.mining_period_months),
            difficulty_drift_percent: Some(self.difficulty_drift_percent),
            price_drift_percent: Some(self.price_drift_percent),
            ..Default::default()
        })
    }
}
