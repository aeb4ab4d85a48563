//! Input parameter types for the profitability calculator
//!
//! `MiningParameters` is the validated, fully-populated parameter set the
//! calculation engine operates on. `ParameterForm` is its partially-filled
//! counterpart: selectors and network-seeded fields are optional, and a form
//! missing its asset or fiat selector completes to `None` (no calculation).

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::types::market::NetworkTable;
use crate::utils::time::{current_month_start, parse_month};

/// Supported proof-of-work assets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CryptoAsset {
    Btc,
    Doge,
}

impl CryptoAsset {
    pub const ALL: [CryptoAsset; 2] = [CryptoAsset::Btc, CryptoAsset::Doge];

    /// Ticker symbol used in console output
    pub fn ticker(&self) -> &'static str {
        match self {
            CryptoAsset::Btc => "BTC",
            CryptoAsset::Doge => "DOGE",
        }
    }

    /// Asset identifier in the rate source API
    pub fn rate_source_id(&self) -> &'static str {
        match self {
            CryptoAsset::Btc => "bitcoin",
            CryptoAsset::Doge => "dogecoin",
        }
    }

    /// Block reward constant used by the monthly forecast
    ///
    /// The forecast always projects with this per-asset constant, independent
    /// of the user-editable `block_reward` parameter the snapshot uses.
    pub fn forecast_block_reward(&self) -> f64 {
        match self {
            CryptoAsset::Btc => 3.125,
            CryptoAsset::Doge => 10000.0,
        }
    }
}

impl fmt::Display for CryptoAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ticker())
    }
}

impl FromStr for CryptoAsset {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "btc" | "bitcoin" => Ok(CryptoAsset::Btc),
            "doge" | "dogecoin" => Ok(CryptoAsset::Doge),
            other => Err(AppError::InvalidParameter {
                field: "asset".to_string(),
                reason: format!("unknown asset '{}' (expected BTC or DOGE)", other),
            }),
        }
    }
}

/// Supported fiat display currencies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FiatCurrency {
    Usd,
    Rub,
}

impl FiatCurrency {
    pub const ALL: [FiatCurrency; 2] = [FiatCurrency::Usd, FiatCurrency::Rub];

    /// Currency identifier in the rate source API
    pub fn rate_source_id(&self) -> &'static str {
        match self {
            FiatCurrency::Usd => "usd",
            FiatCurrency::Rub => "rub",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            FiatCurrency::Usd => "$",
            FiatCurrency::Rub => "₽",
        }
    }
}

impl fmt::Display for FiatCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FiatCurrency::Usd => write!(f, "USD"),
            FiatCurrency::Rub => write!(f, "RUB"),
        }
    }
}

impl FromStr for FiatCurrency {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "usd" => Ok(FiatCurrency::Usd),
            "rub" => Ok(FiatCurrency::Rub),
            other => Err(AppError::InvalidParameter {
                field: "fiat_currency".to_string(),
                reason: format!("unknown currency '{}' (expected USD or RUB)", other),
            }),
        }
    }
}

/// Complete parameter set for one profitability calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiningParameters {
    pub asset: CryptoAsset,
    pub fiat_currency: FiatCurrency,
    /// Hash rate in TH/s
    pub hash_rate_ths: f64,
    /// Pool fee percentage, 0-100
    pub pool_fee_percent: f64,
    /// Block reward in asset units (user-editable; the snapshot uses this)
    pub block_reward: f64,
    /// Network difficulty
    pub difficulty: f64,
    /// Hardware cost in the selected fiat currency
    pub farm_cost: f64,
    /// Power consumption in watts
    pub power_consumption_watts: f64,
    /// Electricity tariff per kWh in the selected fiat currency
    pub electricity_rate: f64,
    /// Forecast horizon in months, 1-60
    pub mining_period_months: u32,
    /// First forecast month, pinned to the first day of the month
    pub start_month: NaiveDate,
    /// Expected monthly difficulty growth percentage
    pub difficulty_drift_percent: f64,
    /// Expected monthly price growth percentage
    pub price_drift_percent: f64,
}

impl MiningParameters {
    /// Validate the parameter set at the input boundary
    ///
    /// The calculation functions themselves never guard against degenerate
    /// values; rejecting them happens here, once, before any arithmetic.
    pub fn validate(&self) -> AppResult<()> {
        require_positive("hash_rate_ths", self.hash_rate_ths)?;
        require_positive("difficulty", self.difficulty)?;
        require_positive("block_reward", self.block_reward)?;
        require_positive("farm_cost", self.farm_cost)?;
        require_non_negative("power_consumption_watts", self.power_consumption_watts)?;
        require_non_negative("electricity_rate", self.electricity_rate)?;

        if !(0.0..=100.0).contains(&self.pool_fee_percent) {
            return Err(AppError::InvalidParameter {
                field: "pool_fee_percent".to_string(),
                reason: format!("{} is outside 0-100", self.pool_fee_percent),
            });
        }
        if !(1..=60).contains(&self.mining_period_months) {
            return Err(AppError::InvalidParameter {
                field: "mining_period_months".to_string(),
                reason: format!("{} is outside 1-60", self.mining_period_months),
            });
        }
        if !self.difficulty_drift_percent.is_finite() || !self.price_drift_percent.is_finite() {
            return Err(AppError::InvalidParameter {
                field: "drift".to_string(),
                reason: "drift percentages must be finite".to_string(),
            });
        }
        Ok(())
    }
}

/// Partially-filled parameter set, as read from a JSON parameter file or
/// assembled from CLI flags before defaults are applied
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterForm {
    pub asset: Option<CryptoAsset>,
    pub fiat_currency: Option<FiatCurrency>,
    pub hash_rate_ths: Option<f64>,
    pub pool_fee_percent: Option<f64>,
    pub block_reward: Option<f64>,
    pub difficulty: Option<f64>,
    pub farm_cost: Option<f64>,
    pub power_consumption_watts: Option<f64>,
    pub electricity_rate: Option<f64>,
    pub mining_period_months: Option<u32>,
    /// First forecast month as "YYYY-MM"; current month when absent
    pub start_month: Option<String>,
    pub difficulty_drift_percent: Option<f64>,
    pub price_drift_percent: Option<f64>,
}

impl ParameterForm {
    /// Overlay another form on top of this one; fields set in `overlay` win
    pub fn merge(mut self, overlay: ParameterForm) -> ParameterForm {
        self.asset = overlay.asset.or(self.asset);
        self.fiat_currency = overlay.fiat_currency.or(self.fiat_currency);
        self.hash_rate_ths = overlay.hash_rate_ths.or(self.hash_rate_ths);
        self.pool_fee_percent = overlay.pool_fee_percent.or(self.pool_fee_percent);
        self.block_reward = overlay.block_reward.or(self.block_reward);
        self.difficulty = overlay.difficulty.or(self.difficulty);
        self.farm_cost = overlay.farm_cost.or(self.farm_cost);
        self.power_consumption_watts = overlay
            .power_consumption_watts
            .or(self.power_consumption_watts);
        self.electricity_rate = overlay.electricity_rate.or(self.electricity_rate);
        self.mining_period_months = overlay.mining_period_months.or(self.mining_period_months);
        self.start_month = overlay.start_month.or(self.start_month);
        self.difficulty_drift_percent = overlay
            .difficulty_drift_percent
            .or(self.difficulty_drift_percent);
        self.price_drift_percent = overlay.price_drift_percent.or(self.price_drift_percent);
        self
    }

    /// Resolve the form into a complete parameter set
    ///
    /// Returns `Ok(None)` when the asset or fiat selector is missing; no
    /// calculation happens for such a form. Difficulty and block reward fall
    /// back to the network info for the selected asset, matching how the
    /// input form seeds those two fields. All other fields must be present.
    pub fn complete(&self, network: &NetworkTable) -> AppResult<Option<MiningParameters>> {
        let (Some(asset), Some(fiat_currency)) = (self.asset, self.fiat_currency) else {
            return Ok(None);
        };
        let info = network.info(asset);

        let start_month = match &self.start_month {
            Some(raw) => parse_month(raw)?,
            None => current_month_start(),
        };

        let params = MiningParameters {
            asset,
            fiat_currency,
            hash_rate_ths: required_field("hash_rate_ths", self.hash_rate_ths)?,
            pool_fee_percent: required_field("pool_fee_percent", self.pool_fee_percent)?,
            block_reward: self.block_reward.unwrap_or(info.block_reward),
            difficulty: self.difficulty.unwrap_or(info.difficulty),
            farm_cost: required_field("farm_cost", self.farm_cost)?,
            power_consumption_watts: required_field(
                "power_consumption_watts",
                self.power_consumption_watts,
            )?,
            electricity_rate: required_field("electricity_rate", self.electricity_rate)?,
            mining_period_months: required_field(
                "mining_period_months",
                self.mining_period_months,
            )?,
            start_month,
            difficulty_drift_percent: required_field(
                "difficulty_drift_percent",
                self.difficulty_drift_percent,
            )?,
            price_drift_percent: required_field("price_drift_percent", self.price_drift_percent)?,
        };
        Ok(Some(params))
    }
}

fn required_field<T>(field: &str, value: Option<T>) -> AppResult<T> {
    value.ok_or_else(|| AppError::InvalidParameter {
        field: field.to_string(),
        reason: "missing value".to_string(),
    })
}

fn require_positive(field: &str, value: f64) -> AppResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AppError::InvalidParameter {
            field: field.to_string(),
            reason: format!("{} is not a positive number", value),
        })
    }
}

fn require_non_negative(field: &str, value: f64) -> AppResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(AppError::InvalidParameter {
            field: field.to_string(),
            reason: format!("{} is not a non-negative number", value),
        })
    }
}
