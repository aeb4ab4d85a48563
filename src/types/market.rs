//! Market data payloads from the exchange-rate source
//!
//! Field names on `CryptoRates` match the rate source identifiers so the
//! simple-price response deserialises directly into it.

use serde::{Deserialize, Serialize};

use crate::types::params::{CryptoAsset, FiatCurrency};

/// Fiat prices for a single asset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssetRates {
    pub usd: f64,
    pub rub: f64,
}

impl AssetRates {
    pub fn for_currency(&self, currency: FiatCurrency) -> f64 {
        match currency {
            FiatCurrency::Usd => self.usd,
            FiatCurrency::Rub => self.rub,
        }
    }
}

/// Simple-price payload covering all supported assets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CryptoRates {
    pub bitcoin: AssetRates,
    pub dogecoin: AssetRates,
}

impl CryptoRates {
    pub fn asset(&self, asset: CryptoAsset) -> AssetRates {
        match asset {
            CryptoAsset::Btc => self.bitcoin,
            CryptoAsset::Doge => self.dogecoin,
        }
    }
}

/// Difficulty and block reward for one network
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetworkInfo {
    pub difficulty: f64,
    pub block_reward: f64,
}

/// Per-asset network info snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetworkTable {
    pub btc: NetworkInfo,
    pub doge: NetworkInfo,
}

impl NetworkTable {
    pub fn info(&self, asset: CryptoAsset) -> NetworkInfo {
        match asset {
            CryptoAsset::Btc => self.btc,
            CryptoAsset::Doge => self.doge,
        }
    }
}
