//! HTTP client for the exchange-rate source
//!
//! Talks to a CoinGecko-compatible `simple/price` endpoint and decodes the
//! per-asset rate table. Transport and payload failures map onto
//! [`RatesError`] so callers can degrade to cached or static values.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::errors::{RatesError, RatesResult};
use crate::types::market::{AssetRates, CryptoRates};
use crate::types::params::{CryptoAsset, FiatCurrency};

/// Rate source payload before asset presence checks
#[derive(Debug, Deserialize)]
struct RawRates {
    bitcoin: Option<AssetRates>,
    dogecoin: Option<AssetRates>,
}

/// Client for the exchange-rate HTTP API
pub struct RatesClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl RatesClient {
    /// Create a client with the given endpoint base URL and request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> RatesResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RatesError::RequestFailed(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            timeout,
        })
    }

    /// Fetch current exchange rates for every supported asset/fiat pair
    pub async fn fetch_rates(&self) -> RatesResult<CryptoRates> {
        let url = self.price_url();
        debug!(%url, "fetching exchange rates");

        let response = self.http.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                RatesError::Timeout {
                    timeout_seconds: self.timeout.as_secs(),
                }
            } else {
                RatesError::RequestFailed(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RatesError::RequestFailed(format!(
                "rate source returned HTTP {}",
                status
            )));
        }

        let raw = response
            .json::<RawRates>()
            .await
            .map_err(|e| RatesError::InvalidResponse(e.to_string()))?;

        let bitcoin = raw.bitcoin.ok_or_else(|| RatesError::MissingAsset {
            asset: CryptoAsset::Btc.rate_source_id().to_string(),
        })?;
        let dogecoin = raw.dogecoin.ok_or_else(|| RatesError::MissingAsset {
            asset: CryptoAsset::Doge.rate_source_id().to_string(),
        })?;

        debug!(
            btc_usd = bitcoin.usd,
            doge_usd = dogecoin.usd,
            "exchange rates fetched"
        );
        Ok(CryptoRates { bitcoin, dogecoin })
    }

    fn price_url(&self) -> String {
        let ids = CryptoAsset::ALL.map(|a| a.rate_source_id()).join(",");
        let currencies = FiatCurrency::ALL.map(|c| c.rate_source_id()).join(",");
        format!(
            "{}/simple/price?ids={}&vs_currencies={}",
            self.base_url, ids, currencies
        )
    }
}
