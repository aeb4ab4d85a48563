//! Static fallback values for the rate source
//!
//! Last tier of the cache lookup chain. Served only when the rate source
//! is unreachable and no previously fetched rates exist, so figures stay
//! producible offline at the cost of freshness.

use crate::types::market::{AssetRates, CryptoRates, NetworkInfo, NetworkTable};

/// Exchange rates used when no live or cached rates are available
pub fn crypto_rates() -> CryptoRates {
    CryptoRates {
        bitcoin: AssetRates {
            usd: 83859.0,
            rub: 6_999_940.0,
        },
        dogecoin: AssetRates {
            usd: 0.170867,
            rub: 14.26,
        },
    }
}

/// Network difficulty and block-reward snapshot used to seed parameter forms
pub fn network_table() -> NetworkTable {
    NetworkTable {
        btc: NetworkInfo {
            difficulty: 112_149_504_190_349.0,
            block_reward: 3.125,
        },
        doge: NetworkInfo {
            difficulty: 15_234_567.0,
            block_reward: 10000.0,
        },
    }
}
