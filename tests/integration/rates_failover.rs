//! Rates Failover Integration Tests
//!
//! These tests point the full client/cache stack at an unreachable rate
//! source and verify the degradation chain keeps the calculator usable
//! offline.

use std::time::Duration;

use anyhow::Result;
use tokio::time::timeout;

use mining_profit_calculator::calculator::CalculatorEngine;
use mining_profit_calculator::rates::{fallback, RatesCache, RatesClient};

use crate::common::btc_form;

fn unreachable_cache() -> RatesCache {
    // Nothing listens on this port; every fetch fails fast
    let client =
        RatesClient::new("http://127.0.0.1:1", Duration::from_secs(2)).expect("client builds");
    RatesCache::new(client, Duration::from_secs(300))
}

#[tokio::test]
async fn test_unreachable_source_degrades_to_static_fallback() -> Result<()> {
    let cache = unreachable_cache();

    let rates = timeout(Duration::from_secs(10), cache.get()).await?;

    assert_eq!(rates, fallback::crypto_rates());
    let stats = cache.stats().await;
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.static_fallbacks, 1);
    assert_eq!(stats.hits, 0);

    Ok(())
}

#[tokio::test]
async fn test_failed_fetches_are_not_cached() -> Result<()> {
    let cache = unreachable_cache();

    timeout(Duration::from_secs(10), cache.get()).await?;
    timeout(Duration::from_secs(10), cache.get()).await?;

    // The fallback answer never enters the cache, so each lookup retries
    // the source
    let stats = cache.stats().await;
    assert_eq!(stats.misses, 2);
    assert_eq!(stats.static_fallbacks, 2);
    assert!(stats.hit_rate().abs() < f64::EPSILON);

    Ok(())
}

#[tokio::test]
async fn test_fallback_rates_drive_a_full_calculation() -> Result<()> {
    let cache = unreachable_cache();
    let rates = timeout(Duration::from_secs(10), cache.get()).await?;

    let engine = CalculatorEngine::new(fallback::network_table());
    let report = engine
        .calculate(&btc_form(), &rates)?
        .expect("form has both selectors");

    assert!((report.exchange_rate - 6_999_940.0).abs() < f64::EPSILON);
    assert_eq!(report.forecast.len(), 12);
    assert!(report.snapshot.monthly.profit > 0.0);

    Ok(())
}
