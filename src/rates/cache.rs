//! Read-through cache over the rate source
//!
//! Lookup runs through three tiers: rates fetched within the TTL, stale
//! rates from an earlier fetch when the source is failing, and finally the
//! static fallback table. Concurrent callers that miss the cache share a
//! single in-flight request through a cloneable pending-result handle
//! rather than each issuing their own fetch.

use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::future::{BoxFuture, Shared};
use futures::FutureExt;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::errors::{RatesError, RatesResult};
use crate::types::market::CryptoRates;

use super::client::RatesClient;
use super::fallback;

/// Fetch function the cache delegates to on a miss
pub type RatesFetcher = Arc<dyn Fn() -> BoxFuture<'static, RatesResult<CryptoRates>> + Send + Sync>;

/// Pending fetch shared between concurrent cache misses
type SharedFetch = Shared<BoxFuture<'static, Result<CryptoRates, Arc<RatesError>>>>;

/// Cache lookup counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Misses answered from an expired entry after a failed fetch
    pub stale_fallbacks: u64,
    /// Misses answered from the static table with nothing cached at all
    pub static_fallbacks: u64,
}

impl CacheStats {
    /// Fraction of lookups served without touching the rate source
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

struct CachedRates {
    rates: CryptoRates,
    fetched_at: Instant,
}

#[derive(Default)]
struct CacheState {
    cached: Option<CachedRates>,
    in_flight: Option<SharedFetch>,
    stats: CacheStats,
}

/// TTL cache with single-flight fetching and tiered fallback
///
/// `get` never fails: when the rate source is down it degrades to stale
/// cached rates, then to the static fallback table, logging a warning for
/// either downgrade. Share the cache between tasks by wrapping it in an
/// `Arc`.
pub struct RatesCache {
    fetch: RatesFetcher,
    ttl: Duration,
    state: Mutex<CacheState>,
}

impl RatesCache {
    /// Create a cache over the given client
    pub fn new(client: RatesClient, ttl: Duration) -> Self {
        let client = Arc::new(client);
        Self::with_fetcher(
            Arc::new(move || {
                let client = Arc::clone(&client);
                async move { client.fetch_rates().await }.boxed()
            }),
            ttl,
        )
    }

    fn with_fetcher(fetch: RatesFetcher, ttl: Duration) -> Self {
        Self {
            fetch,
            ttl,
            state: Mutex::new(CacheState::default()),
        }
    }

    /// Current exchange rates, fetched or served from a fallback tier
    pub async fn get(&self) -> CryptoRates {
        // The lock is only held to inspect state and install the flight
        // handle, never across the fetch itself.
        let flight = {
            let mut state = self.state.lock().await;
            if let Some(cached) = &state.cached {
                if cached.fetched_at.elapsed() < self.ttl {
                    let rates = cached.rates;
                    state.stats.hits += 1;
                    return rates;
                }
            }
            state.stats.misses += 1;

            match &state.in_flight {
                Some(flight) => flight.clone(),
                None => {
                    debug!("rates cache miss, starting fetch");
                    let fetch = Arc::clone(&self.fetch);
                    let flight = async move { fetch().await.map_err(Arc::new) }
                        .boxed()
                        .shared();
                    state.in_flight = Some(flight.clone());
                    flight
                }
            }
        };

        match flight.clone().await {
            Ok(rates) => {
                let mut state = self.state.lock().await;
                Self::clear_flight(&mut state, &flight);
                state.cached = Some(CachedRates {
                    rates,
                    fetched_at: Instant::now(),
                });
                rates
            }
            Err(error) => {
                let mut state = self.state.lock().await;
                Self::clear_flight(&mut state, &flight);
                if let Some(cached) = &state.cached {
                    let rates = cached.rates;
                    state.stats.stale_fallbacks += 1;
                    warn!(%error, "rate fetch failed, serving stale cached rates");
                    return rates;
                }
                state.stats.static_fallbacks += 1;
                warn!(%error, "rate fetch failed with nothing cached, serving static fallback");
                fallback::crypto_rates()
            }
        }
    }

    /// Lookup counters accumulated since the cache was created
    pub async fn stats(&self) -> CacheStats {
        self.state.lock().await.stats
    }

    // A late awaiter must not wipe a newer flight installed after its own
    // completed, hence the handle identity check.
    fn clear_flight(state: &mut CacheState, flight: &SharedFetch) {
        if state.in_flight.as_ref().is_some_and(|f| f.ptr_eq(flight)) {
            state.in_flight = None;
        }
    }
}
