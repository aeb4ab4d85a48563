//! Exchange-rate source integration module
//!
//! This module provides all rate-source-related functionality including:
//! - **Client** - Async HTTP client for a CoinGecko-compatible price API
//! - **Cache** - TTL cache with single-flight fetch deduplication
//! - **Fallback** - Static rate and network tables for offline operation
//!
//! The client uses the `reqwest` crate; cache misses degrade through
//! stale cached rates down to the static fallback table, so rate lookup
//! never fails outright.

pub mod cache;
pub mod client;
pub mod fallback;

// Re-export main types
pub use cache::{CacheStats, RatesCache, RatesFetcher};
pub use client::RatesClient;
