use std::time::Duration;

use anyhow::Result;
use mining_profit_calculator::config::RatesApiConfig;
use mining_profit_calculator::errors::RatesError;
use mining_profit_calculator::rates::RatesClient;
use tokio::time::timeout;

/// Tests for the exchange-rate HTTP client
///
/// These tests verify client construction and transport error mapping
/// without a live rate source.

#[test]
fn test_rates_api_config_defaults() {
    let config = RatesApiConfig::default();

    assert_eq!(config.base_url, "https://api.coingecko.com/api/v3");
    assert_eq!(config.timeout_seconds, 5);
    assert_eq!(config.cache_ttl_seconds, 300);
    assert_eq!(config.timeout(), Duration::from_secs(5));
    assert_eq!(config.cache_ttl(), Duration::from_secs(300));
}

#[test]
fn test_client_builds_for_common_url_shapes() {
    let urls = vec![
        "https://api.coingecko.com/api/v3",
        "http://localhost:8080/api/v3",
        "http://127.0.0.1:9090",
    ];

    for url in urls {
        assert!(RatesClient::new(url, Duration::from_secs(5)).is_ok());
    }
}

#[tokio::test]
async fn test_connection_refused_maps_to_request_failed() -> Result<()> {
    // Nothing listens on this port; the connect fails outright
    let client = RatesClient::new("http://127.0.0.1:1", Duration::from_secs(2))
        .expect("client builds");

    let result = timeout(Duration::from_secs(10), client.fetch_rates()).await?;
    match result {
        Err(RatesError::RequestFailed(_)) => {}
        other => panic!("expected a request failure, got {:?}", other),
    }

    Ok(())
}

#[tokio::test]
async fn test_unanswered_request_maps_to_timeout() -> Result<()> {
    // Accepting listener that never writes a response
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let client = RatesClient::new(format!("http://{}", addr), Duration::from_secs(1))
        .expect("client builds");

    let result = timeout(Duration::from_secs(10), client.fetch_rates()).await?;
    match result {
        Err(RatesError::Timeout { timeout_seconds }) => assert_eq!(timeout_seconds, 1),
        other => panic!("expected a timeout, got {:?}", other),
    }

    drop(listener);
    Ok(())
}

#[test]
fn test_rates_error_messages_name_the_failure() {
    let err = RatesError::Timeout { timeout_seconds: 5 };
    assert_eq!(err.to_string(), "Request timeout: 5s");

    let err = RatesError::MissingAsset {
        asset: "dogecoin".to_string(),
    };
    assert!(err.to_string().contains("dogecoin"));
}
