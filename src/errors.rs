#![allow(dead_code)]

use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// Exchange-rate source operations
    #[error("Rates error: {0}")]
    Rates(#[from] RatesError),

    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV export
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation/parsing
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Mining parameter rejected at the input boundary
    #[error("Invalid parameter {field}: {reason}")]
    InvalidParameter { field: String, reason: String },
}

/// Exchange-rate source error types
#[derive(Error, Debug)]
pub enum RatesError {
    /// HTTP request to the rate source failed (network, DNS, status)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Rate source request timed out
    #[error("Request timeout: {timeout_seconds}s")]
    Timeout { timeout_seconds: u64 },

    /// Rate source returned unexpected or malformed response data
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Requested asset missing from the rate source payload
    #[error("Asset not in response: {asset}")]
    MissingAsset { asset: String },
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

/// Result type for rate-source operations
pub type RatesResult<T> = Result<T, RatesError>;

// Additional From implementations for common error types
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidData(format!("JSON error: {}", err))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<chrono::ParseError> for AppError {
    fn from(err: chrono::ParseError) -> Self {
        AppError::InvalidData(format!("Date parse error: {}", err))
    }
}
