//! Utility functions for report formatting
//!
//! Provides shared formatting helpers used across the report formatters.

use crate::errors::{AppError, AppResult};
use crate::types::metrics::MonthlyForecastEntry;
use serde::Serialize;

/// Format number with thousand separators for console output
///
/// # Examples
///
/// ```
/// # use mining_profit_calculator::calculator::reports::utils::format_number;
/// assert_eq!(format_number(1234), "1,234");
/// assert_eq!(format_number(1234567), "1,234,567");
/// ```
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

/// Format a float with fixed decimals and comma-separated thousands
///
/// Non-finite values render as Rust prints them ("inf", "NaN"); callers that
/// need a friendlier sentinel check finiteness first.
///
/// # Examples
///
/// ```
/// # use mining_profit_calculator::calculator::reports::utils::format_float;
/// assert_eq!(format_float(1234567.891, 2), "1,234,567.89");
/// assert_eq!(format_float(112149504190349.0, 0), "112,149,504,190,349");
/// assert_eq!(format_float(-294.0, 2), "-294.00");
/// ```
pub fn format_float(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let mut parts = formatted.splitn(2, '.');
    let int_part = parts.next().unwrap_or("");
    let frac_part = parts.next();

    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };
    if digits.chars().any(|c| !c.is_ascii_digit()) {
        return formatted;
    }

    let chars: Vec<char> = digits.chars().collect();
    let mut grouped = String::new();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i).is_multiple_of(3) {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

/// Export data as JSON for programmatic use
pub fn export_json<T: Serialize>(data: &T) -> AppResult<String> {
    serde_json::to_string_pretty(data)
        .map_err(|e| AppError::InvalidData(format!("JSON export failed: {}", e)))
}

/// Export the forecast table as CSV with a header row
pub fn export_forecast_csv(forecast: &[MonthlyForecastEntry]) -> AppResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for entry in forecast {
        writer.serialize(entry)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::InvalidData(format!("CSV buffer error: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| AppError::InvalidData(format!("CSV encoding error: {}", e)))
}
