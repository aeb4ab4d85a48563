//! Currency formatting and conversion utilities
//!
//! This module provides standardised formatting for crypto and fiat amounts
//! and the cross-rate conversion used when cost inputs switch currency.

use crate::types::market::CryptoRates;
use crate::types::params::{CryptoAsset, FiatCurrency};

/// Format an asset amount with 8 decimal places and its ticker
///
/// # Examples
/// ```
/// use mining_profit_calculator::types::CryptoAsset;
/// use mining_profit_calculator::utils::currency::format_crypto;
///
/// assert_eq!(format_crypto(0.00231222, CryptoAsset::Btc), "0.00231222 BTC");
/// assert_eq!(format_crypto(125.5, CryptoAsset::Doge), "125.50000000 DOGE");
/// ```
pub fn format_crypto(amount: f64, asset: CryptoAsset) -> String {
    format!("{:.8} {}", amount, asset.ticker())
}

/// Format a fiat amount with thousand separators and the currency symbol
///
/// USD amounts take a `$` prefix, RUB amounts a `₽` suffix.
///
/// # Examples
/// ```
/// use mining_profit_calculator::types::FiatCurrency;
/// use mining_profit_calculator::utils::currency::format_fiat;
///
/// assert_eq!(format_fiat(8820.0, FiatCurrency::Rub), "8,820.00 ₽");
/// assert_eq!(format_fiat(1234567.891, FiatCurrency::Usd), "$1,234,567.89");
/// ```
pub fn format_fiat(amount: f64, currency: FiatCurrency) -> String {
    let grouped = format_grouped(amount, 2);
    match currency {
        FiatCurrency::Usd => format!("${}", grouped),
        FiatCurrency::Rub => format!("{} ₽", grouped),
    }
}

/// Render a float with fixed decimals and comma-separated thousands
fn format_grouped(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let mut parts = formatted.splitn(2, '.');
    let int_part = parts.next().unwrap_or("");
    let frac_part = parts.next();

    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let chars: Vec<char> = digits.chars().collect();
    let mut grouped = String::new();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

/// Farm cost and electricity tariff expressed in one fiat currency
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostInputs {
    pub farm_cost: f64,
    pub electricity_rate: f64,
}

/// Convert cost inputs between fiat currencies via the BTC cross rate
///
/// The USD→RUB factor is `BTC price in RUB / BTC price in USD`. Converted
/// farm costs are rounded to whole units, tariffs to 2 decimal places. A
/// same-currency conversion returns the inputs untouched.
pub fn convert_cost_inputs(
    inputs: CostInputs,
    from: FiatCurrency,
    to: FiatCurrency,
    rates: &CryptoRates,
) -> CostInputs {
    let usd_to_rub = rates.bitcoin.rub / rates.bitcoin.usd;

    let converted = match (from, to) {
        (FiatCurrency::Usd, FiatCurrency::Rub) => CostInputs {
            farm_cost: inputs.farm_cost * usd_to_rub,
            electricity_rate: inputs.electricity_rate * usd_to_rub,
        },
        (FiatCurrency::Rub, FiatCurrency::Usd) => CostInputs {
            farm_cost: inputs.farm_cost / usd_to_rub,
            electricity_rate: inputs.electricity_rate / usd_to_rub,
        },
        _ => return inputs,
    };

    CostInputs {
        farm_cost: converted.farm_cost.round(),
        electricity_rate: (converted.electricity_rate * 100.0).round() / 100.0,
    }
}
