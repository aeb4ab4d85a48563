//! Mining Profitability Calculator
//!

pub mod calculator;
pub mod cli;
pub mod config;
pub mod errors;
pub mod rates;
pub mod types;
pub mod utils;
