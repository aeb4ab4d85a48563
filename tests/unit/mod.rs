//! Unit Tests Module
//!
//! Per-area tests that drive individual components through the public
//! library API.

pub mod calculator;
