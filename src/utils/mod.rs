//! Shared utility functions

pub mod currency;
pub mod time;
