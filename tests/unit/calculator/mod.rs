//! Calculator module unit tests

pub mod block_time;
pub mod forecast;
pub mod reports;
pub mod snapshot;
