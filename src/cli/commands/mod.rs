pub mod calculate;
pub mod convert;
pub mod rates;
