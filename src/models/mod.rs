pub mod error;
pub mod rates;
