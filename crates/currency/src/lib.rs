//! Currency conversion seam.

pub mod converter;

pub use converter::{CurrencyCode, CurrencyConverter, FixedRateConverter};
