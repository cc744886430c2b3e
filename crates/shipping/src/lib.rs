//! Shipping: the parcel value object and the shipping-cost seam.

pub mod calculator;
pub mod parcel;

pub use calculator::{FlatRateShipping, ShippingCalculator};
pub use parcel::Parcel;
