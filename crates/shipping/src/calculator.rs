//! Shipping-cost seam and a flat-rate reference implementation.

use std::sync::Arc;

use rust_decimal::Decimal;

use shipcalc_core::{non_negative, DomainResult};

use crate::parcel::Parcel;

/// Prices a whole shipment.
///
/// Infallible by contract: an estimator that can fail must resolve that
/// itself before returning a cost.
pub trait ShippingCalculator: Send + Sync {
    fn calculate(&self, parcel: &Parcel) -> Decimal;
}

impl<T: ShippingCalculator + ?Sized> ShippingCalculator for &T {
    fn calculate(&self, parcel: &Parcel) -> Decimal {
        (**self).calculate(parcel)
    }
}

impl<T: ShippingCalculator + ?Sized> ShippingCalculator for Box<T> {
    fn calculate(&self, parcel: &Parcel) -> Decimal {
        (**self).calculate(parcel)
    }
}

impl<T: ShippingCalculator + ?Sized> ShippingCalculator for Arc<T> {
    fn calculate(&self, parcel: &Parcel) -> Decimal {
        (**self).calculate(parcel)
    }
}

/// `base + per_weight * weight + per_volume * volume`, saturating at
/// `Decimal::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlatRateShipping {
    base: Decimal,
    per_weight: Decimal,
    per_volume: Decimal,
}

impl FlatRateShipping {
    pub fn new(base: Decimal, per_weight: Decimal, per_volume: Decimal) -> DomainResult<Self> {
        Ok(Self {
            base: non_negative("base", base)?,
            per_weight: non_negative("per_weight", per_weight)?,
            per_volume: non_negative("per_volume", per_volume)?,
        })
    }

    /// Shipping that never costs anything.
    pub fn free() -> Self {
        Self::default()
    }
}

impl ShippingCalculator for FlatRateShipping {
    fn calculate(&self, parcel: &Parcel) -> Decimal {
        self.base
            .saturating_add(self.per_weight.saturating_mul(parcel.weight()))
            .saturating_add(self.per_volume.saturating_mul(parcel.volume()))
    }
}
