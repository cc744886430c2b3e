use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shipcalc_core::{non_negative, DomainError, DomainResult, ValueObject};

/// Aggregated physical footprint of a shipment.
///
/// Arithmetic is checked: a footprint too large for `Decimal` is a
/// validation error, never a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Parcel {
    weight: Decimal,
    volume: Decimal,
}

impl ValueObject for Parcel {}

impl Parcel {
    pub fn new(weight: Decimal, volume: Decimal) -> DomainResult<Self> {
        Ok(Self {
            weight: non_negative("weight", weight)?,
            volume: non_negative("volume", volume)?,
        })
    }

    /// The empty shipment.
    pub const fn zero() -> Self {
        Self {
            weight: Decimal::ZERO,
            volume: Decimal::ZERO,
        }
    }

    /// Footprint of `quantity` units that each weigh `weight` and take `volume`.
    pub fn of_units(weight: Decimal, volume: Decimal, quantity: u32) -> DomainResult<Self> {
        Self::new(weight, volume)?.scaled(quantity)
    }

    pub fn scaled(self, quantity: u32) -> DomainResult<Self> {
        let quantity = Decimal::from(quantity);
        Ok(Self {
            weight: overflow_checked("weight", self.weight.checked_mul(quantity))?,
            volume: overflow_checked("volume", self.volume.checked_mul(quantity))?,
        })
    }

    /// Componentwise sum of two parcels.
    pub fn checked_add(self, rhs: Parcel) -> DomainResult<Self> {
        Ok(Self {
            weight: overflow_checked("weight", self.weight.checked_add(rhs.weight))?,
            volume: overflow_checked("volume", self.volume.checked_add(rhs.volume))?,
        })
    }

    pub fn weight(&self) -> Decimal {
        self.weight
    }

    pub fn volume(&self) -> Decimal {
        self.volume
    }

    pub fn is_empty(&self) -> bool {
        self.weight.is_zero() && self.volume.is_zero()
    }
}

fn overflow_checked(field: &str, value: Option<Decimal>) -> DomainResult<Decimal> {
    value.ok_or_else(|| DomainError::validation(format!("parcel {field} overflows")))
}
