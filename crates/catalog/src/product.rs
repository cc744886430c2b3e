use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shipcalc_core::{non_negative, DomainResult, Sku};

/// Catalog attributes of a product, per unit.
///
/// `wholesale_price` applies instead of `price` when a whole batch of orders
/// crosses the wholesale threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub sku: Sku,
    pub price: Decimal,
    #[serde(default)]
    pub wholesale_price: Decimal,
    pub weight: Decimal,
    pub volume: Decimal,
}

impl Product {
    /// Build a validated product. All amounts must be non-negative.
    pub fn new(
        sku: Sku,
        price: Decimal,
        wholesale_price: Decimal,
        weight: Decimal,
        volume: Decimal,
    ) -> DomainResult<Self> {
        let product = Self {
            sku,
            price,
            wholesale_price,
            weight,
            volume,
        };
        product.validate()?;
        Ok(product)
    }

    /// Check the non-negativity invariants on a product built by hand or
    /// decoded from a catalog document.
    pub fn validate(&self) -> DomainResult<()> {
        non_negative("price", self.price)?;
        non_negative("wholesale_price", self.wholesale_price)?;
        non_negative("weight", self.weight)?;
        non_negative("volume", self.volume)?;
        Ok(())
    }
}
