use core::str::FromStr;

use serde::{Deserialize, Serialize};

use shipcalc_core::{DomainError, DomainResult, Sku};

/// A request for `quantity` units of one product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawOrder")]
pub struct ProductOrder {
    sku: Sku,
    quantity: u32,
}

impl ProductOrder {
    /// Quantity must be at least one.
    pub fn new(sku: Sku, quantity: u32) -> DomainResult<Self> {
        if quantity == 0 {
            return Err(DomainError::validation(format!(
                "quantity for sku {sku} must be positive"
            )));
        }
        Ok(Self { sku, quantity })
    }

    pub fn sku(&self) -> Sku {
        self.sku
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

#[derive(Deserialize)]
struct RawOrder {
    sku: Sku,
    quantity: u32,
}

impl TryFrom<RawOrder> for ProductOrder {
    type Error = DomainError;

    fn try_from(raw: RawOrder) -> Result<Self, Self::Error> {
        Self::new(raw.sku, raw.quantity)
    }
}

/// Parses `SKU:QTY`, e.g. `20:2`.
impl FromStr for ProductOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (sku, quantity) = s
            .split_once(':')
            .ok_or_else(|| DomainError::validation(format!("expected SKU:QTY, got {s:?}")))?;
        let quantity = quantity
            .trim()
            .parse::<u32>()
            .map_err(|e| DomainError::validation(format!("quantity in {s:?}: {e}")))?;
        Self::new(sku.parse::<Sku>()?, quantity)
    }
}
