//! Batch pricing pipeline.
//!
//! ```text
//! orders
//!   ↓
//! 1. Sum quantities, pick one pricing mode for the whole batch
//!   ↓
//! 2. Per order (input order): look up product, add price and footprint
//!   ↓
//! 3. Price the combined parcel (one shipping call)
//!   ↓
//! 4. Convert subtotal + shipping (one exchange call)
//! ```
//!
//! The first failed lookup aborts the batch and is returned unchanged.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shipcalc_catalog::{CatalogError, Product, ProductStore};
use shipcalc_core::DomainError;
use shipcalc_currency::CurrencyConverter;
use shipcalc_shipping::{Parcel, ShippingCalculator};

use crate::order::ProductOrder;

/// Batches with more units than this are priced at wholesale.
pub const WHOLESALE_THRESHOLD: u64 = 15;

/// Which per-unit price applies to every order in a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingMode {
    Retail,
    Wholesale,
}

impl PricingMode {
    pub fn for_quantity(total_quantity: u64) -> Self {
        if total_quantity > WHOLESALE_THRESHOLD {
            PricingMode::Wholesale
        } else {
            PricingMode::Retail
        }
    }

    pub fn unit_price(self, product: &Product) -> Decimal {
        match self {
            PricingMode::Retail => product.price,
            PricingMode::Wholesale => product.wholesale_price,
        }
    }
}

/// Breakdown of a priced batch. `total` is in the target currency; every
/// other amount is in catalog currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub mode: PricingMode,
    pub total_quantity: u64,
    pub subtotal: Decimal,
    pub parcel: Parcel,
    pub shipping_cost: Decimal,
    pub total: Decimal,
}

/// Prices batches of orders against injected collaborators.
///
/// - `S`: product lookup
/// - `C`: shipping cost for the combined parcel
/// - `X`: conversion into the target currency
///
/// Holds no per-call state, so one calculator can serve concurrent callers as
/// long as the collaborators allow it.
#[derive(Debug)]
pub struct OrderCalculator<S, C, X> {
    store: S,
    shipping: C,
    converter: X,
}

impl<S, C, X> OrderCalculator<S, C, X> {
    pub fn new(store: S, shipping: C, converter: X) -> Self {
        Self {
            store,
            shipping,
            converter,
        }
    }

    pub fn into_parts(self) -> (S, C, X) {
        (self.store, self.shipping, self.converter)
    }
}

impl<S, C, X> OrderCalculator<S, C, X>
where
    S: ProductStore,
    C: ShippingCalculator,
    X: CurrencyConverter,
{
    /// Total price of `orders` in the target currency, shipping included.
    pub fn get_price(&self, orders: &[ProductOrder]) -> Result<Decimal, CatalogError> {
        self.quote(orders).map(|quote| quote.total)
    }

    /// Same pipeline as [`get_price`](Self::get_price), returning the breakdown.
    ///
    /// An empty batch still goes through shipping and conversion with a zero
    /// subtotal and an empty parcel.
    #[tracing::instrument(skip_all, fields(orders = orders.len()))]
    pub fn quote(&self, orders: &[ProductOrder]) -> Result<Quote, CatalogError> {
        let total_quantity: u64 = orders.iter().map(|o| u64::from(o.quantity())).sum();
        let mode = PricingMode::for_quantity(total_quantity);

        let mut subtotal = Decimal::ZERO;
        let mut parcel = Parcel::zero();

        for order in orders {
            let product = self.store.get(order.sku()).inspect_err(|err| {
                tracing::warn!(sku = %order.sku(), error = %err, "product lookup failed");
            })?;
            product.validate()?;

            let quantity = Decimal::from(order.quantity());
            subtotal = mode
                .unit_price(&product)
                .checked_mul(quantity)
                .and_then(|line| subtotal.checked_add(line))
                .ok_or_else(|| overflow(format!("subtotal at sku {}", order.sku())))?;
            parcel = parcel.checked_add(Parcel::of_units(
                product.weight,
                product.volume,
                order.quantity(),
            )?)?;

            tracing::debug!(
                sku = %order.sku(),
                quantity = order.quantity(),
                subtotal = %subtotal,
                "order priced"
            );
        }

        let shipping_cost = self.shipping.calculate(&parcel);
        let amount = subtotal
            .checked_add(shipping_cost)
            .ok_or_else(|| overflow("subtotal plus shipping".to_string()))?;
        let total = self.converter.exchange(amount);

        tracing::info!(
            ?mode,
            total_quantity,
            subtotal = %subtotal,
            shipping_cost = %shipping_cost,
            total = %total,
            "batch priced"
        );

        Ok(Quote {
            mode,
            total_quantity,
            subtotal,
            parcel,
            shipping_cost,
            total,
        })
    }
}

/// Amounts past `Decimal`'s range come from catalog data, so they surface as
/// an invalid product rather than a panic.
fn overflow(what: String) -> CatalogError {
    CatalogError::InvalidProduct(DomainError::validation(format!("{what} overflows")))
}
