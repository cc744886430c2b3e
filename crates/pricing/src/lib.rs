//! Order pricing: totals a batch of product orders in the target currency.
//!
//! The engine combines three injected collaborators (catalog lookup,
//! shipping cost, currency exchange) under the wholesale volume rule. It
//! performs no IO of its own.

pub mod calculator;
pub mod order;

pub use calculator::{OrderCalculator, PricingMode, Quote, WHOLESALE_THRESHOLD};
pub use order::ProductOrder;
