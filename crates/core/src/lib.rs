//! `shipcalc-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the catalog,
//! shipping, currency and pricing crates (no IO).

pub mod error;
pub mod id;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use id::Sku;
pub use value_object::{non_negative, parse_non_negative, ValueObject};
