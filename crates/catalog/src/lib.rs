//! Product catalog: product attributes and the lookup seam used by pricing.
//!
//! The pricing engine only depends on the [`ProductStore`] trait; the
//! in-memory store is a reference implementation for the CLI and tests.

pub mod error;
pub mod product;
pub mod store;

pub use error::CatalogError;
pub use product::Product;
pub use store::{InMemoryProductStore, ProductStore};
