use thiserror::Error;

use shipcalc_core::{DomainError, Sku};

/// Failure to resolve a product from the catalog.
///
/// The pricing engine returns these unchanged to its caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No product is registered under the sku.
    #[error("product not found: sku {0}")]
    NotFound(Sku),

    /// The backing store could not serve the lookup.
    #[error("catalog unavailable: {0}")]
    Unavailable(String),

    /// A product record failed validation.
    #[error("invalid product: {0}")]
    InvalidProduct(#[from] DomainError),

    /// A catalog document could not be decoded.
    #[error("malformed catalog: {0}")]
    Malformed(String),
}

impl CatalogError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}
