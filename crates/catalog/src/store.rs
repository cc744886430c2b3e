//! Product lookup seam and the in-memory reference store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use shipcalc_core::{DomainError, Sku};

use crate::error::CatalogError;
use crate::product::Product;

/// Resolves a sku to its catalog attributes.
///
/// Implementations must be safe to share across threads; the pricing engine
/// calls `get` once per order, in order, and never caches results.
pub trait ProductStore: Send + Sync {
    fn get(&self, sku: Sku) -> Result<Product, CatalogError>;
}

impl<T: ProductStore + ?Sized> ProductStore for &T {
    fn get(&self, sku: Sku) -> Result<Product, CatalogError> {
        (**self).get(sku)
    }
}

impl<T: ProductStore + ?Sized> ProductStore for Box<T> {
    fn get(&self, sku: Sku) -> Result<Product, CatalogError> {
        (**self).get(sku)
    }
}

impl<T: ProductStore + ?Sized> ProductStore for Arc<T> {
    fn get(&self, sku: Sku) -> Result<Product, CatalogError> {
        (**self).get(sku)
    }
}

/// In-memory product catalog.
///
/// Intended for tests and the CLI. Later inserts replace earlier ones.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    products: RwLock<HashMap<Sku, Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from products, rejecting invalid records and duplicate skus.
    pub fn from_products(
        products: impl IntoIterator<Item = Product>,
    ) -> Result<Self, CatalogError> {
        let mut map = HashMap::new();
        for product in products {
            product.validate()?;
            let sku = product.sku;
            if map.insert(sku, product).is_some() {
                return Err(DomainError::validation(format!("duplicate sku {sku}")).into());
            }
        }
        tracing::debug!(products = map.len(), "catalog loaded");
        Ok(Self {
            products: RwLock::new(map),
        })
    }

    /// Decode a JSON array of product objects.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> =
            serde_json::from_str(json).map_err(|e| CatalogError::Malformed(e.to_string()))?;
        Self::from_products(products)
    }

    pub fn insert(&self, product: Product) -> Result<(), CatalogError> {
        product.validate()?;
        let mut products = self
            .products
            .write()
            .map_err(|_| CatalogError::unavailable("lock poisoned"))?;
        products.insert(product.sku, product);
        Ok(())
    }

    /// Number of products. A poisoned lock still holds a consistent map
    /// (inserts are single `HashMap::insert` calls), so it is read anyway.
    pub fn len(&self) -> usize {
        self.products
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ProductStore for InMemoryProductStore {
    fn get(&self, sku: Sku) -> Result<Product, CatalogError> {
        let products = self
            .products
            .read()
            .map_err(|_| CatalogError::unavailable("lock poisoned"))?;
        products.get(&sku).cloned().ok_or(CatalogError::NotFound(sku))
    }
}
