//! # Product Catalog
//!
//! Read-only product lookup backed by a snapshot that is loaded once at startup.
//!
//! ## Structure
//!
//! - [`ProductLookup`] - the capability the order pipeline depends on
//! - [`ProductCatalog`] - the in-memory snapshot implementation
//! - [`CatalogError`] - load and lookup failures
//!
//! ## Concurrency
//!
//! The snapshot is an `Arc<HashMap<..>>` that is never written after construction,
//! so any number of requests can read it at once without locking. Cloning a
//! `ProductCatalog` is cheap: it only bumps the reference count.
//!
//! ```rust,ignore
//! let catalog = ProductCatalog::load("data/products.json").await?;
//! let lookup: Arc<dyn ProductLookup> = Arc::new(catalog);
//! let waffle = lookup.find_by_id(&ProductId(1)).await?;
//! ```

pub mod error;

pub use error::*;

use crate::model::{Product, ProductId};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Lookup capability over an immutable product catalog.
///
/// Both methods must be safe to call from many tasks at once.
#[async_trait]
pub trait ProductLookup: Send + Sync {
    /// Every product in the catalog, ordered by id.
    async fn list_all(&self) -> Vec<Product>;

    /// Fetch one product, or [`CatalogError::NotFound`].
    async fn find_by_id(&self, id: &ProductId) -> Result<Product, CatalogError>;
}

/// Immutable catalog snapshot keyed by the canonical product id string.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: Arc<HashMap<String, Product>>,
}

impl ProductCatalog {
    /// Builds a snapshot from product values, keyed by each product's `id`.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        let products = products
            .into_iter()
            .map(|product| (product.id.clone(), product))
            .collect();
        Self {
            products: Arc::new(products),
        }
    }

    /// Loads a snapshot from a JSON object mapping id to product:
    ///
    /// ```json
    /// { "1": { "id": "1", "category": "Waffle", "name": "Waffle with Berries", "price": 6.5 } }
    /// ```
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let data = tokio::fs::read(path).await.map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let products: HashMap<String, Product> = serde_json::from_slice(&data)?;
        info!(path = %path.display(), size = products.len(), "Catalog loaded");
        Ok(Self {
            products: Arc::new(products),
        })
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[async_trait]
impl ProductLookup for ProductCatalog {
    async fn list_all(&self) -> Vec<Product> {
        let mut products: Vec<Product> = self.products.values().cloned().collect();
        // Numeric ids first in numeric order, anything else after by string.
        products.sort_by_key(|p| (p.id.parse::<i64>().map_err(|_| ()), p.id.clone()));
        products
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Product, CatalogError> {
        let key = id.to_string();
        let product = self.products.get(&key).cloned();
        debug!(product_id = %key, found = product.is_some(), "Get");
        product.ok_or(CatalogError::NotFound(key))
    }
}
