//! # Product Client
//!
//! Read-only product queries over the catalog snapshot.
use crate::catalog::{CatalogError, ProductLookup};
use crate::model::{Product, ProductId};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Client for querying the product catalog.
#[derive(Clone)]
pub struct ProductClient {
    catalog: Arc<dyn ProductLookup>,
}

impl ProductClient {
    pub fn new(catalog: Arc<dyn ProductLookup>) -> Self {
        Self { catalog }
    }

    /// Lists every product.
    ///
    /// Fails with [`CatalogError::Empty`] when there is nothing to list.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        let products = self.catalog.list_all().await;
        if products.is_empty() {
            warn!("Catalog is empty");
            return Err(CatalogError::Empty);
        }
        debug!(size = products.len(), "Products listed");
        Ok(products)
    }

    /// Finds a product by its raw id string.
    #[instrument(skip(self))]
    pub async fn find_product(&self, raw_id: &str) -> Result<Product, CatalogError> {
        let id: ProductId = raw_id
            .parse()
            .map_err(|_| CatalogError::InvalidId(raw_id.to_string()))?;
        self.catalog.find_by_id(&id).await
    }
}
