//! Turns requested line items into catalog products.

use crate::catalog::ProductLookup;
use crate::model::{OrderItem, Product, ProductId};
use crate::order_actor::OrderError;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Resolves `items` in request order, stopping at the first failure.
///
/// The returned products are index-aligned with `items`. On any failure the
/// partial result is discarded. Cancellation is checked before every lookup and
/// raced against the lookup itself.
pub async fn resolve_items(
    items: &[OrderItem],
    catalog: &dyn ProductLookup,
    cancel: &CancellationToken,
) -> Result<Vec<Product>, OrderError> {
    let mut products = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        if cancel.is_cancelled() {
            debug!(index, "Item resolution cancelled");
            return Err(OrderError::Cancelled);
        }

        let id: ProductId = item.product_id.parse().map_err(|e| {
            warn!(index, product_id = %item.product_id, error = %e, "Invalid product id");
            OrderError::InvalidProductId(item.product_id.clone())
        })?;

        let found = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!(index, "Item resolution cancelled");
                return Err(OrderError::Cancelled);
            }
            found = catalog.find_by_id(&id) => found,
        };

        match found {
            Ok(product) => products.push(product),
            Err(e) => {
                warn!(index, product_id = %id, error = %e, "Item resolution failed");
                return Err(e.into());
            }
        }
    }

    debug!(resolved = products.len(), "Items resolved");
    Ok(products)
}
