/// Represents an order request and the confirmed order built from it.
///
/// See [`OrderPlacement`](crate::order_actor::OrderPlacement) for how a request
/// turns into an [`Order`].
use crate::model::Product;
use crate::order_actor::OrderError;
use serde::{Deserialize, Serialize};

/// One requested line of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    pub quantity: i64,
}

impl OrderItem {
    pub fn new(product_id: impl Into<String>, quantity: i64) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}

/// Payload for placing a new order.
///
/// An absent `couponCode` is treated the same as an empty one: no coupon supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub coupon_code: String,
}

impl OrderRequest {
    pub fn new(items: Vec<OrderItem>, coupon_code: impl Into<String>) -> Self {
        Self {
            items,
            coupon_code: coupon_code.into(),
        }
    }

    /// Structural validation, run once before any concurrent work starts.
    ///
    /// # Errors
    /// - [`OrderError::NoItems`] when the item list is empty
    /// - [`OrderError::MissingProductId`] for the first item with a blank product id
    /// - [`OrderError::InvalidQuantity`] for the first item with quantity below 1
    pub fn validate(&self) -> Result<(), OrderError> {
        if self.items.is_empty() {
            return Err(OrderError::NoItems);
        }

        for (index, item) in self.items.iter().enumerate() {
            if item.product_id.is_empty() {
                return Err(OrderError::MissingProductId { index });
            }
            if item.quantity <= 0 {
                return Err(OrderError::InvalidQuantity {
                    index,
                    quantity: item.quantity,
                });
            }
        }

        Ok(())
    }
}

/// A confirmed order.
///
/// `products[i]` is the catalog record for `items[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub items: Vec<OrderItem>,
    pub products: Vec<Product>,
}
