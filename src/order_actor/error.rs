//! Error types for order placement.

use crate::catalog::CatalogError;
use crate::coupon::CouponError;
use thiserror::Error;

/// Errors that can occur while placing an order.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The request has no items.
    #[error("items required for the order request")]
    NoItems,

    /// An item has a blank product id.
    #[error("productId cannot be empty (item {index})")]
    MissingProductId { index: usize },

    /// An item has a quantity below 1.
    #[error("product quantity required (item {index}, got {quantity})")]
    InvalidQuantity { index: usize, quantity: i64 },

    /// The coupon code has the wrong length or was not accepted.
    #[error(transparent)]
    Coupon(#[from] CouponError),

    /// An item's product id is not in the catalog's identifier form.
    #[error("invalid product ID: {0}")]
    InvalidProductId(String),

    /// An item references a product the catalog does not have.
    #[error("product not found: {0}")]
    ProductNotFound(String),

    /// The catalog itself failed while looking up an item.
    #[error("catalog unavailable: {0}")]
    CatalogUnavailable(String),

    /// The caller cancelled the request before it finished.
    #[error("order placement cancelled")]
    Cancelled,

    /// The request deadline passed before it finished.
    #[error("order placement deadline exceeded")]
    DeadlineExceeded,

    /// An error occurred while communicating with the order actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

/// Coarse classification of [`OrderError`] for mapping to user-facing outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderErrorKind {
    MalformedRequest,
    CouponLength,
    CouponRejected,
    ProductResolution,
    Cancelled,
    Unavailable,
}

impl OrderError {
    pub fn kind(&self) -> OrderErrorKind {
        match self {
            OrderError::NoItems
            | OrderError::MissingProductId { .. }
            | OrderError::InvalidQuantity { .. } => OrderErrorKind::MalformedRequest,
            OrderError::Coupon(CouponError::InvalidLength { .. }) => OrderErrorKind::CouponLength,
            OrderError::Coupon(CouponError::Rejected) => OrderErrorKind::CouponRejected,
            OrderError::InvalidProductId(_) | OrderError::ProductNotFound(_) => {
                OrderErrorKind::ProductResolution
            }
            OrderError::Cancelled | OrderError::DeadlineExceeded => OrderErrorKind::Cancelled,
            OrderError::CatalogUnavailable(_) | OrderError::ActorCommunicationError(_) => {
                OrderErrorKind::Unavailable
            }
        }
    }
}

impl From<CatalogError> for OrderError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::NotFound(id) => OrderError::ProductNotFound(id),
            CatalogError::InvalidId(id) => OrderError::InvalidProductId(id),
            other => OrderError::CatalogUnavailable(other.to_string()),
        }
    }
}
