//! Error types for coupon validation.

use thiserror::Error;

/// Reasons a supplied coupon code stops an order.
///
/// An empty code is not an error; see
/// [`CouponCheck::NotSupplied`](crate::coupon::CouponCheck::NotSupplied).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CouponError {
    /// The code is not between 8 and 10 characters long.
    #[error("invalid promo code length: {length} characters")]
    InvalidLength { length: usize },

    /// Not enough coupon lists contain the code.
    #[error("invalid promo code")]
    Rejected,
}
