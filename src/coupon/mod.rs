//! # Coupon Validation
//!
//! Promotional codes are checked against several independent code lists. A code
//! is accepted when enough lists contain it, which tolerates one corrupt or
//! missing list out of three.
//!
//! ## Structure
//!
//! - [`source`] - [`CouponSource`] and its file / in-memory implementations
//! - [`verifier`] - scans one source, cancellable at every line
//! - [`coordinator`] - fans out verifiers and applies the [`QuorumPolicy`]
//! - [`error`] - [`CouponError`]
//!
//! ## Outcomes
//!
//! | Code | Result |
//! |---|---|
//! | empty | `Ok(CouponCheck::NotSupplied)` |
//! | not 8-10 characters | `Err(CouponError::InvalidLength { .. })` |
//! | in enough lists | `Ok(CouponCheck::Accepted)` |
//! | otherwise | `Err(CouponError::Rejected)` |

pub mod coordinator;
pub mod error;
pub mod source;
pub mod verifier;

pub use coordinator::*;
pub use error::*;
pub use source::*;
