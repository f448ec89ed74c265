//! # Order Actor
//!
//! Order placement: the pipeline itself plus the actor that serves it.
//!
//! ## Structure
//!
//! - [`placement`] - [`OrderPlacement`], the fail-fast join of coupon check and item resolution
//! - [`resolver`] - line items to catalog products
//! - [`ids`] - [`OrderIdSource`] implementations
//! - [`actor`] / [`message`] - the mailbox front-end
//! - [`mock`] - helpers for testing clients without an actor
//! - [`error`] - [`OrderError`] and [`OrderErrorKind`]
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (actor, client) = order_actor::new(32);
//! tokio::spawn(actor.run(placement));
//!
//! let order = client.place_order(request).await?;
//! ```

pub mod actor;
pub mod error;
pub mod ids;
pub mod message;
pub mod mock;
pub mod placement;
pub mod resolver;

pub use actor::OrderActor;
pub use error::*;
pub use ids::*;
pub use message::{MailboxError, OrderMessage, Response};
pub use placement::OrderPlacement;

use crate::clients::OrderClient;

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (OrderActor, OrderClient) {
    OrderActor::new(buffer_size)
}
