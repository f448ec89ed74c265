//! # Order Messages
//!
//! Messages sent from [`OrderClient`](crate::clients::OrderClient) to the
//! [`OrderActor`](super::OrderActor), and the errors of the channel itself.

use crate::model::{Order, OrderRequest};
use crate::order_actor::OrderError;
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, OrderError>>;

#[derive(Debug)]
pub enum OrderMessage {
    PlaceOrder {
        request: OrderRequest,
        cancel: CancellationToken,
        respond_to: Response<Order>,
    },
}

/// Failures of the mailbox rather than of the order.
#[derive(Debug, thiserror::Error)]
pub enum MailboxError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
}

impl From<MailboxError> for OrderError {
    fn from(e: MailboxError) -> Self {
        OrderError::ActorCommunicationError(e.to_string())
    }
}
