//! # Order Client
//!
//! Provides a high-level API for placing orders through the `Order` actor.
//! It owns the request deadline; the pipeline itself only sees a cancellation token.
use crate::model::{Order, OrderRequest};
use crate::order_actor::{MailboxError, OrderError, OrderMessage};
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

/// Deadline applied by [`OrderClient::place_order`] unless configured otherwise.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    sender: mpsc::Sender<OrderMessage>,
    timeout: Duration,
}

impl OrderClient {
    pub fn new(sender: mpsc::Sender<OrderMessage>) -> Self {
        Self {
            sender,
            timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Places an order under the client's request deadline.
    ///
    /// When the deadline passes the request token is cancelled, so the pipeline
    /// stops promptly, and the result is [`OrderError::DeadlineExceeded`].
    #[instrument(skip_all, fields(items = request.items.len()))]
    pub async fn place_order(&self, request: OrderRequest) -> Result<Order, OrderError> {
        let cancel = CancellationToken::new();
        // Also fires if the caller drops this future.
        let _cancel_on_exit = cancel.clone().drop_guard();

        match tokio::time::timeout(self.timeout, self.place_order_with_cancel(request, cancel))
            .await
        {
            Ok(result) => result,
            Err(_) => {
                warn!(timeout_ms = self.timeout.as_millis() as u64, "Order deadline exceeded");
                Err(OrderError::DeadlineExceeded)
            }
        }
    }

    /// Places an order under a caller-owned cancellation token, with no deadline.
    #[instrument(skip_all, fields(items = request.items.len()))]
    pub async fn place_order_with_cancel(
        &self,
        request: OrderRequest,
        cancel: CancellationToken,
    ) -> Result<Order, OrderError> {
        debug!(?request, "place_order called");
        info!("Sending place_order to actor");

        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(OrderMessage::PlaceOrder {
                request,
                cancel,
                respond_to,
            })
            .await
            .map_err(|_| MailboxError::ActorClosed)?;
        response.await.map_err(|_| MailboxError::ActorDropped)?
    }
}
