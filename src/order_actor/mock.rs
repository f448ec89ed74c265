//! # Mock Helpers
//!
//! Utilities for testing [`OrderClient`] logic without running an
//! [`OrderActor`](super::OrderActor).
//!
//! ```rust,ignore
//! let (client, mut receiver) = create_mock_client(10);
//! let task = tokio::spawn(async move { client.place_order(request).await });
//!
//! let (request, cancel, responder) = expect_place_order(&mut receiver).await.unwrap();
//! responder.send(Ok(order)).unwrap();
//! ```

use super::message::{OrderMessage, Response};
use crate::clients::OrderClient;
use crate::model::{Order, OrderRequest};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// A client wired to a bare receiver that the test drives by hand.
pub fn create_mock_client(buffer_size: usize) -> (OrderClient, mpsc::Receiver<OrderMessage>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (OrderClient::new(sender), receiver)
}

/// Waits for the next `PlaceOrder` message and hands back its parts.
pub async fn expect_place_order(
    receiver: &mut mpsc::Receiver<OrderMessage>,
) -> Option<(OrderRequest, CancellationToken, Response<Order>)> {
    match receiver.recv().await {
        Some(OrderMessage::PlaceOrder {
            request,
            cancel,
            respond_to,
        }) => Some((request, cancel, respond_to)),
        None => None,
    }
}
