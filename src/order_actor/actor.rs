//! # Order Actor
//!
//! Receives [`OrderMessage`]s and runs each placement in its own task, so one slow
//! request never holds up the next.
//!
//! The actor is created without dependencies and receives its
//! [`OrderPlacement`] when [`run`](OrderActor::run) is called. When every client
//! has been dropped the mailbox closes; the actor then waits for in-flight
//! requests to finish before returning.

use super::message::OrderMessage;
use super::placement::OrderPlacement;
use crate::clients::OrderClient;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, info, warn, Instrument};

pub struct OrderActor {
    receiver: mpsc::Receiver<OrderMessage>,
    in_flight: JoinSet<()>,
}

impl OrderActor {
    /// Creates a new `OrderActor` and its associated `OrderClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the mailbox. If it is full, calls to the
    ///   client wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, OrderClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            in_flight: JoinSet::new(),
        };
        (actor, OrderClient::new(sender))
    }

    /// Runs the actor's event loop until the mailbox closes.
    pub async fn run(mut self, placement: OrderPlacement) {
        let placement = Arc::new(placement);
        let mut handled = 0u64;
        info!("Actor started");

        loop {
            tokio::select! {
                msg = self.receiver.recv() => match msg {
                    Some(OrderMessage::PlaceOrder { request, cancel, respond_to }) => {
                        handled += 1;
                        debug!(request = handled, items = request.items.len(), "PlaceOrder");
                        let placement = placement.clone();
                        let span = tracing::info_span!("place_order", request = handled);
                        self.in_flight.spawn(
                            async move {
                                let result = placement.place_order(&request, &cancel).await;
                                // The caller may have given up; nobody to tell then.
                                let _ = respond_to.send(result);
                            }
                            .instrument(span),
                        );
                    }
                    None => break,
                },
                Some(joined) = self.in_flight.join_next(), if !self.in_flight.is_empty() => {
                    if let Err(e) = joined {
                        warn!(error = %e, "Order task failed");
                    }
                }
            }
        }

        let draining = self.in_flight.len();
        while let Some(joined) = self.in_flight.join_next().await {
            if let Err(e) = joined {
                warn!(error = %e, "Order task failed");
            }
        }
        info!(handled, draining, "Shutdown");
    }
}
