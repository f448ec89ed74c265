//! # Order Placement
//!
//! The root of the pipeline. A request moves through these states:
//!
//! ```text
//! Received -> Validating -> { CouponCheck, ItemResolution } -> Assembled
//!                  |                     |
//!                  +------> Failed <-----+
//! ```
//!
//! Structural validation runs synchronously. The coupon check and item
//! resolution then run concurrently under a group token derived from the
//! caller's. The first sub-task to fail ends the join, its error becomes the
//! result, and the group token is cancelled so the sibling stops. The coupon
//! outcome gates the order but is not stored in it.

use crate::catalog::ProductLookup;
use crate::coupon::CouponValidator;
use crate::model::{Order, OrderRequest};
use crate::order_actor::resolver::resolve_items;
use crate::order_actor::{OrderError, OrderIdSource};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

/// Everything a request needs, wired once at startup and shared by all requests.
#[derive(Clone)]
pub struct OrderPlacement {
    catalog: Arc<dyn ProductLookup>,
    coupons: CouponValidator,
    ids: Arc<dyn OrderIdSource>,
}

impl OrderPlacement {
    pub fn new(
        catalog: Arc<dyn ProductLookup>,
        coupons: CouponValidator,
        ids: Arc<dyn OrderIdSource>,
    ) -> Self {
        Self {
            catalog,
            coupons,
            ids,
        }
    }

    /// Places one order.
    ///
    /// `cancel` is owned by the caller; deadlines are expressed by cancelling it.
    /// If it fires before the join completes the result is
    /// [`OrderError::Cancelled`].
    #[instrument(skip_all, fields(items = request.items.len()))]
    pub async fn place_order(
        &self,
        request: &OrderRequest,
        cancel: &CancellationToken,
    ) -> Result<Order, OrderError> {
        debug!(?request, "place_order called");

        if let Err(e) = request.validate() {
            warn!(error = %e, "Malformed order request");
            return Err(e);
        }

        let group = cancel.child_token();
        let _cancel_group = group.clone().drop_guard();

        let coupon_check = async {
            let check = self.coupons.validate(&request.coupon_code, &group).await?;
            debug!(?check, "Coupon check passed");
            Ok::<_, OrderError>(check)
        };
        let item_resolution = resolve_items(&request.items, self.catalog.as_ref(), &group);

        let joined = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(OrderError::Cancelled),
            joined = async { tokio::try_join!(coupon_check, item_resolution) } => joined,
        };

        let products = match joined {
            Ok((_, products)) => products,
            Err(_) if cancel.is_cancelled() => {
                warn!("Order placement cancelled by caller");
                return Err(OrderError::Cancelled);
            }
            Err(e) => {
                warn!(error = %e, kind = ?e.kind(), "Order placement failed");
                return Err(e);
            }
        };

        let order = Order {
            id: self.ids.next_id(),
            items: request.items.clone(),
            products,
        };
        info!(order_id = %order.id, "Order assembled");
        Ok(order)
    }
}
