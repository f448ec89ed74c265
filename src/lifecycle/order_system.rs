use crate::catalog::{ProductCatalog, ProductLookup};
use crate::clients::{OrderClient, ProductClient};
use crate::coupon::{CouponSource, CouponValidator, FileCouponSource, QuorumPolicy};
use crate::lifecycle::AppConfig;
use crate::order_actor::{OrderIdSource, OrderPlacement, UuidIds};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

/// The runtime orchestrator for the order pipeline.
///
/// `OrderSystem` is responsible for:
/// - **Dependency Wiring**: catalog, coupon sources, quorum policy and id source
///   are assembled into one [`OrderPlacement`]
/// - **Lifecycle Management**: starting the order actor and stopping it cleanly
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::from_config(&AppConfig::from_env()?).await;
///
/// let order = system.order_client.place_order(request).await?;
/// let menu = system.product_client.list_products().await?;
///
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    /// Client for placing orders through the order actor
    pub order_client: OrderClient,

    /// Client for read-only catalog queries
    pub product_client: ProductClient,

    handle: tokio::task::JoinHandle<()>,
}

/// Everything [`OrderSystem::new`] wires together.
pub struct SystemParts {
    pub catalog: Arc<dyn ProductLookup>,
    pub coupon_sources: Vec<Arc<dyn CouponSource>>,
    pub quorum: QuorumPolicy,
    pub ids: Arc<dyn OrderIdSource>,
    pub channel_capacity: usize,
    pub request_timeout: Duration,
}

impl OrderSystem {
    /// Starts the order actor with the given dependencies injected.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(parts: SystemParts) -> Self {
        let SystemParts {
            catalog,
            coupon_sources,
            quorum,
            ids,
            channel_capacity,
            request_timeout,
        } = parts;

        info!(
            sources = coupon_sources.len(),
            ?quorum,
            "Starting order system"
        );

        // 1. Create the actor (no dependencies yet)
        let (order_actor, order_client) = crate::order_actor::new(channel_capacity);

        // 2. Start it with the placement pipeline injected
        let placement = OrderPlacement::new(
            catalog.clone(),
            CouponValidator::new(coupon_sources, quorum),
            ids,
        );
        let handle = tokio::spawn(order_actor.run(placement));

        Self {
            order_client: order_client.with_timeout(request_timeout),
            product_client: ProductClient::new(catalog),
            handle,
        }
    }

    /// Builds the system from configuration.
    ///
    /// A catalog that cannot be loaded is logged and replaced by an empty one;
    /// orders will then fail product resolution rather than the whole process.
    pub async fn from_config(config: &AppConfig) -> Self {
        let catalog = match ProductCatalog::load(&config.products_file).await {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!(
                    path = %config.products_file.display(),
                    error = %e,
                    "Failed to load catalog, starting with no products"
                );
                ProductCatalog::default()
            }
        };

        let coupon_sources = config
            .coupon_files
            .iter()
            .map(|path| Arc::new(FileCouponSource::new(path)) as Arc<dyn CouponSource>)
            .collect();

        Self::new(SystemParts {
            catalog: Arc::new(catalog),
            coupon_sources,
            quorum: config.quorum,
            ids: Arc::new(UuidIds),
            channel_capacity: config.channel_capacity,
            request_timeout: config.request_timeout,
        })
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the clients closes the actor's mailbox; the actor finishes the
    /// requests it already accepted and exits. Clones of `order_client` held
    /// elsewhere keep it alive until they are dropped too.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.product_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
