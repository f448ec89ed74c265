//! # System Lifecycle
//!
//! Starting, wiring, and stopping the order pipeline.
//!
//! **Key Responsibilities:**
//! 1. **Configuration** - [`AppConfig`] from the environment (and `.env`)
//! 2. **Dependency Injection** - [`OrderSystem`] hands the catalog, coupon sources
//!    and id source to the order actor through `run()`
//! 3. **Graceful Shutdown** - [`OrderSystem::shutdown`] closes the mailbox and
//!    waits for in-flight orders
//! 4. **Observability Setup** - [`setup_tracing`]
//!
//! ```rust,ignore
//! setup_tracing();
//! let config = AppConfig::from_env()?;
//! let system = OrderSystem::from_config(&config).await;
//! // ...
//! system.shutdown().await?;
//! ```

pub mod config;
pub mod order_system;
pub mod tracing;

pub use config::{AppConfig, ConfigError};
pub use order_system::{OrderSystem, SystemParts};
pub use self::tracing::setup_tracing;
