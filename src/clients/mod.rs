//! Typed handles used by the rest of the application.

pub mod order_client;
pub mod product_client;

pub use order_client::*;
pub use product_client::*;
