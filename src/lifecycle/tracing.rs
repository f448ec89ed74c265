//! # Observability & Tracing
//!
//! Structured logging for the order pipeline.
//!
//! ## Overview
//!
//! [`setup_tracing`] installs a `tracing_subscriber` formatter. Every order runs
//! inside a `place_order` span, and each coupon check runs inside a `verify_coupon`
//! span nested under it, so one request's log lines read as a tree.
//!
//! ## Configuration
//!
//! Uses a compact format that hides the module prefix (`with_target(false)`).
//!
//! ```bash
//! RUST_LOG=info cargo run -- order.json
//! RUST_LOG=order_pipeline=debug cargo run -- order.json
//! ```
//!
//! ## Log Levels
//!
//! - `info`: orders placed, catalog loaded, actor lifecycle
//! - `debug`: full request payloads, per-source coupon verdicts
//! - `warn`: rejected orders, unreadable coupon sources

/// Initializes the global tracing subscriber.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
}
