//! # Order Pipeline
//!
//! > **Concurrent order placement with quorum coupon checks.**
//!
//! An order request names some products and optionally a promotional code. Placing
//! it runs two checks at the same time:
//!
//! - the code is looked up in several independent coupon lists and must appear in
//!   enough of them (by default a strict majority)
//! - every line item is resolved against the product catalog
//!
//! The first failure wins and cancels everything still running for that request.
//!
//! ## 🏗️ Design
//!
//! ### Structured cancellation
//! Every request owns a [`CancellationToken`](tokio_util::sync::CancellationToken).
//! Each stage derives a child token and holds a drop guard on it, so whichever way
//! a stage ends (success, failure, or the caller going away) the work it started
//! is told to stop.
//!
//! ### Actor front-end
//! Orders enter through an [`OrderClient`](clients::OrderClient), which sends a
//! message to the [`OrderActor`](order_actor::OrderActor). The actor runs each
//! request in its own task and replies on a one-shot channel, so requests never
//! wait on one another.
//!
//! ### Late binding
//! The actor is created empty and receives its [`OrderPlacement`](order_actor::OrderPlacement)
//! when `run()` is called; see [`lifecycle::OrderSystem`].
//!
//! ## 🗺️ Module Tour
//!
//! - **[`model`]**: [`Product`](model::Product), [`OrderRequest`](model::OrderRequest), [`Order`](model::Order)
//! - **[`catalog`]**: read-only product snapshot behind the [`ProductLookup`](catalog::ProductLookup) trait
//! - **[`coupon`]**: per-source verifiers and the quorum coordinator
//! - **[`order_actor`]**: item resolution, the placement join, and the actor
//! - **[`clients`]**: typed handles for placing orders and querying products
//! - **[`lifecycle`]**: configuration, wiring, shutdown, tracing
//!
//! ## 🧪 Testing
//!
//! See [`order_actor::mock`] for testing client code without spawning an actor,
//! and [`coupon::StaticCouponSource`] for in-memory coupon lists.

pub mod catalog;
pub mod clients;
pub mod coupon;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
