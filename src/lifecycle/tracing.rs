//! # Observability & Tracing
//!
//! Structured logging for the whole checkout system, built on the `tracing`
//! crate.
//!
//! ## Configuration
//!
//! The compact format hides the crate/module prefix (`with_target(false)`);
//! the actor loop records an `entity_type` field instead, which keeps log
//! lines short while preserving structure. Levels come from `RUST_LOG`.
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo test
//!
//! # Full payloads at function entry points
//! RUST_LOG=debug cargo test
//!
//! # Filter to the placement path only
//! RUST_LOG=storefront_checkout::clients=debug cargo test
//! ```
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: startup, shutdown, final store size
//! - **Entity operations**: Create, Get, Query, Update, Delete, Actions
//! - **Placement flow**: `place_order` spans with the full request at `debug`
//! - **Errors**: entity IDs and failure reasons on every rejection
//!
//! A typical placement at `RUST_LOG=info`:
//!
//! ```text
//! INFO Sending place_order to actor
//! INFO Created order_id="order_1" size=1
//! ```
//!
//! and at `debug`, the request payload is logged once at entry:
//!
//! ```text
//! DEBUG place_order called request=PlaceOrderRequest { .. }
//! DEBUG Create params=OrderCreate { .. }
//! INFO Created order_id="order_1" size=1
//! ```

/// Initializes the global tracing subscriber. Call once at process start.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Entity type is logged as a field instead
        .compact()
        .init();
}
