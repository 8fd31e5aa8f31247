//! # Storefront Checkout
//!
//! The order/checkout core of a bilingual e-commerce storefront, built as a
//! type-safe actor system on Tokio.
//!
//! The load-bearing piece is the **order placement flow**: a client-submitted
//! cart plus contact form is validated, the total is recomputed server-side
//! from unit prices (the client's total is only a tamper check), a unique
//! order number is claimed, and exactly one order record is stored. Guest and
//! authenticated checkout are both supported; reads are guarded by ownership.
//!
//! ## Design Philosophy
//!
//! Each resource type runs as its own actor with isolated state and standard
//! CRUD + Action operations:
//! - **Isolation**: no shared mutable state, no locks around the stores.
//! - **Serialization where it matters**: the order actor's mailbox processes
//!   placements one at a time, which closes the order-number race a
//!   count-then-format scheme would have under concurrent writers.
//! - **Type safety**: associated types on [`framework::ActorEntity`] make it
//!   impossible to send a catalog payload to the order actor.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic `ResourceActor<T>` that powers everything: message loop,
//! channels, error transport, filtered queries, and the [`framework::mock`]
//! test client.
//!
//! ### 2. The Domain ([`model`], [`order_actor`], [`catalog_actor`])
//! Pure data plus the `ActorEntity` implementations. Order validation and
//! total recomputation live in the order entity; the pricing/review
//! invariants (`is_sale`, `rating`) are pure functions on the product model,
//! applied explicitly on every mutation.
//!
//! ### 3. The Interface ([`clients`])
//! Domain-specific clients wrapping the generic `ResourceClient`:
//! [`clients::OrderClient`] (placement, ownership-guarded reads, listing with
//! catalog enrichment) and [`clients::CatalogClient`].
//!
//! ### 4. The Orchestrator ([`lifecycle`], [`config`], [`auth`])
//! [`lifecycle::CheckoutSystem`] spins up the actors and wires dependencies
//! from one explicit [`config::Config`]; [`auth`] resolves bearer tokens into
//! an explicit three-way [`auth::AuthOutcome`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use storefront_checkout::config::Config;
//! use storefront_checkout::lifecycle::CheckoutSystem;
//!
//! let system = CheckoutSystem::new(Config::from_env());
//! let confirmation = system
//!     .order_client
//!     .place_order(request, identity)
//!     .await?;
//! println!("{}", confirmation.order_number);
//! ```
//!
//! Run the tests with `cargo test`; set `RUST_LOG=debug` to see full payloads
//! (see [`lifecycle::tracing`]).

pub mod auth;
pub mod catalog_actor;
pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
