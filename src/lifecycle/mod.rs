//! System orchestration: actor startup, dependency wiring, and shutdown.

pub mod checkout_system;
pub mod tracing;

pub use checkout_system::CheckoutSystem;
pub use tracing::setup_tracing;
