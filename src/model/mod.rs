//! Pure data structures implementing the [`ActorEntity`](crate::framework::ActorEntity) trait.

pub mod customer;
pub mod order;
pub mod product;

pub use customer::*;
pub use order::*;
pub use product::*;

use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds since the Unix epoch. Falls back to 0 on a pre-epoch clock
/// rather than panicking.
pub(crate) fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
