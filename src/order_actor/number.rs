//! Unique order-number generation.
//!
//! Deriving order numbers from a store count taken at save time races under
//! concurrent writers. Here the sequence is an
//! `AtomicU64` and every issued number is recorded in a shared set that acts
//! as the store-level uniqueness constraint. A conflicting candidate is
//! regenerated once; a second conflict surfaces as the retryable
//! [`OrderError::DuplicateOrderNumber`].

use crate::model::now_millis;
use crate::order_actor::OrderError;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Issues human-facing order numbers of the form `{prefix}-{epoch_millis}-{seq:04}`.
///
/// Clones share the sequence and the issued set, so any number of holders see
/// one uniqueness domain.
#[derive(Clone)]
pub struct OrderNumberGenerator {
    prefix: String,
    clock: Arc<dyn Fn() -> u64 + Send + Sync>,
    seq: Arc<AtomicU64>,
    issued: Arc<Mutex<HashSet<String>>>,
}

impl std::fmt::Debug for OrderNumberGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderNumberGenerator")
            .field("prefix", &self.prefix)
            .field("seq", &self.seq.load(Ordering::SeqCst))
            .finish()
    }
}

impl OrderNumberGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::with_clock(prefix, now_millis)
    }

    /// Injectable clock, mirroring how actors take an injected ID function.
    pub fn with_clock(prefix: impl Into<String>, clock: impl Fn() -> u64 + Send + Sync + 'static) -> Self {
        Self {
            prefix: prefix.into(),
            clock: Arc::new(clock),
            seq: Arc::new(AtomicU64::new(1)),
            issued: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    fn next_candidate(&self) -> String {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst);
        format!("{}-{}-{:04}", self.prefix, (self.clock)(), seq)
    }

    /// Records `number` as issued. Returns `false` if it was already taken.
    pub fn claim(&self, number: &str) -> bool {
        self.issued
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(number.to_string())
    }

    /// Generates and claims a unique order number, regenerating once on
    /// conflict. The atomic sequence makes conflicts unreachable in normal
    /// operation; the claim set is the enforced guarantee.
    pub fn assign(&self) -> Result<String, OrderError> {
        let candidate = self.next_candidate();
        if self.claim(&candidate) {
            return Ok(candidate);
        }
        let retry = self.next_candidate();
        if self.claim(&retry) {
            Ok(retry)
        } else {
            Err(OrderError::DuplicateOrderNumber(retry))
        }
    }
}
