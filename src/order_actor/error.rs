//! Error types for the order actor and its client.

use thiserror::Error;

/// Errors that can occur while placing or reading orders.
///
/// The messages deliberately separate the three answers a caller needs:
/// "your input was invalid" (`Validation`, `TotalMismatch`), "please try
/// again" (`DuplicateOrderNumber`), and "something unexpected happened"
/// (`Store`).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// A required field was missing or malformed.
    #[error("Invalid order data: {0}")]
    Validation(String),

    /// The client-claimed total disagrees with the server-computed sum beyond
    /// the monetary tolerance. Signals tampering or a stale cart.
    #[error("Order total mismatch: client claimed {claimed:.2}, server computed {computed:.2}")]
    TotalMismatch { claimed: f64, computed: f64 },

    /// Order-number uniqueness collision after regeneration. Retryable.
    #[error("Order number {0} already issued, please retry")]
    DuplicateOrderNumber(String),

    /// The requested order does not exist.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The order belongs to a different account.
    #[error("No access to order {0}")]
    Forbidden(String),

    /// The operation requires an authenticated identity.
    #[error("Authentication required")]
    Unauthorized,

    /// Unexpected store or actor-transport failure. The service performs no
    /// automatic retry; resubmission is left to the caller.
    #[error("Order store error: {0}")]
    Store(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::Store(msg)
    }
}
