//! Error types for the catalog actor.

use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// The referenced review does not exist on this product.
    #[error("Review not found: {0}")]
    ReviewNotFound(String),

    /// The product or review data provided is invalid.
    #[error("Invalid catalog data: {0}")]
    Validation(String),

    /// The review belongs to a different account.
    #[error("No access to review {0}")]
    Forbidden(String),

    /// Unexpected store or actor-transport failure.
    #[error("Catalog store error: {0}")]
    Store(String),
}

impl From<String> for CatalogError {
    fn from(msg: String) -> Self {
        CatalogError::Store(msg)
    }
}
