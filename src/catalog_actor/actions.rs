//! Custom actions for the catalog actor.
//!
//! Reviews and pricing mutate through actions rather than whole-document
//! updates so the derived fields (`rating`, `is_sale`) are recomputed in
//! exactly one place, inside the entity.

use crate::model::ReviewInput;

/// Domain-specific operations on a product beyond standard CRUD.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Appends a customer review.
    AddReview(ReviewInput),
    /// Rewrites the text and rating of an existing review. Only the review's
    /// author may edit it.
    EditReview {
        review_id: String,
        requester: String,
        text: String,
        rating: u8,
    },
    /// Removes a review.
    DeleteReview { review_id: String },
    /// Replaces the price pair; a positive `old_price` puts the product on sale.
    SetPricing {
        new_price: f64,
        old_price: Option<f64>,
    },
}

/// Results from ProductActions - variants match 1:1 with ProductAction.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    /// The ID of the newly added review.
    AddReview(String),
    /// The recomputed average rating.
    EditReview(f64),
    /// The recomputed average rating after removal.
    DeleteReview(f64),
    /// The resulting sale flag.
    SetPricing(bool),
}
