//! Catalog product model and the pricing/review invariants.
//!
//! `is_sale` and `rating` are derived fields. Rather than maintaining them in
//! store-level hooks, they are plain functions ([`sale_flag`],
//! [`average_rating`]) applied explicitly by [`Product::enforce_invariants`]
//! before any state is persisted, so they are unit-testable without a store.

use crate::model::now_millis;
use serde::{Deserialize, Serialize};

/// A string carried in both storefront languages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized {
    pub uk: String,
    pub en: String,
}

impl Localized {
    pub fn new(uk: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            uk: uk.into(),
            en: en.into(),
        }
    }
}

/// A customer review attached to a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub text: String,
    /// 1 through 5.
    pub rating: u8,
    pub created_at: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<u64>,
}

/// Review payload as submitted by a customer.
#[derive(Debug, Clone)]
pub struct ReviewInput {
    pub user_id: String,
    pub user_name: String,
    pub text: String,
    pub rating: u8,
}

impl ReviewInput {
    /// Blank text and out-of-range ratings are rejected; text is stored trimmed.
    pub fn validate(&self) -> Result<(), String> {
        if self.user_id.trim().is_empty() || self.user_name.trim().is_empty() {
            return Err("review author is required".into());
        }
        if self.text.trim().is_empty() {
            return Err("review text cannot be empty".into());
        }
        if !(1..=5).contains(&self.rating) {
            return Err(format!("review rating {} is outside 1-5", self.rating));
        }
        Ok(())
    }
}

/// `true` when a prior price exists and is positive; presence of a real
/// `old_price` is what puts a product on sale.
pub fn sale_flag(old_price: Option<f64>) -> bool {
    matches!(old_price, Some(p) if p > 0.0)
}

/// Mean of all review ratings, or 0 when no reviews remain.
pub fn average_rating(reviews: &[Review]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    let sum: f64 = reviews.iter().map(|r| f64::from(r.rating)).sum();
    sum / reviews.len() as f64
}

/// A catalog product. `rating` and `is_sale` are derived fields; they are
/// recomputed through [`Product::enforce_invariants`] on every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: Localized,
    #[serde(default)]
    pub description: Localized,
    #[serde(default)]
    pub images: Vec<String>,
    pub new_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_price: Option<f64>,
    pub is_sale: bool,
    pub rating: f64,
    pub reviews: Vec<Review>,
    /// Monotonic per-product counter backing review IDs; survives deletes so
    /// IDs are never reused.
    pub(crate) review_seq: u64,
}

/// Payload for adding a product to the catalog.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: Localized,
    pub description: Localized,
    pub images: Vec<String>,
    pub new_price: f64,
    pub old_price: Option<f64>,
}

/// Partial update of product content and pricing.
#[derive(Debug, Clone, Default)]
pub struct ProductUpdate {
    pub name: Option<Localized>,
    pub description: Option<Localized>,
    pub images: Option<Vec<String>>,
    pub new_price: Option<f64>,
    /// `Some(0.0)` (or any non-positive value) clears the sale.
    pub old_price: Option<f64>,
}

impl Product {
    pub fn new(id: String, params: ProductCreate) -> Self {
        let mut product = Self {
            id,
            name: params.name,
            description: params.description,
            images: params.images,
            new_price: params.new_price,
            old_price: params.old_price,
            is_sale: false,
            rating: 0.0,
            reviews: Vec::new(),
            review_seq: 0,
        };
        product.enforce_invariants();
        product
    }

    /// Recomputes the derived fields from current state. Callers mutate
    /// `old_price` or `reviews` and then call this before the state is stored.
    pub fn enforce_invariants(&mut self) {
        self.is_sale = sale_flag(self.old_price);
        self.rating = average_rating(&self.reviews);
    }

    /// Appends a validated review and returns its ID.
    pub fn push_review(&mut self, input: ReviewInput) -> Result<String, String> {
        input.validate()?;
        self.review_seq += 1;
        let id = format!("review_{}", self.review_seq);
        self.reviews.push(Review {
            id: id.clone(),
            user_id: input.user_id.trim().to_string(),
            user_name: input.user_name.trim().to_string(),
            text: input.text.trim().to_string(),
            rating: input.rating,
            created_at: now_millis(),
            updated_at: None,
        });
        self.enforce_invariants();
        Ok(id)
    }
}
