//! Entity trait implementation for the Product domain type.
//!
//! Every mutation path funnels through [`Product::enforce_invariants`], so the
//! derived `rating` and `is_sale` fields are always consistent with `reviews`
//! and `old_price` by the time the state is stored.

use crate::catalog_actor::{CatalogError, ProductAction, ProductActionResult};
use crate::framework::ActorEntity;
use crate::model::{now_millis, Product, ProductCreate, ProductUpdate};
use async_trait::async_trait;

fn check_price(price: f64) -> Result<(), CatalogError> {
    if !price.is_finite() || price < 0.0 {
        return Err(CatalogError::Validation("price must be a non-negative number".into()));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Product {
    type Id = String;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Filter = ();
    type Context = ();
    type Error = CatalogError;

    fn from_create_params(id: String, params: ProductCreate) -> Result<Self, CatalogError> {
        if params.name.uk.trim().is_empty() || params.name.en.trim().is_empty() {
            return Err(CatalogError::Validation(
                "product name is required in both languages".into(),
            ));
        }
        check_price(params.new_price)?;
        Ok(Product::new(id, params))
    }

    /// Partial content/pricing update; derived fields are recomputed after.
    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), CatalogError> {
        if let Some(price) = update.new_price {
            check_price(price)?;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(images) = update.images {
            self.images = images;
        }
        if let Some(price) = update.new_price {
            self.new_price = price;
        }
        if let Some(old_price) = update.old_price {
            self.old_price = Some(old_price);
        }
        self.enforce_invariants();
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &(),
    ) -> Result<ProductActionResult, CatalogError> {
        match action {
            ProductAction::AddReview(input) => {
                let review_id = self.push_review(input).map_err(CatalogError::Validation)?;
                Ok(ProductActionResult::AddReview(review_id))
            }
            ProductAction::EditReview { review_id, requester, text, rating } => {
                if text.trim().is_empty() {
                    return Err(CatalogError::Validation("review text cannot be empty".into()));
                }
                if !(1..=5).contains(&rating) {
                    return Err(CatalogError::Validation(format!(
                        "review rating {rating} is outside 1-5"
                    )));
                }
                let review = self
                    .reviews
                    .iter_mut()
                    .find(|r| r.id == review_id)
                    .ok_or_else(|| CatalogError::ReviewNotFound(review_id.clone()))?;
                if review.user_id != requester {
                    return Err(CatalogError::Forbidden(review_id));
                }
                review.text = text.trim().to_string();
                review.rating = rating;
                review.updated_at = Some(now_millis());
                self.enforce_invariants();
                Ok(ProductActionResult::EditReview(self.rating))
            }
            ProductAction::DeleteReview { review_id } => {
                let index = self
                    .reviews
                    .iter()
                    .position(|r| r.id == review_id)
                    .ok_or(CatalogError::ReviewNotFound(review_id))?;
                self.reviews.remove(index);
                self.enforce_invariants();
                Ok(ProductActionResult::DeleteReview(self.rating))
            }
            ProductAction::SetPricing { new_price, old_price } => {
                check_price(new_price)?;
                self.new_price = new_price;
                self.old_price = old_price;
                self.enforce_invariants();
                Ok(ProductActionResult::SetPricing(self.is_sale))
            }
        }
    }
}
