use crate::catalog_actor::{CatalogError, ProductAction, ProductActionResult};
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Product, ProductCreate, ProductUpdate, ReviewInput};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the catalog actor.
///
/// Review and pricing mutations go through actions so the derived fields are
/// recomputed inside the entity; this client only unwraps the matching result
/// variants.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ResourceClient<Product>,
}

impl CatalogClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<String, CatalogError> {
        debug!(?params, "create_product called");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self, update))]
    pub async fn update_product(
        &self,
        product_id: String,
        update: ProductUpdate,
    ) -> Result<Product, CatalogError> {
        self.inner
            .update(product_id, update)
            .await
            .map_err(Self::map_error)
    }

    /// Adds a review and returns its ID.
    #[instrument(skip(self, review))]
    pub async fn add_review(
        &self,
        product_id: String,
        review: ReviewInput,
    ) -> Result<String, CatalogError> {
        match self
            .inner
            .perform_action(product_id, ProductAction::AddReview(review))
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::AddReview(review_id) => Ok(review_id),
            other => Err(Self::unexpected(other)),
        }
    }

    /// Rewrites a review on behalf of its author; returns the recomputed
    /// average rating.
    #[instrument(skip(self, text))]
    pub async fn edit_review(
        &self,
        product_id: String,
        review_id: String,
        requester: String,
        text: String,
        rating: u8,
    ) -> Result<f64, CatalogError> {
        match self
            .inner
            .perform_action(
                product_id,
                ProductAction::EditReview { review_id, requester, text, rating },
            )
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::EditReview(rating) => Ok(rating),
            other => Err(Self::unexpected(other)),
        }
    }

    /// Removes a review; returns the recomputed average rating.
    #[instrument(skip(self))]
    pub async fn delete_review(
        &self,
        product_id: String,
        review_id: String,
    ) -> Result<f64, CatalogError> {
        match self
            .inner
            .perform_action(product_id, ProductAction::DeleteReview { review_id })
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::DeleteReview(rating) => Ok(rating),
            other => Err(Self::unexpected(other)),
        }
    }

    /// Replaces the price pair; returns the resulting sale flag.
    #[instrument(skip(self))]
    pub async fn set_pricing(
        &self,
        product_id: String,
        new_price: f64,
        old_price: Option<f64>,
    ) -> Result<bool, CatalogError> {
        match self
            .inner
            .perform_action(product_id, ProductAction::SetPricing { new_price, old_price })
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::SetPricing(is_sale) => Ok(is_sale),
            other => Err(Self::unexpected(other)),
        }
    }

    fn unexpected(result: ProductActionResult) -> CatalogError {
        CatalogError::Store(format!("unexpected action result: {result:?}"))
    }
}

#[async_trait]
impl ActorClient<Product> for CatalogClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> CatalogError {
        match e {
            FrameworkError::NotFound(id) => CatalogError::NotFound(id),
            FrameworkError::Entity(inner) => match inner.downcast::<CatalogError>() {
                Ok(err) => *err,
                Err(other) => CatalogError::Store(other.to_string()),
            },
            other => CatalogError::Store(other.to_string()),
        }
    }
}
