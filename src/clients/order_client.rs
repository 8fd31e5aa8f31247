use crate::auth::AuthOutcome;
use crate::clients::actor_client::ActorClient;
use crate::clients::CatalogClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{CustomerInfo, LineItemInput, Order, OrderCreate, OrderFilter, OrderStatus, OrderUpdate};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Checkout request as it arrives on the wire: the contact form, the cart,
/// and the client's own idea of the total (a consistency check, never stored).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    pub customer_info: CustomerInfo,
    pub items: Vec<LineItemInput>,
    pub total_amount: f64,
}

/// Confirmation returned for a placed order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderResponse {
    pub message: String,
    pub order_number: String,
    pub order_id: String,
}

/// Client for interacting with the order actor.
///
/// Validation and total recomputation happen in the actor's create path; this
/// client owns identity handling and access control, and uses the catalog
/// client to refresh product snapshots when listing.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    catalog: CatalogClient,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>, catalog: CatalogClient) -> Self {
        Self { inner, catalog }
    }

    /// Places an order. This is the one operation with lenient identity: an
    /// `Invalid` token degrades to guest checkout instead of failing.
    #[instrument(skip(self, request))]
    pub async fn place_order(
        &self,
        request: PlaceOrderRequest,
        identity: AuthOutcome,
    ) -> Result<PlaceOrderResponse, OrderError> {
        debug!(?request, "place_order called");
        info!("Sending place_order to actor");

        let identity = identity.lenient();
        let params = OrderCreate {
            customer_owner: identity.user_id().map(String::from),
            customer_info: request.customer_info,
            items: request.items,
            claimed_total: request.total_amount,
        };

        let order_id = self.inner.create(params).await.map_err(Self::map_error)?;
        let order = self
            .inner
            .get(order_id.clone())
            .await
            .map_err(Self::map_error)?
            .ok_or_else(|| OrderError::Store(format!("order {order_id} missing after create")))?;

        Ok(PlaceOrderResponse {
            message: "Order created successfully".into(),
            order_number: order.order_number,
            order_id,
        })
    }

    /// Fetches one order, enforcing ownership.
    ///
    /// Guest orders are readable by anyone holding the exact ID (capability by
    /// possession). Owned orders require the owning identity; a verified
    /// non-owner gets `Forbidden`. A presented but unverifiable token is
    /// `Unauthorized` here — the lenient fallback applies to placement only.
    #[instrument(skip(self, identity))]
    pub async fn get_order(
        &self,
        order_id: &str,
        identity: &AuthOutcome,
    ) -> Result<Order, OrderError> {
        if *identity == AuthOutcome::Invalid {
            return Err(OrderError::Unauthorized);
        }

        let order = self
            .inner
            .get(order_id.to_string())
            .await
            .map_err(Self::map_error)?
            .ok_or_else(|| OrderError::NotFound(order_id.to_string()))?;

        match (&order.customer_owner, identity) {
            (None, _) => Ok(order),
            (Some(owner), AuthOutcome::Authenticated(user)) if owner == user => Ok(order),
            (Some(_), _) => Err(OrderError::Forbidden(order_id.to_string())),
        }
    }

    /// Lists the caller's orders, newest first, with product snapshots
    /// refreshed against the catalog.
    #[instrument(skip(self, identity))]
    pub async fn list_orders(&self, identity: &AuthOutcome) -> Result<Vec<Order>, OrderError> {
        let AuthOutcome::Authenticated(user) = identity else {
            return Err(OrderError::Unauthorized);
        };

        let mut orders = self
            .inner
            .query(OrderFilter::owned_by(user.clone()))
            .await
            .map_err(Self::map_error)?;

        orders.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| id_sequence(&b.id).cmp(&id_sequence(&a.id)))
        });

        for order in &mut orders {
            self.refresh_snapshots(order).await;
        }
        Ok(orders)
    }

    /// Administrative status transition; not part of the placement path.
    #[instrument(skip(self))]
    pub async fn set_status(
        &self,
        order_id: &str,
        status: OrderStatus,
    ) -> Result<Order, OrderError> {
        self.inner
            .update(order_id.to_string(), OrderUpdate { status })
            .await
            .map_err(Self::map_error)
    }

    /// Read-enrichment: pull current product images into the line-item
    /// snapshots. Products that have since disappeared keep their snapshot.
    async fn refresh_snapshots(&self, order: &mut Order) {
        for item in &mut order.line_items {
            match self.catalog.get(item.product_id.clone()).await {
                Ok(Some(product)) => {
                    item.images = product.images;
                }
                Ok(None) => {
                    debug!(product_id = %item.product_id, "product gone, keeping snapshot");
                }
                Err(e) => {
                    debug!(product_id = %item.product_id, error = %e, "catalog lookup failed");
                }
            }
        }
    }
}

/// Numeric suffix of an `order_{n}` ID, used as a deterministic tie-break
/// when two orders share a creation timestamp.
fn id_sequence(id: &str) -> u64 {
    id.rsplit('_')
        .next()
        .and_then(|suffix| suffix.parse().ok())
        .unwrap_or(0)
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> OrderError {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            FrameworkError::Entity(inner) => match inner.downcast::<OrderError>() {
                Ok(err) => *err,
                Err(other) => OrderError::Store(other.to_string()),
            },
            other => OrderError::Store(other.to_string()),
        }
    }
}
