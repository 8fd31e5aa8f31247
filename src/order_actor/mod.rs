//! Order placement: entity implementation, error taxonomy, and number generation.

pub mod entity;
pub mod error;
pub mod number;

pub use entity::OrderContext;
pub use error::*;
pub use number::OrderNumberGenerator;

use crate::clients::{CatalogClient, OrderClient};
use crate::framework::ResourceActor;
use crate::model::Order;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Creates a new order actor and its client. The catalog client is used by
/// the order client for read-enrichment of listed orders.
pub fn new(buffer_size: usize, catalog_client: CatalogClient) -> (ResourceActor<Order>, OrderClient) {
    let order_id_counter = Arc::new(AtomicU64::new(1));
    let next_order_id = move || {
        let id = order_id_counter.fetch_add(1, Ordering::SeqCst);
        format!("order_{}", id)
    };

    let (actor, generic_client) = ResourceActor::new(buffer_size, next_order_id);
    let client = OrderClient::new(generic_client, catalog_client);

    (actor, client)
}
