//! Entity trait implementation for the Order domain type.
//!
//! This is the placement core. Pure validation and the total recomputation
//! happen synchronously in `from_create_params`, so a rejected order never
//! reaches the store; the order number is claimed in `on_create`, where the
//! injected [`OrderContext`] is available.

use crate::framework::ActorEntity;
use crate::model::{
    now_millis, recompute_total, Order, OrderCreate, OrderFilter, OrderStatus, OrderUpdate,
    TOTAL_TOLERANCE,
};
use crate::order_actor::{OrderError, OrderNumberGenerator};
use async_trait::async_trait;

/// Dependencies injected into the order actor at `run()` time.
pub struct OrderContext {
    pub numbers: OrderNumberGenerator,
}

#[async_trait]
impl ActorEntity for Order {
    type Id = String;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = ();
    type ActionResult = ();
    type Filter = OrderFilter;
    type Context = OrderContext;
    type Error = OrderError;

    /// Validates the submitted cart and contact form, recomputes the total
    /// server-side, and rejects any claimed total off by more than the
    /// monetary tolerance. The stored `total_amount` is always the
    /// server-computed sum.
    fn from_create_params(id: String, params: OrderCreate) -> Result<Self, OrderError> {
        let customer_info = params
            .customer_info
            .normalized()
            .map_err(OrderError::Validation)?;

        if params.items.is_empty() {
            return Err(OrderError::Validation(
                "order must contain at least one item".into(),
            ));
        }
        for item in &params.items {
            item.validate().map_err(OrderError::Validation)?;
        }

        let computed = recompute_total(&params.items);
        if (computed - params.claimed_total).abs() > TOTAL_TOLERANCE {
            return Err(OrderError::TotalMismatch {
                claimed: params.claimed_total,
                computed,
            });
        }

        let now = now_millis();
        Ok(Self {
            id,
            // Assigned in on_create once the number generator is in reach.
            order_number: String::new(),
            customer_owner: params.customer_owner,
            customer_info,
            line_items: params
                .items
                .into_iter()
                .map(|item| item.into_line_item())
                .collect(),
            total_amount: computed,
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: now,
        })
    }

    /// Claims a unique order number. A failure here aborts the create, so no
    /// order is ever stored without a number.
    async fn on_create(&mut self, ctx: &OrderContext) -> Result<(), OrderError> {
        self.order_number = ctx.numbers.assign()?;
        Ok(())
    }

    /// Administrative status transition.
    async fn on_update(&mut self, update: OrderUpdate, _ctx: &OrderContext) -> Result<(), OrderError> {
        self.status = update.status;
        self.touch();
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &OrderContext) -> Result<(), OrderError> {
        Ok(())
    }

    /// Owner-scoped listing: guest orders (no owner) never match.
    fn matches_filter(&self, filter: &OrderFilter) -> bool {
        self.customer_owner.as_deref() == Some(filter.owner.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Carrier, CustomerInfo, LineItemInput};

    fn customer() -> CustomerInfo {
        CustomerInfo {
            first_name: "Olena".into(),
            last_name: "Shevchenko".into(),
            phone: "+380501234567".into(),
            email: "olena@example.com".into(),
            city: "Kyiv".into(),
            post_service: Carrier::Novaposhta,
            post_office: "Branch 12".into(),
        }
    }

    fn item(price: f64, qty: u32) -> LineItemInput {
        LineItemInput {
            product_id: "product_1".into(),
            name: "Leather belt".into(),
            images: vec![],
            new_price: price,
            old_price: None,
            quantity: qty,
        }
    }

    fn create(items: Vec<LineItemInput>, claimed: f64) -> OrderCreate {
        OrderCreate {
            customer_owner: None,
            customer_info: customer(),
            items,
            claimed_total: claimed,
        }
    }

    #[test]
    fn valid_cart_stores_server_computed_total() {
        let order =
            Order::from_create_params("order_1".into(), create(vec![item(500.0, 2), item(150.0, 1)], 1150.0))
                .unwrap();
        assert!((order.total_amount - 1150.0).abs() < f64::EPSILON);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.line_items[0].subtotal, 1000.0);
    }

    #[test]
    fn mismatched_claimed_total_is_rejected() {
        let err = Order::from_create_params(
            "order_1".into(),
            create(vec![item(500.0, 2), item(150.0, 1)], 1000.0),
        )
        .unwrap_err();
        assert!(matches!(err, OrderError::TotalMismatch { .. }));
    }

    #[test]
    fn claimed_total_within_tolerance_is_accepted() {
        let order =
            Order::from_create_params("order_1".into(), create(vec![item(99.999, 1)], 100.0)).unwrap();
        // Stored value is still the server-side sum, not the claim.
        assert!((order.total_amount - 99.999).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_cart_is_a_validation_error() {
        let err = Order::from_create_params("order_1".into(), create(vec![], 0.0)).unwrap_err();
        assert!(matches!(err, OrderError::Validation(_)));
    }

    #[test]
    fn blank_customer_field_is_a_validation_error() {
        let mut params = create(vec![item(100.0, 1)], 100.0);
        params.customer_info.phone = "   ".into();
        let err = Order::from_create_params("order_1".into(), params).unwrap_err();
        assert!(matches!(err, OrderError::Validation(ref m) if m.contains("phone")));
    }

    #[test]
    fn filter_matches_only_the_owning_account() {
        let mut params = create(vec![item(100.0, 1)], 100.0);
        params.customer_owner = Some("user_1".into());
        let order = Order::from_create_params("order_1".into(), params).unwrap();

        assert!(order.matches_filter(&OrderFilter::owned_by("user_1")));
        assert!(!order.matches_filter(&OrderFilter::owned_by("user_2")));

        let guest = Order::from_create_params("order_2".into(), create(vec![item(1.0, 1)], 1.0)).unwrap();
        assert!(!guest.matches_filter(&OrderFilter::owned_by("user_1")));
    }
}
