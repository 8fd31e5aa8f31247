//! End-to-end placement tests against a running `CheckoutSystem`.

use storefront_checkout::auth::AuthOutcome;
use storefront_checkout::clients::PlaceOrderRequest;
use storefront_checkout::config::Config;
use storefront_checkout::lifecycle::CheckoutSystem;
use storefront_checkout::model::{Carrier, CustomerInfo, LineItemInput, OrderStatus};
use storefront_checkout::order_actor::OrderError;

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

fn item(product_id: &str, price: f64, qty: u32) -> LineItemInput {
    LineItemInput {
        product_id: product_id.into(),
        name: "Leather belt".into(),
        images: vec!["belt.jpg".into()],
        new_price: price,
        old_price: None,
        quantity: qty,
    }
}

fn request(items: Vec<LineItemInput>, total: f64) -> PlaceOrderRequest {
    PlaceOrderRequest {
        customer_info: customer(),
        items,
        total_amount: total,
    }
}

#[tokio::test]
async fn guest_checkout_stores_server_computed_total() {
    let system = CheckoutSystem::new(Config::default());

    let confirmation = system
        .order_client
        .place_order(
            request(vec![item("product_1", 500.0, 2), item("product_2", 150.0, 1)], 1150.0),
            AuthOutcome::Anonymous,
        )
        .await
        .unwrap();

    assert!(confirmation.order_number.starts_with("ORD-"));

    // Guest order: readable by anyone holding the exact ID.
    let order = system
        .order_client
        .get_order(&confirmation.order_id, &AuthOutcome::Anonymous)
        .await
        .unwrap();
    assert_eq!(order.order_number, confirmation.order_number);
    assert_eq!(order.customer_owner, None);
    assert_eq!(order.status, OrderStatus::Pending);
    assert!((order.total_amount - 1150.0).abs() < f64::EPSILON);
    assert_eq!(order.line_items.len(), 2);
    assert!((order.line_items[0].subtotal - 1000.0).abs() < f64::EPSILON);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn mismatched_total_is_rejected_and_nothing_is_stored() {
    let system = CheckoutSystem::new(Config::default());
    let identity = AuthOutcome::Authenticated("user_1".into());

    let err = system
        .order_client
        .place_order(
            request(vec![item("product_1", 500.0, 2), item("product_2", 150.0, 1)], 1000.0),
            identity.clone(),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::TotalMismatch { .. }));

    // No partial write: the user's order list stays empty.
    let orders = system.order_client.list_orders(&identity).await.unwrap();
    assert!(orders.is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn empty_cart_is_rejected() {
    let system = CheckoutSystem::new(Config::default());

    let err = system
        .order_client
        .place_order(request(vec![], 0.0), AuthOutcome::Anonymous)
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::Validation(_)));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn blank_customer_fields_are_rejected() {
    let system = CheckoutSystem::new(Config::default());

    let mut req = request(vec![item("product_1", 100.0, 1)], 100.0);
    req.customer_info.city = "   ".into();

    let err = system
        .order_client
        .place_order(req, AuthOutcome::Anonymous)
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::Validation(ref m) if m.contains("city")));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn zero_quantity_is_rejected() {
    let system = CheckoutSystem::new(Config::default());

    let err = system
        .order_client
        .place_order(request(vec![item("product_1", 100.0, 0)], 0.0), AuthOutcome::Anonymous)
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::Validation(_)));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn wire_shapes_match_the_json_contract() {
    let system = CheckoutSystem::new(Config::default());

    // The request body as the frontend sends it.
    let body = serde_json::json!({
        "customerInfo": {
            "firstName": "Olena",
            "lastName": "Shevchenko",
            "phone": "+380501234567",
            "email": "olena@example.com",
            "city": "Kyiv",
            "postService": "novaposhta",
            "postOffice": "Branch 12"
        },
        "items": [
            { "productId": "product_1", "name": "Leather belt", "images": ["belt.jpg"],
              "newPrice": 500.0, "oldPrice": 700.0, "quantity": 2 }
        ],
        "totalAmount": 1000.0
    });
    let req: PlaceOrderRequest = serde_json::from_value(body).unwrap();

    let confirmation = system
        .order_client
        .place_order(req, AuthOutcome::Anonymous)
        .await
        .unwrap();

    let response = serde_json::to_value(&confirmation).unwrap();
    assert!(response.get("orderNumber").is_some());
    assert!(response.get("orderId").is_some());
    assert!(response.get("message").is_some());

    system.shutdown().await.unwrap();
}
