//! Order-number uniqueness under concurrent placements.
//!
//! A number scheme based on a store count read at save time collides under
//! concurrency. Here the actor mailbox serializes placements and the
//! generator's sequence is atomic, so this stress test must always observe
//! distinct numbers.

use std::collections::HashSet;

use storefront_checkout::auth::AuthOutcome;
use storefront_checkout::clients::PlaceOrderRequest;
use storefront_checkout::config::Config;
use storefront_checkout::lifecycle::CheckoutSystem;
use storefront_checkout::model::{Carrier, CustomerInfo, LineItemInput};

fn request() -> PlaceOrderRequest {
    PlaceOrderRequest {
        customer_info: CustomerInfo {
            first_name: "Iryna".into(),
            last_name: "Bondar".into(),
            phone: "+380931234567".into(),
            email: "iryna@example.com".into(),
            city: "Odesa".into(),
            post_service: Carrier::Novaposhta,
            post_office: "Branch 1".into(),
        },
        items: vec![LineItemInput {
            product_id: "product_1".into(),
            name: "Canvas tote".into(),
            images: vec![],
            new_price: 120.0,
            old_price: None,
            quantity: 1,
        }],
        total_amount: 120.0,
    }
}

#[tokio::test]
async fn concurrent_placements_yield_unique_order_numbers() {
    let system = CheckoutSystem::new(Config::default());

    let mut tasks = Vec::new();
    for _ in 0..24 {
        let client = system.order_client.clone();
        tasks.push(tokio::spawn(async move {
            client.place_order(request(), AuthOutcome::Anonymous).await
        }));
    }

    let mut numbers = HashSet::new();
    for task in tasks {
        let confirmation = task.await.unwrap().unwrap();
        assert!(confirmation.order_number.starts_with("ORD-"));
        assert!(
            numbers.insert(confirmation.order_number.clone()),
            "duplicate order number: {}",
            confirmation.order_number
        );
    }
    assert_eq!(numbers.len(), 24);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn order_numbers_honor_the_configured_prefix() {
    let system = CheckoutSystem::new(Config {
        order_number_prefix: "SHOP".into(),
        ..Config::default()
    });

    let confirmation = system
        .order_client
        .place_order(request(), AuthOutcome::Anonymous)
        .await
        .unwrap();
    assert!(confirmation.order_number.starts_with("SHOP-"));

    system.shutdown().await.unwrap();
}
