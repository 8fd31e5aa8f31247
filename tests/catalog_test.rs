//! Catalog invariants through the actor: review aggregation and sale flag.

use storefront_checkout::catalog_actor::CatalogError;
use storefront_checkout::clients::actor_client::ActorClient;
use storefront_checkout::config::Config;
use storefront_checkout::lifecycle::CheckoutSystem;
use storefront_checkout::model::{Localized, ProductCreate, ProductUpdate, ReviewInput};

fn product(new_price: f64, old_price: Option<f64>) -> ProductCreate {
    ProductCreate {
        name: Localized::new("Шкіряний ремінь", "Leather belt"),
        description: Localized::new("Ручна робота", "Handmade"),
        images: vec!["belt.jpg".into()],
        new_price,
        old_price,
    }
}

fn review(user: &str, rating: u8) -> ReviewInput {
    ReviewInput {
        user_id: user.into(),
        user_name: "Olena".into(),
        text: "Чудова якість".into(),
        rating,
    }
}

#[tokio::test]
async fn rating_tracks_review_mutations() {
    let system = CheckoutSystem::new(Config::default());
    let catalog = &system.catalog_client;

    let id = catalog.create_product(product(500.0, None)).await.unwrap();

    let first = catalog.add_review(id.clone(), review("user_1", 5)).await.unwrap();
    catalog.add_review(id.clone(), review("user_2", 2)).await.unwrap();

    let stored = catalog.get(id.clone()).await.unwrap().unwrap();
    assert!((stored.rating - 3.5).abs() < f64::EPSILON);
    assert_eq!(stored.reviews.len(), 2);

    // Editing recomputes the mean.
    let rating = catalog
        .edit_review(id.clone(), first.clone(), "user_1".into(), "Добре".into(), 3)
        .await
        .unwrap();
    assert!((rating - 2.5).abs() < f64::EPSILON);

    // Only the author may edit.
    assert!(matches!(
        catalog
            .edit_review(id.clone(), first.clone(), "user_2".into(), "Ні".into(), 1)
            .await
            .unwrap_err(),
        CatalogError::Forbidden(_)
    ));

    // Deleting the last review resets the mean to zero.
    let rating = catalog.delete_review(id.clone(), first).await.unwrap();
    assert!((rating - 2.0).abs() < f64::EPSILON);
    let stored = catalog.get(id.clone()).await.unwrap().unwrap();
    catalog
        .delete_review(id.clone(), stored.reviews[0].id.clone())
        .await
        .unwrap();
    let stored = catalog.get(id.clone()).await.unwrap().unwrap();
    assert_eq!(stored.rating, 0.0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn sale_flag_follows_old_price() {
    let system = CheckoutSystem::new(Config::default());
    let catalog = &system.catalog_client;

    // Created with a prior price: on sale from the start.
    let id = catalog.create_product(product(500.0, Some(700.0))).await.unwrap();
    assert!(catalog.get(id.clone()).await.unwrap().unwrap().is_sale);

    // Clearing the prior price ends the sale.
    let on_sale = catalog.set_pricing(id.clone(), 500.0, Some(0.0)).await.unwrap();
    assert!(!on_sale);

    // And restoring one re-enables it.
    let on_sale = catalog.set_pricing(id.clone(), 450.0, Some(600.0)).await.unwrap();
    assert!(on_sale);
    let stored = catalog.get(id).await.unwrap().unwrap();
    assert!((stored.new_price - 450.0).abs() < f64::EPSILON);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn invalid_reviews_are_rejected() {
    let system = CheckoutSystem::new(Config::default());
    let catalog = &system.catalog_client;

    let id = catalog.create_product(product(500.0, None)).await.unwrap();

    let mut blank = review("user_1", 4);
    blank.text = "   ".into();
    assert!(matches!(
        catalog.add_review(id.clone(), blank).await.unwrap_err(),
        CatalogError::Validation(_)
    ));

    assert!(matches!(
        catalog.add_review(id.clone(), review("user_1", 6)).await.unwrap_err(),
        CatalogError::Validation(_)
    ));

    assert!(matches!(
        catalog
            .edit_review(id.clone(), "review_99".into(), "user_1".into(), "text".into(), 3)
            .await
            .unwrap_err(),
        CatalogError::ReviewNotFound(_)
    ));

    // Nothing slipped through.
    let stored = catalog.get(id).await.unwrap().unwrap();
    assert!(stored.reviews.is_empty());
    assert_eq!(stored.rating, 0.0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn products_can_be_updated_and_removed() {
    let system = CheckoutSystem::new(Config::default());
    let catalog = &system.catalog_client;

    let id = catalog.create_product(product(500.0, None)).await.unwrap();

    let updated = catalog
        .update_product(
            id.clone(),
            ProductUpdate {
                images: Some(vec!["belt-front.jpg".into(), "belt-back.jpg".into()]),
                new_price: Some(480.0),
                ..ProductUpdate::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.images.len(), 2);
    assert!((updated.new_price - 480.0).abs() < f64::EPSILON);

    catalog.delete(id.clone()).await.unwrap();
    assert!(catalog.get(id).await.unwrap().is_none());

    system.shutdown().await.unwrap();
}
