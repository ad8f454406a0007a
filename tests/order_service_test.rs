//! Order service tests.

mod common;

use std::sync::Arc;

use storefront_api::domain::NewProduct;
use storefront_api::errors::AppError;
use storefront_api::services::{OrderManager, OrderService, ProductManager, ProductService};
use uuid::Uuid;

use common::{InMemoryOrderRepo, InMemoryProductRepo};

#[tokio::test]
async fn order_without_product_is_created_with_null_product_reference() {
    let orders = Arc::new(InMemoryOrderRepo::new());
    let products = Arc::new(InMemoryProductRepo::new());
    let service = OrderManager::new(orders.clone(), products);

    let user_id = Uuid::new_v4();
    let order = service.create_order(user_id, None).await.unwrap();

    assert_eq!(order.user_id, user_id);
    assert_eq!(order.product_id, None);

    let persisted = orders.orders();
    assert_eq!(persisted.len(), 1);
    assert_eq!(persisted[0].product_id, None);
}

#[tokio::test]
async fn order_for_an_existing_product_is_created() {
    let orders = Arc::new(InMemoryOrderRepo::new());
    let products = Arc::new(InMemoryProductRepo::new());
    let product = ProductManager::new(products.clone())
        .create_product(NewProduct {
            name: "Widget".to_string(),
            description: None,
            price: 9.99,
        })
        .await
        .unwrap();

    let service = OrderManager::new(orders.clone(), products);
    let order = service
        .create_order(Uuid::new_v4(), Some(product.id))
        .await
        .unwrap();

    assert_eq!(order.product_id, Some(product.id));
    assert_eq!(orders.order_count(), 1);
}

#[tokio::test]
async fn order_for_an_unknown_product_is_rejected_and_not_persisted() {
    let orders = Arc::new(InMemoryOrderRepo::new());
    let products = Arc::new(InMemoryProductRepo::new());
    let service = OrderManager::new(orders.clone(), products);

    let err = service
        .create_order(Uuid::new_v4(), Some(Uuid::new_v4()))
        .await
        .unwrap_err();

    match err {
        AppError::Validation { message, errors } => {
            assert_eq!(message, "The selected product id is invalid.");
            assert!(errors.contains_key("product_id"));
        }
        other => panic!("Expected validation error, got {:?}", other),
    }
    assert_eq!(orders.order_count(), 0);
}
