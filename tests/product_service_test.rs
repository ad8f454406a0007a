//! Product service tests.

mod common;

use std::sync::Arc;

use chrono::{Duration, Utc};
use storefront_api::domain::{NewProduct, Product};
use storefront_api::services::{ProductManager, ProductService};
use uuid::Uuid;

use common::InMemoryProductRepo;

fn product_created_at(name: &str, hours_ago: i64) -> Product {
    let at = Utc::now() - Duration::hours(hours_ago);
    Product {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: None,
        price: 1.0,
        created_at: at,
        updated_at: at,
    }
}

#[tokio::test]
async fn create_product_returns_the_persisted_fields() {
    let service = ProductManager::new(Arc::new(InMemoryProductRepo::new()));

    let product = service
        .create_product(NewProduct {
            name: "Espresso machine".to_string(),
            description: Some("A description".to_string()),
            price: 19.99,
        })
        .await
        .unwrap();

    assert_eq!(product.name, "Espresso machine");
    assert_eq!(product.description.as_deref(), Some("A description"));
    assert_eq!(product.price, 19.99);
}

#[tokio::test]
async fn products_are_listed_newest_first() {
    let repo = Arc::new(InMemoryProductRepo::seeded(vec![
        product_created_at("Oldest", 3),
        product_created_at("Newest", 1),
        product_created_at("Middle", 2),
    ]));
    let service = ProductManager::new(repo);

    let products = service.list_products().await.unwrap();

    let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Newest", "Middle", "Oldest"]);
    assert!(products.windows(2).all(|w| w[0].created_at >= w[1].created_at));
}
