//! Order service - Handles order-related business logic.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::Order;
use crate::errors::{AppError, AppResult};
use crate::infra::{OrderRepository, ProductRepository};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Order service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Create an order owned by `user_id`, optionally for a product
    async fn create_order(&self, user_id: Uuid, product_id: Option<Uuid>) -> AppResult<Order>;
}

/// Concrete implementation of OrderService.
pub struct OrderManager {
    orders: Arc<dyn OrderRepository>,
    products: Arc<dyn ProductRepository>,
}

impl OrderManager {
    /// Create new order service instance
    pub fn new(orders: Arc<dyn OrderRepository>, products: Arc<dyn ProductRepository>) -> Self {
        Self { orders, products }
    }
}

#[async_trait]
impl OrderService for OrderManager {
    async fn create_order(&self, user_id: Uuid, product_id: Option<Uuid>) -> AppResult<Order> {
        // A referenced product must exist; the order itself is free-form
        if let Some(pid) = product_id {
            if self.products.find_by_id(pid).await?.is_none() {
                return Err(AppError::validation_field(
                    "product_id",
                    "The selected product id is invalid.",
                ));
            }
        }

        self.orders.create(user_id, product_id).await
    }
}
