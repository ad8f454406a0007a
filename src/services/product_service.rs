//! Product service - Handles product-related business logic.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{NewProduct, Product};
use crate::errors::AppResult;
use crate::infra::ProductRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Product service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Create a product
    async fn create_product(&self, input: NewProduct) -> AppResult<Product>;

    /// All products, newest first
    async fn list_products(&self) -> AppResult<Vec<Product>>;
}

/// Concrete implementation of ProductService.
pub struct ProductManager {
    products: Arc<dyn ProductRepository>,
}

impl ProductManager {
    /// Create new product service instance
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl ProductService for ProductManager {
    async fn create_product(&self, input: NewProduct) -> AppResult<Product> {
        self.products.create(input).await
    }

    async fn list_products(&self) -> AppResult<Vec<Product>> {
        self.products.list_newest_first().await
    }
}
