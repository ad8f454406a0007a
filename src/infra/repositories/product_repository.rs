//! Product repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use super::entities::product;
use crate::domain::{NewProduct, Product};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Product repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Find a product by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>>;

    /// Persist a new product
    async fn create(&self, input: NewProduct) -> AppResult<Product>;

    /// All products, newest first
    async fn list_newest_first(&self) -> AppResult<Vec<Product>>;
}

/// Concrete implementation of ProductRepository backed by SeaORM
pub struct ProductStore {
    db: DatabaseConnection,
}

impl ProductStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for ProductStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        let result = product::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Product::from))
    }

    async fn create(&self, input: NewProduct) -> AppResult<Product> {
        let now = Utc::now();
        let active_model = product::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            description: Set(input.description),
            price: Set(input.price),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(Product::from(model))
    }

    async fn list_newest_first(&self) -> AppResult<Vec<Product>> {
        let models = product::Entity::find()
            .order_by_desc(product::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Product::from).collect())
    }
}
