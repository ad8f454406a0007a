//! Service Container - Centralized service access.
//!
//! Wires repositories, the job queue, and configuration into the
//! concrete services, and hands them out as trait objects.

use std::sync::Arc;

use super::{
    AuthService, Authenticator, OrderManager, OrderService, ProductManager, ProductService,
    UserManager, UserService,
};
use crate::config::Config;
use crate::infra::{OrderStore, ProductStore, UserStore};
use crate::jobs::JobQueue;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;

    /// Get product service
    fn products(&self) -> Arc<dyn ProductService>;

    /// Get order service
    fn orders(&self) -> Arc<dyn OrderService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    user_service: Arc<dyn UserService>,
    product_service: Arc<dyn ProductService>,
    order_service: Arc<dyn OrderService>,
}

impl Services {
    /// Create a new service container with manually injected services
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        user_service: Arc<dyn UserService>,
        product_service: Arc<dyn ProductService>,
        order_service: Arc<dyn OrderService>,
    ) -> Self {
        Self {
            auth_service,
            user_service,
            product_service,
            order_service,
        }
    }

    /// Create service container from a database connection, config,
    /// and the email queue
    pub fn from_connection(
        db: sea_orm::DatabaseConnection,
        config: Config,
        queue: Arc<dyn JobQueue>,
    ) -> Self {
        let users = Arc::new(UserStore::new(db.clone()));
        let products = Arc::new(ProductStore::new(db.clone()));
        let orders = Arc::new(OrderStore::new(db));

        let auth_service = Arc::new(Authenticator::new(users.clone(), config));
        let user_service = Arc::new(UserManager::new(users, queue));
        let product_service = Arc::new(ProductManager::new(products.clone()));
        let order_service = Arc::new(OrderManager::new(orders, products));

        Self {
            auth_service,
            user_service,
            product_service,
            order_service,
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn products(&self) -> Arc<dyn ProductService> {
        self.product_service.clone()
    }

    fn orders(&self) -> Arc<dyn OrderService> {
        self.order_service.clone()
    }
}
