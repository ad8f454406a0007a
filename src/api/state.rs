//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::infra::Database;
use crate::jobs::JobQueue;
use crate::services::{
    AuthService, OrderService, ProductService, ServiceContainer, Services, UserService,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Product service
    pub product_service: Arc<dyn ProductService>,
    /// Order service
    pub order_service: Arc<dyn OrderService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from the database connection, the
    /// email queue, and config.
    pub fn from_config(
        database: Arc<Database>,
        queue: Arc<dyn JobQueue>,
        config: crate::config::Config,
    ) -> Self {
        let container = Services::from_connection(database.get_connection(), config, queue);

        Self {
            auth_service: container.auth(),
            user_service: container.users(),
            product_service: container.products(),
            order_service: container.orders(),
            database,
        }
    }

    /// Create new application state with manually injected services.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        user_service: Arc<dyn UserService>,
        product_service: Arc<dyn ProductService>,
        order_service: Arc<dyn OrderService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            auth_service,
            user_service,
            product_service,
            order_service,
            database,
        }
    }
}
