//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and repositories
//! - Migration management

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{
    OrderRepository, OrderStore, ProductRepository, ProductStore, UserRepository, UserStore,
};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockOrderRepository, MockProductRepository, MockUserRepository};
