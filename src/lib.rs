//! Storefront API - users, products and orders behind a uniform envelope
//!
//! A small CRUD JSON API with bearer-token authentication and
//! role-based edit visibility on the user listing. Every response,
//! success or failure, uses the `{success, message, data?, errors?}`
//! envelope.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities, the password value object,
//!   and the edit-visibility policy
//! - **services**: Application use cases and business logic
//! - **infra**: Infrastructure concerns (database, repositories)
//! - **jobs**: Email notification queue and delivery
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: The response envelope
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Start the email worker
//! cargo run -- jobs work
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod jobs;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Password, Principal, Role, User};
pub use errors::{AppError, AppResult};
