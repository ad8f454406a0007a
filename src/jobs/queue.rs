//! Job queue abstraction.
//!
//! Services enqueue email jobs through the `JobQueue` trait; the
//! concrete queue stores them in PostgreSQL (apalis) for the worker
//! process to deliver.

use apalis::prelude::Storage;
use apalis_sql::postgres::PostgresStorage;
use async_trait::async_trait;

use super::email_job::EmailJob;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Queue trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait JobQueue: Send + Sync {
    /// Enqueue an email for asynchronous delivery
    async fn enqueue(&self, job: EmailJob) -> AppResult<()>;
}

/// Email queue backed by apalis PostgreSQL storage
pub struct EmailQueue {
    storage: PostgresStorage<EmailJob>,
}

impl EmailQueue {
    /// Create a queue around an initialized storage
    pub fn new(storage: PostgresStorage<EmailJob>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl JobQueue for EmailQueue {
    async fn enqueue(&self, job: EmailJob) -> AppResult<()> {
        // Storage handles are cheap clones around the pool
        let mut storage = self.storage.clone();
        storage
            .push(job)
            .await
            .map_err(|e| AppError::internal(format!("Failed to enqueue email job: {}", e)))?;
        Ok(())
    }
}
