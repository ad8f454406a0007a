//! Background jobs - Email notification queue and delivery.

mod email_job;
pub mod notifications;
mod queue;

pub use email_job::{email_job_handler, EmailJob};
pub use queue::{EmailQueue, JobQueue};

#[cfg(any(test, feature = "test-utils"))]
pub use queue::MockJobQueue;
