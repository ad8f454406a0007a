//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic conversion into the uniform response envelope.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::config::{UNAUTHENTICATED_MESSAGE, VALIDATION_FALLBACK_MESSAGE};
use crate::types::Reply;

/// Per-field validation messages, keyed by field name.
///
/// BTreeMap keeps serialization order deterministic.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication
    #[error("Unauthenticated")]
    Unauthenticated,

    // Validation
    #[error("{message}")]
    Validation {
        message: String,
        errors: FieldErrors,
    },

    // Resource errors
    #[error("Resource not found")]
    NotFound,

    // Generic HTTP-level failure with an explicit status
    #[error("{1}")]
    Http(StatusCode, String),

    // External service errors
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    #[error("Authentication error")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// Validation failure from a field→messages map.
    ///
    /// The envelope message is the first field message; when none is
    /// available a fixed fallback is substituted.
    pub fn validation(errors: FieldErrors) -> Self {
        let message = errors
            .values()
            .flatten()
            .next()
            .cloned()
            .unwrap_or_else(|| VALIDATION_FALLBACK_MESSAGE.to_string());

        AppError::Validation { message, errors }
    }

    /// Validation failure on a single field.
    pub fn validation_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let message = message.into();
        let mut errors = FieldErrors::new();
        errors.insert(field.into(), vec![message.clone()]);
        AppError::Validation { message, errors }
    }

    /// Generic HTTP-level failure.
    pub fn http(status: StatusCode, message: impl Into<String>) -> Self {
        AppError::Http(status, message.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// Get HTTP status code
    fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthenticated | AppError::Jwt(_) => StatusCode::UNAUTHORIZED,
            AppError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Http(status, _) => *status,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            AppError::Unauthenticated => UNAUTHENTICATED_MESSAGE.to_string(),
            AppError::Validation { message, .. } => {
                if message.is_empty() {
                    VALIDATION_FALLBACK_MESSAGE.to_string()
                } else {
                    message.clone()
                }
            }
            AppError::NotFound => "Resource not found.".to_string(),
            AppError::Http(_, message) => {
                if message.is_empty() {
                    "An error occurred.".to_string()
                } else {
                    message.clone()
                }
            }

            // Hide details for internal/security errors
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "An error occurred.".to_string()
            }
            AppError::Jwt(e) => {
                tracing::debug!("JWT error: {:?}", e);
                UNAUTHENTICATED_MESSAGE.to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An error occurred.".to_string()
            }
        }
    }

    /// Per-field errors carried into the envelope, if any.
    fn field_errors(&self) -> Option<FieldErrors> {
        match self {
            AppError::Validation { errors, .. } => Some(errors.clone()),
            _ => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        Reply::error(self.status(), self.user_message(), self.field_errors()).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}
