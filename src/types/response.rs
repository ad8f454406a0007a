//! Uniform API response envelope.
//!
//! Every endpoint, success or failure, answers with the same shape:
//! `{success, message, data?, errors?}`. The optional keys are omitted
//! entirely when absent, never serialized as null.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::errors::FieldErrors;

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Success envelope. The `data` key is present only when `Some`.
    pub fn success(data: Option<T>, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
            errors: None,
        }
    }
}

impl ApiResponse<()> {
    /// Failure envelope. The `errors` key is present only for a non-empty map.
    pub fn failure(message: impl Into<String>, errors: Option<FieldErrors>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            errors: errors.filter(|map| !map.is_empty()),
        }
    }
}

/// Envelope plus the HTTP status it travels with.
pub struct Reply<T: Serialize> {
    pub status: StatusCode,
    pub body: ApiResponse<T>,
}

impl<T: Serialize> Reply<T> {
    /// 200 success with data
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            body: ApiResponse::success(Some(data), message),
        }
    }

    /// 201 success with data (common pattern for POST endpoints)
    pub fn created(data: T, message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CREATED,
            body: ApiResponse::success(Some(data), message),
        }
    }
}

impl Reply<()> {
    /// Failure reply with an arbitrary status
    pub fn error(
        status: StatusCode,
        message: impl Into<String>,
        errors: Option<FieldErrors>,
    ) -> Self {
        Self {
            status,
            body: ApiResponse::failure(message, errors),
        }
    }

    /// 422 validation failure
    pub fn validation(message: impl Into<String>, errors: FieldErrors) -> Self {
        Self::error(StatusCode::UNPROCESSABLE_ENTITY, message, Some(errors))
    }
}

impl<T: Serialize> IntoResponse for Reply<T> {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self.body)).into_response()
    }
}
