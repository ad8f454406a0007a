//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::{AppError, FieldErrors};

/// Validated JSON extractor that automatically validates requests.
///
/// Validation failures surface as the 422 envelope with a per-field
/// message map; a body that fails to parse at all is a plain 400.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::http(StatusCode::BAD_REQUEST, e.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::validation(collect_field_errors(&e)))?;

        Ok(ValidatedJson(value))
    }
}

/// Collect validation errors into a field → messages map
pub(crate) fn collect_field_errors(errors: &validator::ValidationErrors) -> FieldErrors {
    let mut map = FieldErrors::new();
    for (field, errs) in errors.field_errors() {
        let messages = errs
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
            .collect();
        map.insert(field.to_string(), messages);
    }
    map
}
