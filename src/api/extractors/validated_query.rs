//! Validated query-string extractor.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::{request::Parts, StatusCode},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use super::validated_json::collect_field_errors;
use crate::errors::AppError;

/// Query-string counterpart of `ValidatedJson`.
pub struct ValidatedQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::http(StatusCode::BAD_REQUEST, e.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::validation(collect_field_errors(&e)))?;

        Ok(ValidatedQuery(value))
    }
}
