//! Bearer token authentication middleware.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::config::BEARER_TOKEN_PREFIX;
use crate::errors::AppError;

/// Bearer authentication middleware.
///
/// Extracts the token from the Authorization header, resolves it to a
/// `Principal`, and injects the principal into the request extensions.
/// Anything that fails along the way is the same 401.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::Unauthenticated)?;

    let token = auth_header
        .strip_prefix(BEARER_TOKEN_PREFIX)
        .ok_or(AppError::Unauthenticated)?;

    let principal = state
        .auth_service
        .resolve(token)
        .ok_or(AppError::Unauthenticated)?;

    request.extensions_mut().insert(principal);

    Ok(next.run(request).await)
}
