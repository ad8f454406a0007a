//! Authentication handlers.

use axum::extract::State;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::errors::AppResult;
use crate::services::LoginResponse;
use crate::types::Reply;

/// User login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// User email address
    #[validate(
        required(message = "Email is required."),
        email(message = "Email is not valid.")
    )]
    #[schema(example = "user@example.com")]
    pub email: Option<String>,
    /// User password
    #[validate(required(message = "Password is required."))]
    #[schema(example = "SecurePass123!")]
    pub password: Option<String>,
}

/// Login with email and password
///
/// Returns a bearer token for subsequent API calls. Invalid credentials
/// are reported as a validation failure on the email field.
#[utoipa::path(
    post,
    path = "/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 422, description = "Missing fields or incorrect credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Reply<LoginResponse>> {
    let data = state
        .auth_service
        .login(
            payload.email.unwrap_or_default(),
            payload.password.unwrap_or_default(),
        )
        .await?;

    Ok(Reply::ok(data, "Login successfully."))
}
