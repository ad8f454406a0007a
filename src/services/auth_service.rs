//! Authentication service.
//!
//! Issues bearer tokens on login and resolves presented tokens back to
//! a `Principal`. Tokens are opaque to clients; everything past the
//! login endpoint goes through `resolve`.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::Config;
use crate::domain::password::DUMMY_HASH;
use crate::domain::{Password, Principal, Role, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub role: Role,
    pub exp: i64,
    pub iat: i64,
}

/// Public view of the authenticated user, returned alongside the token
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthenticatedUser {
    /// User email address
    #[schema(example = "user@example.com")]
    pub email: String,
    /// User display name
    #[schema(example = "John Doe")]
    pub name: String,
    /// User role
    #[schema(example = "user")]
    pub role: Role,
}

/// Data returned after a successful login
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginResponse {
    /// Bearer token for subsequent requests
    pub token: String,
    pub user: AuthenticatedUser,
}

/// Authentication service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Verify credentials and issue a bearer token
    async fn login(&self, email: String, password: String) -> AppResult<LoginResponse>;

    /// Resolve a bearer token to the principal it was issued for
    fn resolve(&self, token: &str) -> Option<Principal>;
}

/// Failed credential check, reported as a field error on `email`
fn invalid_credentials() -> AppError {
    AppError::validation_field("email", "The provided credentials are incorrect.")
}

/// Generate a signed token for a user
fn generate_token(user: &User, config: &Config) -> AppResult<String> {
    let now = Utc::now();
    let expires_at = now + Duration::hours(config.jwt_expiration_hours);

    let claims = Claims {
        sub: user.id,
        email: user.email.clone(),
        role: user.role,
        exp: expires_at.timestamp(),
        iat: now.timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret_bytes()),
    )?;

    Ok(token)
}

/// Verify a token and extract its claims
fn verify_token(token: &str, config: &Config) -> AppResult<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret_bytes()),
        &Validation::default(),
    )?;

    Ok(token_data.claims)
}

/// Concrete implementation of AuthService over the user repository.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    config: Config,
}

impl Authenticator {
    /// Create new auth service instance
    pub fn new(users: Arc<dyn UserRepository>, config: Config) -> Self {
        Self { users, config }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn login(&self, email: String, password: String) -> AppResult<LoginResponse> {
        let user_result = self.users.find_by_email(&email).await?;

        // Verify against a dummy hash when the user doesn't exist so
        // response timing doesn't reveal which emails are registered.
        let (password_hash, user_exists) = match &user_result {
            Some(user) => (user.password_hash.as_str(), true),
            None => (DUMMY_HASH, false),
        };

        let stored_password = Password::from_hash(password_hash.to_string());
        let password_valid = stored_password.verify(&password);

        if !user_exists || !password_valid {
            return Err(invalid_credentials());
        }

        let user = user_result.ok_or_else(|| AppError::internal("User vanished during login"))?;
        let token = generate_token(&user, &self.config)?;

        Ok(LoginResponse {
            token,
            user: AuthenticatedUser {
                email: user.email,
                name: user.name,
                role: user.role,
            },
        })
    }

    fn resolve(&self, token: &str) -> Option<Principal> {
        match verify_token(token, &self.config) {
            Ok(claims) => Some(Principal {
                id: claims.sub,
                email: claims.email,
                role: claims.role,
            }),
            Err(e) => {
                tracing::debug!("Token rejected: {}", e);
                None
            }
        }
    }
}
