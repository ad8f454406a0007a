//! User handlers.

use std::str::FromStr;

use axum::{extract::State, Extension};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::api::extractors::{ValidatedJson, ValidatedQuery};
use crate::api::AppState;
use crate::config::DEFAULT_PAGE_NUMBER;
use crate::domain::{CreatedUser, NewUser, Principal, Role, UserListQuery, UserPage, UserSort};
use crate::errors::{AppError, AppResult};
use crate::types::Reply;

/// User creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    /// User email address (must be unique)
    #[validate(
        required(message = "Email is required."),
        email(message = "Email is not valid.")
    )]
    #[schema(example = "user@example.com")]
    pub email: Option<String>,
    /// User password (minimum 8 characters)
    #[validate(
        required(message = "Password is required."),
        length(min = 8, message = "Password must be at least 8 characters.")
    )]
    #[schema(example = "SecurePass123!", min_length = 8)]
    pub password: Option<String>,
    /// User display name (3-50 characters)
    #[validate(
        required(message = "Name is required."),
        length(min = 3, max = 50, message = "Name must be between 3 and 50 characters.")
    )]
    #[schema(example = "John Doe")]
    pub name: Option<String>,
    /// Role to assign; defaults to `user`
    #[validate(custom(function = "validate_role"))]
    #[schema(example = "user")]
    pub role: Option<String>,
}

fn validate_role(role: &str) -> Result<(), ValidationError> {
    if Role::from_str(role).is_ok() {
        Ok(())
    } else {
        let mut err = ValidationError::new("in");
        err.message = Some("Role must be administrator, manager, or user.".into());
        Err(err)
    }
}

impl CreateUserRequest {
    /// Convert into the service input. All required fields are
    /// guaranteed present once validation has run.
    fn into_new_user(self) -> AppResult<NewUser> {
        let role = self
            .role
            .as_deref()
            .map(Role::from_str)
            .transpose()
            .map_err(|_| {
                AppError::validation_field("role", "Role must be administrator, manager, or user.")
            })?;

        Ok(NewUser {
            email: self.email.unwrap_or_default(),
            password: self.password.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            role,
        })
    }
}

/// User listing query parameters
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListUsersQuery {
    /// Case-insensitive substring match against name or email
    pub search: Option<String>,
    /// Sort key: `name`, `email`, or `created_at` (default)
    #[serde(rename = "sortBy")]
    #[validate(custom(function = "validate_sort_by"))]
    pub sort_by: Option<String>,
    /// 1-indexed page number
    #[validate(range(min = 1, message = "Page must be at least 1."))]
    pub page: Option<u64>,
}

fn validate_sort_by(sort_by: &str) -> Result<(), ValidationError> {
    if UserSort::from_str(sort_by).is_ok() {
        Ok(())
    } else {
        let mut err = ValidationError::new("in");
        err.message = Some("Sort by must be name, email, or created_at.".into());
        Err(err)
    }
}

impl ListUsersQuery {
    fn into_query(self) -> AppResult<UserListQuery> {
        // An empty search string means no filter
        let search = self.search.filter(|s| !s.is_empty());
        let sort = self
            .sort_by
            .as_deref()
            .map(UserSort::from_str)
            .transpose()?
            .unwrap_or_default();

        Ok(UserListQuery {
            search,
            sort,
            page: self.page.unwrap_or(DEFAULT_PAGE_NUMBER),
        })
    }
}

/// Create a new user
///
/// Public endpoint. On success the new user and every active
/// administrator are notified by email.
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created successfully", body = CreatedUser),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> AppResult<Reply<CreatedUser>> {
    let user = state
        .user_service
        .create_user(payload.into_new_user()?)
        .await?;

    Ok(Reply::created(
        CreatedUser::from(user),
        "User created successfully.",
    ))
}

/// List users
///
/// Fixed pages of 15 active users, each annotated with its order count
/// and whether the caller may edit it.
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    params(ListUsersQuery),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Users fetched successfully", body = UserPage),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 422, description = "Invalid query parameters")
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    ValidatedQuery(params): ValidatedQuery<ListUsersQuery>,
) -> AppResult<Reply<UserPage>> {
    let page = state
        .user_service
        .list_users(Some(principal), params.into_query()?)
        .await?;

    Ok(Reply::ok(page, "Users fetched successfully."))
}
