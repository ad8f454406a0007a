//! User domain entity and related types.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{DEFAULT_PAGE_NUMBER, USERS_PAGE_SIZE};
use crate::errors::AppError;

/// User roles. A closed enumeration: unknown values are rejected at the
/// boundary rather than coerced to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Administrator,
    Manager,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Administrator => "administrator",
            Role::Manager => "manager",
            Role::User => "user",
        }
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "administrator" => Ok(Role::Administrator),
            "manager" => Ok(Role::Manager),
            "user" => Ok(Role::User),
            other => Err(AppError::internal(format!("Unknown role value: {other}"))),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: String,
    pub role: Role,
    /// Inactive users are hidden from listings
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The authenticated actor associated with a request, resolved from a
/// bearer token. Passed explicitly to anything that makes decisions
/// about it; there is no ambient session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
}

/// Input for user creation, after request validation
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Option<Role>,
}

/// Fields returned after a successful user creation
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreatedUser {
    /// User email address
    #[schema(example = "user@example.com")]
    pub email: String,
    /// User display name
    #[schema(example = "John Doe")]
    pub name: String,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<User> for CreatedUser {
    fn from(user: User) -> Self {
        Self {
            email: user.email,
            name: user.name,
            created_at: user.created_at,
        }
    }
}

/// Sort keys accepted by the user listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserSort {
    Name,
    Email,
    #[default]
    CreatedAt,
}

impl FromStr for UserSort {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(UserSort::Name),
            "email" => Ok(UserSort::Email),
            "created_at" => Ok(UserSort::CreatedAt),
            _ => Err(AppError::validation_field(
                "sortBy",
                "Sort by must be name, email, or created_at.",
            )),
        }
    }
}

/// Listing parameters after validation: free-text search, sort key,
/// 1-indexed page over fixed-size pages.
#[derive(Debug, Clone)]
pub struct UserListQuery {
    pub search: Option<String>,
    pub sort: UserSort,
    pub page: u64,
}

impl UserListQuery {
    pub const PAGE_SIZE: u64 = USERS_PAGE_SIZE;
}

impl Default for UserListQuery {
    fn default() -> Self {
        Self {
            search: None,
            sort: UserSort::default(),
            page: DEFAULT_PAGE_NUMBER,
        }
    }
}

/// A user joined with its order count, as produced by the repository
#[derive(Debug, Clone)]
pub struct UserWithOrders {
    pub user: User,
    pub orders_count: i64,
}

/// One row of the user listing
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserListItem {
    /// User email address
    #[schema(example = "user@example.com")]
    pub email: String,
    /// User display name
    #[schema(example = "John Doe")]
    pub name: String,
    /// User role
    #[schema(example = "user")]
    pub role: Role,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
    /// Number of orders owned by this user
    pub orders_count: i64,
    /// Whether the requesting principal may edit this user
    pub can_edit: bool,
}

/// One page of the user listing
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserPage {
    /// The 1-indexed page that was fetched
    pub page: u64,
    pub users: Vec<UserListItem>,
}
