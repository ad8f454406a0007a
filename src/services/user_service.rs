//! User service - Handles user-related business logic.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{
    policy, NewUser, Password, Principal, Role, User, UserListItem, UserListQuery, UserPage,
};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;
use crate::jobs::{notifications, JobQueue};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a user and notify the interested parties
    async fn create_user(&self, input: NewUser) -> AppResult<User>;

    /// One page of active users, each annotated with its order count
    /// and whether the principal may edit it
    async fn list_users(
        &self,
        principal: Option<Principal>,
        query: UserListQuery,
    ) -> AppResult<UserPage>;
}

/// Concrete implementation of UserService.
pub struct UserManager {
    users: Arc<dyn UserRepository>,
    queue: Arc<dyn JobQueue>,
}

impl UserManager {
    /// Create new user service instance
    pub fn new(users: Arc<dyn UserRepository>, queue: Arc<dyn JobQueue>) -> Self {
        Self { users, queue }
    }

    /// Fan out creation notifications: one to the new user, one per
    /// active administrator. Failures are logged, never propagated;
    /// the user is already persisted at this point.
    async fn notify_user_created(&self, user: &User) {
        if let Err(e) = self
            .queue
            .enqueue(notifications::account_created(user))
            .await
        {
            tracing::warn!(user = %user.email, error = %e, "Failed to enqueue account-created email");
        }

        match self.users.list_active_administrators().await {
            Ok(admins) => {
                for admin in admins {
                    if let Err(e) = self
                        .queue
                        .enqueue(notifications::new_user_registered(&admin, user))
                        .await
                    {
                        tracing::warn!(
                            admin = %admin.email,
                            error = %e,
                            "Failed to enqueue new-user notification"
                        );
                    }
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load administrators for notification");
            }
        }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, input: NewUser) -> AppResult<User> {
        // Format and length checks already ran at the extractor;
        // uniqueness needs the store.
        if self.users.find_by_email(&input.email).await?.is_some() {
            return Err(AppError::validation_field(
                "email",
                "Email is already registered.",
            ));
        }

        let password_hash = Password::new(&input.password)?.into_string();
        let role = input.role.unwrap_or(Role::User);

        let user = self
            .users
            .create(input.email, password_hash, input.name, role)
            .await?;

        self.notify_user_created(&user).await;

        Ok(user)
    }

    async fn list_users(
        &self,
        principal: Option<Principal>,
        query: UserListQuery,
    ) -> AppResult<UserPage> {
        let rows = self.users.search(&query).await?;

        let users = rows
            .into_iter()
            .map(|row| {
                let can_edit = policy::can_edit(principal.as_ref(), &row.user);
                UserListItem {
                    email: row.user.email,
                    name: row.user.name,
                    role: row.user.role,
                    created_at: row.user.created_at,
                    orders_count: row.orders_count,
                    can_edit,
                }
            })
            .collect();

        Ok(UserPage {
            page: query.page,
            users,
        })
    }
}
