//! User repository.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, SqlErr,
};
use uuid::Uuid;

use super::entities::{order, user};
use crate::domain::{Role, User, UserListQuery, UserSort, UserWithOrders};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by email
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Persist a new user (active by default)
    async fn create(
        &self,
        email: String,
        password_hash: String,
        name: String,
        role: Role,
    ) -> AppResult<User>;

    /// All active users with the administrator role
    async fn list_active_administrators(&self) -> AppResult<Vec<User>>;

    /// One fixed-size page of active users matching the query, each
    /// joined with its order count
    async fn search(&self, query: &UserListQuery) -> AppResult<Vec<UserWithOrders>>;
}

/// Concrete implementation of UserRepository backed by SeaORM
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        result.map(User::try_from).transpose()
    }

    async fn create(
        &self,
        email: String,
        password_hash: String,
        name: String,
        role: Role,
    ) -> AppResult<User> {
        let now = Utc::now();
        let active_model = user::ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(email),
            password_hash: Set(password_hash),
            name: Set(name),
            role: Set(role.as_str().to_string()),
            active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        };

        match active_model.insert(&self.db).await {
            Ok(model) => User::try_from(model),
            // The unique index is the last line of defense against a
            // concurrent create with the same email; surface it the
            // same way the pre-check does.
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(AppError::validation_field(
                    "email",
                    "Email is already registered.",
                )),
                _ => Err(AppError::from(err)),
            },
        }
    }

    async fn list_active_administrators(&self) -> AppResult<Vec<User>> {
        let models = user::Entity::find()
            .filter(user::Column::Role.eq(Role::Administrator.as_str()))
            .filter(user::Column::Active.eq(true))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        models.into_iter().map(User::try_from).collect()
    }

    async fn search(&self, query: &UserListQuery) -> AppResult<Vec<UserWithOrders>> {
        let mut select = user::Entity::find().filter(user::Column::Active.eq(true));

        if let Some(term) = &query.search {
            let pattern = format!("%{}%", term.to_lowercase());
            select = select.filter(
                Condition::any()
                    .add(
                        Expr::expr(Func::lower(Expr::col((user::Entity, user::Column::Name))))
                            .like(pattern.clone()),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col((user::Entity, user::Column::Email))))
                            .like(pattern),
                    ),
            );
        }

        let select = match query.sort {
            UserSort::Name => select.order_by_asc(user::Column::Name),
            UserSort::Email => select.order_by_asc(user::Column::Email),
            UserSort::CreatedAt => select.order_by_asc(user::Column::CreatedAt),
        };

        let models = select
            .paginate(&self.db, UserListQuery::PAGE_SIZE)
            .fetch_page(query.page.saturating_sub(1))
            .await
            .map_err(AppError::from)?;

        if models.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
        let counts: Vec<(Uuid, i64)> = order::Entity::find()
            .select_only()
            .column(order::Column::UserId)
            .column_as(order::Column::Id.count(), "orders_count")
            .filter(order::Column::UserId.is_in(ids))
            .group_by(order::Column::UserId)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;
        let counts: HashMap<Uuid, i64> = counts.into_iter().collect();

        models
            .into_iter()
            .map(|model| {
                let orders_count = counts.get(&model.id).copied().unwrap_or(0);
                Ok(UserWithOrders {
                    user: User::try_from(model)?,
                    orders_count,
                })
            })
            .collect()
    }
}
