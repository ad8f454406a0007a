//! Shared in-memory fakes for service-level tests.
//!
//! These implement the repository and queue traits over plain vectors,
//! mirroring the store semantics the services rely on (unique emails,
//! active-only listing, fixed page size).
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use storefront_api::domain::{
    NewProduct, Order, Product, Role, User, UserListQuery, UserSort, UserWithOrders,
};
use storefront_api::errors::{AppError, AppResult};
use storefront_api::infra::{OrderRepository, ProductRepository, UserRepository};
use storefront_api::jobs::{EmailJob, JobQueue};

/// Build a user row with a throwaway hash
pub fn make_user(email: &str, name: &str, role: Role) -> User {
    let now = Utc::now();
    User {
        id: Uuid::new_v4(),
        email: email.to_string(),
        password_hash: "hashed".to_string(),
        name: name.to_string(),
        role,
        active: true,
        created_at: now,
        updated_at: now,
    }
}

// =============================================================================
// Users
// =============================================================================

#[derive(Default)]
pub struct InMemoryUserRepo {
    users: Mutex<Vec<User>>,
    order_counts: Mutex<HashMap<Uuid, i64>>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
            order_counts: Mutex::new(HashMap::new()),
        }
    }

    pub fn set_order_count(&self, user_id: Uuid, count: i64) {
        self.order_counts.lock().unwrap().insert(user_id, count);
    }

    pub fn contains_email(&self, email: &str) -> bool {
        self.users.lock().unwrap().iter().any(|u| u.email == email)
    }

    pub fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn create(
        &self,
        email: String,
        password_hash: String,
        name: String,
        role: Role,
    ) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == email) {
            return Err(AppError::validation_field(
                "email",
                "Email is already registered.",
            ));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email,
            password_hash,
            name,
            role,
            active: true,
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn list_active_administrators(&self) -> AppResult<Vec<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| u.role == Role::Administrator && u.active)
            .cloned()
            .collect())
    }

    async fn search(&self, query: &UserListQuery) -> AppResult<Vec<UserWithOrders>> {
        let mut rows: Vec<User> = self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| u.active)
            .filter(|u| match &query.search {
                Some(term) => {
                    let term = term.to_lowercase();
                    u.name.to_lowercase().contains(&term)
                        || u.email.to_lowercase().contains(&term)
                }
                None => true,
            })
            .cloned()
            .collect();

        match query.sort {
            UserSort::Name => rows.sort_by(|a, b| a.name.cmp(&b.name)),
            UserSort::Email => rows.sort_by(|a, b| a.email.cmp(&b.email)),
            UserSort::CreatedAt => rows.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        }

        let page_size = UserListQuery::PAGE_SIZE as usize;
        let offset = (query.page.saturating_sub(1) as usize) * page_size;
        let counts = self.order_counts.lock().unwrap();

        Ok(rows
            .into_iter()
            .skip(offset)
            .take(page_size)
            .map(|user| {
                let orders_count = counts.get(&user.id).copied().unwrap_or(0);
                UserWithOrders { user, orders_count }
            })
            .collect())
    }
}

// =============================================================================
// Products
// =============================================================================

#[derive(Default)]
pub struct InMemoryProductRepo {
    products: Mutex<Vec<Product>>,
}

impl InMemoryProductRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(products: Vec<Product>) -> Self {
        Self {
            products: Mutex::new(products),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepo {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn create(&self, input: NewProduct) -> AppResult<Product> {
        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4(),
            name: input.name,
            description: input.description,
            price: input.price,
            created_at: now,
            updated_at: now,
        };
        self.products.lock().unwrap().push(product.clone());
        Ok(product)
    }

    async fn list_newest_first(&self) -> AppResult<Vec<Product>> {
        let mut products = self.products.lock().unwrap().clone();
        products.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(products)
    }
}

// =============================================================================
// Orders
// =============================================================================

#[derive(Default)]
pub struct InMemoryOrderRepo {
    orders: Mutex<Vec<Order>>,
}

impl InMemoryOrderRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn order_count(&self) -> usize {
        self.orders.lock().unwrap().len()
    }

    pub fn orders(&self) -> Vec<Order> {
        self.orders.lock().unwrap().clone()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepo {
    async fn create(&self, user_id: Uuid, product_id: Option<Uuid>) -> AppResult<Order> {
        let now = Utc::now();
        let order = Order {
            id: Uuid::new_v4(),
            user_id,
            product_id,
            created_at: now,
            updated_at: now,
        };
        self.orders.lock().unwrap().push(order.clone());
        Ok(order)
    }
}

// =============================================================================
// Queues
// =============================================================================

/// Queue that records every enqueued email
#[derive(Default)]
pub struct RecordingQueue {
    sent: Mutex<Vec<EmailJob>>,
}

impl RecordingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<EmailJob> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl JobQueue for RecordingQueue {
    async fn enqueue(&self, job: EmailJob) -> AppResult<()> {
        self.sent.lock().unwrap().push(job);
        Ok(())
    }
}

/// Queue whose every enqueue fails
pub struct FailingQueue;

#[async_trait]
impl JobQueue for FailingQueue {
    async fn enqueue(&self, _job: EmailJob) -> AppResult<()> {
        Err(AppError::internal("queue unavailable"))
    }
}
