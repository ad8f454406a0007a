//! Order domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Order domain entity. Belongs to exactly one user and optionally
/// references one product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub user_id: Uuid,
    pub product_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Order response (safe to return to client)
///
/// `product_id` is serialized as null when the order has no product.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OrderResponse {
    /// Unique order identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Referenced product, if any
    pub product_id: Option<Uuid>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            user_id: order.user_id,
            product_id: order.product_id,
            created_at: order.created_at,
        }
    }
}
