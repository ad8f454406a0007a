//! Order handlers.

use axum::{extract::State, Extension};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{OrderResponse, Principal};
use crate::errors::AppResult;
use crate::types::Reply;

/// Order creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateOrderRequest {
    /// Product to order; may be omitted for an empty order
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub product_id: Option<Uuid>,
}

/// Create a new order
///
/// The order is owned by the authenticated principal. A referenced
/// product must exist.
#[utoipa::path(
    post,
    path = "/orders",
    tag = "Orders",
    request_body = CreateOrderRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Order created successfully", body = OrderResponse),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 422, description = "Unknown product id")
    )
)]
pub async fn create_order(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    ValidatedJson(payload): ValidatedJson<CreateOrderRequest>,
) -> AppResult<Reply<OrderResponse>> {
    let order = state
        .order_service
        .create_order(principal.id, payload.product_id)
        .await?;

    Ok(Reply::created(
        OrderResponse::from(order),
        "Order created successfully.",
    ))
}
