//! Product handlers.

use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{NewProduct, ProductResponse};
use crate::errors::AppResult;
use crate::types::Reply;

/// Product creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    /// Product name
    #[validate(
        required(message = "Name is required."),
        length(min = 1, message = "Name is required.")
    )]
    #[schema(example = "Espresso machine")]
    pub name: Option<String>,
    /// Optional free-form description
    pub description: Option<String>,
    /// Unit price, non-negative
    #[validate(
        required(message = "Price is required."),
        range(min = 0.0, message = "Price must be at least 0.")
    )]
    #[schema(example = 19.99)]
    pub price: Option<f64>,
}

/// Product listing payload
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductList {
    pub products: Vec<ProductResponse>,
}

/// Create a new product
#[utoipa::path(
    post,
    path = "/products",
    tag = "Products",
    request_body = CreateProductRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Product created successfully", body = ProductResponse),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateProductRequest>,
) -> AppResult<Reply<ProductResponse>> {
    let product = state
        .product_service
        .create_product(NewProduct {
            name: payload.name.unwrap_or_default(),
            description: payload.description,
            price: payload.price.unwrap_or_default(),
        })
        .await?;

    Ok(Reply::created(
        ProductResponse::from(product),
        "Product created successfully.",
    ))
}

/// List products
///
/// All products, newest first.
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Products fetched successfully", body = ProductList),
        (status = 401, description = "Missing or invalid bearer token")
    )
)]
pub async fn list_products(State(state): State<AppState>) -> AppResult<Reply<ProductList>> {
    let products = state
        .product_service
        .list_products()
        .await?
        .into_iter()
        .map(ProductResponse::from)
        .collect();

    Ok(Reply::ok(
        ProductList { products },
        "Products fetched successfully.",
    ))
}
