//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{auth_handler, order_handler, product_handler, user_handler};
use crate::domain::{CreatedUser, OrderResponse, ProductResponse, Role, UserListItem, UserPage};
use crate::services::{AuthenticatedUser, LoginResponse};

/// OpenAPI documentation for the storefront API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Storefront API",
        version = "0.1.0",
        description = "Users, products and orders behind a uniform JSON envelope",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        auth_handler::login,
        user_handler::create_user,
        user_handler::list_users,
        product_handler::create_product,
        product_handler::list_products,
        order_handler::create_order,
    ),
    components(
        schemas(
            // Domain types
            Role,
            CreatedUser,
            UserListItem,
            UserPage,
            ProductResponse,
            OrderResponse,
            // Auth types
            auth_handler::LoginRequest,
            AuthenticatedUser,
            LoginResponse,
            // Request types
            user_handler::CreateUserRequest,
            product_handler::CreateProductRequest,
            product_handler::ProductList,
            order_handler::CreateOrderRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login and token issuance"),
        (name = "Users", description = "User creation and listing"),
        (name = "Products", description = "Product catalogue"),
        (name = "Orders", description = "Order placement")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some("Token obtained from /login"))
                        .build(),
                ),
            );
        }
    }
}
