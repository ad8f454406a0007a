//! Envelope and error-mapping tests.
//!
//! These exercise the formatting contract directly: every success or
//! failure flows through `ApiResponse`/`Reply`, and every `AppError`
//! variant maps to exactly one envelope + status combination.

use std::str::FromStr;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::{json, Value};

use storefront_api::domain::{Role, UserSort};
use storefront_api::errors::{AppError, FieldErrors};
use storefront_api::types::{ApiResponse, Reply};

/// Render a response into its JSON body
async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

fn field_errors(field: &str, messages: &[&str]) -> FieldErrors {
    let mut map = FieldErrors::new();
    map.insert(
        field.to_string(),
        messages.iter().map(|m| m.to_string()).collect(),
    );
    map
}

// =============================================================================
// Envelope shape
// =============================================================================

#[test]
fn success_with_data_has_exactly_the_envelope_keys() {
    let response = ApiResponse::success(Some(json!({"id": 1})), "OK");
    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["success"], json!(true));
    assert_eq!(value["message"], json!("OK"));
    assert_eq!(value["data"], json!({"id": 1}));
    assert!(value.get("errors").is_none());
    assert_eq!(value.as_object().unwrap().len(), 3);
}

#[test]
fn success_without_data_omits_the_data_key() {
    let response = ApiResponse::<Value>::success(None, "Done");
    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["success"], json!(true));
    assert!(value.get("data").is_none());
}

#[test]
fn success_with_an_empty_list_keeps_the_data_key() {
    let response = ApiResponse::success(Some(json!([])), "Done");
    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["data"], json!([]));
}

#[test]
fn failure_never_carries_a_data_key() {
    let response = ApiResponse::failure("Something failed", None);
    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["success"], json!(false));
    assert!(value.get("data").is_none());
}

#[test]
fn failure_without_errors_omits_the_errors_key() {
    let none = serde_json::to_value(ApiResponse::failure("failed", None)).unwrap();
    assert!(none.get("errors").is_none());

    let empty = serde_json::to_value(ApiResponse::failure("failed", Some(FieldErrors::new())))
        .unwrap();
    assert!(empty.get("errors").is_none());
}

#[test]
fn failure_preserves_a_non_empty_errors_map_verbatim() {
    let errors = field_errors("email", &["Email is required."]);
    let value = serde_json::to_value(ApiResponse::failure("Validation failed", Some(errors)))
        .unwrap();

    assert_eq!(value["errors"], json!({"email": ["Email is required."]}));
}

// =============================================================================
// Reply statuses
// =============================================================================

#[tokio::test]
async fn reply_ok_is_200_and_created_is_201() {
    let ok = Reply::ok(json!({}), "Success.").into_response();
    assert_eq!(ok.status(), StatusCode::OK);

    let created = Reply::created(json!({}), "Created.").into_response();
    assert_eq!(created.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn reply_validation_is_422_with_errors() {
    let response =
        Reply::validation("Validation failed.", field_errors("name", &["Name is required."]))
            .into_response();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let value = body_json(response).await;
    assert_eq!(value["success"], json!(false));
    assert_eq!(value["errors"]["name"], json!(["Name is required."]));
}

// =============================================================================
// Error mapping
// =============================================================================

#[tokio::test]
async fn unauthenticated_maps_to_401_with_the_fixed_message() {
    let response = AppError::Unauthenticated.into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let value = body_json(response).await;
    assert_eq!(
        value["message"],
        json!("Unauthenticated. Bearer token invalid or expired.")
    );
    assert!(value.get("errors").is_none());
}

#[tokio::test]
async fn validation_maps_to_422_with_the_first_field_message() {
    let err = AppError::validation(field_errors("email", &["Email is not valid."]));
    let response = err.into_response();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let value = body_json(response).await;
    assert_eq!(value["message"], json!("Email is not valid."));
    assert_eq!(value["errors"]["email"], json!(["Email is not valid."]));
}

#[tokio::test]
async fn validation_without_field_messages_uses_the_fallback() {
    let response = AppError::validation(FieldErrors::new()).into_response();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let value = body_json(response).await;
    assert_eq!(
        value["message"],
        json!("Validation failed. Check the fields that are wrong.")
    );
    assert!(value.get("errors").is_none());
}

#[tokio::test]
async fn not_found_maps_to_404_without_errors() {
    let response = AppError::NotFound.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let value = body_json(response).await;
    assert_eq!(value["success"], json!(false));
    assert_eq!(value["message"], json!("Resource not found."));
    assert!(value.get("errors").is_none());
}

#[tokio::test]
async fn http_errors_keep_their_status_and_message() {
    let err = AppError::http(StatusCode::BAD_REQUEST, "Malformed JSON body");
    let response = err.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let value = body_json(response).await;
    assert_eq!(value["message"], json!("Malformed JSON body"));
}

#[tokio::test]
async fn http_errors_with_empty_messages_get_the_generic_one() {
    let response = AppError::http(StatusCode::CONFLICT, "").into_response();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let value = body_json(response).await;
    assert_eq!(value["message"], json!("An error occurred."));
}

#[tokio::test]
async fn internal_errors_never_leak_their_details() {
    let response = AppError::internal("connection pool exhausted").into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let value = body_json(response).await;
    assert_eq!(value["message"], json!("An error occurred."));
}

// =============================================================================
// Role and sort parsing
// =============================================================================

#[test]
fn roles_parse_exactly_the_three_known_values() {
    assert_eq!(Role::from_str("administrator").unwrap(), Role::Administrator);
    assert_eq!(Role::from_str("manager").unwrap(), Role::Manager);
    assert_eq!(Role::from_str("user").unwrap(), Role::User);
    assert!(Role::from_str("superadmin").is_err());
    assert!(Role::from_str("Administrator").is_err());
}

#[test]
fn roles_serialize_as_lowercase_strings() {
    assert_eq!(serde_json::to_value(Role::Administrator).unwrap(), json!("administrator"));
    assert_eq!(Role::Manager.to_string(), "manager");
}

#[test]
fn sort_keys_parse_and_default_to_creation_time() {
    assert_eq!(UserSort::from_str("name").unwrap(), UserSort::Name);
    assert_eq!(UserSort::from_str("email").unwrap(), UserSort::Email);
    assert_eq!(UserSort::from_str("created_at").unwrap(), UserSort::CreatedAt);
    assert!(UserSort::from_str("password").is_err());
    assert_eq!(UserSort::default(), UserSort::CreatedAt);
}
