//! Handler tests for the Items domain
//!
//! These tests drive the items router directly (mounted at "/"), checking
//! status codes, envelopes and store state transitions. Each test gets its
//! own store.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_helpers::{ApiResponse, ErrorResponse};
use domain_items::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    handlers::router(ItemService::new(InMemoryItemRepository::new()))
}

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> axum::response::Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

async fn create(app: &Router, body: Value) -> Item {
    let response = send(app, "POST", "/", Some(body)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: ApiResponse<Item> = json_body(response.into_body()).await;
    created.data
}

async fn assert_error(response: axum::response::Response, status: StatusCode, label: &str) -> ErrorResponse {
    assert_eq!(response.status(), status);
    let body: ErrorResponse = json_body(response.into_body()).await;
    assert!(!body.success);
    assert_eq!(body.error, label);
    assert_eq!(body.status_code, status.as_u16());
    body
}

#[tokio::test]
async fn test_create_item_returns_201_with_defaults() {
    let app = app();

    let response = send(&app, "POST", "/", Some(json!({"name": "Milk"}))).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: ApiResponse<Item> = json_body(response.into_body()).await;
    assert!(body.success);
    assert_eq!(body.message.as_deref(), Some("Item created successfully"));
    assert_eq!(body.data.name, "Milk");
    assert_eq!(body.data.quantity, 1);
    assert!(!body.data.purchased);
    assert_eq!(body.data.created_at, body.data.updated_at);
}

#[tokio::test]
async fn test_create_item_trims_name() {
    let app = app();
    let item = create(&app, json!({"name": "  Eggs  "})).await;
    assert_eq!(item.name, "Eggs");
}

#[tokio::test]
async fn test_create_item_with_quantity() {
    let app = app();
    let item = create(&app, json!({"name": "X", "quantity": 3})).await;
    assert_eq!(item.quantity, 3);
}

#[tokio::test]
async fn test_create_item_accepts_integral_float_quantity() {
    let app = app();

    for (raw, expected) in [
        (r#"{"name": "X", "quantity": 3.0}"#, 3),
        (r#"{"name": "X", "quantity": 1e2}"#, 100),
    ] {
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(raw))
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::CREATED, "body: {}", raw);
        let body: ApiResponse<Item> = json_body(response.into_body()).await;
        assert_eq!(body.data.quantity, expected);
    }

    let response = send(&app, "POST", "/", Some(json!({"name": "X", "quantity": 1.5}))).await;
    assert_error(response, StatusCode::BAD_REQUEST, "Validation Error").await;
}

#[tokio::test]
async fn test_create_item_from_form_body() {
    let app = app();
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from("name=Milk"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: ApiResponse<Item> = json_body(response.into_body()).await;
    assert_eq!(body.data.name, "Milk");
    assert_eq!(body.data.quantity, 1);
}

#[tokio::test]
async fn test_create_item_validates_input() {
    let app = app();

    for body in [
        json!({"name": ""}),
        json!({}),
        json!({"name": "X", "quantity": 0}),
        json!({"name": "X", "quantity": -1}),
    ] {
        let response = send(&app, "POST", "/", Some(body)).await;
        assert_error(response, StatusCode::BAD_REQUEST, "Validation Error").await;
    }

    let response = send(&app, "GET", "/", None).await;
    let list: ApiResponse<Vec<Item>> = json_body(response.into_body()).await;
    assert_eq!(list.count, Some(0));
}

#[tokio::test]
async fn test_create_item_with_empty_body_is_validation_error() {
    let app = app();

    let response = send(&app, "POST", "/", None).await;

    let body = assert_error(response, StatusCode::BAD_REQUEST, "Validation Error").await;
    assert_eq!(body.message, "Name is required and must be a non-empty string");
}

#[tokio::test]
async fn test_create_item_with_malformed_json_is_validation_error() {
    let app = app();
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_error(response, StatusCode::BAD_REQUEST, "Validation Error").await;
}

#[tokio::test]
async fn test_ids_increase_and_are_never_reused() {
    let app = app();

    let first = create(&app, json!({"name": "Milk"})).await;
    let second = create(&app, json!({"name": "Eggs"})).await;
    assert!(second.id > first.id);

    let response = send(&app, "DELETE", &format!("/{}", second.id), None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let third = create(&app, json!({"name": "Bread"})).await;
    assert!(third.id > second.id);
}

#[tokio::test]
async fn test_get_item_returns_200() {
    let app = app();
    let created = create(&app, json!({"name": "Milk"})).await;

    let response = send(&app, "GET", &format!("/{}", created.id), None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["id"], created.id);
    assert_eq!(body["data"]["name"], "Milk");
    assert!(body.get("message").is_none());
    assert!(body.get("count").is_none());
}

#[tokio::test]
async fn test_missing_item_returns_404_for_every_verb() {
    let app = app();

    let response = send(&app, "GET", "/99999", None).await;
    let body = assert_error(response, StatusCode::NOT_FOUND, "Not Found").await;
    assert_eq!(body.message, "Item with id 99999 not found");

    let response = send(&app, "PUT", "/99999", Some(json!({"purchased": true}))).await;
    assert_error(response, StatusCode::NOT_FOUND, "Not Found").await;

    let response = send(&app, "DELETE", "/99999", None).await;
    assert_error(response, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn test_non_numeric_id_returns_400() {
    let app = app();

    for (method, body) in [
        ("GET", None),
        ("PUT", Some(json!({"purchased": true}))),
        ("DELETE", None),
    ] {
        let response = send(&app, method, "/abc", body).await;
        let err = assert_error(response, StatusCode::BAD_REQUEST, "Validation Error").await;
        assert_eq!(err.message, "Invalid item ID");
    }
}

#[tokio::test]
async fn test_update_purchased_leaves_other_fields() {
    let app = app();
    let created = create(&app, json!({"name": "Milk", "quantity": 2})).await;

    let response = send(
        &app,
        "PUT",
        &format!("/{}", created.id),
        Some(json!({"purchased": true})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: ApiResponse<Item> = json_body(response.into_body()).await;
    assert_eq!(body.message.as_deref(), Some("Item updated successfully"));
    assert!(body.data.purchased);
    assert_eq!(body.data.name, "Milk");
    assert_eq!(body.data.quantity, 2);
    assert_eq!(body.data.created_at, created.created_at);
    assert!(body.data.updated_at > created.updated_at);
}

#[tokio::test]
async fn test_update_validates_body() {
    let app = app();
    let created = create(&app, json!({"name": "Milk"})).await;
    let uri = format!("/{}", created.id);

    for (body, message) in [
        (json!({"name": "  "}), "Name must be a non-empty string"),
        (json!({"quantity": 0}), "Quantity must be a positive number"),
        (json!({"purchased": "yes"}), "Purchased must be a boolean"),
    ] {
        let response = send(&app, "PUT", &uri, Some(body)).await;
        let err = assert_error(response, StatusCode::BAD_REQUEST, "Validation Error").await;
        assert_eq!(err.message, message);
    }

    let response = send(&app, "GET", &uri, None).await;
    let body: ApiResponse<Item> = json_body(response.into_body()).await;
    assert_eq!(body.data, created);
}

#[tokio::test]
async fn test_update_missing_item_with_invalid_body_reports_not_found() {
    let app = app();

    let response = send(&app, "PUT", "/42", Some(json!({"quantity": 0}))).await;

    assert_error(response, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn test_delete_removes_item_and_decrements_count() {
    let app = app();
    create(&app, json!({"name": "Milk"})).await;
    let eggs = create(&app, json!({"name": "Eggs"})).await;

    let response = send(&app, "DELETE", &format!("/{}", eggs.id), None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());

    let response = send(&app, "GET", &format!("/{}", eggs.id), None).await;
    assert_error(response, StatusCode::NOT_FOUND, "Not Found").await;

    let response = send(&app, "GET", "/", None).await;
    let list: ApiResponse<Vec<Item>> = json_body(response.into_body()).await;
    assert_eq!(list.count, Some(1));
}

#[tokio::test]
async fn test_list_items_in_insertion_order_with_count() {
    let app = app();

    let response = send(&app, "GET", "/", None).await;
    let empty: ApiResponse<Vec<Item>> = json_body(response.into_body()).await;
    assert!(empty.success);
    assert!(empty.data.is_empty());
    assert_eq!(empty.count, Some(0));

    for name in ["Milk", "Eggs", "Bread"] {
        create(&app, json!({"name": name})).await;
    }

    let response = send(&app, "GET", "/", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let list: ApiResponse<Vec<Item>> = json_body(response.into_body()).await;
    let names: Vec<&str> = list.data.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, ["Milk", "Eggs", "Bread"]);
    assert_eq!(list.count, Some(list.data.len()));
}
