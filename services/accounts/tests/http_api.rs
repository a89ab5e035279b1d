//! End-to-end tests for the HTTP surface
//!
//! The router is driven in-process with an in-memory user store, so these
//! tests need no database.

use std::sync::Arc;

use accounts::{
    AccountService, AppState, HashingConfig, MemoryUserStore, PasswordHasher, UserStore,
    create_router,
};
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header::CONTENT_TYPE},
};
use serde_json::{Value, json};
use tower::ServiceExt;

fn test_app_with(store: Arc<MemoryUserStore>) -> Router {
    let hasher = PasswordHasher::new(HashingConfig {
        memory_cost: 8,
        time_cost: 1,
        parallelism: 1,
    })
    .unwrap();

    create_router(AppState::new(AccountService::new(store, hasher)))
}

fn test_app() -> Router {
    test_app_with(Arc::new(MemoryUserStore::new()))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, body)
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, request).await
}

#[tokio::test]
async fn test_register_and_login_flow() {
    let app = test_app();
    let credentials = json!({"username": "testuser", "password": "testpass"});

    let (status, body) = post_json(&app, "/user", credentials.clone()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["username"], "testuser");
    assert!(body["id"].is_i64());
    assert!(body.get("password").is_none());

    let (status, body) = post_json(&app, "/login", credentials).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Login successful"}));

    let (status, body) = post_json(
        &app,
        "/login",
        json!({"username": "testuser", "password": "wrong"}),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"error": "Invalid username or password"}));

    let (status, _) = post_json(
        &app,
        "/user",
        json!({"username": "testuser", "password": "anything"}),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_unknown_user_gets_same_response_as_wrong_password() {
    let app = test_app();
    post_json(
        &app,
        "/user",
        json!({"username": "sally", "password": "sells seashells"}),
    )
    .await;

    let wrong_password = post_json(
        &app,
        "/login",
        json!({"username": "sally", "password": "wrong"}),
    )
    .await;
    let unknown_user = post_json(
        &app,
        "/login",
        json!({"username": "nobody", "password": "wrong"}),
    )
    .await;

    assert_eq!(wrong_password.0, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password, unknown_user);
}

#[tokio::test]
async fn test_missing_fields_are_bad_requests() {
    let app = test_app();

    let (status, body) = post_json(&app, "/login", json!({"username": "a"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Username and password are required"}));

    let (status, _) = post_json(&app, "/user", json!({"password": "testpass"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post_json(&app, "/user", json!({"username": "", "password": "x"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post_json(&app, "/user", json!({"username": null, "password": "x"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_nul_in_username_is_bad_request() {
    let store = Arc::new(MemoryUserStore::new());
    let app = test_app_with(store.clone());
    let credentials = json!({"username": "a\u{0}b", "password": "x"});

    let (status, _) = post_json(&app, "/user", credentials.clone()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(store.is_empty().await);

    let (status, _) = post_json(&app, "/login", credentials).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_bodies_are_bad_requests() {
    let app = test_app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/login")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{\"username\": "))
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let request = Request::builder()
        .method(Method::POST)
        .uri("/user")
        .body(Body::from(r#"{"username": "a", "password": "b"}"#))
        .unwrap();
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post_json(&app, "/user", json!({"username": 42, "password": "b"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_failed_registration_stores_nothing() {
    let store = Arc::new(MemoryUserStore::new());
    let app = test_app_with(store.clone());

    let (status, _) = post_json(
        &app,
        "/user",
        json!({"username": "u".repeat(81), "password": "testpass"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(store.is_empty().await);

    let (status, _) = post_json(&app, "/user", json!({"username": "sally"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(store.find_by_username("sally").await.unwrap().is_none());
}

#[tokio::test]
async fn test_health_check() {
    let app = test_app();

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_unknown_routes_are_not_found() {
    let app = test_app();

    let request = Request::builder()
        .uri("/upload")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let request = Request::builder()
        .method(Method::GET)
        .uri("/login")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
