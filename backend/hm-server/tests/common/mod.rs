#![allow(dead_code)]

//! Test infrastructure for hm-server API tests

use hm_auth::{RateLimitConfig, TokenService};
use hm_config::ValidationConfig;
use hm_server::{AppState, build_router};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

const TEST_SECRET: &[u8] = b"integration-test-secret-32-bytes!";

/// Create a test pool with in-memory SQLite and migrations applied
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/hm-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing; the rate limit is set high enough that
/// tests never trip it
pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;

    AppState::new(
        pool,
        TokenService::new(TEST_SECRET, 3600),
        ValidationConfig::default(),
        RateLimitConfig {
            max_requests: 100_000,
            window_secs: 1,
        },
    )
}

pub async fn create_test_app() -> Router {
    build_router(create_test_app_state().await)
}

/// Drive one request through the router, returning status and parsed body
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    // Non-JSON bodies (the liveness probes) come back as Null
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);

    (status, json)
}

pub fn register_body(email: &str) -> serde_json::Value {
    serde_json::json!({
        "name": "Ana Souza",
        "email": email,
        "password": "Abc123",
    })
}

/// Register a guest through the API and return (guest_id, token)
pub async fn register_guest(app: &Router, email: &str) -> (String, String) {
    let (status, body) = send(
        app,
        "POST",
        "/api/v1/auth/register",
        None,
        Some(register_body(email)),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED, "registration failed: {}", body);

    let guest_id = body["data"]["guest"]["id"].as_str().unwrap().to_string();
    let token = body["data"]["token"].as_str().unwrap().to_string();
    (guest_id, token)
}
