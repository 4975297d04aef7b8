//! Protected route integration tests
//!
//! Requests without a usable bearer token are rejected before any handler
//! runs, so nothing is written.

use axum::http::{header, HeaderValue, StatusCode};
use serde_json::json;

use crate::common::{assert_error, count_live_rows, create_test_user, TestApp};

#[tokio::test]
async fn test_missing_token_writes_nothing() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/v1/post/register")
        .json(&json!({ "title": "sneaky" }))
        .await;

    assert_error(
        &response,
        StatusCode::UNAUTHORIZED,
        "authorization header missing or invalid",
    );
    assert_eq!(count_live_rows(app.pool(), "posts").await, 0);
}

#[tokio::test]
async fn test_non_bearer_scheme_rejected() {
    let app = TestApp::new().await;
    let user = create_test_user(&app.server, "alice").await;

    let response = app
        .server
        .post("/api/v1/user/profile")
        .add_header(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Token {}", user.token)).unwrap(),
        )
        .json(&json!({ "bio": "hi" }))
        .await;

    crate::assert_status!(response, StatusCode::UNAUTHORIZED);
    assert_eq!(count_live_rows(app.pool(), "user_profiles").await, 0);
}

#[tokio::test]
async fn test_garbage_token_rejected() {
    let app = TestApp::new().await;
    create_test_user(&app.server, "alice").await;

    let response = app
        .server
        .delete("/api/v1/user")
        .add_header(header::AUTHORIZATION, HeaderValue::from_static("Bearer garbage"))
        .await;

    assert_error(&response, StatusCode::UNAUTHORIZED, "invalid token");
    assert_eq!(count_live_rows(app.pool(), "users").await, 1);
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let app = TestApp::new().await;

    let response = app.server.get("/api/v1/does-not-exist").await;

    assert_error(&response, StatusCode::NOT_FOUND, "route not found");
}
