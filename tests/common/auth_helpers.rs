//! Authentication test helpers
//!
//! Provides utilities for registering test users through the API and
//! building authorization headers.

use axum::http::{HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::json;

/// Test user credentials
pub struct TestUser {
    pub id: i64,
    pub user_name: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Register a user through `POST /api/v1/user/register`
pub async fn register_user(server: &TestServer, user_name: &str, password: &str) -> TestUser {
    let email = format!("{user_name}@example.com");

    let response = server
        .post("/api/v1/user/register")
        .json(&json!({
            "user_name": user_name,
            "email": email,
            "password": password,
        }))
        .await;

    assert_eq!(
        response.status_code(),
        StatusCode::CREATED,
        "registration failed: {}",
        response.text()
    );

    let body: serde_json::Value = response.json();
    TestUser {
        id: body["user"]["id"].as_i64().expect("user id in response"),
        user_name: user_name.to_string(),
        email,
        password: password.to_string(),
        token: body["token"].as_str().expect("token in response").to_string(),
    }
}

/// Register a user with a default password
pub async fn create_test_user(server: &TestServer, user_name: &str) -> TestUser {
    register_user(server, user_name, "password123").await
}

/// Create authorization header value
pub fn auth_header(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {}", token)).expect("valid header value")
}
