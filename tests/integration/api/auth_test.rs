//! Authentication API integration tests
//!
//! Tests for registration, login, the current-user endpoint and account
//! deletion.

use axum::http::{header, StatusCode};
use serde_json::json;

use crate::common::{assert_error, auth_header, count_live_rows, create_test_user, TestApp};
use blogpost::backend::auth::sessions::SessionKeys;
use blogpost::backend::auth::UserResponse;

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/v1/user/register")
        .json(&json!({
            "user_name": "alice",
            "email": "alice@example.com",
            "password": "password123"
        }))
        .await;

    crate::assert_status!(response, StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert!(body.get("token").is_some());
    assert_eq!(body["user"]["user_name"], "alice");
    assert!(body["user"].get("password_hash").is_none());

    // the returned token identifies the new user
    let token = body["token"].as_str().unwrap();
    let user_id = app.state.sessions.get_user_id_from_token(token).unwrap();
    assert_eq!(Some(user_id), body["user"]["id"].as_i64());
}

#[tokio::test]
async fn test_register_duplicate_user_name() {
    let app = TestApp::new().await;
    create_test_user(&app.server, "alice").await;

    let response = app
        .server
        .post("/api/v1/user/register")
        .json(&json!({
            "user_name": "alice",
            "email": "someone-else@example.com",
            "password": "password123"
        }))
        .await;

    assert_error(&response, StatusCode::CONFLICT, "user name already taken");
    assert_eq!(count_live_rows(app.pool(), "users").await, 1);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::new().await;
    create_test_user(&app.server, "alice").await;

    let response = app
        .server
        .post("/api/v1/user/register")
        .json(&json!({
            "user_name": "bob",
            "email": "alice@example.com",
            "password": "password123"
        }))
        .await;

    assert_error(&response, StatusCode::CONFLICT, "email already registered");
}

#[tokio::test]
async fn test_register_validation_errors() {
    let app = TestApp::new().await;

    let short_password = app
        .server
        .post("/api/v1/user/register")
        .json(&json!({
            "user_name": "alice",
            "email": "alice@example.com",
            "password": "123"
        }))
        .await;
    assert_error(
        &short_password,
        StatusCode::BAD_REQUEST,
        "password: must be between 6 and 100 characters",
    );

    let missing_field = app
        .server
        .post("/api/v1/user/register")
        .json(&json!({ "user_name": "alice" }))
        .await;
    crate::assert_status!(missing_field, StatusCode::BAD_REQUEST);

    assert_eq!(count_live_rows(app.pool(), "users").await, 0);
}

#[tokio::test]
async fn test_login_with_email_and_user_name() {
    let app = TestApp::new().await;
    let user = create_test_user(&app.server, "alice").await;

    for credential in [user.email.as_str(), user.user_name.as_str()] {
        let response = app
            .server
            .post("/api/v1/user/login")
            .json(&json!({ "credential": credential, "password": user.password }))
            .await;

        crate::assert_status!(response, StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert_eq!(body["user"]["id"].as_i64(), Some(user.id));
        assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    }
}

#[tokio::test]
async fn test_login_failures_share_one_body() {
    let app = TestApp::new().await;
    create_test_user(&app.server, "alice").await;

    let wrong_password = app
        .server
        .post("/api/v1/user/login")
        .json(&json!({ "credential": "alice", "password": "wrongpassword" }))
        .await;
    let unknown_user = app
        .server
        .post("/api/v1/user/login")
        .json(&json!({ "credential": "nobody", "password": "password123" }))
        .await;

    assert_error(&wrong_password, StatusCode::UNAUTHORIZED, "invalid credentials");
    assert_error(&unknown_user, StatusCode::UNAUTHORIZED, "invalid credentials");
    assert_eq!(wrong_password.text(), unknown_user.text());
}

#[tokio::test]
async fn test_get_me() {
    let app = TestApp::new().await;
    let user = create_test_user(&app.server, "alice").await;

    let response = app
        .server
        .get("/api/v1/user/me")
        .add_header(header::AUTHORIZATION, auth_header(&user.token))
        .await;

    crate::assert_status!(response, StatusCode::OK);
    let me: UserResponse = response.json();
    assert_eq!(
        me,
        UserResponse {
            id: user.id,
            user_name: "alice".to_string(),
            email: "alice@example.com".to_string(),
        }
    );
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    let app = TestApp::new().await;
    let user = create_test_user(&app.server, "alice").await;
    let forged = SessionKeys::new("not-the-server-secret")
        .create_token(user.id, "alice")
        .unwrap();

    let response = app
        .server
        .get("/api/v1/user/me")
        .add_header(header::AUTHORIZATION, auth_header(&forged))
        .await;

    assert_error(&response, StatusCode::UNAUTHORIZED, "invalid token");
}

#[tokio::test]
async fn test_delete_account_cascades() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app.server, "alice").await;
    let bob = create_test_user(&app.server, "bob").await;

    app.server
        .post("/api/v1/user/profile")
        .add_header(header::AUTHORIZATION, auth_header(&alice.token))
        .json(&json!({ "first_name": "Alice" }))
        .await;
    let post: serde_json::Value = app
        .server
        .post("/api/v1/post/register")
        .add_header(header::AUTHORIZATION, auth_header(&alice.token))
        .json(&json!({ "title": "hello" }))
        .await
        .json();
    let post_id = post["post"]["id"].as_i64().unwrap();
    app.server
        .post(&format!("/api/v1/post/{post_id}/comments"))
        .add_header(header::AUTHORIZATION, auth_header(&bob.token))
        .json(&json!({ "text": "welcome" }))
        .await;

    let response = app
        .server
        .delete("/api/v1/user")
        .add_header(header::AUTHORIZATION, auth_header(&alice.token))
        .await;
    crate::assert_status!(response, StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["user_id"].as_i64(), Some(alice.id));

    assert_eq!(count_live_rows(app.pool(), "users").await, 1);
    assert_eq!(count_live_rows(app.pool(), "user_profiles").await, 0);
    assert_eq!(count_live_rows(app.pool(), "posts").await, 0);
    assert_eq!(count_live_rows(app.pool(), "post_comments").await, 0);

    // the old token no longer works
    let me = app
        .server
        .get("/api/v1/user/me")
        .add_header(header::AUTHORIZATION, auth_header(&alice.token))
        .await;
    crate::assert_status!(me, StatusCode::UNAUTHORIZED);

    let profile = app.server.get("/api/v1/user/profile/alice").await;
    assert_error(&profile, StatusCode::NOT_FOUND, "user not found");
}
