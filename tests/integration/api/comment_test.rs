//! Comment API integration tests

use axum::http::{header, StatusCode};
use axum_test::TestServer;
use serde_json::json;

use crate::common::{assert_error, auth_header, create_test_user, TestApp, TestUser};
use blogpost::backend::posts::types::{
    CommentCreatedResponse, CommentDeletedResponse, PostCreatedResponse,
};

async fn create_post(server: &TestServer, user: &TestUser) -> i64 {
    let body: PostCreatedResponse = server
        .post("/api/v1/post/register")
        .add_header(header::AUTHORIZATION, auth_header(&user.token))
        .json(&json!({ "title": "post" }))
        .await
        .json();
    body.post.id
}

async fn create_comment(server: &TestServer, user: &TestUser, post_id: i64) -> i64 {
    let response = server
        .post(&format!("/api/v1/post/{post_id}/comments"))
        .add_header(header::AUTHORIZATION, auth_header(&user.token))
        .json(&json!({ "text": "a comment" }))
        .await;
    crate::assert_status!(response, StatusCode::CREATED);
    let body: CommentCreatedResponse = response.json();
    body.comment.id
}

#[tokio::test]
async fn test_create_comment() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app.server, "alice").await;
    let bob = create_test_user(&app.server, "bob").await;
    let post_id = create_post(&app.server, &alice).await;

    let response = app
        .server
        .post(&format!("/api/v1/post/{post_id}/comments"))
        .add_header(header::AUTHORIZATION, auth_header(&bob.token))
        .json(&json!({ "text": "first!" }))
        .await;

    crate::assert_status!(response, StatusCode::CREATED);
    let body: CommentCreatedResponse = response.json();
    assert_eq!(body.message, "Comment added successfully");
    assert_eq!(body.comment.user_id, bob.id);
    assert_eq!(body.comment.post_id, post_id);
    assert_eq!(body.comment.text, "first!");
}

#[tokio::test]
async fn test_comment_on_missing_post() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app.server, "alice").await;

    let response = app
        .server
        .post("/api/v1/post/42/comments")
        .add_header(header::AUTHORIZATION, auth_header(&alice.token))
        .json(&json!({ "text": "hello?" }))
        .await;

    assert_error(&response, StatusCode::NOT_FOUND, "post not found");
}

#[tokio::test]
async fn test_comment_text_required() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app.server, "alice").await;
    let post_id = create_post(&app.server, &alice).await;

    let response = app
        .server
        .post(&format!("/api/v1/post/{post_id}/comments"))
        .add_header(header::AUTHORIZATION, auth_header(&alice.token))
        .json(&json!({}))
        .await;

    assert_error(&response, StatusCode::BAD_REQUEST, "text: is required");
}

#[tokio::test]
async fn test_comment_author_can_delete() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app.server, "alice").await;
    let bob = create_test_user(&app.server, "bob").await;
    let post_id = create_post(&app.server, &alice).await;
    let comment_id = create_comment(&app.server, &bob, post_id).await;

    let response = app
        .server
        .delete(&format!("/api/v1/post/{post_id}/comments/{comment_id}"))
        .add_header(header::AUTHORIZATION, auth_header(&bob.token))
        .await;

    crate::assert_status!(response, StatusCode::OK);
    let body: CommentDeletedResponse = response.json();
    assert_eq!(body.comment_id, comment_id);

    let again = app
        .server
        .delete(&format!("/api/v1/post/{post_id}/comments/{comment_id}"))
        .add_header(header::AUTHORIZATION, auth_header(&bob.token))
        .await;
    assert_error(&again, StatusCode::NOT_FOUND, "comment not found");
}

#[tokio::test]
async fn test_post_author_can_delete_any_comment() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app.server, "alice").await;
    let bob = create_test_user(&app.server, "bob").await;
    let post_id = create_post(&app.server, &alice).await;
    let comment_id = create_comment(&app.server, &bob, post_id).await;

    let response = app
        .server
        .delete(&format!("/api/v1/post/{post_id}/comments/{comment_id}"))
        .add_header(header::AUTHORIZATION, auth_header(&alice.token))
        .await;

    crate::assert_status!(response, StatusCode::OK);
}

#[tokio::test]
async fn test_stranger_cannot_delete_comment() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app.server, "alice").await;
    let bob = create_test_user(&app.server, "bob").await;
    let carol = create_test_user(&app.server, "carol").await;
    let post_id = create_post(&app.server, &alice).await;
    let comment_id = create_comment(&app.server, &bob, post_id).await;

    let response = app
        .server
        .delete(&format!("/api/v1/post/{post_id}/comments/{comment_id}"))
        .add_header(header::AUTHORIZATION, auth_header(&carol.token))
        .await;

    assert_error(
        &response,
        StatusCode::FORBIDDEN,
        "not allowed to delete this comment",
    );
}

#[tokio::test]
async fn test_comment_under_wrong_post_is_not_found() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app.server, "alice").await;
    let first = create_post(&app.server, &alice).await;
    let second = create_post(&app.server, &alice).await;
    let comment_id = create_comment(&app.server, &alice, first).await;

    let response = app
        .server
        .delete(&format!("/api/v1/post/{second}/comments/{comment_id}"))
        .add_header(header::AUTHORIZATION, auth_header(&alice.token))
        .await;

    assert_error(&response, StatusCode::NOT_FOUND, "comment not found");
}
