//! HTTP handlers for posts and comments
//!
//! Authors always come from the authenticated identity, never from the
//! request body.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::Json,
};

use super::db;
use super::types::{
    CommentCreatedResponse, CommentDeletedResponse, CreateCommentRequest, CreatePostRequest,
    PostCreatedResponse, PostDeletedResponse, PostListResponse,
};
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;

/// GET /api/v1/post
pub async fn list_posts(
    State(app_state): State<AppState>,
) -> Result<Json<PostListResponse>, BackendError> {
    let posts = db::list_posts_with_comments(&app_state.db_pool).await?;
    Ok(Json(PostListResponse { posts }))
}

/// POST /api/v1/post/register
pub async fn create_post(
    State(app_state): State<AppState>,
    AuthUser(identity): AuthUser,
    payload: Result<Json<CreatePostRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PostCreatedResponse>), BackendError> {
    let Json(request) = payload?;
    request.validate()?;

    let post = db::create_post(&app_state.db_pool, identity.user_id, &request).await?;
    tracing::info!("Post {} created by {}", post.id, identity.user_name);

    Ok((
        StatusCode::CREATED,
        Json(PostCreatedResponse {
            message: "post created".to_string(),
            post,
        }),
    ))
}

/// DELETE /api/v1/post/{post_id}
///
/// Only the author may delete a post. The post and its comments go in one
/// transaction.
pub async fn delete_post(
    State(app_state): State<AppState>,
    AuthUser(identity): AuthUser,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<PostDeletedResponse>, BackendError> {
    let Path(post_id) = path?;

    let post = db::get_post_by_id(&app_state.db_pool, post_id)
        .await?
        .ok_or_else(|| BackendError::not_found("post"))?;

    if post.user_id != identity.user_id {
        tracing::warn!("User {} tried to delete post {} of user {}", identity.user_id, post.id, post.user_id);
        return Err(BackendError::forbidden("only the author can delete this post"));
    }

    let comments_deleted = db::delete_post(&app_state.db_pool, post_id)
        .await?
        .ok_or_else(|| BackendError::not_found("post"))?;

    tracing::info!("Post {} deleted with {} comments", post_id, comments_deleted);

    Ok(Json(PostDeletedResponse {
        message: "post deleted".to_string(),
        post_id,
        comments_deleted,
    }))
}

/// POST /api/v1/post/{post_id}/comments
pub async fn create_comment(
    State(app_state): State<AppState>,
    AuthUser(identity): AuthUser,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<CreateCommentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CommentCreatedResponse>), BackendError> {
    let Path(post_id) = path?;
    let Json(request) = payload?;
    request.validate()?;

    let comment = db::create_comment(&app_state.db_pool, identity.user_id, post_id, &request.text)
        .await?
        .ok_or_else(|| BackendError::not_found("post"))?;
    tracing::info!("Comment {} added to post {} by {}", comment.id, post_id, identity.user_name);

    Ok((
        StatusCode::CREATED,
        Json(CommentCreatedResponse {
            message: "Comment added successfully".to_string(),
            comment,
        }),
    ))
}

/// DELETE /api/v1/post/{post_id}/comments/{comment_id}
///
/// Allowed for the comment's author and for the author of the post it is on.
pub async fn delete_comment(
    State(app_state): State<AppState>,
    AuthUser(identity): AuthUser,
    path: Result<Path<(i64, i64)>, PathRejection>,
) -> Result<Json<CommentDeletedResponse>, BackendError> {
    let Path((post_id, comment_id)) = path?;

    let comment = db::get_comment_by_id(&app_state.db_pool, comment_id)
        .await?
        .filter(|comment| comment.post_id == post_id)
        .ok_or_else(|| BackendError::not_found("comment"))?;

    let post = db::get_post_by_id(&app_state.db_pool, post_id)
        .await?
        .ok_or_else(|| BackendError::not_found("post"))?;

    if comment.user_id != identity.user_id && post.user_id != identity.user_id {
        tracing::warn!("User {} tried to delete comment {}", identity.user_id, comment_id);
        return Err(BackendError::forbidden("not allowed to delete this comment"));
    }

    if !db::delete_comment(&app_state.db_pool, comment_id).await? {
        return Err(BackendError::not_found("comment"));
    }

    tracing::info!("Comment {} deleted by {}", comment_id, identity.user_name);

    Ok(Json(CommentDeletedResponse {
        message: "comment deleted".to_string(),
        comment_id,
    }))
}
