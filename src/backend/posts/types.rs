//! Post and comment models with their request/response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::error::BackendError;
use crate::backend::validation;

/// A blog post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    /// Author
    pub user_id: i64,
    pub pic_address: String,
    pub title: String,
    pub caption: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip)]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// A comment on a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct PostComment {
    pub id: i64,
    /// Author of the comment
    pub user_id: i64,
    pub post_id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip)]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// A post with its comments preloaded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostWithComments {
    #[serde(flatten)]
    pub post: Post,
    pub comments: Vec<PostComment>,
}

/// Body of `POST /post/register`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatePostRequest {
    pub pic_address: String,
    pub title: String,
    pub caption: String,
}

impl CreatePostRequest {
    pub fn validate(&self) -> Result<(), BackendError> {
        validation::max_length("title", &self.title, 250)?;
        validation::max_length("caption", &self.caption, 1000)?;
        Ok(())
    }
}

/// Body of `POST /post/{post_id}/comments`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateCommentRequest {
    pub text: String,
}

impl CreateCommentRequest {
    pub fn validate(&self) -> Result<(), BackendError> {
        validation::required("text", &self.text)?;
        validation::max_length("text", &self.text, 250)?;
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PostListResponse {
    pub posts: Vec<PostWithComments>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PostCreatedResponse {
    pub message: String,
    pub post: Post,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PostDeletedResponse {
    pub message: String,
    pub post_id: i64,
    /// Number of live comments removed with the post
    pub comments_deleted: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CommentCreatedResponse {
    pub message: String,
    pub comment: PostComment,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CommentDeletedResponse {
    pub message: String,
    pub comment_id: i64,
}
