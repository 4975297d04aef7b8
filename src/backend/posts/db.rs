//! Database operations for posts and comments
//!
//! Deletes are soft: they stamp `deleted_at`, and every read filters those
//! rows out.

use std::collections::HashMap;

use chrono::Utc;
use sqlx::SqlitePool;

use super::types::{CreatePostRequest, Post, PostComment, PostWithComments};

/// Create a post authored by `user_id`
pub async fn create_post(
    pool: &SqlitePool,
    user_id: i64,
    request: &CreatePostRequest,
) -> Result<Post, sqlx::Error> {
    let now = Utc::now();

    let post = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (user_id, pic_address, title, caption, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $5)
        RETURNING id, user_id, pic_address, title, caption, created_at, updated_at, deleted_at
        "#,
    )
    .bind(user_id)
    .bind(&request.pic_address)
    .bind(&request.title)
    .bind(&request.caption)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(post)
}

/// Get a live post by ID
pub async fn get_post_by_id(pool: &SqlitePool, post_id: i64) -> Result<Option<Post>, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, user_id, pic_address, title, caption, created_at, updated_at, deleted_at
        FROM posts
        WHERE id = $1 AND deleted_at IS NULL
        "#,
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// All live posts in ascending id order, each with its live comments
pub async fn list_posts_with_comments(
    pool: &SqlitePool,
) -> Result<Vec<PostWithComments>, sqlx::Error> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, user_id, pic_address, title, caption, created_at, updated_at, deleted_at
        FROM posts
        WHERE deleted_at IS NULL
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    let comments = sqlx::query_as::<_, PostComment>(
        r#"
        SELECT c.id, c.user_id, c.post_id, c.text, c.created_at, c.updated_at, c.deleted_at
        FROM post_comments c
        JOIN posts p ON p.id = c.post_id
        WHERE c.deleted_at IS NULL AND p.deleted_at IS NULL
        ORDER BY c.id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    let mut by_post: HashMap<i64, Vec<PostComment>> = HashMap::new();
    for comment in comments {
        by_post.entry(comment.post_id).or_default().push(comment);
    }

    Ok(posts
        .into_iter()
        .map(|post| {
            let comments = by_post.remove(&post.id).unwrap_or_default();
            PostWithComments { post, comments }
        })
        .collect())
}

/// Soft-delete a post and then its comments, in one transaction
///
/// # Returns
/// The number of comments deleted, or `None` if the post was not live
pub async fn delete_post(pool: &SqlitePool, post_id: i64) -> Result<Option<u64>, sqlx::Error> {
    let now = Utc::now();
    let mut tx = pool.begin().await?;

    let deleted = sqlx::query(
        "UPDATE posts SET deleted_at = $1, updated_at = $1 WHERE id = $2 AND deleted_at IS NULL",
    )
    .bind(now)
    .bind(post_id)
    .execute(&mut *tx)
    .await?;

    if deleted.rows_affected() == 0 {
        tx.rollback().await?;
        return Ok(None);
    }

    let comments = sqlx::query(
        "UPDATE post_comments SET deleted_at = $1, updated_at = $1 WHERE post_id = $2 AND deleted_at IS NULL",
    )
    .bind(now)
    .bind(post_id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(Some(comments.rows_affected()))
}

/// Create a comment by `user_id` on `post_id`
///
/// Returns `None` when the post does not exist or is deleted. The existence
/// check and the insert are one statement, so a comment never lands on a post
/// whose delete has already committed.
pub async fn create_comment(
    pool: &SqlitePool,
    user_id: i64,
    post_id: i64,
    text: &str,
) -> Result<Option<PostComment>, sqlx::Error> {
    let now = Utc::now();

    let comment = sqlx::query_as::<_, PostComment>(
        r#"
        INSERT INTO post_comments (user_id, post_id, text, created_at, updated_at)
        SELECT $1, $2, $3, $4, $4
        WHERE EXISTS (SELECT 1 FROM posts WHERE id = $2 AND deleted_at IS NULL)
        RETURNING id, user_id, post_id, text, created_at, updated_at, deleted_at
        "#,
    )
    .bind(user_id)
    .bind(post_id)
    .bind(text)
    .bind(now)
    .fetch_optional(pool)
    .await?;

    Ok(comment)
}

/// Get a live comment by ID
pub async fn get_comment_by_id(
    pool: &SqlitePool,
    comment_id: i64,
) -> Result<Option<PostComment>, sqlx::Error> {
    let comment = sqlx::query_as::<_, PostComment>(
        r#"
        SELECT id, user_id, post_id, text, created_at, updated_at, deleted_at
        FROM post_comments
        WHERE id = $1 AND deleted_at IS NULL
        "#,
    )
    .bind(comment_id)
    .fetch_optional(pool)
    .await?;

    Ok(comment)
}

/// Soft-delete a comment
///
/// # Returns
/// `false` if the comment was not live
pub async fn delete_comment(pool: &SqlitePool, comment_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE post_comments SET deleted_at = $1, updated_at = $1 WHERE id = $2 AND deleted_at IS NULL",
    )
    .bind(Utc::now())
    .bind(comment_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Count the live comments of a post
pub async fn count_comments_for_post(pool: &SqlitePool, post_id: i64) -> Result<i64, sqlx::Error> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM post_comments WHERE post_id = $1 AND deleted_at IS NULL",
    )
    .bind(post_id)
    .fetch_one(pool)
    .await?;

    Ok(count)
}
