/**
 * User Model and Database Operations
 *
 * This module handles user rows. Every lookup ignores soft-deleted users.
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

/// User struct representing a user in the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID
    pub id: i64,
    /// User name (unique)
    pub user_name: String,
    /// User email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `user_name` - User's chosen name
/// * `email` - User email
/// * `password_hash` - Hashed password
///
/// # Returns
/// Created user, or a unique-violation database error if the name or
/// email is already taken
pub async fn create_user(
    pool: &SqlitePool,
    user_name: &str,
    email: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (user_name, email, password_hash, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $4)
        RETURNING id, user_name, email, password_hash, created_at, updated_at, deleted_at
        "#,
    )
    .bind(user_name)
    .bind(email)
    .bind(password_hash)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by email
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, user_name, email, password_hash, created_at, updated_at, deleted_at
        FROM users
        WHERE email = $1 AND deleted_at IS NULL
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by user name
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_username(
    pool: &SqlitePool,
    user_name: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, user_name, email, password_hash, created_at, updated_at, deleted_at
        FROM users
        WHERE user_name = $1 AND deleted_at IS NULL
        "#,
    )
    .bind(user_name)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by ID
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, user_name, email, password_hash, created_at, updated_at, deleted_at
        FROM users
        WHERE id = $1 AND deleted_at IS NULL
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Resolve a login credential: email first, then user name
pub async fn find_user_by_credential(
    pool: &SqlitePool,
    credential: &str,
) -> Result<Option<User>, sqlx::Error> {
    if let Some(user) = get_user_by_email(pool, credential).await? {
        return Ok(Some(user));
    }
    get_user_by_username(pool, credential).await
}

/// Soft-delete a user together with their profile, posts and the
/// comments on those posts, in one transaction
///
/// Comments the user left on other people's posts are kept.
///
/// # Returns
/// `false` if no live user has this id
pub async fn delete_user(pool: &SqlitePool, user_id: i64) -> Result<bool, sqlx::Error> {
    let now = Utc::now();
    let mut tx = pool.begin().await?;

    let deleted = sqlx::query(
        "UPDATE users SET deleted_at = $1, updated_at = $1 WHERE id = $2 AND deleted_at IS NULL",
    )
    .bind(now)
    .bind(user_id)
    .execute(&mut *tx)
    .await?;

    if deleted.rows_affected() == 0 {
        tx.rollback().await?;
        return Ok(false);
    }

    sqlx::query(
        r#"
        UPDATE post_comments SET deleted_at = $1, updated_at = $1
        WHERE deleted_at IS NULL
          AND post_id IN (SELECT id FROM posts WHERE user_id = $2 AND deleted_at IS NULL)
        "#,
    )
    .bind(now)
    .bind(user_id)
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        "UPDATE posts SET deleted_at = $1, updated_at = $1 WHERE user_id = $2 AND deleted_at IS NULL",
    )
    .bind(now)
    .bind(user_id)
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        "UPDATE user_profiles SET deleted_at = $1, updated_at = $1 WHERE user_id = $2 AND deleted_at IS NULL",
    )
    .bind(now)
    .bind(user_id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(true)
}
