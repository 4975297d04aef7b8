//! Database operations for user profiles

use chrono::Utc;
use sqlx::SqlitePool;

use super::types::{ProfileRequest, UserProfile};

/// Outcome of [`upsert_profile`]
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileUpsert {
    Created(UserProfile),
    Updated(UserProfile),
}

impl ProfileUpsert {
    pub fn into_profile(self) -> UserProfile {
        match self {
            Self::Created(profile) | Self::Updated(profile) => profile,
        }
    }
}

/// Get the live profile of a user
pub async fn get_profile_by_user_id(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Option<UserProfile>, sqlx::Error> {
    let profile = sqlx::query_as::<_, UserProfile>(
        r#"
        SELECT id, user_id, first_name, last_name, bio, profile_pic, created_at, updated_at, deleted_at
        FROM user_profiles
        WHERE user_id = $1 AND deleted_at IS NULL
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(profile)
}

/// Create the user's profile, or merge the request into the existing one
///
/// On update only non-empty request fields replace the stored values. The
/// whole upsert is one statement, so the write lock is taken before
/// anything is read and concurrent writers wait on the busy timeout
/// instead of failing. A row whose `created_at` still equals `updated_at`
/// was inserted by this call.
pub async fn upsert_profile(
    pool: &SqlitePool,
    user_id: i64,
    request: &ProfileRequest,
) -> Result<ProfileUpsert, sqlx::Error> {
    let profile = sqlx::query_as::<_, UserProfile>(
        r#"
        INSERT INTO user_profiles (user_id, first_name, last_name, bio, profile_pic, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $6)
        ON CONFLICT (user_id) DO UPDATE SET
            first_name = CASE WHEN excluded.first_name <> '' THEN excluded.first_name ELSE user_profiles.first_name END,
            last_name = CASE WHEN excluded.last_name <> '' THEN excluded.last_name ELSE user_profiles.last_name END,
            bio = CASE WHEN excluded.bio <> '' THEN excluded.bio ELSE user_profiles.bio END,
            profile_pic = CASE WHEN excluded.profile_pic <> '' THEN excluded.profile_pic ELSE user_profiles.profile_pic END,
            updated_at = excluded.updated_at
        RETURNING id, user_id, first_name, last_name, bio, profile_pic, created_at, updated_at, deleted_at
        "#,
    )
    .bind(user_id)
    .bind(&request.first_name)
    .bind(&request.last_name)
    .bind(&request.bio)
    .bind(&request.profile_pic)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    if profile.created_at == profile.updated_at {
        Ok(ProfileUpsert::Created(profile))
    } else {
        Ok(ProfileUpsert::Updated(profile))
    }
}
