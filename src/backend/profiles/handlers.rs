//! HTTP handlers for user profiles

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::Json,
};

use super::db::{self, get_profile_by_user_id, ProfileUpsert};
use super::types::{ProfileRequest, ProfileResponse, ProfileSavedResponse};
use crate::backend::auth::users::get_user_by_username;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;

/// GET /api/v1/user/profile/{user_name}
///
/// 404 when the user does not exist or has not written a profile yet.
pub async fn show_profile(
    State(app_state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<ProfileResponse>, BackendError> {
    let Path(user_name) = path?;

    let user = get_user_by_username(&app_state.db_pool, &user_name)
        .await?
        .ok_or_else(|| BackendError::not_found("user"))?;

    let profile = get_profile_by_user_id(&app_state.db_pool, user.id)
        .await?
        .ok_or_else(|| BackendError::not_found("profile"))?;

    Ok(Json(ProfileResponse { profile }))
}

/// POST /api/v1/user/profile
///
/// Creates the caller's profile (201) or updates it (200). On update only
/// non-empty fields replace the stored values.
pub async fn upsert_profile(
    State(app_state): State<AppState>,
    AuthUser(identity): AuthUser,
    payload: Result<Json<ProfileRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ProfileSavedResponse>), BackendError> {
    let Json(request) = payload?;
    request.validate()?;

    let outcome = db::upsert_profile(&app_state.db_pool, identity.user_id, &request).await?;

    let (status, message) = match &outcome {
        ProfileUpsert::Created(_) => (StatusCode::CREATED, "profile created"),
        ProfileUpsert::Updated(_) => (StatusCode::OK, "profile updated"),
    };
    tracing::info!("{} for user {}", message, identity.user_name);

    Ok((
        status,
        Json(ProfileSavedResponse {
            message: message.to_string(),
            profile: outcome.into_profile(),
        }),
    ))
}
