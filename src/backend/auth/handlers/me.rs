/**
 * Get Current User Handler
 *
 * This module implements the handler for GET /api/v1/user/me, which returns
 * information about the currently authenticated user.
 *
 * The route sits behind the authentication middleware, so the identity is
 * already verified when the handler runs.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - No authenticated identity on the request
/// * `404 Not Found` - The user was deleted after the middleware ran
pub async fn get_me(
    State(app_state): State<AppState>,
    AuthUser(identity): AuthUser,
) -> Result<Json<UserResponse>, BackendError> {
    let user = get_user_by_id(&app_state.db_pool, identity.user_id)
        .await?
        .ok_or_else(|| BackendError::not_found("user"))?;

    Ok(Json(user.into()))
}
