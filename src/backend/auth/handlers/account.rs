/**
 * Delete Account Handler
 *
 * DELETE /api/v1/user removes the caller's account. The user, their profile,
 * their posts and the comments on those posts are soft-deleted in a single
 * transaction; tokens issued for the account stop working immediately.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::AccountDeletedResponse;
use crate::backend::auth::users::delete_user;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;

/// Delete the authenticated user's account
///
/// # Errors
///
/// * `404 Not Found` - The account is already gone
/// * `500 Internal Server Error` - The transaction failed and was rolled back
pub async fn delete_account(
    State(app_state): State<AppState>,
    AuthUser(identity): AuthUser,
) -> Result<Json<AccountDeletedResponse>, BackendError> {
    if !delete_user(&app_state.db_pool, identity.user_id).await? {
        tracing::warn!("Account already deleted: {}", identity.user_id);
        return Err(BackendError::not_found("user"));
    }

    tracing::info!("Account deleted: {} ({})", identity.user_name, identity.user_id);

    Ok(Json(AccountDeletedResponse {
        message: "account deleted".to_string(),
        user_id: identity.user_id,
    }))
}
