/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /api/v1/user/login.
 *
 * # Authentication Process
 *
 * 1. Look up user by email, then by user name
 * 2. Verify password using bcrypt
 * 3. Generate JWT token
 * 4. Return token and user info
 *
 * # Security
 *
 * - Unknown credentials and wrong passwords produce the same 401 body
 * - User passwords are never returned in responses
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::backend::auth::users::find_user_by_credential;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

const INVALID_CREDENTIALS: &str = "invalid credentials";

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - Malformed body or an empty field
/// * `401 Unauthorized` - If user is not found or password is incorrect
/// * `500 Internal Server Error` - If database query or token generation fails
///
/// # Example Request
///
/// ```http
/// POST /api/v1/user/login HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "credential": "alice@example.com",
///   "password": "secret1"
/// }
/// ```
pub async fn login(
    State(app_state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, BackendError> {
    let Json(request) = payload?;
    request.validate()?;

    tracing::info!("Login request for: {}", request.credential);

    let user = find_user_by_credential(&app_state.db_pool, &request.credential)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", request.credential);
            BackendError::unauthorized(INVALID_CREDENTIALS)
        })?;

    if !app_state
        .passwords
        .verify_password(&user.password_hash, &request.password)
    {
        tracing::warn!("Invalid password for user: {}", user.user_name);
        return Err(BackendError::unauthorized(INVALID_CREDENTIALS));
    }

    let token = app_state.sessions.create_token(user.id, &user.user_name)?;

    tracing::info!("User logged in successfully: {} ({})", user.user_name, user.id);

    Ok(Json(AuthResponse {
        message: "login successful".to_string(),
        token,
        user: user.into(),
    }))
}
