/**
 * Register Handler
 *
 * This module implements the user registration handler for POST /api/v1/user/register.
 *
 * # Registration Process
 *
 * 1. Validate user name, email and password
 * 2. Check that neither the user name nor the email is taken
 * 3. Hash password using bcrypt
 * 4. Create user in database
 * 5. Generate JWT token
 * 6. Return token and user info
 *
 * # Security
 *
 * - Passwords are hashed using bcrypt with the configured cost
 * - Passwords are never returned in responses
 * - JWT tokens are generated with 24-hour expiration
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::handlers::types::{AuthResponse, RegisterRequest};
use crate::backend::auth::users::{create_user, get_user_by_email, get_user_by_username};
use crate::backend::error::{is_unique_violation, BackendError};
use crate::backend::server::state::AppState;

/// Register handler
///
/// # Returns
///
/// `201 Created` with the token and the new user
///
/// # Errors
///
/// * `400 Bad Request` - Malformed body or a field failed validation
/// * `409 Conflict` - User name or email already registered
/// * `500 Internal Server Error` - Hashing, persistence or token signing failed
///
/// # Example Request
///
/// ```http
/// POST /api/v1/user/register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "user_name": "alice",
///   "email": "alice@example.com",
///   "password": "secret1"
/// }
/// ```
pub async fn register(
    State(app_state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AuthResponse>), BackendError> {
    let Json(request) = payload?;
    request.validate()?;

    tracing::info!("Register request for user: {}", request.user_name);

    if get_user_by_username(&app_state.db_pool, &request.user_name)
        .await?
        .is_some()
    {
        tracing::warn!("User name already exists: {}", request.user_name);
        return Err(BackendError::conflict("user name already taken"));
    }

    if get_user_by_email(&app_state.db_pool, &request.email)
        .await?
        .is_some()
    {
        tracing::warn!("Email already exists: {}", request.email);
        return Err(BackendError::conflict("email already registered"));
    }

    let password_hash = app_state.passwords.hash_password(&request.password)?;

    // soft-deleted rows still hold their unique name and email
    let user = create_user(
        &app_state.db_pool,
        &request.user_name,
        &request.email,
        &password_hash,
    )
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            tracing::warn!("Registration raced or reused a deleted account: {}", request.user_name);
            BackendError::conflict("user name or email already registered")
        } else {
            BackendError::from(e)
        }
    })?;

    let token = app_state.sessions.create_token(user.id, &user.user_name)?;

    tracing::info!("User registered successfully: {} ({})", user.user_name, user.id);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "user registered successfully".to_string(),
            token,
            user: user.into(),
        }),
    ))
}
