/**
 * User Routes
 *
 * # Public
 * - `POST /user/register` - Create an account
 * - `POST /user/login` - Log in with email or user name
 * - `GET /user/profile/{user_name}` - Fetch a profile
 *
 * # Bearer token required
 * - `POST /user/profile` - Create or update own profile
 * - `GET /user/me` - Current user
 * - `DELETE /user` - Delete own account
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post},
    Router,
};

use crate::backend::auth::{delete_account, get_me, login, register};
use crate::backend::middleware::auth_middleware;
use crate::backend::profiles::{show_profile, upsert_profile};
use crate::backend::server::state::AppState;

/// Configure user, login and profile routes
pub fn configure_user_routes(app_state: &AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/user/register", post(register))
        .route("/user/login", post(login))
        .route("/user/profile/{user_name}", get(show_profile));

    let protected = Router::new()
        .route("/user", delete(delete_account))
        .route("/user/me", get(get_me))
        .route("/user/profile", post(upsert_profile))
        .route_layer(from_fn_with_state(app_state.clone(), auth_middleware));

    public.merge(protected)
}
