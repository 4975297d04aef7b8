/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Layout
 *
 * 1. User routes and post routes, nested under `/api/v1`
 * 2. Fallback handlers (JSON 404 for unknown paths, JSON 405 for a known
 *    path with the wrong method)
 * 3. `TraceLayer` around everything for per-request spans
 *
 * Authentication is attached with `route_layer` inside each route group, so
 * it only runs for requests that matched a protected route.
 */

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::routes::post_routes::configure_post_routes;
use crate::backend::routes::user_routes::configure_user_routes;
use crate::backend::server::state::AppState;

/// Common prefix of every endpoint
pub const API_PREFIX: &str = "/api/v1";

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Database pool and credential services
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let api = configure_user_routes(&app_state)
        .merge(configure_post_routes(&app_state))
        .method_not_allowed_fallback(method_not_allowed);

    Router::new()
        .nest(API_PREFIX, api)
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn route_not_found() -> BackendError {
    BackendError::not_found("route")
}

async fn method_not_allowed() -> BackendError {
    BackendError::method_not_allowed()
}
