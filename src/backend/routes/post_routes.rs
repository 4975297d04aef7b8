/**
 * Post Routes
 *
 * # Public
 * - `GET /post` - List posts with their comments
 *
 * # Bearer token required
 * - `POST /post/register` - Create a post
 * - `DELETE /post/{post_id}` - Delete own post and its comments
 * - `POST /post/{post_id}/comments` - Comment on a post
 * - `DELETE /post/{post_id}/comments/{comment_id}` - Delete a comment
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post},
    Router,
};

use crate::backend::middleware::auth_middleware;
use crate::backend::posts::{create_comment, create_post, delete_comment, delete_post, list_posts};
use crate::backend::server::state::AppState;

/// Configure post and comment routes
pub fn configure_post_routes(app_state: &AppState) -> Router<AppState> {
    let public = Router::new().route("/post", get(list_posts));

    let protected = Router::new()
        .route("/post/register", post(create_post))
        .route("/post/{post_id}", delete(delete_post))
        .route("/post/{post_id}/comments", post(create_comment))
        .route("/post/{post_id}/comments/{comment_id}", delete(delete_comment))
        .route_layer(from_fn_with_state(app_state.clone(), auth_middleware));

    public.merge(protected)
}
