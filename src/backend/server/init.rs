/**
 * Server Initialization
 *
 * This module handles the setup of the Axum HTTP server: opening the
 * database, running migrations, building the state and the router.
 *
 * # Initialization Process
 *
 * 1. Open the SQLite pool and run the embedded migrations
 * 2. Build `AppState` from the pool and the configuration
 * 3. Create and configure the router
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails when the database cannot be opened or migrated. There is no
/// degraded mode: every endpoint needs the database.
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, sqlx::Error> {
    tracing::info!("Initializing blog backend");

    let db_pool = load_database(config).await?;
    tracing::info!("Database ready at {}", config.database_url);

    let app_state = AppState::from_config(db_pool, config);

    Ok(create_router(app_state))
}
