/**
 * Application State Management
 *
 * `AppState` is the one value handed to the router. It carries the database
 * pool and the credential services; nothing in it is mutable, so handlers
 * share it freely across requests.
 *
 * The `FromRef` implementations let handlers extract only the part they need:
 *
 * ```rust,ignore
 * use axum::extract::State;
 * use sqlx::SqlitePool;
 *
 * async fn handler(State(pool): State<SqlitePool>) {
 *     // run queries against `pool`
 * }
 * ```
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::passwords::PasswordHasher;
use crate::backend::auth::sessions::SessionKeys;
use crate::backend::server::config::ServerConfig;

/// Shared application state
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: SqlitePool,

    /// Token signing and verification keys
    pub sessions: SessionKeys,

    /// Password hasher with the configured cost
    pub passwords: PasswordHasher,
}

impl AppState {
    /// Assemble state from its parts
    pub fn new(db_pool: SqlitePool, sessions: SessionKeys, passwords: PasswordHasher) -> Self {
        Self {
            db_pool,
            sessions,
            passwords,
        }
    }

    /// Assemble state from an opened pool and the server configuration
    pub fn from_config(db_pool: SqlitePool, config: &ServerConfig) -> Self {
        Self::new(
            db_pool,
            SessionKeys::new(&config.jwt_secret),
            PasswordHasher::new(config.bcrypt_cost),
        )
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for SessionKeys {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}

impl FromRef<AppState> for PasswordHasher {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.passwords
    }
}

/// State over a fresh in-memory database with a fast bcrypt cost
#[cfg(test)]
pub(crate) async fn test_state() -> AppState {
    use crate::backend::auth::passwords::MIN_COST;
    use crate::backend::server::config::test_pool;

    AppState::new(
        test_pool().await,
        SessionKeys::new("test-secret"),
        PasswordHasher::new(MIN_COST),
    )
}
