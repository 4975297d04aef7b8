//! Application test fixture
//!
//! Every `TestApp` owns a fresh, migrated in-memory SQLite database and a
//! `TestServer` driving the real router, so tests are fully isolated.

use axum_test::TestServer;
use blogpost::backend::auth::passwords::MIN_COST;
use blogpost::backend::routes::create_router;
use blogpost::backend::server::config::load_database;
use blogpost::backend::server::{AppState, ServerConfig};
use sqlx::SqlitePool;

/// Signing secret used by every test app
pub const TEST_SECRET: &str = "integration-test-secret";

/// Configuration for an isolated in-memory app
pub fn test_config() -> ServerConfig {
    ServerConfig::builder()
        .database_url("sqlite::memory:")
        .jwt_secret(TEST_SECRET)
        .bcrypt_cost(MIN_COST)
        .build()
        .expect("valid test configuration")
}

/// Test application fixture
pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
}

impl TestApp {
    /// Create a new app over an empty database
    pub async fn new() -> Self {
        let config = test_config();
        let pool = load_database(&config)
            .await
            .expect("Failed to open in-memory database");
        let state = AppState::from_config(pool, &config);
        let server =
            TestServer::new(create_router(state.clone())).expect("Failed to start test server");

        Self { server, state }
    }

    /// Database pool shared with the server, for direct assertions
    pub fn pool(&self) -> &SqlitePool {
        &self.state.db_pool
    }
}

/// Count rows of `table` that have not been soft-deleted
pub async fn count_live_rows(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!(
        "SELECT COUNT(*) FROM {table} WHERE deleted_at IS NULL"
    ))
    .fetch_one(pool)
    .await
    .expect("Failed to count rows")
}
