/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration and
 * opening the SQLite database.
 *
 * # Configuration Sources
 *
 * Configuration is read from environment variables (after `.env` has been
 * loaded by `main`). Everything except `JWT_SECRET` has a default; a missing
 * secret stops the server before it binds.
 *
 * | Variable | Default |
 * |---|---|
 * | `JWT_SECRET` | required |
 * | `DATABASE_URL` | `sqlite://data.db` |
 * | `SERVER_PORT` | `8080` |
 * | `BCRYPT_COST` | `12` |
 * | `DATABASE_MAX_CONNECTIONS` | `5` |
 */

use std::net::SocketAddr;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use thiserror::Error;

use crate::backend::auth::passwords::{MAX_COST, MIN_COST};

/// Default SQLite database location
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data.db";

/// Default listen port
pub const DEFAULT_PORT: u16 = 8080;

/// Default pool size for file-backed databases
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// SQLite connection string
    pub database_url: String,
    /// HS256 signing secret
    pub jwt_secret: String,
    /// Address the HTTP listener binds to
    pub bind_addr: SocketAddr,
    /// bcrypt cost factor for new password hashes
    pub bcrypt_cost: u32,
    /// Pool size (ignored for in-memory databases)
    pub max_connections: u32,
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(secret) = lookup("JWT_SECRET") {
            builder = builder.jwt_secret(secret);
        }
        if let Some(url) = lookup("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(port) = lookup("SERVER_PORT") {
            let port = parse_var::<u16>("SERVER_PORT", &port)?;
            builder = builder.bind_addr(SocketAddr::from(([0, 0, 0, 0], port)));
        }
        if let Some(cost) = lookup("BCRYPT_COST") {
            builder = builder.bcrypt_cost(parse_var("BCRYPT_COST", &cost)?);
        }
        if let Some(max) = lookup("DATABASE_MAX_CONNECTIONS") {
            builder = builder.max_connections(parse_var("DATABASE_MAX_CONNECTIONS", &max)?);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.trim().is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if !(MIN_COST..=MAX_COST).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                name: "BCRYPT_COST",
                value: self.bcrypt_cost.to_string(),
            });
        }
        if self.max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                name: "DATABASE_MAX_CONNECTIONS",
                value: "0".to_string(),
            });
        }
        Ok(())
    }

    /// True when the database lives only in memory
    pub fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:") || self.database_url.contains("mode=memory")
    }
}

fn parse_var<T: FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name,
        value: value.to_string(),
    })
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    database_url: Option<String>,
    jwt_secret: Option<String>,
    bind_addr: Option<SocketAddr>,
    bcrypt_cost: Option<u32>,
    max_connections: Option<u32>,
}

impl ServerConfigBuilder {
    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the listen address
    pub fn bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = Some(addr);
        self
    }

    /// Set the bcrypt cost
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Set the pool size
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = Some(max);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let config = ServerConfig {
            database_url: self
                .database_url
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            jwt_secret: self.jwt_secret.ok_or(ConfigError::MissingValue("JWT_SECRET"))?,
            bind_addr: self
                .bind_addr
                .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT))),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(bcrypt::DEFAULT_COST),
            max_connections: self.max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Open the database and run migrations
///
/// This function:
/// 1. Parses `database_url` (creating the file if it does not exist)
/// 2. Creates the connection pool with foreign keys enforced
/// 3. Runs the embedded migrations from `migrations/`
///
/// An in-memory database is kept on a single long-lived connection, since
/// every new SQLite connection would otherwise see an empty database.
pub async fn load_database(config: &ServerConfig) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool_options = if config.is_in_memory() {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(config.max_connections)
    };

    let pool = pool_options.connect_with(options).await?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}

/// Fresh migrated in-memory database for unit tests
#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    let config = ServerConfig::builder()
        .database_url("sqlite::memory:")
        .jwt_secret("test-secret")
        .bcrypt_cost(MIN_COST)
        .build()
        .expect("valid test config");
    load_database(&config).await.expect("in-memory database")
}

/// Migrated file database inside `dir`, for tests that need more than one connection
#[cfg(test)]
pub(crate) async fn test_file_pool(dir: &tempfile::TempDir) -> SqlitePool {
    let url = format!("sqlite://{}", dir.path().join("blog.db").display());
    let config = ServerConfig::builder()
        .database_url(url)
        .jwt_secret("test-secret")
        .bcrypt_cost(MIN_COST)
        .build()
        .expect("valid test config");
    load_database(&config).await.expect("file database")
}
