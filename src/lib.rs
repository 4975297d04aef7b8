//! Blogpost - Main Library
//!
//! A blogging backend: user registration and login, profiles, posts and
//! comments, served over HTTP by Axum and stored in SQLite.
//!
//! # Module Structure
//!
//! - **`backend`** - Server-side code
//!   - Axum router under `/api/v1`
//!   - bcrypt passwords, HS256 JWT sessions, bearer-token middleware
//!   - sqlx persistence with soft deletes and transactional cascades
//!
//! # Usage
//!
//! ```rust,no_run
//! use blogpost::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! | Variable | Default |
//! |---|---|
//! | `JWT_SECRET` | required |
//! | `DATABASE_URL` | `sqlite://data.db` |
//! | `SERVER_PORT` | `8080` |
//! | `BCRYPT_COST` | `12` |
//! | `DATABASE_MAX_CONNECTIONS` | `5` |

/// Backend server-side code
pub mod backend;
