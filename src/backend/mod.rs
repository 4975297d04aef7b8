//! Backend Module
//!
//! This module contains all server-side code for the blog: an Axum HTTP
//! server over SQLite with bearer-token authentication.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Users, password hashing, JWT sessions, account handlers
//! - **`middleware`** - Bearer-token authentication
//! - **`profiles`** - User profiles
//! - **`posts`** - Posts and comments
//! - **`validation`** - Field rules for request bodies
//! - **`error`** - `BackendError` and its HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Config, state and initialization
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! ├── profiles/       - Profile model, queries and handlers
//! ├── posts/          - Post/comment model, queries and handlers
//! ├── validation.rs   - Input validation helpers
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the `SqlitePool`, the session keys and the password
//! hasher. None of it is mutable; the pool provides all synchronization.
//!
//! # Error Handling
//!
//! Every handler returns `Result<_, BackendError>`. Errors render as
//! `{"error": ..., "status": ...}`; internal failures are logged and
//! reported with a generic message.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// User profiles
pub mod profiles;

/// Posts and comments
pub mod posts;

/// Input validation helpers
pub mod validation;

pub use error::BackendError;
pub use server::{create_app, AppState, ServerConfig};
