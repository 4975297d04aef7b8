//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for the user account endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Module exports and documentation
//! ├── types.rs     - Request and response types
//! ├── register.rs  - User registration handler
//! ├── login.rs     - User authentication handler
//! ├── me.rs        - Get current user handler
//! └── account.rs   - Account deletion handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/v1/user/register
//! - **`login`** - POST /api/v1/user/login
//! - **`get_me`** - GET /api/v1/user/me (bearer)
//! - **`delete_account`** - DELETE /api/v1/user (bearer)

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Get current user handler
pub mod me;

/// Account deletion handler
pub mod account;

pub use types::{AccountDeletedResponse, AuthResponse, LoginRequest, RegisterRequest, UserResponse};

pub use account::delete_account;
pub use login::login;
pub use me::get_me;
pub use register::register;
