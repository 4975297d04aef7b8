//! Authentication Module
//!
//! This module handles user accounts, credentials and session tokens.
//!
//! # Architecture
//!
//! - **`users`** - User data model and database operations
//! - **`passwords`** - bcrypt hashing with a configurable cost
//! - **`sessions`** - JWT token generation and validation
//! - **`handlers`** - HTTP handlers for the account endpoints
//!
//! # Authentication Flow
//!
//! 1. **Register**: user name, email and password → user created → JWT token returned
//! 2. **Login**: email or user name plus password → credentials verified → JWT token returned
//! 3. **Protected routes**: `Authorization: Bearer <token>` → middleware verifies → identity injected
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are HS256-signed and expire after 24 hours
//! - Invalid credentials return 401 (no information leakage)

/// User data model and database operations
pub mod users;

/// Password hashing
pub mod passwords;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for account endpoints
pub mod handlers;

pub use handlers::types::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
pub use handlers::{delete_account, get_me, login, register};
pub use passwords::PasswordHasher;
pub use sessions::{Claims, SessionKeys, TokenError};
