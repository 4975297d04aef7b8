//! Backend Error Module
//!
//! This module defines the error type used by HTTP handlers and middleware.
//! Every error converts into a JSON HTTP response.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Status Codes
//!
//! | Error | Status |
//! |---|---|
//! | validation | 400 |
//! | missing/invalid/expired token, bad credentials | 401 |
//! | not the owner | 403 |
//! | missing row | 404 |
//! | known path, wrong method | 405 |
//! | duplicate user name or email | 409 |
//! | database, hashing, signing | 500 (generic message) |

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use conversion::ErrorBody;
pub use types::{is_unique_violation, BackendError};
