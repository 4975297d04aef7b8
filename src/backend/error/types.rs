/**
 * Backend Error Types
 *
 * This module defines the error type returned by every HTTP handler and by the
 * authorization middleware.
 *
 * # Error Categories
 *
 * ## Client Errors
 *
 * - Validation failures (malformed JSON, missing or oversized fields)
 * - Authentication failures (missing/invalid/expired token, bad credentials)
 * - Ownership violations (deleting another user's post)
 * - Lookups of rows that do not exist or were soft-deleted
 * - Duplicate user names or emails
 *
 * ## Internal Errors
 *
 * Database, hashing and token signing failures. These are logged with their
 * full detail and reported to the client with a generic message only.
 */

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::sessions::TokenError;

/// Message returned to clients for every 500 response
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

/// Backend-specific error types
///
/// Each variant maps to exactly one HTTP status code (see [`BackendError::status_code`]).
///
/// # Usage
///
/// ```rust
/// use blogpost::backend::error::BackendError;
///
/// let err = BackendError::validation("title", "must be at most 250 characters");
/// let err = BackendError::not_found("post");
/// let err = BackendError::unauthorized("invalid credentials");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Request input failed validation
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field (or `body` / `path`) that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// Missing or invalid credentials
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Human-readable error message
        message: String,
    },

    /// Authenticated, but not allowed to touch this resource
    #[error("Forbidden: {message}")]
    Forbidden {
        /// Human-readable error message
        message: String,
    },

    /// Row does not exist or is soft-deleted
    #[error("{resource} not found")]
    NotFound {
        /// Name of the missing resource ("post", "comment", ...)
        resource: String,
    },

    /// The path exists but not for this HTTP method
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Unique constraint would be violated
    #[error("Conflict: {message}")]
    Conflict {
        /// Human-readable error message
        message: String,
    },

    /// Session token could not be issued or verified
    #[error(transparent)]
    Token(#[from] TokenError),

    /// Password hashing failure
    #[error("Password hashing error: {0}")]
    Password(#[from] bcrypt::BcryptError),

    /// Persistence failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl BackendError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a new forbidden error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Create a new not-found error for the named resource
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create a new method-not-allowed error
    pub fn method_not_allowed() -> Self {
        Self::MethodNotAllowed
    }

    /// Create a new conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `ValidationError` - 400 Bad Request
    /// - `Unauthorized` - 401 Unauthorized
    /// - `Forbidden` - 403 Forbidden
    /// - `NotFound` - 404 Not Found
    /// - `MethodNotAllowed` - 405 Method Not Allowed
    /// - `Conflict` - 409 Conflict
    /// - `Token` - 401 for expired/invalid tokens, 500 if signing failed
    /// - `Password`, `Database` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationError { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Token(TokenError::Signing(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Token(_) => StatusCode::UNAUTHORIZED,
            Self::Password(_) | Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message that is safe to return to the client
    ///
    /// Internal errors never expose their detail.
    pub fn message(&self) -> String {
        if self.status_code().is_server_error() {
            return INTERNAL_ERROR_MESSAGE.to_string();
        }
        match self {
            Self::ValidationError { field, message } => format!("{field}: {message}"),
            Self::Unauthorized { message }
            | Self::Forbidden { message }
            | Self::Conflict { message } => message.clone(),
            Self::NotFound { resource } => format!("{resource} not found"),
            Self::MethodNotAllowed => "method not allowed".to_string(),
            Self::Token(TokenError::Expired) => "token has expired".to_string(),
            Self::Token(_) => "invalid token".to_string(),
            Self::Password(_) | Self::Database(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        Self::validation("body", rejection.body_text())
    }
}

impl From<PathRejection> for BackendError {
    fn from(rejection: PathRejection) -> Self {
        Self::validation("path", rejection.body_text())
    }
}

/// Returns true when a database error is a UNIQUE constraint violation
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.is_unique_violation(),
        _ => false,
    }
}
