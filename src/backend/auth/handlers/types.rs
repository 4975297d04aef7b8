/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by authentication handlers.
 * These types are shared across the register, login, me and account handlers.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::users::User;
use crate::backend::error::BackendError;
use crate::backend::validation;

/// Register request
///
/// Contains the user name, email and password for user registration.
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    /// User's chosen name (3-100 chars)
    pub user_name: String,
    /// User's email address (3-100 chars)
    pub email: String,
    /// User's password (6-100 chars, hashed before storage)
    pub password: String,
}

impl RegisterRequest {
    /// Check field lengths and the email shape
    pub fn validate(&self) -> Result<(), BackendError> {
        validation::length_between("user_name", &self.user_name, 3, 100)?;
        validation::length_between("email", &self.email, 3, 100)?;
        validation::email("email", &self.email)?;
        validation::length_between("password", &self.password, 6, 100)?;
        Ok(())
    }
}

/// Login request
///
/// `credential` is matched against the email first, then the user name.
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// Email or user name
    pub credential: String,
    /// User's password (will be verified against stored hash)
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), BackendError> {
        validation::required("credential", &self.credential)?;
        validation::required("password", &self.password)?;
        Ok(())
    }
}

/// Auth response
///
/// Returned by the register and login handlers. Contains the JWT token
/// and user information for immediate authentication.
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    pub message: String,
    /// JWT token for authentication (24-hour expiration)
    pub token: String,
    /// User information (without sensitive data)
    pub user: UserResponse,
}

/// User response (without sensitive data)
///
/// Contains user information that is safe to return to clients.
/// Does not include the password hash.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    pub id: i64,
    pub user_name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            user_name: user.user_name,
            email: user.email,
        }
    }
}

/// Response for `DELETE /user`
#[derive(Serialize, Deserialize, Debug)]
pub struct AccountDeletedResponse {
    pub message: String,
    pub user_id: i64,
}
