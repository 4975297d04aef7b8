/**
 * Session Management and JWT Tokens
 *
 * This module handles JWT token generation and validation for user sessions.
 * Tokens are HS256-signed with the secret from `ServerConfig` and expire
 * 24 hours after issue.
 */

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifetime of an issued token
pub const TOKEN_TTL_HOURS: i64 = 24;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID (decimal string)
    pub sub: String,
    /// User name at the time the token was issued
    pub username: String,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

impl Claims {
    /// Parse the numeric user id out of `sub`
    pub fn user_id(&self) -> Result<i64, TokenError> {
        self.sub
            .parse::<i64>()
            .map_err(|_| TokenError::InvalidSubject(self.sub.clone()))
    }
}

/// Token failures
#[derive(Debug, Error)]
pub enum TokenError {
    /// Signature was valid but `exp` is in the past
    #[error("token has expired")]
    Expired,

    /// Malformed token, bad signature or wrong algorithm
    #[error("invalid token: {0}")]
    Invalid(#[source] jsonwebtoken::errors::Error),

    /// `sub` claim is not a numeric user id
    #[error("invalid subject in token: {0}")]
    InvalidSubject(String),

    /// Token could not be signed
    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

/// Signing and verification keys derived from the configured secret
///
/// Cheap to clone; shared by every request through `AppState`.
#[derive(Clone)]
pub struct SessionKeys {
    keys: Arc<Keys>,
}

impl std::fmt::Debug for SessionKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionKeys").finish_non_exhaustive()
    }
}

impl SessionKeys {
    /// Derive HS256 keys from a shared secret
    pub fn new(secret: &str) -> Self {
        Self {
            keys: Arc::new(Keys {
                encoding: EncodingKey::from_secret(secret.as_bytes()),
                decoding: DecodingKey::from_secret(secret.as_bytes()),
            }),
        }
    }

    /// Create a JWT token for a user
    ///
    /// # Arguments
    /// * `user_id` - User ID
    /// * `username` - User name embedded in the claims
    ///
    /// # Returns
    /// Signed JWT token string, valid for 24 hours
    pub fn create_token(&self, user_id: i64, username: &str) -> Result<String, TokenError> {
        self.create_token_at(user_id, username, Utc::now().timestamp())
    }

    /// Create a token as if it had been issued at `issued_at` (Unix seconds)
    pub(crate) fn create_token_at(
        &self,
        user_id: i64,
        username: &str,
        issued_at: i64,
    ) -> Result<String, TokenError> {
        let expires_at = issued_at + Duration::hours(TOKEN_TTL_HOURS).num_seconds();

        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            iat: issued_at.max(0) as u64,
            exp: expires_at.max(0) as u64,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.keys.encoding)
            .map_err(TokenError::Signing)
    }

    /// Verify and decode a JWT token
    ///
    /// # Returns
    /// Decoded claims, `TokenError::Expired` for an expired token, or
    /// `TokenError::Invalid` for anything else that fails verification
    pub fn verify_token(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "sub"]);

        let token_data = decode::<Claims>(token, &self.keys.decoding, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e),
            }
        })?;

        Ok(token_data.claims)
    }

    /// Extract user ID from token
    pub fn get_user_id_from_token(&self, token: &str) -> Result<i64, TokenError> {
        self.verify_token(token)?.user_id()
    }
}
