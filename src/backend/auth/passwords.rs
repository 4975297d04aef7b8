/**
 * Password Hashing
 *
 * Thin wrapper around bcrypt. The cost factor comes from `ServerConfig`
 * and defaults to `bcrypt::DEFAULT_COST`.
 */

use bcrypt::{hash, verify, BcryptError, DEFAULT_COST};

/// Lowest cost bcrypt accepts
pub const MIN_COST: u32 = 4;

/// Highest cost bcrypt accepts
pub const MAX_COST: u32 = 31;

/// bcrypt hasher with a fixed cost factor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self { cost: DEFAULT_COST }
    }
}

impl PasswordHasher {
    /// Create a hasher with the given cost (validated by `ServerConfig`)
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Cost factor used for new hashes
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password with a fresh salt
    pub fn hash_password(&self, plaintext: &str) -> Result<String, BcryptError> {
        hash(plaintext, self.cost)
    }

    /// Check a plaintext password against a stored hash
    ///
    /// A mismatch is `false`. A stored hash bcrypt cannot parse is logged
    /// and also reported as `false`.
    pub fn verify_password(&self, password_hash: &str, plaintext: &str) -> bool {
        match verify(plaintext, password_hash) {
            Ok(valid) => valid,
            Err(e) => {
                tracing::error!("Password verification error: {:?}", e);
                false
            }
        }
    }
}
