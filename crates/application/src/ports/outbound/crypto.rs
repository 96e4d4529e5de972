//! Cryptography ports.

use domain::auth::password::{Password, PasswordHash};

use crate::error::Result;

/// Port for password hashing.
pub trait PasswordHasher: Send + Sync {
    /// Hash a clear-text password into a PHC string.
    fn hash(&self, password: &Password) -> Result<PasswordHash>;

    /// Verify a candidate password against a stored hash.
    ///
    /// The candidate is a raw `&str`: strength rules only apply to new
    /// passwords, never to ones being checked.
    fn verify(&self, candidate: &str, hash: &PasswordHash) -> Result<()>;
}

/// Port for secure random generation.
pub trait SecureRandom: Send + Sync {
    /// Hex encoding of `byte_length` random bytes.
    fn random_hex(&self, byte_length: usize) -> Result<String>;
}
