//! Cryptographic adapters.

pub mod argon2;
pub mod random;

pub use argon2::Argon2PasswordHasher;
pub use random::OsRngRandom;
