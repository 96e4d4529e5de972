//! Secure random generation using OS RNG.

use application::error::{Result, ToInternal};
use application::ports::outbound::SecureRandom;
use rand::RngCore;
use rand::rngs::OsRng;

/// OS-based secure random generator.
pub struct OsRngRandom;

impl OsRngRandom {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OsRngRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl SecureRandom for OsRngRandom {
    fn random_hex(&self, byte_length: usize) -> Result<String> {
        let mut bytes = vec![0u8; byte_length];
        OsRng.try_fill_bytes(&mut bytes).catch()?;
        Ok(hex::encode(bytes))
    }
}
