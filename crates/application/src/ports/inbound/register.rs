//! Account registration use case port.

use async_trait::async_trait;

use crate::dto::{RegisterRequestDto, RegisterResponseDto};
use crate::error::Result;

/// Inbound port for account registration.
#[async_trait]
pub trait Register: Send + Sync {
    /// Validate and persist a new account.
    async fn execute(
        &self,
        request: RegisterRequestDto,
    ) -> Result<RegisterResponseDto>;
}
