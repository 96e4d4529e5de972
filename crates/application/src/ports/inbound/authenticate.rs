//! Authentication use case port.

use async_trait::async_trait;

use crate::dto::{AccountDto, AuthenticateRequestDto};
use crate::error::Result;

/// Inbound port for credential verification.
#[async_trait]
pub trait Authenticate: Send + Sync {
    /// Verify a password for a username or email login.
    async fn execute(
        &self,
        request: AuthenticateRequestDto,
    ) -> Result<AccountDto>;
}
