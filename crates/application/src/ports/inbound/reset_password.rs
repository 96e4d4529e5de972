//! Password reset use case ports.

use async_trait::async_trait;

use crate::dto::ResetPasswordRequestDto;
use crate::error::Result;

/// Inbound port for starting a password reset.
#[async_trait]
pub trait RequestPasswordReset: Send + Sync {
    /// Stamp a fresh reset code on the account and return it for the
    /// host application to deliver.
    async fn execute(&self, login: String) -> Result<String>;
}

/// Inbound port for consuming a password reset.
#[async_trait]
pub trait ResetPassword: Send + Sync {
    /// Exchange a valid reset code for a new password.
    async fn execute(&self, request: ResetPasswordRequestDto) -> Result<()>;
}
