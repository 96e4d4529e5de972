//! Account deletion use case ports.

use async_trait::async_trait;

use crate::dto::DeleteAccountRequestDto;
use crate::error::Result;

/// Inbound port for starting an account deletion.
#[async_trait]
pub trait RequestDeletion: Send + Sync {
    /// Stamp a fresh deletion code on the account and return it for the
    /// host application to deliver.
    async fn execute(&self, username: String) -> Result<String>;
}

/// Inbound port for account removal.
#[async_trait]
pub trait DeleteAccount: Send + Sync {
    /// Remove an account, optionally gated by a deletion code.
    async fn execute(&self, request: DeleteAccountRequestDto) -> Result<()>;
}
