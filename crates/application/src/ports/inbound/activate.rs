//! Account activation use case port.

use async_trait::async_trait;

use crate::dto::ActivateRequestDto;
use crate::error::Result;

/// Inbound port for account activation.
#[async_trait]
pub trait Activate: Send + Sync {
    /// Consume an activation code and mark the account usable.
    async fn execute(&self, request: ActivateRequestDto) -> Result<()>;
}
