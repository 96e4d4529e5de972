//! Account activation use case implementation.

use std::sync::Arc;

use async_trait::async_trait;

use crate::dto::ActivateRequestDto;
use crate::error::{ApplicationError, Result};
use crate::ports::inbound::Activate;
use crate::ports::outbound::AccountRepository;

/// Account activation use case service.
pub struct ActivateUseCase {
    accounts: Arc<dyn AccountRepository>,
}

impl ActivateUseCase {
    pub fn new(accounts: Arc<dyn AccountRepository>) -> Self {
        Self { accounts }
    }
}

#[async_trait]
impl Activate for ActivateUseCase {
    async fn execute(&self, request: ActivateRequestDto) -> Result<()> {
        let mut account = self
            .accounts
            .find_by_username(&request.username)
            .await?
            .ok_or(ApplicationError::AccountNotFound)?;

        // A consumed or never-issued code cannot activate anything.
        match account.act_code.take() {
            Some(code) if code == request.code => {}
            _ => return Err(ApplicationError::InvalidCode),
        }

        account.active = true;
        self.accounts.update(&account).await?;

        tracing::info!(username = %account.username, "account activated");

        Ok(())
    }
}
