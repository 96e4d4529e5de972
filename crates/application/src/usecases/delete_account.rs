//! Account deletion use case implementations.

use std::sync::Arc;

use async_trait::async_trait;
use domain::auth::code::AccountCode;

use crate::dto::DeleteAccountRequestDto;
use crate::error::{ApplicationError, Result};
use crate::ports::inbound::{DeleteAccount, RequestDeletion};
use crate::ports::outbound::{AccountRepository, SecureRandom};
use crate::usecases::CODE_BYTES;

/// Deletion request use case service: issues `del_code`.
pub struct RequestDeletionUseCase {
    accounts: Arc<dyn AccountRepository>,
    random: Arc<dyn SecureRandom>,
}

impl RequestDeletionUseCase {
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        random: Arc<dyn SecureRandom>,
    ) -> Self {
        Self { accounts, random }
    }
}

#[async_trait]
impl RequestDeletion for RequestDeletionUseCase {
    async fn execute(&self, username: String) -> Result<String> {
        let mut account = self
            .accounts
            .find_by_username(&username)
            .await?
            .ok_or(ApplicationError::AccountNotFound)?;

        let code = AccountCode::parse(self.random.random_hex(CODE_BYTES)?)?;
        account.del_code = Some(code.to_string());

        self.accounts.update(&account).await?;

        tracing::info!(username = %account.username, "deletion requested");

        Ok(code.to_string())
    }
}

/// Account removal use case service.
pub struct DeleteAccountUseCase {
    accounts: Arc<dyn AccountRepository>,
}

impl DeleteAccountUseCase {
    pub fn new(accounts: Arc<dyn AccountRepository>) -> Self {
        Self { accounts }
    }
}

#[async_trait]
impl DeleteAccount for DeleteAccountUseCase {
    async fn execute(&self, request: DeleteAccountRequestDto) -> Result<()> {
        let account = self
            .accounts
            .find_by_username(&request.username)
            .await?
            .ok_or(ApplicationError::AccountNotFound)?;

        // A presented code must match; no code means the host already
        // authenticated the caller.
        if let Some(code) = request.code {
            match account.del_code.as_deref() {
                Some(stored) if stored == code => {}
                _ => return Err(ApplicationError::InvalidCode),
            }
        }

        self.accounts.delete(&account.username).await?;

        tracing::info!(username = %account.username, "account deleted");

        Ok(())
    }
}
