//! Password reset use case implementations.

use std::sync::Arc;

use async_trait::async_trait;
use domain::auth::code::AccountCode;
use domain::auth::password::Password;

use crate::dto::ResetPasswordRequestDto;
use crate::error::{ApplicationError, Result};
use crate::ports::inbound::{RequestPasswordReset, ResetPassword};
use crate::ports::outbound::{AccountRepository, PasswordHasher, SecureRandom};
use crate::usecases::{CODE_BYTES, find_by_login};

/// Reset request use case service: issues `pwd_code`.
pub struct RequestPasswordResetUseCase {
    accounts: Arc<dyn AccountRepository>,
    random: Arc<dyn SecureRandom>,
}

impl RequestPasswordResetUseCase {
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        random: Arc<dyn SecureRandom>,
    ) -> Self {
        Self { accounts, random }
    }
}

#[async_trait]
impl RequestPasswordReset for RequestPasswordResetUseCase {
    async fn execute(&self, login: String) -> Result<String> {
        let mut account = find_by_login(self.accounts.as_ref(), &login)
            .await?
            .ok_or(ApplicationError::AccountNotFound)?;

        let code = AccountCode::parse(self.random.random_hex(CODE_BYTES)?)?;
        account.pwd_code = Some(code.to_string());

        self.accounts.update(&account).await?;

        tracing::info!(username = %account.username, "password reset requested");

        Ok(code.to_string())
    }
}

/// Reset consumption use case service: exchanges `pwd_code` for a new
/// password hash.
pub struct ResetPasswordUseCase {
    accounts: Arc<dyn AccountRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl ResetPasswordUseCase {
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self { accounts, hasher }
    }
}

#[async_trait]
impl ResetPassword for ResetPasswordUseCase {
    async fn execute(&self, request: ResetPasswordRequestDto) -> Result<()> {
        let mut account = self
            .accounts
            .find_by_username(&request.username)
            .await?
            .ok_or(ApplicationError::AccountNotFound)?;

        match account.pwd_code.take() {
            Some(code) if code == request.code => {}
            _ => return Err(ApplicationError::InvalidCode),
        }

        let password = Password::new(request.new_password)?;
        account.password_hash =
            Some(self.hasher.hash(&password)?.as_str().to_string());

        self.accounts.update(&account).await?;

        tracing::info!(username = %account.username, "password reset");

        Ok(())
    }
}
