//! Account repository port.

use async_trait::async_trait;

use crate::dto::AccountDto;
use crate::error::Result;

/// Port for account persistence operations.
///
/// An implementation is injected by the host application; use cases
/// never look up a store through ambient process state.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by username.
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AccountDto>>;

    /// Find an account by email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<AccountDto>>;

    /// Insert a new account. `registered_at` is stamped by the store.
    async fn create(&self, account: &AccountDto) -> Result<()>;

    /// Update an existing account, keyed by username.
    async fn update(&self, account: &AccountDto) -> Result<()>;

    /// Remove an account row.
    async fn delete(&self, username: &str) -> Result<()>;
}
