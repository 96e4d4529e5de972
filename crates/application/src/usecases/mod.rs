//! Application services implementing business logic.

use crate::dto::AccountDto;
use crate::error::Result;
use crate::ports::outbound::AccountRepository;

/// Random bytes behind each account code; hex encoding doubles this.
pub(crate) const CODE_BYTES: usize = 20;

pub mod activate;
pub mod authenticate;
pub mod delete_account;
pub mod register;
pub mod reset_password;

pub use activate::*;
pub use authenticate::*;
pub use delete_account::*;
pub use register::*;
pub use reset_password::*;

#[cfg(test)]
pub(crate) mod support;

/// Resolve a login that may be a username or an email address.
pub(crate) async fn find_by_login(
    accounts: &dyn AccountRepository,
    login: &str,
) -> Result<Option<AccountDto>> {
    if login.contains('@') {
        accounts.find_by_email(&login.to_lowercase()).await
    } else {
        accounts.find_by_username(login).await
    }
}
