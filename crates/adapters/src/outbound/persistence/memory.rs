//! In-memory account repository.
//!
//! Backs tests and single-process hosts that do not want a database.
//! Uniqueness of username and email is enforced the same way the
//! PostgreSQL schema does it.

use std::collections::HashMap;
use std::sync::RwLock;

use application::dto::AccountDto;
use application::error::{ApplicationError, Result};
use application::ports::outbound::AccountRepository;
use async_trait::async_trait;
use chrono::Utc;

/// Account repository backed by a process-local hash map.
#[derive(Default)]
pub struct MemoryAccountRepository {
    rows: RwLock<HashMap<String, AccountDto>>,
}

impl MemoryAccountRepository {
    /// Create a new, empty [`MemoryAccountRepository`].
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepository for MemoryAccountRepository {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AccountDto>> {
        Ok(self
            .rows
            .read()
            .expect("account store lock poisoned")
            .get(username)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<AccountDto>> {
        Ok(self
            .rows
            .read()
            .expect("account store lock poisoned")
            .values()
            .find(|account| account.email == email)
            .cloned())
    }

    async fn create(&self, account: &AccountDto) -> Result<()> {
        let mut rows =
            self.rows.write().expect("account store lock poisoned");

        if rows.contains_key(&account.username) {
            return Err(ApplicationError::UsernameTaken);
        }
        if rows.values().any(|row| row.email == account.email) {
            return Err(ApplicationError::EmailTaken);
        }

        let mut account = account.clone();
        account.registered_at = Some(Utc::now().timestamp() as u64);
        rows.insert(account.username.clone(), account);

        Ok(())
    }

    async fn update(&self, account: &AccountDto) -> Result<()> {
        let mut rows =
            self.rows.write().expect("account store lock poisoned");

        match rows.get_mut(&account.username) {
            Some(row) => {
                *row = account.clone();
                Ok(())
            }
            None => Err(ApplicationError::AccountNotFound),
        }
    }

    async fn delete(&self, username: &str) -> Result<()> {
        match self
            .rows
            .write()
            .expect("account store lock poisoned")
            .remove(username)
        {
            Some(_) => Ok(()),
            None => Err(ApplicationError::AccountNotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(username: &str, email: &str) -> AccountDto {
        AccountDto {
            username: username.to_string(),
            email: email.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_then_find_by_both_keys() {
        let repo = MemoryAccountRepository::new();
        repo.create(&account("myuser", "valid@email.com")).await.unwrap();

        let by_name =
            repo.find_by_username("myuser").await.unwrap().unwrap();
        assert!(by_name.registered_at.is_some());

        let by_email =
            repo.find_by_email("valid@email.com").await.unwrap().unwrap();
        assert_eq!(by_email.username, "myuser");
    }

    #[tokio::test]
    async fn uniqueness_is_enforced() {
        let repo = MemoryAccountRepository::new();
        repo.create(&account("myuser", "valid@email.com")).await.unwrap();

        let err = repo
            .create(&account("myuser", "other@email.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::UsernameTaken));

        let err = repo
            .create(&account("otheruser", "valid@email.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::EmailTaken));
    }

    #[tokio::test]
    async fn update_and_delete_require_an_existing_row() {
        let repo = MemoryAccountRepository::new();

        let err =
            repo.update(&account("ghost", "g@host.com")).await.unwrap_err();
        assert!(matches!(err, ApplicationError::AccountNotFound));

        let err = repo.delete("ghost").await.unwrap_err();
        assert!(matches!(err, ApplicationError::AccountNotFound));

        repo.create(&account("myuser", "valid@email.com")).await.unwrap();

        let mut updated = account("myuser", "valid@email.com");
        updated.active = true;
        repo.update(&updated).await.unwrap();
        assert!(
            repo.find_by_username("myuser").await.unwrap().unwrap().active
        );

        repo.delete("myuser").await.unwrap();
        assert!(repo.find_by_username("myuser").await.unwrap().is_none());
    }
}
