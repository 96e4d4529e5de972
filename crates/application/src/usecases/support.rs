//! Test doubles for the outbound ports.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use domain::auth::password::{Password, PasswordHash};

use crate::dto::AccountDto;
use crate::error::{ApplicationError, Result};
use crate::ports::outbound::{AccountRepository, PasswordHasher, SecureRandom};

/// Hash-map account store, keyed by username.
#[derive(Default)]
pub(crate) struct MemoryAccounts {
    rows: Mutex<HashMap<String, AccountDto>>,
}

#[async_trait]
impl AccountRepository for MemoryAccounts {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AccountDto>> {
        Ok(self.rows.lock().unwrap().get(username).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<AccountDto>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .find(|account| account.email == email)
            .cloned())
    }

    async fn create(&self, account: &AccountDto) -> Result<()> {
        let mut rows = self.rows.lock().unwrap();
        if rows.contains_key(&account.username) {
            return Err(ApplicationError::UsernameTaken);
        }

        let mut account = account.clone();
        account.registered_at = Some(
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("system time before Unix epoch")
                .as_secs(),
        );
        rows.insert(account.username.clone(), account);
        Ok(())
    }

    async fn update(&self, account: &AccountDto) -> Result<()> {
        let mut rows = self.rows.lock().unwrap();
        match rows.get_mut(&account.username) {
            Some(row) => {
                *row = account.clone();
                Ok(())
            }
            None => Err(ApplicationError::AccountNotFound),
        }
    }

    async fn delete(&self, username: &str) -> Result<()> {
        match self.rows.lock().unwrap().remove(username) {
            Some(_) => Ok(()),
            None => Err(ApplicationError::AccountNotFound),
        }
    }
}

/// Reversible stand-in for the Argon2 adapter; tests only.
pub(crate) struct PlainHasher;

impl PasswordHasher for PlainHasher {
    fn hash(&self, password: &Password) -> Result<PasswordHash> {
        Ok(PasswordHash::parse(format!(
            "$plain$v=1$t=0$testsalt${}",
            password.as_str()
        ))?)
    }

    fn verify(&self, candidate: &str, hash: &PasswordHash) -> Result<()> {
        match hash.as_str().rsplit_once('$') {
            Some((_, stored)) if stored == candidate => Ok(()),
            _ => Err(ApplicationError::InvalidCredentials),
        }
    }
}

/// Deterministic "randomness".
pub(crate) struct FixedRandom(pub &'static str);

impl SecureRandom for FixedRandom {
    fn random_hex(&self, _byte_length: usize) -> Result<String> {
        Ok(self.0.to_string())
    }
}
