//! Authentication use case implementation.

use std::sync::Arc;

use async_trait::async_trait;
use domain::auth::password::PasswordHash;

use crate::dto::{AccountDto, AuthenticateRequestDto};
use crate::error::{ApplicationError, Result};
use crate::ports::inbound::Authenticate;
use crate::ports::outbound::{AccountRepository, PasswordHasher};
use crate::usecases::find_by_login;

/// Credential verification use case service.
pub struct AuthenticateUseCase {
    accounts: Arc<dyn AccountRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl AuthenticateUseCase {
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self { accounts, hasher }
    }
}

#[async_trait]
impl Authenticate for AuthenticateUseCase {
    async fn execute(
        &self,
        request: AuthenticateRequestDto,
    ) -> Result<AccountDto> {
        let account = find_by_login(self.accounts.as_ref(), &request.login)
            .await?
            .ok_or(ApplicationError::InvalidCredentials)?;

        // Unknown logins, inactive accounts and wrong passwords all
        // answer the same, so callers cannot probe for accounts.
        if !account.active {
            return Err(ApplicationError::InvalidCredentials);
        }

        let Some(stored) = account.password_hash.as_deref() else {
            return Err(ApplicationError::InvalidCredentials);
        };
        let hash = PasswordHash::parse(stored)?;

        self.hasher
            .verify(&request.password, &hash)
            .map_err(|_| ApplicationError::InvalidCredentials)?;

        tracing::debug!(username = %account.username, "credentials verified");

        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::{ActivateRequestDto, RegisterRequestDto};
    use crate::ports::inbound::{Activate, Register};
    use crate::usecases::support::{FixedRandom, MemoryAccounts, PlainHasher};
    use crate::usecases::{ActivateUseCase, RegisterUseCase};

    const CODE: &str = "0123456789abcdef0123456789abcdef01234567";

    async fn activated_account() -> AuthenticateUseCase {
        let accounts = Arc::new(MemoryAccounts::default());
        let register = RegisterUseCase::new(
            Arc::clone(&accounts) as Arc<dyn AccountRepository>,
            Arc::new(PlainHasher),
            Arc::new(FixedRandom(CODE)),
        );
        register
            .execute(RegisterRequestDto {
                username: Some("myuser".to_string()),
                email: Some("valid@email.com".to_string()),
                password: Some("correct horse".to_string()),
            })
            .await
            .unwrap();

        ActivateUseCase::new(Arc::clone(&accounts) as Arc<dyn AccountRepository>)
            .execute(ActivateRequestDto {
                username: "myuser".to_string(),
                code: CODE.to_string(),
            })
            .await
            .unwrap();

        AuthenticateUseCase::new(
            Arc::clone(&accounts) as Arc<dyn AccountRepository>,
            Arc::new(PlainHasher),
        )
    }

    fn request(login: &str, password: &str) -> AuthenticateRequestDto {
        AuthenticateRequestDto {
            login: login.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn verifies_by_username_and_by_email() {
        let usecase = activated_account().await;

        let account = usecase
            .execute(request("myuser", "correct horse"))
            .await
            .unwrap();
        assert_eq!(account.username, "myuser");

        let account = usecase
            .execute(request("Valid@Email.com", "correct horse"))
            .await
            .unwrap();
        assert_eq!(account.username, "myuser");
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_login_answer_alike() {
        let usecase = activated_account().await;

        let err = usecase
            .execute(request("myuser", "battery staple"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::InvalidCredentials));

        let err = usecase
            .execute(request("ghost", "correct horse"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::InvalidCredentials));
    }

    #[tokio::test]
    async fn inactive_accounts_cannot_authenticate() {
        let accounts = Arc::new(MemoryAccounts::default());
        RegisterUseCase::new(
            Arc::clone(&accounts) as Arc<dyn AccountRepository>,
            Arc::new(PlainHasher),
            Arc::new(FixedRandom(CODE)),
        )
        .execute(RegisterRequestDto {
            username: Some("myuser".to_string()),
            email: Some("valid@email.com".to_string()),
            password: Some("correct horse".to_string()),
        })
        .await
        .unwrap();

        let usecase = AuthenticateUseCase::new(
            Arc::clone(&accounts) as Arc<dyn AccountRepository>,
            Arc::new(PlainHasher),
        );

        let err = usecase
            .execute(request("myuser", "correct horse"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::InvalidCredentials));
    }
}
