//! Account registration use case implementation.

use std::sync::Arc;

use async_trait::async_trait;
use domain::auth::code::AccountCode;
use domain::auth::password::Password;
use domain::identity::email::EmailAddress;
use domain::identity::user::User;
use domain::identity::username::Username;

use crate::dto::{AccountDto, RegisterRequestDto, RegisterResponseDto};
use crate::error::{ApplicationError, Result};
use crate::ports::inbound::Register;
use crate::ports::outbound::{AccountRepository, PasswordHasher, SecureRandom};
use crate::usecases::CODE_BYTES;

/// Account registration use case service.
pub struct RegisterUseCase {
    accounts: Arc<dyn AccountRepository>,
    hasher: Arc<dyn PasswordHasher>,
    random: Arc<dyn SecureRandom>,
}

impl RegisterUseCase {
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        hasher: Arc<dyn PasswordHasher>,
        random: Arc<dyn SecureRandom>,
    ) -> Self {
        Self {
            accounts,
            hasher,
            random,
        }
    }
}

#[async_trait]
impl Register for RegisterUseCase {
    async fn execute(
        &self,
        request: RegisterRequestDto,
    ) -> Result<RegisterResponseDto> {
        let username = request
            .username
            .ok_or(ApplicationError::MissingArgument { field: "username" })?;
        let email = request
            .email
            .ok_or(ApplicationError::MissingArgument { field: "email" })?;

        let username = Username::parse(username)?;
        let email = EmailAddress::parse(email)?;

        if self
            .accounts
            .find_by_username(username.as_str())
            .await?
            .is_some()
        {
            return Err(ApplicationError::UsernameTaken);
        }

        if self.accounts.find_by_email(email.as_str()).await?.is_some() {
            return Err(ApplicationError::EmailTaken);
        }

        let act_code =
            AccountCode::parse(self.random.random_hex(CODE_BYTES)?)?;

        let builder = User::builder().username(username).email(email);
        let builder = match request.password {
            Some(password) => {
                builder.password(self.hasher.hash(&Password::new(password)?)?)
            }
            None => builder,
        };

        let mut user = builder.build();
        user.act_code = Some(act_code.clone());

        let account = AccountDto {
            username: user.username.to_string(),
            email: user.email.to_string(),
            password_hash: user
                .password
                .as_ref()
                .map(|hash| hash.as_str().to_string()),
            act_code: user.act_code.as_ref().map(AccountCode::to_string),
            del_code: None,
            pwd_code: None,
            registered_at: None,
            active: false,
        };

        self.accounts.create(&account).await?;

        tracing::info!(username = %account.username, "account registered");

        Ok(RegisterResponseDto {
            username: account.username,
            email: account.email,
            act_code: act_code.to_string(),
        })
    }
}
