//! PostgreSQL implementation for account repository.

use application::dto::AccountDto;
use application::error::{ApplicationError, Result, ToInternal};
use application::ports::outbound::AccountRepository;
use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgQueryResult;

use super::models::UserRecord;

/// PostgreSQL account repository.
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    /// Create a new [`PgAccountRepository`].
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AccountDto>> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT username, email, password, act_code, del_code, pwd_code,
                   registered_at, active
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .catch()?;

        Ok(record.map(UserRecord::into_dto))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<AccountDto>> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT username, email, password, act_code, del_code, pwd_code,
                   registered_at, active
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .catch()?;

        Ok(record.map(UserRecord::into_dto))
    }

    async fn create(&self, account: &AccountDto) -> Result<()> {
        let record = UserRecord::from(account);

        // registered_at and active take their column defaults.
        sqlx::query(
            r#"
            INSERT INTO users (
                username, email, password, act_code, del_code, pwd_code
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&record.username)
        .bind(&record.email)
        .bind(&record.password)
        .bind(&record.act_code)
        .bind(&record.del_code)
        .bind(&record.pwd_code)
        .execute(&self.pool)
        .await
        .catch()?;

        Ok(())
    }

    async fn update(&self, account: &AccountDto) -> Result<()> {
        let record = UserRecord::from(account);

        let result: PgQueryResult = sqlx::query(
            r#"
            UPDATE users
            SET
                email = $2,
                password = $3,
                act_code = $4,
                del_code = $5,
                pwd_code = $6,
                active = $7
            WHERE username = $1
            "#,
        )
        .bind(&record.username)
        .bind(&record.email)
        .bind(&record.password)
        .bind(&record.act_code)
        .bind(&record.del_code)
        .bind(&record.pwd_code)
        .bind(record.active)
        .execute(&self.pool)
        .await
        .catch()?;

        if result.rows_affected() == 0 {
            return Err(ApplicationError::AccountNotFound);
        }

        Ok(())
    }

    async fn delete(&self, username: &str) -> Result<()> {
        let result: PgQueryResult =
            sqlx::query("DELETE FROM users WHERE username = $1")
                .bind(username)
                .execute(&self.pool)
                .await
                .catch()?;

        if result.rows_affected() == 0 {
            return Err(ApplicationError::AccountNotFound);
        }

        Ok(())
    }
}
