//! Database models for PostgreSQL.

use application::dto::AccountDto;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// User record as stored in the database.
#[derive(Debug, Clone, FromRow)]
pub struct UserRecord {
    pub username: String,
    pub email: String,
    pub password: Option<String>,
    pub act_code: Option<String>,
    pub del_code: Option<String>,
    pub pwd_code: Option<String>,
    pub registered_at: DateTime<Utc>,
    pub active: bool,
}

impl UserRecord {
    /// Convert to [`AccountDto`].
    pub fn into_dto(self) -> AccountDto {
        AccountDto {
            username: self.username,
            email: self.email,
            password_hash: self.password,
            act_code: self.act_code,
            del_code: self.del_code,
            pwd_code: self.pwd_code,
            registered_at: Some(self.registered_at.timestamp() as u64),
            active: self.active,
        }
    }
}

impl From<&AccountDto> for UserRecord {
    fn from(dto: &AccountDto) -> Self {
        Self {
            username: dto.username.clone(),
            email: dto.email.clone(),
            password: dto.password_hash.clone(),
            act_code: dto.act_code.clone(),
            del_code: dto.del_code.clone(),
            pwd_code: dto.pwd_code.clone(),
            registered_at: dto
                .registered_at
                .and_then(|secs| DateTime::from_timestamp(secs as i64, 0))
                .unwrap_or_else(Utc::now),
            active: dto.active,
        }
    }
}
