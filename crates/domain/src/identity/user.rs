//! User domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::code::AccountCode;
use crate::auth::password::PasswordHash;
use crate::identity::builder::{Missing, UserBuilder};
use crate::identity::email::EmailAddress;
use crate::identity::username::Username;

/// Represents an authentication principal within the host application.
///
/// A freshly built `User` is transient: no password, no codes, not yet
/// persisted. `registered_at` is stamped by the persistence layer at
/// insert time, and `active` stays false until an activation code is
/// consumed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: Username,
    pub email: EmailAddress,
    #[serde(skip)]
    pub password: Option<PasswordHash>,
    #[serde(skip)]
    pub act_code: Option<AccountCode>,
    #[serde(skip)]
    pub del_code: Option<AccountCode>,
    #[serde(skip)]
    pub pwd_code: Option<AccountCode>,
    pub registered_at: Option<DateTime<Utc>>,
    pub active: bool,
}

impl User {
    /// Starts building a [`User`]; `username` and `email` are required
    /// before [`build`](UserBuilder::build) becomes available.
    pub fn builder() -> UserBuilder<Missing, Missing> {
        UserBuilder::new()
    }
}
