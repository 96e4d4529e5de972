//! Username logic management.

use std::fmt;
use std::sync::LazyLock;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, Result};

static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_.-]{0,39}$").unwrap());

/// Value object of a valid username.
///
/// A username starts with a letter, never with a digit, `$`, `_` or
/// `-`, and fits the `VARCHAR(40)` column it is stored in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct Username(String);

impl Username {
    /// Maximum username length, matching the storage column.
    pub const MAX_LENGTH: usize = 40;

    /// Converts a [`String`] into a valid [`Username`].
    ///
    /// # Errors
    ///
    /// Returns `Err` if the string does not match the username pattern.
    pub fn parse(username: impl Into<String>) -> Result<Self> {
        let username = username.into();
        if !USERNAME_RE.is_match(&username) {
            return Err(DomainError::InvalidUsernameFormat);
        }

        Ok(Self(username))
    }

    /// Returns the same string as a string slice `&str`.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Username {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(value)
    }
}
