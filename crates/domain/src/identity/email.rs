//! Email logic management.

use std::fmt;
use std::sync::LazyLock;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, Result};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[A-Za-z]{2,}$").unwrap());

/// Value object of a valid email address.
///
/// The check is structural, not RFC-complete: a non-empty local part,
/// exactly one `@`, and a dotted domain with an alphabetic TLD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Maximum email length, matching the storage column.
    pub const MAX_LENGTH: usize = 80;

    /// Converts a [`String`] into a valid [`EmailAddress`].
    ///
    /// # Errors
    ///
    /// Returns `Err` if the string does not have the shape of an email
    /// address, or exceeds [`Self::MAX_LENGTH`].
    pub fn parse(email: impl Into<String>) -> Result<Self> {
        let email = email.into();
        if email.len() > Self::MAX_LENGTH || !EMAIL_RE.is_match(&email) {
            return Err(DomainError::InvalidEmailFormat);
        }

        Ok(Self(email.to_lowercase()))
    }

    /// Returns the same string as a string slice `&str`.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(value)
    }
}
