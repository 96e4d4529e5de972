//! Account code tokens.
//!
//! Activation, deletion and password-reset codes share one shape: the
//! hex encoding of 20 random bytes, sized to their `CHAR(40)` columns.
//! Generation lives behind the application's random port; this value
//! object only enforces the shape.

use std::fmt;

use crate::error::{DomainError, Result};

/// Value object of an account code (activation, deletion or reset).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountCode(String);

impl AccountCode {
    /// Code length in hexadecimal characters.
    pub const LENGTH: usize = 40;

    /// Converts a [`String`] into a valid [`AccountCode`].
    ///
    /// # Errors
    ///
    /// Returns `Err` if the string is not exactly [`Self::LENGTH`]
    /// lowercase hexadecimal characters.
    pub fn parse(code: impl Into<String>) -> Result<Self> {
        let code = code.into();
        if code.len() != Self::LENGTH
            || !code.chars().all(|c| c.is_ascii_hexdigit() && !c.is_uppercase())
        {
            return Err(DomainError::InvalidCodeFormat {
                expected: Self::LENGTH,
            });
        }

        Ok(Self(code))
    }

    /// Returns the same string as a string slice `&str`.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `candidate` matches this code.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0 == candidate
    }
}

impl fmt::Display for AccountCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_forty_hex_characters() {
        let code = "0123456789abcdef0123456789abcdef01234567";
        assert_eq!(code.len(), AccountCode::LENGTH);
        assert!(AccountCode::parse(code).is_ok());
    }

    #[test]
    fn rejects_wrong_length_and_non_hex() {
        assert!(AccountCode::parse("abc123").is_err());
        assert!(AccountCode::parse("z".repeat(40)).is_err());
        assert!(AccountCode::parse("A".repeat(40)).is_err());
    }

    #[test]
    fn matches_compares_exactly() {
        let code =
            AccountCode::parse("0123456789abcdef0123456789abcdef01234567")
                .unwrap();
        assert!(code.matches("0123456789abcdef0123456789abcdef01234567"));
        assert!(!code.matches("ffffffffffffffffffffffffffffffffffffffff"));
    }
}
