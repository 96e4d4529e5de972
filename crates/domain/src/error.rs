//! Custom error handler for domain (core).

pub type Result<T> = std::result::Result<T, DomainError>;

/// Enum representing custom domain errors.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("invalid username formatting")]
    InvalidUsernameFormat,
    #[error("invalid email formatting")]
    InvalidEmailFormat,

    #[error("password must be at least {min_length} characters length")]
    WeakPassword { min_length: usize },
    #[error("password must be at most {max_length} characters length")]
    PasswordTooLong { max_length: usize },
    #[error("password hash is not a valid PHC string")]
    InvalidPasswordHash,

    #[error("account codes are {expected} hexadecimal characters")]
    InvalidCodeFormat { expected: usize },
}
