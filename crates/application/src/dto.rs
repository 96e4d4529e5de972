//! Data Transfer Objects for the application layer.
//!
//! DTOs are used to transfer data between layers without exposing domain
//! entities.

/// Request DTO for account registration.
///
/// `username` and `email` arrive as options so a host form with absent
/// fields maps to a missing-argument error rather than a panic.
#[derive(Debug, Clone, Default)]
pub struct RegisterRequestDto {
    /// Username; required.
    pub username: Option<String>,
    /// Email address; required.
    pub email: Option<String>,
    /// Clear-text password; may be set later through a reset flow.
    pub password: Option<String>,
}

/// Response DTO for account registration.
#[derive(Debug, Clone)]
pub struct RegisterResponseDto {
    pub username: String,
    pub email: String,
    /// Activation code for the host application to deliver.
    pub act_code: String,
}

/// Request DTO for account activation.
#[derive(Debug, Clone)]
pub struct ActivateRequestDto {
    pub username: String,
    /// Code previously returned by registration.
    pub code: String,
}

/// Request DTO for authentication.
#[derive(Debug, Clone)]
pub struct AuthenticateRequestDto {
    /// Username or email address.
    pub login: String,
    /// Clear-text password to verify.
    pub password: String,
}

/// Request DTO for consuming a password-reset code.
#[derive(Debug, Clone)]
pub struct ResetPasswordRequestDto {
    pub username: String,
    pub code: String,
    pub new_password: String,
}

/// Request DTO for account deletion.
#[derive(Debug, Clone)]
pub struct DeleteAccountRequestDto {
    pub username: String,
    /// Deletion code; `None` when the host vouches for the caller.
    pub code: Option<String>,
}

/// DTO for account data (used between application and repository).
#[derive(Debug, Clone, Default)]
pub struct AccountDto {
    pub username: String,
    pub email: String,
    pub password_hash: Option<String>,
    pub act_code: Option<String>,
    pub del_code: Option<String>,
    pub pwd_code: Option<String>,
    /// Unix timestamp, stamped by the store at insert time.
    pub registered_at: Option<u64>,
    pub active: bool,
}
