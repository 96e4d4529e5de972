//! authr — username/email/password authentication add-on for web
//! services.
//!
//! The add-on owns validation, activation/deletion/reset codes and
//! password verification; the host application owns sessions, routing
//! and delivery of the codes. Storage and crypto are injected as ports,
//! so any backend implementing [`AccountRepository`] works.
//!
//! Layers live in their own crates and are re-exported here:
//! [`domain`] (value objects and the `User` entity), [`application`]
//! (use cases and ports) and [`adapters`] (PostgreSQL, in-memory and
//! Argon2 implementations).

pub use adapters::outbound::crypto::{Argon2PasswordHasher, OsRngRandom};
pub use adapters::outbound::persistence::{
    MemoryAccountRepository, PgAccountRepository,
};
pub use application::dto;
pub use application::error::{ApplicationError, Result};
pub use application::ports::inbound::{
    Activate, Authenticate, DeleteAccount, Register, RequestDeletion,
    RequestPasswordReset, ResetPassword,
};
pub use application::ports::outbound::{
    AccountRepository, PasswordHasher, SecureRandom,
};
pub use application::usecases::{
    ActivateUseCase, AuthenticateUseCase, DeleteAccountUseCase,
    RegisterUseCase, RequestDeletionUseCase, RequestPasswordResetUseCase,
    ResetPasswordUseCase,
};
pub use domain::error::DomainError;
pub use domain::identity::email::EmailAddress;
pub use domain::identity::user::User;
pub use domain::identity::username::Username;
