//! PostgreSQL persistence adapter.
//!
//! Expects the `users` table from `migrations/0001_create_users.sql`.

pub mod account_repository;
pub mod models;

pub use account_repository::PgAccountRepository;
