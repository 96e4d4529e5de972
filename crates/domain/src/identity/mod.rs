//! Identity: who an account belongs to.

pub mod builder;
pub mod email;
pub mod user;
pub mod username;
