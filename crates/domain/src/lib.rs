//! Core account types and validation rules.
//!
//! This crate has no I/O: it only defines value objects, the `User`
//! entity and the invariants they enforce. Persistence and hashing live
//! behind ports in the `application` crate.

pub mod auth;
pub mod error;
pub mod identity;
