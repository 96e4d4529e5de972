//! Outbound adapters for the account use cases.
//!
//! Hosts pick a persistence backend (PostgreSQL or in-memory) and the
//! crypto implementations, then hand them to the use cases as ports.

pub mod outbound;
