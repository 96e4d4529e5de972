//! Account use cases and the ports they talk through.
//!
//! Hosts inject implementations of the outbound ports (storage, hashing,
//! randomness) and call the inbound ports; nothing in here reads ambient
//! process state.

pub mod dto;
pub mod error;
pub mod ports;
pub mod usecases;
