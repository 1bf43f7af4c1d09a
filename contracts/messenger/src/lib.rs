//! Cross-Domain Messenger - reference transport for the interop bridge
//!
//! # Dispatch
//! `SendMessage` stores a hashed envelope in the outbox and emits
//! `sent_message`. The hash is the message identifier.
//!
//! # Delivery
//! The relayer submits the envelope and its hash to the destination
//! messenger with `RelayMessage`. The messenger checks the destination and
//! recomputes the hash, then calls the target with
//! `ReceiveMessage(CrossDomainMsg)` carrying the origin sender and domain.
//!
//! Replay protection is not part of this contract: an envelope relayed twice
//! is executed twice.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
