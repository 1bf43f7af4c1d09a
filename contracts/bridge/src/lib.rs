//! Interop Bridge Contract - Cross-Domain Token Bridging
//!
//! # Send (source domain)
//! 1. Caller asks the bridge to send `amount` of a crosschain token to `to`
//!    on a destination domain
//! 2. The bridge burns the amount from the caller on the local ledger
//! 3. The bridge dispatches a `BridgeMessage` through the messenger to its
//!    peer on the destination domain
//!
//! # Relay (destination domain)
//! 1. The messenger delivers the message to the peer bridge
//! 2. The bridge authenticates the caller (the messenger) and the origin
//!    (its own peer on the source domain)
//! 3. The bridge mints to the recipient, emits `relay_erc20`, and then
//!    best-effort invokes the recipient's callback if one was requested
//!
//! # Security
//! - Double authentication on relay: trusted transport + known peer origin
//! - Burn is ordered before dispatch; a failed burn reverts the dispatch
//! - Recipient callbacks run as isolated sub-messages whose failure is
//!   swallowed; they cannot undo the mint or the relay event
//! - Replay protection belongs to the transport; relay is not idempotent

pub mod contract;
pub mod error;
pub mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
