//! Crosschain Token - CW20 token the bridges can mint and burn
//!
//! Standard cw20 transfers, sends and burns are delegated to cw20-base.
//! On top of that, contracts listed as bridges at instantiation may call
//! `CrosschainMint` and `CrosschainBurn`, and the token answers the
//! `SupportsInterface` capability probe the bridges use to accept it.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
