//! Cross-Domain Swap Router Contract
//!
//! One domain is canonical and hosts the liquidity; every other domain runs
//! a proxy router.
//!
//! # Proxy initiation
//! 1. A swapper sends the input token to the proxy router (cw20 `Send`)
//!    with a `Swap` intent
//! 2. The router bridges the input to the canonical router and, as a
//!    separate message, dispatches `ResolveSwap` to it
//!
//! # Canonical resolution
//! 1. The messenger delivers `ResolveSwap` to the canonical router
//! 2. The router swaps the bridged input on the pool manager
//! 3. The router bridges the output back to the proxy router on the
//!    origin domain
//!
//! The two proxy dispatches are not ordered; if the resolution arrives
//! before the bridged input, resolution fails and can be redelivered.

pub mod contract;
pub mod error;
pub mod execute;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
