//! Pool Manager Contract
//!
//! Holds constant-product pools keyed by `PoolKey` over pairs of cw20
//! tokens. Liquidity and swap input arrive through the cw20 `Send` hook.

pub mod contract;
pub mod error;
pub mod math;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
