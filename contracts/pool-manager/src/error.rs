use cosmwasm_std::{OverflowError, StdError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("Invalid pool key: {reason}")]
    InvalidPoolKey { reason: String },

    #[error("Pool not found: {pool_id}")]
    PoolNotFound { pool_id: String },

    #[error("Wrong input token: expected {expected}, got {got}")]
    WrongInputToken { expected: String, got: String },

    #[error("Insufficient liquidity: swap of {amount_in} yields no output")]
    InsufficientLiquidity { amount_in: String },

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },
}
