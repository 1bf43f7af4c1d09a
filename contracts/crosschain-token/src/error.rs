use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Cw20(#[from] cw20_base::ContractError),

    #[error("Unauthorized: only a registered bridge can mint or burn")]
    Unauthorized,

    #[error("Insufficient balance: {holder} holds {balance}, requested {requested}")]
    InsufficientBalance {
        holder: String,
        balance: Uint128,
        requested: Uint128,
    },
}
