use cosmwasm_std::StdError;
use thiserror::Error;

use common::hooks::HookConfigError;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error(transparent)]
    Bridge(#[from] bridge::ContractError),

    #[error("{0}")]
    InvalidHookConfig(#[from] HookConfigError),
}
