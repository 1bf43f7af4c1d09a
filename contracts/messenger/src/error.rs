use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: only the relayer can deliver messages")]
    UnauthorizedRelayer,

    #[error("Cannot send a message to the local domain {domain}")]
    MessageToSelf { domain: u64 },

    #[error("Wrong destination: envelope targets domain {destination}, this is domain {domain}")]
    WrongDestination { destination: u64, domain: u64 },

    #[error("Message hash mismatch: expected {expected}, got {got}")]
    MessageHashMismatch { expected: String, got: String },

    #[error("Invalid target address: {reason}")]
    InvalidTarget { reason: String },
}
