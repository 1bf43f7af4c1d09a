//! Error types for the bridge contract

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Send Errors
    // ========================================================================

    #[error("Invalid recipient: {reason}")]
    InvalidRecipient { reason: String },

    #[error("Unsupported token: {token}")]
    UnsupportedToken { token: String },

    #[error("Unknown domain: no peer configured for domain {domain}")]
    UnknownDomain { domain: u64 },

    // ========================================================================
    // Relay Authentication Errors
    // ========================================================================

    #[error("Unauthorized caller: only the messenger can relay")]
    UnauthorizedCaller,

    #[error("Invalid origin: {sender} is not the bridge peer on domain {domain}")]
    InvalidOrigin { sender: String, domain: u64 },

    // ========================================================================
    // Payload Errors
    // ========================================================================

    #[error("Invalid payload: {reason}")]
    InvalidPayload { reason: String },

    #[error("Unsupported payload: {reason}")]
    UnsupportedPayload { reason: String },

    #[error("Unknown reply id: {id}")]
    UnknownReplyId { id: u64 },
}
