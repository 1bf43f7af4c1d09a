//! Error types for the swap router contract

use cosmwasm_std::{OverflowError, StdError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    // ========================================================================
    // Configuration Errors
    // ========================================================================

    #[error("Missing pool manager: the canonical router requires a pool manager")]
    MissingPoolManager,

    #[error("Unknown domain: no router peer configured for domain {domain}")]
    UnknownDomain { domain: u64 },

    // ========================================================================
    // Swap Initiation Errors
    // ========================================================================

    #[error("Not a proxy domain: swaps cannot be initiated on the canonical domain")]
    NotProxyDomain,

    #[error("Exact output unsupported: amount_specified must be negative (exact input)")]
    ExactOutputUnsupported,

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Invalid pool key: {reason}")]
    InvalidPoolKey { reason: String },

    #[error("Invalid input token: expected {expected}, got {got}")]
    InvalidInputToken { expected: String, got: String },

    #[error("Amount mismatch: intent specifies {specified}, received {received}")]
    AmountMismatch { specified: String, received: String },

    // ========================================================================
    // Resolution Errors
    // ========================================================================

    #[error("Unauthorized caller: only the messenger can deliver swap messages")]
    UnauthorizedCaller,

    #[error("Invalid origin: {sender} on domain {domain} is not a known router")]
    InvalidOrigin { sender: String, domain: u64 },

    #[error("Not the canonical domain: swaps resolve only on domain {canonical_domain}")]
    NotCanonicalDomain { canonical_domain: u64 },

    #[error("Invalid payload: {reason}")]
    InvalidPayload { reason: String },

    #[error("Unknown reply id: {id}")]
    UnknownReplyId { id: u64 },
}
