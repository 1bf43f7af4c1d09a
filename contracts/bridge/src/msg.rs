//! Message types for the bridge contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

use common::domain::DomainPeer;
use common::transport::CrossDomainMsg;

// ============================================================================
// Instantiate & Migrate
// ============================================================================

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    /// Messenger on this domain; the only caller allowed to relay
    pub messenger: String,
    /// Bridge address on every domain this bridge talks to
    pub peers: Vec<DomainPeer>,
    /// Optional gas cap for recipient callbacks
    pub hook_gas_limit: Option<u64>,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    /// Burn `amount` of `token` from the caller and dispatch a bridge
    /// message minting it to `to` on `destination`.
    ///
    /// Response data: the 32-byte message identifier.
    Send {
        token: String,
        to: String,
        amount: Uint128,
        destination: u64,
        /// When set, the recipient's `RelayCallback` is invoked after the
        /// mint with this payload
        callback: Option<Binary>,
    },

    /// Relay entry point, callable only by the messenger
    ReceiveMessage(CrossDomainMsg),
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(PeerResponse)]
    Peer { domain: u64 },
}

#[cw_serde]
pub struct ConfigResponse {
    pub messenger: Addr,
    pub domain: u64,
    pub peers: Vec<PeerResponse>,
    pub hook_gas_limit: Option<u64>,
}

#[cw_serde]
pub struct PeerResponse {
    pub domain: u64,
    pub address: Option<Addr>,
}
