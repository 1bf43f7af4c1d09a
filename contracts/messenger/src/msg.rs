//! Message types for the messenger.
//!
//! Execute and query messages are the transport interface defined in
//! `common::transport`, so callers and the contract share one definition.

use cosmwasm_schema::cw_serde;

pub use common::transport::{
    MessageNonceResponse, MessageResponse, OutboxResponse, TransportConfigResponse,
    TransportExecuteMsg as ExecuteMsg, TransportQueryMsg as QueryMsg,
};

#[cw_serde]
pub struct InstantiateMsg {
    /// Domain this messenger runs on
    pub domain: u64,
    /// Only address allowed to deliver messages (anyone if unset)
    pub relayer: Option<String>,
}

#[cw_serde]
pub struct MigrateMsg {}
