use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

use common::hooks::HooksConfig;
use common::transport::CrossDomainMsg;

pub use bridge::msg::{ConfigResponse, InstantiateMsg, MigrateMsg, PeerResponse, QueryMsg};

#[cw_serde]
pub enum ExecuteMsg {
    /// Burn `amount` of `token` from the caller and dispatch a bridge
    /// message minting it to `to` on `destination`, with optional recipient
    /// hooks.
    ///
    /// Response data: the 32-byte message identifier.
    Send {
        token: String,
        to: String,
        amount: Uint128,
        destination: u64,
        hooks: Option<HooksConfig>,
    },

    /// Relay entry point, callable only by the messenger
    ReceiveMessage(CrossDomainMsg),
}
