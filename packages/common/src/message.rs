//! The bridge message: the unit of cross-domain communication between
//! bridge instances.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{from_json, to_json_binary, Binary, StdResult, Uint128};

use crate::hooks::HooksConfig;

/// Built by `send` on the source domain and consumed by `relay` on the
/// destination domain. Never mutated in transit.
#[cw_serde]
pub struct BridgeMessage {
    /// Token address (identical on every domain)
    pub token: String,
    /// Initiator on the source domain
    pub from: String,
    /// Recipient on the destination domain
    pub to: String,
    pub amount: Uint128,
    /// Payload for the recipient's relay callback
    pub callback: Option<Binary>,
    /// Hook configuration (hooked bridge only)
    pub hooks: Option<HooksConfig>,
}

impl BridgeMessage {
    pub fn encode(&self) -> StdResult<Binary> {
        to_json_binary(self)
    }

    pub fn decode(payload: &Binary) -> StdResult<Self> {
        from_json(payload)
    }
}
