//! Message types for the swap router contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{from_json, to_json_binary, Addr, Binary, Int128, StdResult};
use cw20::Cw20ReceiveMsg;

use common::domain::DomainPeer;
use common::swap::{PoolKey, SwapIntent};
use common::transport::CrossDomainMsg;

#[cw_serde]
pub struct InstantiateMsg {
    /// Domain hosting the liquidity
    pub canonical_domain: u64,
    pub messenger: String,
    /// Plain bridge used to move input and output tokens
    pub bridge: String,
    /// Required on the canonical domain, ignored elsewhere
    pub pool_manager: Option<String>,
    /// Router address on every domain this router talks to
    pub peers: Vec<DomainPeer>,
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    /// cw20 hook carrying a [`ReceiveMsg`]; proxy domains only
    Receive(Cw20ReceiveMsg),
    /// Messenger delivery of a [`RouterMessage`]; canonical domain only
    ReceiveMessage(CrossDomainMsg),
}

/// cw20 hook message
#[cw_serde]
pub enum ReceiveMsg {
    /// Swap the sent tokens on the canonical pool. Negative
    /// `amount_specified` means exact input and must equal the sent amount.
    Swap {
        pool_key: PoolKey,
        zero_for_one: bool,
        amount_specified: Int128,
    },
}

/// Router-to-router message carried by the messenger
#[cw_serde]
pub enum RouterMessage {
    ResolveSwap(SwapIntent),
}

impl RouterMessage {
    pub fn encode(&self) -> StdResult<Binary> {
        to_json_binary(self)
    }

    pub fn decode(payload: &Binary) -> StdResult<Self> {
        from_json(payload)
    }
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub domain: u64,
    pub canonical_domain: u64,
    pub is_canonical: bool,
    pub messenger: Addr,
    pub bridge: Addr,
    pub pool_manager: Option<Addr>,
    pub peers: Vec<(u64, Addr)>,
}
