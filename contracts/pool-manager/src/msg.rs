use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;
use cw20::Cw20ReceiveMsg;

use common::swap::PoolKey;

pub use common::swap::PoolReceiveMsg as ReceiveMsg;

#[cw_serde]
pub struct InstantiateMsg {}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    /// cw20 hook: `AddLiquidity` or `Swap`, see [`ReceiveMsg`]
    Receive(Cw20ReceiveMsg),
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(PoolResponse)]
    Pool { key: PoolKey },
    #[returns(SimulateSwapResponse)]
    SimulateSwap {
        key: PoolKey,
        zero_for_one: bool,
        amount_in: Uint128,
    },
}

#[cw_serde]
pub struct PoolResponse {
    pub key: PoolKey,
    pub reserve0: Uint128,
    pub reserve1: Uint128,
}

#[cw_serde]
pub struct SimulateSwapResponse {
    pub amount_out: Uint128,
}

/// Response data of a swap
#[cw_serde]
pub struct SwapResponse {
    pub amount_in: Uint128,
    pub amount_out: Uint128,
}
