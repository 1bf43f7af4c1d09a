use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;
use cw_storage_plus::Map;

use common::swap::PoolKey;

pub const CONTRACT_NAME: &str = "crates.io:interop-pool-manager";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cw_serde]
pub struct Pool {
    pub key: PoolKey,
    pub reserve0: Uint128,
    pub reserve1: Uint128,
}

impl Pool {
    pub fn empty(key: PoolKey) -> Self {
        Self {
            key,
            reserve0: Uint128::zero(),
            reserve1: Uint128::zero(),
        }
    }

    /// (reserve_in, reserve_out) for a swap direction.
    pub fn reserves(&self, zero_for_one: bool) -> (Uint128, Uint128) {
        if zero_for_one {
            (self.reserve0, self.reserve1)
        } else {
            (self.reserve1, self.reserve0)
        }
    }
}

/// Pools by `PoolKey::id`
pub const POOLS: Map<&str, Pool> = Map::new("pools");
