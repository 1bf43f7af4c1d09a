//! State definitions for the swap router contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

use common::domain::{peer_for, DomainId};
use common::swap::SwapIntent;

pub const CONTRACT_NAME: &str = "crates.io:interop-swap-router";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Router configuration, fixed at instantiation.
#[cw_serde]
pub struct Config {
    pub domain: DomainId,
    pub canonical_domain: DomainId,
    pub messenger: Addr,
    pub bridge: Addr,
    /// Set on the canonical domain only
    pub pool_manager: Option<Addr>,
    /// Router address on each known domain
    pub peers: Vec<(DomainId, Addr)>,
}

impl Config {
    pub fn is_canonical(&self) -> bool {
        self.domain == self.canonical_domain
    }

    pub fn peer(&self, domain: DomainId) -> Option<&Addr> {
        peer_for(&self.peers, domain)
    }
}

/// A canonical swap whose pool call is in flight.
#[cw_serde]
pub struct PendingSwap {
    pub intent: SwapIntent,
    pub output_token: Addr,
    /// Router's output-token balance before the pool call
    pub balance_before: Uint128,
    /// Proxy router the output is bridged back to
    pub origin_router: Addr,
}

pub const CONFIG: Item<Config> = Item::new("config");

pub const SWAP_SEQ: Item<u64> = Item::new("swap_seq");

/// In-flight canonical swaps, keyed by reply id
pub const PENDING_SWAPS: Map<u64, PendingSwap> = Map::new("pending_swaps");
