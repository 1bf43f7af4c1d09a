//! State definitions for the bridge contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

use common::domain::{peer_for, DomainId};
use common::hooks::RecipientExecuteMsg;

pub const CONTRACT_NAME: &str = "crates.io:interop-bridge";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Configuration
// ============================================================================

/// Contract configuration. Resolved once at instantiation, never updated.
#[cw_serde]
pub struct Config {
    /// Trusted messenger on this domain
    pub messenger: Addr,
    /// Domain this bridge runs on (read from the messenger)
    pub domain: DomainId,
    /// Address of the bridge instance on each known domain
    pub peers: Vec<(DomainId, Addr)>,
    /// Gas cap for recipient hook/callback sub-messages
    pub hook_gas_limit: Option<u64>,
}

impl Config {
    pub fn peer(&self, domain: DomainId) -> Option<&Addr> {
        peer_for(&self.peers, domain)
    }
}

// ============================================================================
// Relay Sequencing
// ============================================================================

/// A relay whose mint has been scheduled but not yet confirmed.
#[cw_serde]
pub struct PendingRelay {
    pub token: Addr,
    /// Initiator on the source domain (not an address on this domain)
    pub from: String,
    pub to: Addr,
    pub amount: Uint128,
    pub source_domain: DomainId,
    /// Recipient capability invoked before the mint
    pub pre_mint: Option<RecipientExecuteMsg>,
    /// Recipient capability invoked after the mint and relay event
    pub post_mint: Option<RecipientExecuteMsg>,
}

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Sequence number of the next relay
pub const RELAY_SEQ: Item<u64> = Item::new("relay_seq");

/// In-flight relays, keyed by relay sequence number
pub const PENDING_RELAYS: Map<u64, PendingRelay> = Map::new("pending_relays");
