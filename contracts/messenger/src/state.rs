use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

use common::transport::Envelope;

pub const CONTRACT_NAME: &str = "crates.io:interop-messenger";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cw_serde]
pub struct Config {
    pub domain: u64,
    pub relayer: Option<Addr>,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Nonce of the next dispatched message
pub const MESSAGE_NONCE: Item<u64> = Item::new("message_nonce");

/// Dispatched envelopes
/// Key: nonce, Value: (envelope, 32-byte hash)
pub const OUTBOX: Map<u64, (Envelope, [u8; 32])> = Map::new("outbox");
