use cosmwasm_std::Addr;
use cw_storage_plus::Item;

pub const CONTRACT_NAME: &str = "crates.io:crosschain-token";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Contracts allowed to call crosschain mint/burn
pub const BRIDGES: Item<Vec<Addr>> = Item::new("bridges");
