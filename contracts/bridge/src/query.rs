//! Query handlers for the bridge contract.

use cosmwasm_std::{Deps, StdResult};

use crate::msg::{ConfigResponse, PeerResponse};
use crate::state::CONFIG;

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        messenger: config.messenger,
        domain: config.domain,
        peers: config
            .peers
            .into_iter()
            .map(|(domain, address)| PeerResponse {
                domain,
                address: Some(address),
            })
            .collect(),
        hook_gas_limit: config.hook_gas_limit,
    })
}

pub fn query_peer(deps: Deps, domain: u64) -> StdResult<PeerResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(PeerResponse {
        domain,
        address: config.peer(domain).cloned(),
    })
}
