//! Interop Bridge Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Send and relay handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult,
};
use cw2::set_contract_version;

use common::domain::resolve_peers;
use common::transport::{TransportConfigResponse, TransportQueryMsg};

use crate::error::ContractError;
use crate::execute::{execute_receive_message, execute_send, handle_relay_reply};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{query_config, query_peer};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, RELAY_SEQ};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = build_config(deps.as_ref(), &env, msg)?;
    CONFIG.save(deps.storage, &config)?;
    RELAY_SEQ.save(deps.storage, &0)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("messenger", config.messenger)
        .add_attribute("domain", config.domain.to_string())
        .add_attribute("peer_count", config.peers.len().to_string()))
}

/// Resolves the instantiate message into the immutable bridge config.
///
/// The local domain is read from the messenger, and peers without an
/// explicit address resolve to this contract's own address.
pub fn build_config(deps: Deps, env: &Env, msg: InstantiateMsg) -> Result<Config, ContractError> {
    let messenger = deps.api.addr_validate(&msg.messenger)?;
    let transport: TransportConfigResponse = deps
        .querier
        .query_wasm_smart(&messenger, &TransportQueryMsg::Config {})?;
    let peers = resolve_peers(deps.api, &env.contract.address, msg.peers)?;

    Ok(Config {
        messenger,
        domain: transport.domain,
        peers,
        hook_gas_limit: msg.hook_gas_limit,
    })
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Send {
            token,
            to,
            amount,
            destination,
            callback,
        } => execute_send(
            deps,
            env,
            info.sender,
            token,
            to,
            amount,
            destination,
            callback,
        ),
        ExecuteMsg::ReceiveMessage(msg) => execute_receive_message(deps, info, msg),
    }
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    handle_relay_reply(deps, msg)
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Peer { domain } => to_json_binary(&query_peer(deps, domain)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
