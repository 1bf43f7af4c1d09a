//! Swap Router Contract - Entry Points

use cosmwasm_std::{
    entry_point, from_json, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply,
    Response, StdResult,
};
use cw2::set_contract_version;

use common::domain::resolve_peers;
use common::transport::{TransportConfigResponse, TransportQueryMsg};

use crate::error::ContractError;
use crate::execute::{execute_receive_message, execute_swap, handle_swap_reply};
use crate::msg::{ConfigResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, ReceiveMsg};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, SWAP_SEQ};

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

    let messenger = deps.api.addr_validate(&msg.messenger)?;
    let bridge = deps.api.addr_validate(&msg.bridge)?;
    let transport: TransportConfigResponse = deps
        .querier
        .query_wasm_smart(&messenger, &TransportQueryMsg::Config {})?;

    let is_canonical = transport.domain == msg.canonical_domain;
    let pool_manager = match (is_canonical, msg.pool_manager) {
        (true, Some(pool_manager)) => Some(deps.api.addr_validate(&pool_manager)?),
        (true, None) => return Err(ContractError::MissingPoolManager),
        (false, _) => None,
    };

    let config = Config {
        domain: transport.domain,
        canonical_domain: msg.canonical_domain,
        messenger,
        bridge,
        pool_manager,
        peers: resolve_peers(deps.api, &env.contract.address, msg.peers)?,
    };
    CONFIG.save(deps.storage, &config)?;
    SWAP_SEQ.save(deps.storage, &0)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("domain", config.domain.to_string())
        .add_attribute("canonical_domain", config.canonical_domain.to_string())
        .add_attribute("is_canonical", is_canonical.to_string()))
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
        ExecuteMsg::Receive(wrapper) => match from_json::<ReceiveMsg>(&wrapper.msg)? {
            ReceiveMsg::Swap {
                pool_key,
                zero_for_one,
                amount_specified,
            } => execute_swap(deps, info, wrapper, pool_key, zero_for_one, amount_specified),
        },
        ExecuteMsg::ReceiveMessage(msg) => execute_receive_message(deps, env, info, msg),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, env: Env, msg: Reply) -> Result<Response, ContractError> {
    handle_swap_reply(deps, env, msg)
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => {
            let config = CONFIG.load(deps.storage)?;
            to_json_binary(&ConfigResponse {
                domain: config.domain,
                canonical_domain: config.canonical_domain,
                is_canonical: config.is_canonical(),
                messenger: config.messenger,
                bridge: config.bridge,
                pool_manager: config.pool_manager,
                peers: config.peers,
            })
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
