use cosmwasm_std::{
    entry_point, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response, StdResult, Uint128,
};
use cw2::set_contract_version;

use bridge::contract::build_config;
use bridge::execute::{
    authenticate, begin_relay, decode_message, dispatch_send, handle_relay_reply, RelayTransfer,
    SendRequest,
};
use bridge::state::{CONFIG, RELAY_SEQ};
use common::hooks::{HookKind, HookSet, HooksConfig, RecipientExecuteMsg};
use common::transport::CrossDomainMsg;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};

pub const CONTRACT_NAME: &str = "crates.io:interop-hooked-bridge";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

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
            hooks,
        } => execute_send(deps, env, info, token, to, amount, destination, hooks),
        ExecuteMsg::ReceiveMessage(msg) => execute_receive_message(deps, info, msg),
    }
}

#[allow(clippy::too_many_arguments)]
fn execute_send(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: String,
    to: String,
    amount: Uint128,
    destination: u64,
    hooks: Option<HooksConfig>,
) -> Result<Response, ContractError> {
    // Normalized: disabled payloads are dropped before they hit the wire
    let hooks = hooks
        .map(|config| config.validate().map(|set| set.to_config()))
        .transpose()?;

    let config = CONFIG.load(deps.storage)?;
    let request = SendRequest::validate(
        deps.as_ref(),
        &config,
        info.sender,
        token,
        to,
        amount,
        destination,
    )?;

    Ok(dispatch_send(
        deps.as_ref(),
        &env,
        &config,
        request,
        None,
        hooks,
    )?)
}

fn execute_receive_message(
    deps: DepsMut,
    info: MessageInfo,
    msg: CrossDomainMsg,
) -> Result<Response, ContractError> {
    let config = authenticate(deps.as_ref(), &info, &msg)?;

    let message = decode_message(&msg.payload)?;
    if message.callback.is_some() {
        return Err(bridge::ContractError::UnsupportedPayload {
            reason: "relay callbacks are not supported by the hooked bridge".to_string(),
        }
        .into());
    }
    let hooks = match &message.hooks {
        Some(config) => config.validate()?,
        None => HookSet::default(),
    };

    let transfer = RelayTransfer::from_message(deps.as_ref(), &message, msg.source_domain)?;
    let call = |kind: HookKind| {
        hooks
            .payload(kind)
            .map(|data| RecipientExecuteMsg::hook(kind, transfer.hook_args(data.clone())))
    };
    let pre_mint = call(HookKind::PreMint);
    let post_mint = call(HookKind::PostMint);

    Ok(begin_relay(deps, &config, transfer, pre_mint, post_mint)?)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    Ok(handle_relay_reply(deps, msg)?)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    bridge::contract::query(deps, env, msg)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
