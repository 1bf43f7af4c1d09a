use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, Event, HexBinary, MessageInfo, Order,
    Response, StdResult,
};
use cw2::set_contract_version;
use cw_storage_plus::Bound;

use common::hash::bytes32_to_hex;
use common::transport::{CrossDomainMsg, Envelope};

use crate::error::ContractError;
use crate::msg::{
    ExecuteMsg, InstantiateMsg, MessageNonceResponse, MessageResponse, MigrateMsg,
    OutboxResponse, QueryMsg, TransportConfigResponse,
};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, MESSAGE_NONCE, OUTBOX};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let relayer = msg
        .relayer
        .map(|relayer| deps.api.addr_validate(&relayer))
        .transpose()?;

    CONFIG.save(
        deps.storage,
        &Config {
            domain: msg.domain,
            relayer,
        },
    )?;
    MESSAGE_NONCE.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("domain", msg.domain.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SendMessage {
            destination,
            target,
            message,
        } => execute_send_message(deps, env, info, destination, target, message),
        ExecuteMsg::RelayMessage { envelope, msg_hash } => {
            execute_relay_message(deps, info, envelope, msg_hash)
        }
    }
}

fn execute_send_message(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    destination: u64,
    target: String,
    message: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if destination == config.domain {
        return Err(ContractError::MessageToSelf {
            domain: config.domain,
        });
    }
    if target.trim().is_empty() {
        return Err(ContractError::InvalidTarget {
            reason: "target must not be empty".to_string(),
        });
    }

    let nonce = MESSAGE_NONCE.load(deps.storage)?;
    MESSAGE_NONCE.save(deps.storage, &(nonce + 1))?;

    let envelope = Envelope {
        source: config.domain,
        destination,
        nonce,
        sender: info.sender.to_string(),
        target,
        message,
    };
    let msg_hash = envelope.hash();
    OUTBOX.save(deps.storage, nonce, &(envelope.clone(), msg_hash))?;

    Ok(Response::new()
        .set_data(Binary::from(msg_hash.to_vec()))
        .add_attribute("action", "send_message")
        .add_event(
            Event::new("sent_message")
                .add_attribute("msg_hash", bytes32_to_hex(&msg_hash))
                .add_attribute("nonce", nonce.to_string())
                .add_attribute("sender", envelope.sender)
                .add_attribute("target", envelope.target)
                .add_attribute("destination", destination.to_string()),
        ))
}

fn execute_relay_message(
    deps: DepsMut,
    info: MessageInfo,
    envelope: Envelope,
    msg_hash: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if let Some(relayer) = &config.relayer {
        if info.sender != *relayer {
            return Err(ContractError::UnauthorizedRelayer);
        }
    }

    if envelope.destination != config.domain {
        return Err(ContractError::WrongDestination {
            destination: envelope.destination,
            domain: config.domain,
        });
    }

    let computed = envelope.hash();
    if msg_hash.as_slice() != computed.as_slice() {
        return Err(ContractError::MessageHashMismatch {
            expected: bytes32_to_hex(&computed),
            got: format!("0x{}", HexBinary::from(msg_hash.as_slice()).to_hex()),
        });
    }

    let target = deps
        .api
        .addr_validate(&envelope.target)
        .map_err(|e| ContractError::InvalidTarget {
            reason: e.to_string(),
        })?;

    let delivery = CrossDomainMsg {
        sender: envelope.sender.clone(),
        source_domain: envelope.source,
        payload: envelope.message,
    }
    .into_cosmos_msg(target.clone())?;

    Ok(Response::new()
        .add_message(delivery)
        .add_attribute("action", "relay_message")
        .add_event(
            Event::new("relayed_message")
                .add_attribute("msg_hash", bytes32_to_hex(&computed))
                .add_attribute("source", envelope.source.to_string())
                .add_attribute("nonce", envelope.nonce.to_string())
                .add_attribute("sender", envelope.sender)
                .add_attribute("target", target),
        ))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::MessageNonce {} => to_json_binary(&MessageNonceResponse {
            nonce: MESSAGE_NONCE.load(deps.storage)?,
        }),
        QueryMsg::Message { nonce } => to_json_binary(&query_message(deps, nonce)?),
        QueryMsg::Outbox { start_after, limit } => {
            to_json_binary(&query_outbox(deps, start_after, limit)?)
        }
    }
}

fn query_config(deps: Deps) -> StdResult<TransportConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(TransportConfigResponse {
        domain: config.domain,
        relayer: config.relayer,
    })
}

fn query_message(deps: Deps, nonce: u64) -> StdResult<MessageResponse> {
    let (envelope, msg_hash) = OUTBOX.load(deps.storage, nonce)?;
    Ok(MessageResponse {
        envelope,
        msg_hash: Binary::from(msg_hash.to_vec()),
    })
}

fn query_outbox(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<OutboxResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let messages = OUTBOX
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (_, (envelope, msg_hash)) = item?;
            Ok(MessageResponse {
                envelope,
                msg_hash: Binary::from(msg_hash.to_vec()),
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(OutboxResponse { messages })
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
