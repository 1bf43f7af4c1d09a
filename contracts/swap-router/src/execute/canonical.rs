//! Swap resolution on the canonical domain.

use cosmwasm_std::{
    to_json_binary, Addr, Deps, DepsMut, Env, Event, MessageInfo, Reply, Response, StdResult,
    SubMsg, Uint128, WasmMsg,
};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

use common::swap::{PoolReceiveMsg, SwapIntent};
use common::transport::CrossDomainMsg;

use crate::error::ContractError;
use crate::msg::RouterMessage;
use crate::state::{Config, PendingSwap, CONFIG, PENDING_SWAPS, SWAP_SEQ};

fn token_balance(deps: Deps, token: &Addr, owner: &Addr) -> StdResult<Uint128> {
    let res: BalanceResponse = deps.querier.query_wasm_smart(
        token,
        &Cw20QueryMsg::Balance {
            address: owner.to_string(),
        },
    )?;
    Ok(res.balance)
}

/// Authenticates a messenger delivery: trusted caller, known router origin,
/// and this must be the canonical domain.
fn authenticate(
    deps: Deps,
    info: &MessageInfo,
    msg: &CrossDomainMsg,
) -> Result<Config, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if info.sender != config.messenger {
        return Err(ContractError::UnauthorizedCaller);
    }
    if config.peer(msg.source_domain).map(Addr::as_str) != Some(msg.sender.as_str()) {
        return Err(ContractError::InvalidOrigin {
            sender: msg.sender.clone(),
            domain: msg.source_domain,
        });
    }
    if !config.is_canonical() {
        return Err(ContractError::NotCanonicalDomain {
            canonical_domain: config.canonical_domain,
        });
    }

    Ok(config)
}

/// Messenger delivery entry point.
pub fn execute_receive_message(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: CrossDomainMsg,
) -> Result<Response, ContractError> {
    let config = authenticate(deps.as_ref(), &info, &msg)?;

    let message =
        RouterMessage::decode(&msg.payload).map_err(|e| ContractError::InvalidPayload {
            reason: e.to_string(),
        })?;
    match message {
        RouterMessage::ResolveSwap(intent) => {
            if intent.origin_domain != msg.source_domain {
                return Err(ContractError::InvalidOrigin {
                    sender: msg.sender,
                    domain: intent.origin_domain,
                });
            }
            resolve_swap(deps, env, &config, intent)
        }
    }
}

/// Swaps the bridged input on the pool manager.
///
/// The pool call is a sub-message; the output amount is measured as the
/// change in this router's output-token balance once it returns. If the
/// bridged input has not been minted to this router yet, the cw20 send fails
/// and the whole delivery reverts.
fn resolve_swap(
    deps: DepsMut,
    env: Env,
    config: &Config,
    intent: SwapIntent,
) -> Result<Response, ContractError> {
    if !intent.is_exact_input() {
        return Err(ContractError::ExactOutputUnsupported);
    }
    intent
        .pool_key
        .validate()
        .map_err(|e| ContractError::InvalidPoolKey {
            reason: e.to_string(),
        })?;

    let pool_manager = config
        .pool_manager
        .clone()
        .ok_or(ContractError::MissingPoolManager)?;
    let origin_router = config
        .peer(intent.origin_domain)
        .cloned()
        .ok_or(ContractError::UnknownDomain {
            domain: intent.origin_domain,
        })?;

    let input_token = deps
        .api
        .addr_validate(intent.pool_key.input_currency(intent.zero_for_one))?;
    let output_token = deps
        .api
        .addr_validate(intent.pool_key.output_currency(intent.zero_for_one))?;
    let balance_before = token_balance(deps.as_ref(), &output_token, &env.contract.address)?;

    let seq = SWAP_SEQ.may_load(deps.storage)?.unwrap_or_default();
    SWAP_SEQ.save(deps.storage, &(seq + 1))?;

    let amount_in = intent.input_amount();
    let pool_swap = WasmMsg::Execute {
        contract_addr: input_token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Send {
            contract: pool_manager.to_string(),
            amount: amount_in,
            msg: to_json_binary(&PoolReceiveMsg::Swap {
                key: intent.pool_key.clone(),
                zero_for_one: intent.zero_for_one,
                recipient: None,
            })?,
        })?,
        funds: vec![],
    };

    PENDING_SWAPS.save(
        deps.storage,
        seq,
        &PendingSwap {
            intent,
            output_token,
            balance_before,
            origin_router,
        },
    )?;

    Ok(Response::new()
        .add_submessage(SubMsg::reply_on_success(pool_swap, seq))
        .add_attribute("action", "resolve_swap")
        .add_attribute("swap_seq", seq.to_string()))
}

/// Pool call returned: bridge the output back to the origin router.
pub fn handle_swap_reply(deps: DepsMut, env: Env, reply: Reply) -> Result<Response, ContractError> {
    let pending = PENDING_SWAPS
        .may_load(deps.storage, reply.id)?
        .ok_or(ContractError::UnknownReplyId { id: reply.id })?;
    PENDING_SWAPS.remove(deps.storage, reply.id);

    let config = CONFIG.load(deps.storage)?;
    let balance_after =
        token_balance(deps.as_ref(), &pending.output_token, &env.contract.address)?;
    let amount_out = balance_after.checked_sub(pending.balance_before)?;

    let intent = pending.intent;
    let bridge_output = WasmMsg::Execute {
        contract_addr: config.bridge.to_string(),
        msg: to_json_binary(&bridge::msg::ExecuteMsg::Send {
            token: pending.output_token.to_string(),
            to: pending.origin_router.to_string(),
            amount: amount_out,
            destination: intent.origin_domain,
            callback: None,
        })?,
        funds: vec![],
    };

    Ok(Response::new().add_message(bridge_output).add_event(
        Event::new("swap_resolved")
            .add_attribute("origin_domain", intent.origin_domain.to_string())
            .add_attribute("pool_id", intent.pool_key.id())
            .add_attribute("zero_for_one", intent.zero_for_one.to_string())
            .add_attribute("amount_in", intent.input_amount())
            .add_attribute("token_out", pending.output_token)
            .add_attribute("amount_out", amount_out)
            .add_attribute("recipient", pending.origin_router),
    ))
}
