//! Swap initiation on a proxy domain.

use cosmwasm_std::{
    to_json_binary, Addr, DepsMut, Event, Int128, MessageInfo, Response, Uint128, WasmMsg,
};
use cw20::Cw20ReceiveMsg;

use common::swap::{PoolKey, SwapIntent};
use common::transport::TransportExecuteMsg;

use crate::error::ContractError;
use crate::msg::RouterMessage;
use crate::state::{Config, CONFIG};

/// Runs the proxy-side checks in order and returns the canonical router.
fn validate_intent(
    config: &Config,
    token: &Addr,
    received: Uint128,
    pool_key: &PoolKey,
    zero_for_one: bool,
    amount_specified: Int128,
) -> Result<Addr, ContractError> {
    if config.is_canonical() {
        return Err(ContractError::NotProxyDomain);
    }
    if amount_specified.i128() > 0 {
        return Err(ContractError::ExactOutputUnsupported);
    }
    if amount_specified.i128() == 0 {
        return Err(ContractError::InvalidAmount {
            reason: "amount_specified must not be zero".to_string(),
        });
    }
    pool_key
        .validate()
        .map_err(|e| ContractError::InvalidPoolKey {
            reason: e.to_string(),
        })?;

    let expected = pool_key.input_currency(zero_for_one);
    if token.as_str() != expected {
        return Err(ContractError::InvalidInputToken {
            expected: expected.to_string(),
            got: token.to_string(),
        });
    }

    let specified = Uint128::new(amount_specified.i128().unsigned_abs());
    if specified != received {
        return Err(ContractError::AmountMismatch {
            specified: specified.to_string(),
            received: received.to_string(),
        });
    }

    config
        .peer(config.canonical_domain)
        .cloned()
        .ok_or(ContractError::UnknownDomain {
            domain: config.canonical_domain,
        })
}

/// cw20 hook: the swapper has sent the input token to this router.
///
/// Bridges the input to the canonical router and dispatches the swap intent
/// to it. The two messages travel independently.
pub fn execute_swap(
    deps: DepsMut,
    info: MessageInfo,
    wrapper: Cw20ReceiveMsg,
    pool_key: PoolKey,
    zero_for_one: bool,
    amount_specified: Int128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let token = info.sender;
    let canonical_router = validate_intent(
        &config,
        &token,
        wrapper.amount,
        &pool_key,
        zero_for_one,
        amount_specified,
    )?;

    let intent = SwapIntent {
        origin_domain: config.domain,
        pool_key,
        zero_for_one,
        amount_specified,
    };

    let bridge_input = WasmMsg::Execute {
        contract_addr: config.bridge.to_string(),
        msg: to_json_binary(&bridge::msg::ExecuteMsg::Send {
            token: token.to_string(),
            to: canonical_router.to_string(),
            amount: wrapper.amount,
            destination: config.canonical_domain,
            callback: None,
        })?,
        funds: vec![],
    };
    let dispatch_intent = WasmMsg::Execute {
        contract_addr: config.messenger.to_string(),
        msg: to_json_binary(&TransportExecuteMsg::SendMessage {
            destination: config.canonical_domain,
            target: canonical_router.to_string(),
            message: RouterMessage::ResolveSwap(intent.clone()).encode()?,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(bridge_input)
        .add_message(dispatch_intent)
        .add_attribute("action", "swap")
        .add_event(
            Event::new("swap_initiated")
                .add_attribute("swapper", wrapper.sender)
                .add_attribute("token_in", token)
                .add_attribute("amount_in", wrapper.amount)
                .add_attribute("pool_id", intent.pool_key.id())
                .add_attribute("zero_for_one", zero_for_one.to_string())
                .add_attribute("canonical_domain", config.canonical_domain.to_string()),
        ))
}
