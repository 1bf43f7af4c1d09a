//! Recipient stub implementing every relay capability.
//!
//! Records each call together with its own balance of the relayed token at
//! call time, and rejects any call whose data is [`FAIL`].

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Empty, Env, Event, MessageInfo, Response,
    StdError, StdResult, Uint128,
};
use cw20::{BalanceResponse, Cw20QueryMsg};
use cw_storage_plus::Item;

use common::hooks::RecipientExecuteMsg;

/// Hook data that makes the stub fail.
pub const FAIL: &[u8] = b"fail";

#[cw_serde]
pub struct RecordedCall {
    pub label: String,
    pub caller: Addr,
    pub token: String,
    pub from: String,
    pub amount: Uint128,
    pub data: Binary,
    /// Stub's balance of `token` when the call ran
    pub balance: Uint128,
}

#[cw_serde]
pub enum QueryMsg {
    Calls {},
}

const CALLS: Item<Vec<RecordedCall>> = Item::new("calls");

pub fn instantiate(deps: DepsMut, _: Env, _: MessageInfo, _: Empty) -> StdResult<Response> {
    CALLS.save(deps.storage, &vec![])?;
    Ok(Response::new())
}

pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: RecipientExecuteMsg,
) -> StdResult<Response> {
    let label = msg.label();
    let args = match msg {
        RecipientExecuteMsg::BeforeRelay(args)
        | RecipientExecuteMsg::AfterRelay(args)
        | RecipientExecuteMsg::RelayCallback(args) => args,
    };
    if args.data.as_slice() == FAIL {
        return Err(StdError::generic_err(format!("{} rejected", label)));
    }

    let balance: BalanceResponse = deps.querier.query_wasm_smart(
        &args.token,
        &Cw20QueryMsg::Balance {
            address: env.contract.address.to_string(),
        },
    )?;
    let mut calls = CALLS.load(deps.storage)?;
    calls.push(RecordedCall {
        label: label.to_string(),
        caller: info.sender,
        token: args.token,
        from: args.from,
        amount: args.amount,
        data: args.data,
        balance: balance.balance,
    });
    CALLS.save(deps.storage, &calls)?;

    Ok(Response::new().add_event(Event::new("recipient_hook").add_attribute("hook", label)))
}

pub fn query(deps: Deps, _: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Calls {} => to_json_binary(&CALLS.load(deps.storage)?),
    }
}
