use cosmwasm_std::{
    entry_point, from_json, to_json_binary, Addr, Binary, Deps, DepsMut, Env, Event, MessageInfo,
    Response, StdResult, Uint128, WasmMsg,
};
use cw2::set_contract_version;
use cw20::{Cw20ExecuteMsg, Cw20ReceiveMsg};

use common::swap::PoolKey;

use crate::error::ContractError;
use crate::math::swap_output;
use crate::msg::{
    ExecuteMsg, InstantiateMsg, MigrateMsg, PoolResponse, QueryMsg, ReceiveMsg,
    SimulateSwapResponse, SwapResponse,
};
use crate::state::{Pool, CONTRACT_NAME, CONTRACT_VERSION, POOLS};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("method", "instantiate"))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Receive(msg) => execute_receive(deps, info, msg),
    }
}

/// cw20 hook. `info.sender` is the token contract.
fn execute_receive(
    deps: DepsMut,
    info: MessageInfo,
    wrapper: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    if wrapper.amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "amount must be greater than zero".to_string(),
        });
    }

    match from_json::<ReceiveMsg>(&wrapper.msg)? {
        ReceiveMsg::AddLiquidity { key } => {
            execute_add_liquidity(deps, info.sender, wrapper.amount, key)
        }
        ReceiveMsg::Swap {
            key,
            zero_for_one,
            recipient,
        } => {
            let recipient = match recipient {
                Some(recipient) => deps.api.addr_validate(&recipient)?,
                None => deps.api.addr_validate(&wrapper.sender)?,
            };
            execute_swap(
                deps,
                info.sender,
                wrapper.amount,
                key,
                zero_for_one,
                recipient,
            )
        }
    }
}

fn validate_key(key: &PoolKey) -> Result<(), ContractError> {
    key.validate().map_err(|e| ContractError::InvalidPoolKey {
        reason: e.to_string(),
    })
}

fn load_pool(deps: Deps, key: &PoolKey) -> Result<Pool, ContractError> {
    POOLS
        .may_load(deps.storage, &key.id())?
        .ok_or_else(|| ContractError::PoolNotFound { pool_id: key.id() })
}

fn execute_add_liquidity(
    deps: DepsMut,
    token: Addr,
    amount: Uint128,
    key: PoolKey,
) -> Result<Response, ContractError> {
    validate_key(&key)?;

    let pool_id = key.id();
    let mut pool = POOLS
        .may_load(deps.storage, &pool_id)?
        .unwrap_or_else(|| Pool::empty(key.clone()));

    if token.as_str() == key.currency0 {
        pool.reserve0 = pool.reserve0.checked_add(amount)?;
    } else if token.as_str() == key.currency1 {
        pool.reserve1 = pool.reserve1.checked_add(amount)?;
    } else {
        return Err(ContractError::WrongInputToken {
            expected: format!("{} or {}", key.currency0, key.currency1),
            got: token.to_string(),
        });
    }
    POOLS.save(deps.storage, &pool_id, &pool)?;

    Ok(Response::new()
        .add_attribute("method", "add_liquidity")
        .add_attribute("pool_id", pool_id)
        .add_attribute("token", token)
        .add_attribute("amount", amount)
        .add_attribute("reserve0", pool.reserve0)
        .add_attribute("reserve1", pool.reserve1))
}

fn execute_swap(
    deps: DepsMut,
    token: Addr,
    amount_in: Uint128,
    key: PoolKey,
    zero_for_one: bool,
    recipient: Addr,
) -> Result<Response, ContractError> {
    validate_key(&key)?;
    let mut pool = load_pool(deps.as_ref(), &key)?;

    let expected = key.input_currency(zero_for_one);
    if token.as_str() != expected {
        return Err(ContractError::WrongInputToken {
            expected: expected.to_string(),
            got: token.to_string(),
        });
    }

    let (reserve_in, reserve_out) = pool.reserves(zero_for_one);
    let amount_out = swap_output(amount_in, reserve_in, reserve_out, key.fee).ok_or(
        ContractError::InsufficientLiquidity {
            amount_in: amount_in.to_string(),
        },
    )?;

    let reserve_in = reserve_in.checked_add(amount_in)?;
    let reserve_out = reserve_out.checked_sub(amount_out)?;
    if zero_for_one {
        pool.reserve0 = reserve_in;
        pool.reserve1 = reserve_out;
    } else {
        pool.reserve1 = reserve_in;
        pool.reserve0 = reserve_out;
    }
    POOLS.save(deps.storage, &key.id(), &pool)?;

    let payout = WasmMsg::Execute {
        contract_addr: key.output_currency(zero_for_one).to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: recipient.to_string(),
            amount: amount_out,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(payout)
        .set_data(to_json_binary(&SwapResponse {
            amount_in,
            amount_out,
        })?)
        .add_attribute("method", "swap")
        .add_event(
            Event::new("pool_swap")
                .add_attribute("pool_id", key.id())
                .add_attribute("zero_for_one", zero_for_one.to_string())
                .add_attribute("amount_in", amount_in)
                .add_attribute("amount_out", amount_out)
                .add_attribute("recipient", recipient),
        ))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Pool { key } => {
            let pool = POOLS.load(deps.storage, &key.id())?;
            to_json_binary(&PoolResponse {
                key: pool.key,
                reserve0: pool.reserve0,
                reserve1: pool.reserve1,
            })
        }
        QueryMsg::SimulateSwap {
            key,
            zero_for_one,
            amount_in,
        } => {
            let pool = POOLS.load(deps.storage, &key.id())?;
            let (reserve_in, reserve_out) = pool.reserves(zero_for_one);
            to_json_binary(&SimulateSwapResponse {
                amount_out: swap_output(amount_in, reserve_in, reserve_out, key.fee)
                    .unwrap_or_default(),
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
