use cosmwasm_std::{
    entry_point, to_json_binary, Addr, Binary, Deps, DepsMut, Env, Event, MessageInfo, Response,
    StdResult, Storage, Uint128,
};
use cw2::set_contract_version;
use cw20_base::contract::{
    execute_burn, execute_send, execute_transfer, query_balance, query_token_info,
};
use cw20_base::state::{BALANCES, TOKEN_INFO};

use common::ledger::CROSSCHAIN_INTERFACE_ID;

use crate::error::ContractError;
use crate::msg::{BridgesResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::state::{BRIDGES, CONTRACT_NAME, CONTRACT_VERSION};

/// Interface identifier of the plain cw20 surface.
pub const CW20_INTERFACE_ID: &str = "cw20";

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let bridges = msg
        .bridges
        .iter()
        .map(|bridge| deps.api.addr_validate(bridge))
        .collect::<StdResult<Vec<_>>>()?;

    cw20_base::contract::instantiate(
        deps.branch(),
        env,
        info,
        cw20_base::msg::InstantiateMsg {
            name: msg.name,
            symbol: msg.symbol,
            decimals: msg.decimals,
            initial_balances: msg.initial_balances,
            mint: None,
            marketing: None,
        },
    )?;
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    BRIDGES.save(deps.storage, &bridges)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("bridge_count", bridges.len().to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::CrosschainMint { to, amount } => {
            execute_crosschain_mint(deps, info, to, amount)
        }
        ExecuteMsg::CrosschainBurn { from, amount } => {
            execute_crosschain_burn(deps, info, from, amount)
        }
        ExecuteMsg::Transfer { recipient, amount } => {
            Ok(execute_transfer(deps, env, info, recipient, amount)?)
        }
        ExecuteMsg::Send {
            contract,
            amount,
            msg,
        } => Ok(execute_send(deps, env, info, contract, amount, msg)?),
        ExecuteMsg::Burn { amount } => Ok(execute_burn(deps, env, info, amount)?),
    }
}

fn ensure_bridge(storage: &dyn Storage, sender: &Addr) -> Result<(), ContractError> {
    let bridges = BRIDGES.load(storage)?;
    if !bridges.contains(sender) {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

fn execute_crosschain_mint(
    deps: DepsMut,
    info: MessageInfo,
    to: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_bridge(deps.storage, &info.sender)?;

    let to_addr = deps.api.addr_validate(&to)?;

    BALANCES.update(deps.storage, &to_addr, |balance| -> StdResult<_> {
        Ok(balance.unwrap_or_default().checked_add(amount)?)
    })?;
    TOKEN_INFO.update(deps.storage, |mut token_info| -> StdResult<_> {
        token_info.total_supply = token_info.total_supply.checked_add(amount)?;
        Ok(token_info)
    })?;

    Ok(Response::new()
        .add_attribute("action", "crosschain_mint")
        .add_event(
            Event::new("crosschain_mint")
                .add_attribute("to", to_addr)
                .add_attribute("amount", amount)
                .add_attribute("bridge", info.sender),
        ))
}

fn execute_crosschain_burn(
    deps: DepsMut,
    info: MessageInfo,
    from: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_bridge(deps.storage, &info.sender)?;

    let from_addr = deps.api.addr_validate(&from)?;

    let balance = BALANCES
        .may_load(deps.storage, &from_addr)?
        .unwrap_or_default();
    let remaining =
        balance
            .checked_sub(amount)
            .map_err(|_| ContractError::InsufficientBalance {
                holder: from_addr.to_string(),
                balance,
                requested: amount,
            })?;
    BALANCES.save(deps.storage, &from_addr, &remaining)?;
    TOKEN_INFO.update(deps.storage, |mut token_info| -> StdResult<_> {
        token_info.total_supply = token_info.total_supply.checked_sub(amount)?;
        Ok(token_info)
    })?;

    Ok(Response::new()
        .add_attribute("action", "crosschain_burn")
        .add_event(
            Event::new("crosschain_burn")
                .add_attribute("from", from_addr)
                .add_attribute("amount", amount)
                .add_attribute("bridge", info.sender),
        ))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Balance { address } => to_json_binary(&query_balance(deps, address)?),
        QueryMsg::TokenInfo {} => to_json_binary(&query_token_info(deps)?),
        QueryMsg::SupportsInterface { interface_id } => to_json_binary(&matches!(
            interface_id.as_str(),
            CROSSCHAIN_INTERFACE_ID | CW20_INTERFACE_ID
        )),
        QueryMsg::Bridges {} => to_json_binary(&BridgesResponse {
            bridges: BRIDGES
                .load(deps.storage)?
                .into_iter()
                .map(|bridge| bridge.to_string())
                .collect(),
        }),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
