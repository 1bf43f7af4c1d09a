//! Token ledger interface used by the bridges.
//!
//! A bridgeable token exposes privileged mint/burn entry points callable by
//! the bridge, and answers a capability probe so the bridge can refuse
//! tokens that do not implement them.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, QuerierWrapper, StdResult, Uint128, WasmMsg};

/// Interface identifier answered by bridgeable tokens.
pub const CROSSCHAIN_INTERFACE_ID: &str = "crosschain-erc20";

/// Privileged execute messages of a bridgeable token.
#[cw_serde]
pub enum LedgerExecuteMsg {
    CrosschainMint { to: String, amount: Uint128 },
    CrosschainBurn { from: String, amount: Uint128 },
}

#[cw_serde]
pub enum LedgerQueryMsg {
    SupportsInterface { interface_id: String },
}

/// Builds the mint message for `token`.
pub fn mint_msg(token: &Addr, to: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
    Ok(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&LedgerExecuteMsg::CrosschainMint {
            to: to.to_string(),
            amount,
        })?,
        funds: vec![],
    }
    .into())
}

/// Builds the burn message for `token`.
pub fn burn_msg(token: &Addr, from: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
    Ok(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&LedgerExecuteMsg::CrosschainBurn {
            from: from.to_string(),
            amount,
        })?,
        funds: vec![],
    }
    .into())
}

/// Capability probe: `true` only if `token` answers the crosschain interface.
///
/// Any query failure (not a contract, unknown message) counts as unsupported.
pub fn supports_crosschain(querier: &QuerierWrapper, token: &Addr) -> bool {
    querier
        .query_wasm_smart::<bool>(
            token,
            &LedgerQueryMsg::SupportsInterface {
                interface_id: CROSSCHAIN_INTERFACE_ID.to_string(),
            },
        )
        .unwrap_or(false)
}
