//! Outgoing transfer handler (Send).
//!
//! Burns the caller's tokens and dispatches a bridge message to the peer
//! bridge on the destination domain.

use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Env, Event, Response, Uint128, WasmMsg,
};

use common::hash::{bytes32_to_hex, compute_message_hash};
use common::hooks::HooksConfig;
use common::ledger::{burn_msg, supports_crosschain};
use common::message::BridgeMessage;
use common::transport::{MessageNonceResponse, TransportExecuteMsg, TransportQueryMsg};

use crate::error::ContractError;
use crate::state::{Config, CONFIG};

/// A validated outgoing transfer.
#[derive(Clone, Debug, PartialEq)]
pub struct SendRequest {
    pub token: Addr,
    pub from: Addr,
    pub to: String,
    pub amount: Uint128,
    pub destination: u64,
}

impl SendRequest {
    /// Validates a caller-supplied transfer.
    ///
    /// Checks run in order: recipient (non-empty, valid address), token
    /// capability, destination peer.
    pub fn validate(
        deps: Deps,
        config: &Config,
        from: Addr,
        token: String,
        to: String,
        amount: Uint128,
        destination: u64,
    ) -> Result<Self, ContractError> {
        if to.trim().is_empty() {
            return Err(ContractError::InvalidRecipient {
                reason: "recipient must not be empty".to_string(),
            });
        }
        // Address format is shared by every domain
        deps.api
            .addr_validate(&to)
            .map_err(|e| ContractError::InvalidRecipient {
                reason: e.to_string(),
            })?;

        let token = deps
            .api
            .addr_validate(&token)
            .map_err(|_| ContractError::UnsupportedToken {
                token: token.clone(),
            })?;
        if !supports_crosschain(&deps.querier, &token) {
            return Err(ContractError::UnsupportedToken {
                token: token.to_string(),
            });
        }

        if config.peer(destination).is_none() {
            return Err(ContractError::UnknownDomain {
                domain: destination,
            });
        }

        Ok(Self {
            token,
            from,
            to,
            amount,
            destination,
        })
    }
}

/// Execute handler for the plain bridge's Send.
#[allow(clippy::too_many_arguments)]
pub fn execute_send(
    deps: DepsMut,
    env: Env,
    from: Addr,
    token: String,
    to: String,
    amount: Uint128,
    destination: u64,
    callback: Option<Binary>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let request =
        SendRequest::validate(deps.as_ref(), &config, from, token, to, amount, destination)?;
    dispatch_send(deps.as_ref(), &env, &config, request, callback, None)
}

/// Burns the transfer amount and dispatches the bridge message.
///
/// The burn is ordered before the dispatch in the same transaction; if the
/// burn fails nothing is dispatched. The message identifier is derived from
/// the messenger's next nonce and returned as response data.
pub fn dispatch_send(
    deps: Deps,
    env: &Env,
    config: &Config,
    request: SendRequest,
    callback: Option<Binary>,
    hooks: Option<HooksConfig>,
) -> Result<Response, ContractError> {
    let target = config
        .peer(request.destination)
        .ok_or(ContractError::UnknownDomain {
            domain: request.destination,
        })?;

    let message = BridgeMessage {
        token: request.token.to_string(),
        from: request.from.to_string(),
        to: request.to.clone(),
        amount: request.amount,
        callback,
        hooks,
    };
    let payload = message.encode()?;

    let nonce: MessageNonceResponse = deps
        .querier
        .query_wasm_smart(&config.messenger, &TransportQueryMsg::MessageNonce {})?;
    let msg_hash = compute_message_hash(
        config.domain,
        request.destination,
        nonce.nonce,
        env.contract.address.as_str(),
        target.as_str(),
        payload.as_slice(),
    );

    let burn = burn_msg(&request.token, &request.from, request.amount)?;
    let dispatch = WasmMsg::Execute {
        contract_addr: config.messenger.to_string(),
        msg: to_json_binary(&TransportExecuteMsg::SendMessage {
            destination: request.destination,
            target: target.to_string(),
            message: payload,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(burn)
        .add_message(dispatch)
        .set_data(Binary::from(msg_hash.to_vec()))
        .add_attribute("action", "send")
        .add_event(
            Event::new("send_erc20")
                .add_attribute("token", request.token)
                .add_attribute("from", request.from)
                .add_attribute("to", request.to)
                .add_attribute("amount", request.amount)
                .add_attribute("destination", request.destination.to_string())
                .add_attribute("msg_hash", bytes32_to_hex(&msg_hash)),
        ))
}
