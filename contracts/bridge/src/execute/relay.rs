//! Incoming transfer handlers (ReceiveMessage and the relay replies).
//!
//! A relay is split across sub-messages so that recipient capabilities run
//! in isolation around the mint:
//!
//! ```text
//! ReceiveMessage ── pre_mint hook (reply_on_error) ── mint (reply_on_success)
//!                                                          │
//!                       reply(Mint) ── relay_erc20 event ── post_mint hook (reply_always)
//! ```
//!
//! Hook failures are caught in the reply and only reported; a failing mint
//! reverts the whole relay.

use cosmwasm_std::{
    Addr, Binary, Deps, DepsMut, Event, MessageInfo, Reply, Response, StdResult, SubMsg,
    SubMsgResult, Uint128, WasmMsg,
};

use common::hooks::{RecipientExecuteMsg, RelayHookMsg};
use common::ledger::mint_msg;
use common::message::BridgeMessage;
use common::transport::CrossDomainMsg;

use crate::error::ContractError;
use crate::state::{Config, PendingRelay, CONFIG, PENDING_RELAYS, RELAY_SEQ};

// ============================================================================
// Reply Ids
// ============================================================================

/// Step of a relay a reply belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelayStep {
    PreMint = 0,
    Mint = 1,
    PostMint = 2,
}

const STEP_BITS: u64 = 2;
const STEP_MASK: u64 = (1 << STEP_BITS) - 1;

/// Packs a relay sequence number and step into a reply id.
pub fn reply_id(seq: u64, step: RelayStep) -> u64 {
    (seq << STEP_BITS) | step as u64
}

/// Splits a reply id into its relay sequence number and step.
pub fn parse_reply_id(id: u64) -> Result<(u64, RelayStep), ContractError> {
    let step = match id & STEP_MASK {
        0 => RelayStep::PreMint,
        1 => RelayStep::Mint,
        2 => RelayStep::PostMint,
        _ => return Err(ContractError::UnknownReplyId { id }),
    };
    Ok((id >> STEP_BITS, step))
}

// ============================================================================
// Authentication & Decoding
// ============================================================================

/// Authenticates a relay call.
///
/// The caller must be the configured messenger, and the origin reported by
/// the messenger must be this bridge's peer on the source domain.
pub fn authenticate(
    deps: Deps,
    info: &MessageInfo,
    msg: &CrossDomainMsg,
) -> Result<Config, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if info.sender != config.messenger {
        return Err(ContractError::UnauthorizedCaller);
    }

    let expected = config.peer(msg.source_domain);
    if expected.map(Addr::as_str) != Some(msg.sender.as_str()) {
        return Err(ContractError::InvalidOrigin {
            sender: msg.sender.clone(),
            domain: msg.source_domain,
        });
    }

    Ok(config)
}

/// Decodes a relayed payload into a bridge message.
pub fn decode_message(payload: &Binary) -> Result<BridgeMessage, ContractError> {
    BridgeMessage::decode(payload).map_err(|e| ContractError::InvalidPayload {
        reason: e.to_string(),
    })
}

/// A relay ready to be executed on this domain.
#[derive(Clone, Debug, PartialEq)]
pub struct RelayTransfer {
    pub token: Addr,
    pub from: String,
    pub to: Addr,
    pub amount: Uint128,
    pub source_domain: u64,
}

impl RelayTransfer {
    pub fn from_message(
        deps: Deps,
        message: &BridgeMessage,
        source_domain: u64,
    ) -> StdResult<Self> {
        Ok(Self {
            token: deps.api.addr_validate(&message.token)?,
            from: message.from.clone(),
            to: deps.api.addr_validate(&message.to)?,
            amount: message.amount,
            source_domain,
        })
    }

    /// Arguments passed to the recipient's capabilities for this relay.
    pub fn hook_args(&self, data: Binary) -> RelayHookMsg {
        RelayHookMsg::new(&self.token, &self.from, &self.to, self.amount, data)
    }
}

// ============================================================================
// Relay
// ============================================================================

/// Execute handler for the plain bridge's relay entry point.
pub fn execute_receive_message(
    deps: DepsMut,
    info: MessageInfo,
    msg: CrossDomainMsg,
) -> Result<Response, ContractError> {
    let config = authenticate(deps.as_ref(), &info, &msg)?;

    let message = decode_message(&msg.payload)?;
    if message.hooks.is_some() {
        return Err(ContractError::UnsupportedPayload {
            reason: "hooks are not supported by this bridge".to_string(),
        });
    }

    let transfer = RelayTransfer::from_message(deps.as_ref(), &message, msg.source_domain)?;
    let callback = message
        .callback
        .map(|data| RecipientExecuteMsg::RelayCallback(transfer.hook_args(data)));

    begin_relay(deps, &config, transfer, None, callback)
}

/// Schedules the pre-mint hook (if any) and the mint.
///
/// The post-mint call is stored with the pending relay and issued from the
/// mint reply, after the relay event.
pub fn begin_relay(
    deps: DepsMut,
    config: &Config,
    transfer: RelayTransfer,
    pre_mint: Option<RecipientExecuteMsg>,
    post_mint: Option<RecipientExecuteMsg>,
) -> Result<Response, ContractError> {
    let seq = RELAY_SEQ.may_load(deps.storage)?.unwrap_or_default();
    RELAY_SEQ.save(deps.storage, &(seq + 1))?;

    let mut submsgs = Vec::with_capacity(2);
    if let Some(hook) = &pre_mint {
        let call = recipient_call(&transfer.to, hook)?;
        submsgs.push(with_hook_gas(
            SubMsg::reply_on_error(call, reply_id(seq, RelayStep::PreMint)),
            config,
        ));
    }
    submsgs.push(SubMsg::reply_on_success(
        mint_msg(&transfer.token, &transfer.to, transfer.amount)?,
        reply_id(seq, RelayStep::Mint),
    ));

    PENDING_RELAYS.save(
        deps.storage,
        seq,
        &PendingRelay {
            token: transfer.token,
            from: transfer.from,
            to: transfer.to,
            amount: transfer.amount,
            source_domain: transfer.source_domain,
            pre_mint,
            post_mint,
        },
    )?;

    Ok(Response::new()
        .add_submessages(submsgs)
        .add_attribute("action", "relay")
        .add_attribute("relay_seq", seq.to_string()))
}

/// Reply handler shared by every bridge flavour.
pub fn handle_relay_reply(deps: DepsMut, reply: Reply) -> Result<Response, ContractError> {
    let (seq, step) = parse_reply_id(reply.id)?;
    match step {
        RelayStep::PreMint => {
            let pending = PENDING_RELAYS.load(deps.storage, seq)?;
            Ok(hook_outcome(
                deps.as_ref(),
                &pending.to,
                pending.pre_mint.as_ref(),
                reply.result,
            ))
        }
        RelayStep::Mint => complete_mint(deps, seq),
        RelayStep::PostMint => {
            let pending = PENDING_RELAYS.load(deps.storage, seq)?;
            PENDING_RELAYS.remove(deps.storage, seq);
            Ok(hook_outcome(
                deps.as_ref(),
                &pending.to,
                pending.post_mint.as_ref(),
                reply.result,
            ))
        }
    }
}

fn complete_mint(deps: DepsMut, seq: u64) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let pending = PENDING_RELAYS.load(deps.storage, seq)?;

    let mut res = Response::new().add_event(
        Event::new("relay_erc20")
            .add_attribute("token", pending.token.as_str())
            .add_attribute("from", pending.from.as_str())
            .add_attribute("to", pending.to.as_str())
            .add_attribute("amount", pending.amount)
            .add_attribute("source", pending.source_domain.to_string()),
    );

    match &pending.post_mint {
        Some(hook) => {
            // Cleared in the PostMint reply
            let call = recipient_call(&pending.to, hook)?;
            res = res.add_submessage(with_hook_gas(
                SubMsg::reply_always(call, reply_id(seq, RelayStep::PostMint)),
                &config,
            ));
        }
        None => PENDING_RELAYS.remove(deps.storage, seq),
    }

    Ok(res)
}

fn recipient_call(recipient: &Addr, hook: &RecipientExecuteMsg) -> StdResult<WasmMsg> {
    Ok(WasmMsg::Execute {
        contract_addr: recipient.to_string(),
        msg: hook.to_binary()?,
        funds: vec![],
    })
}

fn with_hook_gas(submsg: SubMsg, config: &Config) -> SubMsg {
    match config.hook_gas_limit {
        Some(limit) => submsg.with_gas_limit(limit),
        None => submsg,
    }
}

/// Swallows a hook failure, reporting it as a `hook_failed` event.
fn hook_outcome(
    deps: Deps,
    recipient: &Addr,
    hook: Option<&RecipientExecuteMsg>,
    result: SubMsgResult,
) -> Response {
    let label = hook.map(RecipientExecuteMsg::label).unwrap_or("unknown");
    match result {
        SubMsgResult::Ok(_) => Response::new(),
        SubMsgResult::Err(error) => {
            deps.api
                .debug(&format!("bridge: {label} hook on {recipient} failed: {error}"));
            Response::new().add_event(
                Event::new("hook_failed")
                    .add_attribute("hook", label)
                    .add_attribute("recipient", recipient.as_str())
                    .add_attribute("error", error),
            )
        }
    }
}
