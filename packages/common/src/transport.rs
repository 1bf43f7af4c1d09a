//! Message transport interface.
//!
//! The transport (messenger) delivers an opaque payload from a sender on a
//! source domain to a target on a destination domain. On delivery the target
//! receives `ReceiveMessage(CrossDomainMsg)` from the messenger, which
//! carries the authenticated origin sender and domain for that call.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{to_json_binary, Addr, Binary, CosmosMsg, StdResult, WasmMsg};

use crate::domain::DomainId;
use crate::hash::compute_message_hash;

/// A dispatched message as stored in the source messenger's outbox.
#[cw_serde]
pub struct Envelope {
    pub source: DomainId,
    pub destination: DomainId,
    pub nonce: u64,
    pub sender: String,
    pub target: String,
    pub message: Binary,
}

impl Envelope {
    /// Identifier of this envelope (see [`compute_message_hash`]).
    pub fn hash(&self) -> [u8; 32] {
        compute_message_hash(
            self.source,
            self.destination,
            self.nonce,
            &self.sender,
            &self.target,
            self.message.as_slice(),
        )
    }
}

/// Payload handed to the target on delivery.
///
/// Only meaningful when the caller is the trusted messenger; `sender` and
/// `source_domain` are the transport-reported origin of the current call.
#[cw_serde]
pub struct CrossDomainMsg {
    pub sender: String,
    pub source_domain: DomainId,
    pub payload: Binary,
}

impl CrossDomainMsg {
    /// serializes the message wrapped as `ReceiveMessage`
    pub fn into_binary(self) -> StdResult<Binary> {
        to_json_binary(&ReceiverExecuteMsg::ReceiveMessage(self))
    }

    /// creates a cosmos_msg delivering this message to the target contract
    pub fn into_cosmos_msg<T: Into<String>>(self, contract_addr: T) -> StdResult<CosmosMsg> {
        let msg = self.into_binary()?;
        Ok(WasmMsg::Execute {
            contract_addr: contract_addr.into(),
            msg,
            funds: vec![],
        }
        .into())
    }
}

/// Execute interface every message target implements.
#[cw_serde]
pub enum ReceiverExecuteMsg {
    ReceiveMessage(CrossDomainMsg),
}

/// Execute interface of the messenger.
#[cw_serde]
pub enum TransportExecuteMsg {
    /// Dispatch `message` to `target` on `destination`.
    SendMessage {
        destination: DomainId,
        target: String,
        message: Binary,
    },
    /// Deliver an envelope dispatched on another domain.
    RelayMessage { envelope: Envelope, msg_hash: Binary },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum TransportQueryMsg {
    #[returns(TransportConfigResponse)]
    Config {},
    /// Nonce the next dispatched message will carry
    #[returns(MessageNonceResponse)]
    MessageNonce {},
    #[returns(MessageResponse)]
    Message { nonce: u64 },
    #[returns(OutboxResponse)]
    Outbox {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct TransportConfigResponse {
    pub domain: DomainId,
    pub relayer: Option<Addr>,
}

#[cw_serde]
pub struct MessageNonceResponse {
    pub nonce: u64,
}

#[cw_serde]
pub struct MessageResponse {
    pub envelope: Envelope,
    pub msg_hash: Binary,
}

#[cw_serde]
pub struct OutboxResponse {
    pub messages: Vec<MessageResponse>,
}
