//! Integration tests for the messenger using cw-multi-test.

use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Empty, Env, Event, MessageInfo, Response,
    StdError, StdResult,
};
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};
use cw_storage_plus::Item;

use common::transport::{CrossDomainMsg, ReceiverExecuteMsg};
use messenger::msg::{ExecuteMsg, InstantiateMsg, MessageResponse, OutboxResponse, QueryMsg};

const LOCAL: u64 = 10;
const REMOTE: u64 = 20;

// ============================================================================
// Receiver stub: records the last delivery
// ============================================================================

const LAST: Item<CrossDomainMsg> = Item::new("last");

fn receiver_instantiate(_: DepsMut, _: Env, _: MessageInfo, _: Empty) -> StdResult<Response> {
    Ok(Response::new())
}

fn receiver_execute(
    deps: DepsMut,
    _: Env,
    _: MessageInfo,
    msg: ReceiverExecuteMsg,
) -> StdResult<Response> {
    let ReceiverExecuteMsg::ReceiveMessage(msg) = msg;
    if msg.payload.as_slice() == b"fail" {
        return Err(StdError::generic_err("receiver rejected"));
    }
    LAST.save(deps.storage, &msg)?;
    Ok(Response::new().add_event(Event::new("received")))
}

fn receiver_query(deps: Deps, _: Env, _: Empty) -> StdResult<Binary> {
    to_json_binary(&LAST.load(deps.storage)?)
}

// ============================================================================
// Test Setup
// ============================================================================

fn contract_messenger() -> Box<dyn cw_multi_test::Contract<Empty>> {
    Box::new(ContractWrapper::new(
        messenger::contract::execute,
        messenger::contract::instantiate,
        messenger::contract::query,
    ))
}

fn contract_receiver() -> Box<dyn cw_multi_test::Contract<Empty>> {
    Box::new(ContractWrapper::new(
        receiver_execute,
        receiver_instantiate,
        receiver_query,
    ))
}

struct Setup {
    app: App,
    messenger: Addr,
    receiver: Addr,
    relayer: Addr,
}

fn setup(domain: u64) -> Setup {
    let mut app = App::default();
    let admin = Addr::unchecked("admin");
    let relayer = Addr::unchecked("relayer");

    let messenger_code = app.store_code(contract_messenger());
    let receiver_code = app.store_code(contract_receiver());

    let messenger = app
        .instantiate_contract(
            messenger_code,
            admin.clone(),
            &InstantiateMsg {
                domain,
                relayer: Some(relayer.to_string()),
            },
            &[],
            "messenger",
            None,
        )
        .unwrap();
    let receiver = app
        .instantiate_contract(receiver_code, admin, &Empty {}, &[], "receiver", None)
        .unwrap();

    Setup {
        app,
        messenger,
        receiver,
        relayer,
    }
}

fn send(setup: &mut Setup, sender: &str, payload: &[u8]) -> AppResponse {
    let receiver = setup.receiver.to_string();
    setup
        .app
        .execute_contract(
            Addr::unchecked(sender),
            setup.messenger.clone(),
            &ExecuteMsg::SendMessage {
                destination: REMOTE,
                target: receiver,
                message: Binary::from(payload.to_vec()),
            },
            &[],
        )
        .unwrap()
}

fn outbox(setup: &Setup) -> Vec<MessageResponse> {
    let res: OutboxResponse = setup
        .app
        .wrap()
        .query_wasm_smart(
            &setup.messenger,
            &QueryMsg::Outbox {
                start_after: None,
                limit: None,
            },
        )
        .unwrap();
    res.messages
}

// ============================================================================
// Dispatch
// ============================================================================

#[test]
fn test_send_message_stores_hashed_envelope() {
    let mut setup = setup(LOCAL);

    let res = send(&mut setup, "alice", b"one");
    send(&mut setup, "alice", b"two");

    let messages = outbox(&setup);
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].envelope.nonce, 0);
    assert_eq!(messages[1].envelope.nonce, 1);
    assert_eq!(messages[0].envelope.source, LOCAL);
    assert_eq!(messages[0].envelope.destination, REMOTE);
    assert_eq!(messages[0].envelope.sender, "alice");
    assert_eq!(
        messages[0].msg_hash.as_slice(),
        messages[0].envelope.hash().as_slice()
    );

    // Response data carries the message identifier
    assert_eq!(res.data, Some(messages[0].msg_hash.clone()));
}

#[test]
fn test_send_message_to_self_rejected() {
    let mut setup = setup(LOCAL);
    let res = setup.app.execute_contract(
        Addr::unchecked("alice"),
        setup.messenger.clone(),
        &ExecuteMsg::SendMessage {
            destination: LOCAL,
            target: "anyone".to_string(),
            message: Binary::default(),
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("local domain"), "got: {}", err_str);
}

// ============================================================================
// Delivery
// ============================================================================

/// Dispatch on one messenger and deliver on a second messenger instance
/// configured for the destination domain.
#[test]
fn test_relay_delivers_origin_context() {
    let mut source = setup(LOCAL);
    send(&mut source, "alice", b"hello");
    let message = outbox(&source).remove(0);

    let mut dest = setup(REMOTE);
    // Same deployment order, same receiver address
    assert_eq!(dest.receiver, source.receiver);

    let relayer = dest.relayer.clone();
    dest.app
        .execute_contract(
            relayer,
            dest.messenger.clone(),
            &ExecuteMsg::RelayMessage {
                envelope: message.envelope,
                msg_hash: message.msg_hash,
            },
            &[],
        )
        .unwrap();

    let delivered: CrossDomainMsg = dest
        .app
        .wrap()
        .query_wasm_smart(&dest.receiver, &Empty {})
        .unwrap();
    assert_eq!(delivered.sender, "alice");
    assert_eq!(delivered.source_domain, LOCAL);
    assert_eq!(delivered.payload, Binary::from(b"hello".to_vec()));
}

#[test]
fn test_relay_requires_relayer() {
    let mut source = setup(LOCAL);
    send(&mut source, "alice", b"hello");
    let message = outbox(&source).remove(0);

    let mut dest = setup(REMOTE);
    let res = dest.app.execute_contract(
        Addr::unchecked("mallory"),
        dest.messenger.clone(),
        &ExecuteMsg::RelayMessage {
            envelope: message.envelope,
            msg_hash: message.msg_hash,
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("only the relayer"), "got: {}", err_str);
}

#[test]
fn test_relay_rejects_wrong_destination() {
    let mut source = setup(LOCAL);
    send(&mut source, "alice", b"hello");
    let message = outbox(&source).remove(0);

    // Delivered back to the source domain instead of REMOTE
    let relayer = source.relayer.clone();
    let res = source.app.execute_contract(
        relayer,
        source.messenger.clone(),
        &ExecuteMsg::RelayMessage {
            envelope: message.envelope,
            msg_hash: message.msg_hash,
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Wrong destination"), "got: {}", err_str);
}

#[test]
fn test_relay_rejects_tampered_envelope() {
    let mut source = setup(LOCAL);
    send(&mut source, "alice", b"hello");
    let mut message = outbox(&source).remove(0);
    message.envelope.message = Binary::from(b"hellO".to_vec());

    let mut dest = setup(REMOTE);
    let relayer = dest.relayer.clone();
    let res = dest.app.execute_contract(
        relayer,
        dest.messenger.clone(),
        &ExecuteMsg::RelayMessage {
            envelope: message.envelope,
            msg_hash: message.msg_hash,
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("hash mismatch"), "got: {}", err_str);
}

#[test]
fn test_failing_target_reverts_delivery() {
    let mut source = setup(LOCAL);
    send(&mut source, "alice", b"fail");
    let message = outbox(&source).remove(0);

    let mut dest = setup(REMOTE);
    let relayer = dest.relayer.clone();
    let res = dest.app.execute_contract(
        relayer,
        dest.messenger.clone(),
        &ExecuteMsg::RelayMessage {
            envelope: message.envelope,
            msg_hash: message.msg_hash,
        },
        &[],
    );
    assert!(res.is_err());

    let last: StdResult<CrossDomainMsg> = dest
        .app
        .wrap()
        .query_wasm_smart(&dest.receiver, &Empty {});
    assert!(last.is_err());
}

#[test]
fn test_duplicate_delivery_is_not_filtered() {
    let mut source = setup(LOCAL);
    send(&mut source, "alice", b"hello");
    let message = outbox(&source).remove(0);

    let mut dest = setup(REMOTE);
    let relayer = dest.relayer.clone();
    for _ in 0..2 {
        let res = dest
            .app
            .execute_contract(
                relayer.clone(),
                dest.messenger.clone(),
                &ExecuteMsg::RelayMessage {
                    envelope: message.envelope.clone(),
                    msg_hash: message.msg_hash.clone(),
                },
                &[],
            )
            .unwrap();
        assert!(res.events.iter().any(|e| e.ty == "wasm-received"));
    }
}
