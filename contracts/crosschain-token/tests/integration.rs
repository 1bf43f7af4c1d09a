//! Integration tests for the crosschain token using cw-multi-test.

use cosmwasm_std::{Addr, Empty, Uint128};
use cw20::{BalanceResponse, Cw20Coin, TokenInfoResponse};
use cw_multi_test::{App, ContractWrapper, Executor};

use crosschain_token::msg::{BridgesResponse, ExecuteMsg, InstantiateMsg, QueryMsg};

fn contract_token() -> Box<dyn cw_multi_test::Contract<Empty>> {
    Box::new(ContractWrapper::new(
        crosschain_token::contract::execute,
        crosschain_token::contract::instantiate,
        crosschain_token::contract::query,
    ))
}

fn setup() -> (App, Addr, Addr) {
    let mut app = App::default();
    let bridge = Addr::unchecked("bridge");
    let code_id = app.store_code(contract_token());
    let token = app
        .instantiate_contract(
            code_id,
            Addr::unchecked("admin"),
            &InstantiateMsg {
                name: "Token X".to_string(),
                symbol: "TKX".to_string(),
                decimals: 6,
                initial_balances: vec![Cw20Coin {
                    address: "alice".to_string(),
                    amount: Uint128::new(1_000),
                }],
                bridges: vec![bridge.to_string()],
            },
            &[],
            "token-x",
            None,
        )
        .unwrap();
    (app, token, bridge)
}

fn balance(app: &App, token: &Addr, address: &str) -> Uint128 {
    let res: BalanceResponse = app
        .wrap()
        .query_wasm_smart(
            token,
            &QueryMsg::Balance {
                address: address.to_string(),
            },
        )
        .unwrap();
    res.balance
}

fn total_supply(app: &App, token: &Addr) -> Uint128 {
    let res: TokenInfoResponse = app
        .wrap()
        .query_wasm_smart(token, &QueryMsg::TokenInfo {})
        .unwrap();
    res.total_supply
}

#[test]
fn test_bridge_mint_and_burn_track_supply() {
    let (mut app, token, bridge) = setup();

    app.execute_contract(
        bridge.clone(),
        token.clone(),
        &ExecuteMsg::CrosschainMint {
            to: "bob".to_string(),
            amount: Uint128::new(250),
        },
        &[],
    )
    .unwrap();
    assert_eq!(balance(&app, &token, "bob"), Uint128::new(250));
    assert_eq!(total_supply(&app, &token), Uint128::new(1_250));

    app.execute_contract(
        bridge,
        token.clone(),
        &ExecuteMsg::CrosschainBurn {
            from: "alice".to_string(),
            amount: Uint128::new(400),
        },
        &[],
    )
    .unwrap();
    assert_eq!(balance(&app, &token, "alice"), Uint128::new(600));
    assert_eq!(total_supply(&app, &token), Uint128::new(850));
}

#[test]
fn test_only_bridge_can_mint_or_burn() {
    let (mut app, token, _bridge) = setup();

    let res = app.execute_contract(
        Addr::unchecked("alice"),
        token.clone(),
        &ExecuteMsg::CrosschainMint {
            to: "alice".to_string(),
            amount: Uint128::new(1),
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("only a registered bridge"), "got: {}", err_str);

    let res = app.execute_contract(
        Addr::unchecked("mallory"),
        token.clone(),
        &ExecuteMsg::CrosschainBurn {
            from: "alice".to_string(),
            amount: Uint128::new(1),
        },
        &[],
    );
    assert!(res.is_err());
    assert_eq!(balance(&app, &token, "alice"), Uint128::new(1_000));
}

#[test]
fn test_burn_beyond_balance_fails() {
    let (mut app, token, bridge) = setup();

    let res = app.execute_contract(
        bridge,
        token.clone(),
        &ExecuteMsg::CrosschainBurn {
            from: "alice".to_string(),
            amount: Uint128::new(1_001),
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Insufficient balance"), "got: {}", err_str);
    assert_eq!(balance(&app, &token, "alice"), Uint128::new(1_000));
    assert_eq!(total_supply(&app, &token), Uint128::new(1_000));
}

#[test]
fn test_supports_crosschain_interface() {
    let (app, token, bridge) = setup();

    let supports = |interface_id: &str| -> bool {
        app.wrap()
            .query_wasm_smart(
                &token,
                &QueryMsg::SupportsInterface {
                    interface_id: interface_id.to_string(),
                },
            )
            .unwrap()
    };
    assert!(supports(common::ledger::CROSSCHAIN_INTERFACE_ID));
    assert!(supports("cw20"));
    assert!(!supports("erc721"));

    let bridges: BridgesResponse = app
        .wrap()
        .query_wasm_smart(&token, &QueryMsg::Bridges {})
        .unwrap();
    assert_eq!(bridges.bridges, vec![bridge.to_string()]);
}

#[test]
fn test_cw20_transfer_is_delegated() {
    let (mut app, token, _bridge) = setup();

    app.execute_contract(
        Addr::unchecked("alice"),
        token.clone(),
        &ExecuteMsg::Transfer {
            recipient: "carol".to_string(),
            amount: Uint128::new(300),
        },
        &[],
    )
    .unwrap();
    assert_eq!(balance(&app, &token, "alice"), Uint128::new(700));
    assert_eq!(balance(&app, &token, "carol"), Uint128::new(300));
}
