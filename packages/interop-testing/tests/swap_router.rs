//! Cross-domain swaps: proxy initiation, canonical resolution, output return.

use anyhow::Result as AnyResult;
use cosmwasm_std::{to_json_binary, Addr, Int128, Uint128};
use cw20::Cw20ExecuteMsg;
use cw_multi_test::{AppResponse, Executor};

use common::domain::DomainPeer;
use common::swap::{PoolKey, SwapIntent};
use common::transport::CrossDomainMsg;
use interop_testing::contracts::contract_router;
use interop_testing::events::attribute;
use interop_testing::network::{Network, ADMIN, ALICE, INITIAL_BALANCE};
use pool_manager::msg::{PoolResponse, QueryMsg as PoolQueryMsg, SimulateSwapResponse};
use swap_router::msg::{
    ConfigResponse, ExecuteMsg, InstantiateMsg, QueryMsg, ReceiveMsg, RouterMessage,
};

const CANONICAL: u64 = 1;
const PROXY: u64 = 2;
const FEE: u32 = 3_000;
const LIQUIDITY: u128 = 100_000;

fn setup() -> (Network, PoolKey) {
    let mut net = Network::new(&[CANONICAL, PROXY], CANONICAL).unwrap();
    let key = net
        .domain_mut(CANONICAL)
        .add_liquidity(FEE, LIQUIDITY)
        .unwrap();
    (net, key)
}

/// Alice sends `amount` of `token` to the router on `domain` with a swap intent.
fn swap(
    net: &mut Network,
    domain: u64,
    token: &str,
    amount: u128,
    key: &PoolKey,
    zero_for_one: bool,
    amount_specified: i128,
) -> AnyResult<AppResponse> {
    let router = net.addrs().router;
    net.domain_mut(domain).app.execute_contract(
        Addr::unchecked(ALICE),
        Addr::unchecked(token),
        &Cw20ExecuteMsg::Send {
            contract: router.to_string(),
            amount: Uint128::new(amount),
            msg: to_json_binary(&ReceiveMsg::Swap {
                pool_key: key.clone(),
                zero_for_one,
                amount_specified: Int128::new(amount_specified),
            })
            .unwrap(),
        },
        &[],
    )
}

fn simulate(net: &Network, key: &PoolKey, amount_in: u128) -> Uint128 {
    let addrs = net.addrs();
    let res: SimulateSwapResponse = net
        .domain(CANONICAL)
        .app
        .wrap()
        .query_wasm_smart(
            &addrs.pool_manager,
            &PoolQueryMsg::SimulateSwap {
                key: key.clone(),
                zero_for_one: true,
                amount_in: Uint128::new(amount_in),
            },
        )
        .unwrap();
    res.amount_out
}

fn pool(net: &Network, key: &PoolKey) -> PoolResponse {
    let addrs = net.addrs();
    net.domain(CANONICAL)
        .app
        .wrap()
        .query_wasm_smart(&addrs.pool_manager, &PoolQueryMsg::Pool { key: key.clone() })
        .unwrap()
}

fn total_supply(net: &Network, token: &str) -> Uint128 {
    let token = Addr::unchecked(token);
    net.domains
        .iter()
        .map(|domain| domain.total_supply(&token))
        .sum()
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_router_roles() {
    let (net, _) = setup();
    let addrs = net.addrs();

    for (domain, canonical) in [(CANONICAL, true), (PROXY, false)] {
        let config: ConfigResponse = net
            .domain(domain)
            .app
            .wrap()
            .query_wasm_smart(&addrs.router, &QueryMsg::Config {})
            .unwrap();
        assert_eq!(config.domain, domain);
        assert_eq!(config.is_canonical, canonical);
        assert_eq!(config.pool_manager.is_some(), canonical);
    }
}

#[test]
fn test_canonical_router_requires_pool_manager() {
    let (mut net, _) = setup();
    let addrs = net.addrs();
    let app = &mut net.domain_mut(CANONICAL).app;
    let code_id = app.store_code(contract_router());

    let res = app.instantiate_contract(
        code_id,
        Addr::unchecked(ADMIN),
        &InstantiateMsg {
            canonical_domain: CANONICAL,
            messenger: addrs.messenger.to_string(),
            bridge: addrs.bridge.to_string(),
            pool_manager: None,
            peers: vec![DomainPeer::same_address(PROXY)],
        },
        &[],
        "router-without-pool",
        None,
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Missing pool manager"), "got: {}", err_str);
}

// ============================================================================
// Full round trip
// ============================================================================

#[test]
fn test_cross_domain_swap_round_trip() {
    let (mut net, key) = setup();
    let addrs = net.addrs();
    let input = key.currency0.clone();
    let output = key.currency1.clone();
    let expected_out = simulate(&net, &key, 1_000);
    assert!(!expected_out.is_zero());

    let supply_in = total_supply(&net, &input);
    let supply_out = total_supply(&net, &output);
    let pool_before = pool(&net, &key);

    let res = swap(&mut net, PROXY, &input, 1_000, &key, true, -1_000).unwrap();
    assert_eq!(
        attribute(&res, "swap_initiated", "amount_in"),
        Some("1000".to_string())
    );

    // Input bridged and intent dispatched, in that order
    let proxy = net.domain(PROXY);
    assert_eq!(proxy.next_nonce().unwrap(), 2);
    assert_eq!(
        proxy.balance(&Addr::unchecked(&input), &Addr::unchecked(ALICE)),
        Uint128::new(INITIAL_BALANCE - 1_000)
    );
    assert_eq!(
        proxy.balance(&Addr::unchecked(&input), &addrs.router),
        Uint128::zero()
    );

    let responses = net.relay_pending().unwrap();
    assert_eq!(responses.len(), 3);
    assert_eq!(
        attribute(&responses[1], "swap_resolved", "amount_out"),
        Some(expected_out.to_string())
    );

    // Output lands on the proxy router
    let proxy = net.domain(PROXY);
    assert_eq!(
        proxy.balance(&Addr::unchecked(&output), &addrs.router),
        expected_out
    );

    // Canonical router keeps nothing
    let canonical = net.domain(CANONICAL);
    assert_eq!(
        canonical.balance(&Addr::unchecked(&input), &addrs.router),
        Uint128::zero()
    );
    assert_eq!(
        canonical.balance(&Addr::unchecked(&output), &addrs.router),
        Uint128::zero()
    );

    // Canonical pool absorbed the input and paid out the output
    let pool_after = pool(&net, &key);
    assert_eq!(pool_after.reserve0, pool_before.reserve0 + Uint128::new(1_000));
    assert_eq!(pool_after.reserve1, pool_before.reserve1 - expected_out);
    assert_eq!(pool_before.reserve0, Uint128::new(LIQUIDITY));

    // Bridging only moves supply between domains
    assert_eq!(total_supply(&net, &input), supply_in);
    assert_eq!(total_supply(&net, &output), supply_out);
}

#[test]
fn test_resolution_before_input_fails_closed() {
    let (mut net, key) = setup();
    let addrs = net.addrs();
    let input = key.currency0.clone();
    let output = key.currency1.clone();
    let expected_out = simulate(&net, &key, 1_000);

    swap(&mut net, PROXY, &input, 1_000, &key, true, -1_000).unwrap();

    // Intent (nonce 1) overtakes the bridged input (nonce 0)
    assert!(net.relay(PROXY, 1).is_err());
    assert_eq!(net.domain(CANONICAL).next_nonce().unwrap(), 0);

    // Redelivery after the input has landed succeeds
    net.relay(PROXY, 0).unwrap();
    net.relay(PROXY, 1).unwrap();
    net.relay_pending().unwrap();

    assert_eq!(
        net.domain(PROXY)
            .balance(&Addr::unchecked(&output), &addrs.router),
        expected_out
    );
}

// ============================================================================
// Initiation checks
// ============================================================================

#[test]
fn test_exact_output_rejected_without_bridging() {
    let (mut net, key) = setup();
    let input = key.currency0.clone();

    let res = swap(&mut net, PROXY, &input, 1_000, &key, true, 1_000);
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Exact output unsupported"), "got: {}", err_str);

    let proxy = net.domain(PROXY);
    assert_eq!(proxy.next_nonce().unwrap(), 0);
    assert_eq!(
        proxy.balance(&Addr::unchecked(&input), &Addr::unchecked(ALICE)),
        Uint128::new(INITIAL_BALANCE)
    );
}

#[test]
fn test_zero_amount_specified_rejected() {
    let (mut net, key) = setup();
    let input = key.currency0.clone();

    let res = swap(&mut net, PROXY, &input, 1_000, &key, true, 0);
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Invalid amount"), "got: {}", err_str);
}

#[test]
fn test_initiation_checks() {
    let (mut net, key) = setup();
    let input = key.currency0.clone();
    let other = key.currency1.clone();

    // Wrong token for the direction
    let res = swap(&mut net, PROXY, &other, 1_000, &key, true, -1_000);
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Invalid input token"), "got: {}", err_str);

    // Received amount differs from the intent
    let res = swap(&mut net, PROXY, &input, 1_000, &key, true, -999);
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Amount mismatch"), "got: {}", err_str);

    // Unsorted pool key
    let mut unsorted = key.clone();
    std::mem::swap(&mut unsorted.currency0, &mut unsorted.currency1);
    let res = swap(&mut net, PROXY, &input, 1_000, &unsorted, false, -1_000);
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Invalid pool key"), "got: {}", err_str);

    // Canonical domain cannot initiate
    let res = swap(&mut net, CANONICAL, &input, 1_000, &key, true, -1_000);
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Not a proxy domain"), "got: {}", err_str);

    assert_eq!(net.domain(PROXY).next_nonce().unwrap(), 0);
}

// ============================================================================
// Resolution authentication
// ============================================================================

fn intent_msg(key: &PoolKey, origin_domain: u64, source_domain: u64, sender: &Addr) -> ExecuteMsg {
    ExecuteMsg::ReceiveMessage(CrossDomainMsg {
        sender: sender.to_string(),
        source_domain,
        payload: RouterMessage::ResolveSwap(SwapIntent {
            origin_domain,
            pool_key: key.clone(),
            zero_for_one: true,
            amount_specified: Int128::new(-1_000),
        })
        .encode()
        .unwrap(),
    })
}

#[test]
fn test_resolution_requires_messenger() {
    let (mut net, key) = setup();
    let addrs = net.addrs();

    let res = net.domain_mut(CANONICAL).app.execute_contract(
        Addr::unchecked(ALICE),
        addrs.router.clone(),
        &intent_msg(&key, PROXY, PROXY, &addrs.router),
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Unauthorized caller"), "got: {}", err_str);
}

#[test]
fn test_resolution_rejects_mismatched_origin() {
    let (mut net, key) = setup();
    let addrs = net.addrs();

    // Intent claims a different origin than the transport reports
    let res = net.domain_mut(CANONICAL).app.execute_contract(
        addrs.messenger.clone(),
        addrs.router.clone(),
        &intent_msg(&key, CANONICAL, PROXY, &addrs.router),
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Invalid origin"), "got: {}", err_str);

    // Sender is not a known router
    let res = net.domain_mut(CANONICAL).app.execute_contract(
        addrs.messenger.clone(),
        addrs.router.clone(),
        &intent_msg(&key, PROXY, PROXY, &Addr::unchecked("mallory")),
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Invalid origin"), "got: {}", err_str);
}

#[test]
fn test_resolution_only_on_canonical_domain() {
    let (mut net, key) = setup();
    let addrs = net.addrs();

    let res = net.domain_mut(PROXY).app.execute_contract(
        addrs.messenger.clone(),
        addrs.router.clone(),
        &intent_msg(&key, CANONICAL, CANONICAL, &addrs.router),
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Not the canonical domain"), "got: {}", err_str);
}
