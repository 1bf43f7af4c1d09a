//! Domains, deployments and the relayer.

use std::collections::BTreeSet;

use anyhow::{anyhow, Result as AnyResult};
use cosmwasm_std::{to_json_binary, Addr, Binary, Empty, Uint128};
use cw20::{BalanceResponse, Cw20Coin, Cw20ExecuteMsg, TokenInfoResponse};
use cw_multi_test::{App, AppResponse, Executor};

use common::domain::DomainPeer;
use common::swap::{PoolKey, PoolReceiveMsg};
use common::transport::{MessageNonceResponse, MessageResponse, TransportQueryMsg};

use crate::contracts::{
    contract_bridge, contract_hooked_bridge, contract_messenger, contract_pool_manager,
    contract_recipient, contract_router, contract_token,
};
use crate::recipient::{QueryMsg as RecipientQueryMsg, RecordedCall};

/// Address allowed to deliver envelopes on every messenger.
pub const RELAYER: &str = "relayer";
pub const ADMIN: &str = "admin";
pub const ALICE: &str = "alice";
pub const LP: &str = "liquidity_provider";

/// Initial balance of each user on each domain, per token.
pub const INITIAL_BALANCE: u128 = 1_000_000;

/// Addresses of the contracts deployed on a domain.
#[derive(Clone, Debug, PartialEq)]
pub struct Deployment {
    pub messenger: Addr,
    pub bridge: Addr,
    pub hooked_bridge: Addr,
    pub token_x: Addr,
    pub token_y: Addr,
    pub pool_manager: Addr,
    pub router: Addr,
    pub recipient: Addr,
}

impl Deployment {
    /// Pool over the two test tokens, currencies sorted.
    pub fn pool_key(&self, fee: u32) -> PoolKey {
        let (currency0, currency1) = if self.token_x < self.token_y {
            (self.token_x.to_string(), self.token_y.to_string())
        } else {
            (self.token_y.to_string(), self.token_x.to_string())
        };
        PoolKey {
            currency0,
            currency1,
            fee,
        }
    }
}

pub struct Domain {
    pub id: u64,
    pub app: App,
    pub addrs: Deployment,
}

impl Domain {
    /// Deploys the full contract set on a fresh app.
    ///
    /// Deployment order is fixed, so the same contract lands at the same
    /// address on every domain.
    pub fn deploy(id: u64, all_domains: &[u64], canonical_domain: u64) -> AnyResult<Self> {
        let mut app = App::default();
        let admin = Addr::unchecked(ADMIN);

        let messenger_code = app.store_code(contract_messenger());
        let bridge_code = app.store_code(contract_bridge());
        let hooked_code = app.store_code(contract_hooked_bridge());
        let token_code = app.store_code(contract_token());
        let pool_manager_code = app.store_code(contract_pool_manager());
        let router_code = app.store_code(contract_router());
        let recipient_code = app.store_code(contract_recipient());

        let peers: Vec<DomainPeer> = all_domains
            .iter()
            .map(|domain| DomainPeer::same_address(*domain))
            .collect();

        let messenger = app.instantiate_contract(
            messenger_code,
            admin.clone(),
            &messenger::msg::InstantiateMsg {
                domain: id,
                relayer: Some(RELAYER.to_string()),
            },
            &[],
            "messenger",
            None,
        )?;

        let bridge_msg = bridge::msg::InstantiateMsg {
            messenger: messenger.to_string(),
            peers: peers.clone(),
            hook_gas_limit: None,
        };
        let bridge = app.instantiate_contract(
            bridge_code,
            admin.clone(),
            &bridge_msg,
            &[],
            "bridge",
            None,
        )?;
        let hooked_bridge = app.instantiate_contract(
            hooked_code,
            admin.clone(),
            &bridge_msg,
            &[],
            "hooked-bridge",
            None,
        )?;

        let mut tokens = Vec::with_capacity(2);
        for symbol in ["TKX", "TKY"] {
            let token = app.instantiate_contract(
                token_code,
                admin.clone(),
                &crosschain_token::msg::InstantiateMsg {
                    name: format!("Token {}", symbol),
                    symbol: symbol.to_string(),
                    decimals: 6,
                    initial_balances: [ALICE, LP]
                        .iter()
                        .map(|holder| Cw20Coin {
                            address: holder.to_string(),
                            amount: Uint128::new(INITIAL_BALANCE),
                        })
                        .collect(),
                    bridges: vec![bridge.to_string(), hooked_bridge.to_string()],
                },
                &[],
                symbol,
                None,
            )?;
            tokens.push(token);
        }
        let token_y = tokens.pop().ok_or_else(|| anyhow!("token_y missing"))?;
        let token_x = tokens.pop().ok_or_else(|| anyhow!("token_x missing"))?;

        let pool_manager = app.instantiate_contract(
            pool_manager_code,
            admin.clone(),
            &pool_manager::msg::InstantiateMsg {},
            &[],
            "pool-manager",
            None,
        )?;

        let router = app.instantiate_contract(
            router_code,
            admin.clone(),
            &swap_router::msg::InstantiateMsg {
                canonical_domain,
                messenger: messenger.to_string(),
                bridge: bridge.to_string(),
                pool_manager: Some(pool_manager.to_string()),
                peers,
            },
            &[],
            "router",
            None,
        )?;

        let recipient =
            app.instantiate_contract(recipient_code, admin, &Empty {}, &[], "recipient", None)?;

        Ok(Self {
            id,
            app,
            addrs: Deployment {
                messenger,
                bridge,
                hooked_bridge,
                token_x,
                token_y,
                pool_manager,
                router,
                recipient,
            },
        })
    }

    pub fn balance(&self, token: &Addr, owner: &Addr) -> Uint128 {
        self.app
            .wrap()
            .query_wasm_smart::<BalanceResponse>(
                token,
                &cw20::Cw20QueryMsg::Balance {
                    address: owner.to_string(),
                },
            )
            .map(|res| res.balance)
            .unwrap_or_default()
    }

    pub fn total_supply(&self, token: &Addr) -> Uint128 {
        self.app
            .wrap()
            .query_wasm_smart::<TokenInfoResponse>(token, &cw20::Cw20QueryMsg::TokenInfo {})
            .map(|res| res.total_supply)
            .unwrap_or_default()
    }

    pub fn next_nonce(&self) -> AnyResult<u64> {
        let res: MessageNonceResponse = self
            .app
            .wrap()
            .query_wasm_smart(&self.addrs.messenger, &TransportQueryMsg::MessageNonce {})?;
        Ok(res.nonce)
    }

    pub fn message(&self, nonce: u64) -> AnyResult<MessageResponse> {
        Ok(self.app.wrap().query_wasm_smart(
            &self.addrs.messenger,
            &TransportQueryMsg::Message { nonce },
        )?)
    }

    pub fn recipient_calls(&self) -> AnyResult<Vec<RecordedCall>> {
        Ok(self
            .app
            .wrap()
            .query_wasm_smart(&self.addrs.recipient, &RecipientQueryMsg::Calls {})?)
    }

    /// Seeds the pool over both test tokens with `amount` of each.
    pub fn add_liquidity(&mut self, fee: u32, amount: u128) -> AnyResult<PoolKey> {
        let key = self.addrs.pool_key(fee);
        for token in [key.currency0.clone(), key.currency1.clone()] {
            self.app.execute_contract(
                Addr::unchecked(LP),
                Addr::unchecked(token),
                &Cw20ExecuteMsg::Send {
                    contract: self.addrs.pool_manager.to_string(),
                    amount: Uint128::new(amount),
                    msg: to_json_binary(&PoolReceiveMsg::AddLiquidity { key: key.clone() })?,
                },
                &[],
            )?;
        }
        Ok(key)
    }
}

/// A set of domains plus the relayer's delivery bookkeeping.
pub struct Network {
    pub domains: Vec<Domain>,
    delivered: BTreeSet<(u64, u64)>,
}

impl Network {
    pub fn new(domain_ids: &[u64], canonical_domain: u64) -> AnyResult<Self> {
        let domains = domain_ids
            .iter()
            .map(|id| Domain::deploy(*id, domain_ids, canonical_domain))
            .collect::<AnyResult<Vec<_>>>()?;

        // Same deployment order: one address set for every domain
        if let Some(first) = domains.first() {
            if let Some(other) = domains.iter().find(|d| d.addrs != first.addrs) {
                return Err(anyhow!(
                    "domain {} deployed at different addresses than domain {}",
                    other.id,
                    first.id
                ));
            }
        }

        Ok(Self {
            domains,
            delivered: BTreeSet::new(),
        })
    }

    pub fn domain(&self, id: u64) -> &Domain {
        self.domains
            .iter()
            .find(|domain| domain.id == id)
            .unwrap_or_else(|| panic!("unknown domain {}", id))
    }

    pub fn domain_mut(&mut self, id: u64) -> &mut Domain {
        self.domains
            .iter_mut()
            .find(|domain| domain.id == id)
            .unwrap_or_else(|| panic!("unknown domain {}", id))
    }

    /// Contract addresses (identical on every domain).
    pub fn addrs(&self) -> Deployment {
        self.domains[0].addrs.clone()
    }

    /// Envelopes dispatched but not yet delivered, as `(source, nonce)`.
    pub fn pending(&self) -> AnyResult<Vec<(u64, u64)>> {
        let mut pending = Vec::new();
        for domain in &self.domains {
            for nonce in 0..domain.next_nonce()? {
                if !self.delivered.contains(&(domain.id, nonce)) {
                    pending.push((domain.id, nonce));
                }
            }
        }
        Ok(pending)
    }

    /// Delivers one envelope from `source`'s outbox to its destination.
    ///
    /// Delivery may be repeated; the messenger does not filter duplicates.
    pub fn relay(&mut self, source: u64, nonce: u64) -> AnyResult<AppResponse> {
        let message = self.domain(source).message(nonce)?;
        let destination = self.domain_mut(message.envelope.destination);
        let res = destination.app.execute_contract(
            Addr::unchecked(RELAYER),
            destination.addrs.messenger.clone(),
            &messenger::msg::ExecuteMsg::RelayMessage {
                envelope: message.envelope,
                msg_hash: message.msg_hash,
            },
            &[],
        )?;
        self.delivered.insert((source, nonce));
        Ok(res)
    }

    /// Relays until every outbox is drained, including messages dispatched
    /// by the deliveries themselves.
    pub fn relay_pending(&mut self) -> AnyResult<Vec<AppResponse>> {
        let mut responses = Vec::new();
        loop {
            let pending = self.pending()?;
            if pending.is_empty() {
                return Ok(responses);
            }
            for (source, nonce) in pending {
                responses.push(self.relay(source, nonce)?);
            }
        }
    }
}

/// Encodes bytes as hook or callback data.
pub fn data(bytes: &[u8]) -> Binary {
    Binary::from(bytes.to_vec())
}
