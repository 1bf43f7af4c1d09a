use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Uint128};
use cw20::{BalanceResponse, Cw20Coin, TokenInfoResponse};

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub initial_balances: Vec<Cw20Coin>,
    /// Contracts allowed to call crosschain mint/burn
    pub bridges: Vec<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Bridge only: mint `amount` to `to`
    CrosschainMint { to: String, amount: Uint128 },
    /// Bridge only: burn `amount` held by `from`
    CrosschainBurn { from: String, amount: Uint128 },

    Transfer { recipient: String, amount: Uint128 },
    Send {
        contract: String,
        amount: Uint128,
        msg: Binary,
    },
    Burn { amount: Uint128 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(BalanceResponse)]
    Balance { address: String },
    #[returns(TokenInfoResponse)]
    TokenInfo {},
    /// Capability probe answered by the bridges' compliance check
    #[returns(bool)]
    SupportsInterface { interface_id: String },
    #[returns(BridgesResponse)]
    Bridges {},
}

#[cw_serde]
pub struct BridgesResponse {
    pub bridges: Vec<String>,
}

#[cw_serde]
pub struct MigrateMsg {}
