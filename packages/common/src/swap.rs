//! Swap types shared by the swap router and the pool manager.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Int128, StdError, StdResult, Uint128};

use crate::domain::DomainId;

/// Fee denominator: fees are expressed in hundredths of a basis point.
pub const FEE_DENOMINATOR: u32 = 1_000_000;

/// Asset pair descriptor identifying a pool.
#[cw_serde]
pub struct PoolKey {
    /// Lexicographically smaller token address
    pub currency0: String,
    /// Lexicographically larger token address
    pub currency1: String,
    /// Swap fee in pips (1 = 0.0001%)
    pub fee: u32,
}

impl PoolKey {
    pub fn validate(&self) -> StdResult<()> {
        if self.currency0 >= self.currency1 {
            return Err(StdError::generic_err(
                "pool key currencies must be sorted and distinct",
            ));
        }
        if self.fee >= FEE_DENOMINATOR {
            return Err(StdError::generic_err("pool fee out of range"));
        }
        Ok(())
    }

    /// Storage key of the pool.
    pub fn id(&self) -> String {
        format!("{}:{}:{}", self.currency0, self.currency1, self.fee)
    }

    pub fn input_currency(&self, zero_for_one: bool) -> &str {
        if zero_for_one {
            &self.currency0
        } else {
            &self.currency1
        }
    }

    pub fn output_currency(&self, zero_for_one: bool) -> &str {
        if zero_for_one {
            &self.currency1
        } else {
            &self.currency0
        }
    }
}

/// One leg of a cross-domain swap, forwarded from a proxy domain to the
/// canonical domain.
#[cw_serde]
pub struct SwapIntent {
    pub origin_domain: DomainId,
    pub pool_key: PoolKey,
    pub zero_for_one: bool,
    /// Negative for exact input (the only accepted mode)
    pub amount_specified: Int128,
}

impl SwapIntent {
    pub fn is_exact_input(&self) -> bool {
        is_exact_input(self.amount_specified)
    }

    /// Input amount of an exact-input swap.
    pub fn input_amount(&self) -> Uint128 {
        Uint128::new(self.amount_specified.i128().unsigned_abs())
    }
}

pub fn is_exact_input(amount_specified: Int128) -> bool {
    amount_specified.i128() < 0
}

/// cw20 receive hook understood by the pool manager.
#[cw_serde]
pub enum PoolReceiveMsg {
    /// Credit the sent tokens to the pool's reserve of that currency.
    AddLiquidity { key: PoolKey },
    /// Swap the sent tokens; output goes to `recipient` or the cw20 sender.
    Swap {
        key: PoolKey,
        zero_for_one: bool,
        recipient: Option<String>,
    },
}
