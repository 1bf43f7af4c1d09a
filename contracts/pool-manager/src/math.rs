//! Constant-product swap math.

use cosmwasm_std::Uint128;

use common::swap::FEE_DENOMINATOR;

/// Output of an exact-input swap against `(reserve_in, reserve_out)` with
/// `fee` in pips.
///
/// Returns `None` when the pool cannot produce any output for this input.
pub fn swap_output(
    amount_in: Uint128,
    reserve_in: Uint128,
    reserve_out: Uint128,
    fee: u32,
) -> Option<Uint128> {
    if reserve_in.is_zero() || reserve_out.is_zero() || fee >= FEE_DENOMINATOR {
        return None;
    }
    let amount_in_after_fee = amount_in
        .checked_multiply_ratio(FEE_DENOMINATOR - fee, FEE_DENOMINATOR)
        .ok()?;
    let denominator = reserve_in.checked_add(amount_in_after_fee).ok()?;
    let amount_out = reserve_out
        .checked_multiply_ratio(amount_in_after_fee, denominator)
        .ok()?;
    (!amount_out.is_zero()).then_some(amount_out)
}
