//! Constant-product pricing (x·y=k).

use multiversx_sc::{api::ManagedTypeApi, types::BigUint};

/// 1% swap fee, taken from the input side and left in the pool
pub const FEE_PERCENTAGE: u64 = 1;

const PERCENTAGE_DENOMINATOR: u64 = 100;

/// Output of a swap of `amount_in` against the given reserves.
///
/// `out = reserve_out - reserve_in * reserve_out / (reserve_in + amount_in * 99 / 100)`.
/// The inner division floors, so the output can exceed the exact curve value
/// by one unit. Swap endpoints check the reserve product afterwards.
pub fn amount_out<M: ManagedTypeApi>(
    amount_in: &BigUint<M>,
    reserve_in: &BigUint<M>,
    reserve_out: &BigUint<M>,
) -> BigUint<M> {
    if *reserve_in == 0u64 || *reserve_out == 0u64 {
        return BigUint::zero();
    }

    let amount_in_after_fee =
        (amount_in * (PERCENTAGE_DENOMINATOR - FEE_PERCENTAGE)) / PERCENTAGE_DENOMINATOR;
    let product = reserve_in * reserve_out;
    let reserve_in_after = reserve_in + &amount_in_after_fee;
    reserve_out - &(product / &reserve_in_after)
}

/// Fee-free spot conversion; callers must ensure `reserve_self` is non-zero.
pub fn ideal_quote<M: ManagedTypeApi>(
    amount: &BigUint<M>,
    reserve_self: &BigUint<M>,
    reserve_other: &BigUint<M>,
) -> BigUint<M> {
    (amount * reserve_other) / reserve_self
}

/// Shares credited for a deposit into a non-empty pool: the smaller of the
/// two proportional amounts, so only the limiting side counts.
pub fn shares_for_deposit<M: ManagedTypeApi>(
    native_in: &BigUint<M>,
    token_in: &BigUint<M>,
    reserve_native: &BigUint<M>,
    reserve_token: &BigUint<M>,
    share_supply: &BigUint<M>,
) -> BigUint<M> {
    let by_native = (native_in * share_supply) / reserve_native;
    let by_token = (token_in * share_supply) / reserve_token;
    if by_native < by_token {
        by_native
    } else {
        by_token
    }
}
