#![no_std]

multiversx_sc::imports!();

pub mod router_proxy;

use fungible_token::fungible_token_proxy;
use liquidity_pool::{amm, liquidity_pool_proxy};

/// Slippage-checked entry point to the pool. Holds no funds between calls:
/// every EGLD unit it receives is either forwarded to the pool or refunded.
#[multiversx_sc::contract]
pub trait Router {
    #[init]
    fn init(&self, token_address: ManagedAddress, pool_address: ManagedAddress) {
        self.token_address().set(&token_address);
        self.pool_address().set(&pool_address);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: addLiquidity
    // ========================================================

    /// Deposits up to `token_amount_desired` SPC and the attached EGLD.
    ///
    /// The EGLD side is derived from the tokens the pool actually received,
    /// so with the transfer tax on `native_amount_min` has to leave room for
    /// the tax. Unused EGLD goes back to the caller.
    #[payable("EGLD")]
    #[endpoint(addLiquidity)]
    fn add_liquidity(
        &self,
        token_amount_desired: BigUint,
        token_amount_min: BigUint,
        native_amount_min: BigUint,
    ) -> BigUint {
        let caller = self.blockchain().get_caller();
        let native_supplied = self.call_value().egld_value().clone_value();
        let (reserve_native, reserve_token) = self.pool_reserves();

        if reserve_native == 0u64 && reserve_token == 0u64 {
            self.pull_tokens_into_pool(&caller, &token_amount_desired);
            return self.mint_shares(&caller, &native_supplied);
        }

        let native_optimal =
            amm::ideal_quote(&token_amount_desired, &reserve_token, &reserve_native);
        let token_amount = if native_optimal <= native_supplied {
            token_amount_desired
        } else {
            amm::ideal_quote(&native_supplied, &reserve_native, &reserve_token)
        };
        require!(
            token_amount >= token_amount_min,
            "insufficient token amount"
        );

        self.pull_tokens_into_pool(&caller, &token_amount);
        let pool_address = self.pool_address().get();
        let token_received = self.token_balance_of(&pool_address) - &reserve_token;
        let native_amount = amm::ideal_quote(&token_received, &reserve_token, &reserve_native);
        require!(
            native_amount >= native_amount_min,
            "insufficient EGLD amount"
        );

        let shares = self.mint_shares(&caller, &native_amount);

        let refund = &native_supplied - &native_amount;
        if refund > 0u64 {
            self.send().direct_egld(&caller, &refund);
        }

        shares
    }

    // ========================================================
    // ENDPOINT: removeLiquidity
    // Caller must have approved the router on the pool's shares.
    // ========================================================

    #[endpoint(removeLiquidity)]
    fn remove_liquidity(&self, share_amount: BigUint) -> MultiValue2<BigUint, BigUint> {
        let caller = self.blockchain().get_caller();
        let pool_address = self.pool_address().get();

        self.tx()
            .to(&pool_address)
            .typed(liquidity_pool_proxy::LiquidityPoolProxy)
            .transfer_from(&caller, &pool_address, &share_amount)
            .sync_call();

        self.tx()
            .to(&pool_address)
            .typed(liquidity_pool_proxy::LiquidityPoolProxy)
            .burn(&caller)
            .returns(ReturnsResult)
            .sync_call()
    }

    // ========================================================
    // Swaps
    // ========================================================

    #[endpoint(swapExactTokenForEth)]
    fn swap_exact_token_for_eth(&self, amount_in: BigUint, amount_out_min: BigUint) -> BigUint {
        let caller = self.blockchain().get_caller();
        self.pull_tokens_into_pool(&caller, &amount_in);

        let pool_address = self.pool_address().get();
        let amount_out: BigUint = self
            .tx()
            .to(&pool_address)
            .typed(liquidity_pool_proxy::LiquidityPoolProxy)
            .swap_token_for_native(&caller)
            .returns(ReturnsResult)
            .sync_call();
        require!(amount_out >= amount_out_min, "insufficient output amount");

        amount_out
    }

    #[payable("EGLD")]
    #[endpoint(swapExactEthForToken)]
    fn swap_exact_eth_for_token(&self, amount_out_min: BigUint) -> BigUint {
        let caller = self.blockchain().get_caller();
        let amount_in = self.call_value().egld_value().clone_value();

        let pool_address = self.pool_address().get();
        let amount_out: BigUint = self
            .tx()
            .to(&pool_address)
            .typed(liquidity_pool_proxy::LiquidityPoolProxy)
            .swap_native_for_token(&caller)
            .egld(&amount_in)
            .returns(ReturnsResult)
            .sync_call();
        require!(amount_out >= amount_out_min, "insufficient output amount");

        amount_out
    }

    // ========================================================
    // Internal
    // ========================================================

    fn pull_tokens_into_pool(&self, from: &ManagedAddress, amount: &BigUint) {
        let token_address = self.token_address().get();
        let pool_address = self.pool_address().get();
        self.tx()
            .to(&token_address)
            .typed(fungible_token_proxy::FungibleTokenProxy)
            .transfer_from(from, &pool_address, amount)
            .sync_call();
    }

    fn mint_shares(&self, to: &ManagedAddress, native_amount: &BigUint) -> BigUint {
        let pool_address = self.pool_address().get();
        self.tx()
            .to(&pool_address)
            .typed(liquidity_pool_proxy::LiquidityPoolProxy)
            .mint(to)
            .egld(native_amount)
            .returns(ReturnsResult)
            .sync_call()
    }

    fn pool_reserves(&self) -> (BigUint, BigUint) {
        let pool_address = self.pool_address().get();
        let reserves: MultiValue2<BigUint, BigUint> = self
            .tx()
            .to(&pool_address)
            .typed(liquidity_pool_proxy::LiquidityPoolProxy)
            .get_reserves()
            .returns(ReturnsResult)
            .sync_call();
        reserves.into_tuple()
    }

    fn token_balance_of(&self, account: &ManagedAddress) -> BigUint {
        let token_address = self.token_address().get();
        self.tx()
            .to(&token_address)
            .typed(fungible_token_proxy::FungibleTokenProxy)
            .balance_of(account)
            .returns(ReturnsResult)
            .sync_call()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getTokenAddress)]
    #[storage_mapper("tokenAddress")]
    fn token_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getPoolAddress)]
    #[storage_mapper("poolAddress")]
    fn pool_address(&self) -> SingleValueMapper<ManagedAddress>;
}
