#![no_std]

multiversx_sc::imports!();

pub mod amm;
pub mod liquidity_pool_proxy;

use defi_modules::ledger;
use fungible_token::fungible_token_proxy;

/// EGLD/SPC constant-product pool.
///
/// Every mutating endpoint works off balance diffs: whatever the pool holds
/// above its recorded reserves is the caller's input. Reserves are resynced
/// from the real balances at the end of each call. Liquidity shares live in
/// the ledger module.
#[multiversx_sc::contract]
pub trait LiquidityPool: ledger::LedgerModule {
    #[init]
    fn init(&self, token_address: ManagedAddress) {
        require!(
            self.blockchain().is_smart_contract(&token_address),
            "token address must be a contract"
        );
        self.token_address().set(&token_address);
        self.reserve_native().set(BigUint::zero());
        self.reserve_token().set(BigUint::zero());
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: mint
    // Shares for the assets sent in since the last sync.
    // ========================================================

    #[payable("EGLD")]
    #[endpoint(mint)]
    fn mint(&self, to: ManagedAddress) -> BigUint {
        self.require_valid_recipient(&to);

        let reserve_native = self.reserve_native().get();
        let reserve_token = self.reserve_token().get();
        let native_in = self.native_balance() - &reserve_native;
        let token_in = self.token_balance() - &reserve_token;
        let share_supply = self.total_supply().get();

        let shares = if share_supply == 0u64 {
            require!(
                native_in > 0u64 && token_in > 0u64,
                "must add both EGLD and token"
            );
            native_in.clone()
        } else {
            require!(native_in > 0u64 && token_in > 0u64, "insufficient liquidity");
            amm::shares_for_deposit(
                &native_in,
                &token_in,
                &reserve_native,
                &reserve_token,
                &share_supply,
            )
        };
        require!(shares > 0u64, "insufficient liquidity minted");

        self.mint_to(&to, &shares);
        self.sync_reserves();

        let caller = self.blockchain().get_caller();
        self.mint_event(&caller, &native_in, &token_in);

        shares
    }

    // ========================================================
    // ENDPOINT: burn
    // Redeems the shares the pool itself holds.
    // ========================================================

    #[endpoint(burn)]
    fn burn(&self, to: ManagedAddress) -> MultiValue2<BigUint, BigUint> {
        self.require_valid_recipient(&to);

        let sc_address = self.blockchain().get_sc_address();
        let liquidity = self.balances(&sc_address).get();
        let share_supply = self.total_supply().get();
        require!(liquidity > 0u64, "insufficient liquidity burned");

        let native_out = (&liquidity * &self.reserve_native().get()) / &share_supply;
        let token_out = (&liquidity * &self.reserve_token().get()) / &share_supply;
        require!(
            native_out > 0u64 && token_out > 0u64,
            "insufficient liquidity burned"
        );

        self.burn_from(&sc_address, &liquidity);
        self.send().direct_egld(&to, &native_out);
        self.send_token(&to, &token_out);
        self.sync_reserves();

        let caller = self.blockchain().get_caller();
        self.burn_event(&caller, &native_out, &token_out);

        (native_out, token_out).into()
    }

    // ========================================================
    // Swaps
    // ========================================================

    #[endpoint(swapTokenForNative)]
    fn swap_token_for_native(&self, to: ManagedAddress) -> BigUint {
        self.require_valid_recipient(&to);

        let reserve_native = self.reserve_native().get();
        let reserve_token = self.reserve_token().get();
        let token_in = self.token_balance() - &reserve_token;
        require!(token_in > 0u64, "insufficient liquidity");

        let native_out = amm::amount_out(&token_in, &reserve_token, &reserve_native);
        require!(native_out > 0u64, "insufficient liquidity");

        self.send().direct_egld(&to, &native_out);
        self.sync_reserves();
        self.require_product_kept(&reserve_native, &reserve_token);

        let caller = self.blockchain().get_caller();
        self.swap_spc_event(&caller, &token_in, &native_out);

        native_out
    }

    /// Returns what `to` actually received, which is less than the curve
    /// output while the token's transfer tax is on.
    #[payable("EGLD")]
    #[endpoint(swapNativeForToken)]
    fn swap_native_for_token(&self, to: ManagedAddress) -> BigUint {
        self.require_valid_recipient(&to);

        let reserve_native = self.reserve_native().get();
        let reserve_token = self.reserve_token().get();
        let native_in = self.native_balance() - &reserve_native;
        require!(native_in > 0u64, "insufficient liquidity");

        let token_out = amm::amount_out(&native_in, &reserve_native, &reserve_token);
        require!(token_out > 0u64, "insufficient liquidity");

        let balance_before = self.token_balance_of(&to);
        self.send_token(&to, &token_out);
        let delivered = self.token_balance_of(&to) - &balance_before;
        self.sync_reserves();
        self.require_product_kept(&reserve_native, &reserve_token);

        let caller = self.blockchain().get_caller();
        self.swap_eth_event(&caller, &native_in, &delivered);

        delivered
    }

    // ========================================================
    // Share transfers (never taxed)
    // ========================================================

    #[endpoint(transfer)]
    fn transfer(&self, to: ManagedAddress, amount: BigUint) -> bool {
        let caller = self.blockchain().get_caller();
        self.move_balance(&caller, &to, &amount);
        self.transfer_event(&caller, &to, &amount);
        true
    }

    #[endpoint(transferFrom)]
    fn transfer_from(&self, from: ManagedAddress, to: ManagedAddress, amount: BigUint) -> bool {
        let caller = self.blockchain().get_caller();
        self.spend_allowance(&from, &caller, &amount);
        self.move_balance(&from, &to, &amount);
        self.transfer_event(&from, &to, &amount);
        true
    }

    // ========================================================
    // Internal
    // ========================================================

    fn sync_reserves(&self) {
        self.reserve_native().set(self.native_balance());
        self.reserve_token().set(self.token_balance());
    }

    /// Curve outputs can round up by one unit; a swap must never lower the
    /// reserve product.
    fn require_product_kept(&self, reserve_native: &BigUint, reserve_token: &BigUint) {
        let product_before = reserve_native * reserve_token;
        let product_after = self.reserve_native().get() * self.reserve_token().get();
        require!(product_after >= product_before, "insufficient liquidity");
    }

    fn native_balance(&self) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0)
    }

    fn token_balance(&self) -> BigUint {
        let sc_address = self.blockchain().get_sc_address();
        self.token_balance_of(&sc_address)
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

    fn send_token(&self, to: &ManagedAddress, amount: &BigUint) {
        let token_address = self.token_address().get();
        self.tx()
            .to(&token_address)
            .typed(fungible_token_proxy::FungibleTokenProxy)
            .transfer(to, amount)
            .sync_call();
    }

    fn require_valid_recipient(&self, to: &ManagedAddress) {
        require!(
            *to != self.blockchain().get_sc_address(),
            "invalid recipient"
        );
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// `token_to_native == true` prices `amount` tokens in EGLD.
    #[view(idealQuote)]
    fn ideal_quote(&self, amount: BigUint, token_to_native: bool) -> BigUint {
        let reserve_native = self.reserve_native().get();
        let reserve_token = self.reserve_token().get();
        let (reserve_self, reserve_other) = if token_to_native {
            (reserve_token, reserve_native)
        } else {
            (reserve_native, reserve_token)
        };
        require!(reserve_self > 0u64, "insufficient liquidity");
        amm::ideal_quote(&amount, &reserve_self, &reserve_other)
    }

    #[view(quoteTokenForEth)]
    fn quote_token_for_eth(&self, amount_in: BigUint) -> BigUint {
        amm::amount_out(
            &amount_in,
            &self.reserve_token().get(),
            &self.reserve_native().get(),
        )
    }

    #[view(quoteEthForToken)]
    fn quote_eth_for_token(&self, amount_in: BigUint) -> BigUint {
        amm::amount_out(
            &amount_in,
            &self.reserve_native().get(),
            &self.reserve_token().get(),
        )
    }

    #[view(getReserves)]
    fn get_reserves(&self) -> MultiValue2<BigUint, BigUint> {
        (self.reserve_native().get(), self.reserve_token().get()).into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("Mint")]
    fn mint_event(
        &self,
        #[indexed] sender: &ManagedAddress,
        #[indexed] native_amount: &BigUint,
        token_amount: &BigUint,
    );

    #[event("Burn")]
    fn burn_event(
        &self,
        #[indexed] sender: &ManagedAddress,
        #[indexed] native_amount: &BigUint,
        token_amount: &BigUint,
    );

    #[event("SwapSPC")]
    fn swap_spc_event(
        &self,
        #[indexed] sender: &ManagedAddress,
        #[indexed] token_in: &BigUint,
        native_out: &BigUint,
    );

    #[event("SwapETH")]
    fn swap_eth_event(
        &self,
        #[indexed] sender: &ManagedAddress,
        #[indexed] native_in: &BigUint,
        token_out: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getTokenAddress)]
    #[storage_mapper("tokenAddress")]
    fn token_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("reserveNative")]
    fn reserve_native(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("reserveToken")]
    fn reserve_token(&self) -> SingleValueMapper<BigUint>;
}
