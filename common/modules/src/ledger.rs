multiversx_sc::imports!();

/// Fungible balance + allowance bookkeeping.
///
/// Used by the SPC token and by the pool's liquidity shares. Only the
/// internal helpers touch `balances` and `totalSupply`, so every unit that
/// enters or leaves circulation goes through `mint_to` / `burn_from`.
#[multiversx_sc::module]
pub trait LedgerModule {
    #[endpoint(approve)]
    fn approve(&self, spender: ManagedAddress, amount: BigUint) -> bool {
        let caller = self.blockchain().get_caller();
        self.allowances(&caller, &spender).set(&amount);
        self.approval_event(&caller, &spender, &amount);
        true
    }

    fn mint_to(&self, to: &ManagedAddress, amount: &BigUint) {
        self.balances(to).update(|balance| *balance += amount);
        self.total_supply().update(|supply| *supply += amount);
        self.transfer_event(&ManagedAddress::zero(), to, amount);
    }

    fn burn_from(&self, from: &ManagedAddress, amount: &BigUint) {
        let balance = self.balances(from).get();
        require!(balance >= *amount, "insufficient balance");
        self.balances(from).set(&(balance - amount));
        self.total_supply().update(|supply| *supply -= amount);
        self.transfer_event(from, &ManagedAddress::zero(), amount);
    }

    /// Debits `from` and credits `to`. Emits nothing; callers decide how
    /// the movement is reported (the token splits it when taxing).
    fn move_balance(&self, from: &ManagedAddress, to: &ManagedAddress, amount: &BigUint) {
        let from_balance = self.balances(from).get();
        require!(from_balance >= *amount, "insufficient balance");
        self.balances(from).set(&(from_balance - amount));
        self.balances(to).update(|balance| *balance += amount);
    }

    fn spend_allowance(&self, owner: &ManagedAddress, spender: &ManagedAddress, amount: &BigUint) {
        let allowance = self.allowances(owner, spender).get();
        require!(allowance >= *amount, "insufficient allowance");
        self.allowances(owner, spender).set(&(allowance - amount));
    }

    // views

    #[view(balanceOf)]
    fn balance_of(&self, account: &ManagedAddress) -> BigUint {
        self.balances(account).get()
    }

    #[view(allowance)]
    fn allowance(&self, owner: &ManagedAddress, spender: &ManagedAddress) -> BigUint {
        self.allowances(owner, spender).get()
    }

    #[view(totalSupply)]
    #[storage_mapper("totalSupply")]
    fn total_supply(&self) -> SingleValueMapper<BigUint>;

    // events

    #[event("Transfer")]
    fn transfer_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("Approval")]
    fn approval_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] spender: &ManagedAddress,
        amount: &BigUint,
    );

    // storage

    #[storage_mapper("balances")]
    fn balances(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("allowances")]
    fn allowances(
        &self,
        owner: &ManagedAddress,
        spender: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;
}
