#![no_std]

multiversx_sc::imports!();

pub mod fungible_token_proxy;

use defi_modules::{access, ledger};

// ============================================================
// Constants
// ============================================================

/// 18 decimals
const ONE_TOKEN: u64 = 1_000_000_000_000_000_000;

const TOTAL_SUPPLY_TOKENS: u64 = 500_000;

/// Minted to the phased sale contract; the rest goes to the treasury
const SALE_ALLOCATION_TOKENS: u64 = 150_000;

const TRANSFER_TAX_PERCENTAGE: u64 = 2;

// ============================================================
// Contract
// ============================================================

/// SPC token: fixed supply, optional 2% transfer tax routed to the treasury.
#[multiversx_sc::contract]
pub trait FungibleToken: ledger::LedgerModule + access::AccessModule {
    #[init]
    fn init(&self, treasury: ManagedAddress, sale_address: ManagedAddress) {
        require!(treasury != sale_address, "treasury and sale address must differ");

        let caller = self.blockchain().get_caller();
        self.init_owner(&caller);
        self.treasury().set(&treasury);
        self.transfer_tax_enabled().set(false);

        let sale_allocation = BigUint::from(SALE_ALLOCATION_TOKENS) * ONE_TOKEN;
        let treasury_allocation =
            BigUint::from(TOTAL_SUPPLY_TOKENS - SALE_ALLOCATION_TOKENS) * ONE_TOKEN;
        self.mint_to(&sale_address, &sale_allocation);
        self.mint_to(&treasury, &treasury_allocation);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // Transfers
    // ========================================================

    #[endpoint(transfer)]
    fn transfer(&self, to: ManagedAddress, amount: BigUint) -> bool {
        let caller = self.blockchain().get_caller();
        self.transfer_with_tax(&caller, &to, &amount);
        true
    }

    #[endpoint(transferFrom)]
    fn transfer_from(&self, from: ManagedAddress, to: ManagedAddress, amount: BigUint) -> bool {
        let caller = self.blockchain().get_caller();
        self.spend_allowance(&from, &caller, &amount);
        self.transfer_with_tax(&from, &to, &amount);
        true
    }

    /// Moves `amount` out of `from`. With the tax on, the recipient is
    /// credited `amount - tax` and the treasury `tax`, unless the treasury
    /// itself is sending.
    fn transfer_with_tax(&self, from: &ManagedAddress, to: &ManagedAddress, amount: &BigUint) {
        let treasury = self.treasury().get();
        let tax = if self.transfer_tax_enabled().get() && *from != treasury {
            (amount * TRANSFER_TAX_PERCENTAGE) / 100u64
        } else {
            BigUint::zero()
        };
        require!(self.balances(from).get() >= *amount, "insufficient balance");

        let net_amount = amount - &tax;
        self.move_balance(from, to, &net_amount);
        self.transfer_event(from, to, &net_amount);

        if tax > 0u64 {
            self.move_balance(from, &treasury, &tax);
            self.transfer_event(from, &treasury, &tax);
        }
    }

    // ========================================================
    // Owner configuration
    // ========================================================

    #[endpoint(enableTransferTax)]
    fn enable_transfer_tax(&self, enabled: bool) {
        self.require_owner();
        self.transfer_tax_enabled().set(enabled);
        self.transfer_tax_toggled_event(enabled);
    }

    #[endpoint(setTreasury)]
    fn set_treasury(&self, treasury: ManagedAddress) {
        self.require_owner();
        self.treasury().set(&treasury);
        self.treasury_changed_event(&treasury);
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("TransferTaxToggled")]
    fn transfer_tax_toggled_event(&self, #[indexed] enabled: bool);

    #[event("TreasuryChanged")]
    fn treasury_changed_event(&self, #[indexed] treasury: &ManagedAddress);

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getTreasury)]
    #[storage_mapper("treasury")]
    fn treasury(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(transferTaxOn)]
    #[storage_mapper("transferTaxEnabled")]
    fn transfer_tax_enabled(&self) -> SingleValueMapper<bool>;
}
