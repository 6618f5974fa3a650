#![no_std]

multiversx_sc::imports!();

pub mod phase;
pub mod phased_sale_proxy;

use defi_modules::access;
use fungible_token::fungible_token_proxy;
use phase::Phase;

// ============================================================
// Constants
// ============================================================

/// 18 decimals
const ONE_EGLD: u64 = 1_000_000_000_000_000_000;

/// Tokens per EGLD invested
const TOKENS_PER_EGLD: u64 = 5;

const SEED_INDIVIDUAL_LIMIT_EGLD: u64 = 1_500;
const SEED_TOTAL_LIMIT_EGLD: u64 = 15_000;
const GENERAL_INDIVIDUAL_LIMIT_EGLD: u64 = 1_000;
const SALE_TOTAL_LIMIT_EGLD: u64 = 30_000;

// ============================================================
// Contract
// ============================================================

/// Three-phase token sale over the SPC allocation minted to this contract.
///
/// Seed and General investments are recorded as claims and paid out once the
/// sale reaches the Open phase. Open phase investments are paid out
/// immediately. Individual limits count everything an account put in across
/// Seed and General; the total limit counts every phase.
#[multiversx_sc::contract]
pub trait PhasedSale: access::AccessModule {
    #[init]
    fn init(&self, token_address: ManagedAddress, treasury: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        self.init_owner(&caller);
        self.token_address().set(&token_address);
        self.treasury().set(&treasury);
        self.phase().set(Phase::Seed);
        self.paused().set(false);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: invest
    // ========================================================

    #[payable("EGLD")]
    #[endpoint(invest)]
    fn invest(&self) {
        require!(!self.paused().get(), "cannot invest, currently paused");

        let amount = self.call_value().egld_value().clone_value();
        require!(amount > 0u64, "investment must be positive");

        let caller = self.blockchain().get_caller();
        let phase = self.phase().get();

        if phase == Phase::Seed {
            require!(
                self.whitelist(&caller).get(),
                "cannot invest in seed phase, address not whitelisted"
            );
        }

        if let Some(individual_limit) = self.individual_limit(phase) {
            let contributed = self.total_claimable_contrib(&caller).get() + &amount;
            require!(
                contributed <= individual_limit,
                "investment exceeds max individual investment for this phase"
            );
        }

        let total = self.total_private_contrib().get() + &amount;
        require!(
            total <= self.total_limit(phase),
            "investment exceeds max total private investment for this phase"
        );
        self.total_private_contrib().set(&total);

        if phase == Phase::Open {
            self.send_tokens(&caller, &(amount.clone() * TOKENS_PER_EGLD));
        } else {
            self.total_claimable_contrib(&caller)
                .update(|claimable| *claimable += &amount);
        }

        self.investment_event(&caller, &amount, phase.code());
    }

    // ========================================================
    // ENDPOINT: claimToken
    // ========================================================

    #[endpoint(claimToken)]
    fn claim_token(&self) {
        require!(
            self.phase().get() == Phase::Open,
            "cannot claim tokens, not yet in open phase"
        );

        let caller = self.blockchain().get_caller();
        let claimable = self.total_claimable_contrib(&caller).get();
        require!(
            claimable > 0u64,
            "no SPC tokens to claim from seed or general phase investments"
        );

        self.total_claimable_contrib(&caller).clear();
        let tokens = claimable * TOKENS_PER_EGLD;
        self.send_tokens(&caller, &tokens);

        self.tokens_claimed_event(&caller, &tokens);
    }

    // ========================================================
    // Owner operations
    // ========================================================

    #[endpoint(advancePhase)]
    fn advance_phase(&self) {
        self.require_owner();

        let next = match self.phase().get().next() {
            Some(next) => next,
            None => sc_panic!("cannot advance past open phase"),
        };
        self.phase().set(next);

        self.phase_advance_event(next.code());
    }

    #[endpoint(pause)]
    fn pause(&self, paused: bool) {
        self.require_owner();
        self.set_paused(paused);
    }

    #[endpoint(addToWhitelist)]
    fn add_to_whitelist(&self, account: ManagedAddress) {
        self.require_owner();
        self.whitelist(&account).set(true);
    }

    #[endpoint(addManyToWhitelist)]
    fn add_many_to_whitelist(&self, accounts: MultiValueEncoded<ManagedAddress>) {
        self.require_owner();
        for account in accounts {
            self.whitelist(&account).set(true);
        }
    }

    #[endpoint(removeFromWhitelist)]
    fn remove_from_whitelist(&self, account: ManagedAddress) {
        self.require_owner();
        self.whitelist(&account).clear();
    }

    /// Sends raised EGLD to the treasury.
    #[endpoint(withdraw)]
    fn withdraw(&self, amount: BigUint) {
        self.require_owner();

        let balance = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);
        require!(amount <= balance, "cannot withdraw more than the sale balance");

        let treasury = self.treasury().get();
        self.send().direct_egld(&treasury, &amount);

        self.withdrawal_event(&treasury, &amount);
    }

    // ========================================================
    // Internal
    // ========================================================

    /// Seed and General cap what one account may put in; Open does not.
    fn individual_limit(&self, phase: Phase) -> Option<BigUint> {
        match phase {
            Phase::Seed => Some(BigUint::from(SEED_INDIVIDUAL_LIMIT_EGLD) * ONE_EGLD),
            Phase::General => Some(BigUint::from(GENERAL_INDIVIDUAL_LIMIT_EGLD) * ONE_EGLD),
            Phase::Open => None,
        }
    }

    fn total_limit(&self, phase: Phase) -> BigUint {
        match phase {
            Phase::Seed => BigUint::from(SEED_TOTAL_LIMIT_EGLD) * ONE_EGLD,
            Phase::General | Phase::Open => BigUint::from(SALE_TOTAL_LIMIT_EGLD) * ONE_EGLD,
        }
    }

    fn send_tokens(&self, to: &ManagedAddress, amount: &BigUint) {
        let token_address = self.token_address().get();
        self.tx()
            .to(&token_address)
            .typed(fungible_token_proxy::FungibleTokenProxy)
            .transfer(to, amount)
            .sync_call();
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(currentPhase)]
    fn current_phase(&self) -> u8 {
        self.phase().get().code()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("Investment")]
    fn investment_event(
        &self,
        #[indexed] investor: &ManagedAddress,
        #[indexed] amount: &BigUint,
        phase: u8,
    );

    #[event("TokensClaimed")]
    fn tokens_claimed_event(&self, #[indexed] investor: &ManagedAddress, amount: &BigUint);

    #[event("PhaseAdvance")]
    fn phase_advance_event(&self, #[indexed] phase: u8);

    #[event("Withdrawal")]
    fn withdrawal_event(&self, #[indexed] treasury: &ManagedAddress, amount: &BigUint);

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getTokenAddress)]
    #[storage_mapper("tokenAddress")]
    fn token_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getTreasury)]
    #[storage_mapper("treasury")]
    fn treasury(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("phase")]
    fn phase(&self) -> SingleValueMapper<Phase>;

    #[view(isWhitelisted)]
    #[storage_mapper("whitelist")]
    fn whitelist(&self, account: &ManagedAddress) -> SingleValueMapper<bool>;

    /// EGLD invested during Seed and General and not yet claimed
    #[view(totalClaimableContrib)]
    #[storage_mapper("totalClaimableContrib")]
    fn total_claimable_contrib(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    /// EGLD invested across all phases
    #[view(totalPrivateContrib)]
    #[storage_mapper("totalPrivateContrib")]
    fn total_private_contrib(&self) -> SingleValueMapper<BigUint>;
}
