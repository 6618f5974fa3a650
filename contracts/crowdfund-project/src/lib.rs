#![no_std]

multiversx_sc::imports!();

pub mod crowdfund_project_proxy;

// ============================================================
// Constants
// ============================================================

/// 0.01 EGLD
const MIN_CONTRIBUTION: u64 = 10_000_000_000_000_000;

/// One badge per whole EGLD contributed
const BADGE_THRESHOLD: u64 = 1_000_000_000_000_000_000;

// ============================================================
// Contract
// ============================================================

/// Single crowdfunding project.
///
/// Funding stays open until the goal is met, the deadline passes or the
/// owner cancels. A funded project pays out to its owner; any other closed
/// project refunds contributors. Contributors earn one transferable badge for
/// every whole EGLD they put in, and keep it whatever happens to the funds.
#[multiversx_sc::contract]
pub trait CrowdfundProject {
    #[init]
    fn init(&self, goal: BigUint, duration: u64, owner: ManagedAddress) {
        require!(goal > 0u64, "funding goal must be positive");

        let deadline = self.blockchain().get_block_timestamp() + duration;
        self.goal().set(&goal);
        self.deadline().set(deadline);
        self.owner().set(&owner);
        self.funded().set(false);
        self.cancelled().set(false);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: contribute
    // ========================================================

    #[payable("EGLD")]
    #[endpoint(contribute)]
    fn contribute(&self) {
        require!(self.is_funding_open(), "cannot contribute, funding closed");

        let payment = self.call_value().egld_value().clone_value();
        require!(
            payment >= MIN_CONTRIBUTION,
            "cannot contribute, contribution below minimum of 0.01 EGLD"
        );

        let caller = self.blockchain().get_caller();
        self.contributions(&caller).update(|total| *total += &payment);
        self.award_badges(&caller);

        if self.funding_balance() >= self.goal().get() {
            self.funded().set(true);
        }

        self.contribution_made_event(&caller, &payment);
    }

    // ========================================================
    // Withdrawals
    // ========================================================

    #[endpoint(withdrawOwner)]
    fn withdraw_owner(&self, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.owner().get(),
            "cannot withdraw since you are not the owner"
        );
        require!(self.funded().get(), "cannot withdraw, funding not successful");
        require!(
            amount <= self.funding_balance(),
            "cannot withdraw more than the funding balance"
        );

        self.send().direct_egld(&caller, &amount);
        self.owner_withdrawal_made_event(&amount);
    }

    /// Refund of everything the caller put in, once funding has failed.
    #[endpoint(withdrawContributor)]
    fn withdraw_contributor(&self) {
        require!(!self.is_funding_open(), "cannot withdraw, funding still open");
        require!(!self.funded().get(), "cannot withdraw, funding succeeded");

        let caller = self.blockchain().get_caller();
        let amount = self.contributions(&caller).get();
        require!(amount > 0u64, "no balance for contributor to withdraw");

        self.contributions(&caller).clear();
        self.send().direct_egld(&caller, &amount);
        self.contributor_withdrawal_made_event(&amount);
    }

    #[endpoint(cancelProject)]
    fn cancel_project(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.owner().get(),
            "you are not the owner, cannot cancel"
        );
        require!(self.is_funding_open(), "funding closed, cannot cancel");

        self.cancelled().set(true);
        self.cancellation_event(&caller);
    }

    // ========================================================
    // Badges
    // ========================================================

    #[endpoint(transferBadge)]
    fn transfer_badge(&self, to: ManagedAddress, badge_id: u64) {
        require!(!self.badge_owner(badge_id).is_empty(), "badge does not exist");

        let caller = self.blockchain().get_caller();
        require!(
            self.badge_owner(badge_id).get() == caller,
            "cannot transfer a badge you do not own"
        );

        self.badge_owner(badge_id).set(&to);
        self.badge_balance(&caller).update(|count| *count -= 1);
        self.badge_balance(&to).update(|count| *count += 1);
        self.badge_transfer_event(&caller, &to, badge_id);
    }

    /// Tops the account up to one badge per whole EGLD it has contributed.
    fn award_badges(&self, contributor: &ManagedAddress) {
        let contributed = self.contributions(contributor).get();
        let mut awarded = self.badges_awarded(contributor).get();

        while BigUint::from(awarded + 1) * BADGE_THRESHOLD <= contributed {
            let badge_id = self.last_badge_id().update(|id| {
                *id += 1;
                *id
            });
            self.badge_owner(badge_id).set(contributor);
            self.badge_balance(contributor).update(|count| *count += 1);
            self.badge_transfer_event(&ManagedAddress::zero(), contributor, badge_id);
            awarded += 1;
        }

        self.badges_awarded(contributor).set(awarded);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(fundingBalance)]
    fn funding_balance(&self) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0)
    }

    #[view(isFundingOpen)]
    fn is_funding_open(&self) -> bool {
        !self.cancelled().get()
            && !self.funded().get()
            && self.blockchain().get_block_timestamp() < self.deadline().get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("ContributionMade")]
    fn contribution_made_event(&self, #[indexed] contributor: &ManagedAddress, amount: &BigUint);

    #[event("OwnerWithdrawalMade")]
    fn owner_withdrawal_made_event(&self, amount: &BigUint);

    #[event("ContributorWithdrawalMade")]
    fn contributor_withdrawal_made_event(&self, amount: &BigUint);

    #[event("Cancellation")]
    fn cancellation_event(&self, #[indexed] owner: &ManagedAddress);

    #[event("BadgeTransfer")]
    fn badge_transfer_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        #[indexed] badge_id: u64,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getOwner)]
    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getGoal)]
    #[storage_mapper("goal")]
    fn goal(&self) -> SingleValueMapper<BigUint>;

    #[view(getDeadline)]
    #[storage_mapper("deadline")]
    fn deadline(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("funded")]
    fn funded(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("cancelled")]
    fn cancelled(&self) -> SingleValueMapper<bool>;

    #[view(amountContributed)]
    #[storage_mapper("contributions")]
    fn contributions(&self, contributor: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("badgesAwarded")]
    fn badges_awarded(&self, contributor: &ManagedAddress) -> SingleValueMapper<u64>;

    #[view(balanceOf)]
    #[storage_mapper("badgeBalance")]
    fn badge_balance(&self, account: &ManagedAddress) -> SingleValueMapper<u64>;

    #[view(badgeOwner)]
    #[storage_mapper("badgeOwner")]
    fn badge_owner(&self, badge_id: u64) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("lastBadgeId")]
    fn last_badge_id(&self) -> SingleValueMapper<u64>;
}
