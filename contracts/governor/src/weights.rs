multiversx_sc::imports!();

use crate::{storage, types::Checkpoint};

/// 1 EGLD, the least a new member may put in
const MIN_FIRST_CONTRIBUTION: u64 = 1_000_000_000_000_000_000;

/// Member voting weight as an append-only checkpoint log.
///
/// Every contribution appends the new cumulative weight for the member and
/// for the DAO as a whole. Weight "at time T" is the last checkpoint written
/// at or before T, so anything contributed after a proposal starts has no say
/// in it.
#[multiversx_sc::module]
pub trait WeightModule: storage::GovernorStorageModule {
    #[payable("EGLD")]
    #[endpoint(memberContribute)]
    fn member_contribute(&self) {
        let caller = self.blockchain().get_caller();
        let amount = self.call_value().egld_value().clone_value();
        let current = self.member_weight(&caller);

        if current == 0u64 {
            require!(
                amount >= MIN_FIRST_CONTRIBUTION,
                "must contribute at least 1 EGLD"
            );
        } else {
            require!(amount > 0u64, "contribution must be positive");
        }

        let now = self.blockchain().get_block_timestamp();
        let new_weight = current + &amount;
        let new_total = self.latest_weight(&self.total_weight_checkpoints()) + &amount;
        self.write_checkpoint(self.weight_checkpoints(&caller), now, &new_weight);
        self.write_checkpoint(self.total_weight_checkpoints(), now, &new_total);

        self.member_contribution_event(&caller, &amount, &new_weight);
    }

    // ========================================================
    // Checkpoints
    // ========================================================

    /// Same-timestamp writes replace the last checkpoint instead of appending.
    fn write_checkpoint(
        &self,
        mut checkpoints: VecMapper<Checkpoint<Self::Api>>,
        timestamp: u64,
        weight: &BigUint,
    ) {
        let checkpoint = Checkpoint {
            timestamp,
            weight: weight.clone(),
        };

        let len = checkpoints.len();
        if len > 0 && checkpoints.get(len).timestamp == timestamp {
            checkpoints.set(len, &checkpoint);
        } else {
            checkpoints.push(&checkpoint);
        }
    }

    fn latest_weight(&self, checkpoints: &VecMapper<Checkpoint<Self::Api>>) -> BigUint {
        let len = checkpoints.len();
        if len == 0 {
            return BigUint::zero();
        }
        checkpoints.get(len).weight
    }

    /// Binary search for the last checkpoint with `timestamp <= at`.
    fn weight_at(&self, checkpoints: &VecMapper<Checkpoint<Self::Api>>, at: u64) -> BigUint {
        let mut low = 1usize;
        let mut high = checkpoints.len();
        let mut weight = BigUint::zero();

        while low <= high {
            let mid = low + (high - low) / 2;
            let checkpoint = checkpoints.get(mid);
            if checkpoint.timestamp <= at {
                weight = checkpoint.weight;
                low = mid + 1;
            } else {
                high = mid - 1;
            }
        }

        weight
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(memberWeight)]
    fn member_weight(&self, member: &ManagedAddress) -> BigUint {
        self.latest_weight(&self.weight_checkpoints(member))
    }

    #[view(getMemberWeightAtTime)]
    fn get_member_weight_at_time(&self, member: &ManagedAddress, timestamp: u64) -> BigUint {
        self.weight_at(&self.weight_checkpoints(member), timestamp)
    }

    #[view(getTotalWeightAtTime)]
    fn get_total_weight_at_time(&self, timestamp: u64) -> BigUint {
        self.weight_at(&self.total_weight_checkpoints(), timestamp)
    }

    #[event("MemberContribution")]
    fn member_contribution_event(
        &self,
        #[indexed] member: &ManagedAddress,
        #[indexed] amount: &BigUint,
        new_weight: &BigUint,
    );
}
