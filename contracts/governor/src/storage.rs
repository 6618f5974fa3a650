multiversx_sc::imports!();

use crate::types::{Checkpoint, Proposal, ProposalId, VoteRecord};

#[multiversx_sc::module]
pub trait GovernorStorageModule {
    // ── Proposals ──

    #[storage_mapper("gov:proposals")]
    fn proposals(&self, proposal_id: &ProposalId<Self::Api>)
        -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("gov:votes")]
    fn votes(
        &self,
        proposal_id: &ProposalId<Self::Api>,
        voter: &ManagedAddress,
    ) -> SingleValueMapper<VoteRecord<Self::Api>>;

    /// Signed-vote digests already applied
    #[storage_mapper("gov:usedVoteDigests")]
    fn used_vote_digests(&self) -> UnorderedSetMapper<ManagedByteArray<Self::Api, 32>>;

    // ── Member weight ──

    #[storage_mapper("gov:weightCheckpoints")]
    fn weight_checkpoints(&self, member: &ManagedAddress) -> VecMapper<Checkpoint<Self::Api>>;

    #[storage_mapper("gov:totalWeightCheckpoints")]
    fn total_weight_checkpoints(&self) -> VecMapper<Checkpoint<Self::Api>>;
}
