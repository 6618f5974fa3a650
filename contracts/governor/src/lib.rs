#![no_std]

multiversx_sc::imports!();

pub mod governor_proxy;
pub mod marketplace_proxy;
pub mod signature;
pub mod storage;
pub mod types;
pub mod weights;

use types::{CallData, Proposal, ProposalId, ProposalState, VoteRecord};

// ============================================================
// Constants
// ============================================================

/// Current weight needed to propose: 2 EGLD
const PROPOSAL_THRESHOLD: u64 = 2_000_000_000_000_000_000;

/// Voting window: 7 days in seconds
const VOTING_PERIOD: u64 = 604_800;

/// Succeeded proposals left unexecuted this long after the window are defeated: 3 days
const GRACE_PERIOD: u64 = 259_200;

/// Votes cast must reach 30% of total weight at the proposal's start
const QUORUM_PERCENTAGE: u64 = 30;

/// Paid to whoever executes a proposal: 0.03 EGLD
const EXECUTION_REWARD: u64 = 30_000_000_000_000_000;

// ============================================================
// Contract
// ============================================================

/// Contribution-weighted DAO.
///
/// Proposals are batches of calls identified by the hash of their content.
/// Votes are weighted by what the voter had contributed when the proposal
/// started, and can be cast directly or relayed with a signature. A proposal
/// that succeeds runs its calls from the DAO's own account, all or nothing.
#[multiversx_sc::contract]
pub trait Governor:
    storage::GovernorStorageModule + weights::WeightModule + signature::VoteSignatureModule
{
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: propose
    // ========================================================

    #[endpoint(propose)]
    fn propose(
        &self,
        targets: ManagedVec<ManagedAddress>,
        values: ManagedVec<BigUint>,
        calldatas: ManagedVec<CallData<Self::Api>>,
        description: ManagedBuffer,
    ) -> ProposalId<Self::Api> {
        let caller = self.blockchain().get_caller();
        require!(
            self.member_weight(&caller) >= PROPOSAL_THRESHOLD,
            "proposer below 2 EGLD threshold required to propose"
        );
        require!(
            !targets.is_empty()
                && targets.len() == values.len()
                && targets.len() == calldatas.len(),
            "invalid proposal length"
        );

        let description_hash = self.crypto().keccak256(&description);
        let proposal_id = self.compute_proposal_id(&targets, &values, &calldatas, &description_hash);
        require!(
            self.proposals(&proposal_id).is_empty(),
            "proposal already exists"
        );

        let start_time = self.blockchain().get_block_timestamp();
        let proposal = Proposal {
            proposer: caller.clone(),
            targets,
            values,
            calldatas,
            description,
            start_time,
            end_time: start_time + VOTING_PERIOD,
            for_votes: BigUint::zero(),
            against_votes: BigUint::zero(),
            executed: false,
        };
        self.proposals(&proposal_id).set(&proposal);

        self.proposal_created_event(
            &proposal_id,
            &caller,
            &proposal.targets,
            &proposal.values,
            &proposal.calldatas,
            start_time,
            &proposal.description,
        );

        proposal_id
    }

    // ========================================================
    // Voting
    // ========================================================

    #[endpoint(castVote)]
    fn cast_vote(&self, proposal_id: ProposalId<Self::Api>, support: bool) {
        let caller = self.blockchain().get_caller();
        self.apply_vote(&caller, &proposal_id, support);
    }

    /// Relays a vote signed off-chain by `signer`.
    #[endpoint(castVoteBySig)]
    fn cast_vote_by_sig(
        &self,
        signer: ManagedAddress,
        proposal_id: ProposalId<Self::Api>,
        support: bool,
        signature: ManagedBuffer,
    ) {
        self.verify_vote_signature(&signer, &proposal_id, support, &signature);
        self.apply_vote(&signer, &proposal_id, support);
    }

    /// Applies signed votes in order. One bad entry fails the whole batch.
    #[endpoint(castVotesBySigBulk)]
    fn cast_votes_by_sig_bulk(
        &self,
        votes: MultiValueEncoded<
            MultiValue4<ManagedAddress, ProposalId<Self::Api>, bool, ManagedBuffer>,
        >,
    ) {
        for vote in votes {
            let (signer, proposal_id, support, signature) = vote.into_tuple();
            self.verify_vote_signature(&signer, &proposal_id, support, &signature);
            self.apply_vote(&signer, &proposal_id, support);
        }
    }

    /// Replaces any earlier vote by `voter`; tallies never count it twice.
    fn apply_vote(&self, voter: &ManagedAddress, proposal_id: &ProposalId<Self::Api>, support: bool) {
        require!(
            self.proposal_state(proposal_id) == ProposalState::Active,
            "proposal not active"
        );

        let mut proposal = self.proposals(proposal_id).get();
        let weight = self.get_member_weight_at_time(voter, proposal.start_time);
        require!(weight > 0u64, "voter has no voting power");

        let vote_mapper = self.votes(proposal_id, voter);
        if !vote_mapper.is_empty() {
            let previous = vote_mapper.get();
            if previous.support {
                proposal.for_votes -= &previous.weight;
            } else {
                proposal.against_votes -= &previous.weight;
            }
        }

        if support {
            proposal.for_votes += &weight;
        } else {
            proposal.against_votes += &weight;
        }

        vote_mapper.set(VoteRecord {
            support,
            weight: weight.clone(),
        });
        self.proposals(proposal_id).set(&proposal);

        self.vote_cast_event(proposal_id, voter, support, &weight);
    }

    // ========================================================
    // ENDPOINT: execute
    // ========================================================

    /// Runs every call of a succeeded proposal from the DAO's account. A
    /// failing call fails the execution with that call's own error.
    #[endpoint(execute)]
    fn execute(
        &self,
        targets: ManagedVec<ManagedAddress>,
        values: ManagedVec<BigUint>,
        calldatas: ManagedVec<CallData<Self::Api>>,
        description_hash: ManagedByteArray<Self::Api, 32>,
    ) -> ProposalId<Self::Api> {
        let proposal_id = self.compute_proposal_id(&targets, &values, &calldatas, &description_hash);
        require!(
            !self.proposals(&proposal_id).is_empty()
                && self.proposal_state(&proposal_id) == ProposalState::Succeeded,
            "proposal not successful"
        );

        self.proposals(&proposal_id).update(|proposal| proposal.executed = true);

        for index in 0..targets.len() {
            let call = calldatas.get(index);
            self.tx()
                .to(targets.get(index).clone_value())
                .egld(values.get(index).clone_value())
                .raw_call(call.endpoint.clone())
                .arguments_raw(ManagedArgBuffer::from(call.arguments.clone()))
                .sync_call();
        }

        let caller = self.blockchain().get_caller();
        let reward = BigUint::from(EXECUTION_REWARD);
        let balance = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);
        if balance >= reward {
            self.send().direct_egld(&caller, &reward);
        }

        self.proposal_executed_event(&proposal_id, &caller);

        proposal_id
    }

    // ========================================================
    // ENDPOINT: buyNFTForDao
    // Reachable only as a call inside an executed proposal.
    // ========================================================

    #[payable("EGLD")]
    #[endpoint(buyNFTForDao)]
    fn buy_nft_for_dao(
        &self,
        marketplace: ManagedAddress,
        nft_contract: ManagedAddress,
        nft_id: u64,
        max_price: BigUint,
    ) {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.blockchain().get_sc_address(),
            "only an executed DAO proposal can call this function"
        );

        let price: BigUint = self
            .tx()
            .to(&marketplace)
            .typed(marketplace_proxy::NftMarketplaceProxy)
            .get_price(&nft_contract, nft_id)
            .returns(ReturnsResult)
            .sync_call();
        require!(price <= max_price, "nft price exceeds max price");

        self.tx()
            .to(&marketplace)
            .typed(marketplace_proxy::NftMarketplaceProxy)
            .buy(&nft_contract, nft_id)
            .egld(&price)
            .sync_call();

        self.nft_bought_event(&marketplace, &nft_contract, nft_id, &price);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn compute_proposal_id(
        &self,
        targets: &ManagedVec<ManagedAddress>,
        values: &ManagedVec<BigUint>,
        calldatas: &ManagedVec<CallData<Self::Api>>,
        description_hash: &ManagedByteArray<Self::Api, 32>,
    ) -> ProposalId<Self::Api> {
        let encoded = self
            .serializer()
            .top_encode_to_managed_buffer(&(targets, values, calldatas, description_hash));
        self.crypto().keccak256(&encoded)
    }

    fn proposal_state(&self, proposal_id: &ProposalId<Self::Api>) -> ProposalState {
        let proposal_mapper = self.proposals(proposal_id);
        require!(!proposal_mapper.is_empty(), "unknown proposal");

        let proposal = proposal_mapper.get();
        if proposal.executed {
            return ProposalState::Executed;
        }

        let now = self.blockchain().get_block_timestamp();
        if now < proposal.end_time {
            return ProposalState::Active;
        }

        if self.quorum_reached(&proposal) && proposal.for_votes > proposal.against_votes {
            if now < proposal.end_time + GRACE_PERIOD {
                ProposalState::Succeeded
            } else {
                ProposalState::Defeated
            }
        } else {
            ProposalState::Defeated
        }
    }

    fn quorum_reached(&self, proposal: &Proposal<Self::Api>) -> bool {
        let votes_cast = &proposal.for_votes + &proposal.against_votes;
        let total_weight = self.get_total_weight_at_time(proposal.start_time);
        votes_cast * 100u64 >= total_weight * QUORUM_PERCENTAGE
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(state)]
    fn state(&self, proposal_id: ProposalId<Self::Api>) -> ProposalState {
        self.proposal_state(&proposal_id)
    }

    #[view(hashProposal)]
    fn hash_proposal(
        &self,
        targets: ManagedVec<ManagedAddress>,
        values: ManagedVec<BigUint>,
        calldatas: ManagedVec<CallData<Self::Api>>,
        description_hash: ManagedByteArray<Self::Api, 32>,
    ) -> ProposalId<Self::Api> {
        self.compute_proposal_id(&targets, &values, &calldatas, &description_hash)
    }

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: ProposalId<Self::Api>) -> Proposal<Self::Api> {
        let proposal_mapper = self.proposals(&proposal_id);
        require!(!proposal_mapper.is_empty(), "unknown proposal");
        proposal_mapper.get()
    }

    #[view(getVote)]
    fn get_vote(
        &self,
        proposal_id: ProposalId<Self::Api>,
        voter: ManagedAddress,
    ) -> OptionalValue<VoteRecord<Self::Api>> {
        let vote_mapper = self.votes(&proposal_id, &voter);
        if vote_mapper.is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(vote_mapper.get())
        }
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("ProposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: &ProposalId<Self::Api>,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] targets: &ManagedVec<ManagedAddress>,
        #[indexed] values: &ManagedVec<BigUint>,
        #[indexed] calldatas: &ManagedVec<CallData<Self::Api>>,
        #[indexed] start_time: u64,
        description: &ManagedBuffer,
    );

    #[event("VoteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] proposal_id: &ProposalId<Self::Api>,
        #[indexed] voter: &ManagedAddress,
        #[indexed] support: bool,
        weight: &BigUint,
    );

    #[event("ProposalExecuted")]
    fn proposal_executed_event(
        &self,
        #[indexed] proposal_id: &ProposalId<Self::Api>,
        #[indexed] executor: &ManagedAddress,
    );

    #[event("NftBought")]
    fn nft_bought_event(
        &self,
        #[indexed] marketplace: &ManagedAddress,
        #[indexed] nft_contract: &ManagedAddress,
        #[indexed] nft_id: u64,
        price: &BigUint,
    );
}
