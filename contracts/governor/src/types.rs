multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// keccak256 over the proposal's calls and description hash
pub type ProposalId<M> = ManagedByteArray<M, 32>;

// ============================================================
// Proposal State — discriminants are the public state codes
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalState {
    /// Voting window open.
    Active,
    /// Quorum missed, vote lost, or success left unexecuted past the grace window.
    Defeated,
    /// Window closed with quorum and more for than against. Executable.
    Succeeded,
    /// Calls performed. Terminal state.
    Executed,
}

// ============================================================
// Call Data — one call performed on execution
// ============================================================

#[type_abi]
#[derive(
    TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, PartialEq, Debug,
)]
pub struct CallData<M: ManagedTypeApi> {
    pub endpoint: ManagedBuffer<M>,
    pub arguments: ManagedVec<M, ManagedBuffer<M>>,
}

// ============================================================
// Proposal — the core governance record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub proposer: ManagedAddress<M>,
    pub targets: ManagedVec<M, ManagedAddress<M>>,
    /// EGLD forwarded with each call
    pub values: ManagedVec<M, BigUint<M>>,
    pub calldatas: ManagedVec<M, CallData<M>>,
    pub description: ManagedBuffer<M>,
    /// Also the snapshot time for voting weight
    pub start_time: u64,
    pub end_time: u64,
    pub for_votes: BigUint<M>,
    pub against_votes: BigUint<M>,
    pub executed: bool,
}

// ============================================================
// Vote Record — latest vote of one member on one proposal
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct VoteRecord<M: ManagedTypeApi> {
    pub support: bool,
    pub weight: BigUint<M>,
}

// ============================================================
// Checkpoint — cumulative weight from `timestamp` on
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Checkpoint<M: ManagedTypeApi> {
    pub timestamp: u64,
    pub weight: BigUint<M>,
}
