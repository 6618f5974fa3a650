multiversx_sc::derive_imports!();

// ============================================================
// Phase — sale stages, only ever moving forward
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum Phase {
    /// Whitelisted investors only. Tokens are claimable later.
    Seed,
    /// Anyone may invest. Tokens are claimable later.
    General,
    /// Anyone may invest and tokens are delivered at once.
    Open,
}

impl Phase {
    /// Public numbering, starting at 1 for Seed.
    pub fn code(self) -> u8 {
        match self {
            Phase::Seed => 1,
            Phase::General => 2,
            Phase::Open => 3,
        }
    }

    pub fn next(self) -> Option<Phase> {
        match self {
            Phase::Seed => Some(Phase::General),
            Phase::General => Some(Phase::Open),
            Phase::Open => None,
        }
    }
}
