multiversx_sc::imports!();

/// Explicit owner and pause flag, stored like any other configuration.
#[multiversx_sc::module]
pub trait AccessModule {
    fn init_owner(&self, owner: &ManagedAddress) {
        self.owner().set(owner);
    }

    fn require_owner(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.owner().get(), "only owner can do that");
    }

    fn set_paused(&self, paused: bool) {
        self.paused().set(paused);
        self.pause_event(paused);
    }

    #[event("Pause")]
    fn pause_event(&self, #[indexed] paused: bool);

    #[view(getOwner)]
    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(isPaused)]
    #[storage_mapper("paused")]
    fn paused(&self) -> SingleValueMapper<bool>;
}
