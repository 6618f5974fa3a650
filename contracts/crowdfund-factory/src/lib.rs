#![no_std]

multiversx_sc::imports!();

pub mod crowdfund_factory_proxy;

use crowdfund_project::crowdfund_project_proxy;

/// Deploys crowdfunding projects from a template's code and keeps the registry.
#[multiversx_sc::contract]
pub trait CrowdfundFactory {
    #[init]
    fn init(&self, template_address: ManagedAddress) {
        require!(
            self.blockchain().is_smart_contract(&template_address),
            "template address must be a contract"
        );
        self.template_address().set(&template_address);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// New project owned by the caller, open for `duration` seconds from now.
    #[endpoint(create)]
    fn create(&self, goal: BigUint, duration: u64) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        let template_address = self.template_address().get();

        let project_address = self
            .tx()
            .typed(crowdfund_project_proxy::CrowdfundProjectProxy)
            .init(&goal, duration, &caller)
            .from_source(template_address)
            .code_metadata(CodeMetadata::DEFAULT)
            .returns(ReturnsNewManagedAddress)
            .sync_call();

        self.projects().push(&project_address);
        self.project_created_event(&project_address, &caller, &goal);

        project_address
    }

    #[view(getProjects)]
    fn get_projects(&self) -> MultiValueEncoded<ManagedAddress> {
        self.projects().iter().collect()
    }

    #[view(getProjectCount)]
    fn get_project_count(&self) -> usize {
        self.projects().len()
    }

    #[event("ProjectCreated")]
    fn project_created_event(
        &self,
        #[indexed] project: &ManagedAddress,
        #[indexed] owner: &ManagedAddress,
        goal: &BigUint,
    );

    #[view(getTemplateAddress)]
    #[storage_mapper("templateAddress")]
    fn template_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("projects")]
    fn projects(&self) -> VecMapper<ManagedAddress>;
}
