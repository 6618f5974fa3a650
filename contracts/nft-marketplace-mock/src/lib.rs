#![no_std]

multiversx_sc::imports!();

pub mod nft_marketplace_mock_proxy;

/// Fixed-price listings keyed by (collection contract, id). Stands in for a
/// real marketplace when exercising DAO purchases.
#[multiversx_sc::contract]
pub trait NftMarketplaceMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(listNft)]
    fn list_nft(&self, nft_contract: ManagedAddress, nft_id: u64, price: BigUint) {
        require!(price > 0u64, "price must be positive");

        let caller = self.blockchain().get_caller();
        let owner_mapper = self.nft_owner(&nft_contract, nft_id);
        require!(
            owner_mapper.is_empty() || owner_mapper.get() == caller,
            "only the nft owner can list it"
        );

        owner_mapper.set(&caller);
        self.price(&nft_contract, nft_id).set(&price);
        self.listed_event(&nft_contract, nft_id, &price);
    }

    /// Payment must match the listed price exactly; the seller is paid out
    /// and the listing is closed.
    #[payable("EGLD")]
    #[endpoint(buy)]
    fn buy(&self, nft_contract: ManagedAddress, nft_id: u64) -> bool {
        let price_mapper = self.price(&nft_contract, nft_id);
        require!(!price_mapper.is_empty(), "nft not listed");

        let price = price_mapper.get();
        let payment = self.call_value().egld_value().clone_value();
        require!(payment == price, "payment does not match price");

        let buyer = self.blockchain().get_caller();
        let seller = self.nft_owner(&nft_contract, nft_id).get();
        price_mapper.clear();
        self.nft_owner(&nft_contract, nft_id).set(&buyer);
        self.send().direct_egld(&seller, &payment);

        self.sold_event(&nft_contract, nft_id, &buyer, &price);
        true
    }

    #[view(getPrice)]
    fn get_price(&self, nft_contract: ManagedAddress, nft_id: u64) -> BigUint {
        let price_mapper = self.price(&nft_contract, nft_id);
        require!(!price_mapper.is_empty(), "nft not listed");
        price_mapper.get()
    }

    #[event("Listed")]
    fn listed_event(
        &self,
        #[indexed] nft_contract: &ManagedAddress,
        #[indexed] nft_id: u64,
        price: &BigUint,
    );

    #[event("Sold")]
    fn sold_event(
        &self,
        #[indexed] nft_contract: &ManagedAddress,
        #[indexed] nft_id: u64,
        #[indexed] buyer: &ManagedAddress,
        price: &BigUint,
    );

    #[view(ownerOf)]
    #[storage_mapper("nftOwner")]
    fn nft_owner(&self, nft_contract: &ManagedAddress, nft_id: u64)
        -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("price")]
    fn price(&self, nft_contract: &ManagedAddress, nft_id: u64) -> SingleValueMapper<BigUint>;
}
