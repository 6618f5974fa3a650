use multiversx_sc_scenario::imports::*;

use fungible_token::fungible_token_proxy;
use phased_sale::phased_sale_proxy;

const OWNER: TestAddress = TestAddress::new("owner");
const TREASURY: TestAddress = TestAddress::new("treasury");
const ALICE: TestAddress = TestAddress::new("alice");
const BOB: TestAddress = TestAddress::new("bob");
const INVESTORS: [TestAddress; 11] = [
    TestAddress::new("investor-0"),
    TestAddress::new("investor-1"),
    TestAddress::new("investor-2"),
    TestAddress::new("investor-3"),
    TestAddress::new("investor-4"),
    TestAddress::new("investor-5"),
    TestAddress::new("investor-6"),
    TestAddress::new("investor-7"),
    TestAddress::new("investor-8"),
    TestAddress::new("investor-9"),
    TestAddress::new("investor-10"),
];

const TOKEN_ADDRESS: TestSCAddress = TestSCAddress::new("fungible-token");
const SALE_ADDRESS: TestSCAddress = TestSCAddress::new("phased-sale");

const TOKEN_CODE_PATH: MxscPath = MxscPath::new("../fungible-token/output/fungible-token.mxsc.json");
const SALE_CODE_PATH: MxscPath = MxscPath::new("output/phased-sale.mxsc.json");

const ONE: u64 = 1_000_000_000_000_000_000;

fn egld(amount: u64) -> BigUint<StaticApi> {
    BigUint::from(amount) * ONE
}

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.set_current_dir_from_workspace("contracts/phased-sale");
    blockchain.register_contract(TOKEN_CODE_PATH, fungible_token::ContractBuilder);
    blockchain.register_contract(SALE_CODE_PATH, phased_sale::ContractBuilder);
    blockchain
}

fn setup() -> ScenarioWorld {
    let mut world = world();
    world.account(OWNER).nonce(1);
    world.account(TREASURY).nonce(1);
    for account in [ALICE, BOB] {
        world.account(account).nonce(1).balance(egld(10_000));
    }
    for account in INVESTORS {
        world.account(account).nonce(1).balance(egld(10_000));
    }

    world
        .tx()
        .from(OWNER)
        .typed(phased_sale_proxy::PhasedSaleProxy)
        .init(TOKEN_ADDRESS, TREASURY)
        .code(SALE_CODE_PATH)
        .new_address(SALE_ADDRESS)
        .run();
    world
        .tx()
        .from(OWNER)
        .typed(fungible_token_proxy::FungibleTokenProxy)
        .init(TREASURY, SALE_ADDRESS)
        .code(TOKEN_CODE_PATH)
        .new_address(TOKEN_ADDRESS)
        .run();

    world
}

fn invest(world: &mut ScenarioWorld, from: TestAddress, amount: BigUint<StaticApi>) {
    world
        .tx()
        .from(from)
        .to(SALE_ADDRESS)
        .typed(phased_sale_proxy::PhasedSaleProxy)
        .invest()
        .egld(amount)
        .run();
}

fn invest_fails(
    world: &mut ScenarioWorld,
    from: TestAddress,
    amount: BigUint<StaticApi>,
    message: &str,
) {
    world
        .tx()
        .from(from)
        .to(SALE_ADDRESS)
        .typed(phased_sale_proxy::PhasedSaleProxy)
        .invest()
        .egld(amount)
        .returns(ExpectError(4, message))
        .run();
}

fn advance_phase(world: &mut ScenarioWorld) {
    world
        .tx()
        .from(OWNER)
        .to(SALE_ADDRESS)
        .typed(phased_sale_proxy::PhasedSaleProxy)
        .advance_phase()
        .run();
}

fn whitelist(world: &mut ScenarioWorld, account: TestAddress) {
    world
        .tx()
        .from(OWNER)
        .to(SALE_ADDRESS)
        .typed(phased_sale_proxy::PhasedSaleProxy)
        .add_to_whitelist(account)
        .run();
}

fn check_phase(world: &mut ScenarioWorld, expected: u8) {
    world
        .query()
        .to(SALE_ADDRESS)
        .typed(phased_sale_proxy::PhasedSaleProxy)
        .current_phase()
        .returns(ExpectValue(expected))
        .run();
}

fn check_claimable(world: &mut ScenarioWorld, account: TestAddress, expected: BigUint<StaticApi>) {
    world
        .query()
        .to(SALE_ADDRESS)
        .typed(phased_sale_proxy::PhasedSaleProxy)
        .total_claimable_contrib(account)
        .returns(ExpectValue(expected))
        .run();
}

fn check_token_balance(world: &mut ScenarioWorld, account: TestAddress, expected: BigUint<StaticApi>) {
    world
        .query()
        .to(TOKEN_ADDRESS)
        .typed(fungible_token_proxy::FungibleTokenProxy)
        .balance_of(account)
        .returns(ExpectValue(expected))
        .run();
}

#[test]
fn sale_starts_in_seed_unpaused_with_allocation() {
    let mut world = setup();

    check_phase(&mut world, 1);
    world
        .query()
        .to(SALE_ADDRESS)
        .typed(phased_sale_proxy::PhasedSaleProxy)
        .paused()
        .returns(ExpectValue(false))
        .run();
    world
        .query()
        .to(SALE_ADDRESS)
        .typed(phased_sale_proxy::PhasedSaleProxy)
        .treasury()
        .returns(ExpectValue(TREASURY.to_address()))
        .run();
    world
        .query()
        .to(TOKEN_ADDRESS)
        .typed(fungible_token_proxy::FungibleTokenProxy)
        .balance_of(SALE_ADDRESS)
        .returns(ExpectValue(egld(150_000)))
        .run();
}

#[test]
fn seed_phase_requires_whitelist() {
    let mut world = setup();

    invest_fails(
        &mut world,
        ALICE,
        egld(1),
        "cannot invest in seed phase, address not whitelisted",
    );

    whitelist(&mut world, ALICE);
    invest(&mut world, ALICE, egld(1));
    check_claimable(&mut world, ALICE, egld(1));

    world
        .tx()
        .from(OWNER)
        .to(SALE_ADDRESS)
        .typed(phased_sale_proxy::PhasedSaleProxy)
        .remove_from_whitelist(ALICE)
        .run();
    invest_fails(
        &mut world,
        ALICE,
        egld(1),
        "cannot invest in seed phase, address not whitelisted",
    );
}

#[test]
fn owner_whitelists_many_at_once() {
    let mut world = setup();

    let mut accounts = MultiValueEncoded::<StaticApi, ManagedAddress<StaticApi>>::new();
    accounts.push(ManagedAddress::from(ALICE.to_address()));
    accounts.push(ManagedAddress::from(BOB.to_address()));

    world
        .tx()
        .from(OWNER)
        .to(SALE_ADDRESS)
        .typed(phased_sale_proxy::PhasedSaleProxy)
        .add_many_to_whitelist(accounts)
        .run();

    for account in [ALICE, BOB] {
        world
            .query()
            .to(SALE_ADDRESS)
            .typed(phased_sale_proxy::PhasedSaleProxy)
            .whitelist(account)
            .returns(ExpectValue(true))
            .run();
    }
}

#[test]
fn owner_only_operations() {
    let mut world = setup();

    world
        .tx()
        .from(ALICE)
        .to(SALE_ADDRESS)
        .typed(phased_sale_proxy::PhasedSaleProxy)
        .advance_phase()
        .returns(ExpectError(4, "only owner can do that"))
        .run();
    world
        .tx()
        .from(ALICE)
        .to(SALE_ADDRESS)
        .typed(phased_sale_proxy::PhasedSaleProxy)
        .pause(true)
        .returns(ExpectError(4, "only owner can do that"))
        .run();
    world
        .tx()
        .from(ALICE)
        .to(SALE_ADDRESS)
        .typed(phased_sale_proxy::PhasedSaleProxy)
        .add_to_whitelist(ALICE)
        .returns(ExpectError(4, "only owner can do that"))
        .run();
}

#[test]
fn paused_sale_rejects_investments() {
    let mut world = setup();
    advance_phase(&mut world);

    world
        .tx()
        .from(OWNER)
        .to(SALE_ADDRESS)
        .typed(phased_sale_proxy::PhasedSaleProxy)
        .pause(true)
        .run();
    invest_fails(&mut world, ALICE, egld(1), "cannot invest, currently paused");

    world
        .tx()
        .from(OWNER)
        .to(SALE_ADDRESS)
        .typed(phased_sale_proxy::PhasedSaleProxy)
        .pause(false)
        .run();
    invest(&mut world, ALICE, egld(1));
}

#[test]
fn seed_individual_limit_is_cumulative() {
    let mut world = setup();
    whitelist(&mut world, ALICE);

    invest(&mut world, ALICE, egld(1_000));
    invest(&mut world, ALICE, egld(500));
    invest_fails(
        &mut world,
        ALICE,
        egld(1),
        "investment exceeds max individual investment for this phase",
    );
    check_claimable(&mut world, ALICE, egld(1_500));
}

#[test]
fn seed_total_limit_caps_at_fifteen_thousand() {
    let mut world = setup();

    for account in INVESTORS {
        whitelist(&mut world, account);
    }
    for account in &INVESTORS[..10] {
        invest(&mut world, *account, egld(1_500));
    }

    world
        .query()
        .to(SALE_ADDRESS)
        .typed(phased_sale_proxy::PhasedSaleProxy)
        .total_private_contrib()
        .returns(ExpectValue(egld(15_000)))
        .run();
    invest_fails(
        &mut world,
        INVESTORS[10],
        egld(1),
        "investment exceeds max total private investment for this phase",
    );
}

#[test]
fn general_phase_limit_includes_seed_contributions() {
    let mut world = setup();
    whitelist(&mut world, ALICE);
    invest(&mut world, ALICE, egld(800));

    advance_phase(&mut world);
    check_phase(&mut world, 2);

    invest_fails(
        &mut world,
        ALICE,
        egld(201),
        "investment exceeds max individual investment for this phase",
    );
    invest(&mut world, ALICE, egld(200));

    // not whitelisted, allowed from General on
    invest(&mut world, BOB, egld(1_000));
    invest_fails(
        &mut world,
        BOB,
        egld(1),
        "investment exceeds max individual investment for this phase",
    );
}

#[test]
fn claims_only_open_in_open_phase() {
    let mut world = setup();
    advance_phase(&mut world);
    invest(&mut world, ALICE, egld(1));

    world
        .tx()
        .from(ALICE)
        .to(SALE_ADDRESS)
        .typed(phased_sale_proxy::PhasedSaleProxy)
        .claim_token()
        .returns(ExpectError(4, "cannot claim tokens, not yet in open phase"))
        .run();

    advance_phase(&mut world);
    check_phase(&mut world, 3);

    world
        .tx()
        .from(ALICE)
        .to(SALE_ADDRESS)
        .typed(phased_sale_proxy::PhasedSaleProxy)
        .claim_token()
        .run();

    check_claimable(&mut world, ALICE, BigUint::zero());
    check_token_balance(&mut world, ALICE, egld(5));
    world
        .query()
        .to(TOKEN_ADDRESS)
        .typed(fungible_token_proxy::FungibleTokenProxy)
        .balance_of(SALE_ADDRESS)
        .returns(ExpectValue(egld(149_995)))
        .run();

    world
        .tx()
        .from(ALICE)
        .to(SALE_ADDRESS)
        .typed(phased_sale_proxy::PhasedSaleProxy)
        .claim_token()
        .returns(ExpectError(
            4,
            "no SPC tokens to claim from seed or general phase investments",
        ))
        .run();
}

#[test]
fn open_phase_delivers_tokens_immediately() {
    let mut world = setup();
    advance_phase(&mut world);
    advance_phase(&mut world);

    invest(&mut world, ALICE, egld(1));

    check_token_balance(&mut world, ALICE, egld(5));
    check_claimable(&mut world, ALICE, BigUint::zero());
}

#[test]
fn cannot_advance_past_open() {
    let mut world = setup();
    advance_phase(&mut world);
    advance_phase(&mut world);

    world
        .tx()
        .from(OWNER)
        .to(SALE_ADDRESS)
        .typed(phased_sale_proxy::PhasedSaleProxy)
        .advance_phase()
        .returns(ExpectError(4, "cannot advance past open phase"))
        .run();
}

#[test]
fn open_phase_sells_out_the_allocation_and_no_more() {
    let mut world = setup();
    advance_phase(&mut world);
    invest(&mut world, ALICE, egld(1_000));
    advance_phase(&mut world);

    for account in &INVESTORS[..4] {
        invest(&mut world, *account, egld(6_000));
    }
    world
        .query()
        .to(SALE_ADDRESS)
        .typed(phased_sale_proxy::PhasedSaleProxy)
        .total_private_contrib()
        .returns(ExpectValue(egld(25_000)))
        .run();

    // the remaining allocation backs alice's claim
    invest_fails(
        &mut world,
        INVESTORS[4],
        egld(6_000),
        "investment exceeds max total private investment for this phase",
    );
    invest(&mut world, INVESTORS[4], egld(5_000));

    world
        .tx()
        .from(ALICE)
        .to(SALE_ADDRESS)
        .typed(phased_sale_proxy::PhasedSaleProxy)
        .claim_token()
        .run();
    world
        .query()
        .to(TOKEN_ADDRESS)
        .typed(fungible_token_proxy::FungibleTokenProxy)
        .balance_of(SALE_ADDRESS)
        .returns(ExpectValue(BigUint::zero()))
        .run();
}

#[test]
fn owner_withdraws_raised_funds_to_treasury() {
    let mut world = setup();
    advance_phase(&mut world);
    invest(&mut world, ALICE, egld(10));

    world
        .tx()
        .from(OWNER)
        .to(SALE_ADDRESS)
        .typed(phased_sale_proxy::PhasedSaleProxy)
        .withdraw(egld(11))
        .returns(ExpectError(4, "cannot withdraw more than the sale balance"))
        .run();

    world
        .tx()
        .from(OWNER)
        .to(SALE_ADDRESS)
        .typed(phased_sale_proxy::PhasedSaleProxy)
        .withdraw(egld(10))
        .run();

    world.check_account(TREASURY).balance(egld(10));
}
