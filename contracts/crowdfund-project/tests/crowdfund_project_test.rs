use multiversx_sc_scenario::imports::*;

use crowdfund_project::crowdfund_project_proxy;

const OWNER: TestAddress = TestAddress::new("owner");
const ALICE: TestAddress = TestAddress::new("alice");
const BOB: TestAddress = TestAddress::new("bob");

const PROJECT_ADDRESS: TestSCAddress = TestSCAddress::new("crowdfund-project");
const PROJECT_CODE_PATH: MxscPath = MxscPath::new("output/crowdfund-project.mxsc.json");

const ONE: u64 = 1_000_000_000_000_000_000;
const THIRTY_DAYS: u64 = 30 * 24 * 60 * 60;
const START: u64 = 1_000_000;

fn egld(amount: u64) -> BigUint<StaticApi> {
    BigUint::from(amount) * ONE
}

/// Thousandths of an EGLD
fn milli(amount: u64) -> BigUint<StaticApi> {
    BigUint::from(amount) * 1_000_000_000_000_000u64
}

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.set_current_dir_from_workspace("contracts/crowdfund-project");
    blockchain.register_contract(PROJECT_CODE_PATH, crowdfund_project::ContractBuilder);
    blockchain
}

/// 10 EGLD goal, 30 day window, owned by OWNER.
fn setup() -> ScenarioWorld {
    let mut world = world();
    world.current_block().block_timestamp(START);
    world.account(OWNER).nonce(1).balance(egld(100));
    world.account(ALICE).nonce(1).balance(egld(100));
    world.account(BOB).nonce(1).balance(egld(100));

    world
        .tx()
        .from(OWNER)
        .typed(crowdfund_project_proxy::CrowdfundProjectProxy)
        .init(egld(10), THIRTY_DAYS, OWNER)
        .code(PROJECT_CODE_PATH)
        .new_address(PROJECT_ADDRESS)
        .run();

    world
}

fn contribute(world: &mut ScenarioWorld, from: TestAddress, amount: BigUint<StaticApi>) {
    world
        .tx()
        .from(from)
        .to(PROJECT_ADDRESS)
        .typed(crowdfund_project_proxy::CrowdfundProjectProxy)
        .contribute()
        .egld(amount)
        .run();
}

fn check_funding_open(world: &mut ScenarioWorld, expected: bool) {
    world
        .query()
        .to(PROJECT_ADDRESS)
        .typed(crowdfund_project_proxy::CrowdfundProjectProxy)
        .is_funding_open()
        .returns(ExpectValue(expected))
        .run();
}

fn check_funding_balance(world: &mut ScenarioWorld, expected: BigUint<StaticApi>) {
    world
        .query()
        .to(PROJECT_ADDRESS)
        .typed(crowdfund_project_proxy::CrowdfundProjectProxy)
        .funding_balance()
        .returns(ExpectValue(expected))
        .run();
}

fn check_badges(world: &mut ScenarioWorld, account: TestAddress, expected: u64) {
    world
        .query()
        .to(PROJECT_ADDRESS)
        .typed(crowdfund_project_proxy::CrowdfundProjectProxy)
        .badge_balance(account)
        .returns(ExpectValue(expected))
        .run();
}

fn past_deadline(world: &mut ScenarioWorld) {
    world
        .current_block()
        .block_timestamp(START + THIRTY_DAYS + 1);
}

#[test]
fn init_stores_configuration() {
    let mut world = setup();

    world
        .query()
        .to(PROJECT_ADDRESS)
        .typed(crowdfund_project_proxy::CrowdfundProjectProxy)
        .owner()
        .returns(ExpectValue(OWNER.to_address()))
        .run();
    world
        .query()
        .to(PROJECT_ADDRESS)
        .typed(crowdfund_project_proxy::CrowdfundProjectProxy)
        .goal()
        .returns(ExpectValue(egld(10)))
        .run();
    world
        .query()
        .to(PROJECT_ADDRESS)
        .typed(crowdfund_project_proxy::CrowdfundProjectProxy)
        .deadline()
        .returns(ExpectValue(START + THIRTY_DAYS))
        .run();
    check_funding_open(&mut world, true);
}

#[test]
fn contributions_accumulate_per_account() {
    let mut world = setup();

    contribute(&mut world, BOB, egld(1));
    contribute(&mut world, BOB, egld(2));
    contribute(&mut world, ALICE, egld(3));

    check_funding_balance(&mut world, egld(6));
    world
        .query()
        .to(PROJECT_ADDRESS)
        .typed(crowdfund_project_proxy::CrowdfundProjectProxy)
        .contributions(BOB)
        .returns(ExpectValue(egld(3)))
        .run();
    world.check_account(BOB).balance(egld(97));
}

#[test]
fn contribution_minimum_is_enforced() {
    let mut world = setup();

    world
        .tx()
        .from(ALICE)
        .to(PROJECT_ADDRESS)
        .typed(crowdfund_project_proxy::CrowdfundProjectProxy)
        .contribute()
        .egld(milli(1))
        .returns(ExpectError(
            4,
            "cannot contribute, contribution below minimum of 0.01 EGLD",
        ))
        .run();

    contribute(&mut world, ALICE, milli(10));
    check_funding_balance(&mut world, milli(10));
}

#[test]
fn final_contribution_may_exceed_goal_then_funding_closes() {
    let mut world = setup();

    contribute(&mut world, ALICE, egld(5));
    contribute(&mut world, BOB, egld(6));
    check_funding_balance(&mut world, egld(11));
    check_funding_open(&mut world, false);

    world
        .tx()
        .from(BOB)
        .to(PROJECT_ADDRESS)
        .typed(crowdfund_project_proxy::CrowdfundProjectProxy)
        .contribute()
        .egld(egld(1))
        .returns(ExpectError(4, "cannot contribute, funding closed"))
        .run();
    check_funding_balance(&mut world, egld(11));
}

#[test]
fn contributions_rejected_after_deadline() {
    let mut world = setup();
    contribute(&mut world, ALICE, egld(1));
    past_deadline(&mut world);

    check_funding_open(&mut world, false);
    world
        .tx()
        .from(BOB)
        .to(PROJECT_ADDRESS)
        .typed(crowdfund_project_proxy::CrowdfundProjectProxy)
        .contribute()
        .egld(egld(1))
        .returns(ExpectError(4, "cannot contribute, funding closed"))
        .run();
}

#[test]
fn nobody_withdraws_while_funding_is_open() {
    let mut world = setup();
    contribute(&mut world, BOB, egld(1));

    world
        .tx()
        .from(OWNER)
        .to(PROJECT_ADDRESS)
        .typed(crowdfund_project_proxy::CrowdfundProjectProxy)
        .withdraw_owner(egld(1))
        .returns(ExpectError(4, "cannot withdraw, funding not successful"))
        .run();
    world
        .tx()
        .from(BOB)
        .to(PROJECT_ADDRESS)
        .typed(crowdfund_project_proxy::CrowdfundProjectProxy)
        .withdraw_contributor()
        .returns(ExpectError(4, "cannot withdraw, funding still open"))
        .run();

    check_funding_balance(&mut world, egld(1));
}

#[test]
fn owner_withdraws_in_parts_after_success() {
    let mut world = setup();
    contribute(&mut world, ALICE, egld(10));
    check_funding_open(&mut world, false);

    world
        .tx()
        .from(BOB)
        .to(PROJECT_ADDRESS)
        .typed(crowdfund_project_proxy::CrowdfundProjectProxy)
        .withdraw_owner(egld(1))
        .returns(ExpectError(4, "cannot withdraw since you are not the owner"))
        .run();

    for (amount, remaining) in [(1u64, 9u64), (1, 8), (8, 0)] {
        world
            .tx()
            .from(OWNER)
            .to(PROJECT_ADDRESS)
            .typed(crowdfund_project_proxy::CrowdfundProjectProxy)
            .withdraw_owner(egld(amount))
            .run();
        check_funding_balance(&mut world, egld(remaining));
    }

    world.check_account(OWNER).balance(egld(110));
}

#[test]
fn owner_cannot_overdraw() {
    let mut world = setup();
    contribute(&mut world, ALICE, egld(10));

    world
        .tx()
        .from(OWNER)
        .to(PROJECT_ADDRESS)
        .typed(crowdfund_project_proxy::CrowdfundProjectProxy)
        .withdraw_owner(egld(11))
        .returns(ExpectError(4, "cannot withdraw more than the funding balance"))
        .run();
}

#[test]
fn contributors_cannot_refund_a_funded_project() {
    let mut world = setup();
    contribute(&mut world, ALICE, egld(10));

    world
        .tx()
        .from(ALICE)
        .to(PROJECT_ADDRESS)
        .typed(crowdfund_project_proxy::CrowdfundProjectProxy)
        .withdraw_contributor()
        .returns(ExpectError(4, "cannot withdraw, funding succeeded"))
        .run();
}

#[test]
fn contributors_refund_in_full_after_failure() {
    let mut world = setup();
    contribute(&mut world, ALICE, egld(1));
    contribute(&mut world, BOB, egld(1));
    past_deadline(&mut world);

    world
        .tx()
        .from(OWNER)
        .to(PROJECT_ADDRESS)
        .typed(crowdfund_project_proxy::CrowdfundProjectProxy)
        .withdraw_owner(egld(1))
        .returns(ExpectError(4, "cannot withdraw, funding not successful"))
        .run();

    for (contributor, remaining) in [(ALICE, 1u64), (BOB, 0u64)] {
        world
            .tx()
            .from(contributor)
            .to(PROJECT_ADDRESS)
            .typed(crowdfund_project_proxy::CrowdfundProjectProxy)
            .withdraw_contributor()
            .run();
        check_funding_balance(&mut world, egld(remaining));

        world
            .tx()
            .from(contributor)
            .to(PROJECT_ADDRESS)
            .typed(crowdfund_project_proxy::CrowdfundProjectProxy)
            .withdraw_contributor()
            .returns(ExpectError(4, "no balance for contributor to withdraw"))
            .run();
        world.check_account(contributor).balance(egld(100));
    }

    world
        .tx()
        .from(OWNER)
        .to(PROJECT_ADDRESS)
        .typed(crowdfund_project_proxy::CrowdfundProjectProxy)
        .withdraw_contributor()
        .returns(ExpectError(4, "no balance for contributor to withdraw"))
        .run();
}

#[test]
fn owner_cancels_before_deadline() {
    let mut world = setup();
    contribute(&mut world, ALICE, egld(2));

    world
        .tx()
        .from(ALICE)
        .to(PROJECT_ADDRESS)
        .typed(crowdfund_project_proxy::CrowdfundProjectProxy)
        .cancel_project()
        .returns(ExpectError(4, "you are not the owner, cannot cancel"))
        .run();
    check_funding_open(&mut world, true);

    world
        .tx()
        .from(OWNER)
        .to(PROJECT_ADDRESS)
        .typed(crowdfund_project_proxy::CrowdfundProjectProxy)
        .cancel_project()
        .run();
    check_funding_open(&mut world, false);

    // cancellation counts as failure, refunds open up immediately
    world
        .tx()
        .from(ALICE)
        .to(PROJECT_ADDRESS)
        .typed(crowdfund_project_proxy::CrowdfundProjectProxy)
        .withdraw_contributor()
        .run();
    world.check_account(ALICE).balance(egld(100));
}

#[test]
fn cancel_rejected_once_funding_closed() {
    let mut world = setup();
    past_deadline(&mut world);

    world
        .tx()
        .from(OWNER)
        .to(PROJECT_ADDRESS)
        .typed(crowdfund_project_proxy::CrowdfundProjectProxy)
        .cancel_project()
        .returns(ExpectError(4, "funding closed, cannot cancel"))
        .run();

    let mut world = setup();
    contribute(&mut world, ALICE, egld(10));
    world
        .tx()
        .from(OWNER)
        .to(PROJECT_ADDRESS)
        .typed(crowdfund_project_proxy::CrowdfundProjectProxy)
        .cancel_project()
        .returns(ExpectError(4, "funding closed, cannot cancel"))
        .run();
}

#[test]
fn badges_follow_whole_egld_thresholds() {
    let mut world = setup();

    for _ in 0..3 {
        contribute(&mut world, ALICE, milli(300));
    }
    check_badges(&mut world, ALICE, 0);

    contribute(&mut world, ALICE, milli(300));
    check_badges(&mut world, ALICE, 1);

    contribute(&mut world, ALICE, milli(500));
    check_badges(&mut world, ALICE, 1);

    contribute(&mut world, ALICE, egld(1));
    check_badges(&mut world, ALICE, 2);

    // one contribution can cross several thresholds
    contribute(&mut world, BOB, egld(3));
    check_badges(&mut world, BOB, 3);

    world
        .query()
        .to(PROJECT_ADDRESS)
        .typed(crowdfund_project_proxy::CrowdfundProjectProxy)
        .badge_owner(5u64)
        .returns(ExpectValue(BOB.to_address()))
        .run();
}

#[test]
fn badges_survive_refunds() {
    let mut world = setup();
    contribute(&mut world, ALICE, egld(2));
    past_deadline(&mut world);

    world
        .tx()
        .from(ALICE)
        .to(PROJECT_ADDRESS)
        .typed(crowdfund_project_proxy::CrowdfundProjectProxy)
        .withdraw_contributor()
        .run();

    check_badges(&mut world, ALICE, 2);
}

#[test]
fn badge_holders_can_transfer_even_after_failure() {
    let mut world = setup();
    contribute(&mut world, ALICE, egld(1));
    past_deadline(&mut world);

    world
        .tx()
        .from(BOB)
        .to(PROJECT_ADDRESS)
        .typed(crowdfund_project_proxy::CrowdfundProjectProxy)
        .transfer_badge(BOB, 1u64)
        .returns(ExpectError(4, "cannot transfer a badge you do not own"))
        .run();

    world
        .tx()
        .from(ALICE)
        .to(PROJECT_ADDRESS)
        .typed(crowdfund_project_proxy::CrowdfundProjectProxy)
        .transfer_badge(BOB, 1u64)
        .run();

    check_badges(&mut world, ALICE, 0);
    check_badges(&mut world, BOB, 1);
    world
        .query()
        .to(PROJECT_ADDRESS)
        .typed(crowdfund_project_proxy::CrowdfundProjectProxy)
        .badge_owner(1u64)
        .returns(ExpectValue(BOB.to_address()))
        .run();

    world
        .tx()
        .from(ALICE)
        .to(PROJECT_ADDRESS)
        .typed(crowdfund_project_proxy::CrowdfundProjectProxy)
        .transfer_badge(BOB, 7u64)
        .returns(ExpectError(4, "badge does not exist"))
        .run();
}
