#![cfg(test)]

use soroban_sdk::testutils::Address as _;
use soroban_sdk::Address;

use renting_lib::{Error, DEFAULT_RENT_PRICE, RENTAL_PERIOD_SECONDS};

use crate::testutils::TestContext;

#[test]
fn test_balance_defaults_to_zero() {
    let ctx = TestContext::new();
    let nobody = Address::generate(&ctx.env);
    assert_eq!(ctx.renting.get_rent_balance(&nobody), 0);
}

#[test]
fn test_withdraw_pays_exact_balance_and_zeroes() {
    let ctx = TestContext::new();
    let alice = Address::generate(&ctx.env);
    let charlie = Address::generate(&ctx.env);
    let token_id = ctx.mint_pass(&alice);
    ctx.stake(&alice, token_id);

    ctx.fund(&charlie, DEFAULT_RENT_PRICE);
    ctx.renting.rent(&charlie, &token_id, &DEFAULT_RENT_PRICE);
    assert_eq!(ctx.renting.get_rent_balance(&alice), DEFAULT_RENT_PRICE);

    let before = ctx.balance_of(&alice);
    let paid = ctx.renting.withdraw_rent_balance(&alice);

    assert_eq!(paid, DEFAULT_RENT_PRICE);
    assert_eq!(ctx.balance_of(&alice), before + DEFAULT_RENT_PRICE);
    assert_eq!(ctx.balance_of(&ctx.renting.address), 0);
    assert_eq!(ctx.renting.get_rent_balance(&alice), 0);
}

#[test]
fn test_second_withdraw_fails() {
    let ctx = TestContext::new();
    let alice = Address::generate(&ctx.env);
    let charlie = Address::generate(&ctx.env);
    let token_id = ctx.mint_pass(&alice);
    ctx.stake(&alice, token_id);

    ctx.fund(&charlie, DEFAULT_RENT_PRICE);
    ctx.renting.rent(&charlie, &token_id, &DEFAULT_RENT_PRICE);
    ctx.renting.withdraw_rent_balance(&alice);

    assert_eq!(
        ctx.renting.try_withdraw_rent_balance(&alice),
        Err(Ok(Error::NothingToWithdraw))
    );
}

#[test]
fn test_withdraw_with_no_earnings() {
    let ctx = TestContext::new();
    let nobody = Address::generate(&ctx.env);
    assert_eq!(
        ctx.renting.try_withdraw_rent_balance(&nobody),
        Err(Ok(Error::NothingToWithdraw))
    );
}

#[test]
fn test_ledger_conservation() {
    let ctx = TestContext::new();
    let alice = Address::generate(&ctx.env);
    let dora = Address::generate(&ctx.env);
    let charlie = Address::generate(&ctx.env);
    let bob = Address::generate(&ctx.env);

    let first = ctx.mint_pass(&alice);
    let second = ctx.mint_pass(&dora);
    ctx.stake(&alice, first);
    ctx.stake(&dora, second);

    let payment_a = DEFAULT_RENT_PRICE;
    let payment_b = DEFAULT_RENT_PRICE * 2;
    ctx.fund(&charlie, payment_a);
    ctx.fund(&bob, payment_b);
    ctx.renting.rent(&charlie, &first, &payment_a);
    ctx.renting.rent(&bob, &second, &payment_b);

    // Credited total equals payments received
    assert_eq!(
        ctx.renting.get_rent_balance(&alice) + ctx.renting.get_rent_balance(&dora),
        payment_a + payment_b
    );
    assert_eq!(ctx.balance_of(&ctx.renting.address), payment_a + payment_b);

    // After one withdrawal the remainder still matches the contract funds
    ctx.renting.withdraw_rent_balance(&alice);
    assert_eq!(
        ctx.renting.get_rent_balance(&alice) + ctx.renting.get_rent_balance(&dora),
        payment_b
    );
    assert_eq!(ctx.balance_of(&ctx.renting.address), payment_b);
}

#[test]
fn test_balance_survives_unstake() {
    let ctx = TestContext::new();
    let alice = Address::generate(&ctx.env);
    let charlie = Address::generate(&ctx.env);
    let token_id = ctx.mint_pass(&alice);
    ctx.stake(&alice, token_id);

    ctx.fund(&charlie, DEFAULT_RENT_PRICE);
    ctx.renting.rent(&charlie, &token_id, &DEFAULT_RENT_PRICE);

    ctx.advance_time(RENTAL_PERIOD_SECONDS + 1);
    ctx.renting.unstake_access_pass(&token_id, &alice);

    assert_eq!(ctx.renting.get_rent_balance(&alice), DEFAULT_RENT_PRICE);
    assert_eq!(ctx.renting.withdraw_rent_balance(&alice), DEFAULT_RENT_PRICE);
}
