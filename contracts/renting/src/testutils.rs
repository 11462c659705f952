#![cfg(test)]

use soroban_sdk::testutils::Address as _;
use soroban_sdk::{token, Address, Env};

use access_pass::{AccessPass, AccessPassClient};
use renting_lib::MINT_PRICE;

use crate::{Renting, RentingClient};

/// Fully wired deployment: payment token, access-pass contract, renting
/// contract, with the mint open and the renting contract trusted as the
/// custody target.
pub struct TestContext<'a> {
    pub env: Env,
    pub admin: Address,
    pub payment_token: Address,
    pub pass: AccessPassClient<'a>,
    pub renting: RentingClient<'a>,
}

impl TestContext<'_> {
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let admin = Address::generate(&env);
        let payment_token = env.register_stellar_asset_contract_v2(admin.clone()).address();

        let pass_id = env.register(AccessPass, ());
        let pass = AccessPassClient::new(&env, &pass_id);
        pass.init_contract(&admin);
        pass.set_payment_token(&admin, &payment_token);
        pass.set_open_mint_active(&admin, &true);

        let renting_id = env.register(Renting, ());
        let renting = RentingClient::new(&env, &renting_id);
        renting.init_contract(&admin);
        renting.set_access_pass_contract(&admin, &pass_id);
        renting.set_payment_token(&admin, &payment_token);

        TestContext { env, admin, payment_token, pass, renting }
    }

    pub fn fund(&self, who: &Address, amount: i128) {
        token::StellarAssetClient::new(&self.env, &self.payment_token).mint(who, &amount);
    }

    pub fn balance_of(&self, who: &Address) -> i128 {
        token::Client::new(&self.env, &self.payment_token).balance(who)
    }

    /// Mint a fresh pass for `owner`, paying the mint price
    pub fn mint_pass(&self, owner: &Address) -> u64 {
        self.fund(owner, MINT_PRICE);
        self.pass.mint(owner, &MINT_PRICE)
    }

    /// Deposit a pass into custody and register the stake
    pub fn stake(&self, owner: &Address, token_id: u64) {
        self.renting.on_custody_received(owner, &token_id);
    }

    pub fn advance_time(&self, seconds: u64) {
        use soroban_sdk::testutils::Ledger;
        self.env.ledger().with_mut(|li| li.timestamp += seconds);
    }
}
