#![no_std]

use soroban_sdk::{contract, contractimpl, contracttype, token, Address, Env, Symbol};

use renting_lib::{Error, ACCESS_PASS_SUPPLY, MINT_PRICE, PREMINT_COUNT};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    PaymentToken,
    OpenMintActive,
    TokenCount,
    Owner(u64),
}

#[contract]
pub struct AccessPass;

#[contractimpl]
impl AccessPass {
    /// Initialize with admin and pre-mint the reserved tokens to them.
    /// One-time setup; the open mint starts closed.
    pub fn init_contract(env: Env, admin: Address) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::OpenMintActive, &false);

        for token_id in 1..=PREMINT_COUNT {
            env.storage().instance().set(&DataKey::Owner(token_id), &admin);
        }
        env.storage().instance().set(&DataKey::TokenCount, &PREMINT_COUNT);

        Ok(())
    }

    /// Set the token mint payments are made in
    pub fn set_payment_token(env: Env, caller: Address, token: Address) -> Result<(), Error> {
        caller.require_auth();
        Self::verify_admin(&env, &caller)?;
        env.storage().instance().set(&DataKey::PaymentToken, &token);
        Ok(())
    }

    /// Open or close the public mint
    pub fn set_open_mint_active(env: Env, caller: Address, active: bool) -> Result<(), Error> {
        caller.require_auth();
        Self::verify_admin(&env, &caller)?;
        env.storage().instance().set(&DataKey::OpenMintActive, &active);
        Ok(())
    }

    /// Mint the next access pass to `to` for `payment`
    pub fn mint(env: Env, to: Address, payment: i128) -> Result<u64, Error> {
        to.require_auth();

        let open: bool = env
            .storage()
            .instance()
            .get(&DataKey::OpenMintActive)
            .ok_or(Error::NotInitialized)?;
        if !open {
            return Err(Error::MintClosed);
        }

        let count: u64 = env.storage().instance().get(&DataKey::TokenCount).unwrap_or(0);
        if count >= ACCESS_PASS_SUPPLY {
            return Err(Error::SupplyExhausted);
        }
        if payment < MINT_PRICE {
            return Err(Error::InsufficientPayment);
        }

        let payment_token: Address = env
            .storage()
            .instance()
            .get(&DataKey::PaymentToken)
            .ok_or(Error::PaymentTokenNotSet)?;
        token::Client::new(&env, &payment_token).transfer(
            &to,
            &env.current_contract_address(),
            &payment,
        );

        let token_id = count + 1;
        env.storage().instance().set(&DataKey::Owner(token_id), &to);
        env.storage().instance().set(&DataKey::TokenCount, &token_id);

        env.events().publish((Symbol::new(&env, "mint"),), (token_id, to));

        Ok(token_id)
    }

    /// Current owner of a token
    pub fn owner_of(env: Env, token_id: u64) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Owner(token_id))
            .ok_or(Error::NonexistentToken)
    }

    /// Move custody of a token. Requires `from`'s auth and ownership.
    pub fn transfer(env: Env, from: Address, to: Address, token_id: u64) -> Result<(), Error> {
        from.require_auth();

        let owner: Address = env
            .storage()
            .instance()
            .get(&DataKey::Owner(token_id))
            .ok_or(Error::NonexistentToken)?;
        if owner != from {
            return Err(Error::NotTokenOwner);
        }

        env.storage().instance().set(&DataKey::Owner(token_id), &to);

        env.events().publish((Symbol::new(&env, "transfer"),), (from, to, token_id));

        Ok(())
    }

    pub fn get_access_pass_supply(_env: Env) -> u64 {
        ACCESS_PASS_SUPPLY
    }

    pub fn get_price(_env: Env) -> i128 {
        MINT_PRICE
    }

    /// Number of tokens minted so far
    pub fn get_token_count(env: Env) -> u64 {
        env.storage().instance().get(&DataKey::TokenCount).unwrap_or(0)
    }

    fn verify_admin(env: &Env, caller: &Address) -> Result<(), Error> {
        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)?;
        if caller != &admin {
            return Err(Error::NotAuthorized);
        }
        Ok(())
    }
}
