#![no_std]

use soroban_sdk::{contract, contractimpl, token, Address, Env, Symbol, Vec};

use renting_lib::{
    Error, Listing, RentableToken, RentalRecord, Stake, DEFAULT_RENT_PRICE, MAX_RENTAL_PERIODS,
    RENTAL_PERIOD_SECONDS,
};

pub mod gateway;
mod storage;

use gateway::GatewayClient;
use storage::*;

#[contract]
pub struct Renting;

#[contractimpl]
impl Renting {
    /// Initialize contract with admin
    pub fn init_contract(env: Env, admin: Address) -> Result<(), Error> {
        if get_admin(&env).is_some() {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();
        set_admin(&env, &admin);
        Ok(())
    }

    /// Point at the trusted access-pass contract. Admin only.
    pub fn set_access_pass_contract(env: Env, caller: Address, contract: Address) -> Result<(), Error> {
        caller.require_auth();
        Self::verify_admin(&env, &caller)?;
        set_access_pass_contract(&env, &contract);
        Ok(())
    }

    /// Set the token rental payments are made in. Admin only.
    pub fn set_payment_token(env: Env, caller: Address, token: Address) -> Result<(), Error> {
        caller.require_auth();
        Self::verify_admin(&env, &caller)?;
        set_payment_token(&env, &token);
        Ok(())
    }

    /* ---------------- STAKE REGISTRY ---------------- */

    /// Deposit a pass into custody. Pulls the token from `from` through the
    /// access-pass contract and records the stake against them, listed at
    /// the default price, rentable. Custody and the stake record move in
    /// the same invocation, so only the token's owner can create its stake.
    pub fn on_custody_received(env: Env, from: Address, token_id: u64) -> Result<(), Error> {
        from.require_auth();

        let gateway = get_access_pass_contract(&env).ok_or(Error::GatewayNotSet)?;
        let client = GatewayClient::new(&env, &gateway);

        if get_stake(&env, token_id).is_some() {
            return Err(Error::DuplicateStake);
        }
        if client.owner_of(&token_id) != from {
            return Err(Error::NotAuthorized);
        }

        client.transfer(&from, &env.current_contract_address(), &token_id);

        let now = env.ledger().timestamp();
        set_stake(&env, &Stake { token_id, owner: from.clone(), staked_at: now });
        set_listing(&env, &Listing { token_id, price: DEFAULT_RENT_PRICE, is_rentable: true });
        staked_ids_insert(&env, token_id);

        env.events().publish((Symbol::new(&env, "Staked"),), (from, token_id));

        Ok(())
    }

    /// Return custody of a staked token to its owner. Blocked while a
    /// rental is running.
    pub fn unstake_access_pass(env: Env, token_id: u64, caller: Address) -> Result<(), Error> {
        caller.require_auth();

        let stake = get_stake(&env, token_id).ok_or(Error::NotStaked)?;
        if stake.owner != caller {
            return Err(Error::NotStaker);
        }
        if active_rental(&env, token_id).is_some() {
            return Err(Error::ActiveRental);
        }

        // Reclaim the expired rental, if one is still stored
        if let Some(old) = get_rental(&env, token_id) {
            if get_renter_slot(&env, &old.renter) == Some(token_id) {
                remove_renter_slot(&env, &old.renter);
            }
            remove_rental(&env, token_id);
        }

        remove_stake(&env, token_id);
        remove_listing(&env, token_id);
        staked_ids_remove(&env, token_id);

        let gateway = get_access_pass_contract(&env).ok_or(Error::GatewayNotSet)?;
        GatewayClient::new(&env, &gateway).transfer(
            &env.current_contract_address(),
            &caller,
            &token_id,
        );

        env.events().publish((Symbol::new(&env, "Unstaked"),), (caller, token_id));

        Ok(())
    }

    /// Stake record for a token
    pub fn get_stake_data_for_id(env: Env, token_id: u64) -> Result<Stake, Error> {
        get_stake(&env, token_id).ok_or(Error::NotStaked)
    }

    /* ---------------- PRICING & LISTING ---------------- */

    /// Change the rental price of a staked token. Staker only.
    pub fn set_price(env: Env, token_id: u64, new_price: i128, caller: Address) -> Result<(), Error> {
        caller.require_auth();

        let stake = get_stake(&env, token_id).ok_or(Error::NotStaked)?;
        if stake.owner != caller {
            return Err(Error::NotStaker);
        }
        if new_price <= 0 {
            return Err(Error::InvalidPrice);
        }

        let mut listing = get_listing(&env, token_id).ok_or(Error::NotStaked)?;
        listing.price = new_price;
        set_listing(&env, &listing);
        Ok(())
    }

    /// Flip whether a staked token is offered for rent. Staker only.
    pub fn toggle_is_rentable(env: Env, token_id: u64, caller: Address) -> Result<(), Error> {
        caller.require_auth();

        let stake = get_stake(&env, token_id).ok_or(Error::NotStaked)?;
        if stake.owner != caller {
            return Err(Error::NotStaker);
        }

        let mut listing = get_listing(&env, token_id).ok_or(Error::NotStaked)?;
        listing.is_rentable = !listing.is_rentable;
        set_listing(&env, &listing);
        Ok(())
    }

    /// Rental terms for a staked token
    pub fn get_listing(env: Env, token_id: u64) -> Result<Listing, Error> {
        get_listing(&env, token_id).ok_or(Error::NotStaked)
    }

    /// Every staked token currently offered for rent: rentable flag set,
    /// positive price, not occupied. Ascending by token id.
    pub fn get_list_of_rentable_tokens(env: Env) -> Vec<RentableToken> {
        let mut out = Vec::new(&env);
        for token_id in get_staked_ids(&env).iter() {
            if let Some(listing) = get_listing(&env, token_id) {
                if listing.is_rentable
                    && listing.price > 0
                    && active_rental(&env, token_id).is_none()
                {
                    out.push_back(RentableToken { token_id, price: listing.price });
                }
            }
        }
        out
    }

    /* ---------------- RENTAL STATE MACHINE ---------------- */

    /// Rent a listed token. The payment buys `payment / price` rental
    /// periods and is credited in full to the current staker.
    pub fn rent(env: Env, renter: Address, token_id: u64, payment: i128) -> Result<(), Error> {
        renter.require_auth();

        let stake = get_stake(&env, token_id).ok_or(Error::NotStaked)?;
        let listing = get_listing(&env, token_id).ok_or(Error::NotStaked)?;
        if !listing.is_rentable || listing.price <= 0 {
            return Err(Error::NotRentable);
        }
        if active_rental(&env, token_id).is_some() {
            return Err(Error::AlreadyRented);
        }
        // One active rental per renter
        if let Some(held) = get_renter_slot(&env, &renter) {
            if let Some(record) = active_rental(&env, held) {
                if record.renter == renter {
                    return Err(Error::AlreadyRented);
                }
            }
        }
        if payment < listing.price {
            return Err(Error::InsufficientPayment);
        }

        let payment_token = get_payment_token(&env).ok_or(Error::PaymentTokenNotSet)?;
        token::Client::new(&env, &payment_token).transfer(
            &renter,
            &env.current_contract_address(),
            &payment,
        );

        credit_balance(&env, &stake.owner, payment);

        // Reclaim the slot of a previous, expired occupant
        if let Some(old) = get_rental(&env, token_id) {
            if old.renter != renter && get_renter_slot(&env, &old.renter) == Some(token_id) {
                remove_renter_slot(&env, &old.renter);
            }
        }

        let periods = (payment / listing.price).min(MAX_RENTAL_PERIODS) as u64;
        let now = env.ledger().timestamp();
        let expires_at = now + periods * RENTAL_PERIOD_SECONDS;

        set_rental(&env, &RentalRecord {
            token_id,
            renter: renter.clone(),
            started_at: now,
            expires_at,
        });
        set_renter_slot(&env, &renter, token_id);

        env.events().publish((Symbol::new(&env, "Rented"),), (renter, token_id, expires_at));

        Ok(())
    }

    /// Active rental held by a wallet
    pub fn get_wallet_rent_status(env: Env, renter: Address) -> Result<RentalRecord, Error> {
        let token_id = get_renter_slot(&env, &renter).ok_or(Error::NotRenting)?;
        active_rental(&env, token_id)
            .filter(|record| record.renter == renter)
            .ok_or(Error::NotRenting)
    }

    /* ---------------- BALANCE LEDGER ---------------- */

    /// Withdrawable rental proceeds of an owner. Zero when none accrued.
    pub fn get_rent_balance(env: Env, owner: Address) -> i128 {
        get_balance(&env, &owner)
    }

    /// Pay out the caller's accrued rent. The balance is zeroed before the
    /// funds leave the contract, so a re-entrant call finds nothing left.
    pub fn withdraw_rent_balance(env: Env, caller: Address) -> Result<i128, Error> {
        caller.require_auth();

        let balance = get_balance(&env, &caller);
        if balance <= 0 {
            return Err(Error::NothingToWithdraw);
        }

        let payment_token = get_payment_token(&env).ok_or(Error::PaymentTokenNotSet)?;

        set_balance(&env, &caller, 0);
        token::Client::new(&env, &payment_token).transfer(
            &env.current_contract_address(),
            &caller,
            &balance,
        );

        env.events().publish((Symbol::new(&env, "Withdrawn"),), (caller, balance));

        Ok(balance)
    }

    fn verify_admin(env: &Env, caller: &Address) -> Result<(), Error> {
        let admin = get_admin(env).ok_or(Error::NotInitialized)?;
        if caller != &admin {
            return Err(Error::NotAuthorized);
        }
        Ok(())
    }
}

#[cfg(test)]
mod testutils;



#[cfg(test)]
mod test_ledger;
