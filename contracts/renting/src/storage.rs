use soroban_sdk::{contracttype, Address, Env, Vec};

use renting_lib::{Listing, RentalRecord, Stake};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    PaymentToken,
    AccessPassContract,
    Stake(u64),
    Listing(u64),
    Rental(u64),
    RenterSlot(Address),
    Balance(Address),
    StakedIds,
}

/* ---------------- ADMIN & CONFIG ---------------- */

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn set_payment_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::PaymentToken, token);
}

pub fn get_payment_token(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::PaymentToken)
}

pub fn set_access_pass_contract(env: &Env, contract: &Address) {
    env.storage().instance().set(&DataKey::AccessPassContract, contract);
}

pub fn get_access_pass_contract(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::AccessPassContract)
}

/* ---------------- STAKES ---------------- */

pub fn set_stake(env: &Env, stake: &Stake) {
    env.storage().instance().set(&DataKey::Stake(stake.token_id), stake);
}

pub fn get_stake(env: &Env, token_id: u64) -> Option<Stake> {
    env.storage().instance().get(&DataKey::Stake(token_id))
}

pub fn remove_stake(env: &Env, token_id: u64) {
    env.storage().instance().remove(&DataKey::Stake(token_id));
}

/* ---------------- LISTINGS ---------------- */

pub fn set_listing(env: &Env, listing: &Listing) {
    env.storage().instance().set(&DataKey::Listing(listing.token_id), listing);
}

pub fn get_listing(env: &Env, token_id: u64) -> Option<Listing> {
    env.storage().instance().get(&DataKey::Listing(token_id))
}

pub fn remove_listing(env: &Env, token_id: u64) {
    env.storage().instance().remove(&DataKey::Listing(token_id));
}

/* ---------------- RENTALS ---------------- */

pub fn set_rental(env: &Env, rental: &RentalRecord) {
    env.storage().instance().set(&DataKey::Rental(rental.token_id), rental);
}

pub fn get_rental(env: &Env, token_id: u64) -> Option<RentalRecord> {
    env.storage().instance().get(&DataKey::Rental(token_id))
}

pub fn remove_rental(env: &Env, token_id: u64) {
    env.storage().instance().remove(&DataKey::Rental(token_id));
}

/// The rental on `token_id` that is still running. Expiry is passive: a
/// record whose `expires_at` has passed is simply not returned here, and
/// every guard goes through this probe rather than a cached flag.
pub fn active_rental(env: &Env, token_id: u64) -> Option<RentalRecord> {
    get_rental(env, token_id).filter(|r| r.expires_at > env.ledger().timestamp())
}

/// Token the renter most recently rented, if any. Single slot per renter.
pub fn get_renter_slot(env: &Env, renter: &Address) -> Option<u64> {
    env.storage().instance().get(&DataKey::RenterSlot(renter.clone()))
}

pub fn set_renter_slot(env: &Env, renter: &Address, token_id: u64) {
    env.storage().instance().set(&DataKey::RenterSlot(renter.clone()), &token_id);
}

pub fn remove_renter_slot(env: &Env, renter: &Address) {
    env.storage().instance().remove(&DataKey::RenterSlot(renter.clone()));
}

/* ---------------- BALANCE LEDGER ---------------- */

pub fn get_balance(env: &Env, owner: &Address) -> i128 {
    env.storage().instance().get(&DataKey::Balance(owner.clone())).unwrap_or(0)
}

pub fn set_balance(env: &Env, owner: &Address, amount: i128) {
    env.storage().instance().set(&DataKey::Balance(owner.clone()), &amount);
}

pub fn credit_balance(env: &Env, owner: &Address, amount: i128) {
    let current = get_balance(env, owner);
    set_balance(env, owner, current + amount);
}

/* ---------------- STAKED TOKEN INDEX ---------------- */

pub fn get_staked_ids(env: &Env) -> Vec<u64> {
    env.storage()
        .instance()
        .get(&DataKey::StakedIds)
        .unwrap_or_else(|| Vec::new(env))
}

/// Insert keeping the index ascending, so the rentable list is
/// deterministic without sorting at read time.
pub fn staked_ids_insert(env: &Env, token_id: u64) {
    let mut ids = get_staked_ids(env);
    let mut pos = ids.len();
    for (i, id) in ids.iter().enumerate() {
        if id > token_id {
            pos = i as u32;
            break;
        }
    }
    ids.insert(pos, token_id);
    env.storage().instance().set(&DataKey::StakedIds, &ids);
}

pub fn staked_ids_remove(env: &Env, token_id: u64) {
    let mut ids = get_staked_ids(env);
    if let Some(pos) = ids.iter().position(|id| id == token_id) {
        let _ = ids.remove(pos as u32);
        env.storage().instance().set(&DataKey::StakedIds, &ids);
    }
}
