use soroban_sdk::{contracttype, Address};

/// Custodial deposit of an access pass. Exists exactly while the renting
/// contract holds the token on behalf of `owner`; `owner` never changes for
/// the life of the stake.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Stake {
    pub token_id: u64,
    pub owner: Address,
    pub staked_at: u64,
}

/// Rental terms for a staked token. Created alongside the stake, deleted
/// with it. A listing only enters the rentable index while `is_rentable`
/// and `price > 0`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Listing {
    pub token_id: u64,
    pub price: i128,
    pub is_rentable: bool,
}

/// An occupancy of one token by one renter. Active while
/// `expires_at > now`; expiry is evaluated at read time, never by a timer.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct RentalRecord {
    pub token_id: u64,
    pub renter: Address,
    pub started_at: u64,
    pub expires_at: u64,
}

/// One entry of the rentable token list.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct RentableToken {
    pub token_id: u64,
    pub price: i128,
}
