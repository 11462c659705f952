use soroban_sdk::contracterror;

/// Error taxonomy shared by the access-pass and renting contracts. Every
/// failed invocation reverts all storage writes, so a caller observing one
/// of these can assume no partial mutation persisted.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAuthorized = 3,

    // Stake registry
    NotStaked = 4,
    DuplicateStake = 5,
    NotStaker = 6,
    ActiveRental = 7,

    // Rental state machine
    NotRentable = 8,
    AlreadyRented = 9,
    InsufficientPayment = 10,
    NotRenting = 11,

    // Balance ledger
    NothingToWithdraw = 12,

    // Pricing
    InvalidPrice = 13,

    // Configuration
    GatewayNotSet = 14,
    PaymentTokenNotSet = 15,

    // Access pass
    MintClosed = 16,
    SupplyExhausted = 17,
    NonexistentToken = 18,
    NotTokenOwner = 19,
}
