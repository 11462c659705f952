#![no_std]
pub mod errors;
pub mod types;

pub use errors::*;
pub use types::*;

// Access pass supply policy
pub const ACCESS_PASS_SUPPLY: u64 = 500;
pub const PREMINT_COUNT: u64 = 15;
pub const MINT_PRICE: i128 = 800_000; // 0.08 units in stroops (7 decimals)

// Rental policy
pub const DEFAULT_RENT_PRICE: i128 = 10_000_000; // 1.0 unit in stroops
pub const RENTAL_PERIOD_SECONDS: u64 = 86_400; // one rental period = one day
pub const MAX_RENTAL_PERIODS: i128 = 36_500; // bounds expires_at arithmetic
