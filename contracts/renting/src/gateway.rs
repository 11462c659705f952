use soroban_sdk::{contractclient, Address, Env};

/// Interface of the trusted access-pass contract. The renting contract only
/// needs custody queries and the return transfer on unstake.
#[contractclient(name = "GatewayClient")]
pub trait AccessPassGateway {
    fn owner_of(env: Env, token_id: u64) -> Address;

    fn transfer(env: Env, from: Address, to: Address, token_id: u64);
}
