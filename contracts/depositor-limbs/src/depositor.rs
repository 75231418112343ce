use shared::{
    baseescrow, storage, CommitmentScheme, Deposit, EscrowError as Error, FourLimbs, SecretLimbs,
    MIN_LOCK_TIME,
};
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env};

#[contract]
pub struct DepositorLimbs;

#[contractimpl]
impl DepositorLimbs {
    pub fn __constructor(env: Env, token: Address) {
        baseescrow::initialize(&env, &token);
    }

    pub fn deposit(
        env: Env,
        depositor: Address,
        recipient: Address,
        secret_hash: BytesN<32>,
        lock_time: u64,
        amount: i128,
    ) -> Result<(), Error> {
        baseescrow::deposit(&env, depositor, recipient, secret_hash, lock_time, amount)
    }

    /// Limbs are recombined least significant first (`limb0`) before hashing
    pub fn withdraw(env: Env, secret: SecretLimbs) -> Result<(), Error> {
        baseescrow::withdraw::<FourLimbs>(&env, secret)
    }

    pub fn restore(env: Env, secret_hash: BytesN<32>) -> Result<(), Error> {
        baseescrow::restore(&env, secret_hash)
    }

    pub fn deposits(env: Env, secret_hash: BytesN<32>) -> Option<Deposit> {
        storage::get_deposit(&env, &secret_hash)
    }

    pub fn secret_hash(env: Env, secret: SecretLimbs) -> BytesN<32> {
        FourLimbs::commit(&env, &secret)
    }

    pub fn min_lock_time() -> u64 {
        MIN_LOCK_TIME
    }

    pub fn token(env: Env) -> Address {
        storage::get_token(&env)
    }
}
