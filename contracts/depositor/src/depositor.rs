use shared::{
    baseescrow, storage, CommitmentScheme, Deposit, EscrowError as Error, SingleValue, MIN_LOCK_TIME,
};
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env};

#[contract]
pub struct Depositor;

#[contractimpl]
impl Depositor {
    /// Bind the escrow to the token it holds (the native asset contract in production)
    pub fn __constructor(env: Env, token: Address) {
        baseescrow::initialize(&env, &token);
    }

    /// Lock `amount` for `recipient` behind `secret_hash` for at least `lock_time` seconds
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

    /// Pay the recipient of the deposit committed to by `secret`. Callable by anyone
    pub fn withdraw(env: Env, secret: BytesN<32>) -> Result<(), Error> {
        baseescrow::withdraw::<SingleValue>(&env, secret)
    }

    /// Return an expired deposit to its depositor. Callable by anyone
    pub fn restore(env: Env, secret_hash: BytesN<32>) -> Result<(), Error> {
        baseescrow::restore(&env, secret_hash)
    }

    pub fn deposits(env: Env, secret_hash: BytesN<32>) -> Option<Deposit> {
        storage::get_deposit(&env, &secret_hash)
    }

    /// Commitment this escrow expects for `secret`
    pub fn secret_hash(env: Env, secret: BytesN<32>) -> BytesN<32> {
        SingleValue::commit(&env, &secret)
    }

    pub fn min_lock_time() -> u64 {
        MIN_LOCK_TIME
    }

    pub fn token(env: Env) -> Address {
        storage::get_token(&env)
    }
}
