use soroban_sdk::{contracterror, log, token, Address, BytesN, Env, IntoVal, Val};

use crate::commitment::CommitmentScheme;
use crate::events;
use crate::storage;
use crate::timelock::{self, only_after, only_sufficient_lock_time};
use crate::types::{is_zero_address, Deposit};

// Errors
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    LockTimeTooShort = 1,
    ZeroAddressNotAllowed = 2,
    ZeroDepositAmount = 3,
    DepositAlreadyExists = 4,
    DepositDoesNotExist = 5,
    DepositAlreadyWithdrawn = 6,
    TimeLockNotExpired = 7,
    FailedInnerCall = 8,
    LockTimeOverflow = 9,
}

// Guard helpers

pub fn only_nonzero_address(env: &Env, recipient: &Address) -> Result<(), Error> {
    if is_zero_address(env, recipient) {
        log!(env, "recipient is the zero account");
        return Err(Error::ZeroAddressNotAllowed);
    }
    Ok(())
}

pub fn only_positive_amount(env: &Env, amount: i128) -> Result<(), Error> {
    if amount <= 0 {
        log!(env, "deposit amount must be positive, got {}", amount);
        return Err(Error::ZeroDepositAmount);
    }
    Ok(())
}

pub fn only_new_deposit(env: &Env, secret_hash: &BytesN<32>) -> Result<(), Error> {
    if storage::has_deposit(env, secret_hash) {
        log!(env, "deposit already exists: {}", secret_hash.clone());
        return Err(Error::DepositAlreadyExists);
    }
    Ok(())
}

/// Loads the deposit for `secret_hash`, rejecting unknown and terminal entries.
pub fn only_active_deposit(env: &Env, secret_hash: &BytesN<32>) -> Result<Deposit, Error> {
    let deposit = match storage::get_deposit(env, secret_hash) {
        Some(deposit) => deposit,
        None => {
            log!(env, "deposit does not exist: {}", secret_hash.clone());
            return Err(Error::DepositDoesNotExist);
        }
    };
    if deposit.withdrawn {
        log!(env, "deposit already withdrawn: {}", secret_hash.clone());
        return Err(Error::DepositAlreadyWithdrawn);
    }
    Ok(deposit)
}

/// Moves `amount` of the escrowed token. Any failure of the token call becomes
/// `FailedInnerCall`, which aborts the whole invocation and rolls back its writes.
pub fn safe_transfer(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    let token_client = token::Client::new(env, &storage::get_token(env));
    match token_client.try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "transfer of {} from {} to {} failed", amount, from.clone(), to.clone());
            Err(Error::FailedInnerCall)
        }
    }
}

pub fn initialize(env: &Env, token: &Address) {
    storage::set_token(env, token);
}

// State transitions

/// Absent -> Active. Locks `amount` from `depositor` until `now + lock_time`.
pub fn deposit(
    env: &Env,
    depositor: Address,
    recipient: Address,
    secret_hash: BytesN<32>,
    lock_time: u64,
    amount: i128,
) -> Result<(), Error> {
    depositor.require_auth();

    only_sufficient_lock_time(env, lock_time)?;
    only_nonzero_address(env, &recipient)?;
    only_positive_amount(env, amount)?;
    only_new_deposit(env, &secret_hash)?;
    let unlock_time = timelock::unlock_time(env, lock_time)?;

    storage::set_deposit(
        env,
        &secret_hash,
        &Deposit {
            depositor: depositor.clone(),
            recipient: recipient.clone(),
            amount,
            unlock_time,
            withdrawn: false,
        },
    );
    safe_transfer(env, &depositor, &env.current_contract_address(), amount)?;

    log!(env, "deposited {} until {}", amount, unlock_time);
    events::deposited(env, &depositor, &recipient, amount, lock_time, &secret_hash);
    Ok(())
}

/// Active -> Withdrawn. Anyone holding the secret may call; the payout always goes to the stored recipient.
pub fn withdraw<C: CommitmentScheme>(env: &Env, secret: C::Secret) -> Result<(), Error> {
    let secret_hash = C::commit(env, &secret);
    let mut deposit = only_active_deposit(env, &secret_hash)?;

    // Flag before paying out so a re-entrant call sees a terminal entry
    deposit.withdrawn = true;
    storage::set_deposit(env, &secret_hash, &deposit);
    safe_transfer(env, &env.current_contract_address(), &deposit.recipient, deposit.amount)?;

    log!(env, "withdrawn {} to {}", deposit.amount, deposit.recipient.clone());
    let secret_val: Val = secret.into_val(env);
    events::withdrawn(env, &deposit.recipient, deposit.amount, secret_val, &secret_hash);
    Ok(())
}

/// Active -> Restored. Permitted once the ledger reaches `unlock_time`; pays the depositor back.
pub fn restore(env: &Env, secret_hash: BytesN<32>) -> Result<(), Error> {
    let mut deposit = only_active_deposit(env, &secret_hash)?;
    only_after(env, deposit.unlock_time)?;

    deposit.withdrawn = true;
    storage::set_deposit(env, &secret_hash, &deposit);
    safe_transfer(env, &env.current_contract_address(), &deposit.depositor, deposit.amount)?;

    log!(env, "restored {} to {}", deposit.amount, deposit.depositor.clone());
    events::restored(env, &deposit.depositor, deposit.amount, &secret_hash);
    Ok(())
}
