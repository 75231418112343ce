use soroban_sdk::{log, Env};

use crate::baseescrow::Error;
use crate::types::MIN_LOCK_TIME;

pub fn only_sufficient_lock_time(env: &Env, lock_time: u64) -> Result<(), Error> {
    if lock_time < MIN_LOCK_TIME {
        log!(env, "lock time too short: provided {}, minimum {}", lock_time, MIN_LOCK_TIME);
        return Err(Error::LockTimeTooShort);
    }
    Ok(())
}

/// Absolute timestamp at which a deposit made now with `lock_time` becomes restorable.
pub fn unlock_time(env: &Env, lock_time: u64) -> Result<u64, Error> {
    env.ledger()
        .timestamp()
        .checked_add(lock_time)
        .ok_or(Error::LockTimeOverflow)
}

pub fn only_after(env: &Env, unlock_time: u64) -> Result<(), Error> {
    let now = env.ledger().timestamp();
    if now < unlock_time {
        log!(env, "time lock not expired: now {}, unlock time {}", now, unlock_time);
        return Err(Error::TimeLockNotExpired);
    }
    Ok(())
}
