use soroban_sdk::{Address, BytesN, Env};

use crate::types::{DataKey, Deposit};

/// Bump amount for storage entries (roughly 30 days in ledgers).
pub const LEDGER_BUMP: u32 = 518_400;
/// Threshold for bumping (roughly 15 days).
pub const LEDGER_THRESHOLD: u32 = 259_200;
/// Average ledger close time, used to turn timestamps into ledger counts.
pub const SECONDS_PER_LEDGER: u64 = 5;

// =============================================================================
// Token
// =============================================================================

pub fn get_token(env: &Env) -> Address {
    let token = env
        .storage()
        .instance()
        .get(&DataKey::Token)
        .unwrap_or_else(|| panic!("Token not set"));
    env.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD, LEDGER_BUMP);
    token
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
    env.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD, LEDGER_BUMP);
}

// =============================================================================
// Deposits
// =============================================================================

pub fn has_deposit(env: &Env, secret_hash: &BytesN<32>) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Deposit(secret_hash.clone()))
}

pub fn get_deposit(env: &Env, secret_hash: &BytesN<32>) -> Option<Deposit> {
    let key = DataKey::Deposit(secret_hash.clone());
    let deposit: Option<Deposit> = env.storage().persistent().get(&key);
    if deposit.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, LEDGER_THRESHOLD, LEDGER_BUMP);
    }
    deposit
}

/// Stores the record and keeps it live until at least a bump past its `unlock_time`.
pub fn set_deposit(env: &Env, secret_hash: &BytesN<32>, deposit: &Deposit) {
    let key = DataKey::Deposit(secret_hash.clone());
    let extend_to = deposit_lifetime(env, deposit.unlock_time);
    env.storage().persistent().set(&key, deposit);
    env.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD.min(extend_to), extend_to);
    env.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD, LEDGER_BUMP);
}

/// Ledgers from now until `unlock_time`, plus one bump, capped at the network maximum.
pub fn deposit_lifetime(env: &Env, unlock_time: u64) -> u32 {
    let remaining = unlock_time.saturating_sub(env.ledger().timestamp()) / SECONDS_PER_LEDGER;
    let wanted = remaining.saturating_add(LEDGER_BUMP as u64);
    let max_ttl = env.storage().max_ttl();
    if wanted > max_ttl as u64 {
        max_ttl
    } else {
        wanted as u32
    }
}
