use soroban_sdk::{symbol_short, Address, BytesN, Env, Symbol, Val};

pub const DEPOSITED: Symbol = symbol_short!("deposited");
pub const WITHDRAWN: Symbol = symbol_short!("withdrawn");
pub const RESTORED: Symbol = symbol_short!("restored");

pub fn deposited(
    env: &Env,
    depositor: &Address,
    recipient: &Address,
    amount: i128,
    lock_time: u64,
    secret_hash: &BytesN<32>,
) {
    env.events().publish(
        (DEPOSITED, depositor.clone(), recipient.clone()),
        (amount, lock_time, secret_hash.clone()),
    );
}

/// Publishes the revealed secret; the counter-party reads it from here to claim on the other ledger.
pub fn withdrawn(env: &Env, recipient: &Address, amount: i128, secret: Val, secret_hash: &BytesN<32>) {
    env.events().publish(
        (WITHDRAWN, recipient.clone()),
        (amount, secret, secret_hash.clone()),
    );
}

pub fn restored(env: &Env, depositor: &Address, amount: i128, secret_hash: &BytesN<32>) {
    env.events()
        .publish((RESTORED, depositor.clone()), (amount, secret_hash.clone()));
}
