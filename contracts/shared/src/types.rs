use soroban_sdk::{contracttype, Address, BytesN, Env, String};

/// Shortest lock a depositor may choose, in seconds.
pub const MIN_LOCK_TIME: u64 = 3600;

/// All-zero ed25519 account, the Stellar counterpart of the EVM zero address.
pub const ZERO_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

// Storage keys
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    // Escrowed token contract (instance storage)
    Token,
    // Deposit record keyed by secret hash (persistent storage)
    Deposit(BytesN<32>),
}

/// One escrowed deposit. Entries are never removed; `withdrawn` marks both terminal states.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deposit {
    pub depositor: Address,   // funds the escrow, receives them back on restore
    pub recipient: Address,   // receives the funds on withdraw
    pub amount: i128,         // token base units, always positive
    pub unlock_time: u64,     // ledger timestamp from which restore is allowed
    pub withdrawn: bool,      // set once, by withdraw or restore
}

pub fn zero_address(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, ZERO_ACCOUNT))
}

pub fn is_zero_address(env: &Env, address: &Address) -> bool {
    *address == zero_address(env)
}
