//! Token stand-in for exercising failed payouts.
//!
//! Implements the subset of the token interface the escrow calls (`transfer`, `balance`)
//! plus `mint` and `refuse`. A transfer to a refusing account panics, the way an account
//! without a trustline or a deauthorized balance makes the real asset contract fail.

use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};

#[contracttype]
#[derive(Clone)]
pub enum TokenKey {
    Balance(Address),
    Refuses(Address),
}

#[contract]
pub struct RefusingToken;

#[contractimpl]
impl RefusingToken {
    pub fn mint(env: Env, to: Address, amount: i128) {
        let balance = Self::balance(env.clone(), to.clone());
        env.storage()
            .instance()
            .set(&TokenKey::Balance(to), &(balance + amount));
    }

    /// Toggle whether `account` rejects incoming transfers.
    pub fn refuse(env: Env, account: Address, refuses: bool) {
        env.storage()
            .instance()
            .set(&TokenKey::Refuses(account), &refuses);
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        env.storage()
            .instance()
            .get(&TokenKey::Balance(id))
            .unwrap_or(0)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        let refuses: bool = env
            .storage()
            .instance()
            .get(&TokenKey::Refuses(to.clone()))
            .unwrap_or(false);
        if refuses {
            panic!("recipient refuses incoming transfers");
        }
        let from_balance = Self::balance(env.clone(), from.clone());
        if from_balance < amount {
            panic!("insufficient balance");
        }
        env.storage()
            .instance()
            .set(&TokenKey::Balance(from), &(from_balance - amount));
        let to_balance = Self::balance(env.clone(), to.clone());
        env.storage()
            .instance()
            .set(&TokenKey::Balance(to), &(to_balance + amount));
    }
}
