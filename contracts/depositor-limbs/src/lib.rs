#![no_std]

// Four-limb Depositor Contract
// Same escrow as `depositor`, released by a secret supplied as four 64-bit limbs

mod depositor;

// Re-export the contract
pub use depositor::{DepositorLimbs, DepositorLimbsClient};
