#![no_std]

// Depositor Contract
// Hash-time-locked escrow released by revealing a single 32-byte secret

mod depositor;

// Re-export the contract
pub use depositor::{Depositor, DepositorClient};
