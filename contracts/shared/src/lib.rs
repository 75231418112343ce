#![no_std]

// Shared library for the hash-time-locked depositor contracts
// Contains the commitment schemes, deposit store, timelock guards and the escrow state machine

pub mod types;
pub mod commitment;
pub mod timelock;
pub mod storage;
pub mod events;
pub mod baseescrow;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

// Re-export commonly used types for easier imports
pub use types::*;
pub use commitment::{CommitmentScheme, FourLimbs, SecretLimbs, SingleValue};
pub use baseescrow::Error as EscrowError;
