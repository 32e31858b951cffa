//! Common implementations and shared functionality for the smcrypt library
//!
//! This crate provides the fixed-width modular arithmetic the curve code is
//! built on and the zeroizing containers used for secret material.

pub mod math_common;
pub mod security;

#[cfg(any(test, feature = "test_helpers"))]
pub mod test_helpers;

pub use math_common::{mod_inverse, Modulus, U256};

// Re-export core security types
pub use security::{EphemeralSecret, SecretBuffer, SecretVec};
