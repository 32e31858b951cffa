//! Testing utilities for the smcrypt library
//!
//! Shared by the integration tests under `tests/`: the recorded vectors and
//! the deterministic RNGs from `smcrypt-common`.

pub mod vectors;

pub use smcrypt_common::test_helpers::{FailingRng, FixedRng};

/// Decode a hex string, panicking on malformed input
pub fn unhex(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap_or_else(|e| panic!("bad hex vector {:?}: {}", s, e))
}
