//! Traditional signature schemes
//!
//! This module contains the elliptic-curve signature schemes of the crate.

pub mod sm2;

pub use sm2::{Sm2PublicKey, Sm2SecretKey, Sm2Signature, Sm2Signer};
