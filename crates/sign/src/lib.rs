//! Digital Signature Schemes
//!
//! This crate implements SM2 signatures: identity-bound signatures over the
//! SM2 curve, where every signature commits to the signer's user id through
//! the domain-separation digest `Z`.
//!
//! Requires the standard library.

pub mod error;
pub mod traditional;

pub use error::{Error, Result};

// Re-exports from traditional schemes
pub use traditional::sm2::{Sm2PublicKey, Sm2SecretKey, Sm2Signature, Sm2Signer};
