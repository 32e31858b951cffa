//! Public Key Encryption for the smcrypt library
//!
//! Only one scheme lives here: SM2 encryption, a hybrid of an ephemeral
//! Diffie-Hellman exchange on the SM2 curve, a counter-mode KDF keystream and
//! a hash tag over the shared point and the plaintext.
//!
//! Requires the standard library.

pub mod error;
pub mod sm2;

// Re-export key items
pub use error::{Error, Result};
pub use sm2::{CiphertextLayout, Sm2Pke, Sm2PkePublicKey, Sm2PkeSecretKey};
