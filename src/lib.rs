//! # smcrypt
//!
//! SM2 elliptic-curve public-key cryptography: key generation, hybrid
//! encryption with an integrity tag, and identity-bound signatures over the
//! 256-bit SM2 prime curve.
//!
//! ## Usage
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//! use smcrypt::prelude::*;
//!
//! let mut rng = ChaCha20Rng::seed_from_u64(42);
//!
//! let (pk, sk) = Sm2Pke::keypair(&mut rng)?;
//! let ciphertext = Sm2Pke::encrypt(&pk, b"hello", &mut rng)?;
//! assert_eq!(Sm2Pke::decrypt(&sk, &ciphertext)?, b"hello");
//!
//! let (pk, sk) = Sm2Signer::keypair(&mut rng)?;
//! let sig = Sm2Signer::sign(b"hello", b"alice@example.com", &sk, &mut rng)?;
//! assert!(Sm2Signer::verify(b"hello", b"alice@example.com", &sig, &pk)?);
//! # Ok::<(), smcrypt::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `pke` (default): SM2 encryption
//! - `sign` (default): SM2 signatures
//! - `serde`: `Serialize`/`Deserialize` for signatures
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - `smcrypt-params`: curve constants and wire sizes
//! - `smcrypt-common`: 256-bit modular arithmetic and secret containers
//! - `smcrypt-algorithms`: SHA-256 helpers, the KDF and the SM2 curve group
//! - `smcrypt-pke`: SM2 public key encryption
//! - `smcrypt-sign`: SM2 digital signatures

// Core re-exports (always available)
pub use smcrypt_algorithms as algorithms;
pub use smcrypt_api as api;
pub use smcrypt_common as common;
pub use smcrypt_internal as internal;
pub use smcrypt_params as params;

// Feature-gated re-exports
#[cfg(feature = "pke")]
pub use smcrypt_pke as pke;

#[cfg(feature = "sign")]
pub use smcrypt_sign as sign;

// Dependencies that appear in the public API
pub use rand;
pub use zeroize;

/// Common imports for smcrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{Pke, Serialize, SerializeSecret, Signature};

    // Re-export security types
    pub use crate::common::{EphemeralSecret, SecretBuffer, SecretVec};

    pub use crate::params::traditional::sm2::SM2_DEFAULT_USER_ID;

    #[cfg(feature = "pke")]
    pub use crate::pke::{CiphertextLayout, Sm2Pke, Sm2PkePublicKey, Sm2PkeSecretKey};

    #[cfg(feature = "sign")]
    pub use crate::sign::{Sm2PublicKey, Sm2SecretKey, Sm2Signature, Sm2Signer};
}
