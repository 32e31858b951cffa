//! Digital signature traits for smcrypt
//!
//! Signatures are bound to a signer identity: every call carries the user id
//! folded into the signer's domain-separation digest.

use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Core trait for identity-bound digital signature algorithms
///
/// Secret keys are opaque types that cannot be directly manipulated as bytes.
///
/// # Nonces
///
/// `sign` draws its per-signature nonce from the supplied RNG and from nowhere
/// else. No method accepts a caller-chosen nonce, so a nonce cannot be reused
/// across signatures through this interface.
pub trait Signature {
    /// Public key type for this algorithm
    type PublicKey: Clone;

    /// Secret key type - must be zeroizable but not byte-accessible
    type SecretKey: Zeroize + Clone;

    /// Signature data type
    type SignatureData: Clone;

    /// Key pair type (typically a tuple of public and secret keys)
    type KeyPair;

    /// Returns the name of this signature algorithm
    fn name() -> &'static str;

    /// Generate a new key pair using the provided RNG
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract the public key from a key pair
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract the secret key from a key pair
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Sign a message under `user_id` with the given secret key
    fn sign<R: CryptoRng + RngCore>(
        message: &[u8],
        user_id: &[u8],
        secret_key: &Self::SecretKey,
        rng: &mut R,
    ) -> Result<Self::SignatureData>;

    /// Verify a signature against a message, user id and public key
    ///
    /// Returns `Ok(false)` for a signature that does not verify. `Err` is
    /// reserved for inputs that cannot be processed at all, such as a user id
    /// too long to be length-prefixed.
    fn verify(
        message: &[u8],
        user_id: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> Result<bool>;
}
