//! Public-key encryption interface

use crate::error::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// A public-key encryption scheme with integrity-checked decryption.
///
/// Encryption is randomized: every call draws fresh ephemeral key material
/// from the supplied RNG, so encrypting the same plaintext twice gives
/// different ciphertexts.
pub trait Pke {
    /// Recipient public key, viewable as its wire encoding
    type PublicKey: AsRef<[u8]> + Clone;

    /// Recipient secret key
    type SecretKey: Zeroize + Clone;

    /// Serialized ciphertext
    type Ciphertext: AsRef<[u8]> + Clone;

    /// Scheme identifier, e.g. for logs
    fn name() -> &'static str;

    /// Generate a recipient key pair
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<(Self::PublicKey, Self::SecretKey)>;

    /// Encrypt `plaintext`, which may be empty, to `pk_recipient`
    fn encrypt<R: RngCore + CryptoRng>(
        pk_recipient: &Self::PublicKey,
        plaintext: &[u8],
        rng: &mut R,
    ) -> Result<Self::Ciphertext>;

    /// Recover the plaintext.
    ///
    /// A malformed ciphertext is an [`Error::Format`](crate::Error::Format),
    /// a tag mismatch an [`Error::Integrity`](crate::Error::Integrity). No
    /// plaintext bytes are returned on either path.
    fn decrypt(sk_recipient: &Self::SecretKey, ciphertext: &Self::Ciphertext) -> Result<Vec<u8>>;
}
