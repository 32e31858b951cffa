//! SM2 public-key encryption
//!
//! For a recipient key `P_B` and a fresh ephemeral scalar `k`:
//!
//! ```text
//! C1 = k·G                          (uncompressed, 65 bytes)
//! (x2, y2) = k·P_B
//! C2 = M ⊕ KDF(x2 ∥ y2, |M|)
//! C3 = SHA-256(x2 ∥ M ∥ y2)         (32 bytes)
//! ```
//!
//! The ciphertext is `C1 ∥ C3 ∥ C2`; [`CiphertextLayout::C1C2C3`] reads and
//! writes the older ordering. `C3` is a plain hash, not a keyed MAC: it only
//! authenticates as long as the shared point stays secret.

use rand::{CryptoRng, RngCore};
use smcrypt_algorithms::ec::sm2 as ec;
use smcrypt_algorithms::{hash::sha256_concat, kdf};
use smcrypt_api::error::Error as ApiError;
use smcrypt_api::{Pke, Serialize, SerializeSecret};
use smcrypt_common::SecretVec;
use smcrypt_internal::constant_time::{ct_eq, ct_xor_in_place};
use smcrypt_params::traditional::sm2::{SM2_FIELD_ELEMENT_SIZE, SM2_TAG_SIZE};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::{Error as PkeError, Result as PkeResult};

mod ciphertext;
pub use ciphertext::CiphertextLayout;

/// Public key for SM2 encryption. Stores the serialized uncompressed point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sm2PkePublicKey([u8; ec::SM2_POINT_UNCOMPRESSED_SIZE]);

impl Sm2PkePublicKey {
    /// Wrap a curve point. The point at infinity is not a usable key.
    pub fn from_point(point: &ec::Point) -> smcrypt_api::Result<Self> {
        point
            .serialize_uncompressed()
            .map(Self)
            .ok_or_else(|| {
                ApiError::from(PkeError::Domain(
                    "recipient key is the point at infinity",
                ))
            })
    }

    /// The key as a curve point
    pub fn to_point(&self) -> smcrypt_api::Result<ec::Point> {
        ec::Point::decode(&self.0).map_err(ApiError::from)
    }
}

impl AsRef<[u8]> for Sm2PkePublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for Sm2PkePublicKey {
    const ENCODED_SIZE: usize = ec::SM2_POINT_UNCOMPRESSED_SIZE;

    /// Accepts the compressed or uncompressed encoding
    fn from_bytes(bytes: &[u8]) -> smcrypt_api::Result<Self> {
        let point = ec::Point::decode(bytes).map_err(ApiError::from)?;
        Self::from_point(&point)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

/// Secret key for SM2 encryption.
#[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
pub struct Sm2PkeSecretKey(ec::Scalar);

impl Sm2PkeSecretKey {
    /// The matching public key `d·G`
    pub fn public_key(&self) -> smcrypt_api::Result<Sm2PkePublicKey> {
        Sm2PkePublicKey::from_point(&ec::scalar_mult_base_g(&self.0))
    }
}

impl SerializeSecret for Sm2PkeSecretKey {
    const ENCODED_SIZE: usize = ec::SM2_SCALAR_SIZE;

    fn from_bytes(bytes: &[u8]) -> smcrypt_api::Result<Self> {
        ec::Scalar::deserialize(bytes)
            .map(Self)
            .map_err(ApiError::from)
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.serialize().to_vec())
    }
}

/// SM2 public-key encryption
pub struct Sm2Pke;

impl Sm2Pke {
    /// Encrypt with an explicit component ordering
    pub fn encrypt_with_layout<R: RngCore + CryptoRng>(
        pk_recipient: &Sm2PkePublicKey,
        plaintext: &[u8],
        layout: CiphertextLayout,
        rng: &mut R,
    ) -> smcrypt_api::Result<Vec<u8>> {
        let recipient = pk_recipient.to_point()?;
        seal(&recipient, plaintext, layout, rng).map_err(ApiError::from)
    }

    /// Decrypt a ciphertext written in the given component ordering
    pub fn decrypt_with_layout(
        sk_recipient: &Sm2PkeSecretKey,
        ciphertext: &[u8],
        layout: CiphertextLayout,
    ) -> smcrypt_api::Result<Vec<u8>> {
        open(&sk_recipient.0, ciphertext, layout).map_err(ApiError::from)
    }
}

impl Pke for Sm2Pke {
    type PublicKey = Sm2PkePublicKey;
    type SecretKey = Sm2PkeSecretKey;
    type Ciphertext = Vec<u8>;

    fn name() -> &'static str {
        "SM2-PKE-SHA256"
    }

    fn keypair<R: RngCore + CryptoRng>(
        rng: &mut R,
    ) -> smcrypt_api::Result<(Self::PublicKey, Self::SecretKey)> {
        let (sk_scalar, pk_point) =
            ec::generate_keypair(rng).map_err(|e| ApiError::from(PkeError::from(e)))?;
        Ok((
            Sm2PkePublicKey::from_point(&pk_point)?,
            Sm2PkeSecretKey(sk_scalar),
        ))
    }

    fn encrypt<R: RngCore + CryptoRng>(
        pk_recipient: &Self::PublicKey,
        plaintext: &[u8],
        rng: &mut R,
    ) -> smcrypt_api::Result<Self::Ciphertext> {
        Self::encrypt_with_layout(pk_recipient, plaintext, CiphertextLayout::default(), rng)
    }

    fn decrypt(
        sk_recipient: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> smcrypt_api::Result<Vec<u8>> {
        Self::decrypt_with_layout(sk_recipient, ciphertext, CiphertextLayout::default())
    }
}

/// `x ∥ y` of the shared point, `None` at infinity
fn shared_coordinates(
    point: &ec::Point,
) -> Option<Zeroizing<[u8; 2 * SM2_FIELD_ELEMENT_SIZE]>> {
    let ec::Point::Affine { x, y } = point else {
        return None;
    };
    let mut out = Zeroizing::new([0u8; 2 * SM2_FIELD_ELEMENT_SIZE]);
    out[..SM2_FIELD_ELEMENT_SIZE].copy_from_slice(&x.to_be_bytes());
    out[SM2_FIELD_ELEMENT_SIZE..].copy_from_slice(&y.to_be_bytes());
    Some(out)
}

/// C3 = SHA-256(x2 ∥ M ∥ y2)
fn integrity_tag(xy: &[u8; 2 * SM2_FIELD_ELEMENT_SIZE], plaintext: &[u8]) -> [u8; SM2_TAG_SIZE] {
    let (x, y) = xy.split_at(SM2_FIELD_ELEMENT_SIZE);
    sha256_concat(&[x, plaintext, y])
}

fn seal<R: RngCore + CryptoRng>(
    recipient: &ec::Point,
    plaintext: &[u8],
    layout: CiphertextLayout,
    rng: &mut R,
) -> PkeResult<Vec<u8>> {
    if recipient.is_identity() {
        return Err(PkeError::Domain("recipient key is the point at infinity"));
    }

    let (k, c1_point) = ec::generate_keypair(rng)?;
    let shared = ec::scalar_mult(&k, recipient);
    drop(k);

    let Some(xy) = shared_coordinates(&shared) else {
        tracing::warn!("SM2 encryption hit a shared point at infinity");
        return Err(PkeError::Domain("shared point is the point at infinity"));
    };
    let c1 = c1_point
        .serialize_uncompressed()
        .ok_or(PkeError::Domain("ephemeral point is the point at infinity"))?;

    let mask = kdf::derive(&xy[..], plaintext.len())?;
    let mut c2 = plaintext.to_vec();
    ct_xor_in_place(&mut c2, mask.as_slice());
    let c3 = integrity_tag(&xy, plaintext);

    Ok(layout.join(&c1, &c3, &c2))
}

fn open(sk: &ec::Scalar, ciphertext: &[u8], layout: CiphertextLayout) -> PkeResult<Vec<u8>> {
    let parts = layout.split(ciphertext)?;

    let c1 = ec::Point::decode(parts.c1)?;
    if c1.is_identity() {
        return Err(PkeError::InvalidCiphertextFormat(
            "C1 is the point at infinity",
        ));
    }

    let shared = ec::scalar_mult(sk, &c1);
    let Some(xy) = shared_coordinates(&shared) else {
        return Err(PkeError::Domain("shared point is the point at infinity"));
    };

    let mask = kdf::derive(&xy[..], parts.c2.len())?;
    let mut recovered = SecretVec::from_slice(parts.c2);
    ct_xor_in_place(recovered.as_mut_slice(), mask.as_slice());

    if !ct_eq(integrity_tag(&xy, recovered.as_slice()), parts.c3) {
        tracing::debug!(
            ciphertext_len = ciphertext.len(),
            "SM2 decryption rejected a ciphertext with a mismatched tag"
        );
        return Err(PkeError::IntegrityCheckFailed);
    }

    Ok(recovered.release())
}
