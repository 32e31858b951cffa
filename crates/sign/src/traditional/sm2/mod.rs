//! SM2 digital signatures
//!
//! Signing with secret key `d` over message `M` for user id `ID`:
//!
//! ```text
//! e        = SHA-256(Z(ID, d·G) ∥ M) mod n
//! (x1, _)  = k·G
//! r        = (e + x1) mod n
//! s        = (1 + d)⁻¹ · (k − r·d) mod n
//! ```
//!
//! A candidate `k` giving `r = 0`, `r + k = n` or `s = 0` is discarded and a
//! new one drawn, at most [`SM2_MAX_SIGNING_ATTEMPTS`] times. Verification
//! recomputes `x1` from `s·G + (r + s)·P` and compares `(e + x1) mod n` to `r`.
//!
//! The nonce is drawn from the caller's RNG on every call. Nothing in this
//! module accepts a caller-chosen nonce.

pub mod digest;
pub mod nonce;

use crate::error::{Error as SignError, Result};
use nonce::{NonceMachine, Rejection};
use rand::{CryptoRng, RngCore};
use smcrypt_algorithms::ec::sm2::{self as ec, in_range, Curve, Point};
use smcrypt_api::{
    error::Error as ApiError, Result as ApiResult, Serialize, SerializeSecret,
    Signature as SignatureTrait,
};
use smcrypt_common::{EphemeralSecret, U256};
use smcrypt_params::traditional::sm2::{
    SM2_DEFAULT_USER_ID, SM2_MAX_SIGNING_ATTEMPTS, SM2_SCALAR_SIZE, SM2_SIGNATURE_SIZE,
};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// SM2 signature scheme over SHA-256
pub struct Sm2Signer;

/// SM2 public key in uncompressed format (0x04 || X || Y)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sm2PublicKey([u8; ec::SM2_POINT_UNCOMPRESSED_SIZE]);

impl Sm2PublicKey {
    /// Wrap a curve point; the point at infinity is rejected
    pub fn from_point(point: &Point) -> ApiResult<Self> {
        point.serialize_uncompressed().map(Self).ok_or_else(|| {
            ApiError::from(SignError::domain(
                "SM2 public key",
                "point at infinity is not a public key",
            ))
        })
    }

    /// The key as a curve point
    pub fn to_point(&self) -> ApiResult<Point> {
        Point::decode(&self.0).map_err(ApiError::from)
    }
}

impl AsRef<[u8]> for Sm2PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for Sm2PublicKey {
    const ENCODED_SIZE: usize = ec::SM2_POINT_UNCOMPRESSED_SIZE;

    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        let point = Point::decode(bytes).map_err(ApiError::from)?;
        Self::from_point(&point)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

/// SM2 secret key
///
/// Holds the scalar `d ∈ [1, n)` and the matching public point, which every
/// signature needs for `Z`.
#[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
pub struct Sm2SecretKey {
    scalar: ec::Scalar,
    #[zeroize(skip)]
    public: Point,
}

impl Sm2SecretKey {
    fn from_scalar(scalar: ec::Scalar) -> Self {
        let public = ec::scalar_mult_base_g(&scalar);
        Self { scalar, public }
    }

    /// The matching public key
    pub fn public_key(&self) -> ApiResult<Sm2PublicKey> {
        Sm2PublicKey::from_point(&self.public)
    }
}

impl SerializeSecret for Sm2SecretKey {
    const ENCODED_SIZE: usize = SM2_SCALAR_SIZE;

    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        let scalar = ec::Scalar::deserialize(bytes).map_err(ApiError::from)?;
        Ok(Self::from_scalar(scalar))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.scalar.serialize().to_vec())
    }
}

/// SM2 signature `(r, s)`, each a 32-byte big-endian integer in `[1, n)`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sm2Signature {
    r: [u8; SM2_SCALAR_SIZE],
    s: [u8; SM2_SCALAR_SIZE],
}

impl Sm2Signature {
    /// Build from components, rejecting either one outside `[1, n)`
    pub fn new(r: [u8; SM2_SCALAR_SIZE], s: [u8; SM2_SCALAR_SIZE]) -> ApiResult<Self> {
        let n = Curve::sm2().n();
        for (name, value) in [("r", &r), ("s", &s)] {
            if !in_range(&U256::from_be_bytes(value), n) {
                return Err(SignError::domain(
                    "SM2 signature",
                    format!("{} must lie in [1, n)", name),
                )
                .into());
            }
        }
        Ok(Self { r, s })
    }

    /// The `r` component
    pub fn r(&self) -> &[u8; SM2_SCALAR_SIZE] {
        &self.r
    }

    /// The `s` component
    pub fn s(&self) -> &[u8; SM2_SCALAR_SIZE] {
        &self.s
    }
}

impl Serialize for Sm2Signature {
    const ENCODED_SIZE: usize = SM2_SIGNATURE_SIZE;

    /// Parse `r ∥ s`
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        if bytes.len() != Self::ENCODED_SIZE {
            return Err(SignError::InvalidSignatureSize {
                expected: Self::ENCODED_SIZE,
                actual: bytes.len(),
            }
            .into());
        }
        let mut r = [0u8; SM2_SCALAR_SIZE];
        let mut s = [0u8; SM2_SCALAR_SIZE];
        r.copy_from_slice(&bytes[..SM2_SCALAR_SIZE]);
        s.copy_from_slice(&bytes[SM2_SCALAR_SIZE..]);
        Self::new(r, s)
    }

    /// `r ∥ s`, 64 bytes
    fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::ENCODED_SIZE);
        out.extend_from_slice(&self.r);
        out.extend_from_slice(&self.s);
        out
    }
}

impl Sm2Signer {
    /// Sign under the default user id `1234567812345678`
    pub fn sign_with_default_id<R: CryptoRng + RngCore>(
        message: &[u8],
        secret_key: &Sm2SecretKey,
        rng: &mut R,
    ) -> ApiResult<Sm2Signature> {
        <Self as SignatureTrait>::sign(message, SM2_DEFAULT_USER_ID, secret_key, rng)
    }

    /// Verify under the default user id `1234567812345678`
    pub fn verify_with_default_id(
        message: &[u8],
        signature: &Sm2Signature,
        public_key: &Sm2PublicKey,
    ) -> ApiResult<bool> {
        <Self as SignatureTrait>::verify(message, SM2_DEFAULT_USER_ID, signature, public_key)
    }

    /// The domain-separation digest `Z` for `user_id` and `public_key`
    pub fn z_digest(user_id: &[u8], public_key: &Sm2PublicKey) -> ApiResult<[u8; 32]> {
        let public = public_key.to_point()?;
        digest::z_digest(Curve::sm2(), user_id, &public).map_err(ApiError::from)
    }
}

impl SignatureTrait for Sm2Signer {
    type PublicKey = Sm2PublicKey;
    type SecretKey = Sm2SecretKey;
    type SignatureData = Sm2Signature;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        "SM2-SHA256"
    }

    /// Draws `d` uniformly from `[1, n)` and computes `d·G`
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let (scalar, point) =
            ec::generate_keypair(rng).map_err(|e| ApiError::from(SignError::from(e)))?;
        let public_key = Sm2PublicKey::from_point(&point)?;
        let secret_key = Sm2SecretKey {
            scalar,
            public: point,
        };
        Ok((public_key, secret_key))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    fn sign<R: CryptoRng + RngCore>(
        message: &[u8],
        user_id: &[u8],
        secret_key: &Self::SecretKey,
        rng: &mut R,
    ) -> ApiResult<Self::SignatureData> {
        let d = EphemeralSecret::new(secret_key.scalar.value());
        let (r, s) = sign_on(Curve::sm2(), &d, &secret_key.public, message, user_id, rng)?;
        Ok(Sm2Signature {
            r: r.to_be_bytes(),
            s: s.to_be_bytes(),
        })
    }

    fn verify(
        message: &[u8],
        user_id: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> ApiResult<bool> {
        let public = public_key.to_point()?;
        let r = U256::from_be_bytes(&signature.r);
        let s = U256::from_be_bytes(&signature.s);
        verify_on(Curve::sm2(), &public, message, user_id, &r, &s).map_err(ApiError::from)
    }
}

/// Sign over any curve. `public` must equal `d·G`.
pub(crate) fn sign_on<R: CryptoRng + RngCore>(
    curve: &Curve,
    d: &U256,
    public: &Point,
    message: &[u8],
    user_id: &[u8],
    rng: &mut R,
) -> Result<(U256, U256)> {
    let n = curve.n();
    let e = digest::message_digest(curve, user_id, public, message)?;
    // d = n - 1 makes 1 + d vanish
    let inv = n
        .inverse(&n.add(&U256::ONE, d))
        .ok_or_else(|| SignError::domain("SM2 sign", "1 + d is not invertible modulo n"))?;
    let inv = EphemeralSecret::new(inv);

    let mut machine = NonceMachine::new(SM2_MAX_SIGNING_ATTEMPTS);
    machine.run(n, rng, |k| {
        let Point::Affine { x: x1, .. } = curve.base_multiply(k) else {
            return Err(Rejection::PointAtInfinity);
        };
        let r = n.add(&e, &n.reduce(&x1));
        if r.is_zero() {
            return Err(Rejection::RIsZero);
        }
        if n.add(&r, k).is_zero() {
            return Err(Rejection::RPlusKIsZero);
        }
        let s = n.mul(&inv, &n.sub(k, &n.mul(&r, d)));
        if s.is_zero() {
            return Err(Rejection::SIsZero);
        }
        Ok((r, s))
    })
}

/// Verify over any curve. A malformed `(r, s)` is `Ok(false)`.
pub(crate) fn verify_on(
    curve: &Curve,
    public: &Point,
    message: &[u8],
    user_id: &[u8],
    r: &U256,
    s: &U256,
) -> Result<bool> {
    let n = curve.n();
    if !in_range(r, n) || !in_range(s, n) {
        return Ok(false);
    }
    let e = digest::message_digest(curve, user_id, public, message)?;

    let t = n.add(r, s);
    if t.is_zero() {
        return Ok(false);
    }

    let point = curve.add(&curve.base_multiply(s), &curve.scalar_multiply(&t, public));
    let Point::Affine { x: x1, .. } = point else {
        return Ok(false);
    };
    Ok(n.add(&e, &n.reduce(&x1)) == *r)
}
