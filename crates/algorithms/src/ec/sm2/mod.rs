//! SM2 Elliptic Curve Primitives
//!
//! Curve equation: y² = x³ + a·x + b over 𝔽ₚ with the published SM2
//! parameters, where
//! - p = 2²⁵⁶ − 2²²⁴ − 2⁹⁶ + 2⁶⁴ − 1 (so p ≡ 3 mod 4),
//! - a = p − 3,
//! - n = FFFFFFFEFFFFFFFFFFFFFFFFFFFFFFFF7203DF6B21C6052B53BBF40939D54123.
//!
//! Implements:
//! - affine group law on top of the Montgomery field arithmetic of
//!   `smcrypt-common`,
//! - double-and-add scalar multiplication,
//! - the three point encodings, with square-root decompression.
//!
//! None of this is constant-time.

mod constants;
mod curve;
mod point;
mod scalar;

pub use constants::{
    SM2_FIELD_ELEMENT_SIZE, SM2_POINT_COMPRESSED_SIZE, SM2_POINT_IDENTITY_SIZE,
    SM2_POINT_UNCOMPRESSED_SIZE, SM2_SCALAR_SIZE,
};
pub use curve::Curve;
pub use point::{Point, PointFormat};
pub use scalar::{in_range, sample_candidate, Scalar};

use crate::error::{Error, Result};
use rand::{CryptoRng, RngCore};
use smcrypt_common::EphemeralSecret;
use smcrypt_params::traditional::sm2::SM2_MAX_SIGNING_ATTEMPTS;

/// Get the standard base point G of the SM2 curve
pub fn base_point_g() -> Point {
    *Curve::sm2().generator()
}

/// Scalar multiplication with the base point: scalar * G
pub fn scalar_mult_base_g(scalar: &Scalar) -> Point {
    let k = EphemeralSecret::new(scalar.value());
    Curve::sm2().base_multiply(&k)
}

/// General scalar multiplication: compute scalar * arbitrary point
pub fn scalar_mult(scalar: &Scalar, point: &Point) -> Point {
    let k = EphemeralSecret::new(scalar.value());
    Curve::sm2().scalar_multiply(&k, point)
}

/// Generate a key pair `(d, d·G)` with `d` uniform in `[1, n)`.
///
/// At most `SM2_MAX_SIGNING_ATTEMPTS` candidates are drawn; running out means
/// the random source is broken. An RNG that reports failure stops the loop
/// at once.
pub fn generate_keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<(Scalar, Point)> {
    let curve = Curve::sm2();
    for attempt in 1..=SM2_MAX_SIGNING_ATTEMPTS {
        if let Some(d) = sample_candidate(curve.n(), rng)? {
            let d = EphemeralSecret::new(d);
            let privk = Scalar::from_u256(&d)?;
            let pubk = curve.base_multiply(&d);
            tracing::debug!(attempt, "generated SM2 key pair");
            return Ok((privk, pubk));
        }
    }

    tracing::warn!(
        attempts = SM2_MAX_SIGNING_ATTEMPTS,
        "SM2 key generation exhausted its sampling budget"
    );
    Err(Error::Exhausted {
        context: "SM2 key generation",
        attempts: SM2_MAX_SIGNING_ATTEMPTS,
    })
}
