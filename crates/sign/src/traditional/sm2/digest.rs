//! Identity and message digests
//!
//! ```text
//! Z = SHA-256(ENTL ∥ ID ∥ a ∥ b ∥ Gx ∥ Gy ∥ Px ∥ Py)
//! e = SHA-256(Z ∥ M) mod n
//! ```
//!
//! `ENTL` is the byte length of `ID` as a 2-byte big-endian integer. Every
//! other field is a 32-byte big-endian integer.

use crate::error::{Error, Result};
use smcrypt_algorithms::ec::sm2::{Curve, Point};
use smcrypt_algorithms::hash::{sha256_concat, SHA256_OUTPUT_SIZE};
use smcrypt_common::U256;
use smcrypt_internal::endian::u16_to_be_bytes;

/// The domain-separation digest `Z` of a signer
///
/// Fails when `user_id` is longer than 65535 bytes or `public` is the point at
/// infinity.
pub fn z_digest(curve: &Curve, user_id: &[u8], public: &Point) -> Result<[u8; SHA256_OUTPUT_SIZE]> {
    let entl = u16::try_from(user_id.len())
        .map_err(|_| Error::domain("SM2 user id", "longer than 65535 bytes"))?;
    let Point::Affine { x, y } = public else {
        return Err(Error::domain(
            "SM2 public key",
            "point at infinity has no coordinates",
        ));
    };
    let generator = curve.generator();
    let (Some(gx), Some(gy)) = (generator.x(), generator.y()) else {
        return Err(Error::domain("SM2 curve", "generator is the point at infinity"));
    };

    Ok(sha256_concat(&[
        &u16_to_be_bytes(entl),
        user_id,
        &curve.a().to_be_bytes(),
        &curve.b().to_be_bytes(),
        &gx.to_be_bytes(),
        &gy.to_be_bytes(),
        &x.to_be_bytes(),
        &y.to_be_bytes(),
    ]))
}

/// `e = SHA-256(Z ∥ message) mod n`
pub fn message_digest(
    curve: &Curve,
    user_id: &[u8],
    public: &Point,
    message: &[u8],
) -> Result<U256> {
    let z = z_digest(curve, user_id, public)?;
    let e = sha256_concat(&[&z, message]);
    Ok(curve.n().reduce(&U256::from_be_bytes(&e)))
}
