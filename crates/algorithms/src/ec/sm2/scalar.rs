//! SM2 scalars and scalar sampling

use crate::ec::sm2::constants::SM2_SCALAR_SIZE;
use crate::ec::sm2::curve::Curve;
use crate::error::{validate, Error, Result};
use rand::{CryptoRng, RngCore};
use smcrypt_common::{Modulus, SecretBuffer, U256};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// SM2 scalar: an integer in `[1, n)`, held in a zeroizing buffer.
#[derive(Clone, Zeroize, ZeroizeOnDrop, Debug)]
pub struct Scalar(SecretBuffer<SM2_SCALAR_SIZE>);

impl Scalar {
    /// Create a scalar from big-endian bytes.
    /// Errors if the value is 0 or not below n; no reduction is applied.
    pub fn new(data: [u8; SM2_SCALAR_SIZE]) -> Result<Self> {
        let value = U256::from_be_bytes(&data);
        if !in_range(&value, Curve::sm2().n()) {
            return Err(Error::domain("SM2 scalar", "value must lie in [1, n)"));
        }
        Ok(Scalar(SecretBuffer::new(data)))
    }

    /// Create from a value already known to lie in `[1, n)`
    pub fn from_u256(value: &U256) -> Result<Self> {
        Self::new(value.to_be_bytes())
    }

    /// Deserialize from bytes (with validation)
    pub fn deserialize(bytes: &[u8]) -> Result<Self> {
        validate::length("SM2 scalar", bytes.len(), SM2_SCALAR_SIZE)?;
        let mut tmp = [0u8; SM2_SCALAR_SIZE];
        tmp.copy_from_slice(bytes);
        let scalar = Self::new(tmp);
        tmp.zeroize();
        scalar
    }

    /// Serialize to big-endian bytes
    pub fn serialize(&self) -> [u8; SM2_SCALAR_SIZE] {
        let mut out = [0u8; SM2_SCALAR_SIZE];
        out.copy_from_slice(self.0.as_ref());
        out
    }

    /// The scalar as an integer. The copy is the caller's to zeroize.
    pub fn value(&self) -> U256 {
        let mut bytes = self.serialize();
        let value = U256::from_be_bytes(&bytes);
        bytes.zeroize();
        value
    }
}

/// `1 <= v < n`
pub fn in_range(v: &U256, n: &Modulus) -> bool {
    !v.is_zero() && n.contains(v)
}

/// Draw one candidate scalar: 32 random bytes read big-endian, masked to the
/// bit length of `n`. Returns `Ok(None)` when the candidate falls outside
/// `[1, n)`; the caller decides how many draws it allows. A failing RNG is
/// an error, not a rejected draw.
pub fn sample_candidate<R: RngCore + CryptoRng>(
    n: &Modulus,
    rng: &mut R,
) -> Result<Option<U256>> {
    let mut bytes = [0u8; SM2_SCALAR_SIZE];
    rng.try_fill_bytes(&mut bytes)
        .map_err(|e| Error::RandomSource {
            context: "SM2 scalar sampling",
            reason: e.to_string(),
        })?;

    let excess = 256 - n.value().bits();
    for b in bytes.iter_mut().take(excess / 8) {
        *b = 0;
    }
    if excess / 8 < SM2_SCALAR_SIZE {
        bytes[excess / 8] &= 0xFF >> (excess % 8);
    }

    let candidate = U256::from_be_bytes(&bytes);
    bytes.zeroize();
    Ok(in_range(&candidate, n).then_some(candidate))
}
