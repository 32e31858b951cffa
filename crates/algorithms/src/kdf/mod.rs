//! Counter-mode key derivation
//!
//! `KDF(Z, klen) = H(Z || 1) || H(Z || 2) || ...` truncated to `klen` bytes,
//! with the counter encoded as a 4-byte big-endian integer starting at 1.
//! The output is a pure function of `(Z, klen)`.

use crate::error::{validate, Result};
use crate::hash::{Digest, Sha256};
use smcrypt_common::SecretVec;
use smcrypt_internal::endian::u32_to_be_bytes;

/// Derive `length` bytes from `seed` with SHA-256
pub fn derive(seed: &[u8], length: usize) -> Result<SecretVec> {
    derive_with::<Sha256>(seed, length)
}

/// Derive `length` bytes from `seed` with any fixed-output digest
///
/// Fails when the number of digest blocks would not fit the 32-bit counter.
pub fn derive_with<D: Digest>(seed: &[u8], length: usize) -> Result<SecretVec> {
    let block_size = <D as Digest>::output_size();
    let blocks = length / block_size + usize::from(length % block_size != 0);
    validate::parameter(
        blocks as u64 <= u32::MAX as u64,
        "kdf length",
        "block count exceeds the 32-bit counter",
    )?;

    let mut out = SecretVec::with_capacity(blocks * block_size);
    for counter in 1..=blocks as u32 {
        let mut hasher = D::new();
        hasher.update(seed);
        hasher.update(u32_to_be_bytes(counter));
        out.extend_from_slice(&hasher.finalize());
    }
    out.truncate(length);

    Ok(out)
}
