//! Ciphertext component ordering

use crate::error::{Error, Result};
use smcrypt_params::traditional::sm2::{
    SM2_MIN_CIPHERTEXT_SIZE, SM2_POINT_UNCOMPRESSED_SIZE, SM2_TAG_SIZE,
};

/// Order of the three ciphertext components on the wire.
///
/// `C1` (the ephemeral point) always comes first and is always 65 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CiphertextLayout {
    /// `C1 ∥ C3 ∥ C2`, the current layout
    #[default]
    C1C3C2,
    /// `C1 ∥ C2 ∥ C3`, emitted by older implementations
    C1C2C3,
}

/// Borrowed view of a split ciphertext
#[derive(Debug, Clone, Copy)]
pub(crate) struct CiphertextParts<'a> {
    pub c1: &'a [u8],
    pub c3: &'a [u8],
    pub c2: &'a [u8],
}

impl CiphertextLayout {
    pub(crate) fn join(self, c1: &[u8], c3: &[u8], c2: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(c1.len() + c3.len() + c2.len());
        out.extend_from_slice(c1);
        match self {
            CiphertextLayout::C1C3C2 => {
                out.extend_from_slice(c3);
                out.extend_from_slice(c2);
            }
            CiphertextLayout::C1C2C3 => {
                out.extend_from_slice(c2);
                out.extend_from_slice(c3);
            }
        }
        out
    }

    pub(crate) fn split(self, bytes: &[u8]) -> Result<CiphertextParts<'_>> {
        if bytes.len() < SM2_MIN_CIPHERTEXT_SIZE {
            return Err(Error::InvalidCiphertextFormat(
                "shorter than C1 plus the C3 tag",
            ));
        }
        let (c1, rest) = bytes.split_at(SM2_POINT_UNCOMPRESSED_SIZE);
        let (c3, c2) = match self {
            CiphertextLayout::C1C3C2 => {
                let (c3, c2) = rest.split_at(SM2_TAG_SIZE);
                (c3, c2)
            }
            CiphertextLayout::C1C2C3 => {
                let (c2, c3) = rest.split_at(rest.len() - SM2_TAG_SIZE);
                (c3, c2)
            }
        };
        Ok(CiphertextParts { c1, c3, c2 })
    }
}
