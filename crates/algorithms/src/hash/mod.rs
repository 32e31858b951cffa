//! Hash helpers
//!
//! Every digest in the SM2 schemes (KDF blocks, the ciphertext tag, the
//! identity digest `Z` and the message digest `e`) is SHA-256, provided by the
//! `sha2` crate.

pub use sha2::{Digest, Sha256};

/// Output size of [`Sha256`] in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// SHA-256 over the concatenation of `parts`
pub fn sha256_concat(parts: &[&[u8]]) -> [u8; SHA256_OUTPUT_SIZE] {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_abc() {
        let expected =
            hex::decode("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad").unwrap();
        assert_eq!(sha256_concat(&[b"abc"]).as_slice(), expected.as_slice());
    }

    #[test]
    fn test_concat_matches_single_buffer() {
        assert_eq!(sha256_concat(&[b"ab", b"", b"c"]), sha256_concat(&[b"abc"]));
    }
}
