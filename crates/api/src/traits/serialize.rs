//! Byte encodings of keys and signatures

use crate::Result;
use zeroize::{Zeroize, Zeroizing};

/// Public values with a canonical byte encoding.
///
/// `from_bytes` validates: a public key must decode to a curve point, a
/// signature must have in-range components.
pub trait Serialize: Sized {
    /// Length of the canonical encoding written by `to_bytes`. `from_bytes`
    /// may accept other lengths, such as a compressed point.
    const ENCODED_SIZE: usize;

    /// Parse and validate
    fn from_bytes(bytes: &[u8]) -> Result<Self>;

    /// Canonical encoding, `ENCODED_SIZE` bytes long
    fn to_bytes(&self) -> Vec<u8>;
}

/// Secret values. The exported bytes are wiped when dropped.
pub trait SerializeSecret: Sized {
    /// Exact length of the encoding, both accepted and written
    const ENCODED_SIZE: usize;

    /// Parse and validate. The caller still owns and must wipe `bytes`.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;

    /// Encoding held in a zeroizing buffer
    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>>;

    /// Parse, then wipe `bytes` whether or not parsing succeeded
    fn from_bytes_wiping(bytes: &mut [u8]) -> Result<Self> {
        let parsed = Self::from_bytes(bytes);
        bytes.zeroize();
        parsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    struct Nonzero(u8);

    impl SerializeSecret for Nonzero {
        const ENCODED_SIZE: usize = 1;

        fn from_bytes(bytes: &[u8]) -> Result<Self> {
            match bytes {
                [b] if *b != 0 => Ok(Nonzero(*b)),
                _ => Err(Error::domain("nonzero", "must be one nonzero byte")),
            }
        }

        fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
            Zeroizing::new(vec![self.0])
        }
    }

    #[test]
    fn test_from_bytes_wiping_clears_input() {
        let mut bytes = [9u8];
        let parsed = Nonzero::from_bytes_wiping(&mut bytes).unwrap();
        assert_eq!(parsed.to_bytes_zeroizing().as_slice(), &[9]);
        assert_eq!(bytes, [0]);

        let mut bytes = [1u8, 2];
        assert!(Nonzero::from_bytes_wiping(&mut bytes).is_err());
        assert_eq!(bytes, [0, 0]);
    }
}
