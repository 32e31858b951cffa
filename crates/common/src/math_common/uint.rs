//! Fixed-width 256-bit unsigned integer

use core::cmp::Ordering;
use core::fmt;
use smcrypt_internal::endian::{words_from_be_bytes, words_to_be_bytes};
use zeroize::Zeroize;

/// Number of 64-bit limbs in a [`U256`]
pub const LIMBS: usize = 4;

/// Size of a [`U256`] in bytes
pub const U256_BYTES: usize = 32;

/// 256-bit unsigned integer stored as four little-endian 64-bit limbs.
///
/// Byte import and export are big-endian, which is the wire order for every
/// scalar and coordinate in this workspace.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Zeroize)]
pub struct U256 {
    limbs: [u64; LIMBS],
}

impl U256 {
    /// The value 0
    pub const ZERO: Self = Self { limbs: [0; LIMBS] };

    /// The value 1
    pub const ONE: Self = Self {
        limbs: [1, 0, 0, 0],
    };

    /// Create from little-endian limbs
    pub const fn from_limbs(limbs: [u64; LIMBS]) -> Self {
        Self { limbs }
    }

    /// Create from a single 64-bit word
    pub const fn from_u64(value: u64) -> Self {
        Self {
            limbs: [value, 0, 0, 0],
        }
    }

    /// Little-endian limbs
    pub const fn limbs(&self) -> &[u64; LIMBS] {
        &self.limbs
    }

    /// Parse a 32-byte big-endian value
    pub fn from_be_bytes(bytes: &[u8; U256_BYTES]) -> Self {
        Self {
            limbs: words_from_be_bytes(bytes),
        }
    }

    /// Parse a big-endian value of at most 32 bytes, left-padding with zeros
    pub fn from_be_slice(bytes: &[u8]) -> Option<Self> {
        if bytes.len() > U256_BYTES {
            return None;
        }
        let mut buf = [0u8; U256_BYTES];
        buf[U256_BYTES - bytes.len()..].copy_from_slice(bytes);
        Some(Self::from_be_bytes(&buf))
    }

    /// Serialize as 32 big-endian bytes
    pub fn to_be_bytes(&self) -> [u8; U256_BYTES] {
        words_to_be_bytes(&self.limbs)
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.iter().all(|&l| l == 0)
    }

    pub fn is_odd(&self) -> bool {
        self.limbs[0] & 1 == 1
    }

    pub fn is_even(&self) -> bool {
        !self.is_odd()
    }

    /// Value of bit `i` (bit 0 is least significant). Out-of-range bits are 0.
    pub fn bit(&self, i: usize) -> bool {
        if i >= 256 {
            return false;
        }
        (self.limbs[i / 64] >> (i % 64)) & 1 == 1
    }

    /// Number of significant bits (0 for zero)
    pub fn bits(&self) -> usize {
        for i in (0..LIMBS).rev() {
            if self.limbs[i] != 0 {
                return 64 * i + (64 - self.limbs[i].leading_zeros() as usize);
            }
        }
        0
    }

    /// `self + rhs` and the carry out of bit 255
    pub fn overflowing_add(&self, rhs: &Self) -> (Self, bool) {
        let mut limbs = [0u64; LIMBS];
        let mut carry = 0u64;
        for i in 0..LIMBS {
            let t = self.limbs[i] as u128 + rhs.limbs[i] as u128 + carry as u128;
            limbs[i] = t as u64;
            carry = (t >> 64) as u64;
        }
        (Self { limbs }, carry != 0)
    }

    /// `self - rhs` and whether it borrowed
    pub fn overflowing_sub(&self, rhs: &Self) -> (Self, bool) {
        let mut limbs = [0u64; LIMBS];
        let mut borrow = 0u64;
        for i in 0..LIMBS {
            let (d1, b1) = self.limbs[i].overflowing_sub(rhs.limbs[i]);
            let (d2, b2) = d1.overflowing_sub(borrow);
            limbs[i] = d2;
            borrow = (b1 | b2) as u64;
        }
        (Self { limbs }, borrow != 0)
    }

    pub fn wrapping_add(&self, rhs: &Self) -> Self {
        self.overflowing_add(rhs).0
    }

    pub fn wrapping_sub(&self, rhs: &Self) -> Self {
        self.overflowing_sub(rhs).0
    }

    /// `self >> 1`, shifting `carry` into bit 255
    pub fn shr1_with_carry(&self, carry: bool) -> Self {
        let mut limbs = [0u64; LIMBS];
        for i in 0..LIMBS {
            let hi = if i + 1 < LIMBS {
                self.limbs[i + 1] << 63
            } else {
                (carry as u64) << 63
            };
            limbs[i] = (self.limbs[i] >> 1) | hi;
        }
        Self { limbs }
    }

    pub fn shr1(&self) -> Self {
        self.shr1_with_carry(false)
    }
}

impl Ord for U256 {
    fn cmp(&self, other: &Self) -> Ordering {
        for i in (0..LIMBS).rev() {
            match self.limbs[i].cmp(&other.limbs[i]) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for U256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<u64> for U256 {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl fmt::LowerHex for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.to_be_bytes() {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl fmt::Debug for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U256(0x{:x})", self)
    }
}
