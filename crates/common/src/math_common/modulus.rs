//! Modular arithmetic over an odd 256-bit modulus
//!
//! Multiplication uses Montgomery's CIOS reduction internally; every public
//! operation takes and returns ordinary (non-Montgomery) residues normalized
//! into `[0, m)`.

use super::uint::{LIMBS, U256};

/// An odd modulus `m > 1` with its precomputed Montgomery constants.
///
/// Binary operations expect operands already reduced into `[0, m)`; use
/// [`Modulus::reduce`] on anything that may not be.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Modulus {
    m: U256,
    /// -m^{-1} mod 2^64
    m_inv: u64,
    /// R^2 mod m, R = 2^256
    r2: U256,
}

impl Modulus {
    /// Returns `None` for an even modulus or for `m <= 1`.
    pub fn new(m: U256) -> Option<Self> {
        if m.is_even() || m <= U256::ONE {
            return None;
        }

        // Newton iteration doubles the number of correct low bits per step:
        // 1 -> 2 -> 4 -> ... -> 64.
        let m0 = m.limbs()[0];
        let mut inv = 1u64;
        for _ in 0..6 {
            inv = inv.wrapping_mul(2u64.wrapping_sub(m0.wrapping_mul(inv)));
        }

        let mut modulus = Self {
            m,
            m_inv: inv.wrapping_neg(),
            r2: U256::ZERO,
        };

        let mut r2 = U256::ONE;
        for _ in 0..512 {
            r2 = modulus.add(&r2, &r2);
        }
        modulus.r2 = r2;

        Some(modulus)
    }

    /// The modulus itself
    pub fn value(&self) -> &U256 {
        &self.m
    }

    /// True when `a` is already a residue, i.e. `a < m`
    pub fn contains(&self, a: &U256) -> bool {
        a < &self.m
    }

    /// Reduce any 256-bit value into `[0, m)`
    pub fn reduce(&self, a: &U256) -> U256 {
        // a < R and r2 < m keep the product below m*R
        let a_mont = self.mont_mul(a, &self.r2);
        self.mont_mul(&a_mont, &U256::ONE)
    }

    /// (a + b) mod m
    pub fn add(&self, a: &U256, b: &U256) -> U256 {
        let (sum, carry) = a.overflowing_add(b);
        if carry || sum >= self.m {
            sum.wrapping_sub(&self.m)
        } else {
            sum
        }
    }

    /// (a - b) mod m
    pub fn sub(&self, a: &U256, b: &U256) -> U256 {
        let (diff, borrow) = a.overflowing_sub(b);
        if borrow {
            diff.wrapping_add(&self.m)
        } else {
            diff
        }
    }

    /// (-a) mod m
    pub fn neg(&self, a: &U256) -> U256 {
        if a.is_zero() {
            U256::ZERO
        } else {
            self.m.wrapping_sub(a)
        }
    }

    /// (a * b) mod m
    pub fn mul(&self, a: &U256, b: &U256) -> U256 {
        debug_assert!(self.contains(a) && self.contains(b));
        let t = self.mont_mul(a, b);
        self.mont_mul(&t, &self.r2)
    }

    /// a^2 mod m
    pub fn square(&self, a: &U256) -> U256 {
        self.mul(a, a)
    }

    /// a / 2 mod m
    pub fn half(&self, a: &U256) -> U256 {
        if a.is_even() {
            a.shr1()
        } else {
            let (sum, carry) = a.overflowing_add(&self.m);
            sum.shr1_with_carry(carry)
        }
    }

    /// base^exp mod m, left-to-right square-and-multiply
    pub fn pow(&self, base: &U256, exp: &U256) -> U256 {
        let base_mont = self.mont_mul(&self.reduce(base), &self.r2);
        let mut acc = self.mont_mul(&U256::ONE, &self.r2);

        for i in (0..exp.bits()).rev() {
            acc = self.mont_mul(&acc, &acc);
            if exp.bit(i) {
                acc = self.mont_mul(&acc, &base_mont);
            }
        }

        self.mont_mul(&acc, &U256::ONE)
    }

    /// Multiplicative inverse, `None` when `gcd(a, m) != 1`
    pub fn inverse(&self, a: &U256) -> Option<U256> {
        super::mod_inverse(a, self)
    }

    /// Montgomery product a * b * R^{-1} mod m (CIOS).
    ///
    /// Correct whenever `a * b < m * R`.
    fn mont_mul(&self, a: &U256, b: &U256) -> U256 {
        let a = a.limbs();
        let b = b.limbs();
        let m = self.m.limbs();
        let mut t = [0u64; LIMBS + 2];

        for i in 0..LIMBS {
            let mut carry = 0u64;
            for j in 0..LIMBS {
                let uv = t[j] as u128 + (a[j] as u128) * (b[i] as u128) + carry as u128;
                t[j] = uv as u64;
                carry = (uv >> 64) as u64;
            }
            let uv = t[LIMBS] as u128 + carry as u128;
            t[LIMBS] = uv as u64;
            t[LIMBS + 1] = (uv >> 64) as u64;

            let q = t[0].wrapping_mul(self.m_inv);
            let uv = t[0] as u128 + (q as u128) * (m[0] as u128);
            let mut carry = (uv >> 64) as u64;
            for j in 1..LIMBS {
                let uv = t[j] as u128 + (q as u128) * (m[j] as u128) + carry as u128;
                t[j - 1] = uv as u64;
                carry = (uv >> 64) as u64;
            }
            let uv = t[LIMBS] as u128 + carry as u128;
            t[LIMBS - 1] = uv as u64;
            t[LIMBS] = t[LIMBS + 1] + (uv >> 64) as u64;
        }

        let result = U256::from_limbs([t[0], t[1], t[2], t[3]]);
        if t[LIMBS] != 0 || result >= self.m {
            result.wrapping_sub(&self.m)
        } else {
            result
        }
    }
}
