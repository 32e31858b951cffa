//! Common mathematical operations for cryptographic algorithms

mod modulus;
mod uint;

pub use modulus::Modulus;
pub use uint::{LIMBS, U256, U256_BYTES};


/// Compute a^(-1) mod m with the binary extended Euclidean algorithm
///
/// Returns `None` exactly when no inverse exists, i.e. `gcd(a, m) != 1`
/// (which includes `a ≡ 0`). `a` need not be reduced.
///
/// Keeps `x1·a ≡ u` and `x2·a ≡ v (mod m)` while shrinking `u` and `v`;
/// halving the coefficients relies on `m` being odd.
pub fn mod_inverse(a: &U256, m: &Modulus) -> Option<U256> {
    let a = m.reduce(a);
    if a.is_zero() {
        return None;
    }

    let mut u = a;
    let mut v = *m.value();
    let mut x1 = U256::ONE;
    let mut x2 = U256::ZERO;

    while u != U256::ONE && v != U256::ONE {
        while u.is_even() {
            u = u.shr1();
            x1 = m.half(&x1);
        }
        while v.is_even() {
            v = v.shr1();
            x2 = m.half(&x2);
        }

        if u >= v {
            u = u.wrapping_sub(&v);
            x1 = m.sub(&x1, &x2);
        } else {
            v = v.wrapping_sub(&u);
            x2 = m.sub(&x2, &x1);
        }

        // u == v before the subtraction: the common factor is > 1
        if u.is_zero() || v.is_zero() {
            return None;
        }
    }

    if u == U256::ONE {
        Some(x1)
    } else {
        Some(x2)
    }
}
