//! Constant-time operations to prevent timing attacks

use subtle::ConstantTimeEq;

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise.
/// Slices of different length compare unequal immediately; lengths are public.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// XOR `mask` into `dst` in place.
///
/// # Panics
/// Panics if the two slices differ in length.
pub fn ct_xor_in_place(dst: &mut [u8], mask: &[u8]) {
    assert_eq!(dst.len(), mask.len());
    for (d, m) in dst.iter_mut().zip(mask) {
        *d ^= *m;
    }
}
