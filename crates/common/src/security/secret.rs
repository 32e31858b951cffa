//! Zeroizing containers for key material
//!
//! Private scalars live in [`SecretBuffer`], KDF keystreams and not-yet
//! authenticated plaintext in [`SecretVec`], and short-lived integers such as
//! signing nonces in [`EphemeralSecret`]. None of them print their contents.

use core::fmt;
use core::ops::{Deref, DerefMut};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Fixed-size secret bytes, wiped on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretBuffer<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> SecretBuffer<N> {
    /// Take ownership of `data`
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Borrow the secret bytes
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> AsRef<[u8]> for SecretBuffer<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> fmt::Debug for SecretBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBuffer<{}>([REDACTED])", N)
    }
}

/// Growable secret bytes, wiped on drop
///
/// Anything still held when the value is dropped is zeroized, including the
/// recovered plaintext of a ciphertext whose tag did not match. Call
/// [`SecretVec::release`] only once the bytes may leave protected memory.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct SecretVec {
    data: Vec<u8>,
}

impl SecretVec {
    /// Copy `slice` into a new secret vector
    pub fn from_slice(slice: &[u8]) -> Self {
        Self {
            data: slice.to_vec(),
        }
    }

    /// Empty vector with room for `capacity` bytes, so appends do not leave
    /// reallocated copies behind
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Number of bytes held
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when no bytes are held
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrow the secret bytes
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Mutably borrow the secret bytes
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Append bytes. Growing past the reserved capacity reallocates.
    pub fn extend_from_slice(&mut self, slice: &[u8]) {
        self.data.extend_from_slice(slice);
    }

    /// Drop everything after the first `len` bytes, wiping the tail
    pub fn truncate(&mut self, len: usize) {
        if len < self.data.len() {
            self.data[len..].zeroize();
        }
        self.data.truncate(len);
    }

    /// Hand the bytes out as an ordinary vector. The caller owns their
    /// lifetime from here on.
    pub fn release(mut self) -> Vec<u8> {
        core::mem::take(&mut self.data)
    }
}

impl AsRef<[u8]> for SecretVec {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Debug for SecretVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretVec(len={}, [REDACTED])", self.data.len())
    }
}

/// A value that is zeroized when it goes out of scope
///
/// Dereferences to the wrapped value, so `&EphemeralSecret<U256>` can be
/// passed wherever `&U256` is expected.
pub struct EphemeralSecret<T: Zeroize> {
    inner: T,
}

impl<T: Zeroize> EphemeralSecret<T> {
    /// Wrap `value`
    pub fn new(value: T) -> Self {
        Self { inner: value }
    }
}

impl<T: Zeroize> Drop for EphemeralSecret<T> {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

impl<T: Zeroize + Clone> Clone for EphemeralSecret<T> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl<T: Zeroize> Zeroize for EphemeralSecret<T> {
    fn zeroize(&mut self) {
        self.inner.zeroize();
    }
}

impl<T: Zeroize> Deref for EphemeralSecret<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T: Zeroize> DerefMut for EphemeralSecret<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.inner
    }
}

impl<T: Zeroize> fmt::Debug for EphemeralSecret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EphemeralSecret([REDACTED])")
    }
}
