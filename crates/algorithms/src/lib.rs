//! Cryptographic primitives for the smcrypt library
//!
//! This crate holds the building blocks the SM2 schemes are assembled from:
//! SHA-256 helpers, the counter-mode KDF, and the SM2 curve group with its
//! point encodings.
//!
//! Requires the standard library.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Hash helpers
pub mod hash;
pub use hash::{sha256_concat, Sha256};

// Key derivation
pub mod kdf;

// Elliptic Curve primitives
pub mod ec;
pub use ec::sm2::{Curve, Point, PointFormat, Scalar};
