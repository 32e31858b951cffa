//! Security primitives for handling sensitive material
//!
//! Wrappers that zeroize their contents on drop and never print them.

pub mod secret;

pub use secret::{EphemeralSecret, SecretBuffer, SecretVec};
