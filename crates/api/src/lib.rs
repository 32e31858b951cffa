//! Public API traits and types for the smcrypt library
//!
//! This crate provides the public API surface for the smcrypt workspace: the
//! error type every scheme reports through and the traits the SM2 encryption
//! and signature schemes implement.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

pub use traits::{Pke, Serialize, SerializeSecret, Signature};

// Re-export trait modules for direct access
pub use traits::{pke, serialize, signature};
