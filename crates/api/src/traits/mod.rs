//! Traits implemented by the smcrypt schemes

pub mod pke;
pub mod serialize;
pub mod signature;

pub use pke::Pke;
pub use serialize::{Serialize, SerializeSecret};
pub use signature::Signature;
