//! Constant values for the smcrypt library
//!
//! Curve parameters and every wire-size constant live here so that the
//! arithmetic, encryption and signature crates agree on a single definition.

#![no_std]

pub mod traditional;
