//! Internal utilities for the smcrypt library
//!
//! Not part of the public API; the member crates share these helpers.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constant_time;
pub mod endian;
