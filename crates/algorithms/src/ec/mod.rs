//! Elliptic Curve Primitives
//!
//! The SM2 prime curve, in affine coordinates.

pub mod sm2;
