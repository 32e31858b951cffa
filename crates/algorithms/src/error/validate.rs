//! Precondition checks returning this crate's [`Error`]

use super::{Error, Result};

/// Fail with [`Error::Parameter`] unless `condition` holds
///
/// Used for domain-parameter and request-size checks, where `name` is the
/// offending parameter.
#[inline]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(Error::param(name, reason))
    }
}

/// Fail with [`Error::Length`] unless a fixed-size input has exactly
/// `expected` bytes
#[inline]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(Error::Length {
            context,
            expected,
            actual,
        })
    }
}
