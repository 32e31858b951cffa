//! Error type definitions for cryptographic operations

use thiserror::Error as ThisError;

/// Primary error type for cryptographic operations
///
/// `Format`, `Domain`, `Integrity` and `ExhaustedRetries` are the four
/// failure classes of the SM2 schemes. A rejected signature is not an error:
/// verification reports it as `false`.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Malformed encoding: wrong length, unknown tag byte, coordinate out of
    /// range or a point that is not on the curve
    #[error("Invalid encoding: {context}: {message}")]
    Format {
        context: &'static str,
        message: String,
    },

    /// A value outside its required numeric range, or an inverse requested
    /// for a non-coprime pair
    #[error("Value out of range: {context}: {message}")]
    Domain {
        context: &'static str,
        message: String,
    },

    /// Ciphertext tag mismatch. No plaintext is released alongside it.
    #[error("Integrity check failed: {context}")]
    Integrity { context: &'static str },

    /// The nonce sampler ran out of attempts; the random source is broken
    #[error("{context}: no valid candidate after {attempts} attempts")]
    ExhaustedRetries {
        context: &'static str,
        attempts: usize,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The random source itself failed to produce bytes
    #[error("Random generation error: {context}: {message}")]
    RandomGeneration {
        context: &'static str,
        message: String,
    },
}

/// Result type for cryptographic operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand for a [`Error::Format`] error
    pub fn format(context: &'static str, message: impl Into<String>) -> Self {
        Self::Format {
            context,
            message: message.into(),
        }
    }

    /// Shorthand for a [`Error::Domain`] error
    pub fn domain(context: &'static str, message: impl Into<String>) -> Self {
        Self::Domain {
            context,
            message: message.into(),
        }
    }

    /// Returns the static context string attached to every variant
    pub fn context(&self) -> &'static str {
        match self {
            Self::Format { context, .. }
            | Self::Domain { context, .. }
            | Self::Integrity { context }
            | Self::ExhaustedRetries { context, .. }
            | Self::InvalidLength { context, .. }
            | Self::RandomGeneration { context, .. } => context,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = Error::InvalidLength {
            context: "SM2 ciphertext",
            expected: 97,
            actual: 12,
        };
        assert_eq!(
            err.to_string(),
            "SM2 ciphertext: invalid length (expected 97, got 12)"
        );

        let err = Error::ExhaustedRetries {
            context: "SM2 sign",
            attempts: 100,
        };
        assert_eq!(
            err.to_string(),
            "SM2 sign: no valid candidate after 100 attempts"
        );
    }

    #[test]
    fn test_context() {
        assert_eq!(Error::format("point", "bad tag").context(), "point");
        assert_eq!(Error::Integrity { context: "decrypt" }.context(), "decrypt");
    }
}
