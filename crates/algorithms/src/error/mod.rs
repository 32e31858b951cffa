//! Error handling for cryptographic primitives

use std::borrow::Cow;
use std::fmt;

use smcrypt_api::Error as CoreError;

/// The error type for cryptographic primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Malformed encoding
    Format {
        /// What was being decoded
        context: &'static str,
        /// Why it was rejected
        reason: Cow<'static, str>,
    },

    /// Numeric value outside its required range
    Domain {
        /// Operation that hit the value
        context: &'static str,
        /// Which constraint failed
        reason: Cow<'static, str>,
    },

    /// A bounded sampler ran out of attempts
    Exhausted {
        /// What was being sampled
        context: &'static str,
        /// Number of candidates drawn
        attempts: usize,
    },

    /// The caller's RNG failed to produce bytes
    RandomSource {
        /// What was being sampled
        context: &'static str,
        /// The RNG's own error message
        reason: String,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand to create a Format error
    pub fn format<R: Into<Cow<'static, str>>>(context: &'static str, reason: R) -> Self {
        Error::Format {
            context,
            reason: reason.into(),
        }
    }

    /// Shorthand to create a Domain error
    pub fn domain<R: Into<Cow<'static, str>>>(context: &'static str, reason: R) -> Self {
        Error::Domain {
            context,
            reason: reason.into(),
        }
    }
}

/// Result type for cryptographic primitives operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::Format { context, reason } => {
                write!(f, "Invalid encoding for {}: {}", context, reason)
            }
            Error::Domain { context, reason } => {
                write!(f, "Value out of range in {}: {}", context, reason)
            }
            Error::Exhausted { context, attempts } => {
                write!(f, "{} exhausted after {} attempts", context, attempts)
            }
            Error::RandomSource { context, reason } => {
                write!(f, "Random source failed during {}: {}", context, reason)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::Domain {
                context: "parameter",
                message: format!("{}: {}", name, reason),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Format { context, reason } => CoreError::Format {
                context,
                message: reason.into_owned(),
            },
            Error::Domain { context, reason } => CoreError::Domain {
                context,
                message: reason.into_owned(),
            },
            Error::Exhausted { context, attempts } => {
                CoreError::ExhaustedRetries { context, attempts }
            }
            Error::RandomSource { context, reason } => CoreError::RandomGeneration {
                context,
                message: reason,
            },
        }
    }
}

pub mod validate;
