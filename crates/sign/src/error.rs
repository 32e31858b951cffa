//! Error types for the signature crate

use core::fmt;
use smcrypt_algorithms::error::Error as AlgoError;

/// Errors that can occur during signature operations
#[derive(Debug, Clone)]
pub enum Error {
    /// Invalid signature size
    InvalidSignatureSize { expected: usize, actual: usize },

    /// A value outside its required numeric range
    Domain {
        context: &'static str,
        details: String,
    },

    /// The nonce search used up its attempt budget
    NonceExhausted { attempts: usize },

    /// Failure inside a curve or hash primitive
    Algorithm(AlgoError),
}

impl Error {
    pub(crate) fn domain(context: &'static str, details: impl Into<String>) -> Self {
        Error::Domain {
            context,
            details: details.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSignatureSize { expected, actual } => {
                write!(
                    f,
                    "Invalid signature size: expected {}, got {}",
                    expected, actual
                )
            }
            Error::Domain { context, details } => {
                write!(f, "{}: value out of range: {}", context, details)
            }
            Error::NonceExhausted { attempts } => {
                write!(f, "No valid signing nonce after {} attempts", attempts)
            }
            Error::Algorithm(e) => write!(f, "Algorithm error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Algorithm(e) => Some(e),
            _ => None,
        }
    }
}

// Convert from algorithms::error::Error
impl From<AlgoError> for Error {
    fn from(err: AlgoError) -> Self {
        Error::Algorithm(err)
    }
}

// Convert to api::Error
impl From<Error> for smcrypt_api::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidSignatureSize { expected, actual } => {
                smcrypt_api::Error::InvalidLength {
                    context: "SM2 signature",
                    expected,
                    actual,
                }
            }
            Error::Domain { context, details } => smcrypt_api::Error::Domain {
                context,
                message: details,
            },
            Error::NonceExhausted { attempts } => smcrypt_api::Error::ExhaustedRetries {
                context: "SM2 signing nonce",
                attempts,
            },
            Error::Algorithm(e) => e.into(),
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
