//! Error handling for PKE operations.

use core::fmt;
use smcrypt_algorithms::error::Error as PrimitiveError;
use smcrypt_api::error::Error as CoreError;

/// Error type for PKE operations.
#[derive(Debug)]
pub enum Error {
    /// Failure inside a curve, hash or KDF primitive
    Primitive(PrimitiveError),
    /// Failure already expressed as an API error
    Api(CoreError),
    /// The ciphertext is too short or its C1 component is malformed
    InvalidCiphertextFormat(&'static str),
    /// A key or shared point fell outside the values the scheme accepts
    Domain(&'static str),
    /// The recomputed C3 tag did not match the stored one
    IntegrityCheckFailed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "PKE primitive error: {}", e),
            Error::Api(e) => write!(f, "PKE API error: {}", e),
            Error::InvalidCiphertextFormat(reason) => {
                write!(f, "Invalid SM2 ciphertext format: {}", reason)
            }
            Error::Domain(reason) => write!(f, "SM2 encryption domain error: {}", reason),
            Error::IntegrityCheckFailed => write!(f, "SM2 ciphertext tag mismatch"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            Error::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        Error::Primitive(err)
    }
}

impl From<CoreError> for Error {
    fn from(err: CoreError) -> Self {
        Error::Api(err)
    }
}

// Conversion from PKE Error to API Error
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::Api(e) => e,
            Error::InvalidCiphertextFormat(reason) => CoreError::Format {
                context: "SM2 ciphertext",
                message: reason.to_string(),
            },
            Error::Domain(reason) => CoreError::Domain {
                context: "SM2 encryption",
                message: reason.to_string(),
            },
            Error::IntegrityCheckFailed => CoreError::Integrity {
                context: "SM2 decryption",
            },
        }
    }
}

/// Result type for PKE operations.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integrity_maps_to_integrity() {
        let api: CoreError = Error::IntegrityCheckFailed.into();
        assert!(matches!(api, CoreError::Integrity { .. }));
    }

    #[test]
    fn test_format_and_domain_mapping() {
        let api: CoreError = Error::InvalidCiphertextFormat("too short").into();
        assert!(matches!(api, CoreError::Format { context: "SM2 ciphertext", .. }));

        let api: CoreError = Error::Domain("shared point is the point at infinity").into();
        assert!(matches!(api, CoreError::Domain { .. }));
    }

    #[test]
    fn test_primitive_error_passes_through() {
        let prim = PrimitiveError::format("SM2 point", "point not on curve");
        let api: CoreError = Error::from(prim).into();
        assert!(matches!(api, CoreError::Format { context: "SM2 point", .. }));
    }
}
