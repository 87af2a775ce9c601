//! Error handling for ECIES operations

use core::fmt;

use ecrypt_api::error::Error as ApiError;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::string::String;

/// Error type for ECIES parameter and operation failures
///
/// Decryption deliberately reports most failures through
/// [`DecryptionOutcome::Invalid`](ecrypt_api::types::DecryptionOutcome)
/// rather than this type, so that callers cannot distinguish why a
/// ciphertext was rejected. The variants here cover failures that depend
/// only on public configuration or on locally supplied inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An algorithm specification string did not resolve in the registry
    UnknownAlgorithm {
        /// The name that failed to resolve
        name: String,
    },

    /// A parameter set was rejected at construction
    InvalidConfiguration {
        /// What was being validated
        context: &'static str,
        /// Expected value
        expected: usize,
        /// Actual value
        actual: usize,
    },

    /// An operation was executed without a required input
    InvalidState {
        /// The missing input
        context: &'static str,
    },

    /// A supplied buffer cannot be processed
    InvalidInput {
        /// What was wrong with the input
        context: &'static str,
    },

    /// Key agreement produced the identity point
    KeyAgreementFailure,

    /// An algorithm backend failed
    Primitive(ApiError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownAlgorithm { name } => {
                write!(f, "unknown algorithm: {}", name)
            }
            Error::InvalidConfiguration {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "invalid configuration for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::InvalidState { context } => {
                write!(f, "invalid operation state: {}", context)
            }
            Error::InvalidInput { context } => {
                write!(f, "invalid input: {}", context)
            }
            Error::KeyAgreementFailure => {
                write!(f, "key agreement failure")
            }
            Error::Primitive(e) => {
                write!(f, "primitive error: {}", e)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        match err {
            // Registry misses keep their identity at the scheme level.
            ApiError::UnknownAlgorithm { name } => Error::UnknownAlgorithm { name },
            other => Error::Primitive(other),
        }
    }
}

/// Result type for ECIES operations
pub type Result<T> = core::result::Result<T, Error>;
