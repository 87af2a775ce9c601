//! Error types shared between algorithm backends and scheme crates

use core::fmt;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::string::String;

/// Error type for primitive and backend failures
///
/// Scheme crates wrap this in their own error enums; see
/// `ecrypt-ecies::Error` for how the variants surface at the scheme level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An algorithm specification string did not resolve in the registry
    UnknownAlgorithm {
        /// The name that failed to resolve
        name: String,
    },

    /// A buffer or key had the wrong length
    InvalidLength {
        /// What was being validated
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// A point encoding could not be parsed or used
    InvalidPoint {
        /// What was being parsed or computed
        context: &'static str,
    },

    /// The backend does not support the requested feature
    Unsupported {
        /// Description of the unsupported feature
        feature: &'static str,
    },

    /// A primitive failed while processing data
    Processing {
        /// The operation that failed
        operation: &'static str,
        /// Additional failure detail
        details: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownAlgorithm { name } => {
                write!(f, "unknown algorithm: {}", name)
            }
            Error::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "invalid length for {}: expected {} bytes, got {}",
                    context, expected, actual
                )
            }
            Error::InvalidPoint { context } => {
                write!(f, "invalid point: {}", context)
            }
            Error::Unsupported { feature } => {
                write!(f, "unsupported: {}", feature)
            }
            Error::Processing { operation, details } => {
                write!(f, "processing error in {}: {}", operation, details)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type for API operations
pub type Result<T> = core::result::Result<T, Error>;
