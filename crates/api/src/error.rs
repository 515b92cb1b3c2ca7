//! Error type definitions for signature operations

use core::fmt;

/// Primary error type for signature operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Scalar or coordinate outside its legal domain
    InvalidRange {
        /// Context where the range violation occurred
        context: &'static str,
    },

    /// Byte string of the wrong length
    InvalidLength {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Byte string that does not decode to a valid value
    MalformedEncoding {
        /// Context where the decode failure occurred
        context: &'static str,
        /// Reason the encoding was rejected
        reason: &'static str,
    },

    /// Verification equation does not hold
    SignatureMismatch {
        /// Context of the failed verification
        context: &'static str,
    },

    /// Recovery id outside the legal set {27, 28}
    InvalidRecoveryId {
        /// The rejected value
        value: u8,
    },

    /// Bounded nonce retry loop ran out of attempts
    NonceExhausted {
        /// Context of the exhausted signing attempt
        context: &'static str,
    },

    /// Arithmetic impossibility on inputs that should never produce one
    Arithmetic {
        /// Context where the failure occurred
        context: &'static str,
        /// The operation that failed
        operation: &'static str,
    },

    /// Invalid key material
    InvalidKey {
        /// Context where the key was rejected
        context: &'static str,
        /// Reason the key was rejected
        reason: &'static str,
    },
}

/// Result type for signature operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidRange { context } => {
                write!(f, "Value out of range in {}", context)
            }
            Error::InvalidLength {
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
            Error::MalformedEncoding { context, reason } => {
                write!(f, "Malformed encoding in {}: {}", context, reason)
            }
            Error::SignatureMismatch { context } => {
                write!(f, "Signature verification failed in {}", context)
            }
            Error::InvalidRecoveryId { value } => {
                write!(f, "Invalid recovery id {} (expected 27 or 28)", value)
            }
            Error::NonceExhausted { context } => {
                write!(f, "Nonce retry limit exhausted in {}", context)
            }
            Error::Arithmetic { context, operation } => {
                write!(f, "Arithmetic failure in {}: {}", context, operation)
            }
            Error::InvalidKey { context, reason } => {
                write!(f, "Invalid key in {}: {}", context, reason)
            }
        }
    }
}

impl std::error::Error for Error {}
