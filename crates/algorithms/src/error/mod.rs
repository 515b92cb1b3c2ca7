//! Error handling for the arithmetic and curve layers

use core::fmt;

use sigil_api::Error as ApiError;

/// The error type for arithmetic and curve-group operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
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

    /// Value outside [0, modulus) or a scalar outside its legal domain
    Range {
        /// Context where the range violation occurred
        context: &'static str,
    },

    /// No modular inverse exists (input congruent to zero)
    NoInverse {
        /// Context where the inversion was attempted
        context: &'static str,
    },

    /// No modular square root exists (input is a non-residue)
    NoSquareRoot {
        /// Context where the square root was attempted
        context: &'static str,
    },
}

/// Result type for arithmetic and curve-group operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }
}

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
            Error::Range { context } => {
                write!(f, "Value out of range in {}", context)
            }
            Error::NoInverse { context } => {
                write!(f, "No modular inverse in {}", context)
            }
            Error::NoSquareRoot { context } => {
                write!(f, "No modular square root in {}", context)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => ApiError::MalformedEncoding {
                context: name,
                reason,
            },
            Error::Length {
                context,
                expected,
                actual,
            } => ApiError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Range { context } => ApiError::InvalidRange { context },
            Error::NoInverse { context } => ApiError::Arithmetic {
                context,
                operation: "modular inverse",
            },
            Error::NoSquareRoot { context } => ApiError::Arithmetic {
                context,
                operation: "modular square root",
            },
        }
    }
}

pub mod validate;
