//! Error types for Reed-Solomon operations

use super::config::FieldConfig;
use thiserror::Error;

/// Broad class of an [`RsError`], for callers that only need to branch on the cause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The call itself was invalid (parameters, buffer layout, mixed fields)
    Configuration,
    /// A field operation outside its domain (log/inverse of zero, divide by zero)
    Field,
    /// The received codeword could not be corrected
    Decoding,
}

/// Why the decoder gave up on a codeword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeFailure {
    /// Euclidean algorithm hit a zero remainder before reaching the degree bound
    #[error("r_{{i-1}} was zero")]
    ZeroRemainder,

    /// A Euclidean division step left the remainder degree unchanged
    #[error("division algorithm failed to reduce polynomial")]
    DivisionDidNotReduce,

    /// The error locator could not be normalized
    #[error("sigma tilde(0) was zero")]
    ZeroLocatorConstant,

    /// Chien search found a different number of roots than the locator degree
    #[error("error locator degree {degree} does not match number of roots {roots}")]
    RootCountMismatch { degree: usize, roots: usize },

    /// An error location points before the start of the buffer
    #[error("error location a^{log} is outside a {len}-byte codeword")]
    PositionOutOfRange { log: usize, len: usize },
}

/// Errors that can occur while building fields, encoding or decoding
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RsError {
    /// Encoding or decoding requested with no parity bytes
    #[error("No error correction bytes")]
    ZeroParityLength,

    /// Buffer is not longer than the parity region
    #[error("No data bytes provided: buffer of {buffer_len} bytes with {ec_len} parity bytes")]
    NoDataRegion { buffer_len: usize, ec_len: usize },

    /// Binary polynomial operation across two different fields
    #[error("Polynomials do not have same field: {left} vs {right}")]
    FieldMismatch {
        left: FieldConfig,
        right: FieldConfig,
    },

    /// Field parameters do not describe a usable GF(2^m)
    #[error("Invalid field {config}: {reason}")]
    InvalidField {
        config: FieldConfig,
        reason: &'static str,
    },

    /// Buffer byte that is not an element of the field
    #[error("Symbol {value} at position {position} is not an element of a {size}-element field")]
    SymbolOutOfRange {
        position: usize,
        value: u8,
        size: usize,
    },

    #[error("Logarithm of zero is undefined")]
    LogOfZero,

    #[error("Zero has no multiplicative inverse")]
    InverseOfZero,

    #[error("Divide by zero polynomial")]
    DivideByZero,

    /// Codeword could not be corrected
    #[error("Reed-Solomon decoding failed: {0}")]
    Decoding(#[from] DecodeFailure),
}

impl RsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RsError::ZeroParityLength
            | RsError::NoDataRegion { .. }
            | RsError::FieldMismatch { .. }
            | RsError::InvalidField { .. }
            | RsError::SymbolOutOfRange { .. } => ErrorKind::Configuration,
            RsError::LogOfZero | RsError::InverseOfZero | RsError::DivideByZero => {
                ErrorKind::Field
            }
            RsError::Decoding(_) => ErrorKind::Decoding,
        }
    }

    /// True when the codeword itself was uncorrectable, as opposed to a bad call
    pub fn is_decoding_failure(&self) -> bool {
        self.kind() == ErrorKind::Decoding
    }
}

/// Type alias for Result with RsError
pub type Result<T> = std::result::Result<T, RsError>;
