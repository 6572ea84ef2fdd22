//! Error types for SQL value conversion.

use thiserror::Error;

/// Result type for SQL value conversions.
pub type SqlResult<T> = Result<T, SqlError>;

/// Errors that can occur converting between Rust values and driver values.
///
/// All conversions are pure and local: an error is returned to the caller
/// immediately, never retried or swallowed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SqlError {
    /// The value's runtime kind is outside the set the driver can carry.
    #[error("{kind} is not supported by the sql driver")]
    Unsupported { kind: &'static str },

    /// A driver value's kind does not match or convert to the target type.
    #[error("cannot scan {from} into {target}")]
    ScanMismatch {
        from: &'static str,
        target: &'static str,
    },

    /// An integer column does not fit the target width.
    #[error("integer {value} out of range for {target}")]
    OutOfRange { value: i64, target: &'static str },

    /// A text column could not be parsed as a timestamp.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
