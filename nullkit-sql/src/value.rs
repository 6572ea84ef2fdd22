//! The driver-side value representation.

use chrono::{DateTime, Utc};

/// A scalar value as exchanged with a tabular-storage driver.
///
/// This is the closed set of wire kinds. Narrower Rust types widen into one
/// of these carriers on bind and are recovered by [`SqlScalar::narrow`] on
/// scan; no other kinds cross the driver boundary.
///
/// [`SqlScalar::narrow`]: crate::SqlScalar::narrow
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// The driver's null marker.
    Null,
    Integer(i64),
    Real(f64),
    Boolean(bool),
    Text(String),
    Blob(Vec<u8>),
    Timestamp(DateTime<Utc>),
}

impl SqlValue {
    /// Returns the kind name used in error messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::Boolean(_) => "boolean",
            Self::Text(_) => "text",
            Self::Blob(_) => "blob",
            Self::Timestamp(_) => "timestamp",
        }
    }

    /// Returns true if this is the null marker.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}
