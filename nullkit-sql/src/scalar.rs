//! Scalar conversions between Rust types and driver values.
//!
//! Widening is directional: narrower integer and float types always promote
//! to their 64-bit carrier before reaching the driver, and the exact width
//! is recovered only on scan, with a range check. `u64` is not storable —
//! it has no lossless signed 64-bit carrier.

use crate::{SqlError, SqlResult, SqlValue};
use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;

mod private {
    pub trait Sealed {}
}

/// A Rust type storable as a single driver scalar.
///
/// The implementations form the closed set of storable kinds: fixed-width
/// integers up to `i64` (unsigned up to `u32`), `f32`/`f64`, `bool`,
/// `String`, `Vec<u8>`, `DateTime<Utc>`, and `serde_json::Value` restricted
/// to its scalar forms. The trait is sealed; the set cannot be extended
/// downstream.
pub trait SqlScalar: private::Sealed + Sized {
    /// The name of this type in error messages.
    const TARGET: &'static str;

    /// Promotes the value to its driver carrier kind.
    fn widen(&self) -> SqlResult<SqlValue>;

    /// Converts a driver value down to this exact type.
    fn narrow(value: SqlValue) -> SqlResult<Self>;
}

fn mismatch(value: &SqlValue, target: &'static str) -> SqlError {
    SqlError::ScanMismatch {
        from: value.kind(),
        target,
    }
}

macro_rules! int_scalar {
    ($($t:ty),* $(,)?) => {
        $(
            impl private::Sealed for $t {}

            impl SqlScalar for $t {
                const TARGET: &'static str = stringify!($t);

                fn widen(&self) -> SqlResult<SqlValue> {
                    Ok(SqlValue::Integer(i64::from(*self)))
                }

                fn narrow(value: SqlValue) -> SqlResult<Self> {
                    match value {
                        SqlValue::Integer(i) => {
                            <$t>::try_from(i).map_err(|_| SqlError::OutOfRange {
                                value: i,
                                target: Self::TARGET,
                            })
                        }
                        other => Err(mismatch(&other, Self::TARGET)),
                    }
                }
            }
        )*
    };
}

int_scalar!(i8, i16, i32, i64, u8, u16, u32);

impl private::Sealed for f64 {}

impl SqlScalar for f64 {
    const TARGET: &'static str = "f64";

    fn widen(&self) -> SqlResult<SqlValue> {
        Ok(SqlValue::Real(*self))
    }

    fn narrow(value: SqlValue) -> SqlResult<Self> {
        match value {
            SqlValue::Real(r) => Ok(r),
            other => Err(mismatch(&other, Self::TARGET)),
        }
    }
}

impl private::Sealed for f32 {}

impl SqlScalar for f32 {
    const TARGET: &'static str = "f32";

    fn widen(&self) -> SqlResult<SqlValue> {
        Ok(SqlValue::Real(f64::from(*self)))
    }

    fn narrow(value: SqlValue) -> SqlResult<Self> {
        match value {
            SqlValue::Real(r) => Ok(r as f32),
            other => Err(mismatch(&other, Self::TARGET)),
        }
    }
}

impl private::Sealed for bool {}

impl SqlScalar for bool {
    const TARGET: &'static str = "bool";

    fn widen(&self) -> SqlResult<SqlValue> {
        Ok(SqlValue::Boolean(*self))
    }

    fn narrow(value: SqlValue) -> SqlResult<Self> {
        match value {
            SqlValue::Boolean(b) => Ok(b),
            // SQLite has no boolean storage class; integer columns carry 0/1.
            SqlValue::Integer(i) => Ok(i != 0),
            other => Err(mismatch(&other, Self::TARGET)),
        }
    }
}

impl private::Sealed for String {}

impl SqlScalar for String {
    const TARGET: &'static str = "string";

    fn widen(&self) -> SqlResult<SqlValue> {
        Ok(SqlValue::Text(self.clone()))
    }

    fn narrow(value: SqlValue) -> SqlResult<Self> {
        match value {
            SqlValue::Text(s) => Ok(s),
            SqlValue::Blob(b) => String::from_utf8(b).map_err(|_| SqlError::ScanMismatch {
                from: "blob",
                target: Self::TARGET,
            }),
            other => Err(mismatch(&other, Self::TARGET)),
        }
    }
}

impl private::Sealed for Vec<u8> {}

impl SqlScalar for Vec<u8> {
    const TARGET: &'static str = "bytes";

    fn widen(&self) -> SqlResult<SqlValue> {
        Ok(SqlValue::Blob(self.clone()))
    }

    fn narrow(value: SqlValue) -> SqlResult<Self> {
        match value {
            SqlValue::Blob(b) => Ok(b),
            SqlValue::Text(s) => Ok(s.into_bytes()),
            other => Err(mismatch(&other, Self::TARGET)),
        }
    }
}

impl private::Sealed for DateTime<Utc> {}

impl SqlScalar for DateTime<Utc> {
    const TARGET: &'static str = "timestamp";

    fn widen(&self) -> SqlResult<SqlValue> {
        Ok(SqlValue::Timestamp(*self))
    }

    fn narrow(value: SqlValue) -> SqlResult<Self> {
        match value {
            SqlValue::Timestamp(ts) => Ok(ts),
            // Datetime columns come back from SQLite as RFC 3339 text.
            SqlValue::Text(s) => DateTime::parse_from_rfc3339(&s)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|_| SqlError::InvalidTimestamp(s)),
            other => Err(mismatch(&other, Self::TARGET)),
        }
    }
}

impl private::Sealed for JsonValue {}

/// Dynamic JSON values are storable only in their scalar forms. Arrays and
/// objects have no driver carrier and fail with [`SqlError::Unsupported`].
impl SqlScalar for JsonValue {
    const TARGET: &'static str = "json";

    fn widen(&self) -> SqlResult<SqlValue> {
        match self {
            JsonValue::Null => Ok(SqlValue::Null),
            JsonValue::Bool(b) => Ok(SqlValue::Boolean(*b)),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(SqlValue::Integer(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(SqlValue::Real(f))
                } else {
                    Err(SqlError::Unsupported {
                        kind: "json number",
                    })
                }
            }
            JsonValue::String(s) => Ok(SqlValue::Text(s.clone())),
            JsonValue::Array(_) => Err(SqlError::Unsupported { kind: "json array" }),
            JsonValue::Object(_) => Err(SqlError::Unsupported {
                kind: "json object",
            }),
        }
    }

    fn narrow(value: SqlValue) -> SqlResult<Self> {
        match value {
            SqlValue::Null => Ok(JsonValue::Null),
            SqlValue::Integer(i) => Ok(JsonValue::from(i)),
            SqlValue::Real(r) => serde_json::Number::from_f64(r)
                .map(JsonValue::Number)
                .ok_or(SqlError::ScanMismatch {
                    from: "real",
                    target: Self::TARGET,
                }),
            SqlValue::Boolean(b) => Ok(JsonValue::Bool(b)),
            SqlValue::Text(s) => Ok(JsonValue::String(s)),
            SqlValue::Blob(b) => String::from_utf8(b)
                .map(JsonValue::String)
                .map_err(|_| SqlError::ScanMismatch {
                    from: "blob",
                    target: Self::TARGET,
                }),
            SqlValue::Timestamp(ts) => Ok(JsonValue::String(ts.to_rfc3339())),
        }
    }
}
