//! rusqlite bindings for [`SqlValue`].
//!
//! SQLite exchanges values in five storage classes. Booleans bind as 0/1
//! integers and timestamps as RFC 3339 text; both are recovered by
//! [`SqlScalar::narrow`](crate::SqlScalar::narrow) at the typed boundary.

use crate::SqlValue;
use chrono::SecondsFormat;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, Value, ValueRef};

impl ToSql for SqlValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Self::Null => ToSqlOutput::Owned(Value::Null),
            Self::Integer(i) => ToSqlOutput::Owned(Value::Integer(*i)),
            Self::Real(r) => ToSqlOutput::Owned(Value::Real(*r)),
            Self::Boolean(b) => ToSqlOutput::Owned(Value::Integer(i64::from(*b))),
            Self::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
            Self::Blob(b) => ToSqlOutput::Borrowed(ValueRef::Blob(b)),
            // AutoSi keeps exactly the sub-second digits the value carries,
            // so stored timestamps parse back to the identical instant.
            Self::Timestamp(ts) => ToSqlOutput::Owned(Value::Text(
                ts.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            )),
        })
    }
}

impl FromSql for SqlValue {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        Ok(match value {
            ValueRef::Null => Self::Null,
            ValueRef::Integer(i) => Self::Integer(i),
            ValueRef::Real(r) => Self::Real(r),
            ValueRef::Text(t) => {
                let s = std::str::from_utf8(t).map_err(|e| FromSqlError::Other(Box::new(e)))?;
                Self::Text(s.to_owned())
            }
            ValueRef::Blob(b) => Self::Blob(b.to_vec()),
        })
    }
}
