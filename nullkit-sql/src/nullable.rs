//! Bind and scan operations for nullable fields.

use crate::{SqlResult, SqlScalar, SqlValue};
use nullkit::Nullable;
use tracing::trace;

/// Database-facing operations for [`Nullable`] fields.
///
/// Implemented for every `Nullable<T>` whose `T` is a storable scalar.
pub trait SqlNullable {
    /// Converts the container to a driver value.
    ///
    /// A null container always produces [`SqlValue::Null`], without
    /// consulting the value kind — absence short-circuits the type check.
    fn to_sql_value(&self) -> SqlResult<SqlValue>;

    /// Replaces the container's state with a driver value.
    ///
    /// [`SqlValue::Null`] clears the container. On a conversion failure the
    /// container is left null — never partially populated — and the error
    /// is returned.
    fn scan_sql_value(&mut self, src: SqlValue) -> SqlResult<()>;
}

impl<T: SqlScalar + Default> SqlNullable for Nullable<T> {
    fn to_sql_value(&self) -> SqlResult<SqlValue> {
        match self.checked() {
            Some(value) => value.widen(),
            None => Ok(SqlValue::Null),
        }
    }

    fn scan_sql_value(&mut self, src: SqlValue) -> SqlResult<()> {
        if src.is_null() {
            self.set_null();
            return Ok(());
        }

        match T::narrow(src) {
            Ok(value) => {
                self.set_value(value);
                Ok(())
            }
            Err(err) => {
                trace!(ty = T::TARGET, %err, "scan failed, container cleared");
                self.set_null();
                Err(err)
            }
        }
    }
}
