//! SQL driver value conversions for `nullkit` nullable fields.
//!
//! A tabular-storage driver exchanges scalars in a small closed set of wire
//! kinds. This crate models that boundary:
//!
//! - [`SqlValue`] — the driver-side value: null, or one of 64-bit integer,
//!   64-bit float, boolean, text, blob, timestamp
//! - [`SqlScalar`] — widening/narrowing conversions between Rust scalar
//!   types and the carrier kinds
//! - [`SqlNullable`] — bind ([`to_sql_value`]) and scan ([`scan_sql_value`])
//!   operations on `Nullable<T>` fields
//!
//! `SqlValue` also implements rusqlite's `ToSql`/`FromSql`, so it can be
//! bound as a statement parameter and read from a row directly.
//!
//! Integer and float columns always travel as their 64-bit carrier kind
//! regardless of the declared Rust type; the exact width is recovered on
//! scan with a range check. Text and blob are cross-convertible, because
//! drivers routinely return textual columns as raw bytes.
//!
//! [`to_sql_value`]: SqlNullable::to_sql_value
//! [`scan_sql_value`]: SqlNullable::scan_sql_value

mod error;
mod nullable;
mod scalar;
mod sqlite;
mod value;

pub use error::{SqlError, SqlResult};
pub use nullable::SqlNullable;
pub use scalar::SqlScalar;
pub use value::SqlValue;
