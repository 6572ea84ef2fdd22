//! Nullable value container for JSON and SQL boundaries.
//!
//! This crate defines [`Nullable<T>`], a container that is either a present
//! value of `T` or null, with the guarantee that a null container always
//! holds `T::default()` — no stale data survives clearing.
//!
//! A `Nullable` field serializes to JSON `null` when absent and to `T`'s own
//! representation when present, so it drops into any serde-derived struct.
//! Alternate representations for present values (date-only timestamps,
//! millisecond timestamps) are provided as per-field codecs in [`codec`]
//! rather than process-wide configuration.
//!
//! Database scan/bind support lives in the companion `nullkit-sql` crate,
//! which restricts `T` to the scalar kinds SQL drivers can carry. There is
//! no such restriction here: `T` may be an aggregate, or another `Nullable`.

pub mod codec;
mod nullable;

pub use nullable::Nullable;
