//! Per-field codecs for alternate timestamp representations.
//!
//! Each module here pairs a `serialize`/`deserialize` function for use with
//! `#[serde(with = "…")]` on a [`Nullable`] timestamp field:
//!
//! ```
//! use chrono::{DateTime, Utc};
//! use nullkit::Nullable;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Item {
//!     #[serde(with = "nullkit::codec::date_only")]
//!     created: Nullable<DateTime<Utc>>,
//! }
//! ```
//!
//! The codec only replaces the representation of a present value; a null
//! container still encodes as JSON `null` and `null` still decodes to a
//! null container.

/// `Nullable<DateTime<Utc>>` as a quoted `YYYY-MM-DD` literal.
///
/// Decoding yields midnight UTC of the given date, so a value produced by
/// this codec re-encodes to the identical literal.
pub mod date_only {
    use crate::Nullable;
    use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(
        value: &Nullable<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value.checked() {
            Some(ts) => serializer.collect_str(&ts.format(FORMAT)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Nullable<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => {
                let date = NaiveDate::parse_from_str(&raw, FORMAT)
                    .map_err(serde::de::Error::custom)?;
                Ok(Nullable::from_value(
                    date.and_time(NaiveTime::MIN).and_utc(),
                ))
            }
            None => Ok(Nullable::null()),
        }
    }
}

/// `Nullable<DateTime<Utc>>` as integer milliseconds since the Unix epoch.
pub mod unix_millis {
    use crate::Nullable;
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(
        value: &Nullable<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value.checked() {
            Some(ts) => serializer.serialize_i64(ts.timestamp_millis()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Nullable<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<i64>::deserialize(deserializer)? {
            Some(ms) => DateTime::from_timestamp_millis(ms)
                .map(Nullable::from_value)
                .ok_or_else(|| {
                    serde::de::Error::custom(format!("timestamp out of range: {ms}"))
                }),
            None => Ok(Nullable::null()),
        }
    }
}
