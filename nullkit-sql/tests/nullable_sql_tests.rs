use chrono::{DateTime, Utc};
use nullkit::Nullable;
use nullkit_sql::{SqlError, SqlNullable, SqlValue};
use serde_json::json;

// ── Binding ──────────────────────────────────────────────────────

#[test]
fn absent_binds_to_null() {
    let n = Nullable::<i64>::null();
    assert_eq!(n.to_sql_value().unwrap(), SqlValue::Null);
}

#[test]
fn present_binds_widened() {
    assert_eq!(
        Nullable::from_value(7i16).to_sql_value().unwrap(),
        SqlValue::Integer(7)
    );
    assert_eq!(
        Nullable::from_value(0.25f32).to_sql_value().unwrap(),
        SqlValue::Real(0.25)
    );
    assert_eq!(
        Nullable::from_value("s".to_string()).to_sql_value().unwrap(),
        SqlValue::Text("s".to_string())
    );
}

#[test]
fn absence_short_circuits_kind_checking() {
    // A null dynamic container binds cleanly even though its kind could
    // never be stored when present.
    let n = Nullable::<serde_json::Value>::null();
    assert_eq!(n.to_sql_value().unwrap(), SqlValue::Null);
}

#[test]
fn present_aggregate_fails_to_bind() {
    let n = Nullable::from_value(json!({"nested": [1, 2, 3]}));
    assert_eq!(
        n.to_sql_value().unwrap_err(),
        SqlError::Unsupported {
            kind: "json object"
        }
    );
}

// ── Scanning ─────────────────────────────────────────────────────

#[test]
fn scan_null_clears_previously_present() {
    let mut n = Nullable::from_value(42i64);
    n.scan_sql_value(SqlValue::Null).unwrap();
    assert!(n.is_null());
    assert_eq!(n.value_or_zero(), 0);
}

#[test]
fn scan_value_sets_present() {
    let mut n = Nullable::<i32>::null();
    n.scan_sql_value(SqlValue::Integer(123)).unwrap();
    assert_eq!(n.checked(), Some(&123));
}

#[test]
fn scan_blob_into_string_container() {
    let mut n = Nullable::<String>::null();
    n.scan_sql_value(SqlValue::Blob(b"abc".to_vec())).unwrap();
    assert_eq!(n.checked(), Some(&"abc".to_string()));
}

#[test]
fn scan_mismatch_forces_container_null() {
    let mut n = Nullable::from_value(42i64);
    let err = n.scan_sql_value(SqlValue::Real(1.5)).unwrap_err();
    assert_eq!(
        err,
        SqlError::ScanMismatch {
            from: "real",
            target: "i64"
        }
    );
    assert!(n.is_null());
    assert_eq!(n.value_or_zero(), 0);
}

#[test]
fn scan_out_of_range_forces_container_null() {
    let mut n = Nullable::from_value(1i8);
    assert!(n.scan_sql_value(SqlValue::Integer(1000)).is_err());
    assert!(n.is_null());
    assert_eq!(*n.as_raw(), 0);
}

// ── Round-trips per kind ─────────────────────────────────────────

fn roundtrip<T>(value: T) -> Nullable<T>
where
    T: nullkit_sql::SqlScalar + Default + Clone,
{
    let original = Nullable::from_value(value);
    let mut scanned = Nullable::<T>::null();
    scanned
        .scan_sql_value(original.to_sql_value().unwrap())
        .unwrap();
    scanned
}

#[test]
fn integer_boundary_values_roundtrip() {
    for v in [0i64, -1, i64::MAX, i64::MIN] {
        assert_eq!(roundtrip(v).checked(), Some(&v));
    }
}

#[test]
fn narrow_integer_widths_roundtrip() {
    assert_eq!(roundtrip(-128i8).checked(), Some(&-128));
    assert_eq!(roundtrip(u32::MAX).checked(), Some(&u32::MAX));
}

#[test]
fn float_roundtrip() {
    assert_eq!(roundtrip(0.0f64).checked(), Some(&0.0));
    assert_eq!(roundtrip(-2.5f32).checked(), Some(&-2.5));
}

#[test]
fn bool_roundtrip() {
    assert_eq!(roundtrip(true).checked(), Some(&true));
    assert_eq!(roundtrip(false).checked(), Some(&false));
}

#[test]
fn text_and_bytes_roundtrip() {
    assert_eq!(
        roundtrip(String::new()).checked(),
        Some(&String::new())
    );
    assert_eq!(
        roundtrip(b"bytes".to_vec()).checked(),
        Some(&b"bytes".to_vec())
    );
    assert_eq!(roundtrip(Vec::<u8>::new()).checked(), Some(&Vec::new()));
}

#[test]
fn timestamp_roundtrip() {
    let ts = DateTime::from_timestamp_millis(1_689_552_000_123).unwrap();
    assert_eq!(roundtrip(ts).checked(), Some(&ts));
    assert_eq!(
        roundtrip(DateTime::<Utc>::UNIX_EPOCH).checked(),
        Some(&DateTime::UNIX_EPOCH)
    );
}
