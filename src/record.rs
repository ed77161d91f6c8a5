//! Record shape and identifier assignment.
//!
//! Records are dynamically-shaped JSON objects with no schema beyond one
//! rule: every stored record carries a non-empty `id` string acting as the
//! partition key. [`ensure_id`] enforces that rule at write time.

use serde_json::{Map, Value};
use uuid::Uuid;

/// A dynamically-shaped record: an ordered mapping of field names to JSON
/// values. Field order is preserved so responses echo the caller's layout.
pub type Record = Map<String, Value>;

/// Returns true when a JSON value counts as a missing identifier.
///
/// This is a truthiness check, not a presence check: `null`, `false`, `0`,
/// `0.0`, and `""` are all treated as missing and will be overwritten with a
/// generated identifier. A client that sends `{"id": ""}` gets a fresh id.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Ensures the record carries a truthy `id` field.
///
/// If `id` is absent or falsy, a freshly generated UUID v4 (hyphenated
/// lowercase) is inserted. A truthy `id` passes through unchanged, with no
/// format validation and no uniqueness check against existing items.
pub fn ensure_id(mut record: Record) -> Record {
    let missing = record.get("id").map_or(true, is_falsy);
    if missing {
        record.insert("id".to_string(), Value::String(new_id()));
    }
    record
}

/// Generates a fresh record identifier: a 128-bit random UUID v4 in canonical
/// hyphenated form. Collision probability is negligible; uniqueness is never
/// checked against the table.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}
