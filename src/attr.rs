//! Attribute-value marshalling for the storage engine's item format.
//!
//! The engine stores each item as a map of typed attribute values rather
//! than raw JSON. This module converts between plain JSON records and that
//! encoding: strings become `S`, numbers become `N` (carried as their decimal
//! string, which is how the engine represents numbers on the wire), booleans
//! become `BOOL`, null becomes `NULL`, arrays become `L`, and nested objects
//! become `M`, recursively.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::error::{Error, Result};
use crate::record::Record;

/// A single typed attribute value in the engine's item encoding.
///
/// The serde representation matches the engine's JSON wire tags, e.g.
/// `{"S": "Juan"}`, `{"N": "100"}`, `{"NULL": true}`.
///
/// Binary and set variants exist in the engine but are unreachable from JSON
/// input, so they are not modeled here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    /// String.
    #[serde(rename = "S")]
    S(String),
    /// Number, carried as its decimal string representation.
    #[serde(rename = "N")]
    N(String),
    /// Boolean.
    #[serde(rename = "BOOL")]
    Bool(bool),
    /// Null. The engine encodes null as `{"NULL": true}`.
    #[serde(rename = "NULL")]
    Null(bool),
    /// List of attribute values.
    #[serde(rename = "L")]
    L(Vec<AttributeValue>),
    /// Nested map of attribute values.
    #[serde(rename = "M")]
    M(BTreeMap<String, AttributeValue>),
}

/// One persisted item: the record's fields in attribute-value form.
///
/// The engine does not preserve attribute order, so a plain ordered map by
/// field name is used.
pub type Item = BTreeMap<String, AttributeValue>;

/// Converts a JSON value into the engine's attribute encoding.
pub fn marshal(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::Array(items) => AttributeValue::L(items.iter().map(marshal).collect()),
        Value::Object(fields) => AttributeValue::M(
            fields
                .iter()
                .map(|(name, field)| (name.clone(), marshal(field)))
                .collect(),
        ),
    }
}

/// Converts an attribute value back into plain JSON.
///
/// # Errors
///
/// Returns an encoding error if a stored `N` payload is not a valid decimal
/// number.
pub fn unmarshal(attr: &AttributeValue) -> Result<Value> {
    match attr {
        AttributeValue::S(s) => Ok(Value::String(s.clone())),
        AttributeValue::N(n) => {
            let number = n.parse::<Number>().map_err(|e| {
                Error::Encoding(format!("invalid number attribute {:?}: {}", n, e))
            })?;
            Ok(Value::Number(number))
        }
        AttributeValue::Bool(b) => Ok(Value::Bool(*b)),
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::L(items) => Ok(Value::Array(
            items.iter().map(unmarshal).collect::<Result<Vec<_>>>()?,
        )),
        AttributeValue::M(fields) => {
            let mut record = Record::new();
            for (name, field) in fields {
                record.insert(name.clone(), unmarshal(field)?);
            }
            Ok(Value::Object(record))
        }
    }
}

/// Marshals a whole record into an item.
pub fn marshal_item(record: &Record) -> Item {
    record
        .iter()
        .map(|(name, field)| (name.clone(), marshal(field)))
        .collect()
}

/// Unmarshals a whole item back into a record.
pub fn unmarshal_item(item: &Item) -> Result<Record> {
    let mut record = Record::new();
    for (name, attr) in item {
        record.insert(name.clone(), unmarshal(attr)?);
    }
    Ok(record)
}
