//! Lenient decoding for the register. The register is external data, so a
//! malformed entry is dropped on its own instead of failing the whole file.

use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// Deserializer for descriptive text fields.
///
/// | JSON                  | Rust result         |
/// |-----------------------|---------------------|
/// | `"text"`              | `Some("text")`      |
/// | `6011`, `true`        | `Some("6011")`, ... |
/// | `null`, array, object | `None`              |
///
/// Use with `#[serde(default, deserialize_with = "...")]` so absent fields
/// are `None` too.
pub fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

/// Deserializer for a keyed collection of entries. Entries that do not decode
/// are logged and skipped; a value that is not an object at all gives an
/// empty collection.
pub fn deserialize_lenient_map<'de, T, D>(deserializer: D) -> Result<BTreeMap<String, T>, D::Error>
where
    T: DeserializeOwned,
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Object(entries) => Ok(decode_entries(entries)),
        Value::Null => Ok(BTreeMap::new()),
        other => {
            warn!("Ignoring register collection of unexpected type: {}", other);
            Ok(BTreeMap::new())
        }
    }
}

pub fn decode_entries<T, I>(entries: I) -> BTreeMap<String, T>
where
    T: DeserializeOwned,
    I: IntoIterator<Item = (String, Value)>,
{
    entries
        .into_iter()
        .filter_map(|(key, value)| match serde_json::from_value(value) {
            Ok(entry) => Some((key, entry)),
            Err(err) => {
                warn!("Skipping malformed register entry {}: {}", key, err);
                None
            }
        })
        .collect()
}
