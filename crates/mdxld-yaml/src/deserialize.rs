//! Frontmatter text to key-value mapping.

use hashlink::LinkedHashMap;
use serde_yaml::{Mapping, Value};

use crate::error::DeserializeError;

/// Frontmatter as an ordered mapping of string keys to YAML values.
///
/// Order is the order keys appear in the document.
pub type RawFrontmatter = LinkedHashMap<String, Value>;

/// Deserialize the text of a frontmatter block.
///
/// An empty block yields an empty mapping. Scalar keys (numbers, booleans,
/// null) are converted to their plain-text spelling.
///
/// # Errors
///
/// - [`DeserializeError::Syntax`] for invalid YAML, unchanged from `serde_yaml`
/// - [`DeserializeError::NotAMapping`] when the top level is a scalar or sequence
/// - [`DeserializeError::UnsupportedKey`] for mapping or sequence keys
pub fn deserialize(content: &str) -> Result<RawFrontmatter, DeserializeError> {
    if content.trim().is_empty() {
        return Ok(RawFrontmatter::new());
    }

    match serde_yaml::from_str::<Value>(content)? {
        Value::Null => Ok(RawFrontmatter::new()),
        Value::Mapping(mapping) => from_mapping(mapping),
        other => Err(DeserializeError::NotAMapping {
            found: value_kind(&other),
        }),
    }
}

fn from_mapping(mapping: Mapping) -> Result<RawFrontmatter, DeserializeError> {
    let mut raw = RawFrontmatter::with_capacity(mapping.len());
    for (key, value) in mapping {
        raw.insert(key_to_string(key)?, value);
    }
    Ok(raw)
}

fn key_to_string(key: Value) -> Result<String, DeserializeError> {
    match key {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok("null".to_string()),
        other => Err(DeserializeError::UnsupportedKey {
            key: serde_yaml::to_string(&other)
                .map(|s| s.trim_end().to_string())
                .unwrap_or_else(|_| value_kind(&other).to_string()),
        }),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
