//! The normalized YAML-LD record.

use hashlink::LinkedHashMap;
use serde::Serialize;
use serde_yaml::Value;

use crate::prefix::{LdPrefix, identifier};

/// YAML-LD keywords with a defined meaning, without their prefix.
pub const LD_KEYWORDS: &[&str] = &[
    "type", "context", "id", "base", "vocab", "language", "list", "set", "reverse",
];

/// Frontmatter after normalization.
///
/// Linked-data entries sit at the top level under their canonical key;
/// every other key lives under `frontmatter`. Serializes as
/// `{"$type": ..., "frontmatter": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YamlLdData {
    /// Linked-data entries keyed by canonical key (`$type`, `$context`, ...)
    #[serde(flatten)]
    pub linked_data: LinkedHashMap<String, Value>,

    /// Plain metadata, verbatim
    pub frontmatter: LinkedHashMap<String, Value>,

    /// Prefix every linked-data key was normalized to
    #[serde(skip)]
    pub prefix: LdPrefix,
}

impl YamlLdData {
    /// Look up a linked-data value by bare identifier (`"type"`, not `"$type"`).
    pub fn get_ld(&self, identifier: &str) -> Option<&Value> {
        self.linked_data.get(&self.prefix.key(identifier))
    }

    /// The `type` entry, when it is a string.
    pub fn ld_type(&self) -> Option<&str> {
        self.get_ld("type").and_then(Value::as_str)
    }

    /// The `context` entry, when it is a string.
    pub fn context(&self) -> Option<&str> {
        self.get_ld("context").and_then(Value::as_str)
    }

    /// The `id` entry, when it is a string.
    pub fn id(&self) -> Option<&str> {
        self.get_ld("id").and_then(Value::as_str)
    }

    /// Linked-data identifiers that are not standard YAML-LD keywords.
    pub fn custom_identifiers(&self) -> Vec<&str> {
        self.linked_data
            .keys()
            .filter_map(|key| identifier(key))
            .filter(|id| !LD_KEYWORDS.contains(id))
            .collect()
    }

    /// Render as JSON.
    ///
    /// # Errors
    ///
    /// Fails when a nested value has no JSON form, such as a mapping with
    /// non-string keys.
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
