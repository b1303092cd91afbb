//! Linked-data key normalization and required-field validation.

use hashlink::LinkedHashMap;

use crate::data::YamlLdData;
use crate::deserialize::RawFrontmatter;
use crate::error::ValidationError;
use crate::prefix::LdPrefix;

/// Plain fields every document must declare.
pub const REQUIRED_PLAIN_FIELDS: [&str; 2] = ["title", "description"];

/// Identifier of the required linked-data field.
const REQUIRED_LD_IDENTIFIER: &str = "type";

/// Split frontmatter into linked-data and plain entries and validate it.
///
/// Keys starting with `$` or `@` are rewritten to `prefix` and kept at the
/// top level; all other keys go to `frontmatter`. Values are never touched.
/// When two keys rewrite to the same canonical key, the one that comes later
/// in `raw` wins.
///
/// # Errors
///
/// Returns a [`ValidationError`] naming every missing field when the type,
/// `title` or `description` is absent. The type field is reported with the
/// canonical prefix.
pub fn normalize(raw: RawFrontmatter, prefix: LdPrefix) -> Result<YamlLdData, ValidationError> {
    let mut linked_data = LinkedHashMap::new();
    let mut frontmatter = LinkedHashMap::new();

    for (key, value) in raw {
        match prefix.canonicalize(&key) {
            Some(canonical) => {
                if linked_data.insert(canonical.clone(), value).is_some() {
                    tracing::debug!(key = %key, canonical = %canonical, "linked-data key overwritten");
                }
            }
            None => {
                frontmatter.insert(key, value);
            }
        }
    }

    let type_key = prefix.key(REQUIRED_LD_IDENTIFIER);
    let mut missing = Vec::new();
    if !linked_data.contains_key(&type_key) {
        missing.push(type_key);
    }
    for field in REQUIRED_PLAIN_FIELDS {
        if !frontmatter.contains_key(field) {
            missing.push(field.to_string());
        }
    }

    if !missing.is_empty() {
        return Err(ValidationError::new(missing));
    }

    Ok(YamlLdData {
        linked_data,
        frontmatter,
        prefix,
    })
}

/// Canonical keys that more than one key in `raw` normalizes to.
///
/// Each collision is reported once, in the order its first spelling appears.
pub fn find_prefix_collisions(raw: &RawFrontmatter, prefix: LdPrefix) -> Vec<String> {
    let mut seen = LinkedHashMap::<String, usize>::new();
    for canonical in raw.keys().filter_map(|key| prefix.canonicalize(key)) {
        *seen.entry(canonical).or_insert(0) += 1;
    }
    seen.into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(key, _)| key)
        .collect()
}
