//! # mdxld-yaml
//!
//! YAML-LD frontmatter normalization.
//!
//! Frontmatter keys fall into two buckets, decided by their first character:
//!
//! - **linked-data keys** start with `$` or `@` (`$type`, `@context`, ...)
//! - **plain keys** are everything else (`title`, `description`, ...)
//!
//! [`normalize`] rewrites every linked-data key to a single canonical prefix
//! ([`LdPrefix`]), collects plain keys under `frontmatter`, and checks that a
//! type, a title and a description are all present.
//!
//! This crate knows nothing about markdown; it works on the raw text of a
//! frontmatter block or on an already-deserialized [`RawFrontmatter`].
//!
//! ## Example
//!
//! ```rust
//! use mdxld_yaml::{LdPrefix, parse_yaml_ld};
//!
//! let content = r#"
//! "@type": https://schema.org/Article
//! title: Hello
//! description: A greeting
//! "#;
//!
//! let data = parse_yaml_ld(content, LdPrefix::Dollar).unwrap();
//! assert_eq!(data.ld_type(), Some("https://schema.org/Article"));
//! assert!(data.linked_data.contains_key("$type"));
//! assert!(data.frontmatter.contains_key("title"));
//! ```

mod data;
mod deserialize;
mod error;
mod normalize;
mod prefix;

pub use data::{LD_KEYWORDS, YamlLdData};
pub use deserialize::{RawFrontmatter, deserialize};
pub use error::{DeserializeError, Error, Result, ValidationError};
pub use normalize::{REQUIRED_PLAIN_FIELDS, find_prefix_collisions, normalize};
pub use prefix::LdPrefix;

/// Deserialize a frontmatter block and normalize it in one step.
///
/// # Errors
///
/// Returns [`Error::Deserialize`] when the text is not a YAML mapping, and
/// [`Error::Validation`] when required fields are missing.
pub fn parse_yaml_ld(content: &str, prefix: LdPrefix) -> Result<YamlLdData> {
    let raw = deserialize(content)?;
    Ok(normalize(raw, prefix)?)
}
