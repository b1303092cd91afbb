//! Error types for YAML-LD deserialization and validation.

use thiserror::Error;

/// Result type alias for mdxld-yaml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while turning frontmatter text into a [`crate::RawFrontmatter`].
#[derive(Debug, Error)]
pub enum DeserializeError {
    /// YAML syntax error, exactly as reported by `serde_yaml`
    #[error(transparent)]
    Syntax(#[from] serde_yaml::Error),

    /// The block parsed, but its top level is not a mapping
    #[error("Frontmatter must be a mapping of keys to values, found a {found}")]
    NotAMapping { found: &'static str },

    /// A key that has no plain-text form (a mapping or sequence used as a key)
    #[error("Unsupported frontmatter key: {key}")]
    UnsupportedKey { key: String },
}

/// Required frontmatter fields are absent.
///
/// `missing` lists every absent field by its public name, in the fixed order
/// type, `title`, `description`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Missing required frontmatter fields: {}", .missing.join(", "))]
pub struct ValidationError {
    pub missing: Vec<String>,
}

impl ValidationError {
    pub fn new(missing: Vec<String>) -> Self {
        Self { missing }
    }

    /// Names of the missing fields.
    pub fn missing_fields(&self) -> &[String] {
        &self.missing
    }
}

/// Any failure from [`crate::parse_yaml_ld`].
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Deserialize(#[from] DeserializeError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_lists_all_fields() {
        let err = ValidationError::new(vec![
            "$type".to_string(),
            "title".to_string(),
            "description".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Missing required frontmatter fields: $type, title, description"
        );
        assert_eq!(err.missing_fields().len(), 3);
    }

    #[test]
    fn test_not_a_mapping_message() {
        let err = DeserializeError::NotAMapping { found: "sequence" };
        assert!(err.to_string().contains("found a sequence"));
    }

    #[test]
    fn test_syntax_error_is_transparent() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("a: [b").unwrap_err();
        let expected = yaml_err.to_string();
        let err: Error = DeserializeError::from(yaml_err).into();
        assert_eq!(err.to_string(), expected);
    }
}
