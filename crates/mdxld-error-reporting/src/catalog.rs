//! Error code catalog and lookup.
//!
//! This module maps error codes (like "MDX-1-1") to their metadata (title,
//! message template, docs URL, etc.). Codes are grouped by subsystem:
//!
//! - `MDX-0-*`: internal
//! - `MDX-1-*`: frontmatter

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const DOCS_BASE: &str = "https://mdxld.org/docs/errors";

/// Metadata for an error code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorCodeInfo {
    /// Subsystem name (e.g., "internal", "frontmatter")
    pub subsystem: String,

    /// Short title for the error
    pub title: String,

    /// Default message template (may include placeholders)
    pub message_template: String,

    /// URL to documentation (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs_url: Option<String>,

    /// When this error was introduced (version)
    pub since_version: String,
}

fn entry(code: &str, subsystem: &str, title: &str, template: &str) -> (String, ErrorCodeInfo) {
    (
        code.to_string(),
        ErrorCodeInfo {
            subsystem: subsystem.to_string(),
            title: title.to_string(),
            message_template: template.to_string(),
            docs_url: Some(format!("{}/{}", DOCS_BASE, code)),
            since_version: "0.1.0".to_string(),
        },
    )
}

/// Global error catalog, built on first access.
pub static ERROR_CATALOG: Lazy<HashMap<String, ErrorCodeInfo>> = Lazy::new(|| {
    HashMap::from([
        entry(
            "MDX-0-1",
            "internal",
            "Internal Error",
            "An internal error occurred. This is a bug in mdxld.",
        ),
        entry(
            "MDX-1-1",
            "frontmatter",
            "Missing required frontmatter",
            "The document has no YAML frontmatter block.",
        ),
        entry(
            "MDX-1-2",
            "frontmatter",
            "Invalid frontmatter YAML",
            "The frontmatter block could not be read as a YAML mapping: {error}",
        ),
        entry(
            "MDX-1-3",
            "frontmatter",
            "Missing required frontmatter fields",
            "Missing required frontmatter fields: {fields}",
        ),
        entry(
            "MDX-1-4",
            "frontmatter",
            "Linked-data prefix collision",
            "More than one key normalizes to `{key}`; the later one is kept.",
        ),
    ])
});

/// Look up error code information.
///
/// Returns `None` if the error code is not found in the catalog.
///
/// # Example
///
/// ```
/// use mdxld_error_reporting::catalog::get_error_info;
///
/// if let Some(info) = get_error_info("MDX-1-1") {
///     println!("Error: {} - {}", info.title, info.message_template);
/// }
/// ```
pub fn get_error_info(code: &str) -> Option<&ErrorCodeInfo> {
    ERROR_CATALOG.get(code)
}

/// Get documentation URL for an error code.
///
/// Returns `None` if the error code is not found or has no documentation URL.
pub fn get_docs_url(code: &str) -> Option<&str> {
    ERROR_CATALOG
        .get(code)
        .and_then(|info| info.docs_url.as_deref())
}

/// Get the subsystem name for an error code.
///
/// # Example
///
/// ```
/// use mdxld_error_reporting::catalog::get_subsystem;
///
/// assert_eq!(get_subsystem("MDX-1-3"), Some("frontmatter"));
/// ```
pub fn get_subsystem(code: &str) -> Option<&str> {
    ERROR_CATALOG.get(code).map(|info| info.subsystem.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_loads() {
        assert!(!ERROR_CATALOG.is_empty());
    }

    #[test]
    fn test_internal_error_exists() {
        let info = get_error_info("MDX-0-1").unwrap();
        assert_eq!(info.subsystem, "internal");
        assert_eq!(info.title, "Internal Error");
        assert!(info.docs_url.is_some());
    }

    #[test]
    fn test_frontmatter_codes() {
        for code in ["MDX-1-1", "MDX-1-2", "MDX-1-3", "MDX-1-4"] {
            assert_eq!(get_subsystem(code), Some("frontmatter"), "{code}");
        }
    }

    #[test]
    fn test_get_docs_url() {
        let url = get_docs_url("MDX-1-3").unwrap();
        assert!(url.starts_with("https://mdxld.org/docs/errors/"));
        assert!(url.ends_with("MDX-1-3"));
    }

    #[test]
    fn test_nonexistent_code() {
        assert!(get_error_info("MDX-999-999").is_none());
        assert!(get_docs_url("MDX-999-999").is_none());
        assert_eq!(get_subsystem("MDX-999-999"), None);
    }
}
