/*
 * yaml_ld.rs
 * Copyright (c) 2025 mdxld contributors
 *
 * YAML-LD frontmatter stage.
 */

//! YAML-LD frontmatter stage.
//!
//! Locates the frontmatter block, normalizes it, and stores the result on the
//! document context. Every failure records a diagnostic before the error is
//! returned, and a failed document never carries a record.

use comrak::nodes::AstNode;
use mdxld_error_reporting::{DiagnosticMessage, DiagnosticMessageBuilder, SourceLocation};
use mdxld_yaml::{
    DeserializeError, LdPrefix, ValidationError, deserialize, find_prefix_collisions, normalize,
};

use crate::Result;
use crate::config::MdxldConfig;
use crate::context::DocumentContext;
use crate::error::MdxldError;
use crate::frontmatter;
use crate::transform::DocumentTransform;

/// Validates the document's frontmatter and attaches it as YAML-LD.
///
/// The tree is never modified; the frontmatter node stays in place and is
/// serialized with the body.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlLdTransform {
    prefix: LdPrefix,
}

impl YamlLdTransform {
    pub fn new(prefix: LdPrefix) -> Self {
        Self { prefix }
    }

    pub fn from_config(config: &MdxldConfig) -> Self {
        Self::new(config.prefix())
    }

    pub fn prefix(&self) -> LdPrefix {
        self.prefix
    }
}

impl DocumentTransform for YamlLdTransform {
    fn name(&self) -> &str {
        "yaml-ld"
    }

    fn transform<'a>(&self, root: &'a AstNode<'a>, ctx: &mut DocumentContext) -> Result<()> {
        let Some(block) = frontmatter::locate(root) else {
            tracing::warn!(document = %ctx.source_name, "No frontmatter found");
            let location = ctx.location(1, 1);
            ctx.add_diagnostic(missing_frontmatter(location));
            return Err(MdxldError::MissingFrontmatter);
        };

        tracing::debug!(
            document = %ctx.source_name,
            line = block.line,
            "Located frontmatter"
        );
        let location = ctx.location(block.line, block.column);

        let raw = match deserialize(&block.content) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(document = %ctx.source_name, error = %err, "Invalid frontmatter");
                ctx.add_diagnostic(invalid_yaml(&err, location));
                return Err(err.into());
            }
        };

        for key in find_prefix_collisions(&raw, self.prefix) {
            tracing::warn!(document = %ctx.source_name, key = %key, "Linked-data prefix collision");
            ctx.add_diagnostic(prefix_collision(&key, location.clone()));
        }

        match normalize(raw, self.prefix) {
            Ok(data) => {
                tracing::debug!(
                    document = %ctx.source_name,
                    ld_type = data.ld_type().unwrap_or_default(),
                    linked_data = data.linked_data.len(),
                    custom = ?data.custom_identifiers(),
                    frontmatter = data.frontmatter.len(),
                    "Attached YAML-LD"
                );
                ctx.data.set_yaml_ld(data);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(document = %ctx.source_name, error = %err, "Frontmatter validation failed");
                ctx.add_diagnostic(missing_fields(&err, location));
                Err(err.into())
            }
        }
    }
}

fn missing_frontmatter(location: SourceLocation) -> DiagnosticMessage {
    DiagnosticMessageBuilder::error("Missing required frontmatter")
        .with_code("MDX-1-1")
        .problem("Documents must start with a YAML frontmatter block")
        .add_hint("Did you forget the opening `---` line?")
        .at_location(location)
        .build()
}

fn invalid_yaml(err: &DeserializeError, location: SourceLocation) -> DiagnosticMessage {
    DiagnosticMessageBuilder::error("Invalid frontmatter YAML")
        .with_code("MDX-1-2")
        .problem("Frontmatter must be a YAML mapping of keys to values")
        .add_detail(err.to_string())
        .at_location(location)
        .build()
}

fn prefix_collision(key: &str, location: SourceLocation) -> DiagnosticMessage {
    DiagnosticMessageBuilder::warning("Linked-data prefix collision")
        .with_code("MDX-1-4")
        .problem(format!(
            "More than one frontmatter key normalizes to `{}`",
            key
        ))
        .add_info("The value of the later key is kept")
        .add_hint("Remove the `$` or `@` spelling you don't need?")
        .at_location(location)
        .build()
}

fn missing_fields(err: &ValidationError, location: SourceLocation) -> DiagnosticMessage {
    let mut builder = DiagnosticMessageBuilder::error(err.to_string())
        .with_code("MDX-1-3")
        .problem("Frontmatter must declare a type, a title and a description");
    for field in err.missing_fields() {
        builder = builder.add_detail(format!("`{}` is missing", field));
    }
    builder.at_location(location).build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::DialectSet;
    use comrak::{Arena, Options, parse_document};
    use mdxld_error_reporting::DiagnosticKind;

    fn run(source: &str, prefix: LdPrefix) -> (Result<()>, DocumentContext) {
        let arena = Arena::new();
        let mut options = Options::default();
        DialectSet::new(true).configure(&mut options);
        let root = parse_document(&arena, source, &options);

        let mut ctx = DocumentContext::new("doc.md");
        let result = YamlLdTransform::new(prefix).transform(root, &mut ctx);
        (result, ctx)
    }

    #[test]
    fn test_attaches_record() {
        let (result, ctx) = run(
            "---\n$type: Doc\ntitle: T\ndescription: D\n---\n\nBody\n",
            LdPrefix::Dollar,
        );
        result.unwrap();

        let data = ctx.data.yaml_ld().unwrap();
        assert_eq!(data.ld_type(), Some("Doc"));
        assert!(data.frontmatter.contains_key("title"));
        assert!(ctx.diagnostics.is_empty());
    }

    #[test]
    fn test_at_prefix_preference() {
        let (result, ctx) = run(
            "---\n$type: Doc\n$context: https://schema.org\ntitle: T\ndescription: D\n---\n",
            LdPrefix::At,
        );
        result.unwrap();

        let data = ctx.data.yaml_ld().unwrap();
        assert!(data.linked_data.contains_key("@type"));
        assert!(data.linked_data.contains_key("@context"));
        assert!(!data.linked_data.contains_key("$type"));
    }

    #[test]
    fn test_missing_frontmatter() {
        let (result, ctx) = run("# No frontmatter\n", LdPrefix::Dollar);

        assert!(matches!(result, Err(MdxldError::MissingFrontmatter)));
        assert!(ctx.data.is_empty());
        assert_eq!(ctx.diagnostics.len(), 1);
        assert_eq!(ctx.diagnostics[0].code.as_deref(), Some("MDX-1-1"));
        assert_eq!(ctx.diagnostics[0].title, "Missing required frontmatter");
    }

    #[test]
    fn test_missing_fields() {
        let (result, ctx) = run("---\ntitle: T\n---\n", LdPrefix::Dollar);

        let err = result.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required frontmatter fields: $type, description"
        );
        assert!(ctx.data.is_empty());

        let diagnostic = &ctx.diagnostics[0];
        assert_eq!(diagnostic.code.as_deref(), Some("MDX-1-3"));
        assert_eq!(diagnostic.title, err.to_string());
        assert_eq!(diagnostic.details.len(), 2);
        assert_eq!(diagnostic.location.as_ref().map(|l| l.line), Some(1));
    }

    #[test]
    fn test_missing_fields_use_preferred_prefix() {
        let (result, _ctx) = run("---\ntitle: T\ndescription: D\n---\n", LdPrefix::At);
        assert_eq!(
            result.unwrap_err().to_string(),
            "Missing required frontmatter fields: @type"
        );
    }

    #[test]
    fn test_comment_only_frontmatter_reports_all_fields() {
        let (result, _ctx) = run("---\n# nothing yet\n---\n\nBody\n", LdPrefix::Dollar);
        assert_eq!(
            result.unwrap_err().missing_fields(),
            Some(
                &[
                    "$type".to_string(),
                    "title".to_string(),
                    "description".to_string()
                ][..]
            )
        );
    }

    #[test]
    fn test_invalid_yaml() {
        let (result, ctx) = run("---\ntitle: [unclosed\n---\n", LdPrefix::Dollar);

        assert!(matches!(result, Err(MdxldError::Deserialize(_))));
        assert_eq!(ctx.diagnostics[0].code.as_deref(), Some("MDX-1-2"));
        assert!(ctx.data.is_empty());
    }

    #[test]
    fn test_non_mapping_frontmatter() {
        let (result, _ctx) = run("---\n- a\n- b\n---\n", LdPrefix::Dollar);
        assert!(matches!(
            result,
            Err(MdxldError::Deserialize(DeserializeError::NotAMapping { .. }))
        ));
    }

    #[test]
    fn test_prefix_collision_warns_and_keeps_later_value() {
        let (result, ctx) = run(
            "---\n$type: First\n\"@type\": Second\ntitle: T\ndescription: D\n---\n",
            LdPrefix::Dollar,
        );
        result.unwrap();

        assert_eq!(ctx.data.yaml_ld().unwrap().ld_type(), Some("Second"));
        assert_eq!(ctx.diagnostics.len(), 1);
        assert_eq!(ctx.diagnostics[0].kind, DiagnosticKind::Warning);
        assert_eq!(ctx.diagnostics[0].code.as_deref(), Some("MDX-1-4"));
        assert!(!ctx.has_errors());
    }

    #[test]
    fn test_tree_is_untouched() {
        let arena = Arena::new();
        let mut options = Options::default();
        DialectSet::new(true).configure(&mut options);
        let source = "---\n$type: Doc\ntitle: T\ndescription: D\n---\n\n# Heading\n\nText\n";
        let root = parse_document(&arena, source, &options);
        let before = root.descendants().count();

        let mut ctx = DocumentContext::new("doc.md");
        YamlLdTransform::default().transform(root, &mut ctx).unwrap();

        assert_eq!(root.descendants().count(), before);
        assert!(frontmatter::locate(root).is_some());
    }
}
