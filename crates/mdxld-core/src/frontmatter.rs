/*
 * frontmatter.rs
 * Copyright (c) 2025 mdxld contributors
 *
 * Frontmatter block lookup.
 */

//! Locating the YAML frontmatter block in a parsed document.
//!
//! comrak keeps frontmatter as a single top-level node holding the raw text,
//! delimiters included. The locator finds that node and strips the
//! delimiters; it never parses the payload.

use comrak::nodes::{AstNode, NodeValue};

/// Line that opens and closes a YAML frontmatter block.
pub const YAML_DELIMITER: &str = "---";

/// The raw payload of a YAML frontmatter block and where it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontmatterBlock {
    /// Text between the delimiter lines, unparsed
    pub content: String,
    /// 1-based line of the opening delimiter
    pub line: usize,
    pub column: usize,
}

/// Find the first YAML frontmatter block among the direct children of `root`.
///
/// Only top-level nodes are considered, and only blocks opened with
/// [`YAML_DELIMITER`]. Later frontmatter blocks are ignored.
pub fn locate<'a>(root: &'a AstNode<'a>) -> Option<FrontmatterBlock> {
    root.children().find_map(|node| {
        let ast = node.data.borrow();
        let block = match &ast.value {
            NodeValue::FrontMatter(raw) => yaml_payload(raw).map(|content| FrontmatterBlock {
                content,
                line: ast.sourcepos.start.line,
                column: ast.sourcepos.start.column,
            }),
            _ => None,
        };
        block
    })
}

/// Strip the delimiter lines from raw frontmatter text.
///
/// Returns `None` when the text is not a `---` block. Anything after the
/// closing delimiter (comrak keeps trailing blank lines) is dropped.
pub fn yaml_payload(raw: &str) -> Option<String> {
    let mut lines = raw.lines();
    if lines.next()?.trim_end() != YAML_DELIMITER {
        return None;
    }

    let body: Vec<&str> = lines.collect();
    let close = body
        .iter()
        .rposition(|line| line.trim_end() == YAML_DELIMITER)?;

    let mut content = body[..close].join("\n");
    if close > 0 {
        content.push('\n');
    }
    Some(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use comrak::{Arena, Options, parse_document};

    fn set_delimiter(options: &mut Options, delimiter: &str) {
        options.extension.front_matter_delimiter = Some(delimiter.to_string());
    }

    #[test]
    fn test_payload_strips_delimiters() {
        assert_eq!(
            yaml_payload("---\ntitle: A\n---\n\n").as_deref(),
            Some("title: A\n")
        );
    }

    #[test]
    fn test_payload_empty_block() {
        assert_eq!(yaml_payload("---\n---\n").as_deref(), Some(""));
    }

    #[test]
    fn test_payload_rejects_other_delimiters() {
        assert!(yaml_payload("+++\ntitle = 'A'\n+++\n").is_none());
        assert!(yaml_payload("---\nunterminated\n").is_none());
    }

    #[test]
    fn test_locate_first_block() {
        let arena = Arena::new();
        let mut opts = Options::default();
        set_delimiter(&mut opts, YAML_DELIMITER);
        let root = parse_document(&arena, "---\ntitle: Hello\n---\n\n# Body\n", &opts);

        let block = locate(root).unwrap();
        assert_eq!(block.content, "title: Hello\n");
        assert_eq!(block.line, 1);
    }

    #[test]
    fn test_locate_without_frontmatter() {
        let arena = Arena::new();
        let mut opts = Options::default();
        set_delimiter(&mut opts, YAML_DELIMITER);
        let root = parse_document(&arena, "# Just a heading\n", &opts);
        assert!(locate(root).is_none());
    }

    #[test]
    fn test_locate_ignores_non_yaml_blocks() {
        let arena = Arena::new();
        let mut opts = Options::default();
        set_delimiter(&mut opts, "+++");
        let root = parse_document(&arena, "+++\ntitle = 'A'\n+++\n\nBody\n", &opts);
        assert!(locate(root).is_none());
    }

    #[test]
    fn test_locate_returns_only_the_first_of_two() {
        let arena = Arena::new();
        let mut opts = Options::default();
        set_delimiter(&mut opts, YAML_DELIMITER);
        let first = parse_document(&arena, "---\nfirst: 1\n---\n\nBody\n", &opts);
        let second = parse_document(&arena, "---\nsecond: 2\n---\n", &opts);

        let extra = second.first_child().unwrap();
        assert!(matches!(
            extra.data.borrow().value,
            NodeValue::FrontMatter(_)
        ));
        first.append(extra);

        let frontmatter_nodes = first
            .children()
            .filter(|n| matches!(n.data.borrow().value, NodeValue::FrontMatter(_)))
            .count();
        assert_eq!(frontmatter_nodes, 2);
        assert_eq!(locate(first).unwrap().content, "first: 1\n");
    }

    #[test]
    fn test_locate_ignores_nested_blocks() {
        let arena = Arena::new();
        let mut opts = Options::default();
        set_delimiter(&mut opts, YAML_DELIMITER);
        let doc = parse_document(&arena, "> quoted\n", &opts);
        let donor = parse_document(&arena, "---\nnested: 1\n---\n", &opts);

        let quote = doc.first_child().unwrap();
        quote.append(donor.first_child().unwrap());

        assert!(locate(doc).is_none());
    }
}
