/*
 * mdx.rs
 * Copyright (c) 2025 mdxld contributors
 *
 * Verbatim passthrough for MDX module statements and JSX blocks.
 */

//! Verbatim passthrough for MDX module statements and JSX blocks.
//!
//! CommonMark has no notion of `import`/`export` statements or JSX elements
//! with expression attributes, so the parser reads most of them as
//! paragraphs. Written back as paragraphs they lose their indentation and
//! gain escapes (`<Card>` becomes `\<Card\>`). Before serializing, each such
//! top-level paragraph is swapped for a raw HTML block holding its source
//! lines, which the writer emits unchanged.

use comrak::nodes::{AstNode, NodeHtmlBlock, NodeValue};
use once_cell::sync::Lazy;
use regex::Regex;

/// Start of an ESM statement, a JSX element or a fragment.
static MDX_BLOCK_START: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(?:import|export)\s|</?[A-Z]|</?>)").expect("mdx-start pattern is valid")
});

/// Raw HTML block kind used for passthrough; the writer never inspects it.
const RAW_BLOCK_TYPE: u8 = 7;

/// Replace top-level MDX paragraphs with raw blocks of their source text.
///
/// Returns the number of blocks replaced.
pub fn preserve_mdx_blocks<'a>(root: &'a AstNode<'a>, source: &str) -> usize {
    let lines: Vec<&str> = source.lines().collect();
    let offsets = line_offsets(root);
    let mut preserved = 0;

    for node in root.children() {
        let Some(literal) = mdx_source(node, &lines, &offsets) else {
            continue;
        };

        while let Some(child) = node.first_child() {
            child.detach();
        }
        node.data.borrow_mut().value = NodeValue::HtmlBlock(NodeHtmlBlock {
            block_type: RAW_BLOCK_TYPE,
            literal,
        });
        preserved += 1;
    }

    preserved
}

/// Candidate shifts between a node's recorded line and its source line.
///
/// Lines are normally absolute; the frontmatter height is tried as well in
/// case the parser counted from the end of the frontmatter block.
fn line_offsets<'a>(root: &'a AstNode<'a>) -> Vec<usize> {
    let mut offsets = vec![0];
    if let Some(first) = root.first_child() {
        if let NodeValue::FrontMatter(ref raw) = first.data.borrow().value {
            offsets.push(raw.lines().count());
        }
    }
    offsets
}

/// The source lines of `node` if it is a paragraph holding MDX syntax.
fn mdx_source<'a>(node: &'a AstNode<'a>, lines: &[&str], offsets: &[usize]) -> Option<String> {
    let data = node.data.borrow();
    if !matches!(data.value, NodeValue::Paragraph) {
        return None;
    }
    let first = leading_literal(node)?;
    let (start, end) = (data.sourcepos.start.line, data.sourcepos.end.line);
    if start == 0 || end < start {
        return None;
    }

    offsets.iter().find_map(|offset| {
        let first_line = lines.get(start + offset - 1)?.trim_start();
        if !MDX_BLOCK_START.is_match(first_line) || !first_line.starts_with(&first) {
            return None;
        }
        let block = lines.get(start + offset - 1..end + offset)?;
        Some(format!("{}\n", block.join("\n")))
    })
}

/// Text of the first inline in a paragraph, when it is plain text or HTML.
fn leading_literal<'a>(paragraph: &'a AstNode<'a>) -> Option<String> {
    let child = paragraph.first_child()?;
    match &child.data.borrow().value {
        NodeValue::Text(text) if !text.is_empty() => Some(text.clone()),
        NodeValue::HtmlInline(html) => Some(html.clone()),
        _ => None,
    }
}
