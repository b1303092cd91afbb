/*
 * disable_gfm.rs
 * Copyright (c) 2025 mdxld contributors
 *
 * Degrades GitHub-flavored syntax to plain text.
 */

//! Degrades GitHub-flavored syntax to plain text.
//!
//! Used when GFM is switched off. Without the GFM extensions the parser reads
//! tables as paragraphs and task items as ordinary list items whose text
//! starts with `[x]`. This pass removes what is left of that syntax so the
//! serializer does not write it back out.
//!
//! The rewritten text must stay inert when read back: delimiter rows are
//! dropped, and whitespace left behind by removed pipes is collapsed and
//! trimmed at line edges so it cannot become an indented code block or a
//! hard line break.

use comrak::nodes::{AstNode, NodeValue};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::Result;
use crate::context::DocumentContext;
use crate::transform::DocumentTransform;

/// A run of text between two pipes, e.g. a table row.
static PIPE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\|.*\|").expect("pipe-run pattern is valid"));

/// A task-list line that ended up inside a text node.
static TASK_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?mi)^\s*[-*+]\s*\[[x ]\]").expect("task-line pattern is valid"));

/// The checkbox at the start of a list item's text.
static TASK_CHECKBOX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\[[xX ]\]\s*").expect("checkbox pattern is valid"));

/// A table delimiter row such as `|---|:---:|`.
static DELIMITER_ROW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*\|?(\s*:?-+:?\s*\|)+\s*(:?-+:?)?\s*$").expect("delimiter-row pattern is valid")
});

/// Consecutive whitespace left between cells.
static SPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]{2,}").expect("space-run pattern is valid"));

/// Rewrites table pipes and task checkboxes in text nodes.
///
/// Block structure produced by the parser is kept, except that table
/// delimiter rows are removed from their paragraph.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisableGfmTransform;

impl DocumentTransform for DisableGfmTransform {
    fn name(&self) -> &str {
        "disable-gfm"
    }

    fn transform<'a>(&self, root: &'a AstNode<'a>, ctx: &mut DocumentContext) -> Result<()> {
        let mut rewritten = 0usize;
        let mut delimiter_rows = Vec::new();

        for node in root.descendants() {
            let edges = line_edges(node);
            let mut data = node.data.borrow_mut();
            let NodeValue::Text(ref mut text) = data.value else {
                continue;
            };

            if edges == (true, true) && is_delimiter_row(text) {
                delimiter_rows.push(node);
            } else if let Some(plain) = degrade_text(text, edges.0, edges.1) {
                *text = plain;
                rewritten += 1;
            }
        }

        let removed = delimiter_rows.len();
        for row in delimiter_rows {
            remove_line(row);
        }

        for item in root
            .descendants()
            .filter(|n| matches!(n.data.borrow().value, NodeValue::Item(_)))
        {
            let Some(text_node) = leading_text(item) else {
                continue;
            };
            if let NodeValue::Text(ref mut text) = text_node.data.borrow_mut().value {
                if let Some(end) = TASK_CHECKBOX.find(text).map(|m| m.end()) {
                    text.replace_range(..end, "");
                    rewritten += 1;
                }
            }
        }

        tracing::debug!(
            document = %ctx.source_name,
            rewritten,
            delimiter_rows = removed,
            "Degraded GFM syntax"
        );
        Ok(())
    }
}

/// Rewrite table pipes and inline task markers. `None` when nothing changed.
///
/// `line_start` and `line_end` say whether the text opens or closes a line
/// of its paragraph; whitespace and stray pipes are trimmed there.
fn degrade_text(text: &str, line_start: bool, line_end: bool) -> Option<String> {
    let mut plain = TASK_LINE.replace_all(text, "-").into_owned();

    if text.contains('|') {
        plain = PIPE_RUN
            .replace_all(&plain, |caps: &regex::Captures| {
                let cells: Vec<&str> = caps[0]
                    .split('|')
                    .map(str::trim)
                    .filter(|cell| !cell.is_empty())
                    .collect();
                format!(" {} ", cells.join(" "))
            })
            .into_owned();
        plain = SPACE_RUN.replace_all(&plain, " ").into_owned();

        if line_start {
            let trimmed = plain.trim_start();
            plain = trimmed.strip_prefix('|').unwrap_or(trimmed).trim_start().to_string();
        }
        if line_end {
            let trimmed = plain.trim_end();
            plain = trimmed.strip_suffix('|').unwrap_or(trimmed).trim_end().to_string();
        }
    }

    (plain != text).then_some(plain)
}

fn is_delimiter_row(text: &str) -> bool {
    text.contains('|') && DELIMITER_ROW.is_match(text)
}

fn is_line_break(node: &AstNode<'_>) -> bool {
    matches!(
        node.data.borrow().value,
        NodeValue::SoftBreak | NodeValue::LineBreak
    )
}

/// Whether `node` starts and ends a line of its paragraph.
///
/// Nodes outside a paragraph's direct children never count as line edges.
fn line_edges<'a>(node: &'a AstNode<'a>) -> (bool, bool) {
    let in_paragraph = node
        .parent()
        .is_some_and(|p| matches!(p.data.borrow().value, NodeValue::Paragraph));
    if !in_paragraph {
        return (false, false);
    }

    let start = node.previous_sibling().is_none_or(|n| is_line_break(n));
    let end = node.next_sibling().is_none_or(|n| is_line_break(n));
    (start, end)
}

/// Detach a line of text along with one of the breaks around it.
fn remove_line<'a>(node: &'a AstNode<'a>) {
    let parent = node.parent();
    let adjacent = node
        .previous_sibling()
        .or_else(|| node.next_sibling())
        .filter(|n| is_line_break(n));
    if let Some(line_break) = adjacent {
        line_break.detach();
    }
    node.detach();

    if let Some(paragraph) = parent {
        if paragraph.first_child().is_none() {
            paragraph.detach();
        }
    }
}

/// The first text node of a list item's first paragraph.
fn leading_text<'a>(item: &'a AstNode<'a>) -> Option<&'a AstNode<'a>> {
    let paragraph = item.first_child()?;
    if !matches!(paragraph.data.borrow().value, NodeValue::Paragraph) {
        return None;
    }
    let text = paragraph.first_child()?;
    let is_text = matches!(text.data.borrow().value, NodeValue::Text(_));
    is_text.then_some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::DialectSet;
    use comrak::{Arena, Options, parse_document};

    fn texts(source: &str) -> Vec<String> {
        let arena = Arena::new();
        let mut options = Options::default();
        DialectSet::new(false).configure(&mut options);
        let root = parse_document(&arena, source, &options);

        let mut ctx = DocumentContext::new("doc.md");
        DisableGfmTransform.transform(root, &mut ctx).unwrap();

        root.descendants()
            .filter_map(|n| match &n.data.borrow().value {
                NodeValue::Text(t) => Some(t.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_degrade_text_pipes() {
        assert_eq!(degrade_text("| a | b |", true, true).as_deref(), Some("a b"));
        assert_eq!(degrade_text("a|b|c", true, true).as_deref(), Some("a b c"));
        assert_eq!(degrade_text("x | a | b | y", true, true).as_deref(), Some("x a b y"));
        assert_eq!(degrade_text("no pipes here", true, true), None);
        assert_eq!(degrade_text("a lone | pipe", false, false), None);
    }

    #[test]
    fn test_degrade_text_trims_only_line_edges() {
        assert_eq!(degrade_text("| a | b |", false, false).as_deref(), Some(" a b "));
        assert_eq!(degrade_text("| a | b |", true, false).as_deref(), Some("a b "));
        assert_eq!(degrade_text("| left", true, false).as_deref(), Some("left"));
        assert_eq!(degrade_text(" right |", false, true).as_deref(), Some(" right"));
    }

    #[test]
    fn test_degrade_text_task_lines() {
        assert_eq!(degrade_text("- [x] done", true, true).as_deref(), Some("- done"));
        assert_eq!(degrade_text("* [X] done", true, true).as_deref(), Some("- done"));
        assert_eq!(degrade_text("+ [ ] todo", true, true).as_deref(), Some("- todo"));
    }

    #[test]
    fn test_delimiter_rows() {
        assert!(is_delimiter_row("|---|---|"));
        assert!(is_delimiter_row("| -------- | :------: |"));
        assert!(is_delimiter_row("---|---"));
        assert!(!is_delimiter_row("---"));
        assert!(!is_delimiter_row("| a | b |"));
    }

    #[test]
    fn test_table_rows_lose_pipes() {
        let texts = texts("| Header 1 | Header 2 |\n|---|---|\n| a | b |\n");
        assert_eq!(texts, vec!["Header 1 Header 2".to_string(), "a b".to_string()]);
    }

    #[test]
    fn test_delimiter_row_and_its_break_removed() {
        let arena = Arena::new();
        let mut options = Options::default();
        DialectSet::new(false).configure(&mut options);
        let root = parse_document(&arena, "| a | b |\n|---|---|\n| 1 | 2 |\n", &options);

        let mut ctx = DocumentContext::new("doc.md");
        DisableGfmTransform.transform(root, &mut ctx).unwrap();

        let paragraph = root.first_child().unwrap();
        let kinds: Vec<&str> = paragraph
            .children()
            .map(|n| match n.data.borrow().value {
                NodeValue::Text(_) => "text",
                NodeValue::SoftBreak => "softbreak",
                _ => "other",
            })
            .collect();
        assert_eq!(kinds, vec!["text", "softbreak", "text"]);
    }

    #[test]
    fn test_task_checkboxes_removed() {
        let texts = texts("- [x] Task 1\n- [ ] Task 2\n");
        assert!(texts.contains(&"Task 1".to_string()));
        assert!(texts.contains(&"Task 2".to_string()));
        assert!(texts.iter().all(|t| !t.contains("[x]") && !t.contains("[ ]")));
    }

    #[test]
    fn test_plain_text_untouched() {
        let texts = texts("Just a sentence.\n\n- item\n");
        assert_eq!(texts, vec!["Just a sentence.".to_string(), "item".to_string()]);
    }
}
