/*
 * dialect.rs
 * Copyright (c) 2025 mdxld contributors
 *
 * Syntax extensions recognized when parsing.
 */

//! Syntax extensions recognized when parsing.

use comrak::Options;

use crate::frontmatter::YAML_DELIMITER;

/// The set of syntax extensions enabled for parsing.
///
/// Frontmatter is always recognized. GitHub-flavored markdown (tables, task
/// lists, strikethrough and autolinks) is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialectSet {
    pub gfm: bool,
}

impl DialectSet {
    pub fn new(gfm: bool) -> Self {
        Self { gfm }
    }

    /// Enable this dialect's extensions on a set of parse options.
    pub fn configure(&self, options: &mut Options) {
        options.extension.front_matter_delimiter = Some(YAML_DELIMITER.to_string());

        options.extension.table = self.gfm;
        options.extension.tasklist = self.gfm;
        options.extension.strikethrough = self.gfm;
        options.extension.autolink = self.gfm;
    }

    /// Names of the enabled extensions, in the order they are reported.
    pub fn extension_names(&self) -> Vec<&'static str> {
        if self.gfm {
            vec!["frontmatter", "gfm"]
        } else {
            vec!["frontmatter"]
        }
    }
}
