/*
 * format.rs
 * Copyright (c) 2025 mdxld contributors
 *
 * Serialization settings for markdown output.
 */

//! Serialization settings for turning a tree back into markdown.

use comrak::{ListStyleType, Options};

/// How the output markdown is written.
///
/// Parsing and serializing are configured separately: a profile only
/// controls the writer. Tables and GFM inline syntax are written in GFM
/// form only when the profile allows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatProfile {
    pub name: &'static str,
    /// Bullet list marker: `-`, `+` or `*`
    pub bullet: char,
    /// Write code blocks fenced rather than indented
    pub fenced_code: bool,
    pub gfm: bool,
    /// Wrap paragraphs at this column; 0 keeps the source line breaks
    pub width: usize,
}

impl FormatProfile {
    /// GitHub-flavored output: `-` bullets, fenced code, GFM tables.
    pub fn gfm() -> Self {
        Self {
            name: "gfm",
            bullet: '-',
            fenced_code: true,
            gfm: true,
            width: 0,
        }
    }

    /// Plain CommonMark output.
    pub fn commonmark() -> Self {
        Self {
            name: "commonmark",
            bullet: '-',
            fenced_code: true,
            gfm: false,
            width: 0,
        }
    }

    pub fn for_dialect(gfm: bool) -> Self {
        if gfm { Self::gfm() } else { Self::commonmark() }
    }

    /// Apply this profile to a set of render options.
    pub fn configure(&self, options: &mut Options) {
        options.render.list_style = match self.bullet {
            '+' => ListStyleType::Plus,
            '*' => ListStyleType::Star,
            _ => ListStyleType::Dash,
        };
        options.render.prefer_fenced = self.fenced_code;
        options.render.width = self.width;

        options.extension.table = self.gfm;
        options.extension.tasklist = self.gfm;
        options.extension.strikethrough = self.gfm;
        options.extension.autolink = self.gfm;
    }
}

impl Default for FormatProfile {
    fn default() -> Self {
        Self::gfm()
    }
}
