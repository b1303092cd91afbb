//! Builder API for diagnostic messages.
//!
//! The builder encodes the tidyverse layout: a short title, one problem
//! statement, any number of bulleted details, and hints phrased as questions.

use crate::diagnostic::{
    DetailItem, DetailKind, DiagnosticKind, DiagnosticMessage, MessageContent, SourceLocation,
};

/// Code used for messages that have not been given a catalog entry yet.
pub const GENERIC_CODE: &str = "MDX-0-99";

/// Builder for [`DiagnosticMessage`].
///
/// # Example
///
/// ```
/// use mdxld_error_reporting::DiagnosticMessageBuilder;
///
/// let msg = DiagnosticMessageBuilder::warning("Linked-data prefix collision")
///     .with_code("MDX-1-4")
///     .problem("`$type` and `@type` both normalize to `$type`")
///     .add_info("The value of the later key is kept")
///     .add_hint("Remove one of the two keys?")
///     .build();
///
/// assert_eq!(msg.code.as_deref(), Some("MDX-1-4"));
/// assert_eq!(msg.details.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct DiagnosticMessageBuilder {
    message: DiagnosticMessage,
}

impl DiagnosticMessageBuilder {
    fn new(kind: DiagnosticKind, title: impl Into<String>) -> Self {
        Self {
            message: DiagnosticMessage::new(kind, title),
        }
    }

    /// Start building an error.
    pub fn error(title: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Error, title)
    }

    /// Start building a warning.
    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Warning, title)
    }

    /// Set the error code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.message.code = Some(code.into());
        self
    }

    /// Set the problem statement.
    ///
    /// Only one problem statement is kept; calling this twice replaces the first.
    pub fn problem(mut self, problem: impl Into<MessageContent>) -> Self {
        self.message.problem = Some(problem.into());
        self
    }

    /// Add an error detail (✖ bullet).
    pub fn add_detail(self, detail: impl Into<MessageContent>) -> Self {
        self.push_detail(DetailKind::Error, detail.into())
    }

    /// Add an info detail (ℹ bullet).
    pub fn add_info(self, info: impl Into<MessageContent>) -> Self {
        self.push_detail(DetailKind::Info, info.into())
    }

    /// Add a note detail (• bullet).
    pub fn add_note(self, note: impl Into<MessageContent>) -> Self {
        self.push_detail(DetailKind::Note, note.into())
    }

    /// Add a hint. Hints should end with a question mark.
    pub fn add_hint(mut self, hint: impl Into<MessageContent>) -> Self {
        self.message.hints.push(hint.into());
        self
    }

    /// Set the source location.
    pub fn at_location(mut self, location: SourceLocation) -> Self {
        self.message.location = Some(location);
        self
    }

    /// Set the source location if one is available.
    pub fn maybe_at_location(mut self, location: Option<SourceLocation>) -> Self {
        self.message.location = location;
        self
    }

    /// Finish building.
    pub fn build(self) -> DiagnosticMessage {
        self.message
    }

    /// Create a generic error tagged with where it was raised.
    ///
    /// Used by [`crate::generic_error!`]; prefer a catalogued code for anything
    /// a user is likely to see.
    pub fn generic_error(message: impl Into<String>, file: &str, line: u32) -> DiagnosticMessage {
        Self::error(format!("{} ({}:{})", message.into(), file, line))
            .with_code(GENERIC_CODE)
            .build()
    }

    /// Create a generic warning tagged with where it was raised.
    pub fn generic_warning(
        message: impl Into<String>,
        file: &str,
        line: u32,
    ) -> DiagnosticMessage {
        Self::warning(format!("{} ({}:{})", message.into(), file, line))
            .with_code(GENERIC_CODE)
            .build()
    }

    fn push_detail(mut self, kind: DetailKind, content: MessageContent) -> Self {
        self.message.details.push(DetailItem { kind, content });
        self
    }
}
