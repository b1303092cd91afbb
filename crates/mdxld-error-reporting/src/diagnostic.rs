//! Core diagnostic message types.
//!
//! This module defines the structures for representing diagnostic messages
//! (errors, warnings, info) following tidyverse-style guidelines.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// An error that prevents completion
    Error,
    /// A warning that doesn't prevent completion but indicates a problem
    Warning,
    /// Informational message
    Info,
    /// A note providing additional context
    Note,
}

impl DiagnosticKind {
    /// Capitalised label used when rendering text.
    pub fn label(&self) -> &'static str {
        match self {
            DiagnosticKind::Error => "Error",
            DiagnosticKind::Warning => "Warning",
            DiagnosticKind::Info => "Info",
            DiagnosticKind::Note => "Note",
        }
    }

    /// Lowercase name used in JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::Error => "error",
            DiagnosticKind::Warning => "warning",
            DiagnosticKind::Info => "info",
            DiagnosticKind::Note => "note",
        }
    }
}

/// How detail items should be presented (tidyverse x/i bullet style).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetailKind {
    /// Error detail (✖ bullet in tidyverse style)
    Error,
    /// Info detail (i bullet in tidyverse style)
    Info,
    /// Note detail (plain bullet)
    Note,
}

impl DetailKind {
    fn bullet(&self) -> &'static str {
        match self {
            DetailKind::Error => "✖",
            DetailKind::Info => "ℹ",
            DetailKind::Note => "•",
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            DetailKind::Error => "error",
            DetailKind::Info => "info",
            DetailKind::Note => "note",
        }
    }
}

/// The content of a message or detail item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageContent {
    /// Plain text content
    Plain(String),
    /// Markdown content (backticks mark code, field names and values)
    Markdown(String),
}

impl MessageContent {
    /// Get the raw string content for display
    pub fn as_str(&self) -> &str {
        match self {
            MessageContent::Plain(s) => s,
            MessageContent::Markdown(s) => s,
        }
    }

    /// Convert to JSON value with type information
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::json;
        match self {
            MessageContent::Plain(s) => json!({
                "type": "plain",
                "content": s
            }),
            MessageContent::Markdown(s) => json!({
                "type": "markdown",
                "content": s
            }),
        }
    }
}

impl From<String> for MessageContent {
    fn from(s: String) -> Self {
        MessageContent::Markdown(s)
    }
}

impl From<&str> for MessageContent {
    fn from(s: &str) -> Self {
        MessageContent::Markdown(s.to_string())
    }
}

/// A position in a source document.
///
/// Lines and columns are 1-based, matching what the markdown parser reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    /// Name of the document (usually its path)
    pub file: String,
    /// 1-based line number
    pub line: usize,
    /// 1-based column number
    pub column: usize,
}

impl SourceLocation {
    pub fn new(file: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// A detail item in a diagnostic message.
///
/// Following tidyverse guidelines, details provide specific information about
/// the error (what went wrong, where, with what values).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailItem {
    /// The kind of detail (error, info, note)
    pub kind: DetailKind,
    /// The content of the detail
    pub content: MessageContent,
}

/// A diagnostic message following tidyverse-style structure.
///
/// Structure:
/// 1. **Code**: Optional error code (e.g., "MDX-1-3") for searchability
/// 2. **Title**: Brief error message
/// 3. **Kind**: Error, Warning, Info
/// 4. **Problem**: What went wrong (the "must" or "can't" statement)
/// 5. **Details**: Specific information (bulleted)
/// 6. **Hints**: Optional guidance for fixing (ends with ?)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticMessage {
    /// Optional error code (e.g., "MDX-1-1")
    ///
    /// Codes stay stable even when the message wording changes, and each one
    /// maps to an entry in the [`crate::catalog`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Brief title for the error
    pub title: String,

    /// The kind of diagnostic (Error, Warning, Info)
    pub kind: DiagnosticKind,

    /// The problem statement (the "what" - using "must" or "can't")
    pub problem: Option<MessageContent>,

    /// Specific error details (the "where/why")
    pub details: Vec<DetailItem>,

    /// Optional hints for fixing (ends with ?)
    pub hints: Vec<MessageContent>,

    /// Where in the source document the issue occurred
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
}

impl DiagnosticMessage {
    /// Create a new diagnostic message with just a title and kind.
    ///
    /// Note: Consider using [`crate::DiagnosticMessageBuilder`] instead for better structure.
    pub fn new(kind: DiagnosticKind, title: impl Into<String>) -> Self {
        Self {
            code: None,
            title: title.into(),
            kind,
            problem: None,
            details: Vec::new(),
            hints: Vec::new(),
            location: None,
        }
    }

    /// Create an error diagnostic.
    pub fn error(title: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Error, title)
    }

    /// Create a warning diagnostic.
    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Warning, title)
    }

    /// Set the error code.
    ///
    /// Error codes follow the format `MDX-<subsystem>-<number>` (e.g., "MDX-1-1").
    ///
    /// # Example
    ///
    /// ```
    /// use mdxld_error_reporting::DiagnosticMessage;
    ///
    /// let msg = DiagnosticMessage::error("Missing required frontmatter")
    ///     .with_code("MDX-1-1");
    /// ```
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Attach a source location.
    pub fn at_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Whether this diagnostic is an error.
    pub fn is_error(&self) -> bool {
        self.kind == DiagnosticKind::Error
    }

    /// Get the documentation URL for this error, if it has an error code.
    ///
    /// # Example
    ///
    /// ```
    /// use mdxld_error_reporting::DiagnosticMessage;
    ///
    /// let msg = DiagnosticMessage::error("Internal Error")
    ///     .with_code("MDX-0-1");
    ///
    /// assert!(msg.docs_url().is_some());
    /// ```
    pub fn docs_url(&self) -> Option<&str> {
        self.code
            .as_ref()
            .and_then(|code| crate::catalog::get_docs_url(code))
    }

    /// Render this diagnostic message as text following tidyverse style.
    ///
    /// Format:
    /// ```text
    /// Error [MDX-1-3]: title
    ///   --> doc.md:1:1
    /// Problem statement here
    /// ✖ Error detail 1
    /// ℹ Info detail
    /// • Note detail
    /// ? Hint 1
    /// ```
    ///
    /// # Example
    ///
    /// ```
    /// use mdxld_error_reporting::DiagnosticMessageBuilder;
    ///
    /// let msg = DiagnosticMessageBuilder::error("Invalid input")
    ///     .problem("Values must be numeric")
    ///     .add_detail("Found text in column 3")
    ///     .add_hint("Convert to numbers first?")
    ///     .build();
    /// let text = msg.to_text();
    /// assert!(text.contains("Error: Invalid input"));
    /// assert!(text.contains("Values must be numeric"));
    /// ```
    pub fn to_text(&self) -> String {
        let mut lines = Vec::new();

        match &self.code {
            Some(code) => lines.push(format!("{} [{}]: {}", self.kind.label(), code, self.title)),
            None => lines.push(format!("{}: {}", self.kind.label(), self.title)),
        }

        if let Some(location) = &self.location {
            lines.push(format!("  --> {}", location));
        }

        if let Some(problem) = &self.problem {
            lines.push(problem.as_str().to_string());
        }

        for detail in &self.details {
            lines.push(format!("{} {}", detail.kind.bullet(), detail.content.as_str()));
        }

        for hint in &self.hints {
            lines.push(format!("? {}", hint.as_str()));
        }

        let mut result = lines.join("\n");
        result.push('\n');
        result
    }

    /// Render this diagnostic message as a JSON value.
    ///
    /// Returns a structured JSON object with all fields:
    /// ```json
    /// {
    ///   "kind": "error",
    ///   "title": "Missing required frontmatter fields",
    ///   "code": "MDX-1-3",
    ///   "problem": {"type": "markdown", "content": "..."},
    ///   "details": [{"kind": "error", "content": {"type": "markdown", "content": "..."}}],
    ///   "hints": [{"type": "markdown", "content": "..."}]
    /// }
    /// ```
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::json;

        let mut obj = json!({
            "kind": self.kind.as_str(),
            "title": self.title,
        });

        if let Some(code) = &self.code {
            obj["code"] = json!(code);
        }

        if let Some(problem) = &self.problem {
            obj["problem"] = problem.to_json();
        }

        if !self.details.is_empty() {
            let details: Vec<_> = self
                .details
                .iter()
                .map(|d| {
                    json!({
                        "kind": d.kind.as_str(),
                        "content": d.content.to_json()
                    })
                })
                .collect();
            obj["details"] = json!(details);
        }

        if !self.hints.is_empty() {
            let hints: Vec<_> = self.hints.iter().map(|h| h.to_json()).collect();
            obj["hints"] = json!(hints);
        }

        if let Some(location) = &self.location {
            obj["location"] = json!({
                "file": location.file,
                "line": location.line,
                "column": location.column,
            });
        }

        obj
    }
}

impl fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_error() {
        let msg = DiagnosticMessage::error("Something failed");
        assert_eq!(msg.kind, DiagnosticKind::Error);
        assert_eq!(msg.title, "Something failed");
        assert!(msg.code.is_none());
        assert!(msg.is_error());
    }

    #[test]
    fn test_warning_is_not_error() {
        let msg = DiagnosticMessage::warning("Heads up");
        assert!(!msg.is_error());
    }

    #[test]
    fn test_with_code() {
        let msg = DiagnosticMessage::error("Missing required frontmatter").with_code("MDX-1-1");
        assert_eq!(msg.code.as_deref(), Some("MDX-1-1"));
        assert!(msg.docs_url().is_some());
    }

    #[test]
    fn test_unknown_code_has_no_docs_url() {
        let msg = DiagnosticMessage::error("Nope").with_code("MDX-999-999");
        assert!(msg.docs_url().is_none());
    }

    #[test]
    fn test_to_text_simple_error() {
        let msg = DiagnosticMessage::error("Something went wrong");
        assert_eq!(msg.to_text(), "Error: Something went wrong\n");
    }

    #[test]
    fn test_to_text_with_code_and_location() {
        let msg = DiagnosticMessage::error("Missing required frontmatter")
            .with_code("MDX-1-1")
            .at_location(SourceLocation::new("doc.md", 1, 1));
        let text = msg.to_text();
        assert!(text.starts_with("Error [MDX-1-1]: Missing required frontmatter"));
        assert!(text.contains("--> doc.md:1:1"));
    }

    #[test]
    fn test_to_text_bullets() {
        let mut msg = DiagnosticMessage::warning("Prefix collision");
        msg.problem = Some("Two keys map to the same name".into());
        msg.details.push(DetailItem {
            kind: DetailKind::Error,
            content: "`$type` and `@type` were both given".into(),
        });
        msg.details.push(DetailItem {
            kind: DetailKind::Info,
            content: "The last one wins".into(),
        });
        msg.details.push(DetailItem {
            kind: DetailKind::Note,
            content: "Order follows the document".into(),
        });
        msg.hints.push("Remove one of the keys?".into());

        let text = msg.to_text();
        assert!(text.starts_with("Warning: Prefix collision\n"));
        assert!(text.contains("Two keys map to the same name\n"));
        assert!(text.contains("✖ `$type` and `@type` were both given\n"));
        assert!(text.contains("ℹ The last one wins\n"));
        assert!(text.contains("• Order follows the document\n"));
        assert!(text.contains("? Remove one of the keys?\n"));
    }

    #[test]
    fn test_to_json_simple() {
        let msg = DiagnosticMessage::error("Something went wrong");
        let json = msg.to_json();
        assert_eq!(json["kind"], "error");
        assert_eq!(json["title"], "Something went wrong");
        assert!(json.get("code").is_none());
        assert!(json.get("details").is_none());
    }

    #[test]
    fn test_to_json_full() {
        let mut msg = DiagnosticMessage::error("Missing required frontmatter fields")
            .with_code("MDX-1-3")
            .at_location(SourceLocation::new("doc.md", 2, 1));
        msg.problem = Some(MessageContent::Plain("Fields are missing".to_string()));
        msg.details.push(DetailItem {
            kind: DetailKind::Error,
            content: "`title` is missing".into(),
        });
        msg.hints.push("Add it?".into());

        let json = msg.to_json();
        assert_eq!(json["code"], "MDX-1-3");
        assert_eq!(json["problem"]["type"], "plain");
        assert_eq!(json["details"][0]["kind"], "error");
        assert_eq!(json["details"][0]["content"]["content"], "`title` is missing");
        assert_eq!(json["hints"][0]["content"], "Add it?");
        assert_eq!(json["location"]["file"], "doc.md");
        assert_eq!(json["location"]["line"], 2);
    }

    #[test]
    fn test_display_is_title() {
        let msg = DiagnosticMessage::error("Missing required frontmatter");
        assert_eq!(msg.to_string(), "Missing required frontmatter");
    }

    #[test]
    fn test_message_content_from_str_is_markdown() {
        let content: MessageContent = "`code`".into();
        assert!(matches!(content, MessageContent::Markdown(_)));
        assert_eq!(content.as_str(), "`code`");
    }
}
