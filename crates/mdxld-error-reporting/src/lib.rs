//! Error reporting and diagnostic messages for mdxld.
//!
//! Diagnostics are the channel through which the document pipeline reports
//! problems to its caller. A failing stage records a [`DiagnosticMessage`] on
//! the document context before it hands back its error value, so the caller
//! sees both a typed error and a human-readable report.
//!
//! # Structure
//!
//! - [`DiagnosticMessage`]: the message itself (code, title, problem, details, hints)
//! - [`DiagnosticMessageBuilder`]: tidyverse-style builder for messages
//! - [`catalog`]: stable error codes (`MDX-<subsystem>-<n>`) and their metadata
//! - [`generic_error!`] / [`generic_warning!`]: quick messages tagged with `file!():line!()`
//!
//! # Example
//!
//! ```
//! use mdxld_error_reporting::DiagnosticMessageBuilder;
//!
//! let error = DiagnosticMessageBuilder::error("Missing required frontmatter fields")
//!     .with_code("MDX-1-3")
//!     .problem("Frontmatter must declare a type, a title and a description")
//!     .add_detail("`title` is missing")
//!     .add_hint("Did you forget to add `title:` to the frontmatter?")
//!     .build();
//!
//! assert!(error.to_text().contains("title"));
//! ```

pub mod builder;
pub mod catalog;
pub mod diagnostic;
pub mod macros;

pub use builder::DiagnosticMessageBuilder;
pub use catalog::{ERROR_CATALOG, ErrorCodeInfo, get_docs_url, get_error_info, get_subsystem};
pub use diagnostic::{
    DetailItem, DetailKind, DiagnosticKind, DiagnosticMessage, MessageContent, SourceLocation,
};
