//! Markdown pipeline with a YAML-LD frontmatter stage.
//!
//! This crate wires the frontmatter normalizer from `mdxld-yaml` into a
//! comrak-based markdown pipeline.
//!
//! # Architecture
//!
//! A [`Pipeline`] runs each document through a fixed sequence:
//!
//! 1. **parse**: markdown text to a comrak tree
//! 2. **dialect**: frontmatter recognition, plus GFM tables, task lists,
//!    strikethrough and autolinks when enabled (or [`DisableGfmTransform`]
//!    when not)
//! 3. **yaml-ld**: [`YamlLdTransform`] locates the frontmatter, normalizes it
//!    and stores the result on the [`DocumentContext`]
//! 4. **stringify**: MDX `import`/`export` statements and JSX blocks are
//!    restored from the source ([`mdx`]), then the tree is written back to
//!    markdown using a [`FormatProfile`]
//!
//! Failures are recorded as diagnostics on the context and returned as
//! [`MdxldError`]; a failed document never has a YAML-LD record attached.
//!
//! # Example
//!
//! ```ignore
//! use mdxld_core::{DocumentContext, MdxldConfig, build_pipeline};
//!
//! let pipeline = build_pipeline(&MdxldConfig::default());
//! let mut ctx = DocumentContext::new("doc.md");
//! let output = pipeline.process(source, &mut ctx)?;
//!
//! let record = ctx.data.yaml_ld().expect("validated record");
//! println!("{:?}", record.ld_type());
//! ```

pub mod config;
pub mod context;
pub mod dialect;
pub mod error;
pub mod format;
pub mod frontmatter;
pub mod mdx;
pub mod pipeline;
pub mod transform;
pub mod transforms;

pub use config::MdxldConfig;
pub use context::{DocumentContext, DocumentData, YAML_LD_KEY};
pub use dialect::DialectSet;
pub use error::{ConfigError, MdxldError, Result};
pub use format::FormatProfile;
pub use frontmatter::{FrontmatterBlock, YAML_DELIMITER, locate};
pub use pipeline::{Pipeline, ProcessedDocument, build_pipeline};
pub use transform::{DocumentTransform, TransformPipeline};
pub use transforms::{DisableGfmTransform, YamlLdTransform};

pub use mdxld_error_reporting::DiagnosticMessage;
pub use mdxld_yaml::{LdPrefix, YamlLdData};
