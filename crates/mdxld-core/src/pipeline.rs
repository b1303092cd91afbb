/*
 * pipeline.rs
 * Copyright (c) 2025 mdxld contributors
 *
 * Parse, transform and stringify a single markdown document.
 */

//! The markdown pipeline.
//!
//! ## Pipeline Stages
//!
//! 1. **Parse**: markdown source to a comrak tree, with the [`DialectSet`]
//!    selected by `gfm`
//! 2. **Transform**: [`DisableGfmTransform`] when `gfm` is off, then any
//!    added transforms such as [`YamlLdTransform`]
//! 3. **Stringify**: MDX statements and JSX blocks are restored from the
//!    source, then the tree goes back to markdown with the matching
//!    [`FormatProfile`]
//!
//! ## Usage
//!
//! ```ignore
//! use mdxld_core::{DocumentContext, MdxldConfig, build_pipeline};
//!
//! let pipeline = build_pipeline(&MdxldConfig::default());
//!
//! let mut ctx = DocumentContext::new("post.md");
//! let markdown = pipeline.process(&source, &mut ctx)?;
//! let record = ctx.data.yaml_ld();
//! ```
//!
//! A pipeline holds only configuration. Each call to [`Pipeline::process`]
//! gets its own arena and context, so one pipeline can be shared across
//! threads.

use comrak::{Arena, Options, format_commonmark, parse_document};
use mdxld_error_reporting::{DiagnosticMessage, DiagnosticMessageBuilder, generic_error};

use crate::Result;
use crate::config::MdxldConfig;
use crate::context::{DocumentContext, DocumentData};
use crate::dialect::DialectSet;
use crate::error::MdxldError;
use crate::format::FormatProfile;
use crate::mdx::preserve_mdx_blocks;
use crate::transform::{DocumentTransform, TransformPipeline};
use crate::transforms::{DisableGfmTransform, YamlLdTransform};

/// Outcome of running one document through a [`Pipeline`].
#[derive(Debug)]
pub struct ProcessedDocument {
    /// Serialized markdown, or the error that stopped processing
    pub output: Result<String>,
    /// Side-channel data; empty when processing failed
    pub data: DocumentData,
    pub diagnostics: Vec<DiagnosticMessage>,
}

impl ProcessedDocument {
    pub fn is_ok(&self) -> bool {
        self.output.is_ok()
    }
}

/// A configured parse, transform, stringify pipeline.
pub struct Pipeline {
    config: MdxldConfig,
    dialect: DialectSet,
    transforms: TransformPipeline,
    profile: FormatProfile,
}

impl Pipeline {
    /// Build the parse and stringify stages for `config`.
    ///
    /// The YAML-LD stage is not included; see [`build_pipeline`].
    pub fn new(config: MdxldConfig) -> Self {
        let mut transforms = TransformPipeline::new();
        if !config.gfm {
            transforms.push(Box::new(DisableGfmTransform));
        }

        Self {
            config,
            dialect: DialectSet::new(config.gfm),
            transforms,
            profile: FormatProfile::for_dialect(config.gfm),
        }
    }

    /// Append a transform after the existing ones.
    pub fn with_transform(mut self, transform: Box<dyn DocumentTransform>) -> Self {
        self.transforms.push(transform);
        self
    }

    pub fn config(&self) -> &MdxldConfig {
        &self.config
    }

    pub fn dialect(&self) -> DialectSet {
        self.dialect
    }

    pub fn profile(&self) -> FormatProfile {
        self.profile
    }

    /// Stage names in execution order, e.g.
    /// `["parse", "frontmatter", "gfm", "yaml-ld", "stringify"]`.
    pub fn stage_names(&self) -> Vec<&str> {
        let mut names = vec!["parse"];
        names.extend(self.dialect.extension_names());
        names.extend(self.transforms.transform_names());
        names.push("stringify");
        names
    }

    /// Run one document through every stage.
    ///
    /// Diagnostics are recorded on `ctx` before an error is returned, and
    /// `ctx.data` is cleared so a failed document carries no record.
    ///
    /// # Errors
    ///
    /// Returns the first transform error, or a render error if the tree
    /// cannot be serialized.
    pub fn process(&self, source: &str, ctx: &mut DocumentContext) -> Result<String> {
        let result = self.process_document(source, ctx);
        if result.is_err() {
            ctx.data = DocumentData::new();
        }
        result
    }

    fn process_document(&self, source: &str, ctx: &mut DocumentContext) -> Result<String> {
        let arena = Arena::new();

        let mut parse_options = Options::default();
        self.dialect.configure(&mut parse_options);
        let root = parse_document(&arena, source, &parse_options);
        tracing::debug!(
            document = %ctx.source_name,
            gfm = self.dialect.gfm,
            "Parsed document"
        );

        if let Err(err) = self.transforms.execute(root, ctx) {
            if !ctx.has_errors() {
                ctx.add_diagnostic(
                    DiagnosticMessageBuilder::error("Document transform failed")
                        .with_code("MDX-0-1")
                        .problem(err.to_string())
                        .build(),
                );
            }
            return Err(err);
        }

        let preserved = preserve_mdx_blocks(root, source);
        tracing::debug!(document = %ctx.source_name, preserved, "Preserved MDX blocks");

        let mut render_options = Options::default();
        self.profile.configure(&mut render_options);
        let mut out = Vec::new();
        if let Err(err) = format_commonmark(root, &render_options, &mut out) {
            ctx.add_diagnostic(generic_error!(format!("Failed to write markdown: {}", err)));
            return Err(MdxldError::Io(err));
        }

        String::from_utf8(out).map_err(|err| {
            ctx.add_diagnostic(generic_error!("Serialized markdown is not valid UTF-8"));
            MdxldError::Render(err.to_string())
        })
    }

    /// Run a document and collect everything about the run.
    pub fn run(&self, source_name: &str, source: &str) -> ProcessedDocument {
        let mut ctx = DocumentContext::new(source_name);
        let output = self.process(source, &mut ctx);
        if let Err(err) = &output {
            tracing::warn!(document = source_name, error = %err, "Document failed");
        }

        ProcessedDocument {
            output,
            data: ctx.data,
            diagnostics: ctx.diagnostics,
        }
    }
}

/// Build the full pipeline for `config`: parse, dialect, YAML-LD, stringify.
pub fn build_pipeline(config: &MdxldConfig) -> Pipeline {
    Pipeline::new(*config).with_transform(Box::new(YamlLdTransform::from_config(config)))
}
