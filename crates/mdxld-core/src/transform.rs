/*
 * transform.rs
 * Copyright (c) 2025 mdxld contributors
 *
 * Document transform trait and pipeline.
 */

//! Document transform infrastructure.
//!
//! - [`DocumentTransform`] - The trait implemented by every tree stage
//! - [`TransformPipeline`] - Ordered collection of transforms to execute
//!
//! Transforms run in a flat, ordered sequence (insertion order) between
//! parsing and serialization. Each transform can:
//! - Mutate the comrak tree in place
//! - Attach side-channel data to the [`DocumentContext`]
//! - Record diagnostics
//!
//! # Example
//!
//! ```ignore
//! use mdxld_core::transform::{DocumentTransform, TransformPipeline};
//!
//! struct CountHeadings;
//!
//! impl DocumentTransform for CountHeadings {
//!     fn name(&self) -> &str { "count-headings" }
//!
//!     fn transform<'a>(&self, root: &'a AstNode<'a>, ctx: &mut DocumentContext) -> Result<()> {
//!         // Inspect or modify the tree...
//!         Ok(())
//!     }
//! }
//!
//! let mut pipeline = TransformPipeline::new();
//! pipeline.push(Box::new(CountHeadings));
//! pipeline.execute(root, &mut ctx)?;
//! ```

use comrak::nodes::AstNode;

use crate::Result;
use crate::context::DocumentContext;

/// A stage that operates on a parsed document tree.
///
/// Transforms must be `Send + Sync` so one pipeline can serve documents on
/// several threads. Per-document state belongs in the context, never in the
/// transform.
pub trait DocumentTransform: Send + Sync {
    /// Human-readable name, used for logging and stage listings.
    fn name(&self) -> &str;

    /// Apply the transformation.
    ///
    /// # Errors
    ///
    /// An error stops the pipeline for this document. Transforms should
    /// record a diagnostic on `ctx` before returning one.
    fn transform<'a>(&self, root: &'a AstNode<'a>, ctx: &mut DocumentContext) -> Result<()>;
}

/// A pipeline of document transforms, run in insertion order.
#[derive(Default)]
pub struct TransformPipeline {
    transforms: Vec<Box<dyn DocumentTransform>>,
}

impl TransformPipeline {
    pub fn new() -> Self {
        Self {
            transforms: Vec::new(),
        }
    }

    /// Add a transform to the end of the pipeline.
    pub fn push(&mut self, transform: Box<dyn DocumentTransform>) {
        self.transforms.push(transform);
    }

    pub fn extend(&mut self, transforms: impl IntoIterator<Item = Box<dyn DocumentTransform>>) {
        self.transforms.extend(transforms);
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Execute all transforms in insertion order.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered. Execution stops on error.
    pub fn execute<'a>(&self, root: &'a AstNode<'a>, ctx: &mut DocumentContext) -> Result<()> {
        for transform in &self.transforms {
            tracing::debug!(transform = transform.name(), "Running transform");
            transform.transform(root, ctx)?;
        }

        Ok(())
    }

    /// Names of all transforms in execution order.
    pub fn transform_names(&self) -> Vec<&str> {
        self.transforms.iter().map(|t| t.name()).collect()
    }
}
