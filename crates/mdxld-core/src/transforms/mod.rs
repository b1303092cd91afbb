/*
 * transforms/mod.rs
 * Copyright (c) 2025 mdxld contributors
 *
 * Built-in document transforms.
 */

//! Built-in document transforms.
//!
//! - [`YamlLdTransform`] - validates frontmatter and attaches the YAML-LD record
//! - [`DisableGfmTransform`] - degrades GFM syntax to plain text when GFM is off

mod disable_gfm;
mod yaml_ld;

pub use disable_gfm::DisableGfmTransform;
pub use yaml_ld::YamlLdTransform;
