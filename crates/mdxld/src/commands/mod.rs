//! Command implementations for the mdxld CLI
//!
//! Each command module handles the CLI interface and delegates to
//! mdxld-core for the actual processing.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use mdxld_core::MdxldConfig;

pub mod check;
pub mod process;

/// Pipeline options shared by every command.
#[derive(Debug, Clone, Default, Args)]
pub struct PipelineArgs {
    /// Read pipeline options from a TOML file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Normalize linked-data keys to `@` instead of `$`
    #[arg(long)]
    pub prefer_at: bool,

    /// Treat GitHub-flavored syntax as plain text
    #[arg(long)]
    pub no_gfm: bool,
}

impl PipelineArgs {
    /// Load the config file, if any, then apply flag overrides.
    pub fn resolve(&self) -> Result<MdxldConfig> {
        let mut config = match &self.config {
            Some(path) => MdxldConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => MdxldConfig::default(),
        };

        if self.prefer_at {
            config.prefer_dollar_prefix = false;
        }
        if self.no_gfm {
            config.gfm = false;
        }

        tracing::debug!(?config, "Resolved pipeline config");
        Ok(config)
    }
}
