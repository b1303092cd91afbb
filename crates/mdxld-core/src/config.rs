/*
 * config.rs
 * Copyright (c) 2025 mdxld contributors
 *
 * Pipeline configuration.
 */

//! Pipeline configuration.
//!
//! Both options default to on. A config file is TOML:
//!
//! ```toml
//! prefer-dollar-prefix = false
//! gfm = true
//! ```

use std::path::Path;

use mdxld_yaml::LdPrefix;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct MdxldConfig {
    /// Normalize linked-data keys to `$` (true) or `@` (false)
    #[serde(alias = "preferDollarPrefix")]
    pub prefer_dollar_prefix: bool,

    /// Recognize GitHub-flavored markdown tables, task lists, strikethrough
    /// and autolinks
    pub gfm: bool,
}

impl Default for MdxldConfig {
    fn default() -> Self {
        Self {
            prefer_dollar_prefix: true,
            gfm: true,
        }
    }
}

impl MdxldConfig {
    /// The canonical linked-data prefix for this configuration.
    pub fn prefix(&self) -> LdPrefix {
        LdPrefix::preferred(self.prefer_dollar_prefix)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "Loaded config");
        Ok(config)
    }
}
