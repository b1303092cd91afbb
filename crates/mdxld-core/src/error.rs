//! Error types for mdxld-core

use std::path::PathBuf;

use mdxld_yaml::{DeserializeError, ValidationError};
use thiserror::Error;

/// Failure to load an [`crate::MdxldConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum MdxldError {
    /// No YAML frontmatter block at the top of the document
    #[error("Missing required frontmatter")]
    MissingFrontmatter,

    #[error(transparent)]
    Deserialize(#[from] DeserializeError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Render error: {0}")]
    Render(String),
}

impl From<mdxld_yaml::Error> for MdxldError {
    fn from(err: mdxld_yaml::Error) -> Self {
        match err {
            mdxld_yaml::Error::Deserialize(err) => Self::Deserialize(err),
            mdxld_yaml::Error::Validation(err) => Self::Validation(err),
        }
    }
}

impl MdxldError {
    /// Names of the missing required fields, for validation failures.
    pub fn missing_fields(&self) -> Option<&[String]> {
        match self {
            Self::Validation(err) => Some(err.missing_fields()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, MdxldError>;
