//! Shared error types for attribute discovery

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for attrscan operations
#[derive(Debug, Error)]
pub enum Error {
    /// The discovery target is neither a package directory nor a module
    #[error("Invalid discovery target: {0}")]
    InvalidInput(String),

    /// A module could not be loaded
    #[error("Failed to load module {path}")]
    ModuleRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Package traversal errors
    #[error(transparent)]
    Walk(#[from] ignore::Error),
}

impl Error {
    /// Create an invalid-input error for an unsupported target
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a module load error with path context
    pub fn module_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ModuleRead {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
