use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// All errors produced by the stylesheet generator.
#[derive(Debug, Error)]
pub enum StyleError {
    /// Element type outside the closed set of supported kinds.
    #[error("unsupported element type: {0}")]
    UnsupportedElement(String),

    /// Directory creation or file write failed while persisting.
    #[error("cannot write '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration values that cannot be used.
    #[error("invalid config: {0}")]
    Config(String),

    /// Malformed JSON input (config file or element list).
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StyleError>;

/// Shorthand constructors.
impl StyleError {
    pub fn unsupported(kind: &str) -> Self {
        Self::UnsupportedElement(kind.to_string())
    }

    pub fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn config(msg: &str) -> Self {
        Self::Config(msg.to_string())
    }

    /// True for failures the caller may skip and carry on from.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::UnsupportedElement(_))
    }
}
