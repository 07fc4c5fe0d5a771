//! Error types for the paper digest.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for digest operations.
pub type DigestResult<T> = Result<T, DigestError>;

/// Errors that can occur while building a digest.
#[derive(Debug, Error)]
pub enum DigestError {
    /// The HTTP request to the feed failed.
    #[error("feed request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The feed answered with a non-success status.
    #[error("feed returned HTTP {0}")]
    Status(u16),

    /// The feed document could not be parsed.
    #[error("malformed feed: {0}")]
    Feed(String),

    /// A file could not be read or written.
    #[error("cannot access {}: {source}", path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has the wrong shape.
    #[error("invalid config {}: {source}", path.display())]
    Config {
        /// Config file that failed to parse.
        path: PathBuf,
        /// Parse error.
        source: toml::de::Error,
    },
}

impl From<quick_xml::Error> for DigestError {
    fn from(e: quick_xml::Error) -> Self {
        Self::Feed(e.to_string())
    }
}
