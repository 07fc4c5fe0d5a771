//! Error types for the tarot reader.

use thiserror::Error;

/// Result type for tarot operations.
pub type TarotResult<T> = Result<T, TarotError>;

/// Errors that can occur during a reading session.
#[derive(Debug, Error)]
pub enum TarotError {
    /// Reading from or writing to the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
