//! Error types for the dawat crates.

use thiserror::Error;

/// Errors that can occur in dawat operations.
#[derive(Error, Debug)]
pub enum DawatError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("ICS generation error: {0}")]
    IcsGenerate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for dawat operations.
pub type DawatResult<T> = Result<T, DawatError>;
