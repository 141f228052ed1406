use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Every stage failure bubbles here unmodified; `main` is the single
/// recovery point and converts the error into a printed banner.
#[derive(Debug, Error)]
pub enum CoachError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No input provided for {0}")]
    EmptyInput(&'static str),

    #[error("Generation error: {0}")]
    Generation(#[from] LlmError),

    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}
