//! TitleNorm Error Types
//!
//! Centralized error handling for the normaliser and its configuration.

use thiserror::Error;

/// Central error type for TitleNorm
#[derive(Error, Debug)]
pub enum NormError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias for TitleNorm operations
pub type NormResult<T> = Result<T, NormError>;

impl NormError {
    /// Error for a job title that was not supplied at all
    pub fn null_title() -> Self {
        NormError::InvalidArgument("job title cannot be null".to_string())
    }
}
