//! Core error types for seqlens

pub mod validation;

use thiserror::Error;
pub use validation::ValidationError;

/// Main error type for seqlens operations
#[derive(Error, Debug)]
pub enum SeqlensError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Parsing error: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Result type alias for seqlens operations
pub type SeqlensResult<T> = Result<T, SeqlensError>;

impl From<serde_json::Error> for SeqlensError {
    fn from(err: serde_json::Error) -> Self {
        SeqlensError::Serialization(err.to_string())
    }
}

impl From<anyhow::Error> for SeqlensError {
    fn from(err: anyhow::Error) -> Self {
        SeqlensError::Other(err.to_string())
    }
}
