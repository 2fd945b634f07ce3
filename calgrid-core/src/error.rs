//! Error types for calgrid.

use thiserror::Error;

/// Errors that can occur in calgrid operations.
#[derive(Error, Debug)]
pub enum CalGridError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Event id already in use: {0}")]
    DuplicateEventId(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for calgrid operations.
pub type CalGridResult<T> = Result<T, CalGridError>;
