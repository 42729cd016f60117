use thiserror::Error;

/// Stardate error types
#[derive(Error, Debug)]
pub enum StardateError {
    #[error("Invalid date: {0}")]
    Date(String),

    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for stardate operations
pub type Result<T> = std::result::Result<T, StardateError>;
