//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Family snapshot could not be loaded
    #[error("Store error: {0}")]
    Store(#[from] kindred_store::StoreError),

    /// Kinship computation failed
    #[error("Kinship error: {0}")]
    Kinship(#[from] kindred_engine::KinshipError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No person matches the given id or name
    #[error("No person matches '{0}'")]
    PersonNotFound(String),

    /// Several people share the given name
    #[error("'{0}' matches {1} people; use an id instead")]
    Ambiguous(String, usize),
}
