//! Error types for the card-data crate.

use thiserror::Error;

/// Errors that can occur while loading and validating the prebuilt
/// card artifacts.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// I/O error occurred while reading an artifact file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Artifact file was not valid JSON for the expected shape
    #[error("Failed to parse {file}: {source}")]
    ParseError {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// A record field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Two catalog records share the same name
    #[error("Duplicate creature name in catalog: {name}")]
    DuplicateName { name: String },

    /// Data validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
