//! Error handling for the ATS scorer boundary
//!
//! The scoring engine itself is infallible; these errors only come from
//! loading inputs, configuration and model artifacts, and rendering output.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtsScorerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Text extraction error: {0}")]
    Extraction(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, AtsScorerError>;

/// TOML parse failures only come from config and model files
impl From<toml::de::Error> for AtsScorerError {
    fn from(err: toml::de::Error) -> Self {
        AtsScorerError::Configuration(err.to_string())
    }
}
