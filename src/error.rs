//! Error handling for the resume parser
//!
//! The extraction core is total and never produces these; they belong to the
//! input, configuration and output layers around it.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeParserError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No file provided: {0}")]
    MissingFile(String),

    #[error("File type not supported: {0}")]
    UnsupportedType(String),

    #[error("Failed to decode document: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

impl ResumeParserError {
    /// True for failures that happened before any text reached the extractors.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ResumeParserError::MissingFile(_)
                | ResumeParserError::UnsupportedType(_)
                | ResumeParserError::Decode(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ResumeParserError>;
