//! Error types for the image converter.
//!
//! Provides a hierarchy of error types using `thiserror` for ergonomic error handling.

use std::path::PathBuf;
use thiserror::Error;
use serde::Serialize;

/// Validation errors for a conversion request and its settings.
#[derive(Error, Debug, Serialize)]
pub enum ValidationError {
    /// The request carried no input files
    #[error("No files selected.")]
    NoFiles,
    /// The request carried an empty output directory
    #[error("No output directory selected.")]
    NoOutputDir,
    /// Path-related validation error
    #[error("Path error: {0}")]
    Path(#[from] PathError),
    /// Invalid settings error
    #[error("Settings error: {0}")]
    Settings(String),
}

/// File path errors.
#[derive(Error, Debug, Serialize)]
pub enum PathError {
    /// Path has no final file name component
    #[error("No file name in path: {0}")]
    NoFileName(PathBuf),
}

/// Main error type for the converter.
///
/// Codec and filesystem failures are flattened to strings so the error stays
/// `Serialize` and can be shipped to whatever front end observes the job.
#[derive(Error, Debug, Serialize)]
pub enum ConverterError {
    /// Request or input validation failed
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The source image could not be read or decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// The converted image could not be encoded or written
    #[error("Encode error: {0}")]
    Encode(String),

    /// Unsupported or invalid image format
    #[error("Format error: {0}")]
    Format(String),

    /// Configuration could not be loaded or is invalid
    #[error("Config error: {0}")]
    Config(String),
}

/// Convenience result type for converter operations.
pub type ConverterResult<T> = Result<T, ConverterError>;

// Helper methods for error creation
impl ConverterError {
    pub fn decode<T: Into<String>>(msg: T) -> Self {
        Self::Decode(msg.into())
    }

    pub fn encode<T: Into<String>>(msg: T) -> Self {
        Self::Encode(msg.into())
    }

    pub fn format<T: Into<String>>(msg: T) -> Self {
        Self::Format(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        Self::Config(msg.into())
    }
}

// Helper methods for validation error creation
impl ValidationError {
    pub fn no_file_name(path: impl Into<PathBuf>) -> Self {
        Self::Path(PathError::NoFileName(path.into()))
    }

    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }
}

// Convert PathError to ConverterError
impl From<PathError> for ConverterError {
    fn from(err: PathError) -> Self {
        Self::Validation(ValidationError::Path(err))
    }
}
