//! Custom error types for coordinate conversion

use std::fmt;
use std::io;

/// Conversion-specific error types
#[derive(Debug)]
pub enum ConvertError {
    /// I/O error
    IoError(io::Error),
    /// Input text could not be parsed as a number
    InvalidNumber(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::IoError(e) => write!(f, "I/O error: {}", e),
            ConvertError::InvalidNumber(text) => write!(f, "Invalid number: {:?}", text),
            ConvertError::GenericError(msg) => write!(f, "Conversion error: {}", msg),
        }
    }
}

impl std::error::Error for ConvertError {}

impl From<io::Error> for ConvertError {
    fn from(error: io::Error) -> Self {
        ConvertError::IoError(error)
    }
}

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;

impl From<String> for ConvertError {
    fn from(msg: String) -> Self {
        ConvertError::GenericError(msg)
    }
}
