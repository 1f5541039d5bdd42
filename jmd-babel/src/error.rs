//! Error types for format operations

use std::fmt;

/// Errors that can occur during format operations
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// The external converter could not be located
    ConverterUnavailable(String),
    /// The external converter ran but did not produce usable output
    ConversionError(String),
    /// Reading the source or writing the converted document failed
    IoError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::ConverterUnavailable(msg) => write!(f, "Converter unavailable: {msg}"),
            FormatError::ConversionError(msg) => write!(f, "Conversion error: {msg}"),
            FormatError::IoError(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

impl From<std::io::Error> for FormatError {
    fn from(err: std::io::Error) -> Self {
        FormatError::IoError(err.to_string())
    }
}
