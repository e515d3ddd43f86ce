//! Error handling for the collectkit library
//!
//! Absence (empty container, no match) is reported through `Option` and
//! precondition violations (bad index, empty extremum query, zero chunk size)
//! panic. This module covers the remaining recoverable failures: JSON
//! encoding/decoding and configuration.

use thiserror::Error;

/// Main error type for the collectkit library
#[derive(Error, Debug)]
pub enum CollectionError {
    /// Serializing container contents failed
    #[error("JSON encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// Input was not a well-formed JSON array of the element type
    #[error("JSON decode error: {0}")]
    Decode(#[source] serde_json::Error),

    /// Configuration or parameter errors
    #[error("Invalid configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },
}

impl CollectionError {
    /// Create an encode error
    pub fn encode(source: serde_json::Error) -> Self {
        Self::Encode(source)
    }

    /// Create a decode error
    pub fn decode(source: serde_json::Error) -> Self {
        Self::Decode(source)
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    ///
    /// A failed decode leaves the input unusable but the caller can retry with
    /// corrected data, so it counts as recoverable.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Encode(_) => false,
            Self::Decode(_) => true,
            Self::Configuration { .. } => false,
        }
    }

    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::Encode(_) => "encode",
            Self::Decode(_) => "decode",
            Self::Configuration { .. } => "config",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, CollectionError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<Vec<i32>>("[1,").unwrap_err()
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(CollectionError::decode(json_error()).category(), "decode");
        assert_eq!(CollectionError::encode(json_error()).category(), "encode");
        assert_eq!(CollectionError::configuration("x").category(), "config");
    }

    #[test]
    fn test_recoverable_errors() {
        assert!(CollectionError::decode(json_error()).is_recoverable());
        assert!(!CollectionError::encode(json_error()).is_recoverable());
        assert!(!CollectionError::configuration("bad").is_recoverable());
    }

    #[test]
    fn test_error_display() {
        let err = CollectionError::decode(json_error());
        assert!(err.to_string().starts_with("JSON decode error"));

        let err = CollectionError::configuration("preview_limit must be > 0");
        let display = format!("{}", err);
        assert!(display.contains("Invalid configuration"));
        assert!(display.contains("preview_limit"));
    }

    #[test]
    fn test_error_source() {
        use std::error::Error as _;

        let err = CollectionError::decode(json_error());
        assert!(err.source().is_some());
        assert!(CollectionError::configuration("x").source().is_none());
    }
}
