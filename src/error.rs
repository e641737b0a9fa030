// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for htmlguard
//!
//! The sanitizer itself is total: every input yields an output. Errors only
//! come from the collaborators around it (HTML parsing, configuration
//! loading), and they are always surfaced to the caller so that a failed
//! parse can never fall through to rendering raw input.

use thiserror::Error;

/// Result type alias for htmlguard operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for htmlguard
#[derive(Error, Debug)]
pub enum Error {
    /// HTML parsing failed
    #[error("HTML parsing error: {0}")]
    HtmlParse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a new HTML parse error
    pub fn html_parse<S: Into<String>>(msg: S) -> Self {
        Error::HtmlParse(msg.into())
    }

    /// Check if this error came from parsing the input markup
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::HtmlParse(_))
    }

    /// Check if this error came from loading or decoding configuration
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config(_) | Error::Serialization(_))
    }
}

/// Helper trait for adding context to errors
pub trait ErrorContext<T> {
    /// Re-classify any error as a configuration error with context
    fn config_context(self, msg: &str) -> Result<T>;
}

impl<T, E: Into<Error>> ErrorContext<T> for std::result::Result<T, E> {
    fn config_context(self, msg: &str) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            Error::Config(format!("{}: {}", msg, err))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error() {
        let err = Error::html_parse("unexpected EOF");
        assert!(err.is_parse());
        assert!(!err.is_config());
        assert_eq!(err.to_string(), "HTML parsing error: unexpected EOF");
    }

    #[test]
    fn test_serde_error_is_config() {
        let err: Error = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(err.is_config());
    }

    #[test]
    fn test_config_context() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        let err = res.config_context("reading policy.json").unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("reading policy.json"));
    }
}
