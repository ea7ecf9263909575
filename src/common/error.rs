//! Error handling module
//!
//! This module defines the error types and result type alias used in the crate.

use thiserror::Error;

/// Transport translation error type
#[derive(Error, Debug)]
pub enum TranslateError {
    /// A source construct has no representation in the target schema
    #[error("unsupported v2ray {0}")]
    UnsupportedFeature(String),

    /// The declared transport kind is not one of the recognized variants
    #[error("unsupported v2ray transport type: {0}")]
    UnsupportedTransport(String),

    /// The WebSocket path failed to parse as a URL
    #[error("malformed WebSocket path '{path}': {source}")]
    MalformedPath {
        path: String,
        #[source]
        source: url::ParseError,
    },
}

/// Result type alias
///
/// This is a `Result` type alias that uses our custom `TranslateError`.
pub type Result<T> = std::result::Result<T, TranslateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TranslateError::UnsupportedTransport("kcp".to_string());
        let err_str = format!("{}", err);
        assert!(err_str.contains("kcp"));

        let err = TranslateError::UnsupportedFeature("TCP transport with header".to_string());
        assert!(format!("{}", err).contains("TCP transport with header"));
    }

    #[test]
    fn test_malformed_path_source() {
        use std::error::Error;

        let parse_err = url::Url::parse("http://[invalid").unwrap_err();
        let err = TranslateError::MalformedPath {
            path: "/[invalid".to_string(),
            source: parse_err,
        };
        assert!(err.source().is_some());
    }
}
