//! Error types for eia-extract
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! The taxonomy matters for control flow: server-side HTTP errors (status
//! >= 500) are the only retryable failures; everything else aborts the run.

use thiserror::Error;

/// The main error type for eia-extract
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required environment variable: {name}")]
    MissingEnv { name: String },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Retry budget ({budget}) exhausted by repeated server errors")]
    RetriesExhausted { budget: u32 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Response Decoding Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Unexpected response shape: {message}")]
    ResponseShape { message: String },

    // ============================================================================
    // Sink Errors
    // ============================================================================
    #[error("Storage error: {0}")]
    Store(#[from] object_store::Error),

    #[error("Sink error: {message}")]
    Sink { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing environment variable error
    pub fn missing_env(name: impl Into<String>) -> Self {
        Self::MissingEnv { name: name.into() }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a response shape error
    pub fn response_shape(message: impl Into<String>) -> Self {
        Self::ResponseShape {
            message: message.into(),
        }
    }

    /// Create a sink error
    pub fn sink(message: impl Into<String>) -> Self {
        Self::Sink {
            message: message.into(),
        }
    }

    /// Check if this error is retryable
    ///
    /// Only server-side HTTP failures qualify. Client errors (4xx) signal a
    /// caller defect that retrying cannot fix, and transport or decoding
    /// failures abort immediately.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::HttpStatus { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }
}

/// Check if an HTTP status code is retryable
fn is_retryable_status(status: u16) -> bool {
    status >= 500
}

/// Result type alias for eia-extract
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::missing_env("EIA_API_KEY");
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: EIA_API_KEY"
        );

        let err = Error::http_status(404, "Not found");
        assert_eq!(err.to_string(), "HTTP 404: Not found");

        let err = Error::RetriesExhausted { budget: 3 };
        assert_eq!(
            err.to_string(),
            "Retry budget (3) exhausted by repeated server errors"
        );
    }

    #[test]
    fn test_is_retryable() {
        assert!(Error::http_status(500, "").is_retryable());
        assert!(Error::http_status(502, "").is_retryable());
        assert!(Error::http_status(503, "").is_retryable());
        assert!(Error::http_status(504, "").is_retryable());

        assert!(!Error::http_status(400, "").is_retryable());
        assert!(!Error::http_status(404, "").is_retryable());
        // 429 is below 500 and therefore fatal for this API
        assert!(!Error::http_status(429, "").is_retryable());
        assert!(!Error::config("test").is_retryable());
        assert!(!Error::response_shape("missing total").is_retryable());
    }
}
