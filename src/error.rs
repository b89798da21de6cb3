//! Error types for gridpage
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! None of these errors is fatal to a paginator: a failed navigation leaves
//! the pagination state untouched and is also reported on the diagnostics
//! channel (see [`crate::diagnostics`]).

use crate::diagnostics::DiagnosticKind;
use thiserror::Error;

/// The main error type for gridpage
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("Requested page is out of range of 1 - {max}: {requested}")]
    PageOutOfRange { requested: i64, max: u32 },

    #[error("No such pagination mode: {mode}")]
    UnsupportedMode { mode: String },

    // ============================================================================
    // Remote Protocol Errors
    // ============================================================================
    #[error("Server response missing '{field}' property")]
    MissingResponseField { field: String },

    #[error("Server response has invalid '{field}' property: {message}")]
    InvalidResponseField { field: String, message: String },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Rate limited, retry after {retry_after_seconds}s")]
    RateLimited { retry_after_seconds: u64 },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a page out of range error
    pub fn out_of_range(requested: i64, max: u32) -> Self {
        Self::PageOutOfRange { requested, max }
    }

    /// Create a missing response field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingResponseField {
            field: field.into(),
        }
    }

    /// Create an invalid response field error
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidResponseField {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an unsupported mode error
    pub fn unsupported_mode(mode: impl Into<String>) -> Self {
        Self::UnsupportedMode { mode: mode.into() }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Classify this error for the diagnostics channel
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            Error::PageOutOfRange { .. } => DiagnosticKind::Range,
            Error::MissingResponseField { .. } | Error::InvalidResponseField { .. } => {
                DiagnosticKind::Protocol
            }
            Error::UnsupportedMode { .. } => DiagnosticKind::Mode,
            Error::Config { .. }
            | Error::InvalidConfigValue { .. }
            | Error::YamlParse(_)
            | Error::JsonParse(_) => DiagnosticKind::Config,
            Error::Http(_)
            | Error::HttpStatus { .. }
            | Error::RateLimited { .. }
            | Error::Timeout { .. }
            | Error::InvalidUrl(_)
            | Error::Io(_)
            | Error::Other(_) => DiagnosticKind::Transport,
        }
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(_) | Error::RateLimited { .. } | Error::Timeout { .. } => true,
            Error::HttpStatus { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }
}

/// Check if an HTTP status code is retryable
fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

/// Result type alias for gridpage
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::out_of_range(11, 10);
        assert_eq!(
            err.to_string(),
            "Requested page is out of range of 1 - 10: 11"
        );

        let err = Error::missing_field("last_page");
        assert_eq!(
            err.to_string(),
            "Server response missing 'last_page' property"
        );

        let err = Error::http_status(404, "Not found");
        assert_eq!(err.to_string(), "HTTP 404: Not found");
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(Error::out_of_range(0, 3).kind(), DiagnosticKind::Range);
        assert_eq!(Error::missing_field("data").kind(), DiagnosticKind::Protocol);
        assert_eq!(
            Error::invalid_field("last_page", "not a number").kind(),
            DiagnosticKind::Protocol
        );
        assert_eq!(Error::unsupported_mode("infinite").kind(), DiagnosticKind::Mode);
        assert_eq!(Error::config("bad").kind(), DiagnosticKind::Config);
        assert_eq!(Error::http_status(500, "").kind(), DiagnosticKind::Transport);
    }

    #[test]
    fn test_is_retryable() {
        assert!(Error::RateLimited {
            retry_after_seconds: 60
        }
        .is_retryable());
        assert!(Error::Timeout { timeout_ms: 1000 }.is_retryable());
        assert!(Error::http_status(429, "").is_retryable());
        assert!(Error::http_status(503, "").is_retryable());

        assert!(!Error::http_status(404, "").is_retryable());
        assert!(!Error::out_of_range(2, 1).is_retryable());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
