//! Diagnostic types

use crate::error::Error;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Category of a reported diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Navigation target outside `[1, max_page]`
    Range,
    /// Remote response missing or carrying malformed required fields
    Protocol,
    /// Unrecognized pagination mode
    Mode,
    /// Transport failure (HTTP, timeout, URL)
    Transport,
    /// Invalid configuration
    Config,
}

impl DiagnosticKind {
    /// Stable name used in log fields
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Range => "range",
            Self::Protocol => "protocol",
            Self::Mode => "mode",
            Self::Transport => "transport",
            Self::Config => "config",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single diagnostic report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    /// Failure category
    pub kind: DiagnosticKind,
    /// Human-readable message
    pub message: String,
    /// Structured context (requested page, missing field, ...)
    pub context: Value,
}

impl Diagnostic {
    /// Create a diagnostic without context
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: Value::Null,
        }
    }

    /// Attach structured context
    #[must_use]
    pub fn with_context(mut self, context: Value) -> Self {
        self.context = context;
        self
    }

    /// Build a diagnostic from a crate error
    pub fn from_error(error: &Error) -> Self {
        let context = match error {
            Error::PageOutOfRange { requested, max } => {
                serde_json::json!({ "requested": requested, "max": max })
            }
            Error::MissingResponseField { field } | Error::InvalidResponseField { field, .. } => {
                serde_json::json!({ "field": field })
            }
            Error::UnsupportedMode { mode } => serde_json::json!({ "mode": mode }),
            Error::HttpStatus { status, .. } => serde_json::json!({ "status": status }),
            _ => Value::Null,
        };

        Self {
            kind: error.kind(),
            message: error.to_string(),
            context,
        }
    }
}

impl From<&Error> for Diagnostic {
    fn from(error: &Error) -> Self {
        Self::from_error(error)
    }
}
