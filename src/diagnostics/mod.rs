//! Diagnostics module
//!
//! Structured reporting channel for non-fatal pagination failures.
//!
//! # Overview
//!
//! Navigation and remote sync never abort on bad input. Instead the
//! controller returns an `Err` to the caller and reports a [`Diagnostic`]
//! (kind, message, context) to a [`DiagnosticSink`]. The embedding
//! application decides where diagnostics go: logs, telemetry, UI toasts.

mod sinks;
mod types;

pub use sinks::{CollectingSink, DiagnosticSink, TracingSink};
pub use types::{Diagnostic, DiagnosticKind};
