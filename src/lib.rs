// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # gridpage
//!
//! Pagination for data grids: page-window calculation, remote page
//! requests and progressive loading.
//!
//! ## Features
//!
//! - **Local Pagination**: Slice an in-memory row set into pages
//! - **Remote Pagination**: Request one page at a time with configurable
//!   parameter and response field names
//! - **Progressive Loading**: Append pages on a timer, or until the viewport
//!   is filled
//! - **Page Windows**: Centered button ranges clamped to the page bounds
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gridpage::{HttpTransport, MemoryRowStore, PaginationController, PaginationOptions};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> gridpage::Result<()> {
//!     let options = PaginationOptions::from_file("grid.yaml")?;
//!     let transport = HttpTransport::new("https://api.example.com/rows")?;
//!
//!     let mut controller = PaginationController::new(&options, Box::new(MemoryRowStore::default()))?
//!         .with_transport(Arc::new(transport));
//!
//!     controller.trigger().await?;
//!     controller.next_page().await?;
//!
//!     println!("page {} of {}", controller.page(), controller.max_page());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     PaginationController                        │
//! │  set_page / next_page / previous_page / trigger / get_rows      │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌────────────┬─────────────────┼───────────────┬──────────────────┐
//! │ Pagination │     Remote      │  Progressive  │    Collab        │
//! ├────────────┼─────────────────┼───────────────┼──────────────────┤
//! │ State      │ Request params  │ Append        │ Transport (HTTP) │
//! │ Window     │ Response parse  │ Scroll        │ RowStore         │
//! │ Buttons    │ Paginator fn    │               │ Observer         │
//! └────────────┴─────────────────┴───────────────┴──────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Pagination state and page windows
pub mod pagination;

/// Remote request and response mapping
pub mod remote;

/// Progressive loading policies
pub mod progressive;

/// Collaborator interfaces
pub mod collab;

/// Diagnostics reporting
pub mod diagnostics;

/// HTTP transport with retry and rate limiting
pub mod http;

/// Pagination controller
pub mod controller;

/// Paginator options
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use collab::{MemoryRowStore, RenderObserver, RowStore, Transport};
pub use config::PaginationOptions;
pub use controller::PaginationController;
pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink};
pub use http::HttpTransport;
pub use pagination::{page_window, PaginationMode, PaginationState};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
