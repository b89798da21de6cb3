//! CLI module
//!
//! Command-line interface for inspecting pagination.
//!
//! # Commands
//!
//! - `window` - Show the page buttons for a page
//! - `slice` - Show one page of a local JSON array
//! - `fetch` - Load a page from a remote endpoint

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
