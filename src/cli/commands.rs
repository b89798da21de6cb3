//! CLI commands and argument parsing

use crate::pagination::PaginationMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Grid pagination toolkit
#[derive(Parser, Debug)]
#[command(name = "gridpage")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the page buttons for a page
    Window {
        /// Current page
        #[arg(long)]
        page: u32,

        /// Last page
        #[arg(long)]
        max: u32,

        /// Number of page buttons
        #[arg(long, default_value = "5")]
        count: u32,
    },

    /// Show one page of a local JSON array of rows
    Slice {
        /// JSON file holding an array of rows
        #[arg(long)]
        file: PathBuf,

        /// Rows per page
        #[arg(long)]
        size: u32,

        /// Page to show
        #[arg(long, default_value = "1")]
        page: u32,
    },

    /// Fetch rows from a remote endpoint
    Fetch {
        /// Pagination options file (YAML or JSON)
        #[arg(long)]
        config: PathBuf,

        /// Page to fetch
        #[arg(long, default_value = "1")]
        page: u32,

        /// Override the configured mode (remote, progressive_load, progressive_scroll)
        #[arg(long)]
        mode: Option<PaginationMode>,

        /// Override the configured endpoint
        #[arg(long)]
        url: Option<String>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Human-readable output
    Pretty,
}
