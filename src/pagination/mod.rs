//! Pagination module
//!
//! Supports: Local slicing, Remote fetch-per-page, Progressive load (append / scroll)
//!
//! # Overview
//!
//! The pagination module holds the state record every grid paginator owns
//! and the pure page-window calculation used to decide which page buttons
//! are visible. Orchestration lives in [`crate::controller`].

mod types;
mod window;

pub use types::{PaginationMode, PaginationState};
pub use window::{page_window, PageButton, PageButtons};
