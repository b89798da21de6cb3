//! Pagination types
//!
//! Defines the pagination mode and the mutable state record.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// How page data is sourced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum PaginationMode {
    /// Slice an in-memory dataset
    #[default]
    Local,
    /// Fetch one page per request
    Remote,
    /// Fetch every page in sequence, appending rows
    ProgressiveLoad,
    /// Fetch pages while the viewport is not yet filled
    ProgressiveScroll,
}

impl PaginationMode {
    /// Check if pages are fetched from a transport
    pub fn is_remote(&self) -> bool {
        !matches!(self, Self::Local)
    }

    /// Check if this is one of the progressive modes
    pub fn is_progressive(&self) -> bool {
        matches!(self, Self::ProgressiveLoad | Self::ProgressiveScroll)
    }

    /// Mode name as used in configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Remote => "remote",
            Self::ProgressiveLoad => "progressive_load",
            Self::ProgressiveScroll => "progressive_scroll",
        }
    }
}

impl fmt::Display for PaginationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaginationMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "remote" => Ok(Self::Remote),
            "progressive_load" | "load" => Ok(Self::ProgressiveLoad),
            "progressive_scroll" | "scroll" => Ok(Self::ProgressiveScroll),
            _ => Err(Error::unsupported_mode(s)),
        }
    }
}

impl TryFrom<String> for PaginationMode {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Mutable pagination record
///
/// Invariant: `1 <= page <= max_page` and `page_size >= 1` after every
/// mutation made through these methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    /// Data sourcing mode
    pub(crate) mode: PaginationMode,
    /// Rows per page
    pub(crate) page_size: u32,
    /// Current page (1-based)
    pub(crate) page: u32,
    /// Last page (1-based)
    pub(crate) max_page: u32,
    /// Number of page buttons to show
    pub(crate) window_size: u32,
    /// Position within the display pipeline
    pub(crate) display_index: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            mode: PaginationMode::Local,
            page_size: 1,
            page: 1,
            max_page: 1,
            window_size: 5,
            display_index: 0,
        }
    }
}

impl PaginationState {
    /// Create a new state on page 1 of 1
    pub fn new(mode: PaginationMode, page_size: u32, window_size: u32) -> Self {
        Self {
            mode,
            page_size: page_size.max(1),
            window_size: window_size.max(1),
            ..Default::default()
        }
    }

    pub fn mode(&self) -> PaginationMode {
        self.mode
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn max_page(&self) -> u32 {
        self.max_page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn window_size(&self) -> u32 {
        self.window_size
    }

    pub fn display_index(&self) -> usize {
        self.display_index
    }

    pub fn set_display_index(&mut self, index: usize) {
        self.display_index = index;
    }

    /// Set rows per page, ignoring zero
    pub fn set_page_size(&mut self, size: u32) {
        if size > 0 {
            self.page_size = size;
        }
    }

    /// Recompute the last page from a row count
    ///
    /// Clamps the current page without reporting anything.
    pub fn set_max_rows(&mut self, row_count: usize) {
        self.max_page = if row_count == 0 {
            1
        } else {
            let pages = row_count.div_ceil(self.page_size as usize);
            u32::try_from(pages).unwrap_or(u32::MAX)
        };

        if self.page > self.max_page {
            self.page = self.max_page;
        }
    }

    /// Set the last page, treating zero as one
    ///
    /// Returns `true` when the current page had to be clamped.
    pub fn set_max_page(&mut self, max: u32) -> bool {
        self.max_page = max.max(1);

        if self.page > self.max_page {
            self.page = self.max_page;
            true
        } else {
            false
        }
    }

    /// Check a requested page against `[1, max_page]`
    pub fn validate_page(&self, requested: i64) -> Result<u32> {
        if requested >= 1 && requested <= i64::from(self.max_page) {
            Ok(requested as u32)
        } else {
            Err(Error::out_of_range(requested, self.max_page))
        }
    }

    /// Move to a validated page
    pub(crate) fn goto(&mut self, page: u32) {
        self.page = page.clamp(1, self.max_page);
    }

    /// Return to page 1
    pub(crate) fn rewind(&mut self) {
        self.page = 1;
    }

    pub fn has_next(&self) -> bool {
        self.page < self.max_page
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Row index range of the current page within a dataset of `len` rows
    pub fn row_range(&self, len: usize) -> Range<usize> {
        let size = self.page_size as usize;
        let start = size.saturating_mul(self.page as usize - 1);
        let end = start.saturating_add(size);
        start.min(len)..end.min(len)
    }
}
