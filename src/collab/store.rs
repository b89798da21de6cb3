//! Row storage and sort/filter collaborators

use crate::remote::{FilterDescriptor, Sorter};
use crate::types::Row;

/// Viewport metrics of the rendered row area, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// Visible height
    pub client_height: u32,
    /// Total height of the rendered content
    pub scroll_height: u32,
}

/// Row storage of the embedding grid
pub trait RowStore: Send + Sync {
    /// Append rows to the existing data
    fn add_rows(&mut self, rows: Vec<Row>);

    /// Replace all rows
    ///
    /// `append` marks a replacement that extends the previous data and
    /// should keep the scroll position.
    fn set_data(&mut self, rows: Vec<Row>, append: bool);

    /// Current rows
    fn data(&self) -> &[Row];

    /// Current viewport metrics
    fn viewport(&self) -> Viewport;

    /// Horizontal scroll offset
    fn scroll_left(&self) -> u32 {
        0
    }

    /// Restore a horizontal scroll offset
    fn scroll_horizontal(&mut self, _left: u32) {}

    /// Re-run the display pipeline from the pagination stage
    fn refresh_page(&mut self) {}
}

/// In-memory row store with fixed row height
#[derive(Debug, Clone)]
pub struct MemoryRowStore {
    rows: Vec<Row>,
    row_height: u32,
    client_height: u32,
    scroll_left: u32,
    refreshes: usize,
}

impl Default for MemoryRowStore {
    fn default() -> Self {
        Self::new(400, 24)
    }
}

impl MemoryRowStore {
    /// Create an empty store with the given viewport and row height
    pub fn new(client_height: u32, row_height: u32) -> Self {
        Self {
            rows: Vec::new(),
            row_height,
            client_height,
            scroll_left: 0,
            refreshes: 0,
        }
    }

    /// Create a store pre-filled with rows
    pub fn with_rows(rows: Vec<Row>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of local refreshes performed
    pub fn refreshes(&self) -> usize {
        self.refreshes
    }
}

impl RowStore for MemoryRowStore {
    fn add_rows(&mut self, rows: Vec<Row>) {
        self.rows.extend(rows);
    }

    fn set_data(&mut self, rows: Vec<Row>, _append: bool) {
        self.rows = rows;
    }

    fn data(&self) -> &[Row] {
        &self.rows
    }

    fn viewport(&self) -> Viewport {
        let content = u32::try_from(self.rows.len())
            .unwrap_or(u32::MAX)
            .saturating_mul(self.row_height);
        Viewport {
            client_height: self.client_height,
            scroll_height: content.max(self.client_height),
        }
    }

    fn scroll_left(&self) -> u32 {
        self.scroll_left
    }

    fn scroll_horizontal(&mut self, left: u32) {
        self.scroll_left = left;
    }

    fn refresh_page(&mut self) {
        self.refreshes += 1;
    }
}

/// Source of the active sorters
pub trait SortSource: Send + Sync {
    /// Sorters in priority order
    fn sorters(&self) -> Vec<Sorter>;
}

impl SortSource for Vec<Sorter> {
    fn sorters(&self) -> Vec<Sorter> {
        self.clone()
    }
}

/// Source of the active filters
pub trait FilterSource: Send + Sync {
    /// Filters in application order, optionally including header filters
    fn filters(&self, include_header: bool) -> Vec<FilterDescriptor>;
}

impl FilterSource for Vec<FilterDescriptor> {
    fn filters(&self, _include_header: bool) -> Vec<FilterDescriptor> {
        self.clone()
    }
}
