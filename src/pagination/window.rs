//! Page window calculation
//!
//! Keeps the current page centered in a fixed-width run of page buttons,
//! except near either edge where the window clamps to the data range.

use super::types::PaginationState;
use serde::Serialize;

/// Visible page numbers for `(current, max_page, window_size)`
///
/// ```
/// use gridpage::pagination::page_window;
///
/// assert_eq!(page_window(5, 10, 5), vec![3, 4, 5, 6, 7]);
/// assert_eq!(page_window(10, 10, 5), vec![6, 7, 8, 9, 10]);
/// ```
pub fn page_window(current: u32, max_page: u32, window_size: u32) -> Vec<u32> {
    let page = i64::from(current);
    let max_page = i64::from(max_page);
    let count = i64::from(window_size.max(1));

    let left = (count - 1) / 2;
    let right = count / 2;

    let min = if max_page - page + left + 1 < count {
        max_page - count + 1
    } else {
        (page - left).max(1)
    };

    let max = if page <= right {
        count.min(max_page)
    } else {
        (page + right).min(max_page)
    };

    (min.max(1)..=max.min(max_page))
        .map(|p| p as u32)
        .collect()
}

/// A numbered page button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageButton {
    /// Page the button navigates to
    pub page: u32,
    /// Whether this is the current page
    pub active: bool,
}

/// Enabled state of every navigation button
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageButtons {
    pub first: bool,
    pub prev: bool,
    pub next: bool,
    pub last: bool,
    /// Numbered buttons, ascending
    pub pages: Vec<PageButton>,
}

impl PageButtons {
    /// Compute button state for the given pagination state
    pub fn from_state(state: &PaginationState) -> Self {
        let at_start = state.page() == 1;
        let at_end = state.page() == state.max_page();

        let pages = page_window(state.page(), state.max_page(), state.window_size())
            .into_iter()
            .map(|page| PageButton {
                page,
                active: page == state.page(),
            })
            .collect();

        Self {
            first: !at_start,
            prev: !at_start,
            next: !at_end,
            last: !at_end,
            pages,
        }
    }

    /// Page numbers of the visible window
    pub fn window(&self) -> Vec<u32> {
        self.pages.iter().map(|b| b.page).collect()
    }

    /// The active page, if it is inside the window
    pub fn active(&self) -> Option<u32> {
        self.pages.iter().find(|b| b.active).map(|b| b.page)
    }
}
