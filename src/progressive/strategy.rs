//! Progressive strategy implementation

use crate::collab::RowStore;
use crate::pagination::{PaginationMode, PaginationState};
use crate::types::Row;
use std::time::Duration;
use tracing::debug;

/// What to do after a progressive page has been applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    /// No further page is needed
    Stop,
    /// Fetch the next page after the delay
    After(Duration),
    /// Fetch the next page within the same response-handling step
    Immediately,
}

impl Continuation {
    /// Check if another page should be fetched
    pub fn should_continue(&self) -> bool {
        !matches!(self, Self::Stop)
    }
}

/// Progressive auto-load policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressiveStrategy {
    /// Append every page, pausing `delay` between requests
    Append { delay: Duration },
    /// Append pages until content exceeds the viewport plus `margin` pixels
    ///
    /// Without a margin, twice the viewport height is used.
    Scroll { margin: Option<u32> },
}

impl ProgressiveStrategy {
    /// Strategy for a pagination mode, if it is progressive
    pub fn for_mode(mode: PaginationMode, delay: Duration, margin: Option<u32>) -> Option<Self> {
        match mode {
            PaginationMode::ProgressiveLoad => Some(Self::Append { delay }),
            PaginationMode::ProgressiveScroll => Some(Self::Scroll { margin }),
            PaginationMode::Local | PaginationMode::Remote => None,
        }
    }

    /// Store a freshly received page and decide how to continue
    ///
    /// `state` must already carry the `max_page` from the response.
    pub fn apply(
        &self,
        store: &mut dyn RowStore,
        rows: Vec<Row>,
        state: &PaginationState,
    ) -> Continuation {
        match self {
            Self::Append { delay } => {
                store.add_rows(rows);

                if state.has_next() {
                    Continuation::After(*delay)
                } else {
                    debug!(page = state.page(), "Progressive load reached last page");
                    Continuation::Stop
                }
            }
            Self::Scroll { margin } => {
                let mut data = store.data().to_vec();
                data.extend(rows);
                store.set_data(data, true);

                let viewport = store.viewport();
                let margin = margin.unwrap_or_else(|| viewport.client_height.saturating_mul(2));
                let threshold = viewport.client_height.saturating_add(margin);

                if viewport.scroll_height <= threshold && state.has_next() {
                    debug!(
                        scroll_height = viewport.scroll_height,
                        threshold, "Viewport not filled, loading next page"
                    );
                    Continuation::Immediately
                } else {
                    Continuation::Stop
                }
            }
        }
    }
}
