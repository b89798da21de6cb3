//! Render observer and completion callback

use crate::pagination::PageButtons;
use std::sync::{Arc, Mutex};

/// Completion callback, invoked with the new page after each transition
pub type PageLoadedFn = Arc<dyn Fn(u32) + Send + Sync>;

/// Receives pagination display changes
///
/// Observers build and wire the actual widgets; they never mutate
/// pagination state.
pub trait RenderObserver: Send + Sync {
    fn page_changed(&self, _page: u32) {}

    fn max_page_changed(&self, _max_page: u32) {}

    fn buttons_changed(&self, _buttons: &PageButtons) {}
}

/// Last state seen by a [`RecordingObserver`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderSnapshot {
    pub page: Option<u32>,
    pub max_page: Option<u32>,
    pub buttons: Option<PageButtons>,
    /// Total number of notifications received
    pub notifications: usize,
}

/// Observer that records the latest display state
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    snapshot: Arc<Mutex<RenderSnapshot>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        self.snapshot
            .lock()
            .map(|s| s.clone())
            .unwrap_or_default()
    }

    fn update(&self, f: impl FnOnce(&mut RenderSnapshot)) {
        if let Ok(mut snapshot) = self.snapshot.lock() {
            f(&mut snapshot);
            snapshot.notifications += 1;
        }
    }
}

impl RenderObserver for RecordingObserver {
    fn page_changed(&self, page: u32) {
        self.update(|s| s.page = Some(page));
    }

    fn max_page_changed(&self, max_page: u32) {
        self.update(|s| s.max_page = Some(max_page));
    }

    fn buttons_changed(&self, buttons: &PageButtons) {
        self.update(|s| s.buttons = Some(buttons.clone()));
    }
}
