//! Pagination controller module
//!
//! Orchestrates pagination state, page windows, remote sync and progressive
//! loading.
//!
//! # Overview
//!
//! `PaginationController` validates navigation requests against the
//! pagination state and dispatches by mode:
//!
//! ```text
//! set_page / next_page / previous_page
//!        │ validate ──✗──▶ Err + Range diagnostic (state unchanged)
//!        ▼
//!     trigger ─── Local ──────────▶ refresh rows ─▶ page_loaded
//!        │
//!        └─ Remote / Progressive ─▶ guard ─▶ send ─▶ parse ──✗──▶ Protocol diagnostic
//!                                                     │
//!                                                     ▼
//!                                      apply rows ─▶ continue? (progressive)
//! ```
//!
//! Every remote page load holds the transport's single-flight guard while
//! the request is outstanding, and takes `&mut self`, so loads on one
//! controller never overlap.

use crate::collab::{
    FilterSource, PageLoadedFn, RenderObserver, RowStore, SortSource, Transport,
};
use crate::config::PaginationOptions;
use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::error::{Error, Result};
use crate::pagination::{PageButtons, PaginationMode, PaginationState};
use crate::progressive::{Continuation, ProgressiveStrategy};
use crate::remote::{PageRequest, PaginatorFn, RemoteSyncAdapter};
use crate::types::Row;
use std::sync::Arc;
use tracing::debug;

/// Pagination controller for one grid
pub struct PaginationController {
    state: PaginationState,
    adapter: RemoteSyncAdapter,
    progressive: Option<ProgressiveStrategy>,
    store: Box<dyn RowStore>,
    transport: Option<Arc<dyn Transport>>,
    sort: Option<Box<dyn SortSource>>,
    filter: Option<Box<dyn FilterSource>>,
    observer: Option<Arc<dyn RenderObserver>>,
    diagnostics: Arc<dyn DiagnosticSink>,
    page_loaded: Option<PageLoadedFn>,
}

impl PaginationController {
    /// Create a controller from validated options
    ///
    /// Without an explicit page size, the page size is derived from the
    /// store's viewport height.
    pub fn new(options: &PaginationOptions, store: Box<dyn RowStore>) -> Result<Self> {
        options.validate()?;

        let page_size = options.resolve_page_size(store.viewport().client_height);
        let state = PaginationState::new(options.mode, page_size, options.button_count);
        let adapter =
            RemoteSyncAdapter::new(options.data_sent.clone(), options.data_received.clone());
        let progressive = ProgressiveStrategy::for_mode(
            options.mode,
            options.progressive_load_delay(),
            options.progressive_scroll_margin,
        );

        debug!(mode = %options.mode, page_size, "Pagination initialized");

        Ok(Self {
            state,
            adapter,
            progressive,
            store,
            transport: None,
            sort: None,
            filter: None,
            observer: None,
            diagnostics: Arc::new(TracingSink),
            page_loaded: None,
        })
    }

    /// Set the transport used by remote and progressive modes
    #[must_use]
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Send the active sorters with every remote request
    #[must_use]
    pub fn with_sort_source(mut self, sort: Box<dyn SortSource>) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Send the active filters with every remote request
    #[must_use]
    pub fn with_filter_source(mut self, filter: Box<dyn FilterSource>) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Notify an observer of display changes
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn RenderObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Route diagnostics to a sink (default: `tracing`)
    #[must_use]
    pub fn with_diagnostics(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = sink;
        self
    }

    /// Call back after each completed page transition
    #[must_use]
    pub fn with_page_loaded(mut self, callback: PageLoadedFn) -> Self {
        self.page_loaded = Some(callback);
        self
    }

    /// Replace default remote request construction
    #[must_use]
    pub fn with_paginator(mut self, paginator: PaginatorFn) -> Self {
        self.adapter = self.adapter.with_paginator(paginator);
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    pub fn page(&self) -> u32 {
        self.state.page()
    }

    pub fn max_page(&self) -> u32 {
        self.state.max_page()
    }

    pub fn page_size(&self) -> u32 {
        self.state.page_size()
    }

    pub fn mode(&self) -> PaginationMode {
        self.state.mode()
    }

    pub fn is_progressive(&self) -> bool {
        self.progressive.is_some()
    }

    pub fn display_index(&self) -> usize {
        self.state.display_index()
    }

    pub fn set_display_index(&mut self, index: usize) {
        self.state.set_display_index(index);
    }

    pub fn store(&self) -> &dyn RowStore {
        self.store.as_ref()
    }

    pub fn store_mut(&mut self) -> &mut dyn RowStore {
        self.store.as_mut()
    }

    /// Current button state
    pub fn page_buttons(&self) -> PageButtons {
        PageButtons::from_state(&self.state)
    }

    // ========================================================================
    // Passive updates
    // ========================================================================

    /// Set rows per page; zero is ignored
    pub fn set_page_size(&mut self, size: u32) {
        self.state.set_page_size(size);
    }

    /// Recompute the last page from a row count
    ///
    /// Clamps the current page but never reloads.
    pub fn set_max_rows(&mut self, row_count: usize) {
        let before = (self.state.page(), self.state.max_page());
        self.state.set_max_rows(row_count);
        self.notify_changes(before);
    }

    /// Return to page 1 without loading
    ///
    /// Only local pagination rewinds unless `force` is set. Never fails;
    /// the `Result` matches the other navigation calls.
    pub fn reset(&mut self, force: bool) -> Result<()> {
        if self.state.mode() == PaginationMode::Local || force {
            let before = (self.state.page(), self.state.max_page());
            self.state.rewind();
            self.notify_changes(before);
        }
        Ok(())
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Set the last page
    ///
    /// When the current page falls past the new last page it is clamped and
    /// the page is reloaded.
    pub async fn set_max_page(&mut self, max: u32) -> Result<()> {
        let before = (self.state.page(), self.state.max_page());
        let clamped = self.state.set_max_page(max);
        self.notify_changes(before);

        if clamped {
            self.trigger().await
        } else {
            Ok(())
        }
    }

    /// Go to a page in `[1, max_page]` and load it
    ///
    /// Out-of-range requests return `PageOutOfRange` and leave the state
    /// unchanged. Failures while loading an accepted page are reported to
    /// the diagnostics sink.
    pub async fn set_page(&mut self, page: u32) -> Result<()> {
        let page = match self.state.validate_page(i64::from(page)) {
            Ok(page) => page,
            Err(e) => {
                self.report(&e);
                return Err(e);
            }
        };

        self.goto_and_load(page).await;
        Ok(())
    }

    /// Load a page before the last page is known
    ///
    /// Remote modes raise the last page to `page` so the first request can
    /// target it directly; the response then sets the real last page.
    /// Local mode validates like [`Self::set_page`].
    pub async fn load_page(&mut self, page: u32) -> Result<()> {
        if self.state.mode() == PaginationMode::Local {
            return self.set_page(page).await;
        }

        let before = (self.state.page(), self.state.max_page());
        let page = page.max(1);
        if page > self.state.max_page() {
            self.state.set_max_page(page);
        }
        self.state.goto(page);
        self.notify_changes(before);

        self.trigger().await
    }

    /// Go to the first page
    pub async fn first_page(&mut self) -> Result<()> {
        self.set_page(1).await
    }

    /// Go to the last page
    pub async fn last_page(&mut self) -> Result<()> {
        self.set_page(self.state.max_page()).await
    }

    /// Advance one page
    ///
    /// At the last page this fails; progressive modes expect that and do
    /// not report it.
    pub async fn next_page(&mut self) -> Result<()> {
        if !self.state.has_next() {
            let err = Error::out_of_range(i64::from(self.state.max_page()) + 1, self.state.max_page());
            if !self.is_progressive() {
                self.report(&err);
            }
            return Err(err);
        }

        self.goto_and_load(self.state.page() + 1).await;
        Ok(())
    }

    /// Go back one page
    pub async fn previous_page(&mut self) -> Result<()> {
        if !self.state.has_previous() {
            let err = Error::out_of_range(0, self.state.max_page());
            self.report(&err);
            return Err(err);
        }

        self.goto_and_load(self.state.page() - 1).await;
        Ok(())
    }

    /// Load the current page according to the mode
    pub async fn trigger(&mut self) -> Result<()> {
        debug!(mode = %self.state.mode(), page = self.state.page(), "Pagination trigger");

        match self.state.mode() {
            PaginationMode::Local => {
                self.refresh_local();
                Ok(())
            }
            PaginationMode::Remote
            | PaginationMode::ProgressiveLoad
            | PaginationMode::ProgressiveScroll => {
                let result = self.load_remote().await;
                if let Err(ref e) = result {
                    self.report(e);
                }
                result
            }
        }
    }

    // ========================================================================
    // Row access
    // ========================================================================

    /// Rows to display for the current page
    ///
    /// Recomputes the page window and notifies the observer. Local mode
    /// slices `data`; other modes already hold a single page (or the
    /// progressively accumulated rows) and return a copy of all of it.
    pub fn get_rows(&self, data: &[Row]) -> Vec<Row> {
        self.notify_buttons();

        match self.state.mode() {
            PaginationMode::Local => data[self.state.row_range(data.len())].to_vec(),
            PaginationMode::Remote
            | PaginationMode::ProgressiveLoad
            | PaginationMode::ProgressiveScroll => data.to_vec(),
        }
    }

    /// Rows to display from the controller's own store
    ///
    /// In local mode the last page is first recomputed from the store size.
    pub fn page_rows(&mut self) -> Vec<Row> {
        if self.state.mode() == PaginationMode::Local {
            self.set_max_rows(self.store.data().len());
        }
        self.get_rows(self.store.data())
    }

    // ========================================================================
    // Internals
    // ========================================================================

    async fn goto_and_load(&mut self, page: u32) {
        let before = (self.state.page(), self.state.max_page());
        self.state.goto(page);
        self.notify_changes(before);

        // Failures are already reported by trigger
        let _ = self.trigger().await;
    }

    fn refresh_local(&mut self) {
        let left = self.store.scroll_left();
        self.store.refresh_page();
        self.store.scroll_horizontal(left);
        self.notify_buttons();
        self.notify_loaded();
    }

    fn build_request(&self, transport: &dyn Transport) -> PageRequest {
        let sorters = self.sort.as_ref().map(|s| s.sorters());
        let filters = self.filter.as_ref().map(|f| f.filters(true));

        self.adapter.build_request(
            &transport.url(),
            &transport.params(),
            &self.state,
            sorters.as_deref(),
            filters.as_deref(),
        )
    }

    async fn load_remote(&mut self) -> Result<()> {
        let transport = self
            .transport
            .clone()
            .ok_or_else(|| Error::config("Remote pagination requires a transport"))?;
        let progressive = self.is_progressive();

        loop {
            let body = {
                let _permit = transport.block_active_request().await;
                let request = self.build_request(transport.as_ref());
                debug!(url = %request.url, page = self.state.page(), "Requesting remote page");
                transport.send(&request, progressive).await?
            };

            let response = self.adapter.parse_response(&body)?;

            let before = (self.state.page(), self.state.max_page());
            self.state.set_max_page(response.last_page);
            self.notify_changes(before);

            let Some(strategy) = self.progressive else {
                let left = self.store.scroll_left();
                self.store.set_data(response.data, false);
                self.store.scroll_horizontal(left);
                self.notify_buttons();
                self.notify_loaded();
                return Ok(());
            };

            let continuation = strategy.apply(self.store.as_mut(), response.data, &self.state);
            self.notify_buttons();

            match continuation {
                Continuation::Stop => return Ok(()),
                Continuation::After(delay) => {
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                }
                Continuation::Immediately => {}
            }

            // End of data is the normal way out; nothing to report
            if !self.state.has_next() {
                return Ok(());
            }

            let before = (self.state.page(), self.state.max_page());
            self.state.goto(self.state.page() + 1);
            self.notify_changes(before);
            debug!(page = self.state.page(), "Progressive load continuing");
        }
    }

    fn report(&self, error: &Error) {
        self.diagnostics.report(Diagnostic::from_error(error));
    }

    fn notify_changes(&self, (page, max_page): (u32, u32)) {
        let Some(observer) = &self.observer else {
            return;
        };

        if self.state.max_page() != max_page {
            observer.max_page_changed(self.state.max_page());
        }
        if self.state.page() != page {
            observer.page_changed(self.state.page());
        }
    }

    fn notify_buttons(&self) {
        if let Some(observer) = &self.observer {
            observer.buttons_changed(&self.page_buttons());
        }
    }

    fn notify_loaded(&self) {
        if let Some(callback) = &self.page_loaded {
            callback(self.state.page());
        }
    }
}

impl std::fmt::Debug for PaginationController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaginationController")
            .field("state", &self.state)
            .field("adapter", &self.adapter)
            .field("progressive", &self.progressive)
            .field("has_transport", &self.transport.is_some())
            .field("has_observer", &self.observer.is_some())
            .finish_non_exhaustive()
    }
}
