//! Collaborator interfaces
//!
//! The pagination core talks to the embedding grid only through these
//! traits:
//!
//! - `Transport` - issues page requests and owns the single-flight guard
//! - `RowStore` - holds rows and reports viewport metrics
//! - `SortSource` / `FilterSource` - current sorters and filters
//! - `RenderObserver` - receives page, max-page and button state changes
//! - `PageLoadedFn` - completion callback after a page transition

mod observer;
mod store;
mod transport;

pub use observer::{PageLoadedFn, RecordingObserver, RenderObserver, RenderSnapshot};
pub use store::{FilterSource, MemoryRowStore, RowStore, SortSource, Viewport};
pub use transport::{RequestPermit, Transport};
