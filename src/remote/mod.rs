//! Remote synchronization module
//!
//! Builds outgoing page request parameters and parses incoming response
//! envelopes.
//!
//! # Overview
//!
//! - `SentFieldNames` / `ReceivedFieldNames` - immutable field-name mappings
//! - `RemoteSyncAdapter` - pure `build_params` / `parse_response`
//! - `PaginatorFn` - caller override for request URL construction
//!
//! Request parameters are always built into a fresh map; the caller's
//! persistent parameters are never mutated.

mod adapter;
mod types;

pub use adapter::RemoteSyncAdapter;
pub use types::{
    ColumnRef, FilterDescriptor, PageRequest, PageResponse, PaginatorFn, ReceivedFieldNames,
    SentFieldNames, SortDescriptor, Sorter,
};

#[cfg(test)]
mod tests;
