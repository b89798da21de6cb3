//! Remote sync types
//!
//! Field-name mappings, sort/filter descriptors and the request/response
//! shapes exchanged with the transport.

use crate::types::{JsonObject, JsonValue, Row, SortDir};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

// ============================================================================
// Field Names
// ============================================================================

/// Parameter names used in outgoing page requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentFieldNames {
    pub page: String,
    pub size: String,
    pub sorters: String,
    pub filters: String,
}

impl Default for SentFieldNames {
    fn default() -> Self {
        Self {
            page: "page".to_string(),
            size: "size".to_string(),
            sorters: "sorters".to_string(),
            filters: "filters".to_string(),
        }
    }
}

/// Property names expected in page responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReceivedFieldNames {
    pub current_page: String,
    pub last_page: String,
    pub data: String,
}

impl Default for ReceivedFieldNames {
    fn default() -> Self {
        Self {
            current_page: "current_page".to_string(),
            last_page: "last_page".to_string(),
            data: "data".to_string(),
        }
    }
}

// ============================================================================
// Sorting and Filtering
// ============================================================================

/// Opaque back-reference to a grid column
///
/// Column handles belong to the embedding grid and are never serialized.
#[derive(Clone)]
pub struct ColumnRef(Arc<dyn Any + Send + Sync>);

impl ColumnRef {
    /// Wrap any column handle
    pub fn new<T: Any + Send + Sync>(column: T) -> Self {
        Self(Arc::new(column))
    }

    /// Borrow the handle as a concrete type
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }
}

impl fmt::Debug for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ColumnRef(..)")
    }
}

/// Active sorter as reported by the sort collaborator
#[derive(Debug, Clone)]
pub struct Sorter {
    /// Column back-reference, stripped before transmission
    pub column: Option<ColumnRef>,
    /// Field the column displays
    pub field: String,
    /// Sort direction
    pub dir: SortDir,
}

impl Sorter {
    /// Create a sorter without a column reference
    pub fn new(field: impl Into<String>, dir: SortDir) -> Self {
        Self {
            column: None,
            field: field.into(),
            dir,
        }
    }

    /// Attach a column back-reference
    #[must_use]
    pub fn with_column(mut self, column: ColumnRef) -> Self {
        self.column = Some(column);
        self
    }

    /// Serializable form without the column reference
    pub fn descriptor(&self) -> SortDescriptor {
        SortDescriptor {
            field: self.field.clone(),
            dir: self.dir,
        }
    }
}

/// Sorter as transmitted to the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortDescriptor {
    pub field: String,
    pub dir: SortDir,
}

/// Active filter as reported by the filter collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterDescriptor {
    pub field: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: JsonValue,
}

impl FilterDescriptor {
    /// Create a filter descriptor
    pub fn new(field: impl Into<String>, kind: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        Self {
            field: field.into(),
            kind: kind.into(),
            value: value.into(),
        }
    }
}

// ============================================================================
// Request / Response
// ============================================================================

/// Caller override for request URL construction
///
/// Receives `(current_url, page, size, current_params)` and returns the URL
/// to request. When set, no pagination parameters are injected.
pub type PaginatorFn = Arc<dyn Fn(&str, u32, u32, &JsonObject) -> String + Send + Sync>;

/// A fully assembled page request
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest {
    pub url: String,
    pub params: JsonObject,
}

/// A parsed page response
#[derive(Debug, Clone, PartialEq)]
pub struct PageResponse {
    /// Page the server claims to have returned, if reported
    pub current_page: Option<u32>,
    /// Last available page
    pub last_page: u32,
    /// Rows of this page
    pub data: Vec<Row>,
}
