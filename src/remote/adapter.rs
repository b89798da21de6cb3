//! Remote sync adapter implementation

use super::types::{
    FilterDescriptor, PageRequest, PageResponse, PaginatorFn, ReceivedFieldNames, SentFieldNames,
    Sorter,
};
use crate::error::{Error, Result};
use crate::pagination::PaginationState;
use crate::types::{JsonObject, JsonValue};
use serde_json::Value;
use std::fmt;
use tracing::debug;

/// Builds page requests and parses page responses
///
/// Stateless apart from its field-name mappings, which are fixed at
/// construction.
#[derive(Clone, Default)]
pub struct RemoteSyncAdapter {
    sent: SentFieldNames,
    received: ReceivedFieldNames,
    paginator: Option<PaginatorFn>,
}

impl RemoteSyncAdapter {
    /// Create an adapter with the given field names
    pub fn new(sent: SentFieldNames, received: ReceivedFieldNames) -> Self {
        Self {
            sent,
            received,
            paginator: None,
        }
    }

    /// Replace default request construction with a caller override
    #[must_use]
    pub fn with_paginator(mut self, paginator: PaginatorFn) -> Self {
        self.paginator = Some(paginator);
        self
    }

    pub fn sent_names(&self) -> &SentFieldNames {
        &self.sent
    }

    pub fn received_names(&self) -> &ReceivedFieldNames {
        &self.received
    }

    pub fn has_paginator(&self) -> bool {
        self.paginator.is_some()
    }

    /// Overlay pagination parameters onto a copy of `base`
    pub fn build_params(
        &self,
        base: &JsonObject,
        state: &PaginationState,
        sorters: Option<&[Sorter]>,
        filters: Option<&[FilterDescriptor]>,
    ) -> JsonObject {
        let mut params = base.clone();

        params.insert(self.sent.page.clone(), Value::from(state.page()));

        if state.page_size() > 0 {
            params.insert(self.sent.size.clone(), Value::from(state.page_size()));
        }

        if let Some(sorters) = sorters {
            let sorters: Vec<JsonValue> = sorters
                .iter()
                .map(|s| serde_json::json!(s.descriptor()))
                .collect();
            params.insert(self.sent.sorters.clone(), Value::Array(sorters));
        }

        if let Some(filters) = filters {
            let filters: Vec<JsonValue> = filters.iter().map(|f| serde_json::json!(f)).collect();
            params.insert(self.sent.filters.clone(), Value::Array(filters));
        }

        params
    }

    /// Assemble the request for the current page
    pub fn build_request(
        &self,
        url: &str,
        base: &JsonObject,
        state: &PaginationState,
        sorters: Option<&[Sorter]>,
        filters: Option<&[FilterDescriptor]>,
    ) -> PageRequest {
        match &self.paginator {
            Some(paginator) => {
                let url = paginator(url, state.page(), state.page_size(), base);
                debug!(url = %url, page = state.page(), "Paginator override built request URL");
                PageRequest {
                    url,
                    params: base.clone(),
                }
            }
            None => PageRequest {
                url: url.to_string(),
                params: self.build_params(base, state, sorters, filters),
            },
        }
    }

    /// Parse a response envelope
    ///
    /// `last_page` and `data` are required; a missing or falsy value for
    /// either is a protocol error and nothing is applied.
    pub fn parse_response(&self, envelope: &JsonValue) -> Result<PageResponse> {
        let last_page_name = &self.received.last_page;
        let data_name = &self.received.data;

        let last_page = envelope
            .get(last_page_name)
            .filter(|v| is_truthy(v))
            .ok_or_else(|| Error::missing_field(last_page_name))?;

        let data = envelope
            .get(data_name)
            .filter(|v| is_truthy(v))
            .ok_or_else(|| Error::missing_field(data_name))?;

        let last_page = parse_page_number(last_page).ok_or_else(|| {
            Error::invalid_field(last_page_name, format!("expected a page number, got {last_page}"))
        })?;

        let data = match data {
            Value::Array(rows) => rows.clone(),
            other => {
                return Err(Error::invalid_field(
                    data_name,
                    format!("expected an array of rows, got {other}"),
                ))
            }
        };

        let current_page = envelope
            .get(&self.received.current_page)
            .and_then(parse_page_number);

        Ok(PageResponse {
            current_page,
            last_page,
            data,
        })
    }
}

impl fmt::Debug for RemoteSyncAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteSyncAdapter")
            .field("sent", &self.sent)
            .field("received", &self.received)
            .field("has_paginator", &self.paginator.is_some())
            .finish()
    }
}

/// Loose truthiness of a JSON value
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Parse a page number from a JSON number or a string with a leading integer
///
/// Fractions are truncated; non-positive results are clamped to page 1.
fn parse_page_number(value: &Value) -> Option<u32> {
    let parsed = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => leading_integer(s),
        _ => None,
    }?;

    Some(u32::try_from(parsed.max(1)).unwrap_or(u32::MAX))
}

/// Leading signed integer of a string, ignoring leading whitespace
fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}
