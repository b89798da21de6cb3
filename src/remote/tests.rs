//! Tests for remote sync module

use super::*;
use crate::pagination::{PaginationMode, PaginationState};
use crate::types::{JsonObject, SortDir};
use crate::Error;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;

fn remote_state(page: u32, size: u32) -> PaginationState {
    let mut state = PaginationState::new(PaginationMode::Remote, size, 5);
    state.set_max_page(100);
    state.goto(page);
    state
}

fn object(value: serde_json::Value) -> JsonObject {
    value.as_object().cloned().unwrap()
}

// ============================================================================
// Field Name Tests
// ============================================================================

#[test]
fn test_default_field_names() {
    let sent = SentFieldNames::default();
    assert_eq!(sent.page, "page");
    assert_eq!(sent.size, "size");
    assert_eq!(sent.sorters, "sorters");
    assert_eq!(sent.filters, "filters");

    let received = ReceivedFieldNames::default();
    assert_eq!(received.current_page, "current_page");
    assert_eq!(received.last_page, "last_page");
    assert_eq!(received.data, "data");
}

#[test]
fn test_partial_field_name_override() {
    let received: ReceivedFieldNames =
        serde_json::from_value(json!({"last_page": "max_pages"})).unwrap();
    assert_eq!(received.last_page, "max_pages");
    assert_eq!(received.data, "data");
    assert_eq!(received.current_page, "current_page");
}

// ============================================================================
// build_params Tests
// ============================================================================

#[test]
fn test_build_params_page_and_size() {
    let adapter = RemoteSyncAdapter::default();
    let base = object(json!({"token": "abc"}));

    let params = adapter.build_params(&base, &remote_state(3, 20), None, None);

    assert_eq!(
        serde_json::Value::Object(params),
        json!({"token": "abc", "page": 3, "size": 20})
    );
}

#[test]
fn test_build_params_does_not_mutate_base() {
    let adapter = RemoteSyncAdapter::default();
    let base = object(json!({"token": "abc", "page": 99}));
    let before = base.clone();

    let sorters = vec![Sorter::new("name", SortDir::Asc)];
    let filters = vec![FilterDescriptor::new("age", ">", 30)];
    let params = adapter.build_params(
        &base,
        &remote_state(2, 10),
        Some(sorters.as_slice()),
        Some(filters.as_slice()),
    );

    assert_eq!(base, before);
    assert_eq!(params["page"], json!(2));
    assert_eq!(base["page"], json!(99));
}

#[test]
fn test_build_params_strips_column_reference() {
    #[derive(Debug)]
    struct Column {
        #[allow(dead_code)]
        title: &'static str,
    }

    let adapter = RemoteSyncAdapter::default();
    let sorters = vec![
        Sorter::new("name", SortDir::Asc).with_column(ColumnRef::new(Column { title: "Name" })),
        Sorter::new("age", SortDir::Desc).with_column(ColumnRef::new(Column { title: "Age" })),
    ];

    let params = adapter.build_params(
        &JsonObject::new(),
        &remote_state(1, 10),
        Some(sorters.as_slice()),
        None,
    );

    assert_eq!(
        params["sorters"],
        json!([
            {"field": "name", "dir": "asc"},
            {"field": "age", "dir": "desc"}
        ])
    );
    for entry in params["sorters"].as_array().unwrap() {
        assert!(entry.get("column").is_none());
    }
    // Caller's sorters keep their column handles
    assert!(sorters.iter().all(|s| s.column.is_some()));
}

#[test]
fn test_build_params_filters() {
    let adapter = RemoteSyncAdapter::default();
    let filters = vec![FilterDescriptor::new("name", "like", "bo")];

    let params = adapter.build_params(
        &JsonObject::new(),
        &remote_state(1, 10),
        None,
        Some(filters.as_slice()),
    );

    assert_eq!(
        params["filters"],
        json!([{"field": "name", "type": "like", "value": "bo"}])
    );
    assert!(params.get("sorters").is_none());
}

#[test]
fn test_build_params_custom_names() {
    let sent = SentFieldNames {
        page: "p".to_string(),
        size: "per_page".to_string(),
        ..Default::default()
    };
    let adapter = RemoteSyncAdapter::new(sent, ReceivedFieldNames::default());

    let params = adapter.build_params(
        &JsonObject::new(),
        &remote_state(4, 50),
        Some(&[][..]),
        None,
    );

    assert_eq!(params["p"], json!(4));
    assert_eq!(params["per_page"], json!(50));
    assert_eq!(params["sorters"], json!([]));
}

// ============================================================================
// build_request Tests
// ============================================================================

#[test]
fn test_build_request_default() {
    let adapter = RemoteSyncAdapter::default();
    let request = adapter.build_request(
        "https://api.example.com/rows",
        &JsonObject::new(),
        &remote_state(2, 10),
        None,
        None,
    );
    assert_eq!(request.url, "https://api.example.com/rows");
    assert_eq!(request.params["page"], json!(2));
}

#[test]
fn test_build_request_paginator_override() {
    let paginator: PaginatorFn = Arc::new(|url: &str, page: u32, size: u32, _: &JsonObject| {
        format!("{url}/page/{page}?per={size}")
    });
    let adapter = RemoteSyncAdapter::default().with_paginator(paginator);
    assert!(adapter.has_paginator());

    let base = object(json!({"token": "abc"}));
    let sorters = vec![Sorter::new("name", SortDir::Asc)];
    let request = adapter.build_request(
        "https://api.example.com/rows",
        &base,
        &remote_state(3, 25),
        Some(sorters.as_slice()),
        None,
    );

    assert_eq!(request.url, "https://api.example.com/rows/page/3?per=25");
    // No automatic injection in override mode
    assert_eq!(request.params, base);
}

// ============================================================================
// parse_response Tests
// ============================================================================

#[test]
fn test_parse_response_ok() {
    let adapter = RemoteSyncAdapter::default();
    let envelope = json!({
        "current_page": 2,
        "last_page": 7,
        "data": [{"id": 1}, {"id": 2}]
    });

    let response = adapter.parse_response(&envelope).unwrap();
    assert_eq!(response.current_page, Some(2));
    assert_eq!(response.last_page, 7);
    assert_eq!(response.data.len(), 2);
}

#[test]
fn test_parse_response_string_last_page() {
    let adapter = RemoteSyncAdapter::default();

    let response = adapter
        .parse_response(&json!({"last_page": "12", "data": []}))
        .unwrap();
    assert_eq!(response.last_page, 12);
    assert!(response.data.is_empty());
    assert_eq!(response.current_page, None);

    let response = adapter
        .parse_response(&json!({"last_page": " 5 pages", "data": []}))
        .unwrap();
    assert_eq!(response.last_page, 5);
}

#[test]
fn test_parse_response_float_last_page_truncates() {
    let adapter = RemoteSyncAdapter::default();
    let response = adapter
        .parse_response(&json!({"last_page": 3.9, "data": []}))
        .unwrap();
    assert_eq!(response.last_page, 3);
}

#[test]
fn test_parse_response_missing_last_page() {
    let adapter = RemoteSyncAdapter::default();

    for envelope in [
        json!({"data": []}),
        json!({"last_page": null, "data": []}),
        json!({"last_page": 0, "data": []}),
        json!({"last_page": "", "data": []}),
    ] {
        let err = adapter.parse_response(&envelope).unwrap_err();
        assert!(
            matches!(&err, Error::MissingResponseField { field } if field == "last_page"),
            "{envelope}"
        );
    }
}

#[test]
fn test_parse_response_missing_data() {
    let adapter = RemoteSyncAdapter::default();
    let err = adapter.parse_response(&json!({"last_page": 3})).unwrap_err();
    assert!(matches!(err, Error::MissingResponseField { field } if field == "data"));
}

#[test]
fn test_parse_response_both_missing_reports_last_page_first() {
    let adapter = RemoteSyncAdapter::default();
    let err = adapter.parse_response(&json!({})).unwrap_err();
    assert!(matches!(err, Error::MissingResponseField { field } if field == "last_page"));
}

#[test]
fn test_parse_response_invalid_values() {
    let adapter = RemoteSyncAdapter::default();

    let err = adapter
        .parse_response(&json!({"last_page": "many", "data": []}))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidResponseField { .. }));

    let err = adapter
        .parse_response(&json!({"last_page": 2, "data": {"id": 1}}))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidResponseField { field, .. } if field == "data"));
}

#[test]
fn test_parse_response_custom_names() {
    let received = ReceivedFieldNames {
        last_page: "pages".to_string(),
        data: "rows".to_string(),
        current_page: "at".to_string(),
    };
    let adapter = RemoteSyncAdapter::new(SentFieldNames::default(), received);

    let response = adapter
        .parse_response(&json!({"pages": 4, "rows": [1, 2], "at": "3"}))
        .unwrap();
    assert_eq!(response.last_page, 4);
    assert_eq!(response.current_page, Some(3));
    assert_eq!(response.data, vec![json!(1), json!(2)]);
}
