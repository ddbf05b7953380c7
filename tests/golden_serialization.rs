use std::collections::BTreeSet;

use paged_selection::record::{Fields, Record, RecordId};
use paged_selection::selection::{
    BulkScope, SelectionMode, SelectionState, SelectionStore, SelectionSummary,
};
use paged_selection::session::SessionConfig;
use paged_selection::types::ConfigError;
use serde_json::Value;

fn ids(raw: &[i64]) -> BTreeSet<RecordId> {
    raw.iter().copied().map(RecordId::new).collect()
}

#[test]
fn golden_explicit_state() {
    let mut store = SelectionStore::new();
    store.set_total_count(97);
    store.apply_page_delta(&ids(&[5, 1, 3]), &ids(&[3, 1]));

    let json = serde_json::to_string(store.state()).unwrap();

    assert_eq!(json, r#"{"mode":"explicit","included":[1,3],"total_count":97}"#);
}

#[test]
fn golden_all_except_excluded_state() {
    let mut store = SelectionStore::new();
    store.set_total_count(5);
    store.select_all();
    store.apply_page_delta(&ids(&[3]), &BTreeSet::new());

    let json = serde_json::to_string(store.state()).unwrap();

    assert_eq!(
        json,
        r#"{"mode":"all_except_excluded","excluded":[3],"total_count":5}"#
    );
}

#[test]
fn state_round_trips_through_json() {
    let mut store = SelectionStore::new();
    store.set_total_count(40);
    store.select_all();
    store.apply_page_delta(&ids(&[7, 8]), &ids(&[8]));

    let json = serde_json::to_string(store.state()).unwrap();
    let parsed: SelectionState = serde_json::from_str(&json).unwrap();

    assert_eq!(&parsed, store.state());
    assert_eq!(parsed.version(), store.state().version());
    assert_eq!(parsed.mode(), SelectionMode::AllExceptExcluded);
}

#[test]
fn version_is_prefixed_sha256() {
    let version = SelectionStore::new().state().version();
    let hex = version.as_str().strip_prefix("sha256:").expect("missing prefix");

    assert_eq!(hex.len(), 64);
    assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn golden_summary_serialization() {
    let summary = SelectionSummary {
        mode: SelectionMode::Explicit,
        count: 5,
    };

    let value: Value = serde_json::to_value(summary).unwrap();

    assert_eq!(value, serde_json::json!({ "mode": "explicit", "count": 5 }));
}

#[test]
fn golden_record_serialization_flattens_fields() {
    let mut fields = Fields::new();
    fields.insert_string("title", "Untitled");
    fields.insert_number("date_end", 1906);
    let record = Record::new(16568, fields);

    let json = serde_json::to_string(&record).unwrap();

    assert_eq!(json, r#"{"id":16568,"date_end":1906,"title":"Untitled"}"#);
}

#[test]
fn config_defaults_and_parsing() {
    assert_eq!(
        serde_json::to_string(&SessionConfig::v0()).unwrap(),
        r#"{"page_size":12,"bulk_scope":"current_page"}"#
    );
    assert_eq!(SessionConfig::from_json("{}").unwrap(), SessionConfig::v0());

    let raw = r#"{"page_size": 25, "bulk_scope": "across_pages"}"#;
    let across = SessionConfig::from_json(raw).unwrap();
    assert_eq!(across.page_size, 25);
    assert_eq!(across.bulk_scope, BulkScope::AcrossPages);

    match SessionConfig::from_json(r#"{"page_size": 0}"#) {
        Err(ConfigError::InvalidPageSize) => {}
        other => panic!("expected invalid page size, got {other:?}"),
    }
    match SessionConfig::from_json("page_size = 12") {
        Err(ConfigError::Parse(_)) => {}
        other => panic!("expected parse error, got {other:?}"),
    }
}
