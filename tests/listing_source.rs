use std::fs;

use paged_selection::record::{FieldValue, PageNumber, Record, RecordId};
use paged_selection::session::{PageOutcome, Session, SessionConfig};
use paged_selection::source::{decode_listing, FixtureSource, MemorySource, PageSource};
use paged_selection::types::TransportError;
use tempfile::tempdir;

const LISTING_PAGE_1: &str = r#"{
  "pagination": {
    "total": 129884,
    "limit": 3,
    "offset": 0,
    "total_pages": 43295,
    "current_page": 1,
    "next_url": "https://example.org/listing?page=2"
  },
  "data": [
    {
      "id": 27992,
      "title": "A Sunday on La Grande Jatte",
      "place_of_origin": "France",
      "artist_display": "Georges Seurat",
      "inscriptions": null,
      "date_start": 1884,
      "date_end": 1886
    },
    {
      "id": 129884,
      "title": "Starry Night and the Astronauts",
      "place_of_origin": "United States",
      "artist_display": "Alma Thomas",
      "inscriptions": null,
      "date_start": 1972,
      "date_end": 1972,
      "thumbnail": { "width": 5376, "height": 4432 }
    },
    {
      "id": 16568,
      "title": "Water Lilies",
      "place_of_origin": "France",
      "artist_display": "Claude Monet",
      "inscriptions": "Signed lower right",
      "date_start": 1906,
      "date_end": 1906
    }
  ]
}"#;

#[test]
fn decodes_listing_response() {
    let fetched = decode_listing(LISTING_PAGE_1.as_bytes()).unwrap();

    assert_eq!(fetched.total_count, 129884);
    let ids: Vec<i64> = fetched.records.iter().map(|r| r.id.get()).collect();
    assert_eq!(ids, vec![27992, 129884, 16568]);

    let first = &fetched.records[0];
    assert_eq!(
        first.fields.get("title"),
        Some(&FieldValue::String("A Sunday on La Grande Jatte".to_string()))
    );
    assert_eq!(first.fields.get("date_start"), Some(&FieldValue::Number(1884)));
    assert_eq!(first.fields.get("inscriptions"), Some(&FieldValue::Null));
    assert!(first.fields.get("id").is_none(), "id is not a display field");

    match fetched.records[1].fields.get("thumbnail") {
        Some(FieldValue::Other(value)) => assert_eq!(value["width"], 5376),
        other => panic!("expected raw thumbnail value, got {other:?}"),
    }
}

#[test]
fn malformed_listing_is_a_decode_error() {
    let missing_id = r#"{
        "data": [{"title": "no id"}],
        "pagination": {"total": 1, "limit": 12, "current_page": 1, "total_pages": 1}
    }"#;
    for raw in ["not json", r#"{"data": []}"#, missing_id] {
        match decode_listing(raw.as_bytes()) {
            Err(TransportError::Decode(_)) => {}
            other => panic!("expected decode error for {raw:?}, got {other:?}"),
        }
    }
}

#[test]
fn fixture_source_replays_pages_from_disk() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("page-1.json"), LISTING_PAGE_1).unwrap();
    let source = FixtureSource::new(dir.path());

    let config = SessionConfig {
        page_size: 3,
        ..SessionConfig::v0()
    };
    let mut session = Session::new(config).unwrap();
    let outcome = session.load(&source, PageNumber::FIRST);

    assert_eq!(outcome, PageOutcome::Applied { selected: vec![] });
    assert_eq!(session.selection().total_count(), 129884);

    session.on_row_selection_changed([RecordId::new(129884)]);
    let selected: Vec<&Record> = session.selected_rows();
    assert_eq!(selected.len(), 1);
    assert_eq!(
        selected[0].fields.get("artist_display"),
        Some(&FieldValue::String("Alma Thomas".to_string()))
    );
}

#[test]
fn fixture_source_missing_page_is_io_error() {
    let dir = tempdir().unwrap();
    let source = FixtureSource::new(dir.path());

    match source.fetch_page(PageNumber::new(7).unwrap(), 12) {
        Err(TransportError::Io(_)) => {}
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn fixture_source_rejects_oversized_pages() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("page-1.json"), LISTING_PAGE_1).unwrap();
    let source = FixtureSource::new(dir.path());

    match source.fetch_page(PageNumber::FIRST, 2) {
        Err(TransportError::Unavailable(_)) => {}
        other => panic!("expected unavailable, got {other:?}"),
    }
}

#[test]
fn memory_source_slices_pages() {
    let source = MemorySource::new((1..=30).map(Record::bare).collect());

    let second = source.fetch_page(PageNumber::new(2).unwrap(), 12).unwrap();
    let ids: Vec<i64> = second.records.iter().map(|r| r.id.get()).collect();
    assert_eq!(ids, (13..=24).collect::<Vec<_>>());
    assert_eq!(second.total_count, 30);

    let last = source.fetch_page(PageNumber::new(3).unwrap(), 12).unwrap();
    assert_eq!(last.records.len(), 6);

    let past_end = source.fetch_page(PageNumber::new(9).unwrap(), 12).unwrap();
    assert!(past_end.records.is_empty());
    assert_eq!(past_end.total_count, 30);
}
