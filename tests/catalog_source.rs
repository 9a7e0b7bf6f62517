use propview::catalog::{self, CatalogSource, JsonCatalogSource};
use propview::domain::{PropertyType, PropviewError};
use std::io::Write;

const LISTINGS: &str = r#"{
  "version": 1,
  "properties": [
    {"id": 10, "title": "Harbor Loft", "location": "Lisbon", "price": 310000, "roi": 6.4, "type": "apartment", "image": "harbor.jpg"},
    {"id": 11, "title": "Olive Grove Villa", "location": "Faro", "price": 720000, "roi": 5.1, "type": "villa"},
    {"id": 12, "title": "Avenida Office", "location": "Lisbon", "price": 540000, "roi": 8.8, "type": "office"}
  ]
}"#;

fn write_catalog(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn loads_versioned_file_in_catalog_order() {
    let file = write_catalog(LISTINGS);
    let catalog = JsonCatalogSource::new(file.path()).load().unwrap();

    let listings = catalog.as_slice();
    let ids: Vec<u64> = listings.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![10, 11, 12]);
    assert_eq!(listings[1].kind, PropertyType::Villa);
    assert_eq!(listings[1].image, "");
    assert_eq!(listings[0].image, "harbor.jpg");
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let source = JsonCatalogSource::new(dir.path().join("absent.json"));

    assert!(matches!(source.load(), Err(PropviewError::Io(_))));
}

#[test]
fn duplicate_ids_are_rejected() {
    let file = write_catalog(
        r#"[
          {"id": 1, "title": "A", "location": "X", "price": 1, "roi": 1, "type": "villa"},
          {"id": 1, "title": "B", "location": "Y", "price": 2, "roi": 2, "type": "office"}
        ]"#,
    );

    let err = JsonCatalogSource::new(file.path()).load().unwrap_err();
    assert!(matches!(err, PropviewError::Catalog(_)));
}

#[test]
fn negative_price_is_rejected() {
    let file = write_catalog(
        r#"[{"id": 1, "title": "A", "location": "X", "price": -5, "roi": 1, "type": "villa"}]"#,
    );

    let err = JsonCatalogSource::new(file.path()).load().unwrap_err();
    assert!(err.to_string().starts_with("Catalog error"));
}

#[test]
fn bad_listing_reports_field_and_position() {
    let file = write_catalog(
        r#"{
  "version": 1,
  "properties": [
    {"id": 1, "title": "A", "location": "X", "price": "cheap", "roi": 1, "type": "villa"}
  ]
}"#,
    );

    let err = JsonCatalogSource::new(file.path()).load().unwrap_err();
    assert!(matches!(err, PropviewError::Parse(_)));
    let message = err.to_string();
    assert!(message.contains("cheap"), "{message}");
    assert!(message.contains("line 4"), "{message}");
}

#[test]
fn config_selects_source() {
    let builtin = catalog::from_config(None);
    assert_eq!(builtin.describe(), "built-in sample catalog");
    assert!(!builtin.load().unwrap().is_empty());

    let blank = catalog::from_config(Some("  "));
    assert_eq!(blank.describe(), "built-in sample catalog");

    let file = catalog::from_config(Some("~/listings.json"));
    assert_eq!(file.describe(), "file ~/listings.json");
}
