//! Registry validator compliance tests
//!
//! Errors block (key/id mismatch, duplicate entry ids), referential and
//! schema problems downgrade to warnings, and validation is idempotent.

#[path = "testutils/mod.rs"]
mod testutils;

use catlite::{Catalog, CatalogEngine, CatalogRegistry, Graph};
use serde_json::json;
use testutils::fixture::EngineFixture;

#[test]
fn fixture_registry_is_structurally_valid() {
    let fixture = EngineFixture::new();
    let report = fixture.engine.validate(&fixture.graph);
    assert!(report.valid);
    assert!(report.errors.is_empty());
    // n2's dangling refs surface as warnings, never errors
    assert_eq!(report.warnings.len(), 2);
    assert!(report
        .warnings
        .iter()
        .any(|w| w.starts_with("dangling-entry-ref:")));
    assert!(report
        .warnings
        .iter()
        .any(|w| w.starts_with("dangling-catalog-ref:")));
}

#[test]
fn registry_key_mismatch_is_a_blocking_error() {
    let mut registry = CatalogRegistry::new();
    registry.insert("people", Catalog::new("humans"));
    let engine = CatalogEngine::from_registry(registry);

    let report = engine.validate(&Graph::default());
    assert!(!report.valid);
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].starts_with("registry-key-mismatch:"));
    assert!(report.errors[0].contains("humans"));
}

#[test]
fn duplicate_entry_ids_are_blocking_errors() {
    let catalog: Catalog = serde_json::from_value(json!({
        "id": "people",
        "entries": [{"id": "a"}, {"id": "a"}, {"id": "b"}]
    }))
    .unwrap();
    let engine = CatalogEngine::from_registry(CatalogRegistry::from_catalogs([catalog]));

    let report = engine.validate(&Graph::default());
    assert!(!report.valid);
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].starts_with("duplicate-entry-id:"));
}

#[test]
fn schema_mismatches_are_warnings_only() {
    let catalog: Catalog = serde_json::from_value(json!({
        "id": "people",
        "schema": {"age": "number"},
        "entries": [{"id": "a", "age": "thirty"}]
    }))
    .unwrap();
    let engine = CatalogEngine::from_registry(CatalogRegistry::from_catalogs([catalog]));

    let report = engine.validate(&Graph::default());
    assert!(report.valid);
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].starts_with("schema-type-mismatch:"));
}

#[test]
fn validation_is_idempotent_and_pure() {
    let fixture = EngineFixture::new();
    let first = fixture.engine.validate(&fixture.graph);
    let second = fixture.engine.validate(&fixture.graph);
    assert_eq!(first, second);
    // Validation did not disturb the store
    assert_eq!(fixture.engine.catalog_count(), 2);
}

#[test]
fn report_serializes_to_plain_structured_data() {
    let mut registry = CatalogRegistry::new();
    registry.insert("people", Catalog::new("humans"));
    let engine = CatalogEngine::from_registry(registry);

    let json = serde_json::to_value(engine.validate(&Graph::default())).unwrap();
    assert_eq!(json["valid"], false);
    assert!(json["errors"][0]
        .as_str()
        .unwrap()
        .starts_with("registry-key-mismatch:"));
}
