//! Predicate evaluator compliance tests
//!
//! Exercises the operator language end to end through the public query
//! surface: literals, every comparison operator, AND composition, and the
//! fail-closed policy for operator objects from untrusted input.

#[path = "testutils/mod.rs"]
mod testutils;

use catlite::{matches, CatalogEntry, FilterPredicate, QueryOptions};
use serde_json::json;
use testutils::fixture::EngineFixture;

fn entry() -> CatalogEntry {
    serde_json::from_value(json!({
        "id": "a",
        "tags": ["x"],
        "age": 30,
        "name": "ada",
        "roles": ["admin", "ops"]
    }))
    .unwrap()
}

fn predicate(value: serde_json::Value) -> FilterPredicate {
    serde_json::from_value(value).unwrap()
}

#[test]
fn empty_predicate_matches_every_entry() {
    let fixture = EngineFixture::new();
    let total = fixture
        .engine
        .count(&FilterPredicate::new(), &QueryOptions::default());
    assert_eq!(total, 5);
    assert!(matches(&entry(), &FilterPredicate::new()));
}

#[test]
fn literal_equality_is_strict() {
    assert!(matches(&entry(), &predicate(json!({"name": "ada"}))));
    assert!(!matches(&entry(), &predicate(json!({"name": "Ada"}))));
    assert!(!matches(&entry(), &predicate(json!({"age": "30"}))));
    assert!(matches(
        &entry(),
        &predicate(json!({"roles": ["admin", "ops"]}))
    ));
    assert!(!matches(
        &entry(),
        &predicate(json!({"roles": ["ops", "admin"]}))
    ));
}

#[test]
fn greater_than_is_false_for_non_numbers_and_boundaries() {
    // False whenever the attribute is non-numeric or <= operand
    assert!(!matches(&entry(), &predicate(json!({"name": {"$gt": 0}}))));
    assert!(!matches(&entry(), &predicate(json!({"age": {"$gt": 30}}))));
    assert!(!matches(&entry(), &predicate(json!({"age": {"$gt": 31}}))));
    // True iff numeric and strictly greater
    assert!(matches(&entry(), &predicate(json!({"age": {"$gt": 29}}))));
}

#[test]
fn range_operators_compose_with_and_semantics() {
    assert!(matches(
        &entry(),
        &predicate(json!({"age": {"$gte": 30, "$lte": 30}}))
    ));
    assert!(!matches(
        &entry(),
        &predicate(json!({"age": {"$gte": 30, "$lt": 30}}))
    ));
}

#[test]
fn membership_operators_use_strict_equality_per_element() {
    assert!(matches(
        &entry(),
        &predicate(json!({"age": {"$in": [20, 30]}}))
    ));
    assert!(!matches(
        &entry(),
        &predicate(json!({"age": {"$in": ["30"]}}))
    ));
    assert!(matches(
        &entry(),
        &predicate(json!({"age": {"$nin": [1, 2]}}))
    ));
}

#[test]
fn contains_requires_an_array_attribute() {
    assert!(matches(
        &entry(),
        &predicate(json!({"roles": {"$contains": "ops"}}))
    ));
    assert!(!matches(
        &entry(),
        &predicate(json!({"roles": {"$contains": "root"}}))
    ));
    // Non-array attribute: false, not an error
    assert!(!matches(
        &entry(),
        &predicate(json!({"name": {"$contains": "ada"}}))
    ));
}

#[test]
fn unrecognized_operator_objects_fail_closed() {
    let fixture = EngineFixture::new();
    for bad in [
        json!({"age": {}}),
        json!({"age": {"$regex": "^3"}}),
        json!({"age": {"$gt": 10, "$near": 30}}),
    ] {
        let predicate = fixture.predicate(bad);
        assert_eq!(
            fixture.engine.count(&predicate, &QueryOptions::default()),
            0
        );
    }
}

#[test]
fn gte_query_over_people_catalog() {
    let fixture = EngineFixture::new();
    let predicate = fixture.predicate(json!({"age": {"$gte": 25}}));
    let results = fixture
        .engine
        .query(&predicate, &QueryOptions::in_catalog("people"));
    assert!(results.iter().any(|m| m.entry.id == "a"));
    assert!(results.iter().all(|m| m.entry.id != "b"));
    assert!(results.iter().all(|m| m.catalog_id == "people"));
}
