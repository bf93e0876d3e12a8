// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Catalog query engine
//!
//! Applies a filter predicate across one catalog or the full registry,
//! returning matches with provenance. Result ordering is contractual:
//! catalogs in registry insertion order, entries in catalog insertion order,
//! so repeated queries over unchanged state return identical sequences.

use crate::catalog::store::CatalogStore;
use crate::catalog::types::{Catalog, CatalogEntry};
use crate::predicate::{matches, FilterPredicate};
use serde::{Deserialize, Serialize};

/// Query options: restrict to one catalog or search the full registry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryOptions {
    /// Target catalog id; `None` searches every registered catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,
}

impl QueryOptions {
    /// Restrict the query to a single catalog
    pub fn in_catalog(catalog_id: impl Into<String>) -> Self {
        Self {
            catalog: Some(catalog_id.into()),
        }
    }
}

/// One query match with provenance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryMatch {
    /// Registry key of the catalog the entry came from
    pub catalog_id: String,
    pub entry: CatalogEntry,
}

/// Read-only query surface over a catalog store
pub struct QueryEngine<'a> {
    store: &'a CatalogStore,
}

impl<'a> QueryEngine<'a> {
    /// Create a query engine over a store
    pub fn new(store: &'a CatalogStore) -> Self {
        Self { store }
    }

    /// Collect all matches in contractual order
    ///
    /// Unknown target catalogs and predicates that match nothing both yield
    /// an empty sequence, never an error.
    pub fn query(&self, predicate: &FilterPredicate, options: &QueryOptions) -> Vec<QueryMatch> {
        let mut results = Vec::new();
        self.for_each_match(predicate, options, |catalog_id, entry| {
            results.push(QueryMatch {
                catalog_id: catalog_id.to_string(),
                entry: entry.clone(),
            })
        });
        log::debug!("query matched {} entries", results.len());
        results
    }

    /// Count matches without materializing them
    pub fn count(&self, predicate: &FilterPredicate, options: &QueryOptions) -> usize {
        let mut n = 0;
        self.for_each_match(predicate, options, |_, _| n += 1);
        n
    }

    fn for_each_match(
        &self,
        predicate: &FilterPredicate,
        options: &QueryOptions,
        mut visit: impl FnMut(&str, &CatalogEntry),
    ) {
        match &options.catalog {
            Some(catalog_id) => {
                if let Some(catalog) = self.store.get(catalog_id) {
                    visit_catalog(catalog_id, catalog, predicate, &mut visit);
                }
            }
            None => {
                for (catalog_id, catalog) in self.store.registry().iter() {
                    visit_catalog(catalog_id, catalog, predicate, &mut visit);
                }
            }
        }
    }
}

fn visit_catalog(
    catalog_id: &str,
    catalog: &Catalog,
    predicate: &FilterPredicate,
    visit: &mut dyn FnMut(&str, &CatalogEntry),
) {
    for entry in &catalog.entries {
        if matches(entry, predicate) {
            visit(catalog_id, entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store() -> CatalogStore {
        let mut store = CatalogStore::new();
        let mut people = Catalog::new("people");
        people.entries = vec![
            CatalogEntry::new("a")
                .with_tags(vec!["x".into()])
                .with_attribute("age", 30i64),
            CatalogEntry::new("b")
                .with_tags(vec!["y".into()])
                .with_attribute("age", 20i64),
        ];
        let mut props = Catalog::new("props");
        props.entries = vec![CatalogEntry::new("chair").with_attribute("age", 90i64)];
        store.register(people).unwrap();
        store.register(props).unwrap();
        store
    }

    #[test]
    fn targeted_query_with_provenance() {
        let store = store();
        let engine = QueryEngine::new(&store);
        let predicate = serde_json::from_value(json!({"age": {"$gte": 25}})).unwrap();
        let results = engine.query(&predicate, &QueryOptions::in_catalog("people"));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].catalog_id, "people");
        assert_eq!(results[0].entry.id, "a");
    }

    #[test]
    fn registry_wide_query_in_registration_order() {
        let store = store();
        let engine = QueryEngine::new(&store);
        let predicate = serde_json::from_value(json!({"age": {"$gte": 25}})).unwrap();
        let results = engine.query(&predicate, &QueryOptions::default());
        let ids: Vec<_> = results.iter().map(|m| m.entry.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "chair"]);
    }

    #[test]
    fn missing_catalog_yields_empty_not_error() {
        let store = store();
        let engine = QueryEngine::new(&store);
        let results = engine.query(&FilterPredicate::new(), &QueryOptions::in_catalog("ghost"));
        assert!(results.is_empty());
    }

    #[test]
    fn count_agrees_with_query() {
        let store = store();
        let engine = QueryEngine::new(&store);
        let predicate = serde_json::from_value(json!({"age": {"$lt": 50}})).unwrap();
        let options = QueryOptions::default();
        assert_eq!(
            engine.count(&predicate, &options),
            engine.query(&predicate, &options).len()
        );
    }
}
