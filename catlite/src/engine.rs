// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Unified engine facade - The single external interface
//!
//! `CatalogEngine` is the one type host code should interact with. It owns
//! the catalog store behind a read-write lock and routes every operation
//! through it: read paths (query, count, projection, validation, stats) take
//! the read lock and are safe to call concurrently and speculatively from a
//! rendering loop; `register` and `put_entry` are the only writers.
//!
//! Each engine instance is independently constructed and explicitly owned —
//! there is no ambient process-wide registry, so separate engines (one per
//! test, one per document) never interfere.

use crate::catalog::error::CatalogResult;
use crate::catalog::registry::CatalogRegistry;
use crate::catalog::store::{CatalogStore, SchemaWarning};
use crate::catalog::types::{Catalog, CatalogEntry};
use crate::graph::{Graph, GraphNode};
use crate::predicate::FilterPredicate;
use crate::projection::{ProjectOptions, ProjectionMap, Projector};
use crate::query::{QueryEngine, QueryMatch, QueryOptions};
use crate::stats::{stats, EngineStats};
use crate::validate::{validate, ValidationReport};
use parking_lot::RwLock;
use std::sync::Arc;

/// Single external entry point over a catalog store
#[derive(Clone, Default)]
pub struct CatalogEngine {
    store: Arc<RwLock<CatalogStore>>,
}

impl CatalogEngine {
    /// Create an engine with an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine over an already-loaded registry
    ///
    /// The registry is produced by an external loader; the engine takes it
    /// fully materialized and never performs I/O itself.
    pub fn from_registry(registry: CatalogRegistry) -> Self {
        log::info!("engine initialized with {} catalog(s)", registry.len());
        Self {
            store: Arc::new(RwLock::new(CatalogStore::from_registry(registry))),
        }
    }

    /// Insert or replace a catalog, returning advisory schema warnings
    pub fn register(&self, catalog: Catalog) -> CatalogResult<Vec<SchemaWarning>> {
        self.store.write().register(catalog)
    }

    /// Replace an entry by id (append when new)
    pub fn put_entry(&self, catalog_id: &str, entry: CatalogEntry) -> CatalogResult<()> {
        self.store.write().put_entry(catalog_id, entry)
    }

    /// Get a catalog by id
    pub fn get(&self, catalog_id: &str) -> Option<Catalog> {
        self.store.read().get(catalog_id).cloned()
    }

    /// Get one entry by catalog and entry id
    pub fn get_entry(&self, catalog_id: &str, entry_id: &str) -> Option<CatalogEntry> {
        self.store.read().get_entry(catalog_id, entry_id).cloned()
    }

    /// Check if a catalog is registered
    pub fn has_catalog(&self, catalog_id: &str) -> bool {
        self.store.read().has_catalog(catalog_id)
    }

    /// Number of registered catalogs
    pub fn catalog_count(&self) -> usize {
        self.store.read().catalog_count()
    }

    /// Catalog ids in registration order
    pub fn list_catalog_ids(&self) -> Vec<String> {
        self.store.read().list_catalog_ids()
    }

    /// Run a predicate query, in contractual order
    pub fn query(&self, predicate: &FilterPredicate, options: &QueryOptions) -> Vec<QueryMatch> {
        let store = self.store.read();
        QueryEngine::new(&store).query(predicate, options)
    }

    /// Count predicate matches without materializing them
    pub fn count(&self, predicate: &FilterPredicate, options: &QueryOptions) -> usize {
        let store = self.store.read();
        QueryEngine::new(&store).count(predicate, options)
    }

    /// Project a graph node onto the catalogs
    pub fn project(&self, node: &GraphNode, options: &ProjectOptions) -> ProjectionMap {
        let store = self.store.read();
        Projector::new(&store).project(node, options)
    }

    /// Validate registry structure and graph references
    pub fn validate(&self, graph: &Graph) -> ValidationReport {
        let store = self.store.read();
        validate(store.registry(), graph)
    }

    /// Compute a fresh stats snapshot
    pub fn stats(&self, graph: &Graph) -> EngineStats {
        let store = self.store.read();
        stats(store.registry(), graph)
    }
}
