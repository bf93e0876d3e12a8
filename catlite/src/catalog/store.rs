// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! In-memory catalog store
//!
//! The store wraps the registry and is the only place catalog state is
//! mutated. Lookups never fail: a missing catalog or entry is `None`, so
//! query and projection stay total over possibly-imperfect data. Schema
//! checking at registration is advisory (the catalog is registered either
//! way, with the mismatches reported back and logged).

use super::error::{CatalogError, CatalogResult};
use super::registry::CatalogRegistry;
use super::types::{Catalog, CatalogEntry};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Advisory schema mismatch found at registration time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaWarning {
    pub catalog_id: String,
    pub entry_id: String,
    pub attribute: String,
    pub declared: String,
    pub actual: String,
}

impl fmt::Display for SchemaWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "schema-type-mismatch: catalog '{}' entry '{}' attribute '{}' declared {}, got {}",
            self.catalog_id, self.entry_id, self.attribute, self.declared, self.actual
        )
    }
}

/// In-memory store over the catalog registry
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    registry: CatalogRegistry,
}

impl CatalogStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already-loaded registry (produced by an external loader)
    pub fn from_registry(registry: CatalogRegistry) -> Self {
        Self { registry }
    }

    /// Insert or replace a catalog by its own id
    ///
    /// Runs the advisory schema check when the catalog declares a schema and
    /// returns the mismatches found; the catalog is registered regardless.
    /// Only an empty catalog id is a hard error.
    pub fn register(&mut self, catalog: Catalog) -> CatalogResult<Vec<SchemaWarning>> {
        if catalog.id.is_empty() {
            return Err(CatalogError::InvalidCatalogId(
                "catalog id must be non-empty".to_string(),
            ));
        }

        let warnings = schema_warnings(&catalog);
        for warning in &warnings {
            log::warn!("{}", warning);
        }

        let replaced = self
            .registry
            .insert(catalog.id.clone(), catalog)
            .is_some();
        log::info!(
            "Registered catalog ({})",
            if replaced { "replaced" } else { "new" }
        );
        Ok(warnings)
    }

    /// Get a catalog by id, `None` if absent
    pub fn get(&self, catalog_id: &str) -> Option<&Catalog> {
        self.registry.get(catalog_id)
    }

    /// Get one entry, `None` if the catalog or the entry is absent
    pub fn get_entry(&self, catalog_id: &str, entry_id: &str) -> Option<&CatalogEntry> {
        self.registry.get(catalog_id)?.entry(entry_id)
    }

    /// Replace an entry by id, appending when the id is new
    ///
    /// Entries are never mutated in place; an update replaces the record
    /// wholesale, keeping its position in the catalog's entry order.
    pub fn put_entry(&mut self, catalog_id: &str, entry: CatalogEntry) -> CatalogResult<()> {
        if entry.id.is_empty() {
            return Err(CatalogError::InvalidEntryId(
                "entry id must be non-empty".to_string(),
            ));
        }
        let catalog = self
            .registry
            .get_mut(catalog_id)
            .ok_or_else(|| CatalogError::CatalogNotFound(catalog_id.to_string()))?;

        match catalog.entries.iter_mut().find(|e| e.id == entry.id) {
            Some(existing) => *existing = entry,
            None => catalog.entries.push(entry),
        }
        Ok(())
    }

    /// Check if a catalog is registered
    pub fn has_catalog(&self, catalog_id: &str) -> bool {
        self.registry.contains_key(catalog_id)
    }

    /// Number of registered catalogs
    pub fn catalog_count(&self) -> usize {
        self.registry.len()
    }

    /// Catalog ids in registration order
    pub fn list_catalog_ids(&self) -> Vec<String> {
        self.registry.keys().map(String::from).collect()
    }

    /// Read-only access to the underlying registry
    pub fn registry(&self) -> &CatalogRegistry {
        &self.registry
    }
}

/// Advisory schema check for one catalog
pub(crate) fn schema_warnings(catalog: &Catalog) -> Vec<SchemaWarning> {
    let Some(schema) = &catalog.schema else {
        return Vec::new();
    };
    let mut warnings = Vec::new();
    for entry in &catalog.entries {
        for (attribute, declared, actual) in schema.violations(entry) {
            warnings.push(SchemaWarning {
                catalog_id: catalog.id.clone(),
                entry_id: entry.id.clone(),
                attribute: attribute.to_string(),
                declared: declared.to_string(),
                actual: actual.kind_name().to_string(),
            });
        }
    }
    warnings
}
