// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Catalog registry implementation
//!
//! The registry is the top-level mapping from catalog id to catalog. Key
//! insertion order is preserved and is part of the query-result ordering
//! contract, so the registry keeps an explicit key order next to the map
//! rather than relying on hash iteration order.
//!
//! Keys are allowed to disagree with the stored catalog's `id` field when the
//! registry is built from untrusted data; the validator flags the mismatch as
//! a structural error, lookups simply go by key.

use super::types::Catalog;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Insertion-ordered mapping from catalog id to catalog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogRegistry {
    /// Registry keys in insertion order
    keys: Vec<String>,
    /// Map of registry key to catalog
    catalogs: HashMap<String, Catalog>,
}

impl CatalogRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from catalogs, keyed by each catalog's own id
    pub fn from_catalogs(catalogs: impl IntoIterator<Item = Catalog>) -> Self {
        let mut registry = Self::new();
        for catalog in catalogs {
            registry.insert(catalog.id.clone(), catalog);
        }
        registry
    }

    /// Insert or replace a catalog under an explicit key
    ///
    /// Replacing an existing key keeps its original position in the insertion
    /// order, so re-registration does not reshuffle query results.
    pub fn insert(&mut self, key: impl Into<String>, catalog: Catalog) -> Option<Catalog> {
        let key = key.into();
        let previous = self.catalogs.insert(key.clone(), catalog);
        if previous.is_none() {
            self.keys.push(key);
        }
        previous
    }

    /// Get a catalog by registry key
    pub fn get(&self, key: &str) -> Option<&Catalog> {
        self.catalogs.get(key)
    }

    /// Get a mutable catalog by registry key
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Catalog> {
        self.catalogs.get_mut(key)
    }

    /// Check if a key is registered
    pub fn contains_key(&self, key: &str) -> bool {
        self.catalogs.contains_key(key)
    }

    /// Registry keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(|k| k.as_str())
    }

    /// Iterate `(key, catalog)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Catalog)> {
        self.keys
            .iter()
            .filter_map(|k| self.catalogs.get(k).map(|c| (k.as_str(), c)))
    }

    /// Number of registered catalogs
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check for an empty registry
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl Serialize for CatalogRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, catalog) in self.iter() {
            map.serialize_entry(key, catalog)?;
        }
        map.end()
    }
}

// Hand-rolled Deserialize so JSON document key order becomes insertion order.
impl<'de> Deserialize<'de> for CatalogRegistry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RegistryVisitor;

        impl<'de> Visitor<'de> for RegistryVisitor {
            type Value = CatalogRegistry;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of catalog id to catalog")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut registry = CatalogRegistry::new();
                while let Some((key, catalog)) = access.next_entry::<String, Catalog>()? {
                    registry.insert(key, catalog);
                }
                Ok(registry)
            }
        }

        deserializer.deserialize_map(RegistryVisitor)
    }
}
