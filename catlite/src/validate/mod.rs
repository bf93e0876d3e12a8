// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Registry validator
//!
//! Structural integrity checks over the catalog registry and the graph's
//! catalog references. Structural problems (key/id mismatch, duplicate or
//! empty entry ids) are blocking errors; referential and schema problems are
//! warnings, because query and projection degrade gracefully around them.
//! Validation never mutates state and is idempotent.

use crate::catalog::registry::CatalogRegistry;
use crate::catalog::store::schema_warnings;
use crate::graph::Graph;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Outcome of a validation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    /// Blocking problems, each prefixed with a stable code token
    pub errors: Vec<String>,
    /// Non-blocking problems, same message shape
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl ValidationReport {
    fn from_issues(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }
}

/// Validate registry structure and graph-to-catalog references
pub fn validate(registry: &CatalogRegistry, graph: &Graph) -> ValidationReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for (key, catalog) in registry.iter() {
        if catalog.id != key {
            errors.push(format!(
                "registry-key-mismatch: key '{}' maps to catalog with id '{}'",
                key, catalog.id
            ));
        }

        let mut seen = HashSet::new();
        for entry in &catalog.entries {
            if entry.id.is_empty() {
                errors.push(format!("empty-entry-id: catalog '{}'", key));
            } else if !seen.insert(entry.id.as_str()) {
                errors.push(format!(
                    "duplicate-entry-id: catalog '{}' entry '{}'",
                    key, entry.id
                ));
            }
        }

        for warning in schema_warnings(catalog) {
            warnings.push(warning.to_string());
        }
    }

    for node in &graph.nodes {
        for (catalog_id, entry_ids) in &node.catalog_refs {
            let Some(catalog) = registry.get(catalog_id) else {
                let warning = format!(
                    "dangling-catalog-ref: node '{}' references unknown catalog '{}'",
                    node.id, catalog_id
                );
                log::warn!("{}", warning);
                warnings.push(warning);
                continue;
            };
            for entry_id in entry_ids {
                if catalog.entry(entry_id).is_none() {
                    let warning = format!(
                        "dangling-entry-ref: node '{}' references missing entry '{}' in catalog '{}'",
                        node.id, entry_id, catalog_id
                    );
                    log::warn!("{}", warning);
                    warnings.push(warning);
                }
            }
        }
    }

    ValidationReport::from_issues(errors, warnings)
}
