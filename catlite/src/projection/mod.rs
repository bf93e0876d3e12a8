// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Graph projector
//!
//! Resolves the catalog entries associated with a graph node, via the node's
//! explicit `catalogRefs` lists and/or tag matching against catalog entries.
//! Within each catalog, ref-derived entries come first in reference order,
//! tag-derived entries follow in catalog entry order, and an entry reachable
//! by both paths appears exactly once. Dangling references are skipped
//! silently; they are a validation concern, not a projection failure.

use crate::catalog::store::CatalogStore;
use crate::catalog::types::CatalogEntry;
use crate::graph::GraphNode;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Tag matching mode between a node's tags and an entry's tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagMode {
    /// Non-empty intersection
    #[default]
    Any,
    /// The node's tag set is a subset of the entry's tag set. An untagged
    /// node therefore matches every entry (empty-subset rule).
    All,
}

/// Projection options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectOptions {
    /// Include entries reachable via the node's explicit `catalogRefs`
    pub use_refs: bool,
    /// Include entries whose tags match the node's tags
    pub use_tags: bool,
    pub tag_mode: TagMode,
    /// Require a `cap:<catalogId>` pointer tag on the node per catalog;
    /// a catalog the node lacks the capability for projects to an empty
    /// list (when explicitly referenced) rather than an error
    pub enforce_pointer_tags: bool,
}

impl Default for ProjectOptions {
    fn default() -> Self {
        Self {
            use_refs: true,
            use_tags: true,
            tag_mode: TagMode::default(),
            enforce_pointer_tags: false,
        }
    }
}

/// Projection result: catalog id to ordered entries
pub type ProjectionMap = BTreeMap<String, Vec<CatalogEntry>>;

/// Read-only projector over a catalog store
pub struct Projector<'a> {
    store: &'a CatalogStore,
}

impl<'a> Projector<'a> {
    /// Create a projector over a store
    pub fn new(store: &'a CatalogStore) -> Self {
        Self { store }
    }

    /// Resolve the entries associated with a node
    ///
    /// Catalogs appear in the result only when they contribute at least one
    /// entry; the exception is a capability-rejected catalog named in the
    /// node's `catalogRefs`, which appears with an empty list so callers can
    /// tell "denied" from "no association".
    pub fn project(&self, node: &GraphNode, options: &ProjectOptions) -> ProjectionMap {
        let mut out = ProjectionMap::new();
        let mut seen: BTreeMap<&str, HashSet<String>> = BTreeMap::new();

        if options.use_refs {
            for (catalog_id, entry_ids) in &node.catalog_refs {
                if options.enforce_pointer_tags && !node.has_capability(catalog_id) {
                    out.entry(catalog_id.clone()).or_default();
                    continue;
                }
                for entry_id in entry_ids {
                    // Dangling catalog or entry ids are silently skipped.
                    let Some(entry) = self.store.get_entry(catalog_id, entry_id) else {
                        continue;
                    };
                    push_unique(&mut out, &mut seen, catalog_id, entry);
                }
            }
        }

        if options.use_tags {
            for (catalog_id, catalog) in self.store.registry().iter() {
                if options.enforce_pointer_tags && !node.has_capability(catalog_id) {
                    continue;
                }
                for entry in &catalog.entries {
                    if tags_match(options.tag_mode, &node.tags, entry) {
                        push_unique(&mut out, &mut seen, catalog_id, entry);
                    }
                }
            }
        }

        log::debug!(
            "projected node '{}' onto {} catalog(s)",
            node.id,
            out.len()
        );
        out
    }
}

fn push_unique<'s>(
    out: &mut ProjectionMap,
    seen: &mut BTreeMap<&'s str, HashSet<String>>,
    catalog_id: &'s str,
    entry: &CatalogEntry,
) {
    let catalog_seen = seen.entry(catalog_id).or_default();
    if catalog_seen.insert(entry.id.clone()) {
        out.entry(catalog_id.to_string())
            .or_default()
            .push(entry.clone());
    }
}

fn tags_match(mode: TagMode, node_tags: &[String], entry: &CatalogEntry) -> bool {
    match mode {
        TagMode::Any => node_tags.iter().any(|t| entry.has_tag(t)),
        TagMode::All => node_tags.iter().all(|t| entry.has_tag(t)),
    }
}
