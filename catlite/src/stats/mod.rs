// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Stats aggregator
//!
//! Summary counts over the registry and graph for observability surfaces
//! (UI badges, admin panels). Snapshots are computed fresh on every call,
//! never cached, so they cannot go stale across registry mutations.

use crate::catalog::registry::CatalogRegistry;
use crate::graph::Graph;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Counts for one catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub entry_count: usize,
    pub has_schema: bool,
}

/// Counts over the whole registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryStats {
    pub catalog_count: usize,
    pub total_entries: usize,
    pub catalogs: BTreeMap<String, CatalogStats>,
}

/// Engine-wide stats snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineStats {
    pub graph_nodes: usize,
    pub graph_edges: usize,
    pub catalogs: RegistryStats,
}

/// Compute a fresh stats snapshot, O(n) over catalogs/entries/nodes/edges
pub fn stats(registry: &CatalogRegistry, graph: &Graph) -> EngineStats {
    let mut catalogs = BTreeMap::new();
    let mut total_entries = 0;
    for (key, catalog) in registry.iter() {
        total_entries += catalog.entry_count();
        catalogs.insert(
            key.to_string(),
            CatalogStats {
                entry_count: catalog.entry_count(),
                has_schema: catalog.schema.is_some(),
            },
        );
    }

    EngineStats {
        graph_nodes: graph.nodes.len(),
        graph_edges: graph.edges.len(),
        catalogs: RegistryStats {
            catalog_count: registry.len(),
            total_entries,
            catalogs,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::{Catalog, CatalogEntry, CatalogSchema};
    use crate::graph::{GraphEdge, GraphNode};

    #[test]
    fn counts_and_serialized_shape() {
        let mut people = Catalog::new("people");
        people.entries = vec![CatalogEntry::new("a"), CatalogEntry::new("b")];
        people.schema = Some(CatalogSchema::default());
        let props = Catalog::new("props");
        let registry = CatalogRegistry::from_catalogs([people, props]);

        let graph = Graph {
            nodes: vec![GraphNode::new("n1", "mesh")],
            edges: vec![GraphEdge {
                id: "e1".into(),
                source: "n1".into(),
                target: "n1".into(),
                edge_type: None,
            }],
        };

        let snapshot = stats(&registry, &graph);
        assert_eq!(snapshot.graph_nodes, 1);
        assert_eq!(snapshot.graph_edges, 1);
        assert_eq!(snapshot.catalogs.catalog_count, 2);
        assert_eq!(snapshot.catalogs.total_entries, 2);
        assert!(snapshot.catalogs.catalogs["people"].has_schema);
        assert!(!snapshot.catalogs.catalogs["props"].has_schema);

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["graphNodes"], 1);
        assert_eq!(json["catalogs"]["catalogs"]["people"]["entryCount"], 2);
        assert_eq!(json["catalogs"]["catalogs"]["people"]["hasSchema"], true);
    }
}
