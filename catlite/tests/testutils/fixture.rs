//! Test fixture for CatLite integration tests
//!
//! Builds an isolated engine instance over a canonical registry/graph pair
//! using ONLY the public CatalogEngine API. Tests must not reach into
//! internal components.

use catlite::{CatalogEngine, CatalogRegistry, FilterPredicate, Graph, GraphNode};

/// Test fixture with an isolated engine instance
pub struct EngineFixture {
    pub engine: CatalogEngine,
    pub graph: Graph,
}

impl EngineFixture {
    /// Create a fixture with the canonical people/props registry and a small
    /// scene graph referencing it.
    pub fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let registry: CatalogRegistry = serde_json::from_value(serde_json::json!({
            "people": {
                "id": "people",
                "version": "1.0",
                "schema": {"age": "number", "roles": "array"},
                "entries": [
                    {"id": "a", "tags": ["x"], "age": 30, "roles": ["admin", "ops"]},
                    {"id": "b", "tags": ["y"], "age": 20},
                    {"id": "c", "tags": ["x", "y"], "age": 40}
                ]
            },
            "props": {
                "id": "props",
                "description": "set dressing",
                "entries": [
                    {"id": "chair", "tags": ["x"], "price": 90},
                    {"id": "lamp", "tags": ["z"], "price": 15}
                ]
            }
        }))
        .expect("fixture registry should deserialize");

        let graph: Graph = serde_json::from_value(serde_json::json!({
            "nodes": [
                {
                    "id": "n1",
                    "type": "mesh",
                    "tags": ["x"],
                    "catalogRefs": {"people": ["b"]}
                },
                {
                    "id": "n2",
                    "type": "mesh",
                    "tags": ["z"],
                    "pointerTags": ["cap:props"],
                    "catalogRefs": {"people": ["ghost"], "lost": ["a"]}
                },
                {"id": "n3", "type": "camera"}
            ],
            "edges": [
                {"id": "e1", "source": "n1", "target": "n2", "type": "parent"},
                {"id": "e2", "source": "n2", "target": "n3"}
            ]
        }))
        .expect("fixture graph should deserialize");

        Self {
            engine: CatalogEngine::from_registry(registry),
            graph,
        }
    }

    /// Parse a predicate from JSON
    pub fn predicate(&self, value: serde_json::Value) -> FilterPredicate {
        serde_json::from_value(value).expect("predicate should deserialize")
    }

    /// Fetch a fixture graph node by id
    pub fn node(&self, id: &str) -> GraphNode {
        self.graph
            .node(id)
            .unwrap_or_else(|| panic!("fixture node '{}' should exist", id))
            .clone()
    }
}
