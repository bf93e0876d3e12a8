// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Consumed graph model
//!
//! The graph is produced by an external graph-construction subsystem and is
//! read-only input to projection, validation and stats. Nodes carry ordinary
//! classification tags, reserved-namespace pointer tags (`cap:<catalogId>`
//! capability markers), and an optional map of explicit catalog references.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Namespace prefix for capability pointer tags
pub const POINTER_TAG_PREFIX: &str = "cap:";

/// A graph node as consumed by the engine
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub id: String,
    /// Node type tag
    #[serde(rename = "type", default)]
    pub node_type: String,
    /// Free-form classification tags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Reserved-namespace capability markers (`cap:<name>`)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pointer_tags: Vec<String>,
    /// Explicit references: catalog id to ordered entry id list
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub catalog_refs: HashMap<String, Vec<String>>,
}

impl GraphNode {
    /// Create a node with an id and type, no tags or refs
    pub fn new(id: impl Into<String>, node_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            node_type: node_type.into(),
            ..Default::default()
        }
    }

    /// Check whether the node holds the capability for a catalog
    pub fn has_capability(&self, catalog_id: &str) -> bool {
        self.pointer_tags
            .iter()
            .any(|t| t.strip_prefix(POINTER_TAG_PREFIX) == Some(catalog_id))
    }
}

/// A graph edge; only counted by the engine, never traversed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub edge_type: Option<String>,
}

/// The full consumed graph
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Graph {
    #[serde(default)]
    pub nodes: Vec<GraphNode>,
    #[serde(default)]
    pub edges: Vec<GraphEdge>,
}

impl Graph {
    /// Look up a node by id
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}
