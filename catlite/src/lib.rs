// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! CatLite - A lightweight catalog query and projection engine
//!
//! CatLite stores versioned collections of tagged records ("catalogs"),
//! evaluates structured filter predicates against them, and projects catalog
//! entries onto nodes of an external graph. It is a pure, deterministic
//! function space over in-memory data: no I/O, no caching, no UI state.
//!
//! # Features
//!
//! - **Predicate queries**: Mongo-style operator objects (`$gt`, `$in`,
//!   `$contains`, ...) with fail-closed handling of untrusted input
//! - **Graph projection**: resolve a node's catalog entries via explicit
//!   reference lists and/or tag matching, with a contractual dedup/order rule
//! - **Advisory validation**: structural errors vs referential warnings, so
//!   queries stay total over imperfect data
//! - **Deterministic ordering**: registry and entry insertion order flow
//!   through every result, keeping UI snapshots reproducible
//!
//! # Usage
//!
//! ```ignore
//! use catlite::{CatalogEngine, CatalogRegistry, QueryOptions};
//!
//! let registry: CatalogRegistry = serde_json::from_str(catalog_json)?;
//! let engine = CatalogEngine::from_registry(registry);
//! let predicate = serde_json::from_value(serde_json::json!({"age": {"$gte": 25}}))?;
//! let matches = engine.query(&predicate, &QueryOptions::in_catalog("people"));
//! ```

// Public modules - exposed to external users
pub mod engine;

// Internal modules - surfaced through curated re-exports below
pub(crate) mod catalog;
pub(crate) mod graph;
pub(crate) mod predicate;
pub(crate) mod projection;
pub(crate) mod query;
pub(crate) mod stats;
pub(crate) mod validate;
pub(crate) mod value;

// Re-export the public API - CatalogEngine is the main entry point
pub use engine::CatalogEngine;

pub use catalog::{
    Catalog, CatalogEntry, CatalogError, CatalogRegistry, CatalogResult, CatalogSchema,
    CatalogSource, CatalogStore, SchemaType, SchemaWarning,
};
pub use graph::{Graph, GraphEdge, GraphNode, POINTER_TAG_PREFIX};
pub use predicate::{matches, FilterPredicate, OperatorSet, PredicateValue};
pub use projection::{ProjectOptions, ProjectionMap, Projector, TagMode};
pub use query::{QueryEngine, QueryMatch, QueryOptions};
pub use stats::{stats, CatalogStats, EngineStats, RegistryStats};
pub use validate::{validate, ValidationReport};
pub use value::AttrValue;

/// CatLite version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// CatLite crate name
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
