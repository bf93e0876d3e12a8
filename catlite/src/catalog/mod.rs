// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Catalog data model and storage
//!
//! This module defines the catalog data model (entries, schemas, catalogs),
//! the insertion-ordered registry that holds them, and the in-memory store
//! that is the single mutation point of the engine.

pub mod error;
pub mod registry;
pub mod store;
pub mod types;

pub use error::{CatalogError, CatalogResult};
pub use registry::CatalogRegistry;
pub use store::{CatalogStore, SchemaWarning};
pub use types::{Catalog, CatalogEntry, CatalogSchema, CatalogSource, SchemaType};
