// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Error types for the catalog engine

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum CatalogError {
    #[error("Invalid catalog id: {0}")]
    InvalidCatalogId(String),

    #[error("Invalid entry id: {0}")]
    InvalidEntryId(String),

    #[error("Catalog not found: {0}")]
    CatalogNotFound(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::SerializationError(err.to_string())
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
