// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Core catalog data types
//!
//! A catalog is a named, versioned collection of tagged entries. Entries carry
//! an open-ended attribute map alongside their id and tags; the optional
//! schema annotates expected attribute kinds but is never enforced at write
//! time (advisory validation only).

use crate::value::AttrValue;
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

/// One record within a catalog, uniquely identified within it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Unique id within the owning catalog (non-empty)
    pub id: String,
    /// Classification tags, treated as a set
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Open-ended named attributes (inline on the persisted record object)
    #[serde(flatten)]
    pub attributes: HashMap<String, AttrValue>,
}

impl CatalogEntry {
    /// Create an entry with no tags or attributes
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tags: Vec::new(),
            attributes: HashMap::new(),
        }
    }

    /// Builder-style tag assignment
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Builder-style attribute assignment
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Resolve a named attribute, treating `id` and `tags` as synthetic
    /// attributes so predicates can address them uniformly.
    pub fn attribute(&self, name: &str) -> Option<Cow<'_, AttrValue>> {
        match name {
            "id" => Some(Cow::Owned(AttrValue::String(self.id.clone()))),
            "tags" => Some(Cow::Owned(AttrValue::Array(
                self.tags
                    .iter()
                    .map(|t| AttrValue::String(t.clone()))
                    .collect(),
            ))),
            _ => self.attributes.get(name).map(Cow::Borrowed),
        }
    }

    /// Check whether the entry carries a given tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Declared attribute kind in a catalog schema
///
/// Unknown declared type names are preserved but never checked, keeping the
/// schema strictly advisory for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaType {
    String,
    Number,
    Boolean,
    Array,
    Any,
    Other(String),
}

impl SchemaType {
    fn from_name(name: &str) -> Self {
        match name {
            "string" => SchemaType::String,
            "number" => SchemaType::Number,
            "boolean" => SchemaType::Boolean,
            "array" => SchemaType::Array,
            "any" => SchemaType::Any,
            other => SchemaType::Other(other.to_string()),
        }
    }

    fn name(&self) -> &str {
        match self {
            SchemaType::String => "string",
            SchemaType::Number => "number",
            SchemaType::Boolean => "boolean",
            SchemaType::Array => "array",
            SchemaType::Any => "any",
            SchemaType::Other(name) => name,
        }
    }

    /// Check a value against the declared kind. `Any` and unrecognized
    /// declared names accept everything; `Null` is accepted by every kind
    /// since absence of data is not a schema violation.
    pub fn accepts(&self, value: &AttrValue) -> bool {
        match self {
            SchemaType::String => matches!(value, AttrValue::String(_) | AttrValue::Null),
            SchemaType::Number => matches!(value, AttrValue::Number(_) | AttrValue::Null),
            SchemaType::Boolean => matches!(value, AttrValue::Boolean(_) | AttrValue::Null),
            SchemaType::Array => matches!(value, AttrValue::Array(_) | AttrValue::Null),
            SchemaType::Any | SchemaType::Other(_) => true,
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for SchemaType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for SchemaType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(SchemaType::from_name(&name))
    }
}

/// Advisory attribute schema: attribute name to declared kind
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogSchema {
    pub attributes: HashMap<String, SchemaType>,
}

impl CatalogSchema {
    /// Attributes of `entry` that violate a declared kind, as
    /// `(attribute, declared, actual)` triples. Undeclared attributes and
    /// declared-but-absent attributes are fine.
    pub fn violations<'a>(
        &'a self,
        entry: &'a CatalogEntry,
    ) -> Vec<(&'a str, &'a SchemaType, &'a AttrValue)> {
        let mut out = Vec::new();
        for (name, declared) in &self.attributes {
            if let Some(value) = entry.attributes.get(name) {
                if !declared.accepts(value) {
                    out.push((name.as_str(), declared, value));
                }
            }
        }
        out.sort_by(|a, b| a.0.cmp(b.0));
        out
    }
}

/// A named, versioned collection of tagged entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Catalog id; must match the registry key it is stored under
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<CatalogSchema>,
    /// Entries in insertion order; ordering is a query-result contract
    #[serde(default)]
    pub entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: None,
            description: None,
            schema: None,
            entries: Vec::new(),
        }
    }

    /// Look up an entry by id
    pub fn entry(&self, entry_id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id == entry_id)
    }

    /// Number of entries
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

/// Persisted "catalog or file reference" union
///
/// Catalog files may hold a catalog inline or point at another file by path.
/// An external loader resolves `Path` variants before registration; the
/// engine itself only ever consumes resolved `Catalog` values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CatalogSource {
    Path(String),
    Inline(Box<Catalog>),
}
