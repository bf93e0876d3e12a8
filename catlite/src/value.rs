// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Attribute value type system for catalog entries
//!
//! Catalog entries carry an open-ended attribute map. Attribute values are a
//! small tagged union of the kinds that actually occur in catalog data:
//! - Basic types: String, Number, Boolean, Null
//! - Collections: Array
//!
//! The union is serialized untagged so catalog JSON reads naturally
//! (`{"age": 30, "tags": ["x"]}`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Value types for catalog entry attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Boolean(bool),
    Number(f64),
    String(String),
    Array(Vec<AttrValue>),
    Null,
}

impl AttrValue {
    /// Extract as number if possible
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttrValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extract as string if possible
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Extract as boolean if possible
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            AttrValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Extract as array if possible
    pub fn as_array(&self) -> Option<&[AttrValue]> {
        match self {
            AttrValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Check for the null value
    pub fn is_null(&self) -> bool {
        matches!(self, AttrValue::Null)
    }

    /// Name of the value kind, used in schema mismatch reports
    pub fn kind_name(&self) -> &'static str {
        match self {
            AttrValue::String(_) => "string",
            AttrValue::Number(_) => "number",
            AttrValue::Boolean(_) => "boolean",
            AttrValue::Array(_) => "array",
            AttrValue::Null => "null",
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::String(s) => write!(f, "{}", s),
            AttrValue::Number(n) => write!(f, "{}", n),
            AttrValue::Boolean(b) => write!(f, "{}", b),
            AttrValue::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            AttrValue::Null => write!(f, "null"),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::String(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::String(s)
    }
}

impl From<f64> for AttrValue {
    fn from(n: f64) -> Self {
        AttrValue::Number(n)
    }
}

impl From<i64> for AttrValue {
    fn from(n: i64) -> Self {
        AttrValue::Number(n as f64)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Boolean(b)
    }
}

impl<T: Into<AttrValue>> From<Vec<T>> for AttrValue {
    fn from(items: Vec<T>) -> Self {
        AttrValue::Array(items.into_iter().map(Into::into).collect())
    }
}
