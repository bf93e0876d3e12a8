// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Predicate data model
//!
//! `PredicateValue` is the "literal or operator object" union: any JSON
//! object in predicate position is an operator object (entry attributes are
//! never objects), anything else is an equality literal.

use crate::value::AttrValue;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A structured filter expression: attribute name to condition
pub type FilterPredicate = HashMap<String, PredicateValue>;

/// One attribute condition: equality literal or operator object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PredicateValue {
    Ops(OperatorSet),
    Literal(AttrValue),
}

impl From<AttrValue> for PredicateValue {
    fn from(value: AttrValue) -> Self {
        PredicateValue::Literal(value)
    }
}

/// Recognized comparison operators for a single attribute
///
/// All present operators AND together. `unrecognized` counts `$`-keys the
/// engine does not know; any unrecognized key forces the whole operator
/// object to match nothing (fail-closed), so a half-understood predicate
/// never silently widens results.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OperatorSet {
    pub gt: Option<AttrValue>,
    pub gte: Option<AttrValue>,
    pub lt: Option<AttrValue>,
    pub lte: Option<AttrValue>,
    pub ne: Option<AttrValue>,
    pub within: Option<Vec<AttrValue>>,
    pub not_within: Option<Vec<AttrValue>>,
    pub contains: Option<AttrValue>,
    /// Count of unrecognized operator keys seen at deserialization
    pub unrecognized: usize,
}

impl OperatorSet {
    /// True when no recognized operator is present
    pub fn is_vacant(&self) -> bool {
        self.gt.is_none()
            && self.gte.is_none()
            && self.lt.is_none()
            && self.lte.is_none()
            && self.ne.is_none()
            && self.within.is_none()
            && self.not_within.is_none()
            && self.contains.is_none()
    }
}

const OP_GT: &str = "$gt";
const OP_GTE: &str = "$gte";
const OP_LT: &str = "$lt";
const OP_LTE: &str = "$lte";
const OP_NE: &str = "$ne";
const OP_IN: &str = "$in";
const OP_NIN: &str = "$nin";
const OP_CONTAINS: &str = "$contains";

impl Serialize for OperatorSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if let Some(v) = &self.gt {
            map.serialize_entry(OP_GT, v)?;
        }
        if let Some(v) = &self.gte {
            map.serialize_entry(OP_GTE, v)?;
        }
        if let Some(v) = &self.lt {
            map.serialize_entry(OP_LT, v)?;
        }
        if let Some(v) = &self.lte {
            map.serialize_entry(OP_LTE, v)?;
        }
        if let Some(v) = &self.ne {
            map.serialize_entry(OP_NE, v)?;
        }
        if let Some(v) = &self.within {
            map.serialize_entry(OP_IN, v)?;
        }
        if let Some(v) = &self.not_within {
            map.serialize_entry(OP_NIN, v)?;
        }
        if let Some(v) = &self.contains {
            map.serialize_entry(OP_CONTAINS, v)?;
        }
        map.end()
    }
}

// Hand-rolled Deserialize so unrecognized operator keys are counted instead
// of rejected; rejection would bounce the whole predicate at the boundary.
impl<'de> Deserialize<'de> for OperatorSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OpsVisitor;

        impl<'de> Visitor<'de> for OpsVisitor {
            type Value = OperatorSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an operator object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut ops = OperatorSet::default();
                while let Some(key) = access.next_key::<String>()? {
                    match key.as_str() {
                        OP_GT => ops.gt = Some(access.next_value()?),
                        OP_GTE => ops.gte = Some(access.next_value()?),
                        OP_LT => ops.lt = Some(access.next_value()?),
                        OP_LTE => ops.lte = Some(access.next_value()?),
                        OP_NE => ops.ne = Some(access.next_value()?),
                        OP_IN => ops.within = Some(access.next_value()?),
                        OP_NIN => ops.not_within = Some(access.next_value()?),
                        OP_CONTAINS => ops.contains = Some(access.next_value()?),
                        _ => {
                            let _: serde::de::IgnoredAny = access.next_value()?;
                            ops.unrecognized += 1;
                        }
                    }
                }
                Ok(ops)
            }
        }

        deserializer.deserialize_map(OpsVisitor)
    }
}
