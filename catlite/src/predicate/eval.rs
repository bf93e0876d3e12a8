// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Predicate evaluator
//!
//! Pure, side-effect-free matching of one entry against one predicate. All
//! attribute conditions AND together; the empty predicate matches every
//! entry. A missing attribute reads as `Null`, so `$ne` can hold for entries
//! that lack the attribute entirely.

use super::filter::{FilterPredicate, OperatorSet, PredicateValue};
use crate::catalog::types::CatalogEntry;
use crate::value::AttrValue;
use std::borrow::Cow;

/// Evaluate a predicate against a single entry
pub fn matches(entry: &CatalogEntry, predicate: &FilterPredicate) -> bool {
    predicate.iter().all(|(attr, condition)| {
        let value = entry
            .attribute(attr)
            .unwrap_or(Cow::Owned(AttrValue::Null));
        match condition {
            PredicateValue::Literal(literal) => value.as_ref() == literal,
            PredicateValue::Ops(ops) => eval_ops(ops, value.as_ref()),
        }
    })
}

fn eval_ops(ops: &OperatorSet, value: &AttrValue) -> bool {
    // Fail-closed: nothing recognized, or partially understood, matches nothing.
    if ops.is_vacant() || ops.unrecognized > 0 {
        return false;
    }

    if let Some(operand) = &ops.gt {
        if !numeric_cmp(value, operand, |a, b| a > b) {
            return false;
        }
    }
    if let Some(operand) = &ops.gte {
        if !numeric_cmp(value, operand, |a, b| a >= b) {
            return false;
        }
    }
    if let Some(operand) = &ops.lt {
        if !numeric_cmp(value, operand, |a, b| a < b) {
            return false;
        }
    }
    if let Some(operand) = &ops.lte {
        if !numeric_cmp(value, operand, |a, b| a <= b) {
            return false;
        }
    }
    if let Some(operand) = &ops.ne {
        if value == operand {
            return false;
        }
    }
    if let Some(set) = &ops.within {
        if !set.contains(value) {
            return false;
        }
    }
    if let Some(set) = &ops.not_within {
        if set.contains(value) {
            return false;
        }
    }
    if let Some(operand) = &ops.contains {
        // False, not an error, when the attribute is not an array.
        let held = value
            .as_array()
            .map_or(false, |items| items.contains(operand));
        if !held {
            return false;
        }
    }
    true
}

/// Numeric comparison; false whenever either side is not a number
fn numeric_cmp(value: &AttrValue, operand: &AttrValue, cmp: impl Fn(f64, f64) -> bool) -> bool {
    match (value.as_number(), operand.as_number()) {
        (Some(a), Some(b)) => cmp(a, b),
        _ => false,
    }
}
