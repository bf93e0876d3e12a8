// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Filter predicate language
//!
//! A predicate maps attribute names to either a literal value (equality) or
//! an operator object carrying comparison operators (`$gt`, `$gte`, `$lt`,
//! `$lte`, `$ne`, `$in`, `$nin`, `$contains`). Predicates commonly arrive
//! from less-trusted UI input, so evaluation is fail-closed: an operator
//! object with no recognized operator matches nothing instead of erroring.

pub mod eval;
pub mod filter;

pub use eval::matches;
pub use filter::{FilterPredicate, OperatorSet, PredicateValue};
