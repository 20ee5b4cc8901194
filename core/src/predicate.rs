//! Filter, sort and mutation descriptions understood by every [`Store`](crate::Store).
//!
//! These are deliberately tiny: the benchmark only ever matches on `index` and
//! sorts on one field, so backends translate them directly into their native
//! query language instead of going through a general expression tree.

use std::cmp::Ordering;

use crate::document::{now_timestamp, Document};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Predicate {
    /// Matches every document.
    All,
    IndexEq(i64),
    IndexLt(i64),
}

impl Predicate {
    pub fn matches(&self, doc: &Document) -> bool {
        match self {
            Predicate::All => true,
            Predicate::IndexEq(index) => doc.index == *index,
            Predicate::IndexLt(bound) => doc.index < *bound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Index,
    Timestamp,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Index => "index",
            Field::Timestamp => "timestamp",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: Field,
    pub order: Order,
}

impl Sort {
    pub fn new(field: Field, order: Order) -> Self { Self { field, order } }

    pub fn descending(field: Field) -> Self { Self::new(field, Order::Descending) }

    /// Orders two documents according to this sort. Non-comparable floats compare equal.
    pub fn compare(&self, a: &Document, b: &Document) -> Ordering {
        let ordering = match self.field {
            Field::Index => a.index.cmp(&b.index),
            Field::Timestamp => a.timestamp.partial_cmp(&b.timestamp).unwrap_or(Ordering::Equal),
        };
        match self.order {
            Order::Ascending => ordering,
            Order::Descending => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mutation {
    SetTimestamp(f64),
}

impl Mutation {
    /// Sets the timestamp to the current time.
    pub fn touch() -> Self { Mutation::SetTimestamp(now_timestamp()) }

    pub fn apply(&self, doc: &mut Document) {
        match self {
            Mutation::SetTimestamp(timestamp) => doc.timestamp = *timestamp,
        }
    }
}
