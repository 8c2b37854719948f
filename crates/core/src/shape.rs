//! Shape classification
//!
//! Decides how a [`Data`] is navigated. The only non-trivial decision is
//! list versus map for aggregates:
//!
//! - an aggregate is a **list** iff its keys are exactly `0, 1, ..., n-1`
//!   in that order
//! - every other aggregate is a **map**, including the empty one
//!
//! The empty-aggregate rule is deliberate: callers rely on `as_list()`
//! failing for empty collections. [`keys_form_list`] is the single predicate
//! behind every list/map branch in the workspace.

use crate::value::{Data, Key};

/// Runtime shape of a [`Data`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// `Data::Null`
    Null,
    /// `Data::Bool`
    Bool,
    /// `Data::Int`
    Int,
    /// `Data::Float`
    Float,
    /// `Data::String`
    String,
    /// Aggregate whose keys are `0..n`, `n > 0`
    List,
    /// Any other aggregate
    Map,
    /// `Data::Object`
    Object,
}

impl Shape {
    /// Classify a value
    pub fn of(data: &Data) -> Shape {
        match data {
            Data::Null => Shape::Null,
            Data::Bool(_) => Shape::Bool,
            Data::Int(_) => Shape::Int,
            Data::Float(_) => Shape::Float,
            Data::String(_) => Shape::String,
            Data::Aggregate(a) => {
                if a.is_list() {
                    Shape::List
                } else {
                    Shape::Map
                }
            }
            Data::Object(_) => Shape::Object,
        }
    }

    /// Lowercase name used in faults and error messages
    pub fn name(self) -> &'static str {
        match self {
            Shape::Null => "null",
            Shape::Bool => "bool",
            Shape::Int => "int",
            Shape::Float => "float",
            Shape::String => "string",
            Shape::List => "list",
            Shape::Map => "map",
            Shape::Object => "object",
        }
    }
}

/// True iff `keys` is exactly `Index(0), Index(1), ..., Index(n-1)` with `n > 0`
pub fn keys_form_list<'a, I>(keys: I) -> bool
where
    I: IntoIterator<Item = &'a Key>,
{
    let mut count = 0usize;
    for key in keys {
        if key.as_index() != Some(count) {
            return false;
        }
        count += 1;
    }
    count > 0
}

/// True iff `data` is an aggregate classified as a list
pub fn is_list(data: &Data) -> bool {
    Shape::of(data) == Shape::List
}

/// True iff `data` is an aggregate classified as a map
pub fn is_map(data: &Data) -> bool {
    Shape::of(data) == Shape::Map
}
