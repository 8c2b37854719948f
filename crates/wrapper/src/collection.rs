//! Collection extraction
//!
//! `as_list`/`as_map` and their raw forms answer only when the shape
//! classifier agrees, so for any wrapper at most one of them is `Some`.
//! The `list_of_*` getters are all-or-nothing; their `*_value` forms coerce
//! element by element and never fail.

use crate::policy::Policy;
use crate::trunk::Trunk;
use indexmap::IndexMap;
use trunk_core::{
    to_bool_value, to_float_value, to_int_value, to_string_value, Aggregate, Data, Key, Shape,
};

impl<P: Policy> Trunk<P> {
    /// The backing aggregate, if the value has exactly `shape`
    pub(crate) fn aggregate_of(&self, shape: Shape) -> Option<&Aggregate> {
        if self.shape() == shape {
            self.data().as_aggregate()
        } else {
            None
        }
    }

    // ========================================================================
    // Lists
    // ========================================================================

    /// Children in order, if the value is a list
    pub fn as_list(&self) -> Option<Vec<Trunk<P>>> {
        let list = self.aggregate_of(Shape::List)?;
        Some(list.values().into_iter().map(Trunk::new).collect())
    }

    /// [`as_list`](Self::as_list), or empty
    pub fn list_value(&self) -> Vec<Trunk<P>> {
        self.as_list().unwrap_or_default()
    }

    /// Elements in order, unwrapped, if the value is a list
    pub fn raw_list(&self) -> Option<Vec<Data>> {
        self.aggregate_of(Shape::List).map(Aggregate::values)
    }

    /// [`raw_list`](Self::raw_list), or empty
    pub fn raw_list_value(&self) -> Vec<Data> {
        self.raw_list().unwrap_or_default()
    }

    // ========================================================================
    // Maps
    // ========================================================================

    /// Children by key, if the value is a map
    pub fn as_map(&self) -> Option<IndexMap<Key, Trunk<P>>> {
        let map = self.aggregate_of(Shape::Map)?;
        Some(
            map.entries()
                .into_iter()
                .map(|(k, v)| (k, Trunk::new(v)))
                .collect(),
        )
    }

    /// [`as_map`](Self::as_map), or empty
    pub fn map_value(&self) -> IndexMap<Key, Trunk<P>> {
        self.as_map().unwrap_or_default()
    }

    /// Entries by key, unwrapped, if the value is a map
    pub fn raw_map(&self) -> Option<IndexMap<Key, Data>> {
        self.aggregate_of(Shape::Map).map(Aggregate::to_index_map)
    }

    /// [`raw_map`](Self::raw_map), or empty
    pub fn raw_map_value(&self) -> IndexMap<Key, Data> {
        self.raw_map().unwrap_or_default()
    }

    // ========================================================================
    // Either shape
    // ========================================================================

    /// Children by key for any aggregate, list or map
    pub fn as_aggregate(&self) -> Option<IndexMap<Key, Trunk<P>>> {
        let agg = self.data().as_aggregate()?;
        Some(
            agg.entries()
                .into_iter()
                .map(|(k, v)| (k, Trunk::new(v)))
                .collect(),
        )
    }

    /// [`as_aggregate`](Self::as_aggregate), or empty
    pub fn aggregate_value(&self) -> IndexMap<Key, Trunk<P>> {
        self.as_aggregate().unwrap_or_default()
    }

    /// Entries by key, unwrapped, for any aggregate
    pub fn raw_aggregate(&self) -> Option<IndexMap<Key, Data>> {
        self.data().as_aggregate().map(Aggregate::to_index_map)
    }

    /// [`raw_aggregate`](Self::raw_aggregate), or empty
    pub fn raw_aggregate_value(&self) -> IndexMap<Key, Data> {
        self.raw_aggregate().unwrap_or_default()
    }

    // ========================================================================
    // Typed lists
    // ========================================================================

    fn list_of<T>(&self, pick: impl Fn(&Data) -> Option<T>) -> Option<Vec<T>> {
        let list = self.aggregate_of(Shape::List)?;
        list.values().iter().map(pick).collect()
    }

    fn list_of_coerced<T>(&self, coerce: impl Fn(&Data) -> T) -> Vec<T> {
        match self.aggregate_of(Shape::List) {
            Some(list) => list.values().iter().map(coerce).collect(),
            None => Vec::new(),
        }
    }

    /// Every element as an integer, if all of them are integers
    pub fn list_of_int(&self) -> Option<Vec<i64>> {
        self.list_of(Data::as_int)
    }

    /// Every element coerced to an integer
    pub fn list_of_int_value(&self) -> Vec<i64> {
        self.list_of_coerced(to_int_value)
    }

    /// Every element as a float, if all of them are floats
    pub fn list_of_float(&self) -> Option<Vec<f64>> {
        self.list_of(Data::as_float)
    }

    /// Every element coerced to a float
    pub fn list_of_float_value(&self) -> Vec<f64> {
        self.list_of_coerced(to_float_value)
    }

    /// Every element as a boolean, if all of them are booleans
    pub fn list_of_bool(&self) -> Option<Vec<bool>> {
        self.list_of(Data::as_bool)
    }

    /// Every element coerced to a boolean
    pub fn list_of_bool_value(&self) -> Vec<bool> {
        self.list_of_coerced(to_bool_value)
    }

    /// Every element as a string, if all of them are strings
    pub fn list_of_string(&self) -> Option<Vec<String>> {
        self.list_of(|d| d.as_str().map(str::to_owned))
    }

    /// Every element coerced to a string
    pub fn list_of_string_value(&self) -> Vec<String> {
        self.list_of_coerced(to_string_value)
    }
}
