//! Value types for Trunk
//!
//! This module defines:
//! - [`Key`]: an aggregate key, either a position or a name
//! - [`Aggregate`]: a shared, insertion-ordered keyed collection
//! - [`Data`]: the dynamically-shaped value a wrapper navigates
//!
//! ## Sharing
//!
//! Aggregates and objects are reference-counted handles. Cloning a [`Data`]
//! clones the handle, never the contents, so every wrapper built over the
//! same aggregate observes the same entries. Scalars are plain values.
//!
//! ## Type Rules
//!
//! - No implicit coercions inside `Data` itself; coercion lives in
//!   [`crate::coerce`]
//! - `Int(1) != Float(1.0)`: different variants are never equal
//! - Aggregates compare by content, objects by identity

use crate::object::{Object, Reflect};
use crate::shape::{keys_form_list, Shape};
use indexmap::IndexMap;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

// ============================================================================
// Key
// ============================================================================

/// A key inside an aggregate
///
/// # Examples
///
/// ```
/// use trunk_core::Key;
///
/// assert_eq!(Key::from(3), Key::Index(3));
/// assert_eq!(Key::from("name"), Key::Name("name".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Position: `[0]`
    Index(usize),
    /// Name: `.foo`
    Name(String),
}

impl Key {
    /// The position, if this is an index key
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(i) => Some(*i),
            Key::Name(_) => None,
        }
    }

    /// The name, if this is a name key
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Index(_) => None,
            Key::Name(n) => Some(n),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{}", i),
            Key::Name(n) => write!(f, "{:?}", n),
        }
    }
}

impl From<usize> for Key {
    fn from(i: usize) -> Self {
        Key::Index(i)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Name(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Name(s)
    }
}

impl From<&String> for Key {
    fn from(s: &String) -> Self {
        Key::Name(s.clone())
    }
}

impl From<&Key> for Key {
    fn from(k: &Key) -> Self {
        k.clone()
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Shared, insertion-ordered collection of `Key -> Data` entries
///
/// Whether an aggregate reads as a list or a map is decided by its keys
/// alone, see [`crate::shape`]. Writes through any clone are visible through
/// every other clone. Cycles created through writes are not detected.
#[derive(Clone, Default)]
pub struct Aggregate(Rc<RefCell<IndexMap<Key, Data>>>);

impl Aggregate {
    /// Create an empty aggregate (classified as a map)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an aggregate from key/value pairs, keeping their order
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
        V: Into<Data>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect::<IndexMap<Key, Data>>();
        Aggregate(Rc::new(RefCell::new(map)))
    }

    /// Build a list: the values get the keys `0..n`
    pub fn from_values<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Data>,
    {
        Self::from_entries(values.into_iter().enumerate())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// True when there are no entries
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// True iff the keys are exactly `0..n` in order and `n > 0`
    pub fn is_list(&self) -> bool {
        keys_form_list(self.0.borrow().keys())
    }

    /// Value stored under `key`
    pub fn get(&self, key: &Key) -> Option<Data> {
        self.0.borrow().get(key).cloned()
    }

    /// True when `key` is present
    pub fn contains_key(&self, key: &Key) -> bool {
        self.0.borrow().contains_key(key)
    }

    /// Insert or replace. A replaced entry keeps its position.
    pub fn insert(&self, key: Key, value: Data) -> Option<Data> {
        self.0.borrow_mut().insert(key, value)
    }

    /// Remove an entry, keeping the order and keys of the others
    pub fn remove(&self, key: &Key) -> Option<Data> {
        self.0.borrow_mut().shift_remove(key)
    }

    /// Keys in order
    pub fn keys(&self) -> Vec<Key> {
        self.0.borrow().keys().cloned().collect()
    }

    /// Values in order
    pub fn values(&self) -> Vec<Data> {
        self.0.borrow().values().cloned().collect()
    }

    /// Snapshot of all entries in order
    pub fn entries(&self) -> Vec<(Key, Data)> {
        self.0
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Copy of the entries as an owned map
    pub fn to_index_map(&self) -> IndexMap<Key, Data> {
        self.0.borrow().clone()
    }

    /// True when both handles point at the same backing collection
    pub fn ptr_eq(&self, other: &Aggregate) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Aggregate {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.0.borrow() == *other.0.borrow()
    }
}

impl fmt::Debug for Aggregate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.borrow().iter()).finish()
    }
}

// ============================================================================
// Data
// ============================================================================

/// A dynamically-shaped value
///
/// # Examples
///
/// ```
/// use trunk_core::Data;
///
/// let data = Data::map([("a", Data::list([1, 2, 3]))]);
/// assert!(data.as_aggregate().is_some());
/// assert_eq!(Data::from("x").as_str(), Some("x"));
/// ```
#[derive(Debug, Clone, Default)]
pub enum Data {
    /// Absent / null value
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point (IEEE-754)
    Float(f64),
    /// UTF-8 string
    String(String),
    /// Keyed or ordered collection
    Aggregate(Aggregate),
    /// Structured object reached through [`Reflect`]
    Object(Object),
}

impl PartialEq for Data {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Data::Null, Data::Null) => true,
            (Data::Bool(a), Data::Bool(b)) => a == b,
            (Data::Int(a), Data::Int(b)) => a == b,
            // IEEE-754: NaN != NaN, -0.0 == 0.0
            (Data::Float(a), Data::Float(b)) => a == b,
            (Data::String(a), Data::String(b)) => a == b,
            (Data::Aggregate(a), Data::Aggregate(b)) => a == b,
            (Data::Object(a), Data::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl Data {
    /// Build a list aggregate from values
    pub fn list<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Data>,
    {
        Data::Aggregate(Aggregate::from_values(values))
    }

    /// Build a keyed aggregate from pairs, keeping their order
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
        V: Into<Data>,
    {
        Data::Aggregate(Aggregate::from_entries(entries))
    }

    /// Wrap a structured object
    pub fn object<T: Reflect>(value: T) -> Self {
        Data::Object(Object::new(value))
    }

    /// The shape name of this value, as used in faults and errors
    pub fn type_name(&self) -> &'static str {
        Shape::of(self).name()
    }

    /// Check if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Data::Null)
    }

    /// Get as bool if this is a Bool value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Data::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as i64 if this is an Int value
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Data::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as f64 if this is a Float value
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Data::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get as &str if this is a String value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Data::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the aggregate handle, whatever its shape
    pub fn as_aggregate(&self) -> Option<&Aggregate> {
        match self {
            Data::Aggregate(a) => Some(a),
            _ => None,
        }
    }

    /// Get the object handle
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Data::Object(o) => Some(o),
            _ => None,
        }
    }
}

// ============================================================================
// From implementations for ergonomic construction
// ============================================================================

impl From<&str> for Data {
    fn from(s: &str) -> Self {
        Data::String(s.to_string())
    }
}

impl From<String> for Data {
    fn from(s: String) -> Self {
        Data::String(s)
    }
}

impl From<bool> for Data {
    fn from(b: bool) -> Self {
        Data::Bool(b)
    }
}

impl From<i64> for Data {
    fn from(i: i64) -> Self {
        Data::Int(i)
    }
}

impl From<i32> for Data {
    fn from(i: i32) -> Self {
        Data::Int(i as i64)
    }
}

impl From<u32> for Data {
    fn from(i: u32) -> Self {
        Data::Int(i as i64)
    }
}

impl From<f64> for Data {
    fn from(f: f64) -> Self {
        Data::Float(f)
    }
}

impl From<f32> for Data {
    fn from(f: f32) -> Self {
        Data::Float(f as f64)
    }
}

impl From<()> for Data {
    fn from(_: ()) -> Self {
        Data::Null
    }
}

impl<T: Into<Data>> From<Option<T>> for Data {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Data::Null)
    }
}

impl<T: Into<Data>> From<Vec<T>> for Data {
    fn from(v: Vec<T>) -> Self {
        Data::list(v)
    }
}

impl From<Aggregate> for Data {
    fn from(a: Aggregate) -> Self {
        Data::Aggregate(a)
    }
}

impl From<Object> for Data {
    fn from(o: Object) -> Self {
        Data::Object(o)
    }
}
