//! The wrapped value and its navigation
//!
//! A [`Trunk`] wraps one [`Data`] and lets callers descend into it without
//! checking every level. Descending never panics: a failed step yields a
//! wrapper over `Null`, and the wrapper's [`Policy`] decides whether the
//! failure is recorded.
//!
//! # Examples
//!
//! ```
//! use trunk_wrapper::{StrictTrunk, FaultKind};
//! use trunk_core::Data;
//!
//! let trunk = StrictTrunk::new(Data::map([("a", Data::list([1, 2]))]));
//! assert_eq!(trunk.get("a").get(1).int(), Some(2));
//!
//! let missing = trunk.get("b");
//! assert!(missing.is_null());
//! assert_eq!(trunk.fault().map(|f| f.kind()), Some(FaultKind::DoesNotExist));
//! ```

use crate::policy::{FaultStore, Permissive, Policy, Strict};
use std::cell::OnceCell;
use std::fmt;
use std::marker::PhantomData;
use tracing::{trace, warn};
use trunk_core::{
    Access, Data, Fault, Key, Object, PublicFields, Result, Shape, TrunkConfig, TrunkError,
    TrunkPath,
};

/// Safe-navigation wrapper over a [`Data`]
pub struct Trunk<P: Policy = Strict> {
    data: Data,
    faults: P::Faults,
    public_fields: OnceCell<PublicFields>,
    _policy: PhantomData<P>,
}

/// Read-only wrapper that records the first navigation fault
pub type StrictTrunk = Trunk<Strict>;

/// Writable wrapper that ignores navigation errors
pub type PermissiveTrunk = Trunk<Permissive>;

impl<P: Policy> Trunk<P> {
    /// Wrap a value
    pub fn new(data: impl Into<Data>) -> Self {
        Trunk {
            data: data.into(),
            faults: P::Faults::default(),
            public_fields: OnceCell::new(),
            _policy: PhantomData,
        }
    }

    /// The wrapped value
    pub fn data(&self) -> &Data {
        &self.data
    }

    /// Unwrap
    pub fn into_data(self) -> Data {
        self.data
    }

    /// First navigation fault recorded on this wrapper
    ///
    /// Always `None` for permissive wrappers.
    pub fn fault(&self) -> Option<&Fault> {
        self.faults.first()
    }

    /// Shape of the wrapped value
    pub fn shape(&self) -> Shape {
        Shape::of(&self.data)
    }

    /// Whether the wrapped value is `Null`
    pub fn is_null(&self) -> bool {
        self.data.is_null()
    }

    pub(crate) fn record(&self, fault: Fault) {
        P::on_navigation_error(&self.faults, fault);
    }

    /// Public fields of a wrapped object, listed once per wrapper
    pub(crate) fn public_view(&self, object: &Object) -> &PublicFields {
        self.public_fields.get_or_init(|| object.public_fields())
    }

    /// Resolve `key` against the wrapped value
    fn lookup_here(&self, key: &Key) -> std::result::Result<Data, Fault> {
        match (&self.data, key) {
            (Data::Object(obj), Key::Name(name)) => {
                self.public_view(obj)
                    .get(name)
                    .ok_or_else(|| Fault::DoesNotExist { key: key.clone() })
            }
            _ => lookup(&self.data, key),
        }
    }

    /// Descend one level
    ///
    /// A failed step returns a wrapper over `Null` and reports the fault to
    /// this wrapper's policy.
    pub fn get(&self, key: impl Into<Key>) -> Trunk<P> {
        let key = key.into();
        match self.lookup_here(&key) {
            Ok(child) => Trunk::new(child),
            Err(fault) => {
                self.record(fault);
                Trunk::new(Data::Null)
            }
        }
    }

    /// Whether `get(key)` would succeed
    pub fn contains_key(&self, key: impl Into<Key>) -> bool {
        let key = key.into();
        match (&self.data, &key) {
            (Data::Aggregate(agg), _) => agg.contains_key(&key),
            (Data::Object(obj), Key::Name(name)) => self.public_view(obj).contains(name),
            _ => false,
        }
    }

    /// Element count: list length, 0 for null and for an empty aggregate,
    /// 1 for anything else
    pub fn count(&self) -> usize {
        match (&self.data, self.shape()) {
            (Data::Aggregate(agg), _) if agg.is_empty() => 0,
            (Data::Aggregate(agg), Shape::List) => agg.len(),
            (_, Shape::Null) => 0,
            _ => 1,
        }
    }

    /// Write `value` under `key`
    ///
    /// Rejected with [`TrunkError::Immutable`] unless the policy allows
    /// writes. Aggregates insert or replace; objects assign the public field
    /// if it exists and accepts the value; everything else is left alone.
    /// An aggregate is never inserted into itself.
    pub fn set(&self, key: impl Into<Key>, value: impl Into<Data>) -> Result<()> {
        let key = key.into();
        if !P::ALLOW_WRITE {
            warn!(target: "trunk::write", policy = P::NAME, key = %key, "Write rejected");
            return Err(TrunkError::Immutable);
        }

        match &self.data {
            Data::Aggregate(agg) => {
                let value: Data = value.into();
                if matches!(&value, Data::Aggregate(inner) if inner.ptr_eq(agg)) {
                    trace!(target: "trunk::write", key = %key, "Self-insertion ignored");
                } else {
                    agg.insert(key, value);
                }
            }
            Data::Object(obj) => {
                let written = match &key {
                    Key::Name(name) => self.public_view(obj).set(name, value.into()),
                    Key::Index(_) => false,
                };
                if !written {
                    trace!(
                        target: "trunk::write",
                        object = obj.type_name(),
                        key = %key,
                        "Object write ignored"
                    );
                }
            }
            other => {
                trace!(
                    target: "trunk::write",
                    found = other.type_name(),
                    key = %key,
                    "Write ignored"
                );
            }
        }
        Ok(())
    }

    /// Remove the entry under `key`, returning it
    ///
    /// Remaining entries keep their keys and order, so removing from the
    /// middle of a list leaves a map.
    pub fn unset(&self, key: impl Into<Key>) -> Result<Option<Data>> {
        let key = key.into();
        if !P::ALLOW_WRITE {
            warn!(target: "trunk::write", policy = P::NAME, key = %key, "Unset rejected");
            return Err(TrunkError::Immutable);
        }

        match &self.data {
            Data::Aggregate(agg) => Ok(agg.remove(&key)),
            other => Err(TrunkError::UnsetUnsupported {
                found: other.type_name(),
            }),
        }
    }

    /// Navigate a whole path such as `items[0].name`
    ///
    /// Uses the default limits. Parse and limit errors are returned; a
    /// navigation fault along the way is recorded on `self`.
    pub fn at(&self, path: &str) -> Result<Trunk<P>> {
        self.at_with(path, &TrunkConfig::default())
    }

    /// Navigate a whole path with explicit limits
    pub fn at_with(&self, path: &str, config: &TrunkConfig) -> Result<Trunk<P>> {
        let path: TrunkPath = path.parse()?;
        self.walk(&path, config)
    }

    /// Navigate an already parsed path
    pub fn walk(&self, path: &TrunkPath, config: &TrunkConfig) -> Result<Trunk<P>> {
        path.validate(config)?;
        let mut current: Option<Data> = None;
        for key in path.segments() {
            let step = match &current {
                None => self.lookup_here(key),
                Some(data) => lookup(data, key),
            };
            match step {
                Ok(next) => current = Some(next),
                Err(fault) => {
                    self.record(fault);
                    return Ok(Trunk::new(Data::Null));
                }
            }
        }
        Ok(Trunk::new(current.unwrap_or_else(|| self.data.clone())))
    }
}

/// Resolve one key against one value
fn lookup(data: &Data, key: &Key) -> std::result::Result<Data, Fault> {
    let shape = Shape::of(data);
    match (data, shape, key) {
        (Data::Aggregate(agg), Shape::List, Key::Index(index)) => {
            agg.get(key).ok_or(Fault::IndexOutOfBounds {
                index: *index,
                len: agg.len(),
            })
        }
        (Data::Aggregate(agg), Shape::Map, _) => agg.get(key).ok_or_else(|| Fault::DoesNotExist {
            key: key.clone(),
        }),
        (Data::Object(obj), _, Key::Name(name)) => {
            obj.get_public(name).ok_or_else(|| Fault::DoesNotExist {
                key: key.clone(),
            })
        }
        _ => Err(Fault::WrongType {
            found: shape.name(),
            access: Access::Key(key.clone()),
        }),
    }
}

impl<P: Policy> Default for Trunk<P> {
    fn default() -> Self {
        Trunk::new(Data::Null)
    }
}

impl<P: Policy> From<Data> for Trunk<P> {
    fn from(data: Data) -> Self {
        Trunk::new(data)
    }
}

/// Clones share the backing value but start with no fault and no cache
impl<P: Policy> Clone for Trunk<P> {
    fn clone(&self) -> Self {
        Trunk::new(self.data.clone())
    }
}

impl<P: Policy> fmt::Debug for Trunk<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trunk")
            .field("policy", &P::NAME)
            .field("data", &self.data)
            .field("fault", &self.fault())
            .finish()
    }
}
