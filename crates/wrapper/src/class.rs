//! Typed object extraction
//!
//! "Is this an instance of `T`" is answered by [`Object::downcast`]. When
//! the wrapped value is not one, an optional [`Builder`] gets a chance to
//! produce an instance from the raw data; its result is accepted only if
//! it passes the same test. Collection forms are atomic: one element that
//! cannot be resolved discards the whole result.
//!
//! # Examples
//!
//! ```
//! use trunk_core::{Data, Field, Object, Reflect};
//! use trunk_wrapper::StrictTrunk;
//!
//! struct Tag(String);
//!
//! impl Reflect for Tag {
//!     fn fields(&self) -> Vec<Field> {
//!         vec![Field::public("label")]
//!     }
//!
//!     fn field(&self, name: &str) -> Option<Data> {
//!         (name == "label").then(|| Data::from(self.0.as_str()))
//!     }
//! }
//!
//! let build = |d: &Data| d.as_str().map(|s| Object::new(Tag(s.to_string())));
//! let trunk = StrictTrunk::new(Data::list(["a", "b"]));
//!
//! let tags = trunk.list_of_class::<Tag>(Some(&build)).unwrap();
//! assert_eq!(tags[1].borrow().0, "b");
//! assert!(trunk.list_of_class::<Tag>(None).is_none());
//! ```

use crate::policy::Policy;
use crate::trunk::Trunk;
use indexmap::IndexMap;
use std::any::type_name;
use tracing::debug;
use trunk_core::{Aggregate, Data, Key, Object, Reflect, Shape, Shared};

/// Fallback that turns raw data into an object
pub type Builder<'a> = &'a dyn Fn(&Data) -> Option<Object>;

/// Resolve `value` with `predicate`, falling back to `builder`
///
/// The builder's result must satisfy the same predicate.
pub fn try_as<T>(
    value: &Data,
    predicate: impl Fn(&Data) -> Option<T>,
    builder: Option<Builder<'_>>,
) -> Option<T> {
    if let Some(found) = predicate(value) {
        return Some(found);
    }
    let built = builder?(value)?;
    predicate(&Data::Object(built))
}

/// The instance behind `data`, if it is an object of type `T`
pub fn instance_of<T: Reflect>(data: &Data) -> Option<Shared<T>> {
    data.as_object()?.downcast::<T>()
}

fn resolve_all<T: Reflect>(
    aggregate: &Aggregate,
    builder: Option<Builder<'_>>,
) -> Option<Vec<(Key, Shared<T>)>> {
    let mut resolved = Vec::with_capacity(aggregate.len());
    for (key, value) in aggregate.entries() {
        match try_as(&value, instance_of::<T>, builder) {
            Some(instance) => resolved.push((key, instance)),
            None => {
                debug!(
                    target: "trunk::class",
                    target_type = type_name::<T>(),
                    key = %key,
                    found = value.type_name(),
                    "Class extraction failed"
                );
                return None;
            }
        }
    }
    Some(resolved)
}

impl<P: Policy> Trunk<P> {
    /// The wrapped instance of `T`, or one produced by `builder`
    pub fn of_class<T: Reflect>(&self, builder: Option<Builder<'_>>) -> Option<Shared<T>> {
        try_as(self.data(), instance_of::<T>, builder)
    }

    /// [`of_class`](Self::of_class), or `default`
    pub fn of_class_value<T: Reflect>(
        &self,
        default: Shared<T>,
        builder: Option<Builder<'_>>,
    ) -> Shared<T> {
        self.of_class(builder).unwrap_or(default)
    }

    /// Every list element as `T`, or `None` if any element fails
    pub fn list_of_class<T: Reflect>(
        &self,
        builder: Option<Builder<'_>>,
    ) -> Option<Vec<Shared<T>>> {
        let list = self.aggregate_of(Shape::List)?;
        let resolved = resolve_all::<T>(list, builder)?;
        Some(resolved.into_iter().map(|(_, instance)| instance).collect())
    }

    /// [`list_of_class`](Self::list_of_class), or empty
    pub fn list_of_class_value<T: Reflect>(&self, builder: Option<Builder<'_>>) -> Vec<Shared<T>> {
        self.list_of_class(builder).unwrap_or_default()
    }

    /// Every map value as `T`, or `None` if any value fails
    pub fn map_of_class<T: Reflect>(
        &self,
        builder: Option<Builder<'_>>,
    ) -> Option<IndexMap<Key, Shared<T>>> {
        let map = self.aggregate_of(Shape::Map)?;
        let resolved = resolve_all::<T>(map, builder)?;
        Some(resolved.into_iter().collect())
    }

    /// [`map_of_class`](Self::map_of_class), or empty
    pub fn map_of_class_value<T: Reflect>(
        &self,
        builder: Option<Builder<'_>>,
    ) -> IndexMap<Key, Shared<T>> {
        self.map_of_class(builder).unwrap_or_default()
    }
}
