//! Iteration over a wrapped value
//!
//! Lists, maps and objects are all walked as one `(Key, Data)` sequence:
//! lists in element order, maps in insertion order, objects through their
//! public fields in declaration order. Each call to [`Trunk::iter`] takes
//! its own snapshot and cursor.

use crate::policy::Policy;
use crate::trunk::Trunk;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use trunk_core::{Access, Data, Fault, Key};

/// Iterator over `(Key, Trunk<P>)` pairs
pub struct Entries<P: Policy> {
    entries: Vec<(Key, Data)>,
    position: usize,
    _policy: PhantomData<P>,
}

impl<P: Policy> Entries<P> {
    fn new(entries: Vec<(Key, Data)>) -> Self {
        Entries {
            entries,
            position: 0,
            _policy: PhantomData,
        }
    }

    /// Restart from the first entry
    pub fn rewind(&mut self) {
        self.position = 0;
    }
}

impl<P: Policy> Iterator for Entries<P> {
    type Item = (Key, Trunk<P>);

    fn next(&mut self) -> Option<Self::Item> {
        let (key, data) = self.entries.get(self.position)?;
        self.position += 1;
        Some((key.clone(), Trunk::new(data.clone())))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.entries.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl<P: Policy> ExactSizeIterator for Entries<P> {}

impl<P: Policy> FusedIterator for Entries<P> {}

impl<P: Policy> Trunk<P> {
    /// Iterate over the wrapped value's entries
    ///
    /// Scalars and null have none; the policy is told about the attempt.
    pub fn iter(&self) -> Entries<P> {
        let entries = match self.data() {
            Data::Aggregate(agg) => agg.entries(),
            Data::Object(obj) => self
                .public_view(obj)
                .entries()
                .into_iter()
                .map(|(name, value)| (Key::Name(name), value))
                .collect(),
            other => {
                self.record(Fault::WrongType {
                    found: other.type_name(),
                    access: Access::Iteration,
                });
                Vec::new()
            }
        };
        Entries::new(entries)
    }
}

impl<'a, P: Policy> IntoIterator for &'a Trunk<P> {
    type Item = (Key, Trunk<P>);
    type IntoIter = Entries<P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
