//! Property Tests
//!
//! Shape exclusivity, child round-trips and all-or-nothing extraction over
//! generated aggregates.

use crate::common::*;
use proptest::prelude::*;

fn scalar() -> impl Strategy<Value = Data> {
    prop_oneof![
        Just(Data::Null),
        any::<bool>().prop_map(Data::Bool),
        any::<i64>().prop_map(Data::Int),
        (-1.0e6f64..1.0e6).prop_map(Data::Float),
        "[a-z0-9 ]{0,8}".prop_map(Data::String),
    ]
}

fn key() -> impl Strategy<Value = Key> {
    prop_oneof![
        (0usize..6).prop_map(Key::Index),
        "[a-z]{1,4}".prop_map(Key::Name),
    ]
}

/// Aggregates whose keys are arbitrary, so both lists and maps appear
fn aggregate() -> impl Strategy<Value = Data> {
    prop_oneof![
        prop::collection::vec(scalar(), 0..8).prop_map(Data::list),
        prop::collection::vec((key(), scalar()), 0..8).prop_map(Data::map),
    ]
}

/// Elements that are either a `Person`, a string the builder accepts, or
/// something nothing can turn into a `Person`
#[derive(Debug, Clone)]
enum Element {
    Instance(String),
    Buildable(String),
    Unresolvable(i64),
}

impl Element {
    fn data(&self) -> Data {
        match self {
            Element::Instance(name) => Data::object(Person::new(name.as_str())),
            Element::Buildable(name) => Data::from(name.as_str()),
            Element::Unresolvable(i) => Data::Int(*i),
        }
    }

    fn resolves(&self) -> bool {
        !matches!(self, Element::Unresolvable(_))
    }
}

fn element() -> impl Strategy<Value = Element> {
    prop_oneof![
        "[a-z]{1,6}".prop_map(Element::Instance),
        "[a-z]{1,6}".prop_map(Element::Buildable),
        any::<i64>().prop_map(Element::Unresolvable),
    ]
}

proptest! {
    #[test]
    fn list_and_map_are_exclusive(data in aggregate()) {
        let trunk = StrictTrunk::new(data);
        let as_list = trunk.as_list().is_some();
        let as_map = trunk.as_map().is_some();

        prop_assert!(as_list != as_map);
        prop_assert_eq!(as_list, trunk.shape() == Shape::List);
        prop_assert_eq!(trunk.raw_list().is_some(), as_list);
        prop_assert_eq!(trunk.raw_map().is_some(), as_map);
    }

    #[test]
    fn list_children_round_trip(values in prop::collection::vec(scalar(), 1..8)) {
        let trunk = StrictTrunk::new(Data::list(values.clone()));
        let children = trunk.as_list().expect("non-empty vec is a list");

        prop_assert_eq!(children.len(), values.len());
        for (i, child) in children.iter().enumerate() {
            prop_assert_eq!(child.data(), &values[i]);
            let indexed = trunk.get(i);
            prop_assert_eq!(indexed.data(), &values[i]);
        }
        prop_assert!(trunk.fault().is_none());
    }

    #[test]
    fn map_children_round_trip(data in aggregate()) {
        let trunk = StrictTrunk::new(data.clone());
        if let Some(children) = trunk.as_map() {
            let raw = trunk.raw_map().expect("same shape test");
            for (k, child) in &children {
                prop_assert_eq!(Some(child.data()), raw.get(k));
            }
        }
    }

    #[test]
    fn list_of_class_is_all_or_nothing(elements in prop::collection::vec(element(), 1..8)) {
        let trunk = StrictTrunk::new(Data::list(elements.iter().map(Element::data)));
        let resolved = trunk.list_of_class::<Person>(Some(&person_builder));

        if elements.iter().all(Element::resolves) {
            let people = resolved.expect("every element resolves");
            prop_assert_eq!(people.len(), elements.len());
        } else {
            prop_assert!(resolved.is_none());
        }
    }

    #[test]
    fn navigation_never_panics(data in aggregate(), keys in prop::collection::vec(key(), 0..4)) {
        let strict = StrictTrunk::new(data.clone());
        let loose = PermissiveTrunk::new(data);

        let mut s = strict.clone();
        let mut l = loose.clone();
        for k in keys {
            s = s.get(k.clone());
            l = l.get(k);
        }
        prop_assert_eq!(s.data(), l.data());
        prop_assert!(loose.fault().is_none());
    }

    #[test]
    fn coerced_string_is_stable(data in scalar()) {
        let trunk = StrictTrunk::new(data);
        let once = trunk.string_value();
        prop_assert_eq!(StrictTrunk::new(Data::from(once.clone())).string_value(), once);
    }
}
