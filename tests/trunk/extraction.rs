//! Extraction Tests
//!
//! Collections, typed lists and class extraction over decoded JSON and
//! hand-built object graphs.

use crate::common::*;
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;

fn catalog() -> StrictTrunk {
    StrictTrunk::new(json_data(json!({
        "ids": [3, 1, 2],
        "prices": [1.5, 2.25],
        "names": ["ann", "bea"],
        "mixed": [1, "2", 3.5, true, null],
        "owners": {"first": "ann", "second": "bea"}
    })))
}

#[test]
fn typed_lists_from_json() {
    let trunk = catalog();
    assert_eq!(trunk.get("ids").list_of_int(), Some(vec![3, 1, 2]));
    assert_eq!(trunk.get("prices").list_of_float(), Some(vec![1.5, 2.25]));
    assert_eq!(
        trunk.get("names").list_of_string(),
        Some(vec!["ann".to_string(), "bea".to_string()])
    );
    assert_eq!(trunk.get("ids").list_of_float(), None);
}

#[test]
fn coercing_lists_from_json() {
    let mixed = catalog().get("mixed");
    assert_eq!(mixed.list_of_int(), None);
    assert_eq!(mixed.list_of_int_value(), vec![1, 2, 3, 1, 0]);
    assert_eq!(mixed.list_of_float_value(), vec![1.0, 2.0, 3.5, 1.0, 0.0]);
    assert_eq!(mixed.list_of_string_value(), vec!["1", "2", "3.5", "1", ""]);
    assert_eq!(
        mixed.list_of_bool_value(),
        vec![true, false, false, true, false]
    );
}

#[test]
fn map_children_keep_document_order() {
    let owners = catalog().get("owners").map_value();
    let pairs: Vec<(Key, String)> = owners
        .iter()
        .map(|(k, v)| (k.clone(), v.string_value()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            (Key::from("first"), "ann".to_string()),
            (Key::from("second"), "bea".to_string())
        ]
    );
}

#[test]
fn missing_collection_defaults_to_empty() {
    let trunk = catalog();
    let missing = trunk.get("nothing");
    assert!(missing.list_value().is_empty());
    assert!(missing.map_value().is_empty());
    assert!(missing.list_of_int_value().is_empty());
    assert!(missing.list_of_class_value::<Person>(None).is_empty());
    assert_eq!(trunk.fault().map(Fault::kind), Some(FaultKind::DoesNotExist));
}

#[test]
fn map_of_class_with_builder() {
    let owners = catalog()
        .get("owners")
        .map_of_class::<Person>(Some(&person_builder))
        .expect("every owner builds");
    assert_eq!(owners[&Key::from("second")].borrow().name, "bea");

    // the builder produces the wrong type, so nothing resolves
    assert!(catalog()
        .get("owners")
        .map_of_class::<Person>(Some(&robot_builder))
        .is_none());
}

#[test]
fn list_of_class_is_all_or_nothing() {
    init_tracing();
    let trunk = StrictTrunk::new(Data::list([
        Data::object(Person::new("ann")),
        Data::from("bea"),
        Data::Int(3),
    ]));

    assert!(trunk.list_of_class::<Person>(Some(&person_builder)).is_none());
    assert!(trunk.list_of_class_value::<Person>(Some(&person_builder)).is_empty());

    let truncated = StrictTrunk::new(Data::list([
        Data::object(Person::new("ann")),
        Data::from("bea"),
    ]));
    let people = truncated
        .list_of_class::<Person>(Some(&person_builder))
        .expect("both resolve");
    assert_eq!(people.len(), 2);
}

#[test]
fn of_class_shares_the_instance() {
    let shared = Rc::new(RefCell::new(Person::new("ann")));
    let trunk = PermissiveTrunk::new(json_data(json!({"who": null})));
    trunk.set("who", Object::from_shared(shared.clone())).unwrap();

    let found = trunk.get("who").of_class::<Person>(None).expect("a person");
    found.borrow_mut().name = "bea".to_string();
    assert_eq!(shared.borrow().name, "bea");
    assert_eq!(trunk.get("who").get("name").string(), Some("bea"));

    assert!(trunk.get("who").of_class::<Robot>(None).is_none());
}

#[test]
fn of_class_value_falls_back_to_default() {
    let fallback = Rc::new(RefCell::new(Person::new("nobody")));
    let trunk = StrictTrunk::new(Data::Int(1));

    let got = trunk.of_class_value(fallback.clone(), Some(&robot_builder));
    assert!(Rc::ptr_eq(&got, &fallback));

    let built = StrictTrunk::new(Data::from("ann"))
        .of_class_value(fallback, Some(&person_builder));
    assert_eq!(built.borrow().name, "ann");
}

#[test]
fn aggregate_access_ignores_shape() {
    let trunk = catalog();
    let ids = trunk.get("ids").raw_aggregate_value();
    assert_eq!(ids.get(&Key::Index(0)), Some(&Data::Int(3)));

    let owners = trunk.get("owners").aggregate_value();
    assert_eq!(owners.len(), 2);
    assert!(trunk.get("ids").raw_map().is_none());
}
