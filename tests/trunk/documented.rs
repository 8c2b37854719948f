//! Documented Examples
//!
//! One test per canonical case of the wrapper's contract.

use crate::common::*;
use serde_json::json;

#[test]
fn string_from_nested_list() {
    let trunk = StrictTrunk::new(json_data(json!({"a": [1, 2, "x"]})));
    assert_eq!(trunk.get("a").get(2).string(), Some("x"));
}

#[test]
fn non_numeric_string_coerces_to_zero() {
    let trunk = StrictTrunk::new(json_data(json!({"a": [1, 2, "x"]})));
    assert_eq!(trunk.get("a").get(2).int_value(), 0);
    assert_eq!(trunk.get("a").get(2).int(), None);
}

#[test]
fn list_of_bool_value_uses_truthy_strings() {
    let trunk = StrictTrunk::new(json_data(json!(["y", "n", "1", "true"])));
    assert_eq!(trunk.list_of_bool_value(), vec![true, false, true, true]);
    assert_eq!(trunk.list_of_bool(), None);
}

#[test]
fn private_field_is_never_revealed() {
    let trunk = StrictTrunk::new(Data::object(Person::with_secret("joe", 1)));

    let secret = trunk.get("secret");
    assert!(secret.is_null());
    assert_eq!(secret.int_value(), 0);
    assert_eq!(trunk.fault().map(Fault::kind), Some(FaultKind::DoesNotExist));

    assert_eq!(trunk.get("name").string(), Some("joe"));
    let keys: Vec<Key> = trunk.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec![Key::from("name")]);
    assert_eq!(trunk.data().to_json(), json!({"name": "joe"}));
}

#[test]
fn list_of_class_with_builder() {
    init_tracing();
    let trunk = StrictTrunk::new(json_data(json!({"list": ["joe", "john"]})));

    let people = trunk
        .get("list")
        .list_of_class::<Person>(Some(&person_builder))
        .expect("every element builds a person");

    assert_eq!(people.len(), 2);
    assert_eq!(people[0].borrow().name, "joe");
    assert_eq!(people[1].borrow().name, "john");
}

#[test]
fn strict_first_fault_is_kept() {
    let trunk = StrictTrunk::new(Data::Int(5));

    assert!(trunk.get("x").is_null());
    assert_eq!(
        trunk.fault(),
        Some(&Fault::WrongType {
            found: "int",
            access: Access::Key(Key::from("x")),
        })
    );

    trunk.get(3);
    trunk.iter().count();
    assert_eq!(
        trunk.fault(),
        Some(&Fault::WrongType {
            found: "int",
            access: Access::Key(Key::from("x")),
        })
    );
}

#[test]
fn empty_aggregate_is_a_map() {
    for empty in [json!([]), json!({})] {
        let trunk = StrictTrunk::new(json_data(empty));
        assert_eq!(trunk.shape(), Shape::Map);
        assert!(trunk.as_list().is_none());
        assert!(trunk.as_map().is_some_and(|m| m.is_empty()));
        assert!(trunk.list_of_int().is_none());
    }
}
