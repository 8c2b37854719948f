//! Path and Config Tests
//!
//! Whole-path navigation, limits loaded from TOML, and the JSON bridge's
//! nesting limit.

use crate::common::*;
use serde_json::json;
use std::io::Write;
use trunk::{LimitError, TrunkPath};

fn order() -> StrictTrunk {
    StrictTrunk::new(json_data(json!({
        "customer": {"name": "ann"},
        "lines": [
            {"sku": "A-1", "qty": 2},
            {"sku": "B-7", "qty": "3"}
        ]
    })))
}

#[test]
fn at_matches_chained_get() {
    let trunk = order();
    let by_path = trunk.at("lines[1].qty").unwrap();
    let by_chain = trunk.get("lines").get(1).get("qty");
    assert_eq!(by_path.data(), by_chain.data());
    assert_eq!(by_path.int_value(), 3);
}

#[test]
fn at_root_is_the_value_itself() {
    let trunk = order();
    assert_eq!(trunk.at("").unwrap().data(), trunk.data());
}

#[test]
fn at_records_first_fault_on_start() {
    let trunk = order();
    assert!(trunk.at("lines[5].sku").unwrap().is_null());
    assert!(trunk.at("customer.age").unwrap().is_null());
    assert_eq!(
        trunk.fault(),
        Some(&Fault::IndexOutOfBounds { index: 5, len: 2 })
    );
}

#[test]
fn at_permissive_never_records() {
    let trunk = PermissiveTrunk::new(order().into_data());
    assert!(trunk.at("customer[0]").unwrap().is_null());
    assert!(trunk.fault().is_none());
}

#[test]
fn at_rejects_malformed_paths() {
    let trunk = order();
    assert!(matches!(trunk.at("lines[x]"), Err(TrunkError::Path(_))));
    assert!(matches!(trunk.at("lines..sku"), Err(TrunkError::Path(_))));
    assert!(trunk.fault().is_none());
}

#[test]
fn walk_with_built_path() {
    let trunk = order();
    let path = TrunkPath::root().key("lines").index(0).key("sku");
    let found = trunk.walk(&path, &TrunkConfig::default()).unwrap();
    assert_eq!(found.string(), Some("A-1"));
}

#[test]
fn limits_from_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "max_path_length = 2").unwrap();
    writeln!(file, "max_nesting_depth = 3").unwrap();

    let config = TrunkConfig::from_file(file.path()).unwrap();
    let trunk = order();

    assert!(trunk.at_with("customer.name", &config).is_ok());
    assert!(matches!(
        trunk.at_with("lines[0].sku", &config),
        Err(TrunkError::Limit(LimitError::PathTooLong { length: 3, max: 2 }))
    ));
}

#[test]
fn json_import_respects_nesting_limit() {
    let config = TrunkConfig::with_small_limits();
    let shallow = json!({"a": {"b": [1]}});
    let deep = json!({"a": {"b": {"c": {"d": {"e": 1}}}}});

    let data = Data::from_json_with(shallow, &config).unwrap();
    assert_eq!(StrictTrunk::new(data).at("a.b[0]").unwrap().int(), Some(1));
    assert!(matches!(
        Data::from_json_with(deep, &config),
        Err(LimitError::NestingTooDeep { .. })
    ));
}

#[test]
fn config_error_converts_into_trunk_error() {
    let err: TrunkError = TrunkConfig::from_toml_str("max_nesting_depth = 0")
        .unwrap_err()
        .into();
    assert!(matches!(err, TrunkError::Config(_)));
}
