//! Shared test utilities for the integration suite.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from a test's main.rs.

#![allow(dead_code)]
#![allow(unused_imports)]

use std::sync::Once;
pub use trunk::{
    Access, Data, Fault, FaultKind, Field, Key, Object, PermissiveTrunk, Reflect, Shape, Shared,
    StrictTrunk, Trunk, TrunkConfig, TrunkError,
};

// ============================================================================
// Initialization
// ============================================================================

static INIT_TRACING: Once = Once::new();

/// Install a test-writer subscriber once per test binary.
///
/// Set `RUST_LOG`-style verbosity with the `TRUNK_TEST_LOG` variable
/// (`trace`, `debug`, ...); defaults to `warn`.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let level = std::env::var("TRUNK_TEST_LOG")
            .ok()
            .and_then(|v| v.parse::<tracing::Level>().ok())
            .unwrap_or(tracing::Level::WARN);
        let _ = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_test_writer()
            .try_init();
    });
}

// ============================================================================
// Fixtures
// ============================================================================

/// A domain object with one public and one private field.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub name: String,
    secret: i64,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Person {
            name: name.into(),
            secret: 1,
        }
    }

    pub fn with_secret(name: impl Into<String>, secret: i64) -> Self {
        Person {
            name: name.into(),
            secret,
        }
    }
}

impl Reflect for Person {
    fn fields(&self) -> Vec<Field> {
        vec![Field::public("name"), Field::private("secret")]
    }

    fn field(&self, name: &str) -> Option<Data> {
        match name {
            "name" => Some(Data::from(self.name.as_str())),
            "secret" => Some(Data::Int(self.secret)),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: Data) -> bool {
        match (name, value) {
            ("name", Data::String(s)) => {
                self.name = s;
                true
            }
            ("secret", Data::Int(i)) => {
                self.secret = i;
                true
            }
            _ => false,
        }
    }
}

/// A second domain type, never a `Person`.
#[derive(Debug, Clone, PartialEq)]
pub struct Robot {
    pub serial: i64,
}

impl Reflect for Robot {
    fn fields(&self) -> Vec<Field> {
        vec![Field::public("serial")]
    }

    fn field(&self, name: &str) -> Option<Data> {
        (name == "serial").then(|| Data::Int(self.serial))
    }
}

/// Builds a `Person` from a string.
pub fn person_builder(data: &Data) -> Option<Object> {
    data.as_str().map(|name| Object::new(Person::new(name)))
}

/// Builds a `Robot` from anything; never a valid `Person`.
pub fn robot_builder(_data: &Data) -> Option<Object> {
    Some(Object::new(Robot { serial: 7 }))
}

/// Decode a JSON literal into wrapped data.
pub fn json_data(value: serde_json::Value) -> Data {
    Data::from(value)
}
