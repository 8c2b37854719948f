//! Bridge between decoded JSON and [`Data`]
//!
//! Decoding bytes is the caller's job; this module only converts an
//! already-decoded `serde_json::Value` tree:
//! - arrays become list aggregates keyed `0..n`
//! - objects become keyed aggregates in document order
//! - integers that fit an `i64` stay `Int`, every other number is `Float`
//!
//! The reverse direction, [`Data::to_json`], renders structured objects
//! through their public fields only.

use crate::config::{LimitError, TrunkConfig};
use crate::value::{Aggregate, Data, Key};
use serde_json::{Map, Number, Value};

impl From<Value> for Data {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => Data::Null,
            Value::Bool(b) => Data::Bool(b),
            Value::Number(n) => number_to_data(&n),
            Value::String(s) => Data::String(s),
            Value::Array(arr) => Data::list(arr.into_iter().map(Data::from)),
            Value::Object(obj) => Data::map(obj.into_iter().map(|(k, v)| (k, Data::from(v)))),
        }
    }
}

fn number_to_data(n: &Number) -> Data {
    if let Some(i) = n.as_i64() {
        Data::Int(i)
    } else {
        // u64 beyond i64::MAX, or a real float
        Data::Float(n.as_f64().unwrap_or(0.0))
    }
}

impl Data {
    /// Import a decoded JSON tree, rejecting trees nested deeper than
    /// `config.max_nesting_depth`
    ///
    /// # Examples
    ///
    /// ```
    /// use trunk_core::{Data, TrunkConfig};
    ///
    /// let config = TrunkConfig::default();
    /// let data = Data::from_json_with(serde_json::json!({"a": [1, 2]}), &config).unwrap();
    /// assert_eq!(data.type_name(), "map");
    /// ```
    pub fn from_json_with(value: Value, config: &TrunkConfig) -> Result<Data, LimitError> {
        check_depth(&value, 0, config.max_nesting_depth)?;
        Ok(Data::from(value))
    }

    /// Render as JSON
    ///
    /// Objects contribute their public fields only. Non-finite floats become
    /// `null`. Keyed aggregates become JSON objects (index keys are written as
    /// their decimal text); lists become arrays.
    pub fn to_json(&self) -> Value {
        match self {
            Data::Null => Value::Null,
            Data::Bool(b) => Value::Bool(*b),
            Data::Int(i) => Value::Number((*i).into()),
            Data::Float(f) => Number::from_f64(*f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Data::String(s) => Value::String(s.clone()),
            Data::Aggregate(a) => aggregate_to_json(a),
            Data::Object(o) => Value::Object(
                o.public_entries()
                    .into_iter()
                    .map(|(k, v)| (k, v.to_json()))
                    .collect(),
            ),
        }
    }
}

fn aggregate_to_json(a: &Aggregate) -> Value {
    if a.is_list() {
        Value::Array(a.values().iter().map(Data::to_json).collect())
    } else {
        let mut map = Map::new();
        for (k, v) in a.entries() {
            let name = match k {
                Key::Index(i) => i.to_string(),
                Key::Name(n) => n,
            };
            map.insert(name, v.to_json());
        }
        Value::Object(map)
    }
}

fn check_depth(value: &Value, depth: usize, max: usize) -> Result<(), LimitError> {
    if depth > max {
        return Err(LimitError::NestingTooDeep { actual: depth, max });
    }
    match value {
        Value::Array(arr) => arr.iter().try_for_each(|v| check_depth(v, depth + 1, max)),
        Value::Object(obj) => obj.values().try_for_each(|v| check_depth(v, depth + 1, max)),
        _ => Ok(()),
    }
}
