//! Core types for Trunk
//!
//! This crate defines the foundational pieces the wrapper is built from:
//! - Data: the dynamically-shaped value (scalars, aggregates, objects)
//! - Key / Aggregate: keyed, insertion-ordered collections shared by handle
//! - Shape: list versus map classification
//! - Coercion: total conversions to string, int, float and bool
//! - Object / Reflect: public-only field access for structured objects
//! - TrunkPath: `a.b[0]` navigation paths
//! - TrunkConfig: navigation limits loaded from TOML
//! - Error types: Fault and TrunkError

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod coerce;
pub mod config;
pub mod error;
pub mod json;
pub mod object;
pub mod path;
pub mod shape;
pub mod value;

// Re-export commonly used types and traits
pub use coerce::{
    parse_numeric, to_bool_value, to_float_value, to_int_value, to_string_value, Numeric,
    TRUTHY_STRINGS,
};
pub use config::{ConfigError, LimitError, TrunkConfig};
pub use error::{Access, Fault, FaultKind, Result, TrunkError};
pub use object::{Field, Object, PublicFields, Reflect, Shared, Visibility};
pub use path::{PathParseError, TrunkPath};
pub use shape::{is_list, is_map, keys_form_list, Shape};
pub use value::{Aggregate, Data, Key};
