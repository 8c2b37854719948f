//! Error types for Trunk
//!
//! Two families live here:
//! - [`Fault`]: a navigation error recorded on a strict wrapper. Faults are
//!   values to inspect, never returned through `Result`.
//! - [`TrunkError`]: misuse of the API (writing to an immutable wrapper,
//!   unsetting on a scalar) and configuration or path problems.
//!
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use crate::config::{ConfigError, LimitError};
use crate::path::PathParseError;
use crate::value::Key;
use std::fmt;
use thiserror::Error;

/// Result type alias for Trunk operations
pub type Result<T> = std::result::Result<T, TrunkError>;

/// A navigation error recorded by a strict wrapper
///
/// Only the first fault on a wrapper is kept; later ones are discarded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Fault {
    /// The access does not fit the shape of the data
    /// (a name on a list, an index on an object, anything on a scalar)
    #[error("wrong type: {found} does not support {access}")]
    WrongType {
        /// Shape of the data that was accessed
        found: &'static str,
        /// What was attempted
        access: Access,
    },

    /// List index past the end
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds {
        /// The requested index
        index: usize,
        /// The list length
        len: usize,
    },

    /// Map key or public object field not present
    #[error("key does not exist: {key}")]
    DoesNotExist {
        /// The missing key
        key: Key,
    },
}

/// The kind of access that produced a [`Fault::WrongType`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// Indexing with a key
    Key(Key),
    /// Iterating over entries
    Iteration,
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Access::Key(k) => write!(f, "key {}", k),
            Access::Iteration => write!(f, "iteration"),
        }
    }
}

/// Payload-free discriminant of a [`Fault`], handy for matching in callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    /// See [`Fault::WrongType`]
    WrongType,
    /// See [`Fault::IndexOutOfBounds`]
    IndexOutOfBounds,
    /// See [`Fault::DoesNotExist`]
    DoesNotExist,
}

impl Fault {
    /// The fault's kind without its payload
    pub fn kind(&self) -> FaultKind {
        match self {
            Fault::WrongType { .. } => FaultKind::WrongType,
            Fault::IndexOutOfBounds { .. } => FaultKind::IndexOutOfBounds,
            Fault::DoesNotExist { .. } => FaultKind::DoesNotExist,
        }
    }
}

/// Errors returned by Trunk operations
#[derive(Debug, Error)]
pub enum TrunkError {
    /// Write or unset attempted on an immutable wrapper
    #[error("a strict trunk is immutable")]
    Immutable,

    /// Unset attempted on data that has no removable entries
    #[error("value can't be unset: {found} has no entries")]
    UnsetUnsupported {
        /// Shape of the data
        found: &'static str,
    },

    /// Navigation path could not be parsed
    #[error("invalid path: {0}")]
    Path(#[from] PathParseError),

    /// A configured limit was exceeded
    #[error("limit exceeded: {0}")]
    Limit(#[from] LimitError),

    /// Configuration could not be loaded or is invalid
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}
