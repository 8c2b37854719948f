//! Trunk - safe navigation over dynamically-shaped data
//!
//! Wrap a value whose shape is only known at runtime, descend into it
//! without checking every level, then pull out a concretely typed result
//! with a single call.
//!
//! # Quick Start
//!
//! ```
//! use trunk::{Data, StrictTrunk};
//!
//! let data = Data::from(serde_json::json!({
//!     "user": {"name": "ana", "tags": ["a", "b"]}
//! }));
//! let trunk = StrictTrunk::new(data);
//!
//! assert_eq!(trunk.get("user").get("name").string(), Some("ana"));
//! assert_eq!(trunk.at("user.tags").unwrap().list_of_string_value(), vec!["a", "b"]);
//!
//! // A missing key yields a null wrapper and a recorded fault
//! assert_eq!(trunk.get("group").get("id").int_value(), 0);
//! assert!(trunk.fault().is_some());
//! ```
//!
//! # Architecture
//!
//! [`trunk_core`] holds the data model, coercion rules, paths and config;
//! [`trunk_wrapper`] holds the [`Trunk`] wrapper and its policies. Both are
//! re-exported here.

pub use trunk_core::*;
pub use trunk_wrapper::*;
