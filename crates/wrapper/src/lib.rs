//! The Trunk value wrapper
//!
//! This crate builds the safe-navigation surface on top of `trunk-core`:
//! - Trunk: the wrapper, with indexing, writes and path navigation
//! - Policy: compile-time strict (read-only, records faults) or permissive
//!   (writable, ignores navigation errors) behavior
//! - Scalar and collection extraction, strict and coercing
//! - Class extraction with an optional builder fallback
//! - Entries: rewindable iteration over lists, maps and objects

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod class;
pub mod collection;
pub mod iter;
pub mod policy;
pub mod scalar;
pub mod trunk;

pub use class::{instance_of, try_as, Builder};
pub use iter::Entries;
pub use policy::{FaultStore, Permissive, Policy, Strict};
pub use trunk::{PermissiveTrunk, StrictTrunk, Trunk};

// Core types that appear in this crate's signatures
pub use trunk_core::{Data, Fault, FaultKind, Key, Object, Reflect, Shape, Shared, TrunkError};
