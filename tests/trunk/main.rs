//! Trunk Integration Tests
//!
//! End-to-end behavior of the facade crate, organized by concern:
//! - Documented examples: the canonical navigation and extraction cases
//! - Policies: strict fault recording versus permissive writes
//! - Extraction: collections, classes and builders over decoded JSON
//! - Paths and config: path navigation bounded by loaded limits
//! - Properties: shape exclusivity, round-trips and all-or-nothing extraction

#[path = "../common/mod.rs"]
mod common;

mod documented;
mod extraction;
mod paths;
mod properties;
