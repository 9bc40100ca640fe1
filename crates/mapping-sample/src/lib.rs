//! # Mapping Sample Library
//!
//! A small blog domain wired through the mapping engine. Exposed as a library so the
//! integration tests can build the same configuration the binary uses.

pub mod catalog;
pub mod linkage;
pub mod model;
