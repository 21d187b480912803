//! Extractors for manifest documents.
//!
//! Helper functions to locate the effective pod template inside a workload
//! document and to read it into typed, defaulted views for the rules.

pub mod container;
pub mod metadata;
pub mod pod_spec;

pub use container::*;
pub use metadata::*;
pub use pod_spec::*;
