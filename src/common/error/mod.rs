//! Unified error types for Longan.
//!
//! A single error enum covers registry resolution, factory binding, schema
//! validation, configuration loading and output persistence.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, RegistryKind, Result, json_type_name};
