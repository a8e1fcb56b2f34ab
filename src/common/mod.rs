//! Common types, traits, and utilities shared across the crate.

// Submodule declarations
pub mod error;
pub mod metadata;
pub mod style;
pub mod unit;

// Re-exports for convenience
pub use error::{Error, RegistryKind, Result};
pub use metadata::DocumentProperties;
pub use style::{HorizontalAlignment, RGBColor, VerticalAlignment};
