//! Common style types.
//!
//! Colors and alignments shared by the branding, component and document layers.

// Submodule declarations
pub mod align;
pub mod color;

// Re-exports
pub use align::{HorizontalAlignment, VerticalAlignment};
pub use color::RGBColor;
