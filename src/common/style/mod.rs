//! Common style types.
//!
//! Colors and lengths in the units the drawing facade accepts.

// Submodule declarations
pub mod color;
pub mod len;

// Re-exports
pub use color::RGBColor;
pub use len::Length;
