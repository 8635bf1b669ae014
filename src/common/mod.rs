//! Common types and utilities shared across the schema bindings.
//!
//! Units, colors and lengths used by the drawing facade, and the XML
//! entity helpers used by the reader.

// Submodule declarations
pub mod style;
pub mod unit;
pub mod xml;

// Re-exports for convenience
pub use style::{Length, RGBColor};
