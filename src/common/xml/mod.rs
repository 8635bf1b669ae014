//! XML text helpers.

mod escape;

pub use escape::{resolve_reference, unescape_xml};
