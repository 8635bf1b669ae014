//! Ergonomic setters over the DrawingML schema types.
//!
//! Each wrapper borrows one schema value mutably and holds nothing else, so
//! several wrappers created one after another over the same value all see
//! the same state. Setters take [`Length`](crate::common::Length) and
//! [`RGBColor`](crate::common::RGBColor) and convert them to the raw schema
//! units:
//!
//! - distances are stored in EMUs, saturated to 32 bits where the attribute
//!   is 32 bits wide;
//! - font sizes are whole hundredths of a point (`emus / 127`, truncated);
//! - angles are 60000ths of a degree, truncated;
//! - a translucent color adds an `a:alpha` transform of `a * 100000 / 255`.
//!
//! Setters for fills, bullets and line joins replace the whole choice, so the
//! previous alternative is gone afterwards.
//!
//! # Example
//!
//! ```rust
//! use ooxml_dml::common::{Length, RGBColor};
//! use ooxml_dml::drawing::{LineJoin, TextBody};
//! use ooxml_dml::ooxml::drawings as dml;
//!
//! let mut body = dml::TextBody::new();
//! let mut text = TextBody::new(&mut body);
//! let mut para = text.add_paragraph();
//! para.properties().set_bullet_char('-');
//! para.add_run("Revenue up")
//!     .properties()
//!     .set_size(Length::from_points(14.0))
//!     .set_solid_fill(RGBColor::new(0x1F, 0x4E, 0x79));
//!
//! assert_eq!(body.paragraphs.len(), 2);
//! assert_eq!(body.text(), "\nRevenue up");
//!
//! let mut ln = dml::LineProperties::new();
//! ooxml_dml::drawing::LineProperties::new(&mut ln).set_join(LineJoin::Bevel);
//! ```

mod shape;
mod text;

pub use shape::{LineJoin, LineProperties, ShapeProperties};
pub use text::{Paragraph, ParagraphProperties, Run, RunProperties, TextBody};
