//! ooxml-dml - Typed DrawingML and chart schema bindings for Office Open XML
//!
//! This library maps the DrawingML (`a:`) and chart (`c:`) schemas of
//! ECMA-376 onto plain Rust types that can be written to XML, read back from
//! XML and validated against the schema's constraints.
//!
//! # Features
//!
//! - **Schema types**: complex types as structs, choice groups and unions as
//!   enums, so two alternatives can never be set at once
//! - **Codec**: streaming encode and decode over `quick-xml`, skipping
//!   elements the bindings do not model
//! - **Validation**: ranges, patterns and cardinality, reported with the
//!   path of the first offending field
//! - **Facade**: setters taking lengths and colors for shapes, lines and text
//!
//! # Example - Building a chart part
//!
//! ```rust
//! use ooxml_dml::ooxml::charts::{
//!     AxPosValue, Axis, CatAx, Chart, ChartGroup, ChartSpace, LineChart, LineSer, NumRef,
//!     NumSource, PlotArea, ValAx,
//! };
//! use ooxml_dml::ooxml::schema::{Validate, XmlDocument};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut lines = LineChart::with_axes(10, 20);
//! lines.series.push(
//!     LineSer::indexed(0)
//!         .with_name("Visitors")
//!         .with_values(NumSource::NumRef(
//!             NumRef::from_formula("Sheet1!$B$2:$B$8").with_cache(&[5.0, 8.0, 13.0]),
//!         )),
//! );
//!
//! let plot_area = PlotArea::new()
//!     .with_chart(ChartGroup::LineChart(lines))
//!     .with_axis(Axis::Category(CatAx::at(10, AxPosValue::Bottom, 20)))
//!     .with_axis(Axis::Value(ValAx::at(20, AxPosValue::Left, 10)));
//!
//! let space = ChartSpace::with_chart(Chart::new().with_plot_area(plot_area), "en-US");
//! space.validate()?;
//! let xml = space.to_xml()?;
//! assert!(xml.starts_with("<?xml"));
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Editing shape properties
//!
//! ```rust
//! use ooxml_dml::common::{Length, RGBColor};
//! use ooxml_dml::drawing::ShapeProperties;
//! use ooxml_dml::ooxml::drawings as dml;
//! use ooxml_dml::ooxml::schema::to_xml_string;
//!
//! let mut sp_pr = dml::ShapeProperties::new();
//! ShapeProperties::new(&mut sp_pr)
//!     .set_position(Length::from_emus(0), Length::from_emus(0))
//!     .set_size(Length::from_inches(1.0), Length::from_inches(1.0))
//!     .set_solid_fill(RGBColor::new(0xFF, 0xC0, 0x00));
//!
//! let xml = to_xml_string(&sp_pr, "p:spPr").unwrap();
//! assert!(xml.contains(r#"<a:srgbClr val="FFC000"/>"#));
//! ```

/// Units, lengths, colors and XML helpers shared by the bindings
pub mod common;

/// Ergonomic setters over DrawingML schema types
pub mod drawing;

/// DrawingML and chart schema bindings and the codec behind them
pub mod ooxml;

pub use ooxml::error::{OoxmlError, Result};
