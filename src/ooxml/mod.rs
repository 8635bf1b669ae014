//! Office Open XML (OOXML) DrawingML schema bindings.
//!
//! The module is organized into layers:
//!
//! 1. **Codec** (`schema`, `error`): the generic encode/decode/validate
//!    engine and the macros that declare schema types
//! 2. **DrawingML** (`drawings`): the shared `a:` vocabulary of shapes,
//!    fills, lines, colors, pictures, text and tables
//! 3. **Charts** (`charts`): the `c:` chart part built on DrawingML
//!
//! # Example: Reading a chart part
//!
//! ```rust
//! use ooxml_dml::ooxml::charts::ChartSpace;
//! use ooxml_dml::ooxml::schema::{Validate, XmlDocument};
//!
//! let xml = r#"<c:chartSpace xmlns:c="http://schemas.openxmlformats.org/drawingml/2006/chart">
//!   <c:chart><c:plotArea><c:layout/></c:plotArea></c:chart>
//! </c:chartSpace>"#;
//!
//! let space = ChartSpace::from_xml(xml)?;
//! assert!(space.chart.plot_area.charts.is_empty());
//! space.validate()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod charts;
pub mod drawings;
pub mod error;
pub mod schema;

pub use error::{OoxmlError, Result};
pub use schema::{ReaderOptions, Validate, ValidationError, WriterOptions, XmlDocument};
