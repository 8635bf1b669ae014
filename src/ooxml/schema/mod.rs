//! Generic schema codec.
//!
//! Every schema type supports four operations: construction through
//! `new()`/`Default`, encoding to a named element, decoding from a start tag
//! and its subtree, and path-qualified validation. Complex types, choice
//! groups and simple types are declared with the macros in [`macros`] and
//! share the reader, writer and cardinality codecs defined here.
//!
//! # Examples
//!
//! ```rust
//! use ooxml_dml::ooxml::schema::{from_xml_str, to_xml_string, Validate};
//! use ooxml_dml::ooxml::drawings::{Coordinate, Point2D};
//!
//! let mut off = Point2D::new();
//! off.x = Coordinate::from_emus(914400);
//! let xml = to_xml_string(&off, "a:off").unwrap();
//! assert_eq!(xml, r#"<a:off x="914400" y="0"/>"#);
//!
//! let parsed: Point2D = from_xml_str(&xml, "a:off").unwrap();
//! assert_eq!(parsed, off);
//! assert!(parsed.validate().is_ok());
//! ```

pub mod attr;
pub mod child;
pub mod macros;
pub mod options;
pub mod reader;
pub mod validate;
pub mod writer;

pub use attr::XmlValue;
pub use options::{ReaderOptions, WriterOptions};
pub use quick_xml::events::BytesStart;
pub use reader::XmlReader;
pub use validate::{Validate, ValidationError};
pub use writer::{Namespaces, XmlWriter};

use crate::ooxml::error::{OoxmlError, Result};
use smallvec::SmallVec;
use std::io::{BufRead, Write};
use tracing::{debug, trace};

/// A value that encodes to and decodes from one XML element.
pub trait XmlElement: Default {
    /// Write `self` as element `name`.
    fn encode<W: Write>(&self, w: &mut XmlWriter<W>, name: &str) -> Result<()>;

    /// Read attributes from `start` and the element body from `r` into
    /// `self`. Attributes absent from `start` keep their current values.
    fn decode<R: BufRead>(&mut self, r: &mut XmlReader<R>, start: &BytesStart<'_>) -> Result<()>;
}

impl<T: XmlElement> XmlElement for Box<T> {
    fn encode<W: Write>(&self, w: &mut XmlWriter<W>, name: &str) -> Result<()> {
        (**self).encode(w, name)
    }

    fn decode<R: BufRead>(&mut self, r: &mut XmlReader<R>, start: &BytesStart<'_>) -> Result<()> {
        (**self).decode(r, start)
    }
}

/// Text-only elements such as `a:t`, `c:f` and `c:v`.
impl XmlElement for String {
    fn encode<W: Write>(&self, w: &mut XmlWriter<W>, name: &str) -> Result<()> {
        w.open(name)?;
        w.text(self)?;
        w.close(name)
    }

    fn decode<R: BufRead>(&mut self, r: &mut XmlReader<R>, _start: &BytesStart<'_>) -> Result<()> {
        *self = r.read_text()?;
        Ok(())
    }
}

/// A set of mutually exclusive child elements, represented as an enum with
/// one variant per alternative.
pub trait ChoiceGroup: Default + Validate {
    /// Schema name of the group, used in diagnostics.
    const GROUP: &'static str;

    /// Whether `local` names one of the alternatives.
    fn accepts(local: &str) -> bool;

    /// Whether the alternative currently held is named `local`.
    fn holds(&self, local: &str) -> bool;

    /// Qualified element name of the alternative currently held.
    fn element_name(&self) -> &'static str;

    /// Rust name of the alternative currently held.
    fn variant_name(&self) -> &'static str;

    /// Decode a fresh alternative selected by the start tag.
    fn decode_new<R: BufRead>(r: &mut XmlReader<R>, start: &BytesStart<'_>) -> Result<Self>;

    /// Decode a repeat of the alternative already held. The later
    /// occurrence replaces the earlier one.
    fn decode_existing<R: BufRead>(
        &mut self,
        r: &mut XmlReader<R>,
        start: &BytesStart<'_>,
    ) -> Result<()> {
        debug!(
            group = Self::GROUP,
            element = self.element_name(),
            "repeated alternative replaces earlier occurrence"
        );
        *self = Self::decode_new(r, start)?;
        Ok(())
    }

    /// Write the alternative currently held under its element name.
    fn encode_choice<W: Write>(&self, w: &mut XmlWriter<W>) -> Result<()>;
}

/// A type that can stand as the root of a part.
pub trait XmlDocument: XmlElement + Validate {
    /// Qualified root element name.
    const ROOT: &'static str;

    /// `xmlns*` attributes written on the root.
    const NAMESPACES: Namespaces;

    fn to_xml(&self) -> Result<String> {
        self.to_xml_with_options(&WriterOptions::default())
    }

    fn to_xml_with_options(&self, options: &WriterOptions) -> Result<String> {
        let mut out = Vec::new();
        self.write_to_with_options(&mut out, options)?;
        String::from_utf8(out).map_err(|e| OoxmlError::Xml(e.to_string()))
    }

    fn write_to<W: Write>(&self, w: W) -> Result<()> {
        self.write_to_with_options(w, &WriterOptions::default())
    }

    fn write_to_with_options<W: Write>(&self, w: W, options: &WriterOptions) -> Result<()> {
        write_document(self, Self::ROOT, Self::NAMESPACES, w, options)
    }

    fn from_xml(xml: &str) -> Result<Self> {
        Self::read_from(xml.as_bytes())
    }

    fn from_xml_with_options(xml: &str, options: ReaderOptions) -> Result<Self> {
        Self::read_from_with_options(xml.as_bytes(), options)
    }

    fn read_from<R: BufRead>(r: R) -> Result<Self> {
        Self::read_from_with_options(r, ReaderOptions::default())
    }

    fn read_from_with_options<R: BufRead>(r: R, options: ReaderOptions) -> Result<Self> {
        read_document(r, Self::ROOT, options)
    }
}

/// Encode `value` as element `name` without a declaration or namespaces.
pub fn to_xml_string<T: XmlElement>(value: &T, name: &str) -> Result<String> {
    let mut w = XmlWriter::new(Vec::new());
    value.encode(&mut w, name)?;
    String::from_utf8(w.into_inner()).map_err(|e| OoxmlError::Xml(e.to_string()))
}

/// Decode a `T` from a fragment whose root element is `name`.
pub fn from_xml_str<T: XmlElement>(xml: &str, name: &str) -> Result<T> {
    read_document(xml.as_bytes(), name, ReaderOptions::default())
}

/// Decode a `T` from a fragment with explicit options.
pub fn from_xml_str_with_options<T: XmlElement>(
    xml: &str,
    name: &str,
    options: ReaderOptions,
) -> Result<T> {
    read_document(xml.as_bytes(), name, options)
}

pub fn write_document<T: XmlElement, W: Write>(
    value: &T,
    root: &str,
    namespaces: Namespaces,
    w: W,
    options: &WriterOptions,
) -> Result<()> {
    let mut writer = XmlWriter::with_options(w, options);
    if options.xml_declaration {
        writer.declaration()?;
    }
    writer.declare_namespaces(namespaces);
    value.encode(&mut writer, root)?;
    debug!(root, "encoded document");
    Ok(())
}

pub fn read_document<T: XmlElement, R: BufRead>(
    r: R,
    root: &str,
    options: ReaderOptions,
) -> Result<T> {
    let mut reader = XmlReader::with_options(r, options);
    let start = reader.read_root()?;
    let found = element_local_name(&start)?;
    if found != local_name(root) {
        return Err(OoxmlError::UnexpectedElement {
            expected: root.to_string(),
            found: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
        });
    }
    let mut value = T::default();
    value.decode(&mut reader, &start)?;
    debug!(root, "decoded document");
    Ok(value)
}

/// Local part of a qualified name: `"a:xfrm"` gives `"xfrm"`.
#[inline]
pub fn local_name(qualified: &str) -> &str {
    match qualified.split_once(':') {
        Some((_, local)) => local,
        None => qualified,
    }
}

/// Local name of a start tag as text.
#[inline]
pub fn element_local_name<'a>(start: &'a BytesStart<'_>) -> Result<&'a str> {
    Ok(std::str::from_utf8(start.local_name().into_inner())?)
}

/// Fields already decoded within the current element.
#[derive(Debug, Default)]
pub struct Seen(SmallVec<[&'static str; 8]>);

impl Seen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `field`, returning true the first time it is seen.
    pub fn first(&mut self, field: &'static str) -> bool {
        if self.0.contains(&field) {
            false
        } else {
            self.0.push(field);
            true
        }
    }
}

/// Feed each attribute of `start` to `f` by local name. Namespace
/// declarations are ignored; `f` returns false for unknown attributes.
pub fn decode_attributes(
    start: &BytesStart<'_>,
    mut f: impl FnMut(&str, &str) -> Result<bool>,
) -> Result<()> {
    for attr in start.attributes() {
        let attr = attr?;
        if attr.key.as_namespace_binding().is_some() {
            continue;
        }
        let key = attr.key.local_name();
        let key = std::str::from_utf8(key.as_ref())?;
        let value = attr.unescape_value()?;
        if !f(key, &value)? {
            trace!(attribute = key, "ignoring unrecognised attribute");
        }
    }
    Ok(())
}

/// Feed each child start tag to `f`; children it does not claim are skipped
/// with their subtree.
pub fn decode_children<R: BufRead>(
    r: &mut XmlReader<R>,
    mut f: impl FnMut(&mut XmlReader<R>, &BytesStart<'static>, &mut Seen) -> Result<bool>,
) -> Result<()> {
    let mut seen = Seen::new();
    while let Some(child) = r.next_child()? {
        if !f(r, &child, &mut seen)? {
            r.skip(&child)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::charts;
    use crate::ooxml::drawings::{
        blip, color, fill, geometry, line, shape, table, table_style, text, xfrm,
    };
    use std::fmt::Debug;

    fn assert_fresh_value<T: XmlElement + Validate + PartialEq + Debug>(ty: &str) {
        let value = T::default();
        if let Err(e) = value.validate() {
            panic!("{ty}: fresh value fails validation: {e}");
        }
        let xml = to_xml_string(&value, "x:value").unwrap_or_else(|e| panic!("{ty}: {e}"));
        let back: T = from_xml_str(&xml, "x:value").unwrap_or_else(|e| panic!("{ty}: {e}"));
        assert_eq!(back, value, "{ty} did not survive {xml}");
    }

    macro_rules! fresh_values {
        ($($ty:ty),* $(,)?) => {
            $(assert_fresh_value::<$ty>(stringify!($ty));)*
        };
    }

    #[test]
    fn test_fresh_drawing_values_validate_and_round_trip() {
        fresh_values!(
            xfrm::Point2D, xfrm::PositiveSize2D, xfrm::Transform2D,
            color::SRgbColor, color::ScRgbColor, color::HslColor, color::SystemColor,
            color::SchemeColor, color::PresetColor, color::Color,
            fill::NoFill, fill::SolidColorFill, fill::GradientStop, fill::GradientStopList,
            fill::RelativeRect, fill::LinearShade, fill::PathShade, fill::GradientFill,
            fill::PatternFill, fill::StretchInfo, fill::TileInfo, fill::BlipFill, fill::GroupFill,
            line::PresetLineDash, line::DashStop, line::DashStopList, line::LineJoinMiter,
            line::LineEndProperties, line::LineProperties,
            geometry::GeomGuide, geometry::GeomGuideList, geometry::AdjPoint2D, geometry::GeomRect,
            geometry::XYAdjustHandle, geometry::PolarAdjustHandle, geometry::AdjustHandleList,
            geometry::ConnectionSite, geometry::ConnectionSiteList, geometry::PathMoveTo,
            geometry::PathLineTo, geometry::PathArcTo, geometry::PathQuadBezierTo,
            geometry::PathCubicBezierTo, geometry::Path2D, geometry::Path2DList,
            geometry::CustomGeometry2D, geometry::PresetGeometry2D,
            blip::ThresholdEffect, blip::AlphaModulateFixedEffect, blip::BlurEffect,
            blip::ColorChangeEffect, blip::ColorReplaceEffect, blip::DuotoneEffect,
            blip::HslEffect, blip::LuminanceEffect, blip::TintEffect, blip::Blip,
            shape::ShapeProperties,
            text::TextBodyProperties, text::TextListStyle, text::TextBody, text::NormalAutofit,
            text::TextSpacing, text::TextAutonumberBullet, text::TextCharBullet,
            text::TextTabStopList, text::TextParagraphProperties, text::TextParagraph,
            text::TextFont, text::Hyperlink, text::TextCharacterProperties,
            text::RegularTextRun, text::TextLineBreak, text::TextField,
            table::TableProperties, table::GridColumn, table::TableGrid,
            table::TableCellProperties, table::TableCell, table::TableRow, table::Table,
            table_style::TableStyleList,
        );
    }

    #[test]
    fn test_fresh_chart_values_validate_and_round_trip() {
        fresh_values!(
            charts::NumFmt, charts::Layout, charts::ManualLayout, charts::NumVal,
            charts::NumData, charts::NumRef, charts::StrVal, charts::StrData, charts::StrRef,
            charts::AxDataSource, charts::NumDataSource, charts::SerTx, charts::Tx,
            charts::Marker, charts::DataPoint, charts::DLbl, charts::DLbls,
            charts::BarSer, charts::LineSer, charts::PieSer, charts::AreaSer, charts::ScatterSer,
            charts::Scaling, charts::ChartLines, charts::CatAx, charts::ValAx,
            charts::BarChart, charts::LineChart, charts::PieChart, charts::DoughnutChart,
            charts::AreaChart, charts::ScatterChart, charts::PlotArea,
            charts::LegendEntry, charts::Legend,
            charts::Title, charts::View3D, charts::Surface, charts::Chart,
            charts::HeaderFooter, charts::PageMargins, charts::PageSetup, charts::PrintSettings,
            charts::ExternalData, charts::RelId, charts::ChartSpace,
        );
    }

    #[test]
    fn test_local_name() {
        assert_eq!(local_name("a:xfrm"), "xfrm");
        assert_eq!(local_name("xfrm"), "xfrm");
    }

    #[test]
    fn test_seen_first() {
        let mut seen = Seen::new();
        assert!(seen.first("fill"));
        assert!(!seen.first("fill"));
        assert!(seen.first("ln"));
    }

    #[test]
    fn test_text_element_keeps_whitespace() {
        let t: String = from_xml_str("<a:t>  two  spaces </a:t>", "a:t").unwrap();
        assert_eq!(t, "  two  spaces ");
        assert_eq!(to_xml_string(&t, "a:t").unwrap(), "<a:t>  two  spaces </a:t>");
    }

    #[test]
    fn test_root_mismatch() {
        let err = from_xml_str::<String>("<a:p/>", "a:t").unwrap_err();
        assert!(matches!(err, OoxmlError::UnexpectedElement { .. }));
    }
}
