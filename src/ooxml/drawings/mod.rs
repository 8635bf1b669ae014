//! DrawingML (DML) main namespace bindings (`a:`).
//!
//! DrawingML is the drawing vocabulary shared by all OOXML formats: shape
//! properties, geometry, fills and lines, colors, pictures, text bodies and
//! tables. Chart parts build on these types for their shape and text
//! properties.
//!
//! Three types stand as part roots with their own namespace declarations:
//! [`Blip`], [`Table`] and [`TableStyleList`]. Every other type is written
//! and read under the element name chosen by its parent, or through
//! [`to_xml_string`](crate::ooxml::schema::to_xml_string) and
//! [`from_xml_str`](crate::ooxml::schema::from_xml_str).

pub mod blip;
pub mod color;
pub mod ext;
pub mod fill;
pub mod geometry;
pub mod line;
pub mod shape;
pub mod simple_types;
pub mod table;
pub mod table_style;
pub mod text;
pub mod xfrm;

pub use blip::{Blip, BlipEffect, find_first_blip_embed};
pub use color::{Color, ColorChoice, ColorTransform, SRgbColor, SchemeColor};
pub use ext::{CREATION_ID_URI, ExtensionList};
pub use fill::{
    BlipFill, FillProperties, GradientFill, GradientStop, GradientStopList, LineFillProperties,
    NoFill, PatternFill, SolidColorFill,
};
pub use geometry::{CustomGeometry2D, Geometry, GeomGuide, GeomGuideList, PresetGeometry2D};
pub use line::{
    LineDashProperties, LineEndProperties, LineJoinBevel, LineJoinMiter, LineJoinProperties,
    LineJoinRound, LineProperties, PresetLineDash,
};
pub use shape::ShapeProperties;
pub use simple_types::{
    Angle, Coordinate, Coordinate32, Guid, HexColorRgb, Percentage, PositiveCoordinate,
    ShapeType, TextFontSize,
};
pub use table::{Table, TableCell, TableGrid, TableProperties, TableRow};
pub use table_style::{TableStyle, TableStyleList};
pub use text::{
    RegularTextRun, TextBody, TextBodyProperties, TextBullet, TextCharacterProperties,
    TextParagraph, TextParagraphProperties, TextRun,
};
pub use xfrm::{Point2D, PositiveSize2D, Transform2D};
