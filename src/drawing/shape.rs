//! Shape and line property setters.

use crate::common::unit::degrees_to_angle;
use crate::common::{Length, RGBColor};
use crate::ooxml::drawings as dml;
use crate::ooxml::drawings::fill::{FillProperties, LineFillProperties};
use crate::ooxml::drawings::geometry::{Geometry, PresetGeometry2D};
use crate::ooxml::drawings::line::{
    LineDashProperties, LineJoinBevel, LineJoinMiter, LineJoinProperties, LineJoinRound,
};
use crate::ooxml::drawings::simple_types::{
    Angle, LineCap, LineWidth, PositiveCoordinate, PositivePercentage, PresetLineDashValue,
    ShapeType, saturate_i32,
};
use crate::ooxml::drawings::xfrm::{Point2D, PositiveSize2D, Transform2D};

/// Corner style where two line segments meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineJoin {
    Round,
    Bevel,
    /// Mitered corners, optionally limited to `limit` thousandths of a
    /// percent of the line width.
    Miter { limit: Option<i32> },
}

/// Setters over the shape properties of a drawing object (`spPr`).
///
/// The wrapper only borrows the underlying [`dml::ShapeProperties`]; every
/// setter writes straight into it.
///
/// # Examples
///
/// ```rust
/// use ooxml_dml::common::{Length, RGBColor};
/// use ooxml_dml::drawing::ShapeProperties;
/// use ooxml_dml::ooxml::drawings as dml;
/// use ooxml_dml::ooxml::drawings::ShapeType;
///
/// let mut sp_pr = dml::ShapeProperties::new();
/// ShapeProperties::new(&mut sp_pr)
///     .set_position(Length::from_inches(1.0), Length::from_inches(0.5))
///     .set_size(Length::from_inches(2.0), Length::from_inches(1.0))
///     .set_geometry(ShapeType::RoundRect)
///     .set_solid_fill(RGBColor::new(0x44, 0x72, 0xC4));
///
/// let off = sp_pr.xfrm.as_ref().and_then(|x| x.off.as_ref()).unwrap();
/// assert_eq!(off.x.to_emus(), Some(914_400));
/// ```
#[derive(Debug)]
pub struct ShapeProperties<'a> {
    inner: &'a mut dml::ShapeProperties,
}

impl<'a> ShapeProperties<'a> {
    #[inline]
    pub fn new(inner: &'a mut dml::ShapeProperties) -> Self {
        Self { inner }
    }

    /// The wrapped schema value.
    #[inline]
    pub fn get(&self) -> &dml::ShapeProperties {
        self.inner
    }

    fn xfrm(&mut self) -> &mut Transform2D {
        self.inner.xfrm.get_or_insert_with(Transform2D::new)
    }

    fn extents(&mut self) -> &mut PositiveSize2D {
        self.xfrm().ext.get_or_insert_with(PositiveSize2D::new)
    }

    /// Offset of the top-left corner.
    pub fn set_position(&mut self, x: Length, y: Length) -> &mut Self {
        self.xfrm().off = Some(Point2D::from_emus(x.emus(), y.emus()));
        self
    }

    pub fn set_size(&mut self, width: Length, height: Length) -> &mut Self {
        self.xfrm().ext = Some(PositiveSize2D::from_emus(width.emus(), height.emus()));
        self
    }

    /// Set the width, keeping the height (zero when there was none).
    pub fn set_width(&mut self, width: Length) -> &mut Self {
        self.extents().cx = PositiveCoordinate(width.emus());
        self
    }

    /// Set the height, keeping the width (zero when there was none).
    pub fn set_height(&mut self, height: Length) -> &mut Self {
        self.extents().cy = PositiveCoordinate(height.emus());
        self
    }

    /// Clockwise rotation in degrees, truncated to 60000ths of a degree.
    pub fn set_rotation(&mut self, degrees: f64) -> &mut Self {
        self.xfrm().rot = Some(Angle(saturate_i32(degrees_to_angle(degrees))));
        self
    }

    pub fn set_flip_horizontal(&mut self, flip: bool) -> &mut Self {
        self.xfrm().flip_h = Some(flip);
        self
    }

    pub fn set_flip_vertical(&mut self, flip: bool) -> &mut Self {
        self.xfrm().flip_v = Some(flip);
        self
    }

    /// Replace the geometry with a preset shape.
    pub fn set_geometry(&mut self, preset: ShapeType) -> &mut Self {
        self.inner.geometry = Some(Geometry::Preset(PresetGeometry2D::preset(preset)));
        self
    }

    /// Fill with one color, replacing any other fill.
    pub fn set_solid_fill(&mut self, color: RGBColor) -> &mut Self {
        self.inner.fill = Some(FillProperties::solid(color));
        self
    }

    pub fn set_no_fill(&mut self) -> &mut Self {
        self.inner.fill = Some(FillProperties::none());
        self
    }

    /// Outline of the shape, created on first use.
    pub fn line_properties(&mut self) -> LineProperties<'_> {
        LineProperties::new(self.inner.ln.get_or_insert_with(dml::LineProperties::new))
    }
}

/// Setters over an outline (`a:ln`).
#[derive(Debug)]
pub struct LineProperties<'a> {
    inner: &'a mut dml::LineProperties,
}

impl<'a> LineProperties<'a> {
    #[inline]
    pub fn new(inner: &'a mut dml::LineProperties) -> Self {
        Self { inner }
    }

    #[inline]
    pub fn get(&self) -> &dml::LineProperties {
        self.inner
    }

    /// Line width in EMUs, saturated to the attribute range.
    pub fn set_width(&mut self, width: Length) -> &mut Self {
        self.inner.w = Some(LineWidth(saturate_i32(width.emus())));
        self
    }

    pub fn set_solid_fill(&mut self, color: RGBColor) -> &mut Self {
        self.inner.fill = Some(LineFillProperties::solid(color));
        self
    }

    /// Hide the line.
    pub fn set_no_fill(&mut self) -> &mut Self {
        self.inner.fill = Some(LineFillProperties::none());
        self
    }

    /// Remove the fill so the line inherits it from the style.
    pub fn clear_fill(&mut self) -> &mut Self {
        self.inner.fill = None;
        self
    }

    pub fn set_join(&mut self, join: LineJoin) -> &mut Self {
        self.inner.join = Some(match join {
            LineJoin::Round => LineJoinProperties::Round(LineJoinRound::new()),
            LineJoin::Bevel => LineJoinProperties::Bevel(LineJoinBevel::new()),
            LineJoin::Miter { limit } => LineJoinProperties::Miter(LineJoinMiter {
                lim: limit.map(PositivePercentage::from_thousandths),
            }),
        });
        self
    }

    pub fn set_cap(&mut self, cap: LineCap) -> &mut Self {
        self.inner.cap = Some(cap);
        self
    }

    pub fn set_dash(&mut self, dash: PresetLineDashValue) -> &mut Self {
        self.inner.dash = Some(LineDashProperties::preset(dash));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::drawings::color::{ColorChoice, ColorTransform};
    use crate::ooxml::drawings::simple_types::PositiveFixedPercentage;
    use crate::ooxml::schema::{Validate, to_xml_string};

    #[test]
    fn test_shape_setters_layout() {
        let mut sp_pr = dml::ShapeProperties::new();
        ShapeProperties::new(&mut sp_pr)
            .set_position(Length::from_emus(914_400), Length::from_emus(457_200))
            .set_size(Length::from_emus(1_828_800), Length::from_emus(914_400))
            .set_rotation(90.0)
            .set_flip_horizontal(true)
            .set_geometry(ShapeType::Ellipse)
            .set_no_fill();

        assert_eq!(
            to_xml_string(&sp_pr, "p:spPr").unwrap(),
            concat!(
                r#"<p:spPr><a:xfrm rot="5400000" flipH="true"><a:off x="914400" y="457200"/>"#,
                r#"<a:ext cx="1828800" cy="914400"/></a:xfrm>"#,
                r#"<a:prstGeom prst="ellipse"><a:avLst/></a:prstGeom><a:noFill/></p:spPr>"#
            )
        );
        assert!(sp_pr.validate().is_ok());
    }

    #[test]
    fn test_width_and_height_are_independent() {
        let mut sp_pr = dml::ShapeProperties::new();
        let mut shape = ShapeProperties::new(&mut sp_pr);
        shape.set_width(Length::from_inches(2.0));
        shape.set_height(Length::from_cm(1.0));
        shape.set_width(Length::from_inches(3.0));

        let ext = sp_pr.xfrm.as_ref().and_then(|x| x.ext.as_ref()).unwrap();
        assert_eq!(ext.cx, PositiveCoordinate(3 * 914_400));
        assert_eq!(ext.cy, PositiveCoordinate(360_000));
    }

    #[test]
    fn test_rotation_truncates() {
        let mut sp_pr = dml::ShapeProperties::new();
        ShapeProperties::new(&mut sp_pr).set_rotation(1.999999);
        assert_eq!(sp_pr.xfrm.as_ref().unwrap().rot, Some(Angle(119_999)));

        ShapeProperties::new(&mut sp_pr).set_rotation(-0.5);
        assert_eq!(sp_pr.xfrm.as_ref().unwrap().rot, Some(Angle(-30_000)));
    }

    #[test]
    fn test_translucent_fill_gets_alpha() {
        let mut sp_pr = dml::ShapeProperties::new();
        ShapeProperties::new(&mut sp_pr).set_solid_fill(RGBColor::with_alpha(255, 0, 0, 128));

        let color = sp_pr.fill.as_ref().and_then(FillProperties::solid_color).unwrap();
        let ColorChoice::SRgb(srgb) = color else {
            panic!("expected an sRGB color");
        };
        assert_eq!(srgb.val.as_str(), "FF0000");
        match srgb.transforms.as_slice() {
            [ColorTransform::Alpha(alpha)] => {
                assert_eq!(alpha.val, PositiveFixedPercentage::from_thousandths(50_196));
            },
            other => panic!("unexpected transforms: {other:?}"),
        }
    }

    #[test]
    fn test_fill_setters_replace_each_other() {
        let mut sp_pr = dml::ShapeProperties::new();
        let mut shape = ShapeProperties::new(&mut sp_pr);
        shape.set_solid_fill(RGBColor::new(0, 0, 0));
        shape.set_no_fill();
        assert_eq!(shape.get().fill, Some(FillProperties::none()));
    }

    #[test]
    fn test_join_replaces_previous_join() {
        let mut ln = dml::LineProperties::new();
        let mut line = LineProperties::new(&mut ln);
        line.set_join(LineJoin::Round);
        line.set_join(LineJoin::Bevel);

        assert!(matches!(ln.join, Some(LineJoinProperties::Bevel(_))));
        assert_eq!(to_xml_string(&ln, "a:ln").unwrap(), "<a:ln><a:bevel/></a:ln>");
    }

    #[test]
    fn test_miter_limit() {
        let mut ln = dml::LineProperties::new();
        LineProperties::new(&mut ln).set_join(LineJoin::Miter { limit: Some(800_000) });
        assert_eq!(
            to_xml_string(&ln, "a:ln").unwrap(),
            r#"<a:ln><a:miter lim="800000"/></a:ln>"#
        );
    }

    #[test]
    fn test_line_through_shape() {
        let mut sp_pr = dml::ShapeProperties::new();
        let mut shape = ShapeProperties::new(&mut sp_pr);
        shape
            .line_properties()
            .set_width(Length::from_points(1.0))
            .set_solid_fill(RGBColor::new(0, 0, 0))
            .set_cap(LineCap::Flat)
            .set_dash(PresetLineDashValue::Dash);
        shape.line_properties().clear_fill();

        assert_eq!(
            to_xml_string(&sp_pr, "a:spPr").unwrap(),
            r#"<a:spPr><a:ln w="12700" cap="flat"><a:prstDash val="dash"/></a:ln></a:spPr>"#
        );
    }

    #[test]
    fn test_oversized_line_width_saturates() {
        let mut sp_pr = dml::ShapeProperties::new();
        ShapeProperties::new(&mut sp_pr)
            .line_properties()
            .set_width(Length::from_emus(i64::MAX));

        assert_eq!(sp_pr.ln.as_ref().unwrap().w, Some(LineWidth(i32::MAX)));
        assert_eq!(sp_pr.validate().unwrap_err().path, "/ln/w");
    }
}
