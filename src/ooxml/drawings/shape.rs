//! Shape properties (`a:spPr`, `c:spPr`, `p:spPr`).

use crate::ooxml::drawings::ext::ExtensionList;
use crate::ooxml::drawings::fill::FillProperties;
use crate::ooxml::drawings::geometry::Geometry;
use crate::ooxml::drawings::line::LineProperties;
use crate::ooxml::drawings::simple_types::BlackWhiteMode;
use crate::ooxml::drawings::xfrm::Transform2D;
use crate::complex_type;

complex_type! {
    /// `CT_ShapeProperties`
    ///
    /// Effects and 3D properties are not modelled; they are skipped on
    /// decode.
    pub struct ShapeProperties {
        attributes {
            bw_mode: opt BlackWhiteMode = "bwMode",
        }
        children {
            xfrm: opt Transform2D = "a:xfrm",
            geometry: choice Geometry,
            fill: choice FillProperties,
            ln: opt LineProperties = "a:ln",
            ext_lst: opt ExtensionList = "a:extLst",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RGBColor;
    use crate::ooxml::drawings::geometry::PresetGeometry2D;
    use crate::ooxml::drawings::simple_types::{LineWidth, ShapeType};
    use crate::ooxml::drawings::xfrm::{Point2D, PositiveSize2D};
    use crate::ooxml::schema::{Validate, from_xml_str, to_xml_string};

    #[test]
    fn test_new_is_valid_and_empty() {
        let sp_pr = ShapeProperties::new();
        assert!(sp_pr.validate().is_ok());
        assert_eq!(to_xml_string(&sp_pr, "c:spPr").unwrap(), "<c:spPr/>");
    }

    #[test]
    fn test_children_written_in_schema_order() {
        let mut sp_pr = ShapeProperties::new();
        // Set out of order on purpose.
        sp_pr.fill = Some(FillProperties::solid(RGBColor::new(0xFF, 0xC0, 0x00)));
        sp_pr.geometry = Some(Geometry::Preset(PresetGeometry2D::preset(ShapeType::Ellipse)));
        let mut xfrm = Transform2D::new();
        xfrm.off = Some(Point2D::from_emus(0, 0));
        xfrm.ext = Some(PositiveSize2D::from_emus(100, 100));
        sp_pr.xfrm = Some(xfrm);

        assert_eq!(
            to_xml_string(&sp_pr, "p:spPr").unwrap(),
            r#"<p:spPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="100" cy="100"/></a:xfrm><a:prstGeom prst="ellipse"><a:avLst/></a:prstGeom><a:solidFill><a:srgbClr val="FFC000"/></a:solidFill></p:spPr>"#
        );
    }

    #[test]
    fn test_unknown_children_are_skipped() {
        let xml = r#"<c:spPr><a:noFill/><a:effectLst><a:outerShdw blurRad="40000"><a:srgbClr val="000000"/></a:outerShdw></a:effectLst><a:ln w="9525"><a:noFill/></a:ln></c:spPr>"#;
        let sp_pr: ShapeProperties = from_xml_str(xml, "c:spPr").unwrap();
        assert!(matches!(sp_pr.fill, Some(FillProperties::NoFill(_))));
        assert_eq!(sp_pr.ln.as_ref().and_then(|ln| ln.w), Some(LineWidth(9525)));
        assert_eq!(
            to_xml_string(&sp_pr, "c:spPr").unwrap(),
            r#"<c:spPr><a:noFill/><a:ln w="9525"><a:noFill/></a:ln></c:spPr>"#
        );
    }

    #[test]
    fn test_repeated_fill_replaces_earlier_one() {
        let xml = concat!(
            r#"<a:spPr><a:solidFill><a:srgbClr val="FF0000"><a:alpha val="50000"/></a:srgbClr></a:solidFill>"#,
            r#"<a:solidFill><a:srgbClr val="00FF00"/></a:solidFill></a:spPr>"#
        );
        let sp_pr: ShapeProperties = from_xml_str(xml, "a:spPr").unwrap();
        assert_eq!(
            to_xml_string(&sp_pr, "a:spPr").unwrap(),
            r#"<a:spPr><a:solidFill><a:srgbClr val="00FF00"/></a:solidFill></a:spPr>"#
        );
    }

    #[test]
    fn test_repeated_xfrm_replaces_earlier_one() {
        let xml = r#"<a:spPr><a:xfrm rot="60000"><a:off x="1" y="2"/></a:xfrm><a:xfrm><a:ext cx="3" cy="4"/></a:xfrm></a:spPr>"#;
        let sp_pr: ShapeProperties = from_xml_str(xml, "a:spPr").unwrap();
        let xfrm = sp_pr.xfrm.as_ref().unwrap();
        assert_eq!(xfrm.rot, None);
        assert_eq!(xfrm.off, None);
        assert_eq!(
            to_xml_string(&sp_pr, "a:spPr").unwrap(),
            r#"<a:spPr><a:xfrm><a:ext cx="3" cy="4"/></a:xfrm></a:spPr>"#
        );
    }

    #[test]
    fn test_extension_list_round_trip() {
        let xml = r#"<a:spPr><a:extLst><a:ext uri="{91240B29-F687-4F45-9708-019B960494DF}"><a14:hiddenLine xmlns:a14="http://schemas.microsoft.com/office/drawing/2010/main" w="9525"/></a:ext></a:extLst></a:spPr>"#;
        let sp_pr: ShapeProperties = from_xml_str(xml, "a:spPr").unwrap();
        assert_eq!(to_xml_string(&sp_pr, "a:spPr").unwrap(), xml);
    }
}
