//! 2D transforms: offset, extents, rotation and flips.

use crate::complex_type;
use crate::ooxml::drawings::simple_types::{Angle, Coordinate, PositiveCoordinate};

complex_type! {
    /// `CT_Point2D`
    pub struct Point2D {
        attributes {
            x: req Coordinate = "x",
            y: req Coordinate = "y",
        }
        children {}
    }
}

complex_type! {
    /// `CT_PositiveSize2D`
    pub struct PositiveSize2D {
        attributes {
            cx: req PositiveCoordinate = "cx",
            cy: req PositiveCoordinate = "cy",
        }
        children {}
    }
}

complex_type! {
    /// `CT_Transform2D` (`a:xfrm`).
    pub struct Transform2D {
        attributes {
            rot: opt Angle = "rot",
            flip_h: opt bool = "flipH",
            flip_v: opt bool = "flipV",
        }
        children {
            off: opt Point2D = "a:off",
            ext: opt PositiveSize2D = "a:ext",
        }
    }
}

impl Point2D {
    /// A point from EMU coordinates.
    pub fn from_emus(x: i64, y: i64) -> Self {
        Self {
            x: Coordinate::from_emus(x),
            y: Coordinate::from_emus(y),
        }
    }
}

impl PositiveSize2D {
    /// A size from EMU extents.
    pub fn from_emus(cx: i64, cy: i64) -> Self {
        Self {
            cx: PositiveCoordinate(cx),
            cy: PositiveCoordinate(cy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::schema::{Validate, from_xml_str, to_xml_string};

    #[test]
    fn test_xfrm_layout() {
        let mut xfrm = Transform2D::new();
        xfrm.rot = Some(Angle(5_400_000));
        xfrm.off = Some(Point2D::from_emus(914_400, 457_200));
        xfrm.ext = Some(PositiveSize2D::from_emus(1_828_800, 914_400));

        let xml = to_xml_string(&xfrm, "a:xfrm").unwrap();
        assert_eq!(
            xml,
            r#"<a:xfrm rot="5400000"><a:off x="914400" y="457200"/><a:ext cx="1828800" cy="914400"/></a:xfrm>"#
        );
        let back: Transform2D = from_xml_str(&xml, "a:xfrm").unwrap();
        assert_eq!(back, xfrm);
    }

    #[test]
    fn test_point_accepts_universal_measure() {
        let p: Point2D = from_xml_str(r#"<a:off x="1in" y="-2.5cm"/>"#, "a:off").unwrap();
        assert_eq!(p.x.to_emus(), Some(914_400));
        assert_eq!(p.y.to_emus(), Some(-900_000));
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_negative_extent_fails_validation() {
        let mut xfrm = Transform2D::new();
        xfrm.ext = Some(PositiveSize2D::from_emus(-1, 10));
        let err = xfrm.validate().unwrap_err();
        assert_eq!(err.path, "/ext/cx");
    }

    #[test]
    fn test_unknown_unit_is_caught_by_validation() {
        let p: Point2D = from_xml_str(r#"<a:off x="wide" y="0"/>"#, "a:off").unwrap();
        let err = p.validate().unwrap_err();
        assert_eq!(err.path, "/x");
        assert!(err.message.starts_with("Measure:"));
    }

    #[test]
    fn test_malformed_extent_aborts_decode() {
        let res = from_xml_str::<PositiveSize2D>(r#"<a:ext cx="wide" cy="0"/>"#, "a:ext");
        assert!(res.is_err());
    }
}
