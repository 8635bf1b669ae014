//! Preset and custom shape geometry.

use crate::ooxml::drawings::simple_types::{
    AdjAngle, AdjCoordinate, Coordinate, GeomGuideName, PathFillMode, PositiveCoordinate, ShapeType,
};
use crate::{choice, complex_type};

complex_type! {
    /// `CT_GeomGuide`: a named formula such as `val 50000`.
    pub struct GeomGuide {
        attributes {
            name: req GeomGuideName = "name",
            fmla: req String = "fmla",
        }
        children {}
    }
}

complex_type! {
    /// `CT_GeomGuideList` (`a:avLst`, `a:gdLst`).
    pub struct GeomGuideList {
        attributes {}
        children {
            guides: many GeomGuide = "a:gd",
        }
    }
}

complex_type! {
    /// `CT_AdjPoint2D`
    pub struct AdjPoint2D {
        attributes {
            x: req AdjCoordinate = "x",
            y: req AdjCoordinate = "y",
        }
        children {}
    }
}

complex_type! {
    /// `CT_GeomRect`: the text rectangle of a custom shape.
    pub struct GeomRect {
        attributes {
            l: req AdjCoordinate = "l",
            t: req AdjCoordinate = "t",
            r: req AdjCoordinate = "r",
            b: req AdjCoordinate = "b",
        }
        children {}
    }
}

complex_type! {
    /// `CT_XYAdjustHandle`
    pub struct XYAdjustHandle {
        attributes {
            gd_ref_x: opt GeomGuideName = "gdRefX",
            min_x: opt AdjCoordinate = "minX",
            max_x: opt AdjCoordinate = "maxX",
            gd_ref_y: opt GeomGuideName = "gdRefY",
            min_y: opt AdjCoordinate = "minY",
            max_y: opt AdjCoordinate = "maxY",
        }
        children {
            pos: req AdjPoint2D = "a:pos",
        }
    }
}

complex_type! {
    /// `CT_PolarAdjustHandle`
    pub struct PolarAdjustHandle {
        attributes {
            gd_ref_r: opt GeomGuideName = "gdRefR",
            min_r: opt AdjCoordinate = "minR",
            max_r: opt AdjCoordinate = "maxR",
            gd_ref_ang: opt GeomGuideName = "gdRefAng",
            min_ang: opt AdjAngle = "minAng",
            max_ang: opt AdjAngle = "maxAng",
        }
        children {
            pos: req AdjPoint2D = "a:pos",
        }
    }
}

choice! {
    /// Adjust handle kinds.
    pub enum AdjustHandle("CT_AdjustHandleList") {
        XY(XYAdjustHandle) = "a:ahXY",
        Polar(PolarAdjustHandle) = "a:ahPolar",
    }
}

complex_type! {
    /// `CT_AdjustHandleList`
    pub struct AdjustHandleList {
        attributes {}
        children {
            handles: choices AdjustHandle,
        }
    }
}

complex_type! {
    /// `CT_ConnectionSite`
    pub struct ConnectionSite {
        attributes {
            ang: req AdjAngle = "ang",
        }
        children {
            pos: req AdjPoint2D = "a:pos",
        }
    }
}

complex_type! {
    /// `CT_ConnectionSiteList`
    pub struct ConnectionSiteList {
        attributes {}
        children {
            sites: many ConnectionSite = "a:cxn",
        }
    }
}

complex_type! {
    /// `CT_Path2DClose`
    pub struct PathClose {
        attributes {}
        children {}
    }
}

complex_type! {
    /// `CT_Path2DMoveTo`
    pub struct PathMoveTo {
        attributes {}
        children {
            pt: req AdjPoint2D = "a:pt",
        }
    }
}

complex_type! {
    /// `CT_Path2DLineTo`
    pub struct PathLineTo {
        attributes {}
        children {
            pt: req AdjPoint2D = "a:pt",
        }
    }
}

complex_type! {
    /// `CT_Path2DArcTo`
    pub struct PathArcTo {
        attributes {
            w_r: req AdjCoordinate = "wR",
            h_r: req AdjCoordinate = "hR",
            st_ang: req AdjAngle = "stAng",
            sw_ang: req AdjAngle = "swAng",
        }
        children {}
    }
}

complex_type! {
    /// `CT_Path2DQuadBezierTo`: control point then end point.
    pub struct PathQuadBezierTo {
        attributes {}
        children {
            pts: many1 AdjPoint2D = "a:pt",
        }
    }
}

complex_type! {
    /// `CT_Path2DCubicBezierTo`: two control points then the end point.
    pub struct PathCubicBezierTo {
        attributes {}
        children {
            pts: many1 AdjPoint2D = "a:pt",
        }
    }
}

choice! {
    /// Drawing commands of a path.
    pub enum PathCommand("CT_Path2D") {
        Close(PathClose) = "a:close",
        MoveTo(PathMoveTo) = "a:moveTo",
        LineTo(PathLineTo) = "a:lnTo",
        ArcTo(PathArcTo) = "a:arcTo",
        QuadBezierTo(PathQuadBezierTo) = "a:quadBezTo",
        CubicBezierTo(PathCubicBezierTo) = "a:cubicBezTo",
    }
}

complex_type! {
    /// `CT_Path2D`
    pub struct Path2D {
        attributes {
            w: opt PositiveCoordinate = "w",
            h: opt PositiveCoordinate = "h",
            fill: opt PathFillMode = "fill",
            stroke: opt bool = "stroke",
            extrusion_ok: opt bool = "extrusionOk",
        }
        children {
            commands: choices PathCommand,
        }
    }
}

complex_type! {
    /// `CT_Path2DList`
    pub struct Path2DList {
        attributes {}
        children {
            paths: many Path2D = "a:path",
        }
    }
}

complex_type! {
    /// `CT_CustomGeometry2D`
    pub struct CustomGeometry2D {
        attributes {}
        children {
            av_lst: opt GeomGuideList = "a:avLst",
            gd_lst: opt GeomGuideList = "a:gdLst",
            ah_lst: opt AdjustHandleList = "a:ahLst",
            cxn_lst: opt ConnectionSiteList = "a:cxnLst",
            rect: opt GeomRect = "a:rect",
            path_lst: req Path2DList = "a:pathLst",
        }
    }
}

complex_type! {
    /// `CT_PresetGeometry2D`
    pub struct PresetGeometry2D {
        attributes {
            prst: req ShapeType = "prst",
        }
        children {
            av_lst: opt GeomGuideList = "a:avLst",
        }
    }
}

choice! {
    /// `EG_Geometry`
    pub enum Geometry("EG_Geometry") {
        Custom(CustomGeometry2D) = "a:custGeom",
        Preset(PresetGeometry2D) = "a:prstGeom",
    }
}

impl GeomGuide {
    pub fn with_formula(name: &str, fmla: &str) -> Self {
        Self {
            name: GeomGuideName::new(name),
            fmla: fmla.to_string(),
        }
    }
}

impl AdjPoint2D {
    /// A point from EMU coordinates.
    pub fn from_emus(x: i64, y: i64) -> Self {
        Self {
            x: AdjCoordinate::Coordinate(Coordinate::from_emus(x)),
            y: AdjCoordinate::Coordinate(Coordinate::from_emus(y)),
        }
    }
}

impl PresetGeometry2D {
    /// A preset geometry with an empty adjust value list.
    pub fn preset(prst: ShapeType) -> Self {
        Self {
            prst,
            av_lst: Some(GeomGuideList::new()),
        }
    }
}

impl Geometry {
    /// Preset shape, if this is a preset geometry.
    pub fn preset_type(&self) -> Option<ShapeType> {
        match self {
            Self::Preset(p) => Some(p.prst),
            Self::Custom(_) => None,
        }
    }
}
