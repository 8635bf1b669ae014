//! Fill properties for shapes, lines and text.

use crate::common::RGBColor;
use crate::ooxml::drawings::blip::Blip;
use crate::ooxml::drawings::color::{Color, ColorChoice};
use crate::ooxml::drawings::simple_types::{
    Coordinate, Percentage, PathShadeType, PositiveFixedAngle, PositiveFixedPercentage,
    PresetPatternValue, RectAlignment, TileFlipMode,
};
use crate::{choice, complex_type};

complex_type! {
    /// `CT_NoFillProperties`
    pub struct NoFill {
        attributes {}
        children {}
    }
}

complex_type! {
    /// `CT_SolidColorFillProperties`
    pub struct SolidColorFill {
        attributes {}
        children {
            color: choice ColorChoice,
        }
    }
}

complex_type! {
    /// `CT_GradientStop`
    pub struct GradientStop {
        attributes {
            pos: req PositiveFixedPercentage = "pos",
        }
        children {
            color: choice_req ColorChoice,
        }
    }
}

complex_type! {
    /// `CT_GradientStopList`
    pub struct GradientStopList {
        attributes {}
        children {
            stops: many1 GradientStop = "a:gs",
        }
    }
}

complex_type! {
    /// `CT_RelativeRect`: insets in thousandths of a percent.
    pub struct RelativeRect {
        attributes {
            l: opt Percentage = "l",
            t: opt Percentage = "t",
            r: opt Percentage = "r",
            b: opt Percentage = "b",
        }
        children {}
    }
}

complex_type! {
    /// `CT_LinearShadeProperties`
    pub struct LinearShade {
        attributes {
            ang: opt PositiveFixedAngle = "ang",
            scaled: opt bool = "scaled",
        }
        children {}
    }
}

complex_type! {
    /// `CT_PathShadeProperties`
    pub struct PathShade {
        attributes {
            path: opt PathShadeType = "path",
        }
        children {
            fill_to_rect: opt RelativeRect = "a:fillToRect",
        }
    }
}

choice! {
    /// `EG_ShadeProperties`
    pub enum ShadeProperties("EG_ShadeProperties") {
        Linear(LinearShade) = "a:lin",
        Path(PathShade) = "a:path",
    }
}

complex_type! {
    /// `CT_GradientFillProperties`
    pub struct GradientFill {
        attributes {
            flip: opt TileFlipMode = "flip",
            rot_with_shape: opt bool = "rotWithShape",
        }
        children {
            gs_lst: opt GradientStopList = "a:gsLst",
            shade: choice ShadeProperties,
            tile_rect: opt RelativeRect = "a:tileRect",
        }
    }
}

complex_type! {
    /// `CT_PatternFillProperties`
    pub struct PatternFill {
        attributes {
            prst: opt PresetPatternValue = "prst",
        }
        children {
            fg_clr: opt Color = "a:fgClr",
            bg_clr: opt Color = "a:bgClr",
        }
    }
}

complex_type! {
    /// `CT_StretchInfoProperties`
    pub struct StretchInfo {
        attributes {}
        children {
            fill_rect: opt RelativeRect = "a:fillRect",
        }
    }
}

complex_type! {
    /// `CT_TileInfoProperties`
    pub struct TileInfo {
        attributes {
            tx: opt Coordinate = "tx",
            ty: opt Coordinate = "ty",
            sx: opt Percentage = "sx",
            sy: opt Percentage = "sy",
            flip: opt TileFlipMode = "flip",
            algn: opt RectAlignment = "algn",
        }
        children {}
    }
}

choice! {
    /// `EG_FillModeProperties`
    pub enum FillMode("EG_FillModeProperties") {
        Tile(TileInfo) = "a:tile",
        Stretch(StretchInfo) = "a:stretch",
    }
}

complex_type! {
    /// `CT_BlipFillProperties`
    pub struct BlipFill {
        attributes {
            dpi: opt u32 = "dpi",
            rot_with_shape: opt bool = "rotWithShape",
        }
        children {
            blip: opt Blip = "a:blip",
            src_rect: opt RelativeRect = "a:srcRect",
            mode: choice FillMode,
        }
    }
}

complex_type! {
    /// `CT_GroupFillProperties`
    pub struct GroupFill {
        attributes {}
        children {}
    }
}

choice! {
    /// `EG_FillProperties`
    pub enum FillProperties("EG_FillProperties") {
        NoFill(NoFill) = "a:noFill",
        Solid(SolidColorFill) = "a:solidFill",
        Gradient(GradientFill) = "a:gradFill",
        Blip(BlipFill) = "a:blipFill",
        Pattern(PatternFill) = "a:pattFill",
        Group(GroupFill) = "a:grpFill",
    }
}

choice! {
    /// `EG_LineFillProperties`
    pub enum LineFillProperties("EG_LineFillProperties") {
        NoFill(NoFill) = "a:noFill",
        Solid(SolidColorFill) = "a:solidFill",
        Gradient(GradientFill) = "a:gradFill",
        Pattern(PatternFill) = "a:pattFill",
    }
}

impl SolidColorFill {
    pub fn rgb(color: RGBColor) -> Self {
        Self {
            color: Some(ColorChoice::srgb(color)),
        }
    }
}

impl GradientStop {
    /// A stop at `pos` thousandths of a percent along the gradient.
    pub fn at(pos: i32, color: ColorChoice) -> Self {
        Self {
            pos: PositiveFixedPercentage::from_thousandths(pos),
            color,
        }
    }
}

impl BlipFill {
    /// A stretched picture fill referencing relationship `r_id`.
    pub fn stretched(r_id: &str) -> Self {
        let mut stretch = StretchInfo::new();
        stretch.fill_rect = Some(RelativeRect::new());
        Self {
            dpi: None,
            rot_with_shape: Some(true),
            blip: Some(Blip::embedded(r_id)),
            src_rect: None,
            mode: Some(FillMode::Stretch(stretch)),
        }
    }
}

impl FillProperties {
    pub fn solid(color: RGBColor) -> Self {
        Self::Solid(SolidColorFill::rgb(color))
    }

    pub fn none() -> Self {
        Self::NoFill(NoFill::new())
    }

    /// Color of a solid fill.
    pub fn solid_color(&self) -> Option<&ColorChoice> {
        match self {
            Self::Solid(fill) => fill.color.as_ref(),
            _ => None,
        }
    }
}

impl LineFillProperties {
    pub fn solid(color: RGBColor) -> Self {
        Self::Solid(SolidColorFill::rgb(color))
    }

    pub fn none() -> Self {
        Self::NoFill(NoFill::new())
    }
}
