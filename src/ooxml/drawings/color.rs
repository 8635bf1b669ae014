//! Color models and color transforms.
//!
//! Every color element carries an ordered list of transforms (`a:alpha`,
//! `a:lumMod`, ...). Order matters to renderers, so transforms are kept as a
//! single sequence rather than one field per kind.

use crate::common::RGBColor;
use crate::ooxml::drawings::simple_types::{
    Angle, FixedPercentage, HexColorRgb, Percentage, PositiveFixedAngle,
    PositiveFixedPercentage, PositivePercentage, PresetColorValue, SchemeColorValue,
    SystemColorValue,
};
use crate::{choice, complex_type};

complex_type! {
    /// Transform without a value (`a:comp`, `a:inv`, `a:gray`, `a:gamma`,
    /// `a:invGamma`).
    pub struct ColorTransformFlag {
        attributes {}
        children {}
    }
}

complex_type! {
    /// `CT_PositiveFixedPercentage`
    pub struct PositiveFixedPercentageValue {
        attributes {
            val: req PositiveFixedPercentage = "val",
        }
        children {}
    }
}

complex_type! {
    /// `CT_FixedPercentage`
    pub struct FixedPercentageValue {
        attributes {
            val: req FixedPercentage = "val",
        }
        children {}
    }
}

complex_type! {
    /// `CT_PositivePercentage`
    pub struct PositivePercentageValue {
        attributes {
            val: req PositivePercentage = "val",
        }
        children {}
    }
}

complex_type! {
    /// `CT_Percentage`
    pub struct PercentageValue {
        attributes {
            val: req Percentage = "val",
        }
        children {}
    }
}

complex_type! {
    /// `CT_PositiveFixedAngle`
    pub struct PositiveFixedAngleValue {
        attributes {
            val: req PositiveFixedAngle = "val",
        }
        children {}
    }
}

complex_type! {
    /// `CT_Angle`
    pub struct AngleValue {
        attributes {
            val: req Angle = "val",
        }
        children {}
    }
}

choice! {
    /// `EG_ColorTransform`
    pub enum ColorTransform("EG_ColorTransform") {
        Tint(PositiveFixedPercentageValue) = "a:tint",
        Shade(PositiveFixedPercentageValue) = "a:shade",
        Complement(ColorTransformFlag) = "a:comp",
        Inverse(ColorTransformFlag) = "a:inv",
        Gray(ColorTransformFlag) = "a:gray",
        Alpha(PositiveFixedPercentageValue) = "a:alpha",
        AlphaOff(FixedPercentageValue) = "a:alphaOff",
        AlphaMod(PositivePercentageValue) = "a:alphaMod",
        Hue(PositiveFixedAngleValue) = "a:hue",
        HueOff(AngleValue) = "a:hueOff",
        HueMod(PositivePercentageValue) = "a:hueMod",
        Sat(PercentageValue) = "a:sat",
        SatOff(PercentageValue) = "a:satOff",
        SatMod(PercentageValue) = "a:satMod",
        Lum(PercentageValue) = "a:lum",
        LumOff(PercentageValue) = "a:lumOff",
        LumMod(PercentageValue) = "a:lumMod",
        Red(PercentageValue) = "a:red",
        RedOff(PercentageValue) = "a:redOff",
        RedMod(PercentageValue) = "a:redMod",
        Green(PercentageValue) = "a:green",
        GreenOff(PercentageValue) = "a:greenOff",
        GreenMod(PercentageValue) = "a:greenMod",
        Blue(PercentageValue) = "a:blue",
        BlueOff(PercentageValue) = "a:blueOff",
        BlueMod(PercentageValue) = "a:blueMod",
        Gamma(ColorTransformFlag) = "a:gamma",
        InverseGamma(ColorTransformFlag) = "a:invGamma",
    }
}

complex_type! {
    /// `CT_SRgbColor`
    pub struct SRgbColor {
        attributes {
            val: req HexColorRgb = "val",
        }
        children {
            transforms: choices ColorTransform,
        }
    }
}

complex_type! {
    /// `CT_ScRgbColor`: linear RGB percentages.
    pub struct ScRgbColor {
        attributes {
            r: req Percentage = "r",
            g: req Percentage = "g",
            b: req Percentage = "b",
        }
        children {
            transforms: choices ColorTransform,
        }
    }
}

complex_type! {
    /// `CT_HslColor`
    pub struct HslColor {
        attributes {
            hue: req PositiveFixedAngle = "hue",
            sat: req Percentage = "sat",
            lum: req Percentage = "lum",
        }
        children {
            transforms: choices ColorTransform,
        }
    }
}

complex_type! {
    /// `CT_SystemColor`
    pub struct SystemColor {
        attributes {
            val: req SystemColorValue = "val",
            last_clr: opt HexColorRgb = "lastClr",
        }
        children {
            transforms: choices ColorTransform,
        }
    }
}

complex_type! {
    /// `CT_SchemeColor`
    pub struct SchemeColor {
        attributes {
            val: req SchemeColorValue = "val",
        }
        children {
            transforms: choices ColorTransform,
        }
    }
}

complex_type! {
    /// `CT_PresetColor`
    pub struct PresetColor {
        attributes {
            val: req PresetColorValue = "val",
        }
        children {
            transforms: choices ColorTransform,
        }
    }
}

choice! {
    /// `EG_ColorChoice`
    pub enum ColorChoice("EG_ColorChoice") {
        SRgb(SRgbColor) = "a:srgbClr",
        ScRgb(ScRgbColor) = "a:scrgbClr",
        Hsl(HslColor) = "a:hslClr",
        System(SystemColor) = "a:sysClr",
        Scheme(SchemeColor) = "a:schemeClr",
        Preset(PresetColor) = "a:prstClr",
    }
}

complex_type! {
    /// `CT_Color`: an element wrapping exactly one color.
    pub struct Color {
        attributes {}
        children {
            color: choice_req ColorChoice,
        }
    }
}

impl ColorChoice {
    /// An sRGB color. A translucent color gets an `a:alpha` transform.
    pub fn srgb(color: RGBColor) -> Self {
        let mut clr = SRgbColor::new();
        clr.val = HexColorRgb::from(color);
        if !color.is_opaque() {
            let alpha = color.a as i32 * 100_000 / 255;
            clr.transforms.push(ColorTransform::Alpha(PositiveFixedPercentageValue {
                val: PositiveFixedPercentage::from_thousandths(alpha),
            }));
        }
        Self::SRgb(clr)
    }

    /// A theme color.
    pub fn scheme(val: SchemeColorValue) -> Self {
        Self::Scheme(SchemeColor {
            val,
            transforms: Vec::new(),
        })
    }

    /// Transforms applied to the base color.
    pub fn transforms(&self) -> &[ColorTransform] {
        match self {
            Self::SRgb(c) => &c.transforms,
            Self::ScRgb(c) => &c.transforms,
            Self::Hsl(c) => &c.transforms,
            Self::System(c) => &c.transforms,
            Self::Scheme(c) => &c.transforms,
            Self::Preset(c) => &c.transforms,
        }
    }

    /// The base color as sRGB when it is known without a theme.
    /// Transforms are not applied.
    pub fn base_rgb(&self) -> Option<RGBColor> {
        match self {
            Self::SRgb(c) => RGBColor::from_hex(c.val.as_str()),
            Self::System(c) => c.last_clr.as_ref().and_then(|v| RGBColor::from_hex(v.as_str())),
            Self::Preset(c) => c.val.rgb(),
            _ => None,
        }
    }
}

impl Color {
    pub fn srgb(color: RGBColor) -> Self {
        Self {
            color: ColorChoice::srgb(color),
        }
    }
}
