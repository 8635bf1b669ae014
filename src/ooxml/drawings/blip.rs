//! Picture references (`a:blip`) and the image effects applied to them.

use crate::ooxml::drawings::color::{Color, ColorChoice};
use crate::ooxml::drawings::ext::ExtensionList;
use crate::ooxml::drawings::simple_types::{
    BlipCompression, FixedPercentage, PositiveCoordinate, PositiveFixedAngle,
    PositiveFixedPercentage, PositivePercentage,
};
use crate::ooxml::error::Result;
use crate::ooxml::schema::{
    BytesStart, Namespaces, XmlDocument, XmlElement, XmlReader, element_local_name,
};
use crate::{choice, complex_type};
use std::io::BufRead;

complex_type! {
    /// Effect without parameters (`a:alphaCeiling`, `a:alphaFloor`,
    /// `a:grayscl`).
    pub struct EmptyEffect {
        attributes {}
        children {}
    }
}

complex_type! {
    /// `CT_AlphaBiLevelEffect` and `CT_BiLevelEffect`
    pub struct ThresholdEffect {
        attributes {
            thresh: req PositiveFixedPercentage = "thresh",
        }
        children {}
    }
}

complex_type! {
    /// `CT_AlphaInverseEffect`
    pub struct AlphaInverseEffect {
        attributes {}
        children {
            color: choice ColorChoice,
        }
    }
}

complex_type! {
    /// `CT_AlphaModulateFixedEffect`
    pub struct AlphaModulateFixedEffect {
        attributes {
            amt: opt PositivePercentage = "amt",
        }
        children {}
    }
}

complex_type! {
    /// `CT_AlphaReplaceEffect`
    pub struct AlphaReplaceEffect {
        attributes {
            a: req PositiveFixedPercentage = "a",
        }
        children {}
    }
}

complex_type! {
    /// `CT_BlurEffect`
    pub struct BlurEffect {
        attributes {
            rad: opt PositiveCoordinate = "rad",
            grow: opt bool = "grow",
        }
        children {}
    }
}

complex_type! {
    /// `CT_ColorChangeEffect`
    pub struct ColorChangeEffect {
        attributes {
            use_a: opt bool = "useA",
        }
        children {
            clr_from: req Color = "a:clrFrom",
            clr_to: req Color = "a:clrTo",
        }
    }
}

complex_type! {
    /// `CT_ColorReplaceEffect`
    pub struct ColorReplaceEffect {
        attributes {}
        children {
            color: choice_req ColorChoice,
        }
    }
}

complex_type! {
    /// `CT_DuotoneEffect`: exactly two colors.
    pub struct DuotoneEffect {
        attributes {}
        children {
            colors: choice_pair ColorChoice,
        }
    }
}

complex_type! {
    /// `CT_HSLEffect`
    pub struct HslEffect {
        attributes {
            hue: opt PositiveFixedAngle = "hue",
            sat: opt FixedPercentage = "sat",
            lum: opt FixedPercentage = "lum",
        }
        children {}
    }
}

complex_type! {
    /// `CT_LuminanceEffect`
    pub struct LuminanceEffect {
        attributes {
            bright: opt FixedPercentage = "bright",
            contrast: opt FixedPercentage = "contrast",
        }
        children {}
    }
}

complex_type! {
    /// `CT_TintEffect`
    pub struct TintEffect {
        attributes {
            hue: opt PositiveFixedAngle = "hue",
            amt: opt FixedPercentage = "amt",
        }
        children {}
    }
}

choice! {
    /// Effects allowed inside `a:blip`.
    pub enum BlipEffect("CT_Blip") {
        AlphaBiLevel(ThresholdEffect) = "a:alphaBiLevel",
        AlphaCeiling(EmptyEffect) = "a:alphaCeiling",
        AlphaFloor(EmptyEffect) = "a:alphaFloor",
        AlphaInverse(AlphaInverseEffect) = "a:alphaInv",
        AlphaModulateFixed(AlphaModulateFixedEffect) = "a:alphaModFix",
        AlphaReplace(AlphaReplaceEffect) = "a:alphaRepl",
        BiLevel(ThresholdEffect) = "a:biLevel",
        Blur(BlurEffect) = "a:blur",
        ColorChange(ColorChangeEffect) = "a:clrChange",
        ColorReplace(ColorReplaceEffect) = "a:clrRepl",
        Duotone(DuotoneEffect) = "a:duotone",
        Grayscale(EmptyEffect) = "a:grayscl",
        Hsl(HslEffect) = "a:hsl",
        Luminance(LuminanceEffect) = "a:lum",
        Tint(TintEffect) = "a:tint",
    }
}

complex_type! {
    /// `CT_Blip`: an embedded or linked picture.
    pub struct Blip {
        attributes {
            embed: opt String = "r:embed",
            link: opt String = "r:link",
            cstate: opt BlipCompression = "cstate",
        }
        children {
            effects: choices BlipEffect,
            ext_lst: opt ExtensionList = "a:extLst",
        }
    }
}

impl Blip {
    /// A blip embedding the image part behind relationship `r_id`.
    pub fn embedded(r_id: &str) -> Self {
        let mut blip = Self::new();
        blip.embed = Some(r_id.to_string());
        blip
    }
}

impl XmlDocument for Blip {
    const ROOT: &'static str = "a:blip";
    const NAMESPACES: Namespaces = &[
        (
            "xmlns:a",
            "http://schemas.openxmlformats.org/drawingml/2006/main",
        ),
        (
            "xmlns:r",
            "http://schemas.openxmlformats.org/officeDocument/2006/relationships",
        ),
    ];
}

/// Relationship id of the first `a:blip` with an `r:embed` in `xml`.
pub fn find_first_blip_embed(xml: &[u8]) -> Result<Option<String>> {
    let mut r = XmlReader::new(xml);
    let root = r.read_root()?;
    find_in(&mut r, &root)
}

fn find_in<R: BufRead>(r: &mut XmlReader<R>, start: &BytesStart<'_>) -> Result<Option<String>> {
    if element_local_name(start)? == "blip" {
        let mut blip = Blip::new();
        blip.decode(r, start)?;
        return Ok(blip.embed);
    }
    while let Some(child) = r.next_child()? {
        if let Some(found) = find_in(r, &child)? {
            return Ok(Some(found));
        }
    }
    Ok(None)
}
