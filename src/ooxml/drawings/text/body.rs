use crate::ooxml::drawings::ext::ExtensionList;
use crate::ooxml::drawings::simple_types::{
    Angle, Coordinate32, Percentage, PositiveCoordinate32, TextAnchoringType, TextColumnCount,
    TextHorzOverflowType, TextVertOverflowType, TextVerticalType, TextWrappingType,
};
use crate::ooxml::drawings::text::paragraph::{TextParagraph, TextParagraphProperties};
use crate::{choice, complex_type};

complex_type! {
    /// `a:noAutofit` and `a:spAutoFit`
    pub struct TextAutofitFlag {
        attributes {}
        children {}
    }
}

complex_type! {
    /// `CT_TextNormalAutofit`
    pub struct NormalAutofit {
        attributes {
            font_scale: opt Percentage = "fontScale",
            ln_spc_reduction: opt Percentage = "lnSpcReduction",
        }
        children {}
    }
}

choice! {
    /// `EG_TextAutofit`
    pub enum TextAutofit("EG_TextAutofit") {
        NoAutofit(TextAutofitFlag) = "a:noAutofit",
        Normal(NormalAutofit) = "a:normAutofit",
        Shape(TextAutofitFlag) = "a:spAutoFit",
    }
}

complex_type! {
    /// `CT_TextBodyProperties` (`a:bodyPr`).
    pub struct TextBodyProperties {
        attributes {
            rot: opt Angle = "rot",
            spc_first_last_para: opt bool = "spcFirstLastPara",
            vert_overflow: opt TextVertOverflowType = "vertOverflow",
            horz_overflow: opt TextHorzOverflowType = "horzOverflow",
            vert: opt TextVerticalType = "vert",
            wrap: opt TextWrappingType = "wrap",
            l_ins: opt Coordinate32 = "lIns",
            t_ins: opt Coordinate32 = "tIns",
            r_ins: opt Coordinate32 = "rIns",
            b_ins: opt Coordinate32 = "bIns",
            num_col: opt TextColumnCount = "numCol",
            spc_col: opt PositiveCoordinate32 = "spcCol",
            rtl_col: opt bool = "rtlCol",
            from_word_art: opt bool = "fromWordArt",
            anchor: opt TextAnchoringType = "anchor",
            anchor_ctr: opt bool = "anchorCtr",
            force_aa: opt bool = "forceAA",
            upright: opt bool = "upright",
            compat_ln_spc: opt bool = "compatLnSpc",
        }
        children {
            autofit: choice TextAutofit,
            ext_lst: opt ExtensionList = "a:extLst",
        }
    }
}

complex_type! {
    /// `CT_TextListStyle` (`a:lstStyle`).
    pub struct TextListStyle {
        attributes {}
        children {
            def_p_pr: opt TextParagraphProperties = "a:defPPr",
            lvl1_p_pr: opt TextParagraphProperties = "a:lvl1pPr",
            lvl2_p_pr: opt TextParagraphProperties = "a:lvl2pPr",
            lvl3_p_pr: opt TextParagraphProperties = "a:lvl3pPr",
            lvl4_p_pr: opt TextParagraphProperties = "a:lvl4pPr",
            lvl5_p_pr: opt TextParagraphProperties = "a:lvl5pPr",
            lvl6_p_pr: opt TextParagraphProperties = "a:lvl6pPr",
            lvl7_p_pr: opt TextParagraphProperties = "a:lvl7pPr",
            lvl8_p_pr: opt TextParagraphProperties = "a:lvl8pPr",
            lvl9_p_pr: opt TextParagraphProperties = "a:lvl9pPr",
            ext_lst: opt ExtensionList = "a:extLst",
        }
    }
}

complex_type! {
    /// `CT_TextBody` (`c:rich`, `c:txPr`, `p:txBody`).
    ///
    /// A new body holds one empty paragraph.
    pub struct TextBody {
        attributes {}
        children {
            body_pr: req TextBodyProperties = "a:bodyPr",
            lst_style: opt TextListStyle = "a:lstStyle",
            paragraphs: many1 TextParagraph = "a:p",
        }
    }
}

impl TextListStyle {
    /// Properties for outline level `level` (1 to 9).
    pub fn level(&self, level: usize) -> Option<&TextParagraphProperties> {
        let slot = match level {
            1 => &self.lvl1_p_pr,
            2 => &self.lvl2_p_pr,
            3 => &self.lvl3_p_pr,
            4 => &self.lvl4_p_pr,
            5 => &self.lvl5_p_pr,
            6 => &self.lvl6_p_pr,
            7 => &self.lvl7_p_pr,
            8 => &self.lvl8_p_pr,
            9 => &self.lvl9_p_pr,
            _ => return None,
        };
        slot.as_ref()
    }
}

impl TextBody {
    /// Plain text with paragraphs separated by newlines.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(TextParagraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
