use crate::ooxml::drawings::color::Color;
use crate::ooxml::drawings::ext::ExtensionList;
use crate::ooxml::drawings::fill::FillProperties;
use crate::ooxml::drawings::line::LineProperties;
use crate::ooxml::drawings::simple_types::{
    Guid, Percentage, TextCapsType, TextFontSize, TextNonNegativePoint, TextPoint,
    TextStrikeType, TextUnderlineType,
};
use crate::ooxml::drawings::text::paragraph::TextParagraphProperties;
use crate::{choice, complex_type};

complex_type! {
    /// `CT_TextFont` (`a:latin`, `a:ea`, `a:cs`, `a:sym`, `a:buFont`).
    pub struct TextFont {
        attributes {
            typeface: req String = "typeface",
            panose: opt String = "panose",
            pitch_family: opt i8 = "pitchFamily",
            charset: opt i8 = "charset",
        }
        children {}
    }
}

complex_type! {
    /// `CT_Hyperlink` (`a:hlinkClick`, `a:hlinkMouseOver`).
    pub struct Hyperlink {
        attributes {
            id: opt String = "r:id",
            invalid_url: opt String = "invalidUrl",
            action: opt String = "action",
            tgt_frame: opt String = "tgtFrame",
            tooltip: opt String = "tooltip",
            history: opt bool = "history",
            highlight_click: opt bool = "highlightClick",
            end_snd: opt bool = "endSnd",
        }
        children {
            ext_lst: opt ExtensionList = "a:extLst",
        }
    }
}

complex_type! {
    /// `CT_TextCharacterProperties` (`a:rPr`, `a:defRPr`, `a:endParaRPr`).
    pub struct TextCharacterProperties {
        attributes {
            kumimoji: opt bool = "kumimoji",
            lang: opt String = "lang",
            alt_lang: opt String = "altLang",
            sz: opt TextFontSize = "sz",
            b: opt bool = "b",
            i: opt bool = "i",
            u: opt TextUnderlineType = "u",
            strike: opt TextStrikeType = "strike",
            kern: opt TextNonNegativePoint = "kern",
            cap: opt TextCapsType = "cap",
            spc: opt TextPoint = "spc",
            normalize_h: opt bool = "normalizeH",
            baseline: opt Percentage = "baseline",
            no_proof: opt bool = "noProof",
            dirty: opt bool = "dirty",
            err: opt bool = "err",
            smt_clean: opt bool = "smtClean",
            smt_id: opt u32 = "smtId",
            bmk: opt String = "bmk",
        }
        children {
            ln: opt LineProperties = "a:ln",
            fill: choice FillProperties,
            highlight: opt Color = "a:highlight",
            latin: opt TextFont = "a:latin",
            ea: opt TextFont = "a:ea",
            cs: opt TextFont = "a:cs",
            sym: opt TextFont = "a:sym",
            hlink_click: opt Hyperlink = "a:hlinkClick",
            hlink_mouse_over: opt Hyperlink = "a:hlinkMouseOver",
            ext_lst: opt ExtensionList = "a:extLst",
        }
    }
}

complex_type! {
    /// `CT_RegularTextRun`
    pub struct RegularTextRun {
        attributes {}
        children {
            r_pr: opt TextCharacterProperties = "a:rPr",
            t: req String = "a:t",
        }
    }
}

complex_type! {
    /// `CT_TextLineBreak`
    pub struct TextLineBreak {
        attributes {}
        children {
            r_pr: opt TextCharacterProperties = "a:rPr",
        }
    }
}

complex_type! {
    /// `CT_TextField`: text computed by the host, such as a slide number.
    pub struct TextField {
        attributes {
            id: req Guid = "id",
            kind: opt String = "type",
        }
        children {
            r_pr: opt TextCharacterProperties = "a:rPr",
            p_pr: opt TextParagraphProperties = "a:pPr",
            t: opt String = "a:t",
        }
    }
}

choice! {
    /// `EG_TextRun`
    pub enum TextRun("EG_TextRun") {
        Run(RegularTextRun) = "a:r",
        Break(TextLineBreak) = "a:br",
        Field(TextField) = "a:fld",
    }
}

impl TextFont {
    pub fn with_typeface(typeface: &str) -> Self {
        let mut font = Self::new();
        font.typeface = typeface.to_string();
        font
    }
}

impl RegularTextRun {
    pub fn with_text(text: &str) -> Self {
        Self {
            r_pr: None,
            t: text.to_string(),
        }
    }
}

impl TextRun {
    /// Text contributed to the paragraph; a break counts as a newline.
    pub fn text(&self) -> &str {
        match self {
            Self::Run(r) => &r.t,
            Self::Break(_) => "\n",
            Self::Field(f) => f.t.as_deref().unwrap_or(""),
        }
    }

    /// Character properties of the run, if any.
    pub fn properties(&self) -> Option<&TextCharacterProperties> {
        match self {
            Self::Run(r) => r.r_pr.as_ref(),
            Self::Break(b) => b.r_pr.as_ref(),
            Self::Field(f) => f.r_pr.as_ref(),
        }
    }

    /// Character properties of the run, created empty when missing.
    pub fn properties_mut(&mut self) -> &mut TextCharacterProperties {
        let slot = match self {
            Self::Run(r) => &mut r.r_pr,
            Self::Break(b) => &mut b.r_pr,
            Self::Field(f) => &mut f.r_pr,
        };
        slot.get_or_insert_with(TextCharacterProperties::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::schema::{Validate, from_xml_str, to_xml_string};

    #[test]
    fn test_run_properties() {
        let xml = r#"<a:r><a:rPr lang="en-US" sz="1400" b="1" dirty="0"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="Calibri" panose="020F0502020204030204"/><a:hlinkClick r:id="rId2" tooltip="Docs"/></a:rPr><a:t>Hello &amp; welcome</a:t></a:r>"#;
        let run: RegularTextRun = from_xml_str(xml, "a:r").unwrap();
        assert_eq!(run.t, "Hello & welcome");
        let r_pr = run.r_pr.as_ref().unwrap();
        assert_eq!(r_pr.sz, Some(TextFontSize(1400)));
        assert_eq!(r_pr.b, Some(true));
        assert_eq!(r_pr.latin.as_ref().unwrap().typeface, "Calibri");
        assert_eq!(r_pr.hlink_click.as_ref().unwrap().id.as_deref(), Some("rId2"));
        assert!(run.validate().is_ok());
    }

    #[test]
    fn test_font_size_range() {
        let mut r_pr = TextCharacterProperties::new();
        r_pr.sz = Some(TextFontSize(99));
        let err = r_pr.validate().unwrap_err();
        assert_eq!(err.path, "/sz");
    }

    #[test]
    fn test_field_requires_valid_guid() {
        let xml = r#"<a:fld id="{B6F15528-21DE-4FAA-801E-634DDDAF4B2B}" type="slidenum"><a:t>3</a:t></a:fld>"#;
        let field: TextField = from_xml_str(xml, "a:fld").unwrap();
        assert!(field.validate().is_ok());
        assert_eq!(to_xml_string(&field, "a:fld").unwrap(), xml);

        let mut bad = field.clone();
        bad.id = Guid::new("{b6f15528-21de-4faa-801e-634dddaf4b2b}");
        assert_eq!(bad.validate().unwrap_err().path, "/id");
    }

    #[test]
    fn test_required_text_is_written_when_empty() {
        let run = RegularTextRun::new();
        assert_eq!(to_xml_string(&run, "a:r").unwrap(), "<a:r><a:t></a:t></a:r>");
    }
}
