use crate::ooxml::drawings::blip::Blip;
use crate::ooxml::drawings::color::Color;
use crate::ooxml::drawings::ext::ExtensionList;
use crate::ooxml::drawings::simple_types::{
    Coordinate32, TextAlignType, TextAutonumberScheme, TextBulletSizeDecimal,
    TextBulletStartAt, TextFontAlignType, TextFontSize, TextIndent, TextIndentLevel,
    TextMargin, TextSpacingPercentOrString, TextSpacingPoint, TextTabAlignType,
};
use crate::ooxml::drawings::text::run::{TextCharacterProperties, TextFont, TextRun};
use crate::{choice, complex_type};

complex_type! {
    /// `CT_TextSpacingPercent`
    pub struct TextSpacingPercent {
        attributes {
            val: req TextSpacingPercentOrString = "val",
        }
        children {}
    }
}

complex_type! {
    /// `CT_TextSpacingPoint`
    pub struct TextSpacingPoints {
        attributes {
            val: req TextSpacingPoint = "val",
        }
        children {}
    }
}

choice! {
    pub enum TextSpacingValue("CT_TextSpacing") {
        Percent(TextSpacingPercent) = "a:spcPct",
        Points(TextSpacingPoints) = "a:spcPts",
    }
}

complex_type! {
    /// `CT_TextSpacing` (`a:lnSpc`, `a:spcBef`, `a:spcAft`).
    pub struct TextSpacing {
        attributes {}
        children {
            value: choice_req TextSpacingValue,
        }
    }
}

complex_type! {
    /// Marker elements that make a bullet follow the text (`a:buClrTx`,
    /// `a:buSzTx`, `a:buFontTx`).
    pub struct TextBulletFollowText {
        attributes {}
        children {}
    }
}

choice! {
    /// `EG_TextBulletColor`
    pub enum TextBulletColor("EG_TextBulletColor") {
        FollowText(TextBulletFollowText) = "a:buClrTx",
        Color(Color) = "a:buClr",
    }
}

complex_type! {
    /// `CT_TextBulletSizePercent`
    pub struct TextBulletSizePercent {
        attributes {
            val: req TextBulletSizeDecimal = "val",
        }
        children {}
    }
}

complex_type! {
    /// `CT_TextBulletSizePoint`
    pub struct TextBulletSizePoints {
        attributes {
            val: req TextFontSize = "val",
        }
        children {}
    }
}

choice! {
    /// `EG_TextBulletSize`
    pub enum TextBulletSize("EG_TextBulletSize") {
        FollowText(TextBulletFollowText) = "a:buSzTx",
        Percent(TextBulletSizePercent) = "a:buSzPct",
        Points(TextBulletSizePoints) = "a:buSzPts",
    }
}

choice! {
    /// `EG_TextBulletTypeface`
    pub enum TextBulletTypeface("EG_TextBulletTypeface") {
        FollowText(TextBulletFollowText) = "a:buFontTx",
        Font(TextFont) = "a:buFont",
    }
}

complex_type! {
    /// `CT_TextNoBullet`
    pub struct TextNoBullet {
        attributes {}
        children {}
    }
}

complex_type! {
    /// `CT_TextAutonumberBullet`
    pub struct TextAutonumberBullet {
        attributes {
            scheme: req TextAutonumberScheme = "type",
            start_at: opt TextBulletStartAt = "startAt",
        }
        children {}
    }
}

complex_type! {
    /// `CT_TextCharBullet`
    pub struct TextCharBullet {
        attributes {
            character: req String = "char" => "\u{2022}".to_string(),
        }
        children {}
    }
}

complex_type! {
    /// `CT_TextBlipBullet`
    pub struct TextBlipBullet {
        attributes {}
        children {
            blip: req Blip = "a:blip",
        }
    }
}

choice! {
    /// `EG_TextBullet`
    pub enum TextBullet("EG_TextBullet") {
        NoBullet(TextNoBullet) = "a:buNone",
        AutoNumber(TextAutonumberBullet) = "a:buAutoNum",
        Char(TextCharBullet) = "a:buChar",
        Blip(TextBlipBullet) = "a:buBlip",
    }
}

complex_type! {
    /// `CT_TextTabStop`
    pub struct TextTabStop {
        attributes {
            pos: opt Coordinate32 = "pos",
            algn: opt TextTabAlignType = "algn",
        }
        children {}
    }
}

complex_type! {
    /// `CT_TextTabStopList`
    pub struct TextTabStopList {
        attributes {}
        children {
            tabs: many TextTabStop = "a:tab",
        }
    }
}

complex_type! {
    /// `CT_TextParagraphProperties` (`a:pPr`, `a:defPPr`, `a:lvlNpPr`).
    pub struct TextParagraphProperties {
        attributes {
            mar_l: opt TextMargin = "marL",
            mar_r: opt TextMargin = "marR",
            lvl: opt TextIndentLevel = "lvl",
            indent: opt TextIndent = "indent",
            algn: opt TextAlignType = "algn",
            def_tab_sz: opt Coordinate32 = "defTabSz",
            rtl: opt bool = "rtl",
            ea_ln_brk: opt bool = "eaLnBrk",
            font_algn: opt TextFontAlignType = "fontAlgn",
            latin_ln_brk: opt bool = "latinLnBrk",
            hanging_punct: opt bool = "hangingPunct",
        }
        children {
            ln_spc: opt TextSpacing = "a:lnSpc",
            spc_bef: opt TextSpacing = "a:spcBef",
            spc_aft: opt TextSpacing = "a:spcAft",
            bullet_color: choice TextBulletColor,
            bullet_size: choice TextBulletSize,
            bullet_typeface: choice TextBulletTypeface,
            bullet: choice TextBullet,
            tab_lst: opt TextTabStopList = "a:tabLst",
            def_r_pr: opt TextCharacterProperties = "a:defRPr",
            ext_lst: opt ExtensionList = "a:extLst",
        }
    }
}

complex_type! {
    /// `CT_TextParagraph`
    pub struct TextParagraph {
        attributes {}
        children {
            p_pr: opt TextParagraphProperties = "a:pPr",
            runs: choices TextRun,
            end_para_r_pr: opt TextCharacterProperties = "a:endParaRPr",
        }
    }
}

impl TextSpacing {
    /// Spacing in hundredths of a point.
    pub fn points(val: i32) -> Self {
        Self {
            value: TextSpacingValue::Points(TextSpacingPoints {
                val: TextSpacingPoint(val),
            }),
        }
    }
}

impl TextCharBullet {
    pub fn with_char(character: char) -> Self {
        Self {
            character: character.to_string(),
        }
    }
}

impl TextParagraph {
    /// Plain text of the paragraph.
    pub fn text(&self) -> String {
        self.runs.iter().map(TextRun::text).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::schema::{Validate, from_xml_str, to_xml_string};

    #[test]
    fn test_bullet_groups_are_independent() {
        let xml = r#"<a:pPr marL="342900" indent="-342900" algn="l"><a:lnSpc><a:spcPct val="90000"/></a:lnSpc><a:buClr><a:srgbClr val="FF0000"/></a:buClr><a:buSzPct val="100000"/><a:buFont typeface="Arial"/><a:buChar char="•"/></a:pPr>"#;
        let p_pr: TextParagraphProperties = from_xml_str(xml, "a:pPr").unwrap();
        assert!(matches!(p_pr.bullet_color, Some(TextBulletColor::Color(_))));
        assert!(matches!(p_pr.bullet_size, Some(TextBulletSize::Percent(_))));
        assert!(matches!(p_pr.bullet_typeface, Some(TextBulletTypeface::Font(_))));
        match &p_pr.bullet {
            Some(TextBullet::Char(c)) => assert_eq!(c.character, "\u{2022}"),
            other => panic!("unexpected bullet: {other:?}"),
        }
        assert!(p_pr.validate().is_ok());
        assert_eq!(to_xml_string(&p_pr, "a:pPr").unwrap(), xml);
    }

    #[test]
    fn test_spacing_percent_string_form() {
        let xml = r#"<a:spcBef><a:spcPct val="150%"/></a:spcBef>"#;
        let spacing: TextSpacing = from_xml_str(xml, "a:spcBef").unwrap();
        match &spacing.value {
            TextSpacingValue::Percent(p) => {
                assert_eq!(p.val.member_name(), "Text");
            },
            other => panic!("unexpected spacing: {other:?}"),
        }
    }

    #[test]
    fn test_auto_number_start_range() {
        let mut p_pr = TextParagraphProperties::new();
        p_pr.bullet = Some(TextBullet::AutoNumber(TextAutonumberBullet {
            scheme: TextAutonumberScheme::ArabicPeriod,
            start_at: Some(TextBulletStartAt(0)),
        }));
        let err = p_pr.validate().unwrap_err();
        assert_eq!(err.path, "/bullet/AutoNumber/start_at");
    }

    #[test]
    fn test_paragraph_text() {
        let xml = r#"<a:p><a:r><a:t>one</a:t></a:r><a:br/><a:r><a:t>two</a:t></a:r><a:endParaRPr lang="en-US"/></a:p>"#;
        let p: TextParagraph = from_xml_str(xml, "a:p").unwrap();
        assert_eq!(p.text(), "one\ntwo");
        assert_eq!(to_xml_string(&p, "a:p").unwrap(), xml);
    }
}
