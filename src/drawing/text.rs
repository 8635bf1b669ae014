//! Text body, paragraph and run setters.

use crate::common::{Length, RGBColor};
use crate::ooxml::drawings as dml;
use crate::ooxml::drawings::fill::FillProperties;
use crate::ooxml::drawings::simple_types::{
    TextAlignType, TextAutonumberScheme, TextBulletStartAt, TextFontSize, TextIndent,
    TextIndentLevel, TextMargin, saturate_i32,
};
use crate::ooxml::drawings::text::{
    RegularTextRun, TextAutonumberBullet, TextBullet, TextBulletTypeface, TextCharBullet,
    TextFont, TextLineBreak, TextNoBullet, TextRun,
};

/// Setters over paragraph properties (`a:pPr`).
#[derive(Debug)]
pub struct ParagraphProperties<'a> {
    inner: &'a mut dml::TextParagraphProperties,
}

impl<'a> ParagraphProperties<'a> {
    #[inline]
    pub fn new(inner: &'a mut dml::TextParagraphProperties) -> Self {
        Self { inner }
    }

    #[inline]
    pub fn get(&self) -> &dml::TextParagraphProperties {
        self.inner
    }

    /// Bullet with a literal character, replacing any other bullet.
    pub fn set_bullet_char(&mut self, bullet: char) -> &mut Self {
        self.inner.bullet = Some(TextBullet::Char(TextCharBullet::with_char(bullet)));
        self
    }

    /// Font used to draw the bullet character.
    pub fn set_bullet_font(&mut self, typeface: &str) -> &mut Self {
        self.inner.bullet_typeface =
            Some(TextBulletTypeface::Font(TextFont::with_typeface(typeface)));
        self
    }

    /// Automatic numbering, optionally starting somewhere other than 1.
    pub fn set_numbered(
        &mut self,
        scheme: TextAutonumberScheme,
        start_at: Option<i32>,
    ) -> &mut Self {
        self.inner.bullet = Some(TextBullet::AutoNumber(TextAutonumberBullet {
            scheme,
            start_at: start_at.map(TextBulletStartAt),
        }));
        self
    }

    pub fn set_no_bullet(&mut self) -> &mut Self {
        self.inner.bullet = Some(TextBullet::NoBullet(TextNoBullet::new()));
        self
    }

    pub fn set_align(&mut self, align: TextAlignType) -> &mut Self {
        self.inner.algn = Some(align);
        self
    }

    /// Outline level, 0 for the top level.
    pub fn set_level(&mut self, level: u8) -> &mut Self {
        self.inner.lvl = Some(TextIndentLevel(i32::from(level)));
        self
    }

    /// First-line indent relative to the left margin; negative values hang.
    pub fn set_indent(&mut self, indent: Length) -> &mut Self {
        self.inner.indent = Some(TextIndent(saturate_i32(indent.emus())));
        self
    }

    pub fn set_margin_left(&mut self, margin: Length) -> &mut Self {
        self.inner.mar_l = Some(TextMargin(saturate_i32(margin.emus())));
        self
    }
}

/// Setters over character properties (`a:rPr`).
#[derive(Debug)]
pub struct RunProperties<'a> {
    inner: &'a mut dml::TextCharacterProperties,
}

impl<'a> RunProperties<'a> {
    #[inline]
    pub fn new(inner: &'a mut dml::TextCharacterProperties) -> Self {
        Self { inner }
    }

    #[inline]
    pub fn get(&self) -> &dml::TextCharacterProperties {
        self.inner
    }

    /// Font size, stored as whole hundredths of a point (truncated).
    pub fn set_size(&mut self, size: Length) -> &mut Self {
        self.inner.sz = Some(TextFontSize(saturate_i32(size.hundredth_points())));
        self
    }

    pub fn set_bold(&mut self, bold: bool) -> &mut Self {
        self.inner.b = Some(bold);
        self
    }

    pub fn set_italic(&mut self, italic: bool) -> &mut Self {
        self.inner.i = Some(italic);
        self
    }

    /// Latin typeface.
    pub fn set_font(&mut self, typeface: &str) -> &mut Self {
        self.inner.latin = Some(TextFont::with_typeface(typeface));
        self
    }

    pub fn set_solid_fill(&mut self, color: RGBColor) -> &mut Self {
        self.inner.fill = Some(FillProperties::solid(color));
        self
    }

    pub fn set_no_fill(&mut self) -> &mut Self {
        self.inner.fill = Some(FillProperties::none());
        self
    }
}

/// A run just added to a paragraph.
#[derive(Debug)]
pub struct Run<'a> {
    inner: &'a mut TextRun,
}

impl Run<'_> {
    /// Character properties of the run, created on first use.
    pub fn properties(&mut self) -> RunProperties<'_> {
        RunProperties::new(self.inner.properties_mut())
    }

    #[inline]
    pub fn text(&self) -> &str {
        self.inner.text()
    }
}

/// Helpers over one paragraph (`a:p`).
#[derive(Debug)]
pub struct Paragraph<'a> {
    inner: &'a mut dml::TextParagraph,
}

impl<'a> Paragraph<'a> {
    #[inline]
    pub fn new(inner: &'a mut dml::TextParagraph) -> Self {
        Self { inner }
    }

    #[inline]
    pub fn get(&self) -> &dml::TextParagraph {
        self.inner
    }

    /// Paragraph properties, created on first use.
    pub fn properties(&mut self) -> ParagraphProperties<'_> {
        ParagraphProperties::new(
            self.inner
                .p_pr
                .get_or_insert_with(dml::TextParagraphProperties::new),
        )
    }

    /// Append a run of `text` after the existing runs.
    pub fn add_run(&mut self, text: &str) -> Run<'_> {
        let runs = &mut self.inner.runs;
        runs.push(TextRun::Run(RegularTextRun::with_text(text)));
        let idx = runs.len() - 1;
        Run {
            inner: &mut runs[idx],
        }
    }

    /// Append a vertical line break.
    pub fn add_break(&mut self) -> &mut Self {
        self.inner.runs.push(TextRun::Break(TextLineBreak::new()));
        self
    }

    /// Properties applied to the paragraph mark.
    pub fn end_properties(&mut self) -> RunProperties<'_> {
        RunProperties::new(
            self.inner
                .end_para_r_pr
                .get_or_insert_with(dml::TextCharacterProperties::new),
        )
    }
}

/// Helpers over a text body (`a:txBody`, `c:rich`, `c:txPr`).
///
/// A new body already holds one empty paragraph, since the schema requires
/// at least one; reach it through [`TextBody::paragraph`].
#[derive(Debug)]
pub struct TextBody<'a> {
    inner: &'a mut dml::TextBody,
}

impl<'a> TextBody<'a> {
    #[inline]
    pub fn new(inner: &'a mut dml::TextBody) -> Self {
        Self { inner }
    }

    #[inline]
    pub fn get(&self) -> &dml::TextBody {
        self.inner
    }

    /// Append an empty paragraph.
    pub fn add_paragraph(&mut self) -> Paragraph<'_> {
        self.inner.paragraphs.push(dml::TextParagraph::new());
        let idx = self.inner.paragraphs.len() - 1;
        Paragraph::new(&mut self.inner.paragraphs[idx])
    }

    pub fn paragraph(&mut self, idx: usize) -> Option<Paragraph<'_>> {
        self.inner.paragraphs.get_mut(idx).map(Paragraph::new)
    }

    #[inline]
    pub fn paragraph_count(&self) -> usize {
        self.inner.paragraphs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::schema::{Validate, to_xml_string};
    use proptest::prelude::*;

    #[test]
    fn test_paragraph_runs_and_breaks() {
        let mut p = dml::TextParagraph::new();
        let mut para = Paragraph::new(&mut p);
        para.add_run("Hello");
        para.add_break();
        para.add_run("World").properties().set_bold(true);

        assert_eq!(p.text(), "Hello\nWorld");
        assert_eq!(
            to_xml_string(&p, "a:p").unwrap(),
            concat!(
                "<a:p><a:r><a:t>Hello</a:t></a:r><a:br/>",
                r#"<a:r><a:rPr b="true"/><a:t>World</a:t></a:r></a:p>"#
            )
        );
    }

    #[test]
    fn test_bullet_setters() {
        let mut p_pr = dml::TextParagraphProperties::new();
        ParagraphProperties::new(&mut p_pr)
            .set_margin_left(Length::from_emus(342_900))
            .set_indent(Length::from_emus(-342_900))
            .set_bullet_font("Arial")
            .set_bullet_char('-');

        assert_eq!(
            to_xml_string(&p_pr, "a:pPr").unwrap(),
            r#"<a:pPr marL="342900" indent="-342900"><a:buFont typeface="Arial"/><a:buChar char="-"/></a:pPr>"#
        );
        assert!(p_pr.validate().is_ok());
    }

    #[test]
    fn test_numbering_replaces_char_bullet() {
        let mut p_pr = dml::TextParagraphProperties::new();
        let mut props = ParagraphProperties::new(&mut p_pr);
        props.set_bullet_char('-');
        props.set_numbered(TextAutonumberScheme::ArabicPeriod, Some(3));
        props.set_level(1).set_align(TextAlignType::Justified);

        assert_eq!(
            to_xml_string(&p_pr, "a:pPr").unwrap(),
            r#"<a:pPr lvl="1" algn="just"><a:buAutoNum type="arabicPeriod" startAt="3"/></a:pPr>"#
        );

        ParagraphProperties::new(&mut p_pr).set_no_bullet();
        assert!(matches!(p_pr.bullet, Some(TextBullet::NoBullet(_))));
    }

    #[test]
    fn test_level_out_of_range_fails_validation() {
        let mut p_pr = dml::TextParagraphProperties::new();
        ParagraphProperties::new(&mut p_pr).set_level(9);
        assert_eq!(p_pr.validate().unwrap_err().path, "/lvl");
    }

    #[test]
    fn test_run_properties() {
        let mut r_pr = dml::TextCharacterProperties::new();
        RunProperties::new(&mut r_pr)
            .set_size(Length::from_points(12.0))
            .set_italic(true)
            .set_solid_fill(RGBColor::new(0x1F, 0x4E, 0x79))
            .set_font("Calibri");

        assert_eq!(
            to_xml_string(&r_pr, "a:rPr").unwrap(),
            concat!(
                r#"<a:rPr sz="1200" i="true"><a:solidFill><a:srgbClr val="1F4E79"/></a:solidFill>"#,
                r#"<a:latin typeface="Calibri"/></a:rPr>"#
            )
        );
    }

    #[test]
    fn test_font_size_truncates() {
        let mut r_pr = dml::TextCharacterProperties::new();
        RunProperties::new(&mut r_pr).set_size(Length::from_emus(12_799));
        assert_eq!(r_pr.sz, Some(TextFontSize(100)));
    }

    #[test]
    fn test_text_body_paragraphs() {
        let mut body = dml::TextBody::new();
        let mut text = TextBody::new(&mut body);
        assert_eq!(text.paragraph_count(), 1);
        if let Some(mut first) = text.paragraph(0) {
            first.add_run("Title");
        }
        let mut second = text.add_paragraph();
        second.properties().set_bullet_char('-');
        second.add_run("Point");
        assert!(text.paragraph(5).is_none());

        assert_eq!(body.text(), "Title\nPoint");
        assert!(body.validate().is_ok());
    }

    #[test]
    fn test_wrappers_alias_the_same_paragraph() {
        let mut p = dml::TextParagraph::new();
        Paragraph::new(&mut p).add_run("a");
        let run = Paragraph::new(&mut p).add_run("b").text().to_string();
        Paragraph::new(&mut p).end_properties().set_size(Length::from_points(10.0));
        assert_eq!(run, "b");
        assert_eq!(p.text(), "ab");
        assert_eq!(p.end_para_r_pr.as_ref().unwrap().sz, Some(TextFontSize(1_000)));
    }

    proptest! {
        #[test]
        fn font_size_is_emus_over_127(emus in 0i64..50_800_000) {
            let mut r_pr = dml::TextCharacterProperties::new();
            RunProperties::new(&mut r_pr).set_size(Length::from_emus(emus));
            prop_assert_eq!(r_pr.sz, Some(TextFontSize((emus / 127) as i32)));
        }
    }
}
