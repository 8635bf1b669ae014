//! Data references, caches, text sources and layout shared by chart parts.

use crate::ooxml::charts::types::{
    Double, LayoutMode, LayoutModeValue, LayoutTarget, LayoutTargetValue, UnsignedInt,
};
use crate::ooxml::drawings::ext::ExtensionList;
use crate::ooxml::drawings::text::{RegularTextRun, TextBody, TextRun};
use crate::ooxml::schema::XmlValue;
use crate::{choice, complex_type};

complex_type! {
    /// `CT_NumVal`: one cached numeric point.
    pub struct NumVal {
        attributes {
            idx: req u32 = "idx",
            format_code: opt String = "formatCode",
        }
        children {
            v: req String = "c:v",
        }
    }
}

complex_type! {
    /// `CT_NumData` (`c:numCache`, `c:numLit`).
    pub struct NumData {
        attributes {}
        children {
            format_code: opt String = "c:formatCode",
            pt_count: opt UnsignedInt = "c:ptCount",
            pts: many NumVal = "c:pt",
            ext_lst: opt ExtensionList = "c:extLst",
        }
    }
}

complex_type! {
    /// `CT_NumRef`: a formula with its cached values.
    pub struct NumRef {
        attributes {}
        children {
            f: req String = "c:f",
            num_cache: opt NumData = "c:numCache",
            ext_lst: opt ExtensionList = "c:extLst",
        }
    }
}

complex_type! {
    /// `CT_StrVal`
    pub struct StrVal {
        attributes {
            idx: req u32 = "idx",
        }
        children {
            v: req String = "c:v",
        }
    }
}

complex_type! {
    /// `CT_StrData` (`c:strCache`, `c:strLit`).
    pub struct StrData {
        attributes {}
        children {
            pt_count: opt UnsignedInt = "c:ptCount",
            pts: many StrVal = "c:pt",
            ext_lst: opt ExtensionList = "c:extLst",
        }
    }
}

complex_type! {
    /// `CT_StrRef`
    pub struct StrRef {
        attributes {}
        children {
            f: req String = "c:f",
            str_cache: opt StrData = "c:strCache",
            ext_lst: opt ExtensionList = "c:extLst",
        }
    }
}

choice! {
    /// Category or x-value source of a series.
    pub enum AxData("CT_AxDataSource") {
        NumRef(NumRef) = "c:numRef",
        NumLit(NumData) = "c:numLit",
        StrRef(StrRef) = "c:strRef",
        StrLit(StrData) = "c:strLit",
    }
}

complex_type! {
    /// `CT_AxDataSource` (`c:cat`, `c:xVal`).
    pub struct AxDataSource {
        attributes {}
        children {
            data: choice_req AxData,
        }
    }
}

choice! {
    /// Value source of a series.
    pub enum NumSource("CT_NumDataSource") {
        NumRef(NumRef) = "c:numRef",
        NumLit(NumData) = "c:numLit",
    }
}

complex_type! {
    /// `CT_NumDataSource` (`c:val`, `c:yVal`).
    pub struct NumDataSource {
        attributes {}
        children {
            data: choice_req NumSource,
        }
    }
}

choice! {
    pub enum SeriesText("CT_SerTx") {
        StrRef(StrRef) = "c:strRef",
        Value(String) = "c:v",
    }
}

complex_type! {
    /// `CT_SerTx`: series name.
    pub struct SerTx {
        attributes {}
        children {
            text: choice_req SeriesText,
        }
    }
}

choice! {
    pub enum TitleText("CT_Tx") {
        StrRef(StrRef) = "c:strRef",
        Rich(TextBody) = "c:rich",
    }
}

complex_type! {
    /// `CT_Tx`: title or label text, either referenced or rich.
    pub struct Tx {
        attributes {}
        children {
            text: choice_req TitleText,
        }
    }
}

complex_type! {
    /// `CT_ManualLayout`: position and size as fractions of the chart area.
    pub struct ManualLayout {
        attributes {}
        children {
            layout_target: opt LayoutTarget = "c:layoutTarget",
            x_mode: opt LayoutMode = "c:xMode",
            y_mode: opt LayoutMode = "c:yMode",
            w_mode: opt LayoutMode = "c:wMode",
            h_mode: opt LayoutMode = "c:hMode",
            x: opt Double = "c:x",
            y: opt Double = "c:y",
            w: opt Double = "c:w",
            h: opt Double = "c:h",
            ext_lst: opt ExtensionList = "c:extLst",
        }
    }
}

complex_type! {
    /// `CT_Layout`
    pub struct Layout {
        attributes {}
        children {
            manual_layout: opt ManualLayout = "c:manualLayout",
            ext_lst: opt ExtensionList = "c:extLst",
        }
    }
}

impl NumData {
    /// A literal or cache holding `values` in order.
    pub fn from_values(values: &[f64]) -> Self {
        let mut data = Self::new();
        data.pt_count = Some(UnsignedInt::with_val(values.len() as u32));
        data.pts = values
            .iter()
            .enumerate()
            .map(|(idx, v)| NumVal {
                idx: idx as u32,
                format_code: None,
                v: v.to_xml_value(),
            })
            .collect();
        data
    }

    /// Cached points parsed as numbers, skipping unparsable entries.
    pub fn values(&self) -> Vec<(u32, f64)> {
        self.pts
            .iter()
            .filter_map(|pt| pt.v.trim().parse::<f64>().ok().map(|v| (pt.idx, v)))
            .collect()
    }
}

impl StrData {
    pub fn from_values<S: AsRef<str>>(values: &[S]) -> Self {
        let mut data = Self::new();
        data.pt_count = Some(UnsignedInt::with_val(values.len() as u32));
        data.pts = values
            .iter()
            .enumerate()
            .map(|(idx, v)| StrVal {
                idx: idx as u32,
                v: v.as_ref().to_string(),
            })
            .collect();
        data
    }
}

impl NumRef {
    #[inline]
    pub fn from_formula(f: impl Into<String>) -> Self {
        Self {
            f: f.into(),
            num_cache: None,
            ext_lst: None,
        }
    }

    /// Attach cached values.
    #[inline]
    pub fn with_cache(mut self, values: &[f64]) -> Self {
        self.num_cache = Some(NumData::from_values(values));
        self
    }
}

impl StrRef {
    #[inline]
    pub fn from_formula(f: impl Into<String>) -> Self {
        Self {
            f: f.into(),
            str_cache: None,
            ext_lst: None,
        }
    }

    #[inline]
    pub fn with_cache<S: AsRef<str>>(mut self, values: &[S]) -> Self {
        self.str_cache = Some(StrData::from_values(values));
        self
    }
}

impl SerTx {
    /// A series name given literally.
    pub fn literal(name: impl Into<String>) -> Self {
        Self {
            text: SeriesText::Value(name.into()),
        }
    }
}

impl Tx {
    /// Rich text holding one paragraph with one run.
    pub fn rich(text: &str) -> Self {
        let mut body = TextBody::new();
        body.paragraphs[0]
            .runs
            .push(TextRun::Run(RegularTextRun::with_text(text)));
        Self {
            text: TitleText::Rich(body),
        }
    }

    /// Plain text of a rich body, or the formula of a reference.
    pub fn plain_text(&self) -> String {
        match &self.text {
            TitleText::Rich(body) => body.text(),
            TitleText::StrRef(r) => r.f.clone(),
        }
    }
}

impl ManualLayout {
    /// Inner plot position and size, each a fraction of the chart area.
    pub fn inner(x: f64, y: f64, w: f64, h: f64) -> Self {
        let mut layout = Self::new();
        layout.layout_target = Some(LayoutTarget::with_val(LayoutTargetValue::Inner));
        layout.x_mode = Some(LayoutMode::with_val(LayoutModeValue::Edge));
        layout.y_mode = Some(LayoutMode::with_val(LayoutModeValue::Edge));
        layout.x = Some(Double::with_val(x));
        layout.y = Some(Double::with_val(y));
        layout.w = Some(Double::with_val(w));
        layout.h = Some(Double::with_val(h));
        layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::schema::{
        ReaderOptions, Validate, from_xml_str, from_xml_str_with_options, to_xml_string,
    };

    #[test]
    fn test_num_ref_cache() {
        let xml = r#"<c:val><c:numRef><c:f>Sheet1!$B$2:$B$4</c:f><c:numCache><c:formatCode>General</c:formatCode><c:ptCount val="3"/><c:pt idx="0"><c:v>4.3</c:v></c:pt><c:pt idx="1"><c:v>2.5</c:v></c:pt><c:pt idx="2"><c:v>3.5</c:v></c:pt></c:numCache></c:numRef></c:val>"#;
        let source: NumDataSource = from_xml_str(xml, "c:val").unwrap();
        match &source.data {
            NumSource::NumRef(r) => {
                assert_eq!(r.f, "Sheet1!$B$2:$B$4");
                let cache = r.num_cache.as_ref().unwrap();
                assert_eq!(cache.values(), vec![(0, 4.3), (1, 2.5), (2, 3.5)]);
            },
            other => panic!("unexpected source: {other:?}"),
        }
        assert_eq!(to_xml_string(&source, "c:val").unwrap(), xml);
    }

    #[test]
    fn test_built_cache_matches_values() {
        let r = NumRef::from_formula("Sheet1!$B$2:$B$3").with_cache(&[1.0, 2.5]);
        assert_eq!(
            to_xml_string(&r, "c:numRef").unwrap(),
            concat!(
                "<c:numRef><c:f>Sheet1!$B$2:$B$3</c:f><c:numCache>",
                r#"<c:ptCount val="2"/>"#,
                r#"<c:pt idx="0"><c:v>1</c:v></c:pt><c:pt idx="1"><c:v>2.5</c:v></c:pt>"#,
                "</c:numCache></c:numRef>"
            )
        );
    }

    #[test]
    fn test_category_sources() {
        let xml = r#"<c:cat><c:strLit><c:ptCount val="2"/><c:pt idx="0"><c:v>North</c:v></c:pt><c:pt idx="1"><c:v>South</c:v></c:pt></c:strLit></c:cat>"#;
        let cat: AxDataSource = from_xml_str(xml, "c:cat").unwrap();
        match &cat.data {
            AxData::StrLit(data) => assert_eq!(data.pts[1].v, "South"),
            other => panic!("unexpected source: {other:?}"),
        }
    }

    #[test]
    fn test_series_text_last_alternative_wins() {
        let xml = r#"<c:tx><c:v>Literal</c:v><c:strRef><c:f>Sheet1!$A$1</c:f></c:strRef></c:tx>"#;
        let tx: SerTx = from_xml_str(xml, "c:tx").unwrap();
        assert!(matches!(tx.text, SeriesText::StrRef(_)));

        let strict = ReaderOptions::new().with_strict_choices(true);
        assert!(from_xml_str_with_options::<SerTx>(xml, "c:tx", strict).is_err());
    }

    #[test]
    fn test_rich_title_text() {
        let tx = Tx::rich("Revenue");
        assert_eq!(tx.plain_text(), "Revenue");
        assert!(tx.validate().is_ok());
        let xml = to_xml_string(&tx, "c:tx").unwrap();
        assert_eq!(
            xml,
            "<c:tx><c:rich><a:bodyPr/><a:p><a:r><a:t>Revenue</a:t></a:r></a:p></c:rich></c:tx>"
        );
        assert_eq!(from_xml_str::<Tx>(&xml, "c:tx").unwrap(), tx);
    }

    #[test]
    fn test_manual_layout_order() {
        let layout = ManualLayout::inner(0.1, 0.2, 0.7, 0.6);
        assert_eq!(
            to_xml_string(&layout, "c:manualLayout").unwrap(),
            concat!(
                r#"<c:manualLayout><c:layoutTarget val="inner"/><c:xMode val="edge"/><c:yMode val="edge"/>"#,
                r#"<c:x val="0.1"/><c:y val="0.2"/><c:w val="0.7"/><c:h val="0.6"/></c:manualLayout>"#
            )
        );
    }
}
