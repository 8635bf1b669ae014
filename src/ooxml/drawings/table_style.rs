//! Table style part (`a:tblStyleLst`, `ppt/tableStyles.xml`).
//!
//! Only the identity of each style is modelled; the part-by-part formatting
//! inside `a:tblStyle` is kept as markup and written back unchanged.

use crate::complex_type;
use crate::ooxml::drawings::simple_types::Guid;
use crate::ooxml::error::Result;
use crate::ooxml::schema::{
    BytesStart, Namespaces, Validate, ValidationError, XmlDocument, XmlElement, XmlReader,
    XmlValue, XmlWriter, attr, decode_attributes,
};
use std::io::{BufRead, Write};

/// `CT_TableStyle`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableStyle {
    pub style_id: Guid,
    pub style_name: String,
    /// Inner markup (`a:tblBg`, `a:wholeTbl`, `a:band1H`, ...).
    pub body: String,
}

impl TableStyle {
    pub fn new(style_id: Guid, style_name: &str) -> Self {
        Self {
            style_id,
            style_name: style_name.to_string(),
            body: String::new(),
        }
    }
}

impl XmlElement for TableStyle {
    fn encode<W: Write>(&self, w: &mut XmlWriter<W>, name: &str) -> Result<()> {
        w.open(name)?;
        w.attribute("styleId", &self.style_id.to_xml_value());
        w.attribute("styleName", &self.style_name);
        w.raw(&self.body)?;
        w.close(name)
    }

    fn decode<R: BufRead>(&mut self, r: &mut XmlReader<R>, start: &BytesStart<'_>) -> Result<()> {
        decode_attributes(start, |key, value| match key {
            "styleId" => attr::req::read(&mut self.style_id, start, "styleId", value).map(|_| true),
            "styleName" => {
                attr::req::read(&mut self.style_name, start, "styleName", value).map(|_| true)
            },
            _ => Ok(false),
        })?;
        self.body = r.capture()?;
        Ok(())
    }
}

impl Validate for TableStyle {
    fn validate_with_path(&self, path: &str) -> std::result::Result<(), ValidationError> {
        attr::req::check(&self.style_id, path, "style_id")
    }
}

complex_type! {
    /// `CT_TableStyleList`
    pub struct TableStyleList {
        attributes {
            def: req Guid = "def",
        }
        children {
            styles: many TableStyle = "a:tblStyle",
        }
    }
}

impl TableStyleList {
    /// The style named by `def`, if the list contains it.
    pub fn default_style(&self) -> Option<&TableStyle> {
        self.styles.iter().find(|s| s.style_id == self.def)
    }
}

impl XmlDocument for TableStyleList {
    const ROOT: &'static str = "a:tblStyleLst";
    const NAMESPACES: Namespaces = &[(
        "xmlns:a",
        "http://schemas.openxmlformats.org/drawingml/2006/main",
    )];
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Medium Style 2 - Accent 1, the PowerPoint default.
    const MEDIUM_STYLE_2: &str = "{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}";

    #[test]
    fn test_def_pattern() {
        let mut list = TableStyleList::new();
        list.def = Guid::new("not-a-guid");
        let err = list.validate().unwrap_err();
        assert_eq!(err.path, "/def");

        list.def = Guid::new("{12345678-1234-1234-1234-123456789012}");
        assert!(list.validate().is_ok());
    }

    #[test]
    fn test_new_is_valid() {
        assert!(TableStyleList::new().validate().is_ok());
    }

    #[test]
    fn test_empty_part_round_trip() {
        let mut list = TableStyleList::new();
        list.def = Guid::new(MEDIUM_STYLE_2);
        let xml = list.to_xml().unwrap();
        assert_eq!(
            xml,
            concat!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
                r#"<a:tblStyleLst xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" def="{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}"/>"#
            )
        );
        assert_eq!(TableStyleList::from_xml(&xml).unwrap(), list);
    }

    #[test]
    fn test_style_body_is_preserved() {
        let body = r#"<a:wholeTbl><a:tcTxStyle><a:fontRef idx="minor"><a:prstClr val="black"/></a:fontRef></a:tcTxStyle></a:wholeTbl>"#;
        let xml = format!(
            r#"<a:tblStyleLst xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" def="{0}"><a:tblStyle styleId="{0}" styleName="Medium Style 2 - Accent 1">{1}</a:tblStyle></a:tblStyleLst>"#,
            MEDIUM_STYLE_2, body
        );
        let list = TableStyleList::from_xml(&xml).unwrap();
        let style = list.default_style().unwrap();
        assert_eq!(style.style_name, "Medium Style 2 - Accent 1");
        assert_eq!(style.body, body);
        assert!(list.validate().is_ok());

        let written = list.to_xml().unwrap();
        assert!(written.ends_with(&format!("{}</a:tblStyle></a:tblStyleLst>", body)));
    }

    #[test]
    fn test_bad_style_id_path() {
        let mut list = TableStyleList::new();
        list.styles.push(TableStyle::new(Guid::new("{zz}"), "Broken"));
        assert_eq!(list.validate().unwrap_err().path, "/styles[0]/style_id");
    }
}
