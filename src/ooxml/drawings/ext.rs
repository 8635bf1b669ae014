//! Extension lists (`a:extLst`, `c:extLst`).
//!
//! Extension content belongs to vocabularies outside this schema, so the
//! list keeps its inner markup verbatim and writes it back unchanged.

use crate::ooxml::error::Result;
use crate::ooxml::schema::{BytesStart, Validate, ValidationError, XmlElement, XmlReader, XmlWriter};
use std::io::{BufRead, Write};

/// URI of the Office 2016 drawing extension that carries `a16:creationId`.
pub const CREATION_ID_URI: &str = "{FF2B5EF4-FFF2-40B4-BE49-F238E27FC236}";

/// `CT_OfficeArtExtensionList`: opaque extension markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionList {
    /// Inner markup of the list, i.e. the `ext` elements.
    pub raw: String,
}

impl ExtensionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// An extension list holding a single `a16:creationId`.
    pub fn creation_id(id: &str) -> Self {
        Self {
            raw: format!(
                r#"<a:ext uri="{}"><a16:creationId xmlns:a16="http://schemas.microsoft.com/office/drawing/2014/main" id="{}"/></a:ext>"#,
                CREATION_ID_URI, id
            ),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

impl XmlElement for ExtensionList {
    fn encode<W: Write>(&self, w: &mut XmlWriter<W>, name: &str) -> Result<()> {
        w.open(name)?;
        if !self.raw.is_empty() {
            w.raw(&self.raw)?;
        }
        w.close(name)
    }

    fn decode<R: BufRead>(&mut self, r: &mut XmlReader<R>, _start: &BytesStart<'_>) -> Result<()> {
        self.raw = r.capture()?;
        Ok(())
    }
}

impl Validate for ExtensionList {
    fn validate_with_path(&self, _path: &str) -> std::result::Result<(), ValidationError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::schema::{from_xml_str, to_xml_string};

    #[test]
    fn test_extension_markup_survives() {
        let xml = r#"<a:extLst><a:ext uri="{C3380CC4-5D6E-409C-BE32-E72D297353CC}"><c16:uniqueId xmlns:c16="http://schemas.microsoft.com/office/drawing/2014/chart" val="{00000000-0001-0000-0000-000000000000}"/></a:ext></a:extLst>"#;
        let list: ExtensionList = from_xml_str(xml, "a:extLst").unwrap();
        assert!(list.raw.contains("c16:uniqueId"));
        assert_eq!(to_xml_string(&list, "a:extLst").unwrap(), xml);
    }

    #[test]
    fn test_creation_id() {
        let list = ExtensionList::creation_id("{1D5E1A0D-4C6B-4E8C-9C4E-0D7C0E7A2B11}");
        let xml = to_xml_string(&list, "a:extLst").unwrap();
        assert!(xml.starts_with(r#"<a:extLst><a:ext uri="{FF2B5EF4-FFF2-40B4-BE49-F238E27FC236}">"#));
        assert!(xml.ends_with("</a:ext></a:extLst>"));
    }

    #[test]
    fn test_empty_list() {
        let list: ExtensionList = from_xml_str("<a:extLst/>", "a:extLst").unwrap();
        assert!(list.is_empty());
        assert_eq!(to_xml_string(&list, "a:extLst").unwrap(), "<a:extLst/>");
    }
}
