//! Streaming XML writer used by the encoders.
//!
//! Start tags are held back until the first child or text arrives, so an
//! element without content is written in its empty form (`<a:noFill/>`).

use crate::ooxml::error::Result;
use crate::ooxml::schema::options::WriterOptions;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Write;

/// Namespace declarations attached to a document root.
pub type Namespaces = &'static [(&'static str, &'static str)];

pub struct XmlWriter<W: Write> {
    writer: Writer<W>,
    pending: Option<BytesStart<'static>>,
    namespaces: Option<Namespaces>,
}

impl<W: Write> XmlWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            writer: Writer::new(inner),
            pending: None,
            namespaces: None,
        }
    }

    pub fn with_options(inner: W, options: &WriterOptions) -> Self {
        let writer = match options.indent {
            Some((ch, size)) => Writer::new_with_indent(inner, ch, size),
            None => Writer::new(inner),
        };
        Self {
            writer,
            pending: None,
            namespaces: None,
        }
    }

    /// Write `<?xml version="1.0" encoding="UTF-8" standalone="yes"?>`.
    pub fn declaration(&mut self) -> Result<()> {
        self.writer.write_event(Event::Decl(BytesDecl::new(
            "1.0",
            Some("UTF-8"),
            Some("yes"),
        )))?;
        Ok(())
    }

    /// Attach namespace declarations to the next element opened.
    pub fn declare_namespaces(&mut self, namespaces: Namespaces) {
        self.namespaces = Some(namespaces);
    }

    /// Begin element `name`. Attributes may be added until content is written.
    pub fn open(&mut self, name: &str) -> Result<()> {
        self.flush_pending()?;
        let mut start = BytesStart::new(name.to_string());
        if let Some(namespaces) = self.namespaces.take() {
            for &(key, uri) in namespaces {
                start.push_attribute((key, uri));
            }
        }
        self.pending = Some(start);
        Ok(())
    }

    /// Add an attribute to the element most recently opened.
    pub fn attribute(&mut self, name: &str, value: &str) {
        if let Some(start) = self.pending.as_mut() {
            start.push_attribute((name, value));
        }
    }

    /// End element `name`, using the empty form when it has no content.
    pub fn close(&mut self, name: &str) -> Result<()> {
        match self.pending.take() {
            Some(start) => self.writer.write_event(Event::Empty(start))?,
            None => self.writer.write_event(Event::End(BytesEnd::new(name)))?,
        }
        Ok(())
    }

    /// Write escaped character data.
    pub fn text(&mut self, text: &str) -> Result<()> {
        self.flush_pending()?;
        self.writer.write_event(Event::Text(BytesText::new(text)))?;
        Ok(())
    }

    /// Write already-serialized markup unchanged.
    pub fn raw(&mut self, markup: &str) -> Result<()> {
        self.flush_pending()?;
        if !markup.is_empty() {
            self.writer
                .write_event(Event::Text(BytesText::from_escaped(markup)))?;
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn flush_pending(&mut self) -> Result<()> {
        if let Some(start) = self.pending.take() {
            self.writer.write_event(Event::Start(start))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut XmlWriter<Vec<u8>>) -> Result<()>) -> String {
        let mut w = XmlWriter::new(Vec::new());
        f(&mut w).unwrap();
        String::from_utf8(w.into_inner()).unwrap()
    }

    #[test]
    fn test_empty_element_form() {
        let xml = render(|w| {
            w.open("a:noFill")?;
            w.close("a:noFill")
        });
        assert_eq!(xml, "<a:noFill/>");
    }

    #[test]
    fn test_attributes_and_text_are_escaped() {
        let xml = render(|w| {
            w.open("a:t")?;
            w.attribute("name", "a\"b");
            w.text("x < y & z")?;
            w.close("a:t")
        });
        assert_eq!(xml, r#"<a:t name="a&quot;b">x &lt; y &amp; z</a:t>"#);
    }

    #[test]
    fn test_namespaces_go_on_next_element_only() {
        let xml = render(|w| {
            w.declare_namespaces(&[("xmlns:a", "urn:a")]);
            w.open("a:root")?;
            w.open("a:child")?;
            w.close("a:child")?;
            w.close("a:root")
        });
        assert_eq!(xml, r#"<a:root xmlns:a="urn:a"><a:child/></a:root>"#);
    }

    #[test]
    fn test_raw_markup_passes_through() {
        let xml = render(|w| {
            w.open("a:extLst")?;
            w.raw(r#"<a:ext uri="{X}"><p:v>1&amp;2</p:v></a:ext>"#)?;
            w.close("a:extLst")
        });
        assert_eq!(xml, r#"<a:extLst><a:ext uri="{X}"><p:v>1&amp;2</p:v></a:ext></a:extLst>"#);
    }
}
