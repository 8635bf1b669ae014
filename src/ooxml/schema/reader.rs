//! Pull reader used by the decoders.
//!
//! Decoders walk the tree one level at a time: after a start tag has been
//! handed out by [`XmlReader::next_child`], exactly one of `next_child`
//! (until it returns `None`), [`XmlReader::skip`], [`XmlReader::read_text`]
//! or [`XmlReader::capture`] consumes that element. Empty elements are not
//! expanded; the reader remembers that the last start tag had no body.

use crate::common::xml::{resolve_reference, unescape_xml};
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::schema::options::ReaderOptions;
use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};
use std::io::BufRead;
use tracing::trace;

pub struct XmlReader<R: BufRead> {
    reader: Reader<R>,
    buf: Vec<u8>,
    options: ReaderOptions,
    depth: usize,
    pending_empty: bool,
}

impl<R: BufRead> XmlReader<R> {
    pub fn new(inner: R) -> Self {
        Self::with_options(inner, ReaderOptions::default())
    }

    pub fn with_options(inner: R, options: ReaderOptions) -> Self {
        let mut reader = Reader::from_reader(inner);
        reader.config_mut().trim_text(false);
        Self {
            reader,
            buf: Vec::new(),
            options,
            depth: 0,
            pending_empty: false,
        }
    }

    #[inline]
    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    /// Current element nesting depth.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Read up to and including the document's root start tag.
    pub fn read_root(&mut self) -> Result<BytesStart<'static>> {
        loop {
            match self.next_event()? {
                Event::Start(e) => {
                    self.enter()?;
                    return Ok(e);
                },
                Event::Empty(e) => {
                    self.pending_empty = true;
                    return Ok(e);
                },
                Event::Eof => {
                    return Err(OoxmlError::Xml("Document has no root element".to_string()));
                },
                _ => {},
            }
        }
    }

    /// Next child start tag of the current element, or `None` once its end
    /// tag has been consumed. Text and comments between children are ignored.
    pub fn next_child(&mut self) -> Result<Option<BytesStart<'static>>> {
        if std::mem::take(&mut self.pending_empty) {
            return Ok(None);
        }
        loop {
            match self.next_event()? {
                Event::Start(e) => {
                    self.enter()?;
                    return Ok(Some(e));
                },
                Event::Empty(e) => {
                    self.pending_empty = true;
                    return Ok(Some(e));
                },
                Event::End(_) => {
                    self.leave();
                    return Ok(None);
                },
                Event::Eof => return Err(unexpected_eof()),
                _ => {},
            }
        }
    }

    /// Consume and discard the element `start` including its subtree.
    pub fn skip(&mut self, start: &BytesStart<'_>) -> Result<()> {
        trace!(
            element = %String::from_utf8_lossy(start.name().as_ref()),
            "skipping unrecognised element"
        );
        if std::mem::take(&mut self.pending_empty) {
            return Ok(());
        }
        self.buf.clear();
        self.reader.read_to_end_into(start.name(), &mut self.buf)?;
        self.leave();
        Ok(())
    }

    /// Read the character content of the current element, resolving entity
    /// and character references. Whitespace is kept; nested elements are
    /// skipped.
    pub fn read_text(&mut self) -> Result<String> {
        let mut text = String::new();
        if std::mem::take(&mut self.pending_empty) {
            return Ok(text);
        }
        loop {
            match self.next_event()? {
                Event::Text(e) => text.push_str(&unescape_xml(std::str::from_utf8(&e)?)),
                Event::CData(e) => text.push_str(std::str::from_utf8(&e)?),
                Event::GeneralRef(e) => {
                    let name = std::str::from_utf8(&e)?;
                    let resolved = resolve_reference(name).ok_or_else(|| {
                        OoxmlError::Xml(format!("Unknown entity reference '&{};'", name))
                    })?;
                    text.push_str(&resolved);
                },
                Event::Start(e) => {
                    self.buf.clear();
                    self.reader.read_to_end_into(e.name(), &mut self.buf)?;
                },
                Event::End(_) => {
                    self.leave();
                    return Ok(text);
                },
                Event::Eof => return Err(unexpected_eof()),
                _ => {},
            }
        }
    }

    /// Consume the current element and return its inner markup as written.
    pub fn capture(&mut self) -> Result<String> {
        if std::mem::take(&mut self.pending_empty) {
            return Ok(String::new());
        }
        let mut out = Writer::new(Vec::new());
        let mut level = 0usize;
        loop {
            let event = self.next_event()?;
            match &event {
                Event::Start(_) => level += 1,
                Event::End(_) if level == 0 => {
                    self.leave();
                    break;
                },
                Event::End(_) => level -= 1,
                Event::Eof => return Err(unexpected_eof()),
                _ => {},
            }
            out.write_event(event)?;
        }
        String::from_utf8(out.into_inner()).map_err(|e| OoxmlError::Xml(e.to_string()))
    }

    fn next_event(&mut self) -> Result<Event<'static>> {
        self.buf.clear();
        Ok(self.reader.read_event_into(&mut self.buf)?.into_owned())
    }

    fn enter(&mut self) -> Result<()> {
        if self.depth >= self.options.max_depth {
            return Err(OoxmlError::DepthExceeded(self.options.max_depth));
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

fn unexpected_eof() -> OoxmlError {
    OoxmlError::Xml("Unexpected end of document".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(xml: &str) -> XmlReader<&[u8]> {
        XmlReader::new(xml.as_bytes())
    }

    #[test]
    fn test_walks_children_and_empty_elements() {
        let mut r = reader(r#"<?xml version="1.0"?><root><a/><b>text</b></root>"#);
        let root = r.read_root().unwrap();
        assert_eq!(root.local_name().as_ref(), b"root");

        let a = r.next_child().unwrap().unwrap();
        assert_eq!(a.local_name().as_ref(), b"a");
        assert!(r.next_child().unwrap().is_none());

        let b = r.next_child().unwrap().unwrap();
        assert_eq!(r.read_text().unwrap(), "text");
        assert_eq!(b.local_name().as_ref(), b"b");

        assert!(r.next_child().unwrap().is_none());
        assert_eq!(r.depth(), 0);
    }

    #[test]
    fn test_read_text_resolves_references() {
        let mut r = reader("<t> a &amp; b &#x41;&#66; &lt;</t>");
        r.read_root().unwrap();
        assert_eq!(r.read_text().unwrap(), " a & b AB <");
    }

    #[test]
    fn test_skip_consumes_subtree() {
        let mut r = reader("<root><x><y><z/></y></x><keep/></root>");
        r.read_root().unwrap();
        let x = r.next_child().unwrap().unwrap();
        r.skip(&x).unwrap();
        let keep = r.next_child().unwrap().unwrap();
        assert_eq!(keep.local_name().as_ref(), b"keep");
    }

    #[test]
    fn test_capture_returns_inner_markup() {
        let inner = r#"<a:ext uri="{1}"><x:y v="1">t</x:y><x:z/></a:ext>"#;
        let xml = format!("<a:extLst>{}</a:extLst>", inner);
        let mut r = reader(&xml);
        r.read_root().unwrap();
        assert_eq!(r.capture().unwrap(), inner);
    }

    #[test]
    fn test_truncated_document_is_an_error() {
        let mut r = reader("<root><child>");
        r.read_root().unwrap();
        r.next_child().unwrap();
        assert!(matches!(r.next_child(), Err(OoxmlError::Xml(_))));
    }

    #[test]
    fn test_depth_limit() {
        let mut r = XmlReader::with_options(
            "<a><b><c/></b></a>".as_bytes(),
            ReaderOptions::new().with_max_depth(1),
        );
        r.read_root().unwrap();
        assert!(matches!(r.next_child(), Err(OoxmlError::DepthExceeded(1))));
    }
}
