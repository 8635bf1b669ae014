//! Reader and writer configuration.

/// Options controlling how documents are decoded.
///
/// # Examples
///
/// ```rust
/// use ooxml_dml::ooxml::schema::ReaderOptions;
///
/// let options = ReaderOptions::new()
///     .with_strict_choices(true)
///     .with_max_depth(64);
/// assert!(options.strict_choices);
/// ```
#[derive(Debug, Clone)]
pub struct ReaderOptions {
    /// Reject a second alternative inside one choice group instead of
    /// letting the later alternative replace the earlier one
    pub strict_choices: bool,
    /// Maximum element nesting depth accepted while decoding
    pub max_depth: usize,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            strict_choices: false,
            max_depth: 256,
        }
    }
}

impl ReaderOptions {
    /// Create reader options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether conflicting choice alternatives are an error.
    #[inline]
    pub fn with_strict_choices(mut self, strict: bool) -> Self {
        self.strict_choices = strict;
        self
    }

    /// Set the maximum element nesting depth.
    #[inline]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}

/// Options controlling how documents are encoded.
#[derive(Debug, Clone)]
pub struct WriterOptions {
    /// Emit `<?xml version="1.0" encoding="UTF-8" standalone="yes"?>`
    pub xml_declaration: bool,
    /// Indent nested elements with `(character, count)` per level
    pub indent: Option<(u8, usize)>,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            xml_declaration: true,
            indent: None,
        }
    }
}

impl WriterOptions {
    /// Create writer options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the XML declaration is written.
    #[inline]
    pub fn with_declaration(mut self, declaration: bool) -> Self {
        self.xml_declaration = declaration;
        self
    }

    /// Indent output using `size` copies of `ch` per nesting level.
    #[inline]
    pub fn with_indent(mut self, ch: u8, size: usize) -> Self {
        self.indent = Some((ch, size));
        self
    }
}
