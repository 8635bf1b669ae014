use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;

// Use LeftmostLongest to ensure longer entities are matched first (e.g., &amp; instead of &lt;)
static XML_UNESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
        .expect("Failed to build XML unescaper")
});

/// Unescape XML special characters.
///
/// Replaces the five standard XML entities with their corresponding characters.
/// Unknown or malformed entities are left unchanged.
///
/// # Examples
///
/// ```
/// use ooxml_dml::common::xml::unescape_xml;
/// assert_eq!(unescape_xml("&lt;a &amp; b&gt;"), "<a & b>");
/// assert_eq!(unescape_xml("&amp;lt;"), "&lt;"); // &amp; is matched first
/// assert_eq!(unescape_xml("&invalid;"), "&invalid;"); // unknown entity
/// ```
#[inline]
pub fn unescape_xml(s: &str) -> String {
    XML_UNESCAPER.replace_all(s, &["&", "<", ">", "\"", "'"])
}

/// Resolve the body of an entity or character reference (`amp`, `#60`,
/// `#x3C`) to its text.
///
/// Returns `None` for unknown entities and invalid code points.
///
/// # Examples
///
/// ```
/// use ooxml_dml::common::xml::resolve_reference;
/// assert_eq!(resolve_reference("#x41").as_deref(), Some("A"));
/// assert_eq!(resolve_reference("#66").as_deref(), Some("B"));
/// assert_eq!(resolve_reference("lt").as_deref(), Some("<"));
/// assert_eq!(resolve_reference("nbsp"), None);
/// ```
pub fn resolve_reference(name: &str) -> Option<String> {
    if let Some(num) = name.strip_prefix('#') {
        let code = match num.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse().ok()?,
        };
        return char::from_u32(code).map(String::from);
    }

    let entity = format!("&{};", name);
    let resolved = unescape_xml(&entity);
    (resolved != entity).then_some(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unescape_mixed() {
        assert_eq!(unescape_xml("&quot;x&apos; &gt; y"), "\"x' > y");
        assert_eq!(unescape_xml("&amp"), "&amp");
    }

    #[test]
    fn test_resolve_reference_rejects_invalid() {
        assert_eq!(resolve_reference("#xD800"), None);
        assert_eq!(resolve_reference("#xZZ"), None);
        assert_eq!(resolve_reference(""), None);
    }
}
