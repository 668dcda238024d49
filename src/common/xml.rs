//! XML text escaping.

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

/// Escape XML special characters.
///
/// # Examples
///
/// ```
/// use norddeck::common::xml::escape_xml;
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// assert_eq!(escape_xml("<tag>\"hi\"</tag>"), "&lt;tag&gt;&quot;hi&quot;&lt;/tag&gt;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain() {
        assert_eq!(escape_xml("Nord Dark Theme"), "Nord Dark Theme");
    }

    #[test]
    fn test_escape_entities() {
        assert_eq!(
            escape_xml("Frost & Aurora <'palette'>"),
            "Frost &amp; Aurora &lt;&apos;palette&apos;&gt;"
        );
    }

    #[test]
    fn test_escape_bullet_text() {
        // The deck's bullet glyph must survive untouched.
        assert_eq!(escape_xml("\u{2022} Point one"), "\u{2022} Point one");
    }
}
