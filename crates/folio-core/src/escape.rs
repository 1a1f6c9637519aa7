/// Escape text for insertion into HTML markup.
///
/// Replaces `&`, `<`, `>`, `"` and `'` with character references, ampersand
/// first so the later replacements are not re-encoded. No other characters
/// are altered.
pub fn escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::escape;

    #[test]
    fn encodes_all_five_characters() {
        assert_eq!(escape("&<>\"'"), "&amp;&lt;&gt;&quot;&#39;");
    }

    #[test]
    fn leaves_clean_text_untouched() {
        assert_eq!(escape(""), "");
        assert_eq!(escape("plain text, no markup"), "plain text, no markup");
    }

    #[test]
    fn ampersand_is_encoded_first() {
        // An input that already looks like a reference gets its ampersand
        // encoded before '<' handling runs, so no double-encoding occurs.
        assert_eq!(escape("&lt;"), "&amp;lt;");
        assert_eq!(escape("a & b < c"), "a &amp; b &lt; c");
    }

    #[test]
    fn double_escape_is_well_defined() {
        assert_eq!(escape(&escape("&")), "&amp;amp;");
        assert_eq!(escape(&escape("<b>")), "&amp;lt;b&amp;gt;");
    }

    #[test]
    fn markup_renders_inert() {
        let out = escape("<script>alert('x')</script>");
        assert!(!out.contains('<'));
        assert!(!out.contains('>'));
        assert!(!out.contains('\''));
    }
}
