//! HTML entity escaping.

/// Escapes HTML special characters.
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("<script>"), "&lt;script&gt;");
        assert_eq!(escape("\"test\""), "&quot;test&quot;");
        assert_eq!(escape("a & b"), "a &amp; b");
        assert_eq!(escape("it's"), "it&#x27;s");
    }

    #[test]
    fn test_escape_ampersand_first() {
        // An ampersand introduced by another replacement must not be
        // escaped a second time.
        assert_eq!(escape("&<"), "&amp;&lt;");
    }
}
