//! HTML escaping for literal text.
//!
//! Fast-path optimized: scans for the first escapable byte with `memchr`
//! and copies clean input straight through. Only inputs that actually
//! contain `&`, `<` or `>` go through the entity encoder.

use memchr::memchr3;

/// Escape HTML text content into output buffer.
///
/// Escapes `<`, `>`, and `&` to their HTML entity equivalents.
///
/// # Example
/// ```
/// use undermark::escape::escape_text_into;
///
/// let mut out = Vec::new();
/// escape_text_into(&mut out, "<script>");
/// assert_eq!(out, b"&lt;script&gt;");
/// ```
#[inline]
pub fn escape_text_into(out: &mut Vec<u8>, input: &str) {
    match first_text_escape(input.as_bytes()) {
        None => out.extend_from_slice(input.as_bytes()),
        Some(pos) => {
            // Escapable bytes are ASCII, so `pos` is a char boundary.
            out.extend_from_slice(&input.as_bytes()[..pos]);
            html_escape::encode_text_to_vec(&input[pos..], out);
        }
    }
}

/// Check if text needs any escaping.
#[inline]
pub fn needs_text_escape(input: &str) -> bool {
    first_text_escape(input.as_bytes()).is_some()
}

#[inline]
fn first_text_escape(input: &[u8]) -> Option<usize> {
    memchr3(b'<', b'>', b'&', input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escape_to_string(input: &str) -> String {
        let mut out = Vec::new();
        escape_text_into(&mut out, input);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_escape_text_basic() {
        assert_eq!(escape_to_string("hello world"), "hello world");
    }

    #[test]
    fn test_escape_text_mixed() {
        assert_eq!(escape_to_string("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
    }

    #[test]
    fn test_escape_text_empty() {
        assert_eq!(escape_to_string(""), "");
    }

    #[test]
    fn test_escape_at_boundaries() {
        assert_eq!(escape_to_string("<"), "&lt;");
        assert_eq!(escape_to_string("&x"), "&amp;x");
        assert_eq!(escape_to_string("x>"), "x&gt;");
    }

    #[test]
    fn test_escape_unicode() {
        assert_eq!(escape_to_string("日本<語>"), "日本&lt;語&gt;");
    }

    #[test]
    fn test_needs_escape() {
        assert!(needs_text_escape("a<b"));
        assert!(!needs_text_escape("plain _text_"));
    }
}
