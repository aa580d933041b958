//! HTML output writer and the tag substitution pass.
//!
//! The substitution pass makes no decisions of its own: it walks the input,
//! honors backslash escapes, and swaps every resolved marker for its tag.

use memchr::memchr3;

use crate::escape;
use crate::mark::Mark;
use crate::scanner::Resolution;
use crate::{CloseTagStyle, Options};

/// HTML output writer with pre-allocated, reusable buffer.
///
/// # Example
/// ```
/// use undermark::HtmlWriter;
///
/// let mut writer = HtmlWriter::with_capacity_for(16);
/// writer.write_str("<em>");
/// writer.write_escaped_text("a < b");
/// writer.write_str("<\\em>");
///
/// assert_eq!(writer.into_string(), "<em>a &lt; b<\\em>");
/// ```
#[derive(Debug, Default)]
pub struct HtmlWriter {
    out: Vec<u8>,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            out: Vec::with_capacity(1024),
        }
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Tags are a few bytes longer than their markers; reserve a quarter extra.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self::with_capacity(input_len + input_len / 4)
    }

    /// Create with explicit capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            out: Vec::with_capacity(capacity),
        }
    }

    /// Write a static string.
    #[inline]
    pub fn write_str(&mut self, s: &'static str) {
        self.out.extend_from_slice(s.as_bytes());
    }

    /// Write a dynamic string without escaping.
    #[inline]
    pub fn write_string(&mut self, s: &str) {
        self.out.extend_from_slice(s.as_bytes());
    }

    /// Write text with HTML escaping.
    #[inline]
    pub fn write_escaped_text(&mut self, text: &str) {
        escape::escape_text_into(&mut self.out, text);
    }

    /// Write the tag for a resolved mark.
    #[inline]
    pub fn write_mark(&mut self, mark: Mark, style: CloseTagStyle) {
        mark.write_tag(&mut self.out, style);
    }

    /// Current output length.
    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    /// Check if output is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Clear output for reuse (keeps capacity).
    #[inline]
    pub fn clear(&mut self) {
        self.out.clear();
    }

    /// Get output as str.
    #[inline]
    pub fn as_str(&self) -> &str {
        // SAFETY: only whole `str` slices and ASCII tags are ever written
        unsafe { std::str::from_utf8_unchecked(&self.out) }
    }

    /// Take ownership of output buffer.
    #[inline]
    pub fn into_vec(self) -> Vec<u8> {
        self.out
    }

    /// Take ownership as String.
    #[inline]
    pub fn into_string(self) -> String {
        // SAFETY: only whole `str` slices and ASCII tags are ever written
        unsafe { String::from_utf8_unchecked(self.out) }
    }

    /// Get mutable reference to internal buffer.
    ///
    /// Use with caution - allows bypassing escaping.
    #[inline]
    pub fn buffer_mut(&mut self) -> &mut Vec<u8> {
        &mut self.out
    }

    #[inline]
    fn write_literal(&mut self, text: &str, options: &Options) {
        if options.escape_html {
            self.write_escaped_text(text);
        } else {
            self.write_string(text);
        }
    }
}

/// Replace resolved markers in `input` with tags, writing the result.
///
/// A backslash emits the following char literally and is itself dropped. A
/// trailing backslash with nothing after it emits nothing.
pub fn substitute(input: &str, resolution: &Resolution, options: &Options, writer: &mut HtmlWriter) {
    let text = input.as_bytes();
    let mut pos = 0;

    while pos < text.len() {
        let special = memchr3(b'\\', b'_', b'#', &text[pos..]).map_or(text.len(), |offset| pos + offset);
        if special > pos {
            writer.write_literal(&input[pos..special], options);
            pos = special;
            continue;
        }

        if text[pos] == b'\\' {
            let escaped_start = pos + 1;
            match input[escaped_start..].chars().next() {
                Some(ch) => {
                    let escaped_end = escaped_start + ch.len_utf8();
                    writer.write_literal(&input[escaped_start..escaped_end], options);
                    pos = escaped_end;
                }
                None => pos = escaped_start,
            }
        } else if let Some(mark) = resolution.get(pos) {
            writer.write_mark(mark, options.close_tag);
            pos += mark.byte_len();
        } else {
            writer.write_literal(&input[pos..pos + 1], options);
            pos += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::scan;

    fn render(input: &str, options: &Options) -> String {
        let mut writer = HtmlWriter::with_capacity_for(input.len());
        substitute(input, &scan(input), options, &mut writer);
        writer.into_string()
    }

    #[test]
    fn test_writer_basics() {
        let mut writer = HtmlWriter::new();
        assert!(writer.is_empty());
        writer.write_str("<h1>");
        writer.write_string("Title");
        assert_eq!(writer.as_str(), "<h1>Title");
        assert_eq!(writer.len(), 9);
        writer.clear();
        assert!(writer.is_empty());
    }

    #[test]
    fn test_write_mark_styles() {
        let mut writer = HtmlWriter::new();
        writer.write_mark(Mark::STRONG_OPEN, CloseTagStyle::Slash);
        writer.write_mark(Mark::STRONG_CLOSE, CloseTagStyle::Slash);
        writer.write_mark(Mark::EMPHASIS_CLOSE, CloseTagStyle::Backslash);
        assert_eq!(writer.into_string(), "<strong></strong><\\em>");
    }

    #[test]
    fn test_substitute_without_marks() {
        let options = Options::default();
        assert_eq!(render("just text", &options), "just text");
        assert_eq!(render("", &options), "");
    }

    #[test]
    fn test_unresolved_markers_copied() {
        let options = Options::default();
        assert_eq!(render("a_b", &options), "a_b");
        assert_eq!(render("__", &options), "__");
    }

    #[test]
    fn test_escape_drops_backslash() {
        let options = Options::default();
        assert_eq!(render("\\a\\b", &options), "ab");
        assert_eq!(render("\\\\", &options), "\\");
    }

    #[test]
    fn test_escape_multibyte_char() {
        let options = Options::default();
        assert_eq!(render("\\ü_x", &options), "ü_x");
    }

    #[test]
    fn test_trailing_backslash_emits_nothing() {
        let options = Options::default();
        assert_eq!(render("abc\\", &options), "abc");
        assert_eq!(render("\\", &options), "");
    }

    #[test]
    fn test_escaped_header_is_literal() {
        let options = Options::default();
        assert_eq!(render("\\#title", &options), "#title");
    }

    #[test]
    fn test_escape_html_option() {
        let options = Options {
            escape_html: true,
            ..Options::default()
        };
        assert_eq!(render("_a<b_ & \\<", &options), "<em>a&lt;b<\\em> &amp; &lt;");
    }
}
