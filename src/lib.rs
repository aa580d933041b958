//! undermark: underscore-emphasis Markdown subset to HTML
//!
//! Renders a small inline dialect:
//! - `_text_` → `<em>text<\em>`
//! - `__text__` → `<strong>text<\strong>`
//! - `#` → `<h1>`
//! - `\x` → a literal `x`, for any char `x`
//!
//! # Design Principles
//! - Two passes: a mark scanner that pairs openers and closers on a stack,
//!   then a substitution pass that swaps resolved markers for tags
//! - No regex: byte-level scanning with `memchr` skips
//! - Total: every input renders; unmatched markers stay literal text
//! - No shared state between calls

/// Scanner diagnostics, compiled in with the `trace` feature.
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "trace")]
        log::trace!($($arg)*);
    };
}

pub mod escape;
pub mod mark;
pub mod render;
pub mod scanner;

// Re-export primary types
pub use mark::{Mark, Tag};
pub use render::HtmlWriter;
pub use scanner::{Resolution, scan};

/// How closing tags are spelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CloseTagStyle {
    /// `<\em>`, the historical form.
    #[default]
    Backslash,
    /// `</em>`, conventional HTML.
    Slash,
}

impl CloseTagStyle {
    /// Byte between `<` and the tag name of a closing tag.
    #[inline]
    pub const fn separator(self) -> u8 {
        match self {
            CloseTagStyle::Backslash => b'\\',
            CloseTagStyle::Slash => b'/',
        }
    }
}

/// Rendering options.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    /// Spelling of closing tags.
    pub close_tag: CloseTagStyle,
    /// HTML-escape literal text (`&`, `<`, `>`). Generated tags are never escaped.
    pub escape_html: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            close_tag: CloseTagStyle::Backslash,
            escape_html: false,
        }
    }
}

/// Convert marked-up text to HTML.
///
/// This is the primary API for simple use cases.
///
/// # Example
/// ```
/// let html = undermark::to_html("_inner_ and __bold__");
/// assert_eq!(html, "<em>inner<\\em> and <strong>bold<\\strong>");
/// ```
pub fn to_html(input: &str) -> String {
    to_html_with_options(input, &Options::default())
}

/// Same as [`to_html`].
#[inline]
pub fn render_to_html(input: &str) -> String {
    to_html(input)
}

/// Convert to HTML, writing into a provided buffer.
///
/// This avoids allocation if the buffer has sufficient capacity.
pub fn to_html_into(input: &str, out: &mut Vec<u8>) {
    to_html_into_with_options(input, out, &Options::default());
}

/// Convert to HTML with options.
pub fn to_html_with_options(input: &str, options: &Options) -> String {
    let mut writer = HtmlWriter::with_capacity_for(input.len());
    render_to_writer(input, &mut writer, options);
    writer.into_string()
}

/// Convert to HTML into a provided buffer with options.
pub fn to_html_into_with_options(input: &str, out: &mut Vec<u8>, options: &Options) {
    out.clear();
    out.reserve(input.len() + input.len() / 4);
    let mut writer = HtmlWriter::with_capacity(0);
    // Use the provided buffer directly
    std::mem::swap(writer.buffer_mut(), out);
    render_to_writer(input, &mut writer, options);
    std::mem::swap(writer.buffer_mut(), out);
}

fn render_to_writer(input: &str, writer: &mut HtmlWriter, options: &Options) {
    let resolution = scan(input);
    render::substitute(input, &resolution, options, writer);
}
