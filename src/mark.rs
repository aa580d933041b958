//! Mark values recognized by the scanner.
//!
//! A [`Mark`] names one marker occurrence: which tag it stands for and
//! whether it opens or closes that tag. Marks carry no position; the
//! scanner pairs them with offsets while they wait on the stack.

use crate::CloseTagStyle;

/// The HTML tag a marker maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// `#` → `<h1>`
    Header,
    /// `_` → `<em>`
    Emphasis,
    /// `__` → `<strong>`
    Strong,
}

impl Tag {
    /// Literal marker text in the source.
    #[inline]
    pub const fn marker(self) -> &'static str {
        match self {
            Tag::Header => "#",
            Tag::Emphasis => "_",
            Tag::Strong => "__",
        }
    }

    /// HTML element name.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Tag::Header => "h1",
            Tag::Emphasis => "em",
            Tag::Strong => "strong",
        }
    }

    /// Length of the marker in bytes.
    #[inline]
    pub const fn marker_len(self) -> usize {
        self.marker().len()
    }
}

/// One recognized marker occurrence.
///
/// Equality is by value: two `Mark`s with the same tag and direction are
/// interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mark {
    /// Tag this marker stands for.
    pub tag: Tag,
    /// `false` for a closing mark.
    pub is_opening: bool,
}

impl Mark {
    /// Header mark. Always opening, never paired.
    pub const HEADER: Mark = Mark::open(Tag::Header);
    pub const EMPHASIS_OPEN: Mark = Mark::open(Tag::Emphasis);
    pub const EMPHASIS_CLOSE: Mark = Mark::close(Tag::Emphasis);
    pub const STRONG_OPEN: Mark = Mark::open(Tag::Strong);
    pub const STRONG_CLOSE: Mark = Mark::close(Tag::Strong);

    /// Create an opening mark.
    #[inline]
    pub const fn open(tag: Tag) -> Self {
        Self {
            tag,
            is_opening: true,
        }
    }

    /// Create a closing mark.
    #[inline]
    pub const fn close(tag: Tag) -> Self {
        Self {
            tag,
            is_opening: false,
        }
    }

    /// Literal marker text (`#`, `_` or `__`).
    #[inline]
    pub const fn mark_text(&self) -> &'static str {
        self.tag.marker()
    }

    /// HTML element name (`h1`, `em` or `strong`).
    #[inline]
    pub const fn tag_name(&self) -> &'static str {
        self.tag.name()
    }

    /// Number of input bytes the marker covers.
    #[inline]
    pub const fn byte_len(&self) -> usize {
        self.tag.marker_len()
    }

    /// Same tag, opposite direction.
    #[inline]
    pub fn is_pair_with(&self, other: &Mark) -> bool {
        self.tag == other.tag && self.is_opening != other.is_opening
    }

    /// Whether this is an opener for `tag`.
    #[inline]
    pub fn opens(&self, tag: Tag) -> bool {
        self.is_opening && self.tag == tag
    }

    /// Write the tag text for this mark into `out`.
    ///
    /// Openers are `<name>`. Closers depend on `style`: `<\name>` or `</name>`.
    #[inline]
    pub fn write_tag(&self, out: &mut Vec<u8>, style: CloseTagStyle) {
        out.push(b'<');
        if !self.is_opening {
            out.push(style.separator());
        }
        out.extend_from_slice(self.tag_name().as_bytes());
        out.push(b'>');
    }

    /// Tag text as an owned string.
    pub fn tag_text(&self, style: CloseTagStyle) -> String {
        let mut out = Vec::with_capacity(self.tag_name().len() + 3);
        self.write_tag(&mut out, style);
        // Tag names and separators are ASCII.
        String::from_utf8(out).unwrap_or_default()
    }
}
