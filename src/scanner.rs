//! Mark scanner.
//!
//! Walks the input once, classifying every `#` and `_` position against an
//! ordered table of candidate shapes, and pairs openers with closers through
//! a LIFO stack. The result is a [`Resolution`]: the positions whose marks
//! were confirmed (header marks, or both halves of a matched pair).
//!
//! Classification order at an underscore, first match wins:
//!
//! 1. strong opener shape (`__` followed by a non-space, non-`_` char)
//! 2. emphasis opener shape (`_` followed by a non-space, non-`_` char)
//! 3. strong closer (`__` after a non-space char, stack top opens strong)
//! 4. emphasis closer (`_` after a non-space char, not followed by `_`,
//!    stack top opens emphasis)
//!
//! When a position has an opener shape and could also close the stack top
//! of the same kind, it is taken as the closer.

use memchr::memchr2;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::mark::{Mark, Tag};

/// Marks confirmed by the scanner, keyed by byte offset.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    marks: FxHashMap<usize, Mark>,
}

impl Resolution {
    fn with_capacity(capacity: usize) -> Self {
        let mut marks = FxHashMap::default();
        marks.reserve(capacity);
        Self { marks }
    }

    #[inline]
    fn insert(&mut self, pos: usize, mark: Mark) {
        self.marks.insert(pos, mark);
    }

    /// Mark starting at `pos`, if one was resolved there.
    #[inline]
    pub fn get(&self, pos: usize) -> Option<Mark> {
        self.marks.get(&pos).copied()
    }

    /// Number of resolved positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Resolved marks in ascending position order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Mark)> + '_ {
        let mut positions: Vec<usize> = self.marks.keys().copied().collect();
        positions.sort_unstable();
        positions.into_iter().map(|pos| (pos, self.marks[&pos]))
    }
}

/// A mark waiting on the stack for its counterpart.
#[derive(Debug, Clone, Copy)]
struct PendingMark {
    mark: Mark,
    pos: usize,
}

/// Inline capacity covers ordinary nesting without touching the heap.
type PairingStack = SmallVec<[PendingMark; 16]>;

/// Scan `input` and resolve its marks.
pub fn scan(input: &str) -> Resolution {
    let text = input.as_bytes();
    let mut resolution = Resolution::with_capacity(8);
    let mut stack = PairingStack::new();
    let mut pos = 0;

    while pos < text.len() {
        pos = match memchr2(b'#', b'_', &text[pos..]) {
            Some(offset) => pos + offset,
            None => break,
        };

        let top = stack.last().map(|pending| pending.mark);
        let Some(mark) = classify(input, pos, top) else {
            pos += 1;
            continue;
        };

        if mark.tag == Tag::Header {
            trace!("header mark at {pos}");
            resolution.insert(pos, mark);
        } else {
            match stack.last().copied() {
                Some(opener) if mark.is_pair_with(&opener.mark) => {
                    trace!("{} pair {}..{pos}", mark.tag_name(), opener.pos);
                    stack.pop();
                    resolution.insert(opener.pos, opener.mark);
                    resolution.insert(pos, mark);
                }
                _ => {
                    trace!("pending {:?} at {pos}", mark);
                    stack.push(PendingMark { mark, pos });
                }
            }
        }

        pos += mark.byte_len();
    }

    trace!(
        "scan done: {} resolved, {} unresolved",
        resolution.len(),
        stack.len()
    );
    resolution
}

/// Decide which mark, if any, starts at `pos`.
fn classify(input: &str, pos: usize, top: Option<Mark>) -> Option<Mark> {
    match input.as_bytes()[pos] {
        b'#' => Some(Mark::HEADER),
        b'_' => {
            let flanks = Flanks::at(input, pos);

            for tag in [Tag::Strong, Tag::Emphasis] {
                if flanks.can_open(tag) {
                    return Some(if flanks.can_close(tag, top) {
                        Mark::close(tag)
                    } else {
                        Mark::open(tag)
                    });
                }
            }

            [Tag::Strong, Tag::Emphasis]
                .into_iter()
                .find(|&tag| flanks.can_close(tag, top))
                .map(Mark::close)
        }
        _ => None,
    }
}

/// Characters around an underscore at some position.
#[derive(Debug, Clone, Copy)]
struct Flanks {
    /// Char before the underscore.
    before: Option<char>,
    /// Whether the underscore is immediately followed by another one.
    doubled: bool,
    /// Char right after the underscore.
    after_single: Option<char>,
    /// Char after a `__` pair starting at the position.
    after_double: Option<char>,
}

impl Flanks {
    fn at(input: &str, pos: usize) -> Self {
        let text = input.as_bytes();
        debug_assert_eq!(text[pos], b'_');

        // The underscore is ASCII, so pos + 1 and pos + 2 (when doubled) are
        // char boundaries.
        let doubled = text.get(pos + 1) == Some(&b'_');
        Self {
            before: input[..pos].chars().next_back(),
            doubled,
            after_single: input[pos + 1..].chars().next(),
            after_double: if doubled {
                input[pos + 2..].chars().next()
            } else {
                None
            },
        }
    }

    /// Opener shape for `tag`: the marker encloses visible content.
    fn can_open(&self, tag: Tag) -> bool {
        match tag {
            Tag::Strong => self.doubled && encloses(self.after_double),
            Tag::Emphasis => encloses(self.after_single),
            Tag::Header => false,
        }
    }

    /// Closer for `tag`: visible content before, right run length, and the
    /// stack top is a matching opener.
    fn can_close(&self, tag: Tag, top: Option<Mark>) -> bool {
        let shaped = match tag {
            Tag::Strong => self.doubled,
            Tag::Emphasis => !self.doubled,
            Tag::Header => false,
        };
        shaped
            && self.before.is_some_and(|c| !c.is_whitespace())
            && top.is_some_and(|mark| mark.opens(tag))
    }
}

#[inline]
fn encloses(next: Option<char>) -> bool {
    next.is_some_and(|c| !c.is_whitespace() && c != '_')
}
