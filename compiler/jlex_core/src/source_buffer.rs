//! Sentinel-terminated source buffer with a line index.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! so the scanner can detect end-of-input without explicit bounds checks.
//! The total size is rounded up to the next 64-byte boundary, which also
//! gives `peek()` and `peek2()` safe padding near the end.
//!
//! Line starts are computed once at construction. `\n`, `\r\n` and a lone
//! `\r` each end exactly one line.

use crate::{Cursor, Position};

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Immutable source text shared by every scan over it.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
///
/// The padded region is kept as a `String` (NUL is valid UTF-8), so every
/// slice handed out is a plain `&str` borrow.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// `[source..., '\0' sentinel, '\0' padding...]`.
    text: String,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
    /// Byte offset of the first character of each line. Always non-empty.
    line_starts: Vec<u32>,
}

impl SourceBuffer {
    /// Copy `source` into a new sentinel-terminated buffer.
    ///
    /// Sources larger than `u32::MAX` bytes are truncated to the first
    /// `u32::MAX` bytes' worth of whole characters.
    pub fn new(source: &str) -> Self {
        let source = truncate_to_u32(source);
        let source_len = source.len();

        // Round up to next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        let mut text = String::with_capacity(padded_len);
        text.push_str(source);
        text.extend(std::iter::repeat('\0').take(padded_len - source_len));

        #[allow(
            clippy::cast_possible_truncation,
            reason = "truncate_to_u32 bounds source_len"
        )]
        let source_len = source_len as u32;

        SourceBuffer {
            line_starts: compute_line_starts(source.as_bytes()),
            text,
            source_len,
        }
    }

    /// The source text, without sentinel or padding.
    #[inline]
    pub fn source(&self) -> &str {
        &self.text[..self.source_len as usize]
    }

    /// Returns the source bytes (without sentinel or padding).
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.source().as_bytes()
    }

    /// Returns the full buffer including sentinel and cache-line padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.text, self.source_len)
    }

    /// Length of the source content in bytes.
    #[inline]
    pub fn len(&self) -> u32 {
        self.source_len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// The character starting at `offset`.
    ///
    /// `None` is the end marker: returned at or past the end of the source,
    /// and for offsets that fall inside a multi-byte character.
    pub fn at(&self, offset: u32) -> Option<char> {
        self.source().get(offset as usize..)?.chars().next()
    }

    /// Source text in `[start, end)`.
    ///
    /// `end` is clamped to the source length. Ranges that are reversed or
    /// split a character yield `""`.
    pub fn slice(&self, start: u32, end: u32) -> &str {
        let end = end.min(self.source_len) as usize;
        self.source().get(start as usize..end).unwrap_or("")
    }

    /// 1-based `(line, column)` of a byte offset.
    ///
    /// Columns count characters from the line start. Offsets past the end
    /// resolve to the end of the source; offsets inside a multi-byte
    /// character resolve to that character.
    pub fn line_col(&self, offset: u32) -> (u32, u32) {
        let offset = self.floor_char_boundary(offset.min(self.source_len));
        // line_starts[0] == 0, so partition_point is at least 1
        let line_idx = self.line_starts.partition_point(|&s| s <= offset) - 1;
        let line_start = self.line_starts[line_idx] as usize;
        let chars = self.source()[line_start..offset as usize].chars().count();

        #[allow(
            clippy::cast_possible_truncation,
            reason = "line and char counts are bounded by source_len which fits in u32"
        )]
        (line_idx as u32 + 1, chars as u32 + 1)
    }

    /// Full [`Position`] for a byte offset. See [`line_col`](Self::line_col).
    pub fn position(&self, offset: u32) -> Position {
        let offset = self.floor_char_boundary(offset.min(self.source_len));
        let (line, column) = self.line_col(offset);
        Position::new(offset, line, column)
    }

    /// Number of lines. An empty source has one (empty) line, and a
    /// trailing line break opens a final empty line.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "at most one line start per source byte"
    )]
    pub fn line_count(&self) -> u32 {
        self.line_starts.len() as u32
    }

    /// Text of a 1-based line without its line break.
    pub fn line_text(&self, line: u32) -> Option<&str> {
        let idx = (line as usize).checked_sub(1)?;
        let start = *self.line_starts.get(idx)? as usize;
        let end = self
            .line_starts
            .get(idx + 1)
            .map_or(self.source_len as usize, |&s| s as usize);
        let text = &self.source()[start..end];
        let text = text
            .strip_suffix("\r\n")
            .or_else(|| text.strip_suffix('\n'))
            .or_else(|| text.strip_suffix('\r'))
            .unwrap_or(text);
        Some(text)
    }

    fn floor_char_boundary(&self, mut offset: u32) -> u32 {
        while !self.source().is_char_boundary(offset as usize) {
            offset -= 1;
        }
        offset
    }
}

/// Size assertion: `SourceBuffer` should stay within one cache line.
/// String = 24, u32 = 4, Vec<u32> = 24, + 4 padding = 56.
const _: () = assert!(std::mem::size_of::<SourceBuffer>() <= 64);

fn truncate_to_u32(source: &str) -> &str {
    let max = u32::MAX as usize - CACHE_LINE;
    if source.len() <= max {
        return source;
    }
    let mut end = max;
    while !source.is_char_boundary(end) {
        end -= 1;
    }
    &source[..end]
}

/// Offsets of every line start. `\r\n` counts as a single break.
///
/// Uses `memchr2` to jump between break bytes instead of testing each byte.
#[allow(
    clippy::cast_possible_truncation,
    reason = "source length is bounded to u32 by truncate_to_u32"
)]
fn compute_line_starts(source: &[u8]) -> Vec<u32> {
    let mut starts = vec![0u32];
    let mut offset = 0;
    while let Some(found) = memchr::memchr2(b'\n', b'\r', &source[offset..]) {
        let at = offset + found;
        let next = if source[at] == b'\r' && source.get(at + 1) == Some(&b'\n') {
            at + 2
        } else {
            at + 1
        };
        starts.push(next as u32);
        offset = next;
    }
    starts
}
