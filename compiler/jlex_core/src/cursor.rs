//! Cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer byte-by-byte. End-of-input is
//! detected when the current byte equals the sentinel (`0x00`) and the
//! position has reached the source length. No explicit bounds checking is
//! needed in the common case; the sentinel guarantees safe termination.
//!
//! # Interior Null Bytes
//!
//! A NUL at `pos < source_len` is source content (the scanner reports it as
//! an illegal character); a NUL at `pos >= source_len` is the sentinel.

/// Cursor over a sentinel-terminated source.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], so a scanner can snapshot it before speculative
/// lookahead.
///
/// # Invariant
///
/// `text.as_bytes()[source_len] == 0x00` and every byte after it is `0x00`.
/// This is guaranteed by [`SourceBuffer`](crate::SourceBuffer) construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated text (source + sentinel + padding).
    text: &'a str,
    /// Current read position (byte index into `text`).
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
}

/// Size assertion: &str = 16 (fat pointer), u32 = 4, u32 = 4 => 24 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    pub(crate) fn new(text: &'a str, source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < text.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(
            text.as_bytes()[source_len as usize] == 0,
            "sentinel byte must be 0x00"
        );
        Cursor {
            text,
            pos: 0,
            source_len,
        }
    }

    #[inline]
    fn byte_at(&self, pos: u32) -> u8 {
        self.text.as_bytes()[pos as usize]
    }

    /// Returns the byte at the current position.
    ///
    /// Returns `0x00` at end-of-input (the sentinel). Interior null bytes
    /// also return `0x00`; use [`is_eof()`](Self::is_eof) to distinguish.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Returns the byte one position ahead of current.
    ///
    /// Safe at any position in the source: the sentinel and padding follow it.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    /// Returns the byte two positions ahead of current.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.byte_at(self.pos + 2)
    }

    /// Decode the full character at the current position.
    ///
    /// `None` at end-of-input. An interior NUL decodes as `Some('\0')`.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        if self.is_eof() {
            return None;
        }
        self.remaining().chars().next()
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Returns `true` if the cursor has reached end-of-input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source content (excludes sentinel and padding).
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Extract a source substring.
    ///
    /// # Contract
    ///
    /// `start..end` must lie within the source content and on character
    /// boundaries. The scanner only ever cuts at boundaries it advanced to
    /// with [`advance_char`](Self::advance_char) or over ASCII bytes.
    #[inline]
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.text[start as usize..end as usize]
    }

    /// Extract a source substring from `start` to the current position.
    #[inline]
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Source text from the current position to end-of-input.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        let pos = self.pos.min(self.source_len);
        &self.text[pos as usize..self.source_len as usize]
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false` so the sentinel terminates the loop.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - Everything else (ASCII, continuation, invalid): 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance the cursor past one full UTF-8 character.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.advance_n(width);
    }

    /// Advance past whitespace: space, tab, form feed and line breaks.
    ///
    /// The sentinel is not whitespace, so scanning stops at end-of-input.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(crate::chars::is_whitespace_byte);
    }

    /// Advance to the next line break (`\n` or `\r`) or end-of-input.
    ///
    /// Used to skip comment bodies and to find the end of a broken string.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        let remaining = self.remaining().as_bytes();
        if let Some(offset) = memchr::memchr2(b'\n', b'\r', remaining) {
            self.pos += offset as u32;
        } else {
            self.pos = self.source_len;
        }
    }

    /// Advance past ordinary string content to the next interesting byte.
    /// Returns the byte found, or 0 at end-of-input.
    ///
    /// Interesting bytes: `"`, `\`, `\n`, `\r`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn skip_to_string_delim(&mut self) -> u8 {
        let remaining = self.remaining().as_bytes();
        let primary = memchr::memchr3(b'"', b'\\', b'\n', remaining);
        // Lone CR is a line break too
        let cr = memchr::memchr(b'\r', remaining);

        if let Some(off) = earliest_of(primary, cr) {
            self.pos += off as u32;
            self.current()
        } else {
            self.pos = self.source_len;
            0
        }
    }

    /// Advance to just past the next `*/`, returning `true`, or to
    /// end-of-input returning `false`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_block_comment_body(&mut self) -> bool {
        let remaining = self.remaining().as_bytes();
        if let Some(off) = memchr::memmem::find(remaining, b"*/") {
            self.pos += off as u32 + 2;
            true
        } else {
            self.pos = self.source_len;
            false
        }
    }

    /// Byte offset of the next `byte` at or after the current position,
    /// without moving the cursor.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn find(&self, byte: u8) -> Option<u32> {
        memchr::memchr(byte, self.remaining().as_bytes()).map(|off| self.pos + off as u32)
    }

    /// Move the cursor forward to `pos`.
    #[inline]
    pub fn seek(&mut self, pos: u32) {
        debug_assert!(pos >= self.pos, "cursor never moves backwards");
        debug_assert!(pos <= self.source_len);
        self.pos = pos;
    }
}

/// Returns the earliest of two optional positions.
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}
