//! Character classes.
//!
//! The `char` predicates are the public vocabulary. The byte tables back the
//! scanner's hot loops, which only fall back to `char` decoding for non-ASCII
//! input.

/// Identifier start: ASCII letters, `_`, `$`, or any non-ASCII alphabetic.
#[inline]
pub fn is_identifier_start(c: char) -> bool {
    if c.is_ascii() {
        c.is_ascii_alphabetic() || c == '_' || c == '$'
    } else {
        c.is_alphabetic()
    }
}

/// Identifier continuation: the start set plus digits.
#[inline]
pub fn is_identifier_continue(c: char) -> bool {
    if c.is_ascii() {
        IS_IDENT_CONTINUE_TABLE[c as usize]
    } else {
        c.is_alphanumeric()
    }
}

#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Space, tab, form feed, and the line break characters.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0C' | '\n' | '\r')
}

#[inline]
pub fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r')
}

/// 256-entry lookup table for identifier continuation bytes.
/// `true` for a-z, A-Z, 0-9, `_` and `$`. Non-ASCII bytes map to `false`;
/// callers decode the full character for those.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' | b'$'
        );
        i += 1;
    }
    table
};

/// Byte form of [`is_identifier_continue`] for ASCII input.
#[inline]
pub fn is_ident_continue_byte(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

/// Byte form of [`is_whitespace`]. The sentinel `0x00` is not whitespace.
#[inline]
pub fn is_whitespace_byte(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | 0x0C | b'\n' | b'\r')
}
