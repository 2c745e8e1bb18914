//! Escape decoding for string and char literal bodies.
//!
//! Recognized: `\b \t \n \f \r \s \" \' \\` and octal `\0` through `\377`.
//! Anything else after a backslash is reported as a [`BadEscape`] and
//! decodes to U+FFFD so the literal still has a value.

/// Byte range of an undecodable escape, relative to the literal body.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct BadEscape {
    pub start: u32,
    pub end: u32,
}

#[inline]
fn simple_escape(c: char) -> Option<char> {
    match c {
        'b' => Some('\u{8}'),
        't' => Some('\t'),
        'n' => Some('\n'),
        'f' => Some('\u{C}'),
        'r' => Some('\r'),
        's' => Some(' '),
        '"' => Some('"'),
        '\'' => Some('\''),
        '\\' => Some('\\'),
        _ => None,
    }
}

/// Byte length of an octal escape body at the start of `rest`: one to three
/// digits, where three are only allowed when the first is `0`..=`3`.
fn octal_len(rest: &[u8]) -> usize {
    let is_octal = |b: Option<&u8>| b.is_some_and(|b| (b'0'..=b'7').contains(b));
    if !is_octal(rest.first()) {
        return 0;
    }
    let max = if rest[0] <= b'3' { 3 } else { 2 };
    let mut len = 1;
    while len < max && is_octal(rest.get(len)) {
        len += 1;
    }
    len
}

/// Byte length of the escape body following a backslash.
///
/// Zero when nothing can follow (end of input or a line break), which the
/// raw scanners treat as the end of the literal.
pub(crate) fn body_len(rest: &str) -> usize {
    match octal_len(rest.as_bytes()) {
        0 => match rest.chars().next() {
            Some(c) if !jlex_core::chars::is_line_break(c) => c.len_utf8(),
            _ => 0,
        },
        n => n,
    }
}

/// Decode the escape body at the start of `rest` (just after the backslash).
///
/// Returns the decoded character and the body length in bytes, or `None`
/// for an unknown escape.
pub(crate) fn decode(rest: &str) -> Option<(char, usize)> {
    let octal = octal_len(rest.as_bytes());
    if octal > 0 {
        let value = u32::from_str_radix(&rest[..octal], 8).ok()?;
        return char::from_u32(value).map(|c| (c, octal));
    }
    let c = rest.chars().next()?;
    simple_escape(c).map(|decoded| (decoded, c.len_utf8()))
}

/// Decode a literal body, collecting bad escapes.
#[allow(
    clippy::cast_possible_truncation,
    reason = "literal bodies are slices of a source bounded to u32"
)]
pub(crate) fn unescape(body: &str, bad: &mut Vec<BadEscape>) -> String {
    if !body.contains('\\') {
        return body.to_owned();
    }

    let mut out = String::with_capacity(body.len());
    let mut rest = body;
    while let Some(i) = rest.find('\\') {
        out.push_str(&rest[..i]);
        let at = body.len() - rest.len() + i;
        let after = &rest[i + 1..];
        match decode(after) {
            Some((c, len)) => {
                out.push(c);
                rest = &after[len..];
            }
            None => {
                let len = body_len(after);
                bad.push(BadEscape {
                    start: at as u32,
                    end: (at + 1 + len) as u32,
                });
                out.push(if len == 0 { '\\' } else { '\u{FFFD}' });
                rest = &after[len..];
            }
        }
    }
    out.push_str(rest);
    out
}
