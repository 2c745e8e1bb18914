//! Hand-written scanner producing classified tokens.
//!
//! The scanner walks a sentinel-terminated [`Cursor`] and dispatches on the
//! first byte of each token. Each arm calls a focused method that advances
//! the cursor and returns the token's kind and literal value; a shared
//! epilogue slices the lexeme, advances the tracked [`Position`], and records
//! a diagnostic for error tokens.
//!
//! Lexical errors never stop the scan except an unterminated block comment,
//! which consumes the rest of the input. Every other error token covers a
//! defined range and scanning resumes right after it.

use jlex_core::chars::{is_ident_continue_byte, is_identifier_continue, is_identifier_start};
use jlex_core::{Cursor, Position, SourceBuffer, Span};
use jlex_diagnostic::{Diagnostic, Diagnostics, LexErrorKind};
use tracing::{debug, trace};

use crate::escape::{self, BadEscape};
use crate::{
    Classifier, LanguageProfile, LiteralValue, NumericSuffix, StringRecovery, Symbol, Token,
    TokenKind,
};

/// What the scanner is in the middle of.
///
/// Between calls the state is `Start`, or `Done` once `EndOfInput` has been
/// returned. The state for a token is picked from its first character;
/// numbers move `InNumberInt` → `InNumberFloat` → `InNumberExponent`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScanState {
    Start,
    InIdentifier,
    InNumberInt,
    InNumberFloat,
    InNumberExponent,
    InCharLiteral,
    InStringLiteral,
    InLineComment,
    InBlockComment,
    InOperator,
    Done,
}

type Scanned = (TokenKind, Option<LiteralValue>);

/// Single-use scanner over one source buffer.
pub struct Scanner<'src, 'p> {
    cursor: Cursor<'src>,
    classifier: Classifier<'p>,
    profile: &'p LanguageProfile,
    state: ScanState,
    /// Position of the cursor, advanced over every lexeme.
    pos: Position,
    diagnostics: Diagnostics,
    /// Reason attached to the next malformed-number diagnostic.
    malformed_reason: &'static str,
    token_count: u32,
}

impl<'src, 'p> Scanner<'src, 'p> {
    pub fn new(buffer: &'src SourceBuffer, profile: &'p LanguageProfile) -> Self {
        Scanner {
            cursor: buffer.cursor(),
            classifier: profile.classifier(),
            profile,
            state: ScanState::Start,
            pos: Position::START,
            diagnostics: Diagnostics::new(),
            malformed_reason: "",
            token_count: 0,
        }
    }

    /// The next visible token under the profile.
    ///
    /// Trivia and error tokens are skipped unless the profile surfaces
    /// them; their diagnostics are recorded either way.
    pub fn next_token(&mut self) -> Token<'src> {
        loop {
            let tok = self.next_raw_token();
            if self.profile.is_visible(tok.kind) {
                return tok;
            }
        }
    }

    /// The next token, trivia included.
    ///
    /// Returns `EndOfInput` once the source is exhausted, and keeps
    /// returning it at the same position on every later call.
    pub fn next_raw_token(&mut self) -> Token<'src> {
        if self.state == ScanState::Done {
            return self.end_of_input();
        }
        if self.cursor.is_eof() {
            self.state = ScanState::Done;
            debug!(
                tokens = self.token_count,
                diagnostics = self.diagnostics.len(),
                line = self.pos.line,
                "reached end of input"
            );
            return self.end_of_input();
        }

        let start = self.cursor.pos();
        let (kind, value) = self.dispatch(start);
        self.finish(start, kind, value)
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Position of the next unread character.
    pub fn position(&self) -> Position {
        self.pos
    }

    pub fn profile(&self) -> &'p LanguageProfile {
        self.profile
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }

    fn end_of_input(&self) -> Token<'src> {
        Token::new(TokenKind::EndOfInput, "", Span::point(self.pos), None)
    }

    fn finish(&mut self, start: u32, kind: TokenKind, value: Option<LiteralValue>) -> Token<'src> {
        let lexeme = self.cursor.slice_from(start);
        let start_pos = self.pos;
        self.pos = advance_position(start_pos, lexeme);
        let span = Span::new(start_pos, self.pos);
        self.token_count += 1;

        self.state = ScanState::Start;
        if let TokenKind::Error(category) = kind {
            let diag = self.error_diagnostic(category, span, lexeme);
            self.diagnostics.push(diag);
            if category == LexErrorKind::UnterminatedComment {
                self.state = ScanState::Done;
                debug!(
                    tokens = self.token_count,
                    diagnostics = self.diagnostics.len(),
                    "scan halted by fatal error"
                );
            }
        }

        Token::new(kind, lexeme, span, value)
    }

    #[cold]
    fn error_diagnostic(&self, category: LexErrorKind, span: Span, lexeme: &str) -> Diagnostic {
        match category {
            LexErrorKind::IllegalCharacter => {
                Diagnostic::illegal_character(span, lexeme.chars().next().unwrap_or('\0'))
            }
            LexErrorKind::UnterminatedStringLiteral => Diagnostic::unterminated_string(span),
            LexErrorKind::UnterminatedCharLiteral => Diagnostic::unterminated_char(span),
            LexErrorKind::UnterminatedComment => Diagnostic::unterminated_comment(span),
            LexErrorKind::MalformedNumericLiteral => {
                Diagnostic::malformed_number(span, lexeme, self.malformed_reason)
            }
            LexErrorKind::EmptyCharLiteral => Diagnostic::empty_char(span),
            LexErrorKind::InvalidEscapeSequence => Diagnostic::invalid_escape(span, lexeme),
        }
    }

    // ─── Dispatch ───────────────────────────────────────────────────────

    #[inline]
    fn dispatch(&mut self, start: u32) -> Scanned {
        match self.cursor.current() {
            b' ' | b'\t' | 0x0C | b'\n' | b'\r' => self.whitespace(),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' | b'$' => self.identifier(start),
            b'0'..=b'9' => self.number(start),
            b'.' if self.cursor.peek().is_ascii_digit() => self.number(start),
            b'"' => self.string(start),
            b'\'' => self.char_literal(start),
            b'/' if self.cursor.peek() == b'/' => self.line_comment(),
            b'/' if self.cursor.peek() == b'*' => self.block_comment(),
            0x80..=0xFF => self.non_ascii(start),
            _ => self.symbol_or_illegal(),
        }
    }

    // ─── Whitespace & Comments ──────────────────────────────────────────

    fn whitespace(&mut self) -> Scanned {
        self.cursor.eat_whitespace();
        (TokenKind::Whitespace, None)
    }

    fn line_comment(&mut self) -> Scanned {
        self.state = ScanState::InLineComment;
        self.cursor.advance_n(2);
        // Stops before the line break, which becomes whitespace
        self.cursor.eat_until_newline_or_eof();
        (TokenKind::LineComment, None)
    }

    fn block_comment(&mut self) -> Scanned {
        self.state = ScanState::InBlockComment;
        self.cursor.advance_n(2);
        if self.cursor.eat_block_comment_body() {
            (TokenKind::BlockComment, None)
        } else {
            trace!(line = self.pos.line, "unterminated block comment runs to end of input");
            (TokenKind::Error(LexErrorKind::UnterminatedComment), None)
        }
    }

    // ─── Identifiers ────────────────────────────────────────────────────

    fn identifier(&mut self, start: u32) -> Scanned {
        self.state = ScanState::InIdentifier;
        self.cursor.advance_char();
        self.eat_identifier_continue();

        let text = self.cursor.slice_from(start);
        match self.classifier.keyword(text) {
            Some(kw) => match kw.boolean_value() {
                Some(b) => (TokenKind::BooleanLiteral, Some(LiteralValue::Bool(b))),
                None => (TokenKind::Keyword(kw), None),
            },
            None => (TokenKind::Identifier, None),
        }
    }

    fn non_ascii(&mut self, start: u32) -> Scanned {
        match self.cursor.current_char() {
            Some(c) if is_identifier_start(c) => self.identifier(start),
            _ => self.illegal(),
        }
    }

    /// Whether the cursor sits on an identifier-continue character.
    #[inline]
    fn at_identifier_continue(&self) -> bool {
        let b = self.cursor.current();
        if b < 0x80 {
            is_ident_continue_byte(b)
        } else {
            self.cursor
                .current_char()
                .is_some_and(is_identifier_continue)
        }
    }

    fn eat_identifier_continue(&mut self) {
        loop {
            let b = self.cursor.current();
            if is_ident_continue_byte(b) {
                self.cursor.advance();
            } else if b >= 0x80 && self.at_identifier_continue() {
                self.cursor.advance_char();
            } else {
                break;
            }
        }
    }

    // ─── Symbols ────────────────────────────────────────────────────────

    fn symbol_or_illegal(&mut self) -> Scanned {
        self.state = ScanState::InOperator;
        match self.classifier.longest_symbol(self.cursor.remaining()) {
            Some((sym, len)) => {
                self.cursor.advance_n(len);
                let kind = match sym {
                    Symbol::Op(op) => TokenKind::Operator(op),
                    Symbol::Punct(p) => TokenKind::Punctuation(p),
                };
                (kind, None)
            }
            None => self.illegal(),
        }
    }

    /// One full character that cannot start any token.
    #[cold]
    fn illegal(&mut self) -> Scanned {
        self.cursor.advance_char();
        trace!(line = self.pos.line, column = self.pos.column, "skipping illegal character");
        (TokenKind::Error(LexErrorKind::IllegalCharacter), None)
    }

    // ─── Numeric Literals ───────────────────────────────────────────────

    fn number(&mut self, start: u32) -> Scanned {
        if self.cursor.current() == b'0' {
            match self.cursor.peek() {
                b'x' | b'X' => return self.radix_number(start, 16),
                b'b' | b'B' => return self.radix_number(start, 2),
                _ => {}
            }
        }

        let digit_leading = self.profile.allows_digit_leading_identifiers();
        let mut malformed: Option<&'static str> = None;
        self.state = if self.cursor.current() == b'.' {
            ScanState::InNumberFloat
        } else {
            ScanState::InNumberInt
        };

        loop {
            match self.state {
                ScanState::InNumberInt => {
                    self.eat_decimal_digits();
                    if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
                        self.cursor.advance();
                        self.state = ScanState::InNumberFloat;
                    } else if matches!(self.cursor.current(), b'e' | b'E')
                        && (!digit_leading || self.exponent_digits_follow())
                    {
                        self.state = ScanState::InNumberExponent;
                    } else {
                        break;
                    }
                }
                ScanState::InNumberFloat => {
                    if self.cursor.current() == b'.' {
                        self.cursor.advance();
                    }
                    self.eat_decimal_digits();
                    if matches!(self.cursor.current(), b'e' | b'E') {
                        self.state = ScanState::InNumberExponent;
                    } else {
                        break;
                    }
                }
                ScanState::InNumberExponent => {
                    self.cursor.advance();
                    if matches!(self.cursor.current(), b'+' | b'-') {
                        self.cursor.advance();
                    }
                    if self.cursor.current().is_ascii_digit() {
                        self.eat_decimal_digits();
                    } else {
                        malformed = Some("exponent has no digits");
                    }
                    break;
                }
                _ => break,
            }
        }

        let is_float = self.state != ScanState::InNumberInt;
        let body_end = self.cursor.pos();

        let suffix = match self.classifier.suffix(self.cursor.current()) {
            Some(NumericSuffix::Long) if is_float => None,
            Some(s) if malformed.is_none() => {
                self.cursor.advance();
                Some(s)
            }
            _ => None,
        };

        if self.at_identifier_continue() {
            if digit_leading && !is_float {
                trace!(line = self.pos.line, "digit-leading run scanned as identifier");
                self.state = ScanState::InIdentifier;
                self.eat_identifier_continue();
                return (TokenKind::Identifier, None);
            }
            self.eat_identifier_continue();
            malformed = malformed.or(Some("identifier characters directly follow the number"));
        }

        let body = self.cursor.slice(start, body_end);
        if malformed.is_none() && has_misplaced_underscore(body, 10) {
            malformed = Some("`_` must sit between digits");
        }
        if let Some(reason) = malformed {
            return self.malformed(reason);
        }

        let cleaned = body.replace('_', "");
        let float_suffix = matches!(suffix, Some(NumericSuffix::Float | NumericSuffix::Double));
        if is_float || float_suffix {
            return match cleaned.parse::<f64>() {
                Ok(value) if value.is_finite() => (
                    TokenKind::FloatLiteral,
                    Some(LiteralValue::Float { value, suffix }),
                ),
                _ => self.malformed("floating-point literal is out of range"),
            };
        }

        // A leading zero makes the literal octal
        let parsed = if cleaned.len() > 1 && cleaned.starts_with('0') {
            if cleaned.bytes().any(|b| b > b'7') {
                return self.malformed("digit out of range for an octal literal");
            }
            u64::from_str_radix(&cleaned[1..], 8)
        } else {
            cleaned.parse::<u64>()
        };
        match parsed {
            Ok(value) => (
                TokenKind::IntLiteral,
                Some(LiteralValue::Int { value, suffix }),
            ),
            Err(_) => self.malformed("integer literal does not fit in 64 bits"),
        }
    }

    fn radix_number(&mut self, start: u32, radix: u32) -> Scanned {
        self.state = ScanState::InNumberInt;
        self.cursor.advance_n(2);
        let digits_start = self.cursor.pos();
        self.cursor
            .eat_while(|b| b == b'_' || char::from(b).is_digit(radix));
        let body_end = self.cursor.pos();
        let digits = self.cursor.slice_from(digits_start);

        let mut malformed = None;
        if digits.is_empty() {
            malformed = Some("missing digits after the radix prefix");
        }

        let suffix = match self.classifier.suffix(self.cursor.current()) {
            Some(NumericSuffix::Long) if malformed.is_none() => {
                self.cursor.advance();
                Some(NumericSuffix::Long)
            }
            _ => None,
        };

        if self.at_identifier_continue() {
            let reason = if radix == 2 && self.cursor.current().is_ascii_digit() {
                "digit out of range for a binary literal"
            } else {
                "identifier characters directly follow the number"
            };
            self.eat_identifier_continue();
            malformed = malformed.or(Some(reason));
        }
        if malformed.is_none()
            && has_misplaced_underscore(self.cursor.slice(start + 2, body_end), radix)
        {
            malformed = Some("`_` must sit between digits");
        }
        if let Some(reason) = malformed {
            return self.malformed(reason);
        }

        match u64::from_str_radix(&digits.replace('_', ""), radix) {
            Ok(value) => (
                TokenKind::IntLiteral,
                Some(LiteralValue::Int { value, suffix }),
            ),
            Err(_) => self.malformed("integer literal does not fit in 64 bits"),
        }
    }

    fn eat_decimal_digits(&mut self) {
        self.cursor.eat_while(|b| b.is_ascii_digit() || b == b'_');
    }

    /// `e` followed by digits, optionally signed.
    fn exponent_digits_follow(&self) -> bool {
        match self.cursor.peek() {
            b'+' | b'-' => self.cursor.peek2().is_ascii_digit(),
            b => b.is_ascii_digit(),
        }
    }

    #[cold]
    fn malformed(&mut self, reason: &'static str) -> Scanned {
        trace!(line = self.pos.line, reason, "malformed numeric literal");
        self.malformed_reason = reason;
        (TokenKind::Error(LexErrorKind::MalformedNumericLiteral), None)
    }

    // ─── String & Char Literals ─────────────────────────────────────────

    #[allow(
        clippy::cast_possible_truncation,
        reason = "escape bodies are at most 4 bytes"
    )]
    fn string(&mut self, start: u32) -> Scanned {
        self.state = ScanState::InStringLiteral;
        self.cursor.advance();
        let open = self.cursor;
        loop {
            match self.cursor.skip_to_string_delim() {
                b'"' => {
                    let body = self.cursor.slice_from(start + 1);
                    self.cursor.advance();
                    let mut bad = Vec::new();
                    let value = escape::unescape(body, &mut bad);
                    self.report_bad_escapes(start + 1, &bad);
                    return (TokenKind::StringLiteral, Some(LiteralValue::Str(value)));
                }
                b'\\' => {
                    self.cursor.advance();
                    let len = escape::body_len(self.cursor.remaining());
                    self.cursor.advance_n(len as u32);
                }
                // Line break or end of input
                _ => return self.unterminated_string(start, open),
            }
        }
    }

    #[cold]
    fn unterminated_string(&mut self, start: u32, open: Cursor<'src>) -> Scanned {
        let line_end = self.cursor.pos();
        if self.profile.string_recovery() == StringRecovery::NextSemicolon {
            if let Some(semi) = open.find(b';') {
                self.cursor = open;
                self.cursor.seek(semi);
            }
        }
        trace!(
            line = self.pos.line,
            resume = self.cursor.pos(),
            policy = ?self.profile.string_recovery(),
            "unterminated string literal"
        );

        let body_end = line_end.min(self.cursor.pos());
        let mut bad = Vec::new();
        escape::unescape(self.cursor.slice(start + 1, body_end), &mut bad);
        self.report_bad_escapes(start + 1, &bad);
        (TokenKind::Error(LexErrorKind::UnterminatedStringLiteral), None)
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "escape bodies are at most 4 bytes"
    )]
    fn char_literal(&mut self, start: u32) -> Scanned {
        self.state = ScanState::InCharLiteral;
        self.cursor.advance();

        let value = match self.cursor.current() {
            b'\'' => {
                self.cursor.advance();
                return (TokenKind::Error(LexErrorKind::EmptyCharLiteral), None);
            }
            b'\n' | b'\r' => return self.unterminated_char(),
            0 if self.cursor.is_eof() => return self.unterminated_char(),
            b'\\' => {
                self.cursor.advance();
                let rest = self.cursor.remaining();
                let len = escape::body_len(rest);
                let decoded = escape::decode(rest).map(|(c, _)| c);
                let len = len as u32;
                if decoded.is_none() && len > 0 {
                    let bad = BadEscape {
                        start: 0,
                        end: len + 1,
                    };
                    self.report_bad_escapes(start + 1, &[bad]);
                }
                self.cursor.advance_n(len);
                decoded.unwrap_or('\u{FFFD}')
            }
            _ => {
                let c = self.cursor.current_char().unwrap_or('\u{FFFD}');
                self.cursor.advance_char();
                c
            }
        };

        if self.cursor.current() == b'\'' {
            self.cursor.advance();
            (TokenKind::CharLiteral, Some(LiteralValue::Char(value)))
        } else {
            self.unterminated_char()
        }
    }

    /// The error ends where the closing quote was expected.
    #[cold]
    fn unterminated_char(&mut self) -> Scanned {
        trace!(line = self.pos.line, resume = self.cursor.pos(), "unterminated char literal");
        (TokenKind::Error(LexErrorKind::UnterminatedCharLiteral), None)
    }

    /// Record invalid escapes found in a literal body starting at `body_start`.
    ///
    /// Literal bodies never span lines, so positions are derived from the
    /// token's start position.
    fn report_bad_escapes(&mut self, body_start: u32, bad: &[BadEscape]) {
        for b in bad {
            let from = body_start + b.start;
            let to = body_start + b.end;
            let start = advance_position(self.pos, self.cursor.slice(self.pos.offset, from));
            let text = self.cursor.slice(from, to);
            let end = advance_position(start, text);
            self.diagnostics
                .push(Diagnostic::invalid_escape(Span::new(start, end), text));
        }
    }
}

impl<'src> Iterator for Scanner<'src, '_> {
    type Item = Token<'src>;

    /// Raw tokens, trivia included, ending before `EndOfInput`.
    fn next(&mut self) -> Option<Token<'src>> {
        let tok = self.next_raw_token();
        if tok.is_eof() {
            None
        } else {
            Some(tok)
        }
    }
}

/// Position after `text`, starting at `pos`.
///
/// `\r\n` is one line break, as in [`SourceBuffer::line_col`].
#[allow(
    clippy::cast_possible_truncation,
    reason = "lexemes are slices of a source bounded to u32"
)]
pub(crate) fn advance_position(pos: Position, text: &str) -> Position {
    let mut line = pos.line;
    let mut column = pos.column;
    let bytes = text.as_bytes();
    if !bytes.iter().any(|&b| b == b'\n' || b == b'\r') {
        column += if text.is_ascii() {
            text.len() as u32
        } else {
            text.chars().count() as u32
        };
    } else {
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                // Counted at the '\n'
                '\r' if chars.peek() == Some(&'\n') => {}
                '\n' | '\r' => {
                    line += 1;
                    column = 1;
                }
                _ => column += 1,
            }
        }
    }
    Position::new(pos.offset + text.len() as u32, line, column)
}

/// `_` is only allowed with a digit on both sides.
fn has_misplaced_underscore(body: &str, radix: u32) -> bool {
    let bytes = body.as_bytes();
    let is_digit = |i: usize| bytes.get(i).is_some_and(|&b| char::from(b).is_digit(radix));
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'_' {
            let run_start = i;
            while bytes.get(i) == Some(&b'_') {
                i += 1;
            }
            if run_start == 0 || !is_digit(run_start - 1) || !is_digit(i) {
                return true;
            }
        } else {
            i += 1;
        }
    }
    false
}
