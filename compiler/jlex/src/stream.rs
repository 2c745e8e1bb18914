//! Lookahead over visible tokens.
//!
//! [`TokenStream`] wraps a [`Scanner`] with one token of lookahead, the
//! interface a recursive-descent parser wants: `peek` to decide, `advance`
//! to consume.

use jlex_core::SourceBuffer;
use jlex_diagnostic::Diagnostics;

use crate::{LanguageProfile, Scanner, Token};

/// Visible tokens with single-token lookahead.
///
/// Iterating yields every visible token through `EndOfInput`, then `None`.
pub struct TokenStream<'src, 'p> {
    scanner: Scanner<'src, 'p>,
    peeked: Option<Token<'src>>,
    finished: bool,
}

impl<'src, 'p> TokenStream<'src, 'p> {
    pub fn new(buffer: &'src SourceBuffer, profile: &'p LanguageProfile) -> Self {
        TokenStream {
            scanner: Scanner::new(buffer, profile),
            peeked: None,
            finished: false,
        }
    }

    /// The next token without consuming it.
    pub fn peek(&mut self) -> &Token<'src> {
        let scanner = &mut self.scanner;
        self.peeked.get_or_insert_with(|| scanner.next_token())
    }

    /// Consume and return the next token.
    ///
    /// After `EndOfInput` this keeps returning `EndOfInput`.
    pub fn advance(&mut self) -> Token<'src> {
        match self.peeked.take() {
            Some(tok) => tok,
            None => self.scanner.next_token(),
        }
    }

    /// Diagnostics recorded so far. Lookahead counts as scanned.
    pub fn diagnostics(&self) -> &Diagnostics {
        self.scanner.diagnostics()
    }

    /// Scan whatever is left and return every diagnostic.
    pub fn finish(mut self) -> Diagnostics {
        self.peeked = None;
        while !self.scanner.next_raw_token().is_eof() {}
        self.scanner.into_diagnostics()
    }
}

impl<'src> Iterator for TokenStream<'src, '_> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        if self.finished {
            return None;
        }
        let tok = self.advance();
        if tok.is_eof() {
            self.finished = true;
        }
        Some(tok)
    }
}
